//! Types compared through their public properties.
//!
//! A composite type owns a [`PropertyTable`]: an ordered list of named
//! getters built once and reused for every comparison, hash, and flat
//! serialization of that type.

use std::fmt::Display;
use std::str::FromStr;

use super::Inspect;

type Getter<T> = Box<dyn for<'a> Fn(&'a T) -> Option<&'a dyn Inspect> + Send + Sync>;
type TextReader<T> = Box<dyn Fn(&T) -> Option<String> + Send + Sync>;
type TextWriter<T> = Box<dyn Fn(&mut T, &str) -> Result<(), String> + Send + Sync>;

fn getter<T, F>(f: F) -> Getter<T>
where
    F: for<'a> Fn(&'a T) -> Option<&'a dyn Inspect> + Send + Sync + 'static,
{
    Box::new(f)
}

/// A type with a registered property table.
///
/// ```
/// use std::sync::OnceLock;
/// use structural_eq::composite;
/// use structural_eq::inspect::{Composite, PropertyTable};
///
/// #[derive(Default)]
/// struct Engine {
///     model: String,
///     power: i32,
/// }
///
/// impl Composite for Engine {
///     fn properties() -> &'static PropertyTable<Self> {
///         static TABLE: OnceLock<PropertyTable<Engine>> = OnceLock::new();
///         TABLE.get_or_init(|| {
///             PropertyTable::<Self>::builder()
///                 .scalar("Model", |e| &e.model, |e| &mut e.model)
///                 .scalar("Power", |e| &e.power, |e| &mut e.power)
///                 .build()
///         })
///     }
/// }
///
/// composite!(Engine);
///
/// let a = Engine { model: "W111".into(), power: 550 };
/// let b = Engine { model: "W111".into(), power: 550 };
/// assert!(structural_eq::equals(&a, &b));
/// ```
pub trait Composite: Sized + 'static {
    fn properties() -> &'static PropertyTable<Self>;
}

/// Registers types implementing [`Composite`] with the engine.
#[macro_export]
macro_rules! composite {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::inspect::Inspect for $ty {
            fn kind(&self) -> $crate::inspect::Kind<'_> {
                $crate::inspect::Kind::Composite(self)
            }
        }
    )+};
}

/// Scalar text conversion used by the flat serializer.
pub(crate) struct TextCodec<T> {
    read: TextReader<T>,
    write: TextWriter<T>,
}

/// One named, readable member of a composite type.
pub struct Property<T> {
    name: &'static str,
    get: Getter<T>,
    text: Option<TextCodec<T>>,
}

impl<T> Property<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the property; `None` is a null value.
    pub fn value<'a>(&self, owner: &'a T) -> Option<&'a dyn Inspect> {
        (self.get)(owner)
    }

    /// Whether the property has a text form and so survives flat serialization.
    pub fn is_scalar(&self) -> bool {
        self.text.is_some()
    }

    /// Text form of the value. `Some(None)` is a null scalar; `None` means the
    /// property is not scalar.
    pub(crate) fn read_text(&self, owner: &T) -> Option<Option<String>> {
        self.text.as_ref().map(|codec| (codec.read)(owner))
    }

    /// Parses `text` into the property. `None` means the property is not scalar.
    pub(crate) fn write_text(&self, owner: &mut T, text: &str) -> Option<Result<(), String>> {
        self.text.as_ref().map(|codec| (codec.write)(owner, text))
    }
}

/// Ordered property descriptors of one composite type.
pub struct PropertyTable<T> {
    properties: Vec<Property<T>>,
}

impl<T: 'static> PropertyTable<T> {
    pub fn builder() -> PropertyTableBuilder<T> {
        PropertyTableBuilder {
            properties: Vec::new(),
        }
    }
}

impl<T> PropertyTable<T> {
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property<T>> {
        self.properties.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(Property::name)
    }
}

impl<'t, T> IntoIterator for &'t PropertyTable<T> {
    type Item = &'t Property<T>;
    type IntoIter = std::slice::Iter<'t, Property<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct PropertyTableBuilder<T> {
    properties: Vec<Property<T>>,
}

impl<T: 'static> PropertyTableBuilder<T> {
    /// A non-null member compared structurally but without a text form.
    pub fn field<V: Inspect>(self, name: &'static str, get: fn(&T) -> &V) -> Self {
        self.push(name, getter(move |owner| Some(get(owner) as &dyn Inspect)), None)
    }

    /// A nullable member without a text form.
    pub fn optional<V: Inspect>(self, name: &'static str, get: fn(&T) -> Option<&V>) -> Self {
        self.push(
            name,
            getter(move |owner| get(owner).map(|value| value as &dyn Inspect)),
            None,
        )
    }

    /// A non-null member with a text form.
    pub fn scalar<V>(self, name: &'static str, get: fn(&T) -> &V, get_mut: fn(&mut T) -> &mut V) -> Self
    where
        V: Inspect + Display + FromStr,
        V::Err: Display,
    {
        let codec = TextCodec {
            read: Box::new(move |owner: &T| Some(get(owner).to_string())),
            write: Box::new(move |owner: &mut T, text: &str| -> Result<(), String> {
                *get_mut(owner) = text.parse::<V>().map_err(|e| e.to_string())?;
                Ok(())
            }),
        };
        self.push(name, getter(move |owner| Some(get(owner) as &dyn Inspect)), Some(codec))
    }

    /// A nullable member with a text form. Null reads and writes as empty text.
    pub fn optional_scalar<V>(
        self,
        name: &'static str,
        get: fn(&T) -> &Option<V>,
        get_mut: fn(&mut T) -> &mut Option<V>,
    ) -> Self
    where
        V: Inspect + Display + FromStr,
        V::Err: Display,
    {
        let codec = TextCodec {
            read: Box::new(move |owner: &T| get(owner).as_ref().map(ToString::to_string)),
            write: Box::new(move |owner: &mut T, text: &str| -> Result<(), String> {
                *get_mut(owner) = if text.is_empty() {
                    None
                } else {
                    Some(text.parse::<V>().map_err(|e| e.to_string())?)
                };
                Ok(())
            }),
        };
        self.push(
            name,
            getter(move |owner| get(owner).as_ref().map(|value| value as &dyn Inspect)),
            Some(codec),
        )
    }

    pub fn build(self) -> PropertyTable<T> {
        PropertyTable {
            properties: self.properties,
        }
    }

    fn push(mut self, name: &'static str, get: Getter<T>, text: Option<TextCodec<T>>) -> Self {
        debug_assert!(
            self.properties.iter().all(|p| p.name != name),
            "duplicate property {name}"
        );
        self.properties.push(Property { name, get, text });
        self
    }
}

/// A property name paired with its value on one instance.
#[derive(Clone, Copy)]
pub struct Member<'a> {
    pub name: &'static str,
    pub value: Option<&'a dyn Inspect>,
}

/// Object-safe view over a composite's members, in table order.
pub trait Members {
    fn members(&self) -> Vec<Member<'_>>;

    fn member_count(&self) -> usize;
}

impl<T: Composite> Members for T {
    fn members(&self) -> Vec<Member<'_>> {
        T::properties()
            .iter()
            .map(|property| Member {
                name: property.name(),
                value: property.value(self),
            })
            .collect()
    }

    fn member_count(&self) -> usize {
        T::properties().len()
    }
}
