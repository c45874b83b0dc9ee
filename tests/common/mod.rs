#![allow(dead_code)]

use std::sync::OnceLock;
use std::time::Duration;

use structural_eq::cache::Expiration;
use structural_eq::inspect::{Composite, PropertyTable};
use structural_eq::{composite, equatable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SomeEnum {
    #[default]
    One,
    Two,
}

equatable!(SomeEnum);

/// Value struct: compared as a whole through its own `PartialEq`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SomeStruct {
    pub value: i32,
    pub text: String,
}

equatable!(SomeStruct);

#[derive(Debug, Clone, Default)]
pub struct SimpleClass {
    pub id: i32,
    pub name: Option<String>,
    pub some_enum: SomeEnum,
}

impl SimpleClass {
    pub fn new(id: i32, name: &str, some_enum: SomeEnum) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            some_enum,
        }
    }
}

impl Composite for SimpleClass {
    fn properties() -> &'static PropertyTable<Self> {
        static TABLE: OnceLock<PropertyTable<SimpleClass>> = OnceLock::new();
        TABLE.get_or_init(|| {
            PropertyTable::<Self>::builder()
                .field("Id", |s| &s.id)
                .optional("Name", |s| s.name.as_ref())
                .field("SomeEnum", |s| &s.some_enum)
                .build()
        })
    }
}

composite!(SimpleClass);

#[derive(Debug, Clone, Default)]
pub struct ComplexClass {
    pub id: i32,
    pub name: String,
    pub value1: f64,
    pub value2: f32,
    pub simple: Option<SimpleClass>,
    pub some_struct: SomeStruct,
    pub arr: [i32; 3],
    pub list: Vec<i32>,
}

impl Composite for ComplexClass {
    fn properties() -> &'static PropertyTable<Self> {
        static TABLE: OnceLock<PropertyTable<ComplexClass>> = OnceLock::new();
        TABLE.get_or_init(|| {
            PropertyTable::<Self>::builder()
                .field("Id", |c| &c.id)
                .field("Name", |c| &c.name)
                .field("Value1", |c| &c.value1)
                .field("Value2", |c| &c.value2)
                .optional("Simple", |c| c.simple.as_ref())
                .field("SomeStruct", |c| &c.some_struct)
                .field("Arr", |c| &c.arr)
                .field("List", |c| &c.list)
                .build()
        })
    }
}

composite!(ComplexClass);

pub fn complex(list: Vec<i32>) -> ComplexClass {
    ComplexClass {
        id: 1,
        name: "str1".into(),
        value1: 1.0001,
        value2: 1.1,
        simple: Some(SimpleClass::new(2, "name", SomeEnum::Two)),
        some_struct: SomeStruct::default(),
        arr: [1, 2, 3],
        list,
    }
}

/// Composite holding a sequence of sequences.
#[derive(Debug, Clone, Default)]
pub struct Matrix {
    pub rows: Vec<Vec<i32>>,
}

impl Composite for Matrix {
    fn properties() -> &'static PropertyTable<Self> {
        static TABLE: OnceLock<PropertyTable<Matrix>> = OnceLock::new();
        TABLE.get_or_init(|| PropertyTable::<Self>::builder().field("Rows", |m| &m.rows).build())
    }
}

composite!(Matrix);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub model: String,
    pub manufacturer: String,
    pub power: i32,
}

impl Composite for Engine {
    fn properties() -> &'static PropertyTable<Self> {
        static TABLE: OnceLock<PropertyTable<Engine>> = OnceLock::new();
        TABLE.get_or_init(|| {
            PropertyTable::<Self>::builder()
                .scalar("Model", |e| &e.model, |e| &mut e.model)
                .scalar("Manufacturer", |e| &e.manufacturer, |e| &mut e.manufacturer)
                .scalar("Power", |e| &e.power, |e| &mut e.power)
                .build()
        })
    }
}

composite!(Engine);

impl Expiration for Engine {
    const EXPIRATION: Option<Duration> = Some(Duration::from_secs(5));
}

pub fn mercedes() -> Engine {
    Engine {
        model: "W111".into(),
        manufacturer: "Mercedes".into(),
        power: 550,
    }
}

/// Same shape as [`Engine`] but without a declared expiration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gauge {
    pub label: String,
}

impl Composite for Gauge {
    fn properties() -> &'static PropertyTable<Self> {
        static TABLE: OnceLock<PropertyTable<Gauge>> = OnceLock::new();
        TABLE.get_or_init(|| {
            PropertyTable::<Self>::builder()
                .scalar("Label", |g| &g.label, |g| &mut g.label)
                .build()
        })
    }
}

impl Expiration for Gauge {}
