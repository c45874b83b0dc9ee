use std::time::Duration;

/// Per-type cache lifetime.
///
/// ```
/// use std::time::Duration;
/// use structural_eq::cache::{expiration_time, Expiration};
///
/// struct Quote;
/// impl Expiration for Quote {
///     const EXPIRATION: Option<Duration> = Some(Duration::from_secs(5));
/// }
///
/// struct Uncached;
/// impl Expiration for Uncached {}
///
/// assert_eq!(expiration_time::<Quote>(), Duration::from_secs(5));
/// assert_eq!(expiration_time::<Uncached>(), Duration::ZERO);
/// ```
pub trait Expiration {
    const EXPIRATION: Option<Duration> = None;
}

/// The type's expiration, or zero when it declares none.
pub fn expiration_time<T: Expiration>() -> Duration {
    T::EXPIRATION.unwrap_or(Duration::ZERO)
}
