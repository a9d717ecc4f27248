use derive_more::Display;

/// Identifier of the hardware pin an output is wired to.
///
/// Only used to describe the wiring; platform setup code is responsible for
/// turning it into an actual pin.
///
/// # Examples
///
/// ```
/// use beacon_core::PinId;
///
/// let pin = PinId(18);
/// assert_eq!("GPIO18", format!("GPIO{}", pin));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct PinId(pub u8);
