use embedded_hal::digital::{Error as _, OutputPin};
use log::debug;

use beacon_core::{BinaryOutput, DeviceError, PinId};

use crate::HalError;

/// An implementation of `BinaryOutput` that drives an `embedded-hal` output pin.
///
/// By default the output is on when the pin is high. Boards that sink current through
/// the load can construct the adapter with [`active_low`] instead.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use embedded_hal::digital::{ErrorType, OutputPin};
/// use beacon_core::{BinaryOutput, PinId};
/// use beacon_hal::PinOutput;
///
/// # struct Gpio(bool);
/// # impl ErrorType for Gpio { type Error = Infallible; }
/// # impl OutputPin for Gpio {
/// #     fn set_low(&mut self) -> Result<(), Infallible> { self.0 = false; Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Infallible> { self.0 = true; Ok(()) }
/// # }
/// # fn main() -> Result<(), beacon_core::DeviceError> {
/// #
/// let mut laser = PinOutput::new(Gpio(false), PinId(23));
/// laser.activate()?;
/// assert!(laser.pin().0);
/// #
/// # Ok(()) }
/// ```
///
/// [`active_low`]: #method.active_low
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PinOutput<P: OutputPin> {
    pin: P,
    id: PinId,
    active_low: bool,
}

impl<P: OutputPin> PinOutput<P> {
    /// Wraps a pin that turns the output on when driven high.
    pub fn new(pin: P, id: PinId) -> Self {
        PinOutput {
            pin,
            id,
            active_low: false,
        }
    }

    /// Wraps a pin that turns the output on when driven low.
    pub fn active_low(pin: P, id: PinId) -> Self {
        PinOutput {
            pin,
            id,
            active_low: true,
        }
    }

    /// Returns a reference to the underlying pin.
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Returns the identifier of the pin.
    pub fn id(&self) -> PinId {
        self.id
    }

    /// Consumes the adapter, returning the underlying pin.
    pub fn into_inner(self) -> P {
        self.pin
    }

    fn drive(&mut self, on: bool) -> Result<(), DeviceError> {
        let high = on != self.active_low;
        debug!("Pin {}: {}", self.id, if high { "high" } else { "low" });
        let result = if high { self.pin.set_high() } else { self.pin.set_low() };
        result.map_err(|e| {
            HalError::Pin {
                high,
                kind: format!("{:?}", e.kind()),
            }
            .into()
        })
    }
}

impl<P: OutputPin> BinaryOutput for PinOutput<P> {
    fn activate(&mut self) -> Result<(), DeviceError> {
        self.drive(true)
    }

    fn deactivate(&mut self) -> Result<(), DeviceError> {
        self.drive(false)
    }
}
