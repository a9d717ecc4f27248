use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::thread;
use std::time::Duration;

use crate::Rgbw;

/// Error type returned by device capabilities.
pub type DeviceError = Box<dyn Error + Send + Sync>;

/// A single on/off output, such as a laser diode or plain LED on a GPIO pin.
///
/// Both methods are expected to be idempotent and to take effect before returning.
///
/// `PinOutput` from `beacon-hal` adapts any `embedded-hal` output pin, and
/// `VirtualLamp` from `beacon-testing` records calls in memory.
///
/// # Examples
///
/// ```
/// use beacon_core::{BinaryOutput, DeviceError};
///
/// #[derive(Default)]
/// struct Flag(bool);
///
/// impl BinaryOutput for Flag {
///     fn activate(&mut self) -> Result<(), DeviceError> {
///         self.0 = true;
///         Ok(())
///     }
///
///     fn deactivate(&mut self) -> Result<(), DeviceError> {
///         self.0 = false;
///         Ok(())
///     }
/// }
///
/// # fn main() -> Result<(), DeviceError> {
/// let mut flag = Flag::default();
/// flag.activate()?;
/// assert!(flag.0);
/// # Ok(()) }
/// ```
pub trait BinaryOutput {
    /// Turns the output on.
    fn activate(&mut self) -> Result<(), DeviceError>;

    /// Turns the output off.
    fn deactivate(&mut self) -> Result<(), DeviceError>;
}

/// A fixed-size array of RGBW pixels that are always set to one color together.
///
/// Changes made by [`set_color`] are not visible until [`show`] commits them to the hardware.
///
/// [`set_color`]: #tymethod.set_color
/// [`show`]: #tymethod.show
pub trait ColorOutput {
    /// Number of pixels in the array.
    fn pixel_count(&self) -> usize;

    /// Brightness the output applies to every color it shows, or `None` if colors are
    /// shown unscaled.
    fn brightness(&self) -> Option<u8> {
        None
    }

    /// Sets every pixel to `color` without committing.
    fn set_color(&mut self, color: Rgbw) -> Result<(), DeviceError>;

    /// Commits pending changes to the hardware.
    fn show(&mut self) -> Result<(), DeviceError>;

    /// Sets every pixel to `color` and commits immediately.
    fn fill(&mut self, color: Rgbw) -> Result<(), DeviceError> {
        self.set_color(color)?;
        self.show()
    }
}

/// Blocks the calling thread for a period of time.
pub trait Delay {
    /// Waits for `duration` before returning.
    fn wait(&mut self, duration: Duration);
}

/// A [`Delay`] that sleeps the current thread.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl<T: BinaryOutput + ?Sized> BinaryOutput for &mut T {
    fn activate(&mut self) -> Result<(), DeviceError> {
        (**self).activate()
    }

    fn deactivate(&mut self) -> Result<(), DeviceError> {
        (**self).deactivate()
    }
}

impl<T: ColorOutput + ?Sized> ColorOutput for &mut T {
    fn pixel_count(&self) -> usize {
        (**self).pixel_count()
    }

    fn brightness(&self) -> Option<u8> {
        (**self).brightness()
    }

    fn set_color(&mut self, color: Rgbw) -> Result<(), DeviceError> {
        (**self).set_color(color)
    }

    fn show(&mut self) -> Result<(), DeviceError> {
        (**self).show()
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn wait(&mut self, duration: Duration) {
        (**self).wait(duration)
    }
}

// Provide Debug representations so types that contain trait objects can derive Debug.
impl Debug for dyn BinaryOutput + '_ {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<BinaryOutput trait>")
    }
}

impl Debug for dyn ColorOutput + '_ {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<ColorOutput trait>")
    }
}

impl Debug for dyn Delay + '_ {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<Delay trait>")
    }
}
