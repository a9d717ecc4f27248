use std::fmt::Debug;

use log::debug;
use smart_leds::{SmartLedsWrite, White, RGBW};

use beacon_core::{ColorOutput, DeviceError, PinId, Rgbw};

use crate::HalError;

/// Converts a beacon color to the RGBW type used by `smart-leds` drivers.
pub fn to_smart_leds(color: Rgbw) -> RGBW<u8> {
    RGBW {
        r: color.r,
        g: color.g,
        b: color.b,
        a: White(color.w),
    }
}

/// An implementation of `ColorOutput` that drives a `smart-leds` RGBW strip, such as a
/// chain of SK6812 pixels.
///
/// Pixels are buffered in memory and only written to the driver on [`show`], scaled by the
/// configured brightness.
///
/// # Examples
///
/// ```
/// use beacon_core::{ColorOutput, PinId, Rgbw};
/// use beacon_hal::LedStrip;
/// use smart_leds::{SmartLedsWrite, RGBW};
///
/// # #[derive(Default)]
/// # struct Driver(Vec<RGBW<u8>>);
/// # impl SmartLedsWrite for Driver {
/// #     type Error = ();
/// #     type Color = RGBW<u8>;
/// #     fn write<T, I>(&mut self, iterator: T) -> Result<(), ()>
/// #     where T: IntoIterator<Item = I>, I: Into<RGBW<u8>> {
/// #         self.0 = iterator.into_iter().map(Into::into).collect();
/// #         Ok(())
/// #     }
/// # }
/// # fn main() -> Result<(), beacon_core::DeviceError> {
/// #
/// let mut strip = LedStrip::new(Driver::default(), PinId(18), 7, 255);
/// strip.fill(Rgbw::BLUE)?;
/// assert_eq!(7, strip.driver().0.len());
/// #
/// # Ok(()) }
/// ```
///
/// [`show`]: ../beacon_core/trait.ColorOutput.html#tymethod.show
#[derive(Debug)]
pub struct LedStrip<W: SmartLedsWrite> {
    driver: W,
    id: PinId,
    pixels: Vec<Rgbw>,
    brightness: u8,
}

impl<W> LedStrip<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGBW<u8>>,
    W::Error: Debug,
{
    /// Creates a strip of `pixel_count` pixels, all initially off.
    ///
    /// The pixels aren't written to the driver until the first `show`.
    pub fn new(driver: W, id: PinId, pixel_count: usize, brightness: u8) -> Self {
        LedStrip {
            driver,
            id,
            pixels: vec![Rgbw::OFF; pixel_count],
            brightness,
        }
    }

    /// Returns a reference to the underlying driver.
    pub fn driver(&self) -> &W {
        &self.driver
    }

    /// Returns the identifier of the data pin.
    pub fn id(&self) -> PinId {
        self.id
    }

    /// Changes the brightness used by subsequent `show` calls.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Pixels as currently buffered, before brightness scaling.
    pub fn pixels(&self) -> &[Rgbw] {
        &self.pixels
    }

    /// Consumes the adapter, returning the underlying driver.
    pub fn into_inner(self) -> W {
        self.driver
    }
}

impl<W> ColorOutput for LedStrip<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGBW<u8>>,
    W::Error: Debug,
{
    fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    fn brightness(&self) -> Option<u8> {
        Some(self.brightness)
    }

    fn set_color(&mut self, color: Rgbw) -> Result<(), DeviceError> {
        for pixel in &mut self.pixels {
            *pixel = color;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<(), DeviceError> {
        let brightness = self.brightness;
        debug!("Strip {}: showing {} pixels", self.id, self.pixels.len());
        let scaled = self.pixels.iter().map(|pixel| to_smart_leds(pixel.scaled(brightness)));
        self.driver.write(scaled).map_err(|e| {
            HalError::Strip {
                message: format!("{:?}", e),
            }
            .into()
        })
    }
}
