//! A library for signaling text in Morse code on a laser (or any on/off light) paired with an
//! RGBW pixel array.
//!
//! Provides a way to encode a message into timed light pulses and play it on the outputs,
//! plus simple blink patterns. Dots light the array blue and dashes light it red by default,
//! while the single light pulses for both.
//!
//! Encoding and playback are split: [`core::SignalEncoder`] turns text into a sequence of
//! [`core::Event`]s without touching any hardware, and [`SignalPlayer`] walks those events,
//! driving the outputs and blocking for each duration. Timing is logical: all waits are
//! derived from one unit duration, and any jitter added by the underlying drivers is not
//! compensated for.
//!
//! # Examples
//!
//! ```no_run
//! use beacon::{Indicator, IndicatorConfig};
//! use beacon::core::ThreadDelay;
//! use beacon::hal::{LedStrip, PinOutput};
//! # use std::convert::Infallible;
//! # use embedded_hal::digital::{ErrorType, OutputPin};
//! # use smart_leds::{SmartLedsWrite, RGBW};
//! # struct Gpio;
//! # impl ErrorType for Gpio { type Error = Infallible; }
//! # impl OutputPin for Gpio {
//! #     fn set_low(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # struct Sk6812;
//! # impl SmartLedsWrite for Sk6812 {
//! #     type Error = ();
//! #     type Color = RGBW<u8>;
//! #     fn write<T, I>(&mut self, _: T) -> Result<(), ()>
//! #     where T: IntoIterator<Item = I>, I: Into<RGBW<u8>> { Ok(()) }
//! # }
//! # fn claim_laser_pin() -> Gpio { Gpio }
//! # fn claim_pixel_driver() -> Sk6812 { Sk6812 }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! let config = IndicatorConfig::default();
//!
//! // Platform setup hands us an embedded-hal pin and a smart-leds driver.
//! let laser = PinOutput::new(claim_laser_pin(), config.laser_pin);
//! let pixels = LedStrip::new(claim_pixel_driver(), config.pixel_pin, config.pixel_count, config.brightness);
//!
//! // Both outputs are switched off on creation.
//! let mut indicator = Indicator::new(config, laser, pixels, ThreadDelay)?;
//!
//! // Blink three times, then send a message.
//! indicator.blink_for(0.5, 0.5, Some(3))?;
//! indicator.send_morse("Hello world")?;
//! #
//! # Ok(()) }
//! ```
//!
//! # Sub-crates
//!
//! In addition to the high-level API of [`Indicator`], several lower-level components are provided
//! that can be combined for more specialized use-cases.
//!
//! - [`beacon-core`] \(re-exported as `core`\) contains the pure encoding and timing types and the
//!   device capability traits, and is useful if you want to implement a custom output.
//! - [`beacon-hal`] \(re-exported as `hal`\) contains adapters for `embedded-hal` pins and delays
//!   and `smart-leds` pixel drivers.
//! - [`beacon-testing`] contains in-memory devices that record every call, useful for testing
//!   and debugging without hardware or real waits.
//!
//! [`beacon-core`]: https://docs.rs/beacon-core
//! [`beacon-hal`]: https://docs.rs/beacon-hal
//! [`beacon-testing`]: https://docs.rs/beacon-testing
#![doc(html_root_url = "https://docs.rs/beacon/0.1.0")]
#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![warn(
    missing_docs,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub use beacon_core as core;
pub use beacon_hal as hal;

mod blink;
mod config;
mod indicator;
mod player;

pub use self::blink::BlinkSignal;
pub use self::config::{ConfigError, IndicatorConfig};
pub use self::indicator::{Indicator, SetupError};
pub use self::player::{PlaybackError, SignalPlayer};

pub use crate::core::{encode, Event, Rgbw, SignalPalette, Symbol, SymbolTable, TimingConfig};
