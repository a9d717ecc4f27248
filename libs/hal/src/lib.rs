//! Adapters that connect real hardware to beacon's device capabilities.
//!
//! For the basic task of sending a message, you likely want to use the high-level API
//! in the [`beacon`] crate instead.
//!
//! This crate bridges the embedded Rust ecosystem traits to the narrow capabilities that
//! playback is written against:
//!
//! * [`PinOutput`] turns an `embedded-hal` [`OutputPin`] (a laser diode or LED) into a `BinaryOutput`.
//! * [`LedStrip`] turns a `smart-leds` [`SmartLedsWrite`] RGBW driver into a `ColorOutput`.
//! * [`HalDelay`] turns an `embedded-hal` [`DelayNs`] provider into a `Delay`.
//!
//! Platform setup (claiming pins, configuring the pixel driver) is left to the caller.
//!
//! [`beacon`]: https://docs.rs/beacon
//! [`OutputPin`]: https://docs.rs/embedded-hal/1/embedded_hal/digital/trait.OutputPin.html
//! [`SmartLedsWrite`]: https://docs.rs/smart-leds/0.4/smart_leds/trait.SmartLedsWrite.html
//! [`DelayNs`]: https://docs.rs/embedded-hal/1/embedded_hal/delay/trait.DelayNs.html
#![doc(html_root_url = "https://docs.rs/beacon-hal/0.1.0")]
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

mod delay;
mod errors;
mod led_strip;
mod pin_output;

pub use self::delay::HalDelay;
pub use self::errors::HalError;
pub use self::led_strip::{to_smart_leds, LedStrip};
pub use self::pin_output::PinOutput;
