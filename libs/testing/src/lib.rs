//! Tools for testing and debugging beacon signal playback.
//!
//! For the basic task of sending a message, you likely want to use the high-level API
//! in the [`beacon`] crate instead.
//!
//! This crate isn't directly related to driving real hardware, but provides in-memory
//! stand-ins for every device capability. [`VirtualLamp`], [`VirtualPixelStrip`] and
//! [`RecordingDelay`] can share one [`Timeline`], which records the exact order of calls
//! across all three, waits included, so playback can be verified without any real time passing.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use beacon_core::{BinaryOutput, ColorOutput, Delay, Rgbw};
//! use beacon_testing::{DeviceCall, RecordingDelay, Timeline, VirtualLamp, VirtualPixelStrip};
//!
//! # fn main() -> Result<(), beacon_core::DeviceError> {
//! #
//! let timeline = Timeline::new();
//! let mut lamp = VirtualLamp::with_timeline(&timeline);
//! let mut strip = VirtualPixelStrip::with_timeline(7, &timeline);
//! let mut delay = RecordingDelay::with_timeline(&timeline);
//!
//! lamp.activate()?;
//! strip.fill(Rgbw::BLUE)?;
//! delay.wait(Duration::from_millis(200));
//! lamp.deactivate()?;
//!
//! assert_eq!(5, timeline.len());
//! assert_eq!(Duration::from_millis(200), timeline.total_wait());
//! assert_eq!(&[Rgbw::BLUE; 7], strip.shown());
//! #
//! # Ok(()) }
//! ```
//!
//! [`beacon`]: https://docs.rs/beacon
#![doc(html_root_url = "https://docs.rs/beacon-testing/0.1.0")]
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

mod errors;
mod timeline;
mod virtual_devices;

pub use self::errors::VirtualDeviceError;
pub use self::timeline::{DeviceCall, Timeline};
pub use self::virtual_devices::{RecordingDelay, VirtualLamp, VirtualPixelStrip};
