//! Core types for encoding text into timed light signals.
//!
//! For the basic task of sending a message, you likely want to use the high-level API
//! in the [`beacon`] crate instead.
//!
//! However, `beacon_core` is useful on its own when you only need the pure half of the
//! pipeline: [`SignalEncoder`] turns a message into a sequence of [`Event`]s using a
//! [`SymbolTable`], and [`TimingConfig`] says how long each of those events lasts.
//! It also defines the narrow device capabilities ([`BinaryOutput`], [`ColorOutput`]
//! and [`Delay`]) that playback is written against.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use beacon_core::{render, SignalEncoder, TimingConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #
//! let events = SignalEncoder::default().encode("SOS");
//! assert_eq!("... --- ... ", render(&events));
//!
//! let timing = TimingConfig::new(Duration::from_millis(200))?;
//! assert_eq!(Duration::from_secs(6), timing.total_duration(&events));
//! #
//! # Ok(()) }
//! ```
//!
//! [`beacon`]: https://docs.rs/beacon
#![doc(html_root_url = "https://docs.rs/beacon-core/0.1.0")]
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

mod color;
mod device;
mod encoder;
mod event;
mod pin;
mod symbol;
mod timing;

pub use self::color::{Rgbw, SignalPalette};
pub use self::device::{BinaryOutput, ColorOutput, Delay, DeviceError, ThreadDelay};
pub use self::encoder::{encode, SignalEncoder};
pub use self::event::{render, Event};
pub use self::pin::PinId;
pub use self::symbol::{Symbol, SymbolTable, SymbolTableError};
pub use self::timing::{duration_from_secs, TimingConfig, TimingError};
