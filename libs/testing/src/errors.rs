use thiserror::Error;

/// Errors returned by virtual devices that were set up to fail.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VirtualDeviceError {
    /// The virtual lamp refused to turn on or off.
    #[error("Virtual lamp failed to switch {}", if *on { "on" } else { "off" })]
    Lamp {
        /// Whether the failed call was trying to turn the lamp on.
        on: bool,
    },

    /// The virtual pixel strip refused to commit its pixels.
    #[error("Virtual pixel strip failed to show pixels")]
    Show,
}
