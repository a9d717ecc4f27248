use thiserror::Error;

/// Errors reported by hardware adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HalError {
    /// An output pin failed to change level.
    #[error("Output pin failed to go {}: {}", if *high { "high" } else { "low" }, kind)]
    Pin {
        /// The level the pin was being driven to.
        high: bool,

        /// Description of the error kind reported by the pin.
        kind: String,
    },

    /// The LED strip driver failed to write pixel data.
    #[error("LED strip driver failed to write pixels: {}", message)]
    Strip {
        /// Debug representation of the driver error.
        message: String,
    },
}
