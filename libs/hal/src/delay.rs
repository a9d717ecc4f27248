use std::time::Duration;

use embedded_hal::delay::DelayNs;

use beacon_core::Delay;

/// An implementation of `Delay` backed by an `embedded-hal` blocking delay provider.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HalDelay<D: DelayNs> {
    delay: D,
}

impl<D: DelayNs> HalDelay<D> {
    /// Wraps a delay provider.
    pub fn new(delay: D) -> Self {
        HalDelay { delay }
    }

    /// Consumes the adapter, returning the underlying delay provider.
    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> Delay for HalDelay<D> {
    fn wait(&mut self, duration: Duration) {
        // Whole milliseconds first, in chunks that fit the provider's u32 argument.
        let mut millis = duration.as_millis();
        while millis > 0 {
            let chunk = u32::try_from(millis).unwrap_or(u32::MAX);
            self.delay.delay_ms(chunk);
            millis -= u128::from(chunk);
        }

        let nanos = duration.subsec_nanos() % 1_000_000;
        if nanos > 0 {
            self.delay.delay_ns(nanos);
        }
    }
}
