use std::time::Duration;

use log::debug;

use beacon_core::{BinaryOutput, ColorOutput, Delay, DeviceError, Rgbw};

use crate::{DeviceCall, Timeline, VirtualDeviceError};

/// Mock implementation of [`BinaryOutput`] that tracks its state in memory.
///
/// Every call is appended to the lamp's [`Timeline`], which can be shared with
/// other virtual devices to observe the interleaving of calls across all of them.
///
/// # Examples
///
/// ```
/// use beacon_core::BinaryOutput;
/// use beacon_testing::VirtualLamp;
///
/// # fn main() -> Result<(), beacon_core::DeviceError> {
/// #
/// let mut lamp = VirtualLamp::new();
/// lamp.activate()?;
/// assert!(lamp.is_on());
/// lamp.deactivate()?;
/// assert!(!lamp.is_on());
/// assert_eq!(1, lamp.activations());
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct VirtualLamp {
    on: bool,
    activations: usize,
    fail_after: Option<usize>,
    timeline: Timeline,
}

impl VirtualLamp {
    /// Creates a lamp that starts off and records to its own timeline.
    pub fn new() -> Self {
        Self::with_timeline(&Timeline::new())
    }

    /// Creates a lamp that starts off and records to a shared timeline.
    pub fn with_timeline(timeline: &Timeline) -> Self {
        VirtualLamp {
            on: false,
            activations: 0,
            fail_after: None,
            timeline: timeline.clone(),
        }
    }

    /// Makes every call fail once `successes` calls have succeeded.
    ///
    /// # Examples
    ///
    /// ```
    /// use beacon_core::BinaryOutput;
    /// use beacon_testing::VirtualLamp;
    ///
    /// let mut lamp = VirtualLamp::new().failing_after(1);
    /// assert!(lamp.activate().is_ok());
    /// assert!(lamp.deactivate().is_err());
    /// assert!(lamp.is_on());
    /// ```
    pub fn failing_after(mut self, successes: usize) -> Self {
        self.fail_after = Some(successes);
        self
    }

    /// Whether the lamp is currently on.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Number of successful `activate` calls.
    pub fn activations(&self) -> usize {
        self.activations
    }

    /// The timeline this lamp records to.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Consumes one call from the failure budget, if any.
    fn check(&mut self, on: bool) -> Result<(), DeviceError> {
        match self.fail_after {
            Some(0) => Err(VirtualDeviceError::Lamp { on }.into()),
            Some(ref mut remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Default for VirtualLamp {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryOutput for VirtualLamp {
    fn activate(&mut self) -> Result<(), DeviceError> {
        self.check(true)?;
        debug!("Vlamp: on");
        self.on = true;
        self.activations += 1;
        self.timeline.record(DeviceCall::Activate);
        Ok(())
    }

    fn deactivate(&mut self) -> Result<(), DeviceError> {
        self.check(false)?;
        debug!("Vlamp: off");
        self.on = false;
        self.timeline.record(DeviceCall::Deactivate);
        Ok(())
    }
}

/// Mock implementation of [`ColorOutput`] holding a fixed number of pixels in memory.
///
/// Keeps both the pending pixels (changed by `set_color`) and the shown pixels
/// (updated by `show`), so tests can tell whether a change was committed.
///
/// # Examples
///
/// ```
/// use beacon_core::{ColorOutput, Rgbw};
/// use beacon_testing::VirtualPixelStrip;
///
/// # fn main() -> Result<(), beacon_core::DeviceError> {
/// #
/// let mut strip = VirtualPixelStrip::new(7);
/// strip.set_color(Rgbw::RED)?;
/// assert_eq!(&[Rgbw::OFF; 7], strip.shown());
/// strip.show()?;
/// assert_eq!(&[Rgbw::RED; 7], strip.shown());
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct VirtualPixelStrip {
    pending: Vec<Rgbw>,
    shown: Vec<Rgbw>,
    show_count: usize,
    failing: bool,
    timeline: Timeline,
}

impl VirtualPixelStrip {
    /// Creates a strip of `pixel_count` dark pixels that records to its own timeline.
    pub fn new(pixel_count: usize) -> Self {
        Self::with_timeline(pixel_count, &Timeline::new())
    }

    /// Creates a strip of `pixel_count` dark pixels that records to a shared timeline.
    pub fn with_timeline(pixel_count: usize, timeline: &Timeline) -> Self {
        VirtualPixelStrip {
            pending: vec![Rgbw::OFF; pixel_count],
            shown: vec![Rgbw::OFF; pixel_count],
            show_count: 0,
            failing: false,
            timeline: timeline.clone(),
        }
    }

    /// Makes every `show` call fail.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Pixels as last set, whether or not they have been shown.
    pub fn pending(&self) -> &[Rgbw] {
        &self.pending
    }

    /// Pixels as last committed by `show`.
    pub fn shown(&self) -> &[Rgbw] {
        &self.shown
    }

    /// Number of successful `show` calls.
    pub fn show_count(&self) -> usize {
        self.show_count
    }

    /// The timeline this strip records to.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

impl ColorOutput for VirtualPixelStrip {
    fn pixel_count(&self) -> usize {
        self.pending.len()
    }

    fn set_color(&mut self, color: Rgbw) -> Result<(), DeviceError> {
        for pixel in &mut self.pending {
            *pixel = color;
        }
        self.timeline.record(DeviceCall::SetColor(color));
        Ok(())
    }

    fn show(&mut self) -> Result<(), DeviceError> {
        if self.failing {
            return Err(VirtualDeviceError::Show.into());
        }
        debug!("Vstrip: {:?}", self.pending.first());
        self.shown.clone_from(&self.pending);
        self.show_count += 1;
        self.timeline.record(DeviceCall::Show);
        Ok(())
    }
}

/// Mock implementation of [`Delay`] that records waits instead of sleeping.
///
/// Playback against a `RecordingDelay` finishes instantly while still exposing
/// exactly how long it would have taken.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    elapsed: Duration,
    timeline: Timeline,
}

impl RecordingDelay {
    /// Creates a delay that records to its own timeline.
    pub fn new() -> Self {
        RecordingDelay::default()
    }

    /// Creates a delay that records to a shared timeline.
    pub fn with_timeline(timeline: &Timeline) -> Self {
        RecordingDelay {
            elapsed: Duration::ZERO,
            timeline: timeline.clone(),
        }
    }

    /// Total time that would have elapsed.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The timeline this delay records to.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

impl Delay for RecordingDelay {
    fn wait(&mut self, duration: Duration) {
        debug!("Vdelay: {:?}", duration);
        self.elapsed += duration;
        self.timeline.record(DeviceCall::Wait(duration));
    }
}
