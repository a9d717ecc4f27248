use std::cell::RefCell;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;
use std::time::Duration;

use beacon_core::Rgbw;

/// A single observable call made on a virtual device.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DeviceCall {
    /// The lamp was turned on.
    Activate,
    /// The lamp was turned off.
    Deactivate,
    /// The pixel strip was filled with a color (not yet shown).
    SetColor(Rgbw),
    /// The pixel strip committed its pending pixels.
    Show,
    /// The delay blocked for a duration.
    Wait(Duration),
}

impl Display for DeviceCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            DeviceCall::Activate => write!(f, "activate"),
            DeviceCall::Deactivate => write!(f, "deactivate"),
            DeviceCall::SetColor(color) => write!(f, "set color {}", color),
            DeviceCall::Show => write!(f, "show"),
            DeviceCall::Wait(duration) => write!(f, "wait {:?}", duration),
        }
    }
}

/// Shared, ordered record of every call made on a group of virtual devices.
///
/// Cloning a `Timeline` yields another handle to the same record, so a test can keep one
/// handle while the devices holding the others are moved into the code under test.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use beacon_core::{BinaryOutput, Delay};
/// use beacon_testing::{DeviceCall, RecordingDelay, Timeline, VirtualLamp};
///
/// # fn main() -> Result<(), beacon_core::DeviceError> {
/// #
/// let timeline = Timeline::new();
/// let mut lamp = VirtualLamp::with_timeline(&timeline);
/// let mut delay = RecordingDelay::with_timeline(&timeline);
///
/// lamp.activate()?;
/// delay.wait(Duration::from_millis(5));
///
/// assert_eq!(
///     vec![DeviceCall::Activate, DeviceCall::Wait(Duration::from_millis(5))],
///     timeline.calls()
/// );
/// #
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    calls: Rc<RefCell<Vec<DeviceCall>>>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Timeline::default()
    }

    /// Appends a call.
    pub fn record(&self, call: DeviceCall) {
        self.calls.borrow_mut().push(call);
    }

    /// Returns a copy of every call recorded so far, in order.
    pub fn calls(&self) -> Vec<DeviceCall> {
        self.calls.borrow().clone()
    }

    /// Number of calls recorded.
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Number of calls equal to `call`.
    pub fn count(&self, call: DeviceCall) -> usize {
        self.calls.borrow().iter().filter(|&&c| c == call).count()
    }

    /// Sum of every recorded wait.
    pub fn total_wait(&self) -> Duration {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match *call {
                DeviceCall::Wait(duration) => Some(duration),
                _ => None,
            })
            .sum()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_between_clones() {
        let timeline = Timeline::new();
        let other = timeline.clone();
        other.record(DeviceCall::Activate);
        other.record(DeviceCall::Wait(Duration::from_millis(3)));
        other.record(DeviceCall::Wait(Duration::from_millis(4)));
        other.record(DeviceCall::Deactivate);

        assert_eq!(4, timeline.len());
        assert_eq!(1, timeline.count(DeviceCall::Activate));
        assert_eq!(Duration::from_millis(7), timeline.total_wait());

        timeline.clear();
        assert!(other.is_empty());
        assert_eq!(Duration::ZERO, other.total_wait());
    }

    #[test]
    fn display() {
        assert_eq!("set color (0, 0, 255, 0)", DeviceCall::SetColor(Rgbw::BLUE).to_string());
        assert_eq!("wait 200ms", DeviceCall::Wait(Duration::from_millis(200)).to_string());
    }
}
