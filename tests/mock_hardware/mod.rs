#![allow(dead_code)] // Each test crate uses a different subset.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};
use smart_leds::{SmartLedsWrite, RGBW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareFailure {
    None,
    Pin,
    Driver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Signal written to the mock hardware, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wire {
    Level(bool),
    Frame(Vec<RGBW<u8>>),
}

/// Shared record of everything written to the mock pin and driver.
pub type Bus = Rc<RefCell<Vec<Wire>>>;

/// Mock GPIO pin that records the levels it is driven to.
#[derive(Debug, Clone)]
pub struct MockPin {
    bus: Bus,
    failure: HardwareFailure,
}

impl MockPin {
    pub fn new(bus: &Bus, failure: HardwareFailure) -> Self {
        MockPin {
            bus: bus.clone(),
            failure,
        }
    }

    fn drive(&mut self, level: bool) -> Result<(), PinFault> {
        if self.failure == HardwareFailure::Pin {
            return Err(PinFault);
        }
        self.bus.borrow_mut().push(Wire::Level(level));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = PinFault;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), PinFault> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        self.drive(true)
    }
}

/// Mock RGBW pixel driver that records every frame written.
#[derive(Debug, Clone)]
pub struct MockDriver {
    bus: Bus,
    failure: HardwareFailure,
}

impl MockDriver {
    pub fn new(bus: &Bus, failure: HardwareFailure) -> Self {
        MockDriver {
            bus: bus.clone(),
            failure,
        }
    }
}

impl SmartLedsWrite for MockDriver {
    type Error = String;
    type Color = RGBW<u8>;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.failure == HardwareFailure::Driver {
            return Err("Dummy driver error".to_owned());
        }
        let frame = iterator.into_iter().map(Into::into).collect();
        self.bus.borrow_mut().push(Wire::Frame(frame));
        Ok(())
    }
}
