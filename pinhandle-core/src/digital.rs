//! Trait views over registry pins
//!
//! [`Pin`] borrows one pin out of a registry so it can be handed to code
//! written against [`pinhandle_hal::DigitalPin`] or the `embedded-hal`
//! digital traits. It is still an in-memory view: `InputPin` reports the
//! stored level, not a sensed voltage.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use pinhandle_hal::DigitalPin;

use crate::handle::PinRecord;

/// Mutable view of one registry pin
///
/// Obtained from [`PinRegistry::pin_mut`](crate::PinRegistry::pin_mut).
#[derive(Debug)]
pub struct Pin<'a> {
    record: &'a mut PinRecord,
}

impl<'a> Pin<'a> {
    pub(crate) fn new(record: &'a mut PinRecord) -> Self {
        Self { record }
    }

    /// Port group
    pub fn port(&self) -> u8 {
        self.record.port()
    }

    /// Bit within the port
    pub fn pin(&self) -> u8 {
        self.record.pin()
    }
}

impl DigitalPin for Pin<'_> {
    fn set_direction(&mut self, output: bool) {
        self.record.set_direction(output);
    }

    fn is_output(&self) -> bool {
        self.record.is_output()
    }

    fn set_state(&mut self, high: bool) {
        self.record.set_state(high);
    }

    fn state(&self) -> bool {
        self.record.state()
    }
}

impl ErrorType for Pin<'_> {
    type Error = Infallible;
}

// Writes follow the registry rule: ignored while the pin is an input
impl OutputPin for Pin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record.set_state(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record.set_state(true);
        Ok(())
    }
}

impl StatefulOutputPin for Pin<'_> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.record.state())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.record.state())
    }
}

impl InputPin for Pin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.record.state())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.record.state())
    }
}
