//! GPIO pin abstractions
//!
//! Provides the direction-aware digital pin trait shared by the in-memory
//! registry and any chip-specific implementation.

/// Digital pin with a configurable direction
///
/// A pin starts as an input at logic low. Level writes only take effect
/// while the pin is configured as an output; writing an input pin is
/// accepted and ignored.
pub trait DigitalPin {
    /// Configure the pin direction (`true` = output, `false` = input)
    fn set_direction(&mut self, output: bool);

    /// Check if the pin is configured as an output
    fn is_output(&self) -> bool;

    /// Set the commanded logic level
    ///
    /// Has no effect while the pin is an input.
    fn set_state(&mut self, high: bool);

    /// Get the last commanded logic level
    fn state(&self) -> bool;

    /// Configure the pin as an output
    fn make_output(&mut self) {
        self.set_direction(true);
    }

    /// Configure the pin as an input
    fn make_input(&mut self) {
        self.set_direction(false);
    }

    /// Set the pin high (logic 1)
    fn set_high(&mut self) {
        self.set_state(true);
    }

    /// Set the pin low (logic 0)
    fn set_low(&mut self) {
        self.set_state(false);
    }

    /// Toggle the pin state
    fn toggle(&mut self) {
        let high = self.state();
        self.set_state(!high);
    }

    /// Check if the pin is configured as an input
    fn is_input(&self) -> bool {
        !self.is_output()
    }
}
