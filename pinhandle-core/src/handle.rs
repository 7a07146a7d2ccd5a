//! Pin records and opaque handles

/// State tracked for one GPIO pin
///
/// Lives inside an allocator slot. `port` and `pin` are fixed at creation;
/// `state` only changes while the pin is an output.
///
/// Records are only minted by the registry:
///
/// ```compile_fail
/// let _ = pinhandle_core::PinRecord::new(0, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinRecord {
    /// Port group
    port: u8,
    /// Bit within the port
    pin: u8,
    /// Direction (true = output)
    output: bool,
    /// Last commanded level (true = high)
    state: bool,
}

impl PinRecord {
    /// Create a record for an input pin at logic low
    pub(crate) const fn new(port: u8, pin: u8) -> Self {
        Self {
            port,
            pin,
            output: false,
            state: false,
        }
    }

    /// Port group
    pub fn port(&self) -> u8 {
        self.port
    }

    /// Bit within the port
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Check if the pin is configured as an output
    pub fn is_output(&self) -> bool {
        self.output
    }

    /// Last commanded level
    pub fn state(&self) -> bool {
        self.state
    }

    pub(crate) fn set_direction(&mut self, output: bool) {
        self.output = output;
    }

    /// Store `high` if the pin is an output, ignore it otherwise
    pub(crate) fn set_state(&mut self, high: bool) {
        if self.output {
            self.state = high;
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "ignored write {=bool} to input pin P{=u8}.{=u8}",
                high,
                self.port,
                self.pin
            );
        }
    }
}

/// Opaque handle to a pin created by a [`PinRegistry`](crate::PinRegistry)
///
/// Neither `Clone` nor `Copy`: each slot has exactly one handle, owned by
/// whoever called `create`. A handle is only meaningful for the registry
/// that produced it.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinHandle {
    index: usize,
}

impl PinHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self { index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}
