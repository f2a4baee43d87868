//! The seam between the display driver and the hardware lines.

use crate::Result;

/// The physical lines of a multiplexed 7-segment display.
///
/// One implementation drives real GPIO pins; host tests substitute a double
/// that records calls instead of toggling pins.
pub trait DisplayPort {
    /// Selects or deselects the digit cell at `cell` (0 is leftmost).
    ///
    /// A deselected cell must not conduct, whatever is on the segment lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds)
    /// when `cell` names no physical digit.
    fn set_digit_select(&mut self, cell: usize, active: bool) -> Result<()>;

    /// Puts a segment mask (bits a-g) and decimal-point state on the
    /// shared segment lines.
    ///
    /// # Errors
    ///
    /// Implementations with fixed segment lines do not fail.
    fn set_segments(&mut self, mask: u8, decimal_point: bool) -> Result<()>;
}

impl<P: DisplayPort + ?Sized> DisplayPort for &mut P {
    fn set_digit_select(&mut self, cell: usize, active: bool) -> Result<()> {
        P::set_digit_select(self, cell, active)
    }

    fn set_segments(&mut self, mask: u8, decimal_point: bool) -> Result<()> {
        P::set_segments(self, mask, decimal_point)
    }
}
