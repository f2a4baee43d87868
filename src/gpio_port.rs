//! The GPIO-backed implementation of [`DisplayPort`].

use embassy_rp::gpio::Level;

use crate::Result;
use crate::leds::Leds;
use crate::output_array::OutputArray;
use crate::port::DisplayPort;
use crate::shared_constants::{CELL_COUNT, SEGMENT_COUNT};

/// Drives the display through two banks of GPIO outputs.
///
/// Cell lines idle high; pulling one low lets that digit's common cathode
/// conduct. Segment lines are active high. The decimal point is folded onto
/// bit 7 of the segment bank here, at the last moment before the pins.
pub struct GpioPort {
    cells: OutputArray<'static, CELL_COUNT>,
    segments: OutputArray<'static, SEGMENT_COUNT>,
}

impl GpioPort {
    #[must_use]
    pub const fn new(
        cells: OutputArray<'static, CELL_COUNT>,
        segments: OutputArray<'static, SEGMENT_COUNT>,
    ) -> Self {
        Self { cells, segments }
    }
}

impl DisplayPort for GpioPort {
    fn set_digit_select(&mut self, cell: usize, active: bool) -> Result<()> {
        let level = if active { Level::Low } else { Level::High };
        self.cells.set_level_at_index(cell, level)
    }

    fn set_segments(&mut self, mask: u8, decimal_point: bool) -> Result<()> {
        let bits = if decimal_point {
            mask | Leds::DECIMAL
        } else {
            mask
        };
        self.segments.set_from_bits(bits);
        Ok(())
    }
}
