//! The multiplexed refresh cycle for the 4-digit display.
//!
//! Only one digit cell conducts at any instant. The driver walks the render
//! steps right to left, lighting each cell for a fixed dwell, then holds the
//! display blank for the cells the value did not need. Persistence of vision
//! merges the flashes into one steady multi-digit readout.

use embedded_hal::delay::DelayNs;

use crate::Result;
use crate::leds::Leds;
use crate::port::DisplayPort;
use crate::render_plan::RenderPlan;
use crate::shared_constants::{CELL_COUNT, DIGIT_DWELL_MICROS};

#[cfg(feature = "display-trace")]
use defmt::info;

/// Renders one refresh cycle per [`render`](Self::render) call.
///
/// The driver owns the port and the delay for its whole life; nothing else
/// touches the display lines, so the only discipline required is the one the
/// driver itself enforces: return to the blanked state before moving the
/// select to another cell.
pub struct CounterDisplay<P, D> {
    port: P,
    delay: D,
}

impl<P: DisplayPort, D: DelayNs> CounterDisplay<P, D> {
    /// Creates a driver over a hardware port and a blocking delay.
    #[must_use]
    pub const fn new(port: P, delay: D) -> Self {
        Self { port, delay }
    }

    /// Renders one complete refresh cycle for `value`, blocking throughout.
    ///
    /// Steps light right to left: the least significant digit lands on the
    /// rightmost cell and the sign, if present, immediately left of the most
    /// significant digit. After the lit steps the display holds blank for
    /// the remaining cells, so every cycle lasts exactly
    /// `CELL_COUNT x DIGIT_DWELL_MICROS` microseconds. Without that hold,
    /// values needing fewer digits would refresh faster and glow brighter.
    ///
    /// Out-of-range values render one fully blanked cycle of the same
    /// duration; there is no error path for them.
    ///
    /// # Errors
    ///
    /// Returns an error only if the port rejects a cell index, which cannot
    /// happen for a port with `CELL_COUNT` cells.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        reason = "slot < plan.len() <= CELL_COUNT, so the subtractions cannot underflow \
        and the remainder of the cycle fits in u32 microseconds"
    )]
    pub fn render(&mut self, value: f32) -> Result<()> {
        let plan = RenderPlan::from_value(value);
        #[cfg(feature = "display-trace")]
        info!("render: {} of {} cells lit", plan.len(), CELL_COUNT);

        for (slot, step) in plan.steps().iter().enumerate() {
            self.blank()?;
            let (mask, decimal_point) = step.segments();
            // Segments settle before any select line conducts; asserting a
            // cell with stale segments shows as ghosting.
            self.port.set_segments(mask, decimal_point)?;
            self.port.set_digit_select(CELL_COUNT - 1 - slot, true)?;
            self.delay.delay_us(DIGIT_DWELL_MICROS);
        }

        // Pad the cycle out to CELL_COUNT dwells.
        self.blank()?;
        let unused = (CELL_COUNT - plan.len()) as u32;
        self.delay.delay_us(DIGIT_DWELL_MICROS * unused);
        Ok(())
    }

    fn blank(&mut self) -> Result<()> {
        for cell in 0..CELL_COUNT {
            self.port.set_digit_select(cell, false)?;
        }
        self.port.set_segments(Leds::BLANK, false)
    }
}
