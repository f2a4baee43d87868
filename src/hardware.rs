use embassy_rp::gpio::{self, Level};

use crate::output_array::OutputArray;
use crate::shared_constants::{CELL_COUNT, SEGMENT_COUNT};

/// The wired-up pins of the counter display.
///
/// Cell pins select which digit is active (LOW = on, HIGH = off); segment
/// pins light the bars of the selected digit (HIGH = on, LOW = off).
pub struct Hardware {
    pub cells: OutputArray<'static, CELL_COUNT>,
    pub segments: OutputArray<'static, SEGMENT_COUNT>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let cells = OutputArray::new([
            gpio::Output::new(peripherals.PIN_1, Level::High),
            gpio::Output::new(peripherals.PIN_2, Level::High),
            gpio::Output::new(peripherals.PIN_3, Level::High),
            gpio::Output::new(peripherals.PIN_4, Level::High),
        ]);

        let segments = OutputArray::new([
            gpio::Output::new(peripherals.PIN_5, Level::Low), // Segment A
            gpio::Output::new(peripherals.PIN_6, Level::Low), // Segment B
            gpio::Output::new(peripherals.PIN_7, Level::Low), // Segment C
            gpio::Output::new(peripherals.PIN_8, Level::Low), // Segment D
            gpio::Output::new(peripherals.PIN_9, Level::Low), // Segment E
            gpio::Output::new(peripherals.PIN_10, Level::Low), // Segment F
            gpio::Output::new(peripherals.PIN_11, Level::Low), // Segment G
            gpio::Output::new(peripherals.PIN_12, Level::Low), // Decimal point
        ]);

        Self { cells, segments }
    }
}
