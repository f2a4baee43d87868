//! A four-digit 7-segment counter display, multiplexed one digit at a time.
//!
//! Runs on a Raspberry Pi Pico RP2040. See the `README.md` for wiring.
#![no_std]
#![no_main]

use counter_display::{
    CELL_COUNT, Counter, CounterDisplay, DIGIT_DWELL_MICROS, GpioPort, Hardware, Never, Result,
};
use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::{Delay, Instant};
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main().unwrap_err();
    panic!("{err}");
}

fn inner_main() -> Result<Never> {
    let hardware = Hardware::default();
    let port = GpioPort::new(hardware.cells, hardware.segments);
    let mut display = CounterDisplay::new(port, Delay);
    let mut counter = Counter::new();

    info!(
        "counter display: {} cells, {} us dwell per cell",
        CELL_COUNT, DIGIT_DWELL_MICROS
    );

    let mut last_advance = Instant::now();
    loop {
        // One blocking refresh cycle, then credit the elapsed time to the
        // counter. The cycle duration is fixed, so the cadence stays steady.
        display.render(counter.current_value())?;
        let now = Instant::now();
        counter.advance(now - last_advance);
        last_advance = now;
    }
}
