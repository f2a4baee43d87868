//! Shared items for the four-digit counter display.
#![no_std]

mod counter;
mod driver;
mod error;
#[cfg(feature = "pico1")]
mod gpio_port;
#[cfg(feature = "pico1")]
mod hardware;
mod leds;
mod never;
#[cfg(feature = "pico1")]
mod output_array;
mod port;
mod render_plan;
mod shared_constants;

// Re-export commonly used items
pub use counter::Counter;
pub use driver::CounterDisplay;
pub use error::{Error, Result};
#[cfg(feature = "pico1")]
pub use gpio_port::GpioPort;
#[cfg(feature = "pico1")]
pub use hardware::Hardware;
pub use leds::Leds;
pub use never::Never;
#[cfg(feature = "pico1")]
pub use output_array::OutputArray;
pub use port::DisplayPort;
pub use render_plan::{RenderPlan, RenderStep};
pub use shared_constants::*;
