use embassy_time::Duration;

// The display is a 4-digit 8-segment common-cathode unit.
pub const CELL_COUNT: usize = 4;
pub const SEGMENT_COUNT: usize = 8;

/// How long one digit stays lit during a refresh cycle.
///
/// Every cycle lasts exactly `CELL_COUNT` dwells no matter how many cells
/// light, so the refresh rate (~83 Hz) and per-digit brightness never depend
/// on the value shown.
pub const DIGIT_DWELL_MICROS: u32 = 3_000;

/// Number of fractional digits shown.
pub const FRACTION_DIGITS: u32 = 1;

/// `10 ^ FRACTION_DIGITS`, the fixed-point scale applied before truncation.
pub const FRACTION_SCALE: f32 = 10.0;

/// Lower display bound, exclusive. A minus sign consumes one digit slot, so
/// the magnitude limit is one integer digit short of the positive one.
pub const MIN_VALUE: f32 = -100.0;

/// Upper display bound, exclusive.
pub const MAX_VALUE: f32 = 1000.0;

/// Where the counter lands when it wraps: the smallest displayable value.
pub const COUNTER_MIN: f32 = -99.9;

/// How much the counter grows per interval.
pub const COUNTER_STEP: f32 = 0.1;

/// Wall-clock interval between counter increments.
pub const COUNTER_INTERVAL: Duration = Duration::from_millis(200);
