use crate::Result;
use crate::error::Error::IndexOutOfBounds;
use embassy_rp::gpio::{self, Level};

/// Array of GPIO output pins for LED displays.
///
/// See the [`Hardware`](crate::Hardware) documentation for the wiring.
pub struct OutputArray<'a, const N: usize>([gpio::Output<'a>; N]);

impl<'a, const N: usize> OutputArray<'a, N> {
    #[must_use]
    pub const fn new(outputs: [gpio::Output<'a>; N]) -> Self {
        Self(outputs)
    }

    /// Sets one line to `level`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] when `index` names no line.
    #[inline]
    pub fn set_level_at_index(&mut self, index: usize, level: Level) -> Result<()> {
        self.0.get_mut(index).ok_or(IndexOutOfBounds)?.set_level(level);
        Ok(())
    }
}

impl OutputArray<'_, { u8::BITS as usize }> {
    /// Writes all eight lines from `bits`, least significant bit first.
    #[inline]
    pub fn set_from_bits(&mut self, mut bits: u8) {
        for output in &mut self.0 {
            let level: Level = ((bits & 1) == 1).into();
            output.set_level(level);
            bits >>= 1;
        }
    }
}
