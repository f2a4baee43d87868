use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// The display itself has no runtime failure modes: out-of-range values and
/// unknown glyphs degrade to blank output. What remains are programming
/// errors at the hardware boundary.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// A digit-cell index beyond the physical select lines.
    #[display("Index out of bounds")]
    IndexOutOfBounds,
}
