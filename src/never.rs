/// A stable stand-in for the unstable `!` type.
///
/// `inner_main` returns `Result<Never>`: the only way it comes back is with
/// an error.
#[derive(Debug)]
pub enum Never {}
