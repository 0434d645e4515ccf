use thiserror::Error;

/// Failures raised by the container itself.
///
/// Extraction that can carry a caller-chosen error goes through
/// [`O::ok_or`](crate::O::ok_or) instead; that error is handed back untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("called `O::unwrap()` on a `None` value")]
    UnwrapOnNone,
}
