use thiserror::Error;

/// Errors reported by lists and their cursors.
///
/// Every error is reported before the requested operation takes effect:
/// a failed call leaves both the list and the cursor untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("illegal capacity: {capacity}")]
    InvalidArgument { capacity: isize },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("list was structurally modified (expected modification {expected}, found {actual})")]
    ConcurrentStructuralChange { expected: u64, actual: u64 },

    #[error("no element was returned by the cursor since its last structural change")]
    IllegalCursorState,

    #[error("no such element")]
    NoSuchElement,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            return Ok(());
        }

        Err(Error::IndexOutOfRange { index, len })
    }

    #[inline]
    pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
        if index <= len {
            return Ok(());
        }

        Err(Error::IndexOutOfRange { index, len })
    }
}
