pub mod aggregate;
pub mod completion;
pub mod par;
pub mod sections;
pub mod summary;

pub use aggregate::*;
pub use completion::*;
pub use par::*;
pub use sections::*;
pub use summary::*;

/// 0-based index for a 1-based hole number; `None` for hole numbers below 1.
#[must_use]
pub(crate) fn hole_index(hole: i32) -> Option<usize> {
    if hole < 1 {
        return None;
    }
    usize::try_from(hole - 1).ok()
}
