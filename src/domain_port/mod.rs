mod adventure_repo;
mod interaction_repo;
mod user_repo;

pub use adventure_repo::*;
pub use interaction_repo::*;
pub use user_repo::*;

/// Outcome of an insert guarded by a unique key. `Duplicate` covers both the
/// plain already-present case and a lost concurrent-insert race; the store
/// cannot tell them apart and neither can we.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InsertOutcome {
    Created,
    Duplicate,
}
