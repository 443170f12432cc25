pub mod dialog;
pub mod runtime;
pub mod scoring;
pub mod session;

pub use dialog::{SaveAndAdvance, ScoreDraft, check_strokes, save_and_advance};
pub use runtime::{Deps, dispatch, run_effect};
pub use scoring::{CommitFailure, Effect, Msg, ScoringModel, update};
pub use session::{CommitMode, GroupSession, SessionConfig};
