use futures::future::join_all;
use serde_json::json;

use crate::error::CoreError;
use crate::model::Round;
use crate::mvu::scoring::{CommitFailure, Effect, Msg, ScoringModel, update};
use crate::storage::ScoreStore;

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub store: &'a dyn ScoreStore,
}

pub async fn run_effect(effect: Effect, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::CommitScore(commit) => match deps.store.save_score(&commit).await {
            Ok(()) => Msg::CommitSucceeded(vec![commit]),
            Err(e) => Msg::CommitFailed {
                commits: vec![commit],
                error: CoreError::from(e),
            },
        },
        Effect::CommitHole(commits) => match deps.store.save_hole(&commits).await {
            Ok(()) => Msg::CommitSucceeded(commits),
            Err(e) => Msg::CommitFailed {
                commits,
                error: CoreError::from(e),
            },
        },
    }
}

/// Applies `msg`, then runs the resulting commits concurrently and feeds
/// each outcome back into the model.
///
/// Navigation has already happened by the time commits run and is never
/// rolled back; the failures surfaced by this dispatch are returned.
pub async fn dispatch(
    model: &mut ScoringModel,
    round: &Round,
    msg: Msg,
    deps: Deps<'_>,
) -> Vec<CommitFailure> {
    let failures_before = model.commit_failures.len();
    let mut effects = update(model, round, msg);

    while !effects.is_empty() {
        if cfg!(debug_assertions) {
            let pending: Vec<String> = effects.iter().map(|x| format!("{x:?}")).collect();
            eprintln!("{}", json!({"mvu":"effect_start","effects": pending}));
        }
        let msgs = join_all(effects.drain(..).map(|effect| run_effect(effect, deps))).await;
        for msg in msgs {
            if cfg!(debug_assertions) {
                eprintln!("{}", json!({"mvu":"effect_done","msg": format!("{msg:?}")}));
            }
            if let Msg::CommitFailed { commits, error } = &msg {
                for commit in commits {
                    eprintln!(
                        "{}",
                        json!({
                            "mvu": "commit_failed",
                            "round": commit.round_id,
                            "player": commit.player_id,
                            "hole": commit.hole,
                            "error": error.to_string(),
                        })
                    );
                }
            }
            let next = update(model, round, msg);
            if cfg!(debug_assertions) && !next.is_empty() {
                let queued: Vec<String> = next.iter().map(|x| format!("{x:?}")).collect();
                eprintln!("{}", json!({"mvu":"update","queued_effects": queued}));
            }
            effects.extend(next);
        }
    }

    model.commit_failures[failures_before..].to_vec()
}
