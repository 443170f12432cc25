mod common;

use common::{group, round_with};
use rusty_golf_scoring::error::CoreError;
use rusty_golf_scoring::model::{HoleScore, Round};
use rusty_golf_scoring::mvu::{
    CommitMode, Effect, GroupSession, Msg, ScoreDraft, ScoringModel, SessionConfig,
    check_strokes, save_and_advance, update,
};
use rusty_golf_scoring::score::entry_par;
use rusty_golf_scoring::storage::RoundContext;

fn ids(players: &[&str]) -> Vec<String> {
    players.iter().map(|p| (*p).to_string()).collect()
}

#[test]
fn test5_draft_seeds_from_stored_score_then_par() {
    let round = round_with("r1", 18, Some(72), &[("p1", &[Some(6)]), ("p2", &[])]);
    let draft = ScoreDraft::seed(&round, 1, &ids(&["p1", "p2"]), 4);
    assert_eq!(draft.hole(), 1);
    assert_eq!(draft.score("p1"), Some(6));
    assert_eq!(draft.score("p2"), Some(4));
    assert_eq!(draft.score("p3"), None);
}

#[test]
fn test5_entry_par_resolution_order() {
    let mut round = round_with("r1", 18, None, &[]);
    assert_eq!(entry_par(&round, 1, 4), 4);
    assert_eq!(entry_par(&round, 1, 3), 3);

    round.course_details.as_mut().unwrap().par = Some(54);
    assert_eq!(entry_par(&round, 1, 4), 3);

    round
        .scores
        .insert("p2".into(), vec![HoleScore::default(), HoleScore::played(2, 4).with_par(5)]);
    assert_eq!(entry_par(&round, 2, 4), 5);
    assert_eq!(entry_par(&round, 1, 4), 3);

    let mut pars = vec![4; 18];
    pars[1] = 3;
    round.hole_pars = Some(pars);
    assert_eq!(entry_par(&round, 2, 4), 3);
}

#[test]
fn test5_increment_and_decrement_are_bounded() {
    let round = round_with("r1", 18, Some(72), &[]);
    let mut draft = ScoreDraft::seed(&round, 1, &ids(&["p1"]), 4);
    assert_eq!(draft.decrement("p1"), Some(3));
    assert_eq!(draft.decrement("p1"), Some(2));
    assert_eq!(draft.decrement("p1"), Some(1));
    assert_eq!(draft.decrement("p1"), Some(1));
    assert_eq!(draft.increment("p1"), Some(2));
    assert_eq!(draft.set("p1", 15), Ok(Some(15)));
    assert_eq!(draft.increment("p1"), Some(15));
    assert_eq!(draft.increment("ghost"), None);
}

#[test]
fn test5_set_refuses_out_of_range_strokes() {
    let round = round_with("r1", 18, Some(72), &[]);
    let mut draft = ScoreDraft::seed(&round, 5, &ids(&["p1"]), 4);
    assert_eq!(
        draft.set("p1", 20),
        Err(CoreError::InvalidScore { hole: 5, score: 20 })
    );
    assert_eq!(
        draft.set("p1", 0),
        Err(CoreError::InvalidScore { hole: 5, score: 0 })
    );
    assert_eq!(draft.score("p1"), Some(4));
    assert_eq!(draft.set("p1", 7), Ok(Some(7)));
    assert_eq!(check_strokes(1, 1), Ok(1));
}

#[test]
fn test5_update_does_not_truncate_explicit_strokes() {
    let round = round_with("r1", 18, Some(72), &[]);
    let mut model = model_for(&round, &["p1"], CommitMode::PerPlayer);
    update(&mut model, &round, Msg::OpenDialog(None));
    update(&mut model, &round, Msg::SetScore("p1".into(), 20));
    let effects = update(&mut model, &round, Msg::SaveAndAdvance);

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::CommitScore(commit) => assert_eq!(commit.score, 4),
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn test5_save_and_advance_moves_to_next_hole() {
    let round = round_with("r1", 3, Some(12), &[]);
    let mut session = GroupSession::new(&round, &group("g1", &["p1", "p2"]));
    session.open_dialog(Some(1));
    let mut draft = ScoreDraft::seed(&round, 1, session.player_ids(), 4);
    draft.increment("p2");

    let saved = save_and_advance(&mut session, &draft, &round, &RoundContext::Standalone, 4, 3);
    assert_eq!(saved.commits.len(), 2);
    assert_eq!(saved.commits[0].player_id, "p1");
    assert_eq!(saved.commits[0].hole, 1);
    assert_eq!(saved.commits[0].score, 4);
    assert_eq!(saved.commits[1].score, 5);
    assert_eq!(session.dialog_hole, 2);
    assert_eq!(session.current_hole, 2);
    assert!(session.is_dialog_open);
    assert_eq!(saved.next.as_ref().map(ScoreDraft::hole), Some(2));
}

#[test]
fn test5_save_on_last_hole_finishes() {
    let round = round_with("r1", 3, Some(12), &[]);
    let mut session = GroupSession::new(&round, &group("g1", &["p1"]));
    session.open_dialog(Some(3));
    session.toggle_expanded("p1");
    let draft = ScoreDraft::seed(&round, 3, session.player_ids(), 4);

    let saved = save_and_advance(&mut session, &draft, &round, &RoundContext::Standalone, 4, 3);
    assert_eq!(saved.commits.len(), 1);
    assert_eq!(saved.next, None);
    assert!(!session.is_dialog_open);
    assert_eq!(session.dialog_hole, 3);
    assert_eq!(session.current_hole, 3);
    assert!(session.expanded_player_ids.is_empty());
}

fn model_for(round: &Round, players: &[&str], mode: CommitMode) -> ScoringModel {
    let config = SessionConfig {
        context: RoundContext::Tournament {
            tournament_id: "t1".into(),
        },
        commit_mode: mode,
        ..SessionConfig::default()
    };
    ScoringModel::new(config, round, &group("g1", players))
}

#[test]
fn test5_update_emits_one_commit_per_player() {
    let round = round_with("r1", 18, Some(72), &[]);
    let mut model = model_for(&round, &["p1", "p2"], CommitMode::PerPlayer);

    assert!(update(&mut model, &round, Msg::OpenDialog(None)).is_empty());
    update(&mut model, &round, Msg::Decrement("p1".into()));
    let effects = update(&mut model, &round, Msg::SaveAndAdvance);

    assert_eq!(effects.len(), 2);
    match &effects[0] {
        Effect::CommitScore(commit) => {
            assert_eq!(commit.player_id, "p1");
            assert_eq!(commit.score, 3);
            assert_eq!(commit.hole, 1);
            assert_eq!(
                commit.context,
                RoundContext::Tournament {
                    tournament_id: "t1".into()
                }
            );
        }
        other => panic!("unexpected effect {other:?}"),
    }
    assert_eq!(model.pending_commits, 2);
    assert_eq!(model.session.dialog_hole, 2);
    assert_eq!(model.draft.as_ref().map(ScoreDraft::hole), Some(2));
}

#[test]
fn test5_update_batches_when_configured() {
    let round = round_with("r1", 18, Some(72), &[]);
    let mut model = model_for(&round, &["p1", "p2", "p3"], CommitMode::Batched);
    update(&mut model, &round, Msg::OpenDialog(Some(4)));
    let effects = update(&mut model, &round, Msg::SaveAndAdvance);
    assert_eq!(effects.len(), 1);
    assert_eq!(effects[0].commit_count(), 3);
}

#[test]
fn test5_save_without_open_dialog_does_nothing() {
    let round = round_with("r1", 18, Some(72), &[]);
    let mut model = model_for(&round, &["p1"], CommitMode::PerPlayer);
    assert!(update(&mut model, &round, Msg::SaveAndAdvance).is_empty());
    assert_eq!(model.session.current_hole, 1);

    update(&mut model, &round, Msg::OpenDialog(None));
    update(&mut model, &round, Msg::CloseDialog);
    assert!(model.draft.is_none());
    assert!(update(&mut model, &round, Msg::SaveAndAdvance).is_empty());
}

#[test]
fn test5_resupplied_round_keeps_open_draft() {
    let round = round_with("r1", 18, Some(72), &[]);
    let mut model = model_for(&round, &["p1"], CommitMode::PerPlayer);
    update(&mut model, &round, Msg::OpenDialog(None));
    update(&mut model, &round, Msg::Increment("p1".into()));

    let saved = round_with("r1", 18, Some(72), &[("p1", &[Some(9)])]);
    update(&mut model, &saved, Msg::RoundSupplied(group("g1", &["p1"])));
    assert_eq!(model.draft.as_ref().and_then(|d| d.score("p1")), Some(5));

    update(&mut model, &saved, Msg::RoundSupplied(group("g1", &["p1", "p2"])));
    assert!(model.draft.is_none());
    assert!(!model.session.is_dialog_open);
}

#[test]
fn test5_shrinking_course_with_open_dialog_commits_dialog_hole() {
    let round = round_with("r1", 18, Some(72), &[]);
    let mut model = model_for(&round, &["p1", "p2"], CommitMode::PerPlayer);
    update(&mut model, &round, Msg::OpenDialog(Some(15)));
    assert_eq!(model.draft.as_ref().map(ScoreDraft::hole), Some(15));

    let shorter = round_with("r1", 9, Some(36), &[]);
    update(&mut model, &shorter, Msg::RoundSupplied(group("g1", &["p1", "p2"])));
    assert_eq!(model.session.dialog_hole, 9);
    assert!(model.session.is_dialog_open);
    assert_eq!(model.draft.as_ref().map(ScoreDraft::hole), Some(9));

    let effects = update(&mut model, &shorter, Msg::SaveAndAdvance);
    let holes: Vec<i32> = effects
        .iter()
        .map(|effect| match effect {
            Effect::CommitScore(commit) => commit.hole,
            other => panic!("unexpected effect {other:?}"),
        })
        .collect();
    assert_eq!(holes, vec![9, 9]);
    assert!(!model.session.is_dialog_open);
}

#[test]
fn test5_stale_draft_is_reseeded_instead_of_committed() {
    let round = round_with("r1", 9, Some(36), &[]);
    let mut session = GroupSession::new(&round, &group("g1", &["p1"]));
    session.open_dialog(Some(4));
    let stale = ScoreDraft::seed(&round, 7, session.player_ids(), 4);

    let saved = save_and_advance(&mut session, &stale, &round, &RoundContext::Standalone, 4, 9);
    assert!(saved.commits.is_empty());
    assert_eq!(saved.next.as_ref().map(ScoreDraft::hole), Some(4));
    assert_eq!(session.dialog_hole, 4);
    assert!(session.is_dialog_open);
}
