use rusty_golf_scoring::args::validation::{
    check_event_file, check_shout_outs_file, parse_player_score,
};
use std::io::Write;

fn write_json(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test9_parse_player_score() {
    assert_eq!(parse_player_score("p1=4"), Ok(("p1".to_string(), 4)));
    assert_eq!(parse_player_score(" p2 = 5 "), Ok(("p2".to_string(), 5)));
    assert!(parse_player_score("p1").is_err());
    assert!(parse_player_score("=4").is_err());
    assert!(parse_player_score("p1=four").is_err());
}

#[test]
fn test9_parse_player_score_rejects_out_of_range_strokes() {
    assert_eq!(parse_player_score("p1=15"), Ok(("p1".to_string(), 15)));
    assert_eq!(parse_player_score("p1=1"), Ok(("p1".to_string(), 1)));
    assert!(parse_player_score("p1=20").unwrap_err().contains("between 1 and 15"));
    assert!(parse_player_score("p1=0").is_err());
    assert!(parse_player_score("p1=-3").is_err());
}

#[test]
fn test9_event_file_defaults() {
    let file = write_json(
        r#"{
            "round": {
                "id": "r1",
                "name": "Saturday",
                "courseDetails": {"par": 72},
                "scores": {"p1": [{"hole": 1, "score": 4}, {"hole": 2}]},
                "playerGroups": [{"id": "g1", "name": "First", "playerIds": ["p1"]}]
            }
        }"#,
    );
    let event = check_event_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(event.round.hole_count(), 18);
    assert_eq!(event.round.course_par(), Some(72));
    assert_eq!(event.round.player_scores("p1")[1].score, None);
    assert_eq!(event.roster().len(), 1);
    assert_eq!(event.round.group("g1").unwrap().player_ids, vec!["p1"]);
}

#[test]
fn test9_event_file_rejections() {
    let unreadable = check_event_file("/definitely/not/here.json");
    assert!(unreadable.unwrap_err().contains("not readable"));

    let not_json = write_json("{ nope");
    assert!(check_event_file(not_json.path().to_str().unwrap()).is_err());

    let bad_score = write_json(r#"{"round": {"id": "r1", "name": "x", "scores": {"p1": [{"hole": 1, "score": 22}]}}}"#);
    assert!(check_event_file(bad_score.path().to_str().unwrap()).is_err());

    let zero_holes = write_json(r#"{"round": {"id": "r1", "name": "x", "courseDetails": {"holes": 0}}}"#);
    assert!(check_event_file(zero_holes.path().to_str().unwrap()).is_err());

    let stranger = write_json(
        r#"{
            "round": {"id": "r1", "name": "x", "playerGroups": [{"id": "g1", "name": "g", "playerIds": ["p9"]}]},
            "players": [{"id": "p1", "name": "Ana"}]
        }"#,
    );
    assert!(check_event_file(stranger.path().to_str().unwrap()).is_err());

    let short_pars = write_json(r#"{"round": {"id": "r1", "name": "x", "holePars": [4, 4, 3]}}"#);
    assert!(check_event_file(short_pars.path().to_str().unwrap()).is_err());
}

#[test]
fn test9_shout_outs_file() {
    let file = write_json(
        r#"[{"id": "s1", "type": "hole-in-one", "playerId": "p1", "holeNumber": 7, "timestamp": "2026-06-01T10:00:00Z"}]"#,
    );
    let parsed = check_shout_outs_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(parsed.0.len(), 1);
    assert_eq!(parsed.0[0].hole_number, 7);
    assert_eq!(parsed.0[0].round_id, None);
}
