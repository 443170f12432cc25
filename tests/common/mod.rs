#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rusty_golf_scoring::model::{
    CourseDetails, Highlight, HoleScore, MediaType, PlayerGroup, Round, ShoutOut, ShoutOutKind,
};

/// Round with the given course shape and per-player strokes. `None` marks an
/// unplayed hole.
pub fn round_with(
    id: &str,
    holes: i32,
    par: Option<i32>,
    scores: &[(&str, &[Option<i32>])],
) -> Round {
    let mut round = Round {
        id: id.to_string(),
        name: format!("Round {id}"),
        date: "2026-06-01".to_string(),
        course_details: Some(CourseDetails {
            name: Some("Pebble".to_string()),
            holes,
            par,
        }),
        format: "Stroke Play".to_string(),
        ..Round::default()
    };
    for (player_id, strokes) in scores {
        let entries = strokes
            .iter()
            .enumerate()
            .map(|(idx, score)| HoleScore {
                hole: i32::try_from(idx).unwrap() + 1,
                score: *score,
                ..HoleScore::default()
            })
            .collect();
        round.scores.insert((*player_id).to_string(), entries);
    }
    round
}

pub fn group(id: &str, players: &[&str]) -> PlayerGroup {
    PlayerGroup {
        id: id.to_string(),
        name: format!("Group {id}"),
        player_ids: players.iter().map(|p| (*p).to_string()).collect(),
        tee_time: Some("08:10".to_string()),
        starting_hole: None,
    }
}

pub fn ts(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

pub fn shout_out(id: &str, player_id: &str, hole: i32, at: i64) -> ShoutOut {
    ShoutOut {
        id: id.to_string(),
        kind: ShoutOutKind::Birdie,
        player_id: player_id.to_string(),
        round_id: Some("r1".to_string()),
        hole_number: hole,
        message: None,
        timestamp: ts(at),
    }
}

pub fn highlight(id: &str, player_id: &str, at: i64) -> Highlight {
    Highlight {
        id: id.to_string(),
        player_id: player_id.to_string(),
        title: "Chip in".to_string(),
        description: None,
        media_type: MediaType::Video,
        media_url: Some(format!("https://media.example/{id}.mp4")),
        round_id: Some("r1".to_string()),
        timestamp: ts(at),
    }
}
