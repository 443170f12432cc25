use serde::de::DeserializeOwned;
use std::{fs, path::PathBuf};

use super::types::{EventFile, HighlightFile, ShoutOutFile};
use crate::model::{MAX_STROKES, MIN_STROKES};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    fs::read_to_string(&path).map_err(|e| format!("The json file '{file}' is not readable: {e}"))
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json for `T`
pub fn check_readable_file_and_json<T: DeserializeOwned>(file: &str) -> Result<T, String> {
    let contents = check_readable_file(file)?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not in the correct format: {e}"))
}

/// Reads an event file and checks the round is usable for scoring:
/// a positive hole count, no group members missing from the roster, and
/// no stored score outside `1..=15`.
///
/// # Errors
///
/// Will return `Err` if the file is unreadable or the round is malformed
pub fn check_event_file(file: &str) -> Result<EventFile, String> {
    let event: EventFile = check_readable_file_and_json(file)?;
    validate_event(&event)?;
    Ok(event)
}

/// # Errors
///
/// Will return `Err` if the round is malformed
pub fn validate_event(event: &EventFile) -> Result<(), String> {
    let round = &event.round;
    if round.hole_count() <= 0 {
        return Err(format!(
            "Round {} has {} holes, expected a positive number.",
            round.id,
            round.hole_count()
        ));
    }
    if let Some(pars) = &round.hole_pars
        && i32::try_from(pars.len()).ok() != Some(round.hole_count())
    {
        return Err(format!(
            "Round {} lists {} hole pars for {} holes.",
            round.id,
            pars.len(),
            round.hole_count()
        ));
    }

    if !event.players.is_empty() {
        for group in &round.player_groups {
            for player_id in &group.player_ids {
                if !event.players.iter().any(|p| &p.id == player_id) {
                    return Err(format!(
                        "Group '{}' lists player '{player_id}' who is not on the roster.",
                        group.id
                    ));
                }
            }
        }
    }

    for (player_id, entries) in &round.scores {
        for entry in entries {
            if let Some(score) = entry.score
                && !(MIN_STROKES..=MAX_STROKES).contains(&score)
            {
                return Err(format!(
                    "Player '{player_id}' has score {score} on hole {}, expected 1..=15.",
                    entry.hole
                ));
            }
        }
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the file is unreadable or not a list of shout-outs
pub fn check_shout_outs_file(file: &str) -> Result<ShoutOutFile, String> {
    check_readable_file_and_json(file).map(ShoutOutFile)
}

/// # Errors
///
/// Will return `Err` if the file is unreadable or not a list of highlights
pub fn check_highlights_file(file: &str) -> Result<HighlightFile, String> {
    check_readable_file_and_json(file).map(HighlightFile)
}

/// Parses `PLAYER_ID=STROKES`.
///
/// # Errors
///
/// Will return `Err` if the value has no `=`, the strokes are not a number, or
/// the strokes fall outside `MIN_STROKES..=MAX_STROKES`
pub fn parse_player_score(value: &str) -> Result<(String, i32), String> {
    let (player_id, strokes) = value
        .split_once('=')
        .ok_or_else(|| format!("Expected PLAYER_ID=STROKES, got '{value}'."))?;
    let player_id = player_id.trim();
    if player_id.is_empty() {
        return Err(format!("Missing player id in '{value}'."));
    }
    let strokes: i32 = strokes
        .trim()
        .parse()
        .map_err(|_| format!("Strokes in '{value}' must be a number."))?;
    if !(MIN_STROKES..=MAX_STROKES).contains(&strokes) {
        return Err(format!(
            "Strokes in '{value}' must be between {MIN_STROKES} and {MAX_STROKES}."
        ));
    }
    Ok((player_id.to_string(), strokes))
}
