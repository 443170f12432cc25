use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::model::{Highlight, Player, Round, ShoutOut, Team};

/// Input document for the scoring commands: a round plus the roster it is
/// scored against.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventFile {
    pub round: Round,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl EventFile {
    /// The roster, or one player per scored id when the file lists none.
    #[must_use]
    pub fn roster(&self) -> Vec<Player> {
        if self.players.is_empty() {
            self.round
                .scores
                .keys()
                .map(|id| Player::new(id.clone(), id.clone()))
                .collect()
        } else {
            self.players.clone()
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShoutOutFile(pub Vec<ShoutOut>);

#[derive(Clone, Debug)]
pub struct HighlightFile(pub Vec<Highlight>);

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Per-player section totals, relative-to-par and the leaderboard.
    Card {
        #[arg(
            short = 'e',
            long,
            value_name = "EVENT_JSON",
            value_parser = crate::args::validation::check_event_file
        )]
        event: EventFile,
        /// Only show the players of this group.
        #[arg(short = 'g', long, value_name = "GROUP_ID")]
        group: Option<String>,
        /// Six holes per row instead of nine.
        #[arg(long)]
        compact: bool,
        #[arg(long)]
        json: bool,
    },
    /// First hole the group has not finished scoring.
    NextHole {
        #[arg(
            short = 'e',
            long,
            value_name = "EVENT_JSON",
            value_parser = crate::args::validation::check_event_file
        )]
        event: EventFile,
        #[arg(short = 'g', long, value_name = "GROUP_ID")]
        group: String,
    },
    /// Enter one hole for a group and print the updated round.
    Enter {
        #[arg(
            short = 'e',
            long,
            value_name = "EVENT_JSON",
            value_parser = crate::args::validation::check_event_file
        )]
        event: EventFile,
        #[arg(short = 'g', long, value_name = "GROUP_ID")]
        group: String,
        /// Defaults to the group's first incomplete hole.
        #[arg(long, value_name = "HOLE")]
        hole: Option<i32>,
        /// PLAYER_ID=STROKES, repeatable. Players left out keep the proposed score.
        #[arg(
            short = 's',
            long = "score",
            value_name = "PLAYER_ID=STROKES",
            value_parser = crate::args::validation::parse_player_score
        )]
        scores: Vec<(String, i32)>,
        /// Save the whole hole in one all-or-nothing commit.
        #[arg(long)]
        batched: bool,
    },
    /// Shout-outs and highlights merged into one timeline, newest first.
    Feed {
        #[arg(
            long,
            value_name = "SHOUT_OUTS_JSON",
            value_parser = crate::args::validation::check_shout_outs_file
        )]
        shout_outs: ShoutOutFile,
        #[arg(
            long,
            value_name = "HIGHLIGHTS_JSON",
            value_parser = crate::args::validation::check_highlights_file
        )]
        highlights: HighlightFile,
        /// Only items logged against this round.
        #[arg(long, value_name = "ROUND_ID")]
        round: Option<String>,
    },
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if a hole number is out of range or a group id is unknown.
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Enter {
                event, group, hole, ..
            } => {
                check_group(event, group)?;
                if let Some(hole) = hole
                    && (*hole < 1 || *hole > event.round.hole_count())
                {
                    return Err(format!(
                        "Hole {hole} is outside 1..={} for round {}.",
                        event.round.hole_count(),
                        event.round.id
                    ));
                }
                Ok(())
            }
            Command::NextHole { event, group } => check_group(event, group),
            Command::Card {
                event,
                group: Some(group),
                ..
            } => check_group(event, group),
            Command::Card { .. } | Command::Feed { .. } => Ok(()),
        }
    }
}

fn check_group(event: &EventFile, group: &str) -> Result<(), String> {
    if event.round.group(group).is_none() {
        return Err(format!(
            "Group '{group}' is not part of round {}.",
            event.round.id
        ));
    }
    Ok(())
}
