use serde::Serialize;
use std::cmp::Ordering;

use super::aggregate::{color_for, holes_played, score_to_par, section_total, total_score};
use super::sections::{Granularity, sections_for};
use crate::model::{Player, PlayerId, Round, Team};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionTotal {
    pub label: String,
    pub total: i32,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub player_id: PlayerId,
    pub name: String,
    pub total: i32,
    pub sections: Vec<SectionTotal>,
    pub to_par: Option<i32>,
    /// Styling hook for the to-par column.
    pub to_par_class: &'static str,
    pub thru: i32,
    pub position: usize,
    pub position_label: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamTotal {
    pub team_id: String,
    pub name: String,
    pub color: String,
    pub total: i32,
    pub to_par: Option<i32>,
    pub players: Vec<PlayerId>,
    pub position: usize,
    pub position_label: String,
}

/// Players with a relative-to-par figure rank ahead of those without; then
/// lower is better.
fn ranking_cmp(a: (Option<i32>, i32), b: (Option<i32>, i32)) -> Ordering {
    let by_par = match (a.0, b.0) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_par.then(a.1.cmp(&b.1))
}

/// Positions for an already-sorted list; equal keys share the position of
/// the first of them and are labeled `T{n}`.
fn positions(keys: &[(Option<i32>, i32)]) -> Vec<(usize, String)> {
    let mut out = Vec::with_capacity(keys.len());
    let mut start = 0;
    while start < keys.len() {
        let mut end = start + 1;
        while end < keys.len() && keys[end] == keys[start] {
            end += 1;
        }
        let position = start + 1;
        let label = if end - start > 1 {
            format!("T{position}")
        } else {
            position.to_string()
        };
        out.extend(std::iter::repeat_n((position, label), end - start));
        start = end;
    }
    out
}

/// Leaderboard for a round, best first.
#[must_use]
pub fn round_summary(round: &Round, players: &[Player]) -> Vec<PlayerSummary> {
    let sections = sections_for(round.hole_count(), Granularity::Full);
    let course_par = round.course_par();
    let course_holes = Some(round.hole_count());

    let mut summaries: Vec<PlayerSummary> = players
        .iter()
        .map(|player| PlayerSummary {
            player_id: player.id.clone(),
            name: player.name.clone(),
            total: total_score(&player.id, round),
            sections: sections
                .iter()
                .map(|section| SectionTotal {
                    label: section.label.clone(),
                    total: section_total(&player.id, round, &section.holes),
                })
                .collect(),
            to_par: score_to_par(&player.id, round, course_par, course_holes),
            to_par_class: "",
            thru: holes_played(&player.id, round),
            position: 0,
            position_label: String::new(),
        })
        .collect();

    summaries.sort_by(|a, b| {
        ranking_cmp((a.to_par, a.total), (b.to_par, b.total)).then_with(|| a.name.cmp(&b.name))
    });

    let keys: Vec<_> = summaries.iter().map(|s| (s.to_par, s.total)).collect();
    for (summary, (position, label)) in summaries.iter_mut().zip(positions(&keys)) {
        summary.position = position;
        summary.position_label = label;
        summary.to_par_class = color_for(summary.to_par).css_class();
    }
    summaries
}

/// Aggregate totals per team over the given roster. Teams with no member
/// in the roster are left out.
#[must_use]
pub fn team_totals(round: &Round, players: &[Player], teams: &[Team]) -> Vec<TeamTotal> {
    let course_par = round.course_par();
    let course_holes = Some(round.hole_count());

    let mut totals: Vec<TeamTotal> = teams
        .iter()
        .filter_map(|team| {
            let members: Vec<&Player> = players
                .iter()
                .filter(|p| p.team_id.as_deref() == Some(team.id.as_str()))
                .collect();
            if members.is_empty() {
                return None;
            }
            let to_par = members
                .iter()
                .filter_map(|p| score_to_par(&p.id, round, course_par, course_holes))
                .reduce(|acc, v| acc + v);
            Some(TeamTotal {
                team_id: team.id.clone(),
                name: team.name.clone(),
                color: team.color.clone(),
                total: members.iter().map(|p| total_score(&p.id, round)).sum(),
                to_par,
                players: members.iter().map(|p| p.id.clone()).collect(),
                position: 0,
                position_label: String::new(),
            })
        })
        .collect();

    totals.sort_by(|a, b| {
        ranking_cmp((a.to_par, a.total), (b.to_par, b.total)).then_with(|| a.name.cmp(&b.name))
    });

    let keys: Vec<_> = totals.iter().map(|t| (t.to_par, t.total)).collect();
    for (total, (position, label)) in totals.iter_mut().zip(positions(&keys)) {
        total.position = position;
        total.position_label = label;
    }
    totals
}
