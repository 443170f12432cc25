use rusty_golf_scoring::args::{self, Command, EventFile};
use rusty_golf_scoring::error::CoreError;
use rusty_golf_scoring::feed::{feed_for_round, merge_feed};
use rusty_golf_scoring::model::{FeedItem, Player, PlayerGroup, Round};
use rusty_golf_scoring::mvu::{
    CommitMode, Deps, Msg, ScoringModel, SessionConfig, check_strokes, dispatch,
};
use rusty_golf_scoring::score::{
    Granularity, first_incomplete_hole, format_relative_to_par, round_summary, score_to_par,
    section_total, sections_for, team_totals, total_score,
};
use rusty_golf_scoring::storage::MemoryScoreStore;
use serde_json::json;

#[tokio::main]
async fn main() {
    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(args.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), CoreError> {
    match command {
        Command::Card {
            event,
            group,
            compact,
            json,
        } => print_card(&event, group.as_deref(), compact, json),
        Command::NextHole { event, group } => {
            let group = find_group(&event.round, &group)?;
            let hole = first_incomplete_hole(
                &group.player_ids,
                &event.round.scores,
                event.round.hole_count(),
            );
            println!("{hole}");
            Ok(())
        }
        Command::Enter {
            event,
            group,
            hole,
            scores,
            batched,
        } => enter_hole(event, &group, hole, scores, batched).await,
        Command::Feed {
            shout_outs,
            highlights,
            round,
        } => {
            let items = merge_feed(&shout_outs.0, &highlights.0);
            let items: Vec<&FeedItem> = match round.as_deref() {
                Some(round_id) => feed_for_round(&items, round_id),
                None => items.iter().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&items)?);
            Ok(())
        }
    }
}

fn find_group<'a>(round: &'a Round, group_id: &str) -> Result<&'a PlayerGroup, CoreError> {
    round
        .group(group_id)
        .ok_or_else(|| CoreError::NotFound(format!("group {group_id} in round {}", round.id)))
}

fn print_card(
    event: &EventFile,
    group: Option<&str>,
    compact: bool,
    want_json: bool,
) -> Result<(), CoreError> {
    let round = &event.round;
    let mut players = event.roster();
    if let Some(group_id) = group {
        let group = find_group(round, group_id)?;
        players.retain(|p| group.player_ids.contains(&p.id));
    }

    let leaderboard = round_summary(round, &players);
    let teams = team_totals(round, &players, &event.teams);
    if want_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({"leaderboard": leaderboard, "teams": teams}))?
        );
        return Ok(());
    }

    let granularity = if compact {
        Granularity::Compact
    } else {
        Granularity::Full
    };
    println!("{} ({})", round.name, round.format);
    for section in sections_for(round.hole_count(), granularity) {
        let line: Vec<String> = players
            .iter()
            .map(|p| format!("{}: {}", p.name, section_total(&p.id, round, &section.holes)))
            .collect();
        println!("  {:<10} {}", section.label, line.join("  "));
    }
    for player in &players {
        print_player_line(round, player);
    }
    println!("Leaderboard");
    for row in &leaderboard {
        println!(
            "  {:>4} {:<20} {:>4} {:>4} thru {}",
            row.position_label,
            row.name,
            row.total,
            format_relative_to_par(row.to_par),
            row.thru
        );
    }
    for team in &teams {
        println!(
            "  team {:<15} {:>4} {:>4}",
            team.name,
            team.total,
            format_relative_to_par(team.to_par)
        );
    }
    Ok(())
}

fn print_player_line(round: &Round, player: &Player) {
    let to_par = score_to_par(
        &player.id,
        round,
        round.course_par(),
        Some(round.hole_count()),
    );
    let to_par = match to_par {
        Some(_) => format_relative_to_par(to_par),
        None => "-".to_string(),
    };
    println!(
        "  {:<20} total {:>4}  {}",
        player.name,
        total_score(&player.id, round),
        to_par
    );
}

async fn enter_hole(
    event: EventFile,
    group_id: &str,
    hole: Option<i32>,
    scores: Vec<(String, i32)>,
    batched: bool,
) -> Result<(), CoreError> {
    let round = event.round;
    let group = find_group(&round, group_id)?.clone();
    for (player_id, _) in &scores {
        if !group.player_ids.contains(player_id) {
            return Err(CoreError::NotFound(format!(
                "player {player_id} in group {group_id}"
            )));
        }
    }

    let store = MemoryScoreStore::new();
    store.insert_round(round.clone()).await;
    let deps = Deps { store: &store };

    let config = SessionConfig {
        commit_mode: if batched {
            CommitMode::Batched
        } else {
            CommitMode::PerPlayer
        },
        ..SessionConfig::default()
    };
    let mut model = ScoringModel::new(config, &round, &group);

    dispatch(&mut model, &round, Msg::OpenDialog(hole), deps).await;
    let saved_hole = model.session.dialog_hole;
    for (_, strokes) in &scores {
        check_strokes(saved_hole, *strokes)?;
    }
    for (player_id, strokes) in scores {
        dispatch(&mut model, &round, Msg::SetScore(player_id, strokes), deps).await;
    }
    let failures = dispatch(&mut model, &round, Msg::SaveAndAdvance, deps).await;

    eprintln!(
        "{}",
        json!({
            "saved_hole": saved_hole,
            "next_hole": model.session.current_hole,
            "dialog_open": model.session.is_dialog_open,
            "failures": failures,
        })
    );

    let updated = store
        .round(&round.id)
        .await
        .ok_or_else(|| CoreError::NotFound(format!("round {}", round.id)))?;
    println!("{}", serde_json::to_string_pretty(&updated)?);
    Ok(())
}
