use anyhow::{bail, Result};
use colored::{ColoredString, Colorize};
use log::info;

use crate::cli::Command;
use crate::domain::time::{format_date, parse_date};
use crate::domain::{NewTournament, Player, Tournament, TournamentStatus, TournamentUpdate};
use crate::errors::AppError;
use crate::gateway::Gateway;
use crate::scoring::display::{format_to_par, format_total};
use crate::scoring::{HoleView, LeaderboardRow, RankingPolicy};
use crate::services::bootstrap::{Bootstrapper, SeedOutcome};
use crate::store::validation::parse_handicap;
use crate::store::{Dashboard, LeaderboardView, PlayerScorecard, Store};

/// Run a data command against the store
pub async fn run<G: Gateway>(store: &Store<G>, command: &Command) -> Result<()> {
    match command {
        Command::Seed => seed(store).await,
        Command::Players { search } => list_players(store, search.as_deref()).await,
        Command::AddPlayer { name, handicap } => {
            let handicap = parse_handicap(handicap, &store.config().scoring)?;
            let id = store.create_player(name, handicap).await?;
            println!("{} {}", "Added player".green(), id);
            Ok(())
        }
        Command::Player { player_id } => show_player(store, player_id).await,
        Command::EditPlayer { player_id, name, handicap } => {
            if name.is_none() && handicap.is_none() {
                bail!("Nothing to change, pass --name or --handicap");
            }
            let handicap = handicap
                .as_deref()
                .map(|h| parse_handicap(h, &store.config().scoring))
                .transpose()?;
            store.update_player(player_id, name.as_deref(), handicap).await?;
            println!("{} {}", "Updated player".green(), player_id);
            Ok(())
        }
        Command::DeletePlayer { player_id } => {
            store.delete_player(player_id).await?;
            println!("{} {}", "Deleted player".green(), player_id);
            Ok(())
        }
        Command::Tournaments { status } => list_tournaments(store, *status).await,
        Command::AddTournament { name, date, location, format } => {
            let input = NewTournament {
                name: name.clone(),
                date: parse_date(date)?,
                format: *format,
                location: location.clone(),
            };
            let id = store.create_tournament(&input).await?;
            println!("{} {}", "Added tournament".green(), id);
            Ok(())
        }
        Command::SetStatus { tournament_id, status } => {
            store.set_tournament_status(tournament_id, *status).await?;
            println!("{} is now {}", tournament_id, status);
            Ok(())
        }
        Command::EditTournament { tournament_id, name, date, location, format, status } => {
            let update = TournamentUpdate {
                name: name.clone(),
                date: date.as_deref().map(parse_date).transpose()?,
                format: *format,
                status: *status,
                location: location.clone(),
            };
            if update == TournamentUpdate::default() {
                bail!("Nothing to change, pass at least one field");
            }
            store.update_tournament(tournament_id, &update).await?;
            println!("{} {}", "Updated tournament".green(), tournament_id);
            Ok(())
        }
        Command::DeleteTournament { tournament_id } => {
            store.delete_tournament(tournament_id).await?;
            println!("{} {}", "Deleted tournament".green(), tournament_id);
            Ok(())
        }
        Command::Register { tournament_id, player_id } => {
            store.register_player(tournament_id, player_id).await?;
            println!("{}", "Player registered".green());
            Ok(())
        }
        Command::Unregister { tournament_id, player_id } => {
            store.remove_player(tournament_id, player_id).await?;
            println!("{}", "Player removed".green());
            Ok(())
        }
        Command::Score { tournament_id, player_id, hole, strokes } => {
            store.record_score(tournament_id, player_id, *hole, *strokes).await?;
            println!("{} hole {}: {}", "Recorded".green(), hole, strokes);
            Ok(())
        }
        Command::Scorecard { tournament_id, player_id } => {
            if let Some(card) = inline_not_found(store.scorecard(tournament_id, player_id).await)? {
                print_scorecard(&card);
            }
            Ok(())
        }
        Command::Leaderboard { tournament_id, sort } => leaderboard(store, tournament_id.as_deref(), *sort).await,
        Command::Dashboard => {
            print_dashboard(&store.dashboard().await?);
            Ok(())
        }
        Command::Serve { .. } | Command::Completions { .. } => {
            bail!("{:?} does not run against the store", command)
        }
    }
}

/// Print a missing entity as a plain message instead of failing the command
fn inline_not_found<T>(result: crate::errors::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(AppError::NotFound { kind, .. }) => {
            println!("{} not found.", kind);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

async fn seed<G: Gateway>(store: &Store<G>) -> Result<()> {
    let observed = store.tournaments().await?;
    match Bootstrapper::new().seed_if_empty(store, &observed).await? {
        SeedOutcome::Seeded => println!("{}", "Demo data loaded".green()),
        SeedOutcome::Skipped => println!("Tournaments already exist, nothing to seed"),
        SeedOutcome::AlreadyRunning => info!("Seeding already running"),
    }
    Ok(())
}

async fn list_players<G: Gateway>(store: &Store<G>, search: Option<&str>) -> Result<()> {
    let players = store.search_players(search.unwrap_or_default()).await?;
    if players.is_empty() {
        println!("No players found.");
    }
    for player in &players {
        println!("{}", format_player_line(player));
    }
    Ok(())
}

async fn show_player<G: Gateway>(store: &Store<G>, player_id: &str) -> Result<()> {
    let Some(player) = inline_not_found(store.player(player_id).await)? else {
        return Ok(());
    };
    println!("{}", format_player_line(&player));

    let tournaments = store.tournaments_for_player(player_id).await?;
    if tournaments.is_empty() {
        println!("Not registered to any tournament.");
    }
    for tournament in &tournaments {
        println!("  {}", format_tournament_line(tournament));
    }
    Ok(())
}

async fn list_tournaments<G: Gateway>(store: &Store<G>, status: Option<TournamentStatus>) -> Result<()> {
    let tournaments = store.tournaments_by_status(status).await?;
    if tournaments.is_empty() {
        println!("No tournaments found.");
    }
    for tournament in &tournaments {
        println!("{}", format_tournament_line(tournament));
    }
    Ok(())
}

async fn leaderboard<G: Gateway>(store: &Store<G>, tournament_id: Option<&str>, sort: bool) -> Result<()> {
    let tournament_id = match tournament_id {
        Some(id) => id.to_string(),
        None => match store.default_leaderboard_tournament().await? {
            Some(tournament) => tournament.id,
            None => {
                println!("No tournaments yet.");
                return Ok(());
            }
        },
    };
    let policy = if sort {
        RankingPolicy::SortByGross
    } else {
        store.config().scoring.ranking
    };

    if let Some(view) = inline_not_found(store.leaderboard_view(&tournament_id, policy).await)? {
        print_leaderboard(&view);
    }
    Ok(())
}

// --- Output ---

fn color_to_par(value: Option<i64>) -> ColoredString {
    let text = format_to_par(value);
    match value {
        Some(v) if v < 0 => text.green(),
        Some(v) if v > 0 => text.red(),
        _ => text.normal(),
    }
}

fn format_player_line(player: &Player) -> String {
    format!("{:<24} HCP {:>2}  {}", player.name, player.handicap, player.id.dimmed())
}

fn format_tournament_line(tournament: &Tournament) -> String {
    let status = match tournament.status {
        TournamentStatus::InProgress => tournament.status.label().green().bold(),
        TournamentStatus::Upcoming => tournament.status.label().yellow(),
        TournamentStatus::Completed => tournament.status.label().normal(),
    };
    format!(
        "{:<28} {:<12} {:<18} {:<12} {}  {}",
        tournament.name,
        tournament.format.label(),
        format_date(tournament.date),
        status,
        tournament.location,
        tournament.id.dimmed()
    )
}

fn format_leaderboard_line(row: &LeaderboardRow, stableford: bool) -> String {
    let rank = match row.medal {
        Some(medal) => format!("{} {:>2}", medal.symbol(), row.rank),
        None => format!("   {:>2}", row.rank),
    };
    let mut line = format!(
        "{}  {:<24} HCP {:>2}  Gross {:>3}  Net {:>3}",
        rank,
        row.player.name,
        row.handicap,
        format_total(row.gross),
        format_total(row.net)
    );
    if !stableford {
        line.push_str(&format!("  {:>3}", color_to_par(row.to_par)));
    }
    line
}

fn print_leaderboard(view: &LeaderboardView) {
    println!(
        "{}  {}  {}",
        view.tournament.name.bold(),
        view.tournament.format.label(),
        format_date(view.tournament.date)
    );
    if view.rows.is_empty() {
        println!("No players registered.");
    }
    for row in &view.rows {
        println!("{}", format_leaderboard_line(row, view.is_stableford()));
    }
}

fn cells(holes: &[HoleView], cell: impl Fn(&HoleView) -> String) -> String {
    holes.iter().map(|h| format!("{:>3}", cell(h))).collect()
}

fn format_nine(label: &str, holes: &[HoleView], stableford: bool) -> Vec<String> {
    let played: Vec<i64> = holes.iter().filter_map(|h| h.strokes).collect();
    let subtotal = (!played.is_empty()).then(|| played.iter().sum::<i64>());

    let mut lines = vec![
        format!("{:<6}{}  {}", "Hole", cells(holes, |h| h.hole.to_string()), label),
        format!("{:<6}{}  {:>3}", "Par", cells(holes, |h| h.par.to_string()), holes.iter().map(|h| h.par).sum::<i64>()),
        format!(
            "{:<6}{}  {:>3}",
            "Score",
            cells(holes, |h| format_total(h.strokes)),
            format_total(subtotal)
        ),
    ];
    if stableford {
        let points: i64 = holes.iter().filter_map(|h| h.points).sum();
        lines.push(format!(
            "{:<6}{}  {:>3}",
            "Pts",
            cells(holes, |h| format_total(h.points)),
            points
        ));
    }
    lines
}

fn print_scorecard(card: &PlayerScorecard) {
    let scorecard = &card.scorecard;
    println!("{}  HCP {}", card.player.name.bold(), card.player.handicap);
    for line in format_nine("Out", scorecard.front_nine(), card.is_stableford())
        .into_iter()
        .chain(format_nine("In", scorecard.back_nine(), card.is_stableford()))
    {
        println!("{}", line);
    }
    println!("{}", format_summary(card));
}

/// Totals line; stableford cards show points where stroke play shows to-par
fn format_summary(card: &PlayerScorecard) -> String {
    let scorecard = &card.scorecard;
    let last = if card.is_stableford() {
        format!("Points {}", scorecard.stableford_total)
    } else {
        format!("To par {}", color_to_par(scorecard.to_par()))
    };
    format!(
        "Played {}  Gross {}  Net {}  {}",
        scorecard.holes_played,
        format_total(scorecard.gross()),
        format_total(scorecard.net()),
        last
    )
}

fn print_dashboard(dashboard: &Dashboard) {
    println!("{}", "Dashboard".bold());
    println!("Tournaments  {}", dashboard.total_tournaments);
    println!("  In progress  {}", dashboard.in_progress);
    println!("  Upcoming     {}", dashboard.upcoming);
    println!("  Completed    {}", dashboard.completed);
    println!("Players      {}", dashboard.total_players);
    for tournament in &dashboard.live {
        println!("{} {}", "Live:".green().bold(), tournament.name);
    }
}
