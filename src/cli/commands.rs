//! Command handlers.
//!
//! Each handler loads the roster, applies one operation, persists when
//! the operation mutates, and prints a short status line.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::draw::DrawEngine;
use crate::models::{Roster, RosterError, Round};
use crate::store::RosterStore;

use super::{Args, Command};

/// Runs the parsed command to completion.
pub fn run(args: &Args) -> Result<()> {
    let store = RosterStore::new(&args.data_file);
    let mut roster = store
        .load()
        .with_context(|| format!("failed to load roster from {}", args.data_file.display()))?;

    match &args.command {
        Command::Roster => show_roster(&roster),

        Command::AddCompetitor { name } => {
            let display = roster.add_competitor(name)?.display_name();
            store.save(&roster)?;
            println!("{} competitor: {}", "Added".green(), display);
        }

        Command::RemoveCompetitor { name } => {
            let removed = roster.remove_competitor(name)?;
            store.save(&roster)?;
            println!("{} competitor: {}", "Deleted".yellow(), removed.display_name());
        }

        Command::AddJudge { name, room } => {
            let judge = roster.add_judge(name, room)?;
            let line = format!("{} in room {}", judge.display_name(), judge.room);
            store.save(&roster)?;
            println!("{} judge: {}", "Added".green(), line);
        }

        Command::RemoveJudge { name } => {
            let removed = roster.remove_judge(name)?;
            store.save(&roster)?;
            println!("{} judge: {}", "Deleted".yellow(), removed.display_name());
        }

        Command::Draw {
            competitors,
            judges,
        } => {
            let selected_competitors = if competitors.is_empty() {
                roster.competitors.clone()
            } else {
                roster.select_competitors(competitors)?
            };
            let selected_judges = if judges.is_empty() {
                roster.judges.clone()
            } else {
                roster.select_judges(judges)?
            };

            let assignments = DrawEngine::new().draw(&selected_competitors, &selected_judges)?;
            let round = roster.record_round(assignments).clone();
            store.save(&roster)?;

            println!("{} {}", "Recorded".green(), round.name.bold());
            print_round(&round);
        }

        Command::Rounds => {
            if roster.rounds.is_empty() {
                println!("No rounds recorded.");
            }
            for round in &roster.rounds {
                println!(
                    "{:>3}  {}  {}  ({} judges, {} competitors)",
                    round.id,
                    round.name.bold(),
                    round.created_at.format("%Y-%m-%d %H:%M"),
                    round.assignments.len(),
                    round.competitor_count(),
                );
            }
        }

        Command::ShowRound { id } => {
            let round = roster.round(*id).ok_or(RosterError::UnknownRound(*id))?;
            println!(
                "{}  {}",
                round.name.bold(),
                round.created_at.format("%Y-%m-%d %H:%M")
            );
            print_round(round);
        }

        Command::ClearRounds => {
            roster.clear_rounds();
            store.save(&roster)?;
            println!("All rounds have been cleared.");
        }
    }

    Ok(())
}

fn show_roster(roster: &Roster) {
    println!("{}", "Competitors".bold());
    if roster.competitors.is_empty() {
        println!("  (none)");
    }
    for c in &roster.competitors {
        println!("  {}", c.display_name());
    }

    println!("{}", "Judges".bold());
    if roster.judges.is_empty() {
        println!("  (none)");
    }
    for j in &roster.judges {
        println!("  {} (Room: {})", j.display_name(), j.room);
    }
}

fn print_round(round: &Round) {
    for a in &round.assignments {
        println!(
            "  Judge {} (Room {}): {}",
            a.judge.bold(),
            a.room,
            a.competitors.join(", ")
        );
    }
}
