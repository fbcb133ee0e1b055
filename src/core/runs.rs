use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{list_runs, require_run};
use crate::errors::AppResult;
use crate::models::{RaffleRun, WinnerRecord};
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Browsing of stored draws.
pub struct RunsLogic;

impl RunsLogic {
    pub fn list(pool: &mut DbPool, cfg: &Config, as_json: bool) -> AppResult<()> {
        let list = list_runs(&pool.conn, &cfg.user_id)?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&list)?);
            return Ok(());
        }

        if list.runs.is_empty() {
            info("No raffle runs saved yet.");
            return Ok(());
        }

        header("Raffle runs");
        let mut table = Table::new(["Run ID", "Timestamp", "Entries", "Tickets", "Winners"]);
        for run in &list.runs {
            table.add_row(vec![
                run.run_id.clone(),
                run.timestamp.clone(),
                run.entries.len().to_string(),
                run.total_entries.to_string(),
                run.winners.len().to_string(),
            ]);
        }
        print!("{}", table.render());

        Ok(())
    }

    pub fn show(pool: &mut DbPool, cfg: &Config, run_id: &str, as_json: bool) -> AppResult<()> {
        let run = require_run(&pool.conn, &cfg.user_id, run_id)?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&run)?);
            return Ok(());
        }

        print_run(&run);
        Ok(())
    }
}

fn print_run(run: &RaffleRun) {
    header(format!("Run {}", run.run_id));
    println!("Timestamp : {}", run.timestamp);
    println!("Entries   : {}", run.entries.len());
    println!("Tickets   : {}", run.total_entries);
    if let Some(public) = run.is_public {
        println!("Public    : {}", if public { "yes" } else { "no" });
    }
    println!();
    print!("{}", winners_table(&run.winners).render());
}

/// Prize / winner / email table, shared with the `draw` output.
pub fn winners_table(winners: &[WinnerRecord]) -> Table {
    let mut table = Table::new(["#", "Prize", "Winner", "Email"]);
    for (i, w) in winners.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            w.prize.clone(),
            w.name.clone(),
            w.email.clone().unwrap_or_default(),
        ]);
    }
    table
}
