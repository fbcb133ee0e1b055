use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draw::{DrawLogic, DrawOutcome, DrawRequest, parse_prize_spec};
use crate::core::runs::winners_table;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::ColumnMapping;
use crate::ui::messages::{header, info, success, warning, winner};
use serde_json::json;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Draw {
        file,
        name_col,
        email_col,
        tickets_col,
        prize_col,
        prizes,
        winners,
        seed,
        per_prize,
        no_save,
        public,
        json,
    } = cmd
    {
        let default_count = winners.unwrap_or(cfg.default_winners);
        let prizes = prizes
            .iter()
            .map(|p| parse_prize_spec(p, default_count))
            .collect::<AppResult<Vec<_>>>()?;

        let req = DrawRequest {
            mapping: ColumnMapping {
                name: name_col.clone(),
                email: email_col.clone(),
                tickets: tickets_col.clone(),
                prize: prize_col.clone(),
            },
            prizes,
            winners: *winners,
            seed: *seed,
            per_prize: *per_prize,
            save: !*no_save,
            is_public: public.then_some(true),
        };

        // --no-save never touches the configured database
        let mut pool = if *no_save {
            DbPool::in_memory()?
        } else {
            super::open_store(cfg)?
        };

        let outcome = DrawLogic::apply(&mut pool, cfg, file, &req)?;

        if *json {
            let body = json!({
                "runId": outcome.created.as_ref().map(|c| c.run_id.clone()),
                "prizes": outcome.prize_order,
                "entries": outcome.entries,
                "winners": outcome.winners,
                "totalEntries": outcome.pool_size,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        } else {
            print_outcome(&outcome);
        }
    }
    Ok(())
}

fn print_outcome(outcome: &DrawOutcome) {
    header("Raffle draw");
    info(format!(
        "{} participants, {} tickets, prizes: {}",
        outcome.entries.len(),
        outcome.pool_size,
        outcome.prize_order.join(", ")
    ));

    if outcome.winners.is_empty() {
        warning("No winners drawn: the ticket pool is empty.");
    } else {
        for w in &outcome.winners {
            winner(format!("{} wins {}", w.name, w.prize));
        }
        println!();
        print!("{}", winners_table(&outcome.winners).render());
    }

    if let Some(created) = &outcome.created {
        success(format!(
            "Run saved: {} ({})",
            created.run_id, created.timestamp
        ));
    }
}
