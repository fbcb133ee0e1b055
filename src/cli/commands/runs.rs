use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::runs::RunsLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Runs { id, json } = cmd {
        let mut pool = super::open_store(cfg)?;
        match id {
            Some(run_id) => RunsLogic::show(&mut pool, cfg, run_id, *json)?,
            None => RunsLogic::list(&mut pool, cfg, *json)?,
        }
    }
    Ok(())
}
