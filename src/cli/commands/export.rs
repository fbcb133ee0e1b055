use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        run,
        what,
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = super::open_store(cfg)?;
        ExportLogic::export(
            &mut pool,
            &cfg.user_id,
            run,
            *what,
            *format,
            file,
            &cfg.default_prize,
            *force,
        )?;
    }
    Ok(())
}
