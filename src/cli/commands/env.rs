use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::env::EnvLogic;
use crate::environment::ResolveOptions;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Env {
        deploy_env,
        ephemeral,
        hostname,
        env_name,
        hosted_zone,
        json,
    } = cmd
    {
        let opts = ResolveOptions {
            deploy_env: deploy_env.clone(),
            is_ephemeral: *ephemeral,
            hostname: hostname.clone(),
        };
        let zone = hosted_zone.as_deref().unwrap_or(&cfg.hosted_zone);
        EnvLogic::print(&opts, env_name.as_deref(), zone, *json)?;
    }
    Ok(())
}
