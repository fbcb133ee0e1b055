use crate::environment::{ResolveOptions, ResolvedDeployment};
use crate::errors::AppResult;
use crate::ui::messages::header;

pub struct EnvLogic;

impl EnvLogic {
    pub fn print(
        opts: &ResolveOptions,
        env_name: Option<&str>,
        hosted_zone: &str,
        as_json: bool,
    ) -> AppResult<ResolvedDeployment> {
        let resolved = ResolvedDeployment::from_options(opts, env_name, hosted_zone);

        if as_json {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
            return Ok(resolved);
        }

        header("Deployment environment");
        println!("Environment  : {}", resolved.environment);
        println!("Name         : {}", resolved.env_name);
        println!("Description  : {}", resolved.config.description);
        println!("Ephemeral    : {}", resolved.config.is_ephemeral);
        println!("Auth0 client : {}", resolved.config.auth0_client_name);
        println!("Frontend URL : {}", resolved.frontend_url);
        println!("API URL      : {}", resolved.api_url);

        Ok(resolved)
    }
}
