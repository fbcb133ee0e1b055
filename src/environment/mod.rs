//! Deployment environment resolution (dev / prod) and the URLs and
//! identity-provider client names derived from it.

pub mod config;
pub mod urls;

pub use config::{EnvConfig, get_environment_config};
pub use urls::{UrlOptions, build_api_url, build_frontend_url};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentEnvironment {
    Dev,
    Prod,
}

impl DeploymentEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentEnvironment::Dev => "dev",
            DeploymentEnvironment::Prod => "prod",
        }
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, DeploymentEnvironment::Prod)
    }

    pub fn config(&self) -> &'static EnvConfig {
        get_environment_config(self.as_str())
    }
}

impl fmt::Display for DeploymentEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(DeploymentEnvironment::Dev),
            "prod" | "production" => Ok(DeploymentEnvironment::Prod),
            other => Err(format!("unknown deployment environment: {other}")),
        }
    }
}

/// Inputs to [`resolve_deployment_environment`].
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub deploy_env: Option<String>,
    pub is_ephemeral: bool,
    /// Accepted but not consulted.
    pub hostname: Option<String>,
}

/// First match wins: ephemeral deployments are dev, an explicit
/// `prod`/`production` is prod, anything else is dev.
pub fn resolve_deployment_environment(opts: &ResolveOptions) -> DeploymentEnvironment {
    if opts.is_ephemeral {
        return DeploymentEnvironment::Dev;
    }

    match opts.deploy_env.as_deref().map(str::trim) {
        Some(env) if env.eq_ignore_ascii_case("prod") || env.eq_ignore_ascii_case("production") => {
            DeploymentEnvironment::Prod
        }
        _ => DeploymentEnvironment::Dev,
    }
}

/// Everything a deployment needs to know about where it runs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDeployment {
    pub environment: DeploymentEnvironment,
    pub env_name: String,
    pub config: EnvConfig,
    pub frontend_url: String,
    pub api_url: String,
}

impl ResolvedDeployment {
    /// Resolve the environment, then build URLs for `env_name` (a preview
    /// name such as `pr42`, or the environment name itself when `None`).
    pub fn from_options(opts: &ResolveOptions, env_name: Option<&str>, hosted_zone: &str) -> Self {
        let environment = resolve_deployment_environment(opts);
        let env_name = env_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(environment.as_str())
            .to_string();

        let mut config = environment.config().clone();
        config.is_ephemeral = opts.is_ephemeral;

        let url_opts = UrlOptions {
            env_name: env_name.clone(),
            hosted_zone: hosted_zone.to_string(),
            is_prod: environment.is_prod(),
        };

        Self {
            environment,
            env_name,
            config,
            frontend_url: build_frontend_url(&url_opts),
            api_url: build_api_url(&url_opts),
        }
    }
}
