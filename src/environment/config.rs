use serde::Serialize;

/// Static description of a deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvConfig {
    pub name: String,
    pub description: String,
    pub auth0_client_name: String,
    pub auth0_description: String,
    pub is_prod: bool,
    pub is_ephemeral: bool,
}

fn dev_config() -> EnvConfig {
    EnvConfig {
        name: "dev".to_string(),
        description: "Development environment (also used by preview deployments)".to_string(),
        auth0_client_name: "Raffle Winner Picker (Dev)".to_string(),
        auth0_description: "Raffle Winner Picker SPA client for development and previews"
            .to_string(),
        is_prod: false,
        is_ephemeral: false,
    }
}

fn prod_config() -> EnvConfig {
    EnvConfig {
        name: "prod".to_string(),
        description: "Production environment".to_string(),
        auth0_client_name: "Raffle Winner Picker".to_string(),
        auth0_description: "Raffle Winner Picker SPA client for production".to_string(),
        is_prod: true,
        is_ephemeral: false,
    }
}

static DEV: std::sync::LazyLock<EnvConfig> = std::sync::LazyLock::new(dev_config);
static PROD: std::sync::LazyLock<EnvConfig> = std::sync::LazyLock::new(prod_config);

/// Config record for `key` (`dev` or `prod`). Unknown keys, `production`
/// included, get the dev record; resolve aliases with
/// `resolve_deployment_environment` first.
pub fn get_environment_config(key: &str) -> &'static EnvConfig {
    match key.trim().to_ascii_lowercase().as_str() {
        "prod" => &*PROD,
        _ => &*DEV,
    }
}
