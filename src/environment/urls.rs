/// Inputs to the URL builders.
///
/// `env_name` may differ from the resolved environment (`pr123` shares the
/// dev configuration but gets its own host).
#[derive(Debug, Clone)]
pub struct UrlOptions {
    pub env_name: String,
    pub hosted_zone: String,
    pub is_prod: bool,
}

const API_SUBDOMAIN: &str = "api";

pub fn build_frontend_url(opts: &UrlOptions) -> String {
    build_url(opts, None)
}

pub fn build_api_url(opts: &UrlOptions) -> String {
    build_url(opts, Some(API_SUBDOMAIN))
}

// https://{envPrefix}{subdomain.}{hostedZone}
fn build_url(opts: &UrlOptions, subdomain: Option<&str>) -> String {
    let env_prefix = if opts.is_prod {
        String::new()
    } else {
        format!("{}.", opts.env_name)
    };
    let sub = subdomain.map(|s| format!("{s}.")).unwrap_or_default();

    format!("https://{env_prefix}{sub}{}", opts.hosted_zone)
}
