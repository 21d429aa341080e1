use thiserror::Error;

/// Errors raised while loading domain configuration.
///
/// Domain computation and scale building never fail; degenerate input yields
/// empty or degenerate domains instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Domain `{domain}` uses unknown scale factory `{factory}`")]
    UnknownFactory { domain: String, factory: String },
    #[error("Invalid domain configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
