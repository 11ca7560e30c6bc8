use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurriculaError {
    #[error("Topic source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("No topic found for '{0}'")]
    NotFound(String),

    #[error("Oracle failure: {0}")]
    OracleFailure(String),

    #[error("Search gateway error: {0}")]
    GatewayFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
