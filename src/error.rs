use thiserror::Error;

/// Errors returned while configuring or running the application.
///
/// The printed flow itself has no recoverable failures. Everything here is either
/// a broken stdout or a configuration value that could not be understood.
#[derive(Error, Debug)]
pub enum Error {
    #[error("writing the report failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown decision strategy `{0}`, expected one of: own, delegate, random, seeded:<n>")]
    InvalidStrategy(String),
    #[cfg(feature = "json")]
    #[cfg_attr(docsrs, doc(cfg(feature = "json")))]
    #[error("parsing Json configuration failed: {0}")]
    Json(#[from] serde_json::error::Error),
}
