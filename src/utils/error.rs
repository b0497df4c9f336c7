use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Locale error ({language}): {source}")]
    Locale {
        language: &'static str,
        #[source]
        source: toml::de::Error,
    },

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, CardError>;
