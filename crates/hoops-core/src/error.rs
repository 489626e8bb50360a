use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("shooting capability {0} is outside 1-99")]
    CapabilityOutOfRange(i64),

    #[error("money-ball rack {0} is outside 1-5")]
    RackOutOfRange(i64),

    #[error("malformed player config '{0}', expected CAPABILITY/RACK (e.g. 75/3)")]
    Malformed(String),
}
