use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Data unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Missing \" to \" separator in time range: {0}")]
    MissingSeparator(String),

    #[error("Invalid hour: {0}")]
    InvalidHour(String),

    #[error("Missing meridiem in clock label: {0}")]
    MissingMeridiem(String),

    #[error("Unknown meridiem: {0}")]
    UnknownMeridiem(String),
}
