use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournoError {
    #[error("Year {0} is not valid.")]
    InvalidYear(String),

    #[error("Month {0} is not valid.")]
    InvalidMonth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl JournoError {
    /// Process exit status the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            JournoError::InvalidYear(_) => 1,
            JournoError::InvalidMonth(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, JournoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_input() {
        assert_eq!(
            JournoError::InvalidYear("jam".into()).to_string(),
            "Year jam is not valid."
        );
        assert_eq!(
            JournoError::InvalidMonth("13".into()).to_string(),
            "Month 13 is not valid."
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(JournoError::InvalidYear("1".into()).exit_code(), 1);
        assert_eq!(JournoError::InvalidMonth("00".into()).exit_code(), 2);
        assert_eq!(JournoError::Config("bad".into()).exit_code(), 1);
    }
}
