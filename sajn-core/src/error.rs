use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown {field} value: {value}")]
    InvalidChoice { field: &'static str, value: String },
    #[error("Invalid boolean for {param}: {value}")]
    InvalidBool { param: &'static str, value: String },
    #[error("Value for {field} has the wrong type")]
    TypeMismatch { field: &'static str },
}
