use core::fmt;
use std::error::Error;

/// Error for invalid configuration and misuse of the node lifecycle.
/// Peer calls never fail, so this never appears on the consensus path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaftError {
    text: String,
    cause: String,
}

pub(crate) type Result<T> = std::result::Result<T, RaftError>;

pub fn new_err<T>(text: String, cause: String) -> std::result::Result<T, RaftError> {
    Err(RaftError { text, cause })
}

impl fmt::Display for RaftError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cause_word = {
            if !self.cause.is_empty() {
                " Cause: ".to_string()
            } else {
                String::new()
            }
        };
        write!(f, "{}.{}{}", self.text, cause_word, self.cause)
    }
}

impl Error for RaftError {}
