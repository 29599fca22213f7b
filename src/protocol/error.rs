//! Error types for the protocol layer.

use thiserror::Error;

use crate::core::ConfigError;

/// A game-state block that could not be turned into a `GameState`.
///
/// Line numbers are 1-based and count every line of the block, including
/// comments and blank lines.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line started with something other than `P`.
    #[error("line {line}: unknown line tag {tag:?}")]
    UnknownTag {
        /// Line number inside the block.
        line: usize,
        /// First token of the line.
        tag: String,
    },

    /// A `P` line did not have exactly six tokens.
    #[error("line {line}: expected 6 tokens, found {found}")]
    WrongTokenCount {
        /// Line number inside the block.
        line: usize,
        /// Number of tokens present.
        found: usize,
    },

    /// A numeric field did not parse.
    #[error("line {line}: invalid {field} {value:?}")]
    InvalidNumber {
        /// Line number inside the block.
        line: usize,
        /// Name of the field.
        field: &'static str,
        /// Raw token.
        value: String,
    },
}

/// Errors that end a protocol session.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The engine sent a malformed block.
    #[error("malformed game state")]
    Parse(#[from] ParseError),

    /// Reading or writing a protocol channel failed.
    #[error("protocol i/o failed")]
    Io(#[from] std::io::Error),

    /// The client could not be configured.
    #[error("configuration failed")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// This error's message followed by each of its causes, outermost first.
    #[must_use]
    pub fn chain(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            messages.push(cause.to_string());
            source = cause.source();
        }
        messages
    }

    /// One-line report of the whole cause chain.
    #[must_use]
    pub fn report(&self) -> String {
        self.chain().join(": caused by: ")
    }
}

/// Result type for protocol sessions.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::WrongTokenCount { line: 3, found: 4 };
        assert_eq!(err.to_string(), "line 3: expected 6 tokens, found 4");

        let err = ParseError::UnknownTag {
            line: 1,
            tag: "F".to_string(),
        };
        assert_eq!(err.to_string(), "line 1: unknown line tag \"F\"");
    }

    #[test]
    fn test_client_error_keeps_cause() {
        let err = ClientError::from(ParseError::WrongTokenCount { line: 2, found: 1 });

        assert_eq!(err.to_string(), "malformed game state");
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "line 2: expected 6 tokens, found 1");
    }

    #[test]
    fn test_report_includes_every_cause() {
        let err = ClientError::from(ParseError::UnknownTag {
            line: 4,
            tag: "F".to_string(),
        });

        assert_eq!(
            err.chain(),
            vec![
                "malformed game state".to_string(),
                "line 4: unknown line tag \"F\"".to_string()
            ]
        );
        assert_eq!(
            err.report(),
            "malformed game state: caused by: line 4: unknown line tag \"F\""
        );
    }

    #[test]
    fn test_report_walks_nested_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ClientError::from(ConfigError::from(io));

        assert_eq!(err.chain().len(), 3);
        assert_eq!(
            err.report(),
            "configuration failed: caused by: failed to read config file: no such file: caused by: no such file"
        );
    }
}
