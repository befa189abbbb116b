//! Command-line session errors.

use ferz_core::MoveParseError;

/// Errors that can occur while reading and running session commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input was neither a known command nor a well-formed move.
    #[error("invalid move format: {text}")]
    InvalidMove {
        /// The text that failed to parse.
        text: String,
        /// Why the move text was rejected.
        #[source]
        source: MoveParseError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn invalid_move_keeps_parse_error_as_source() {
        let err = CliError::InvalidMove {
            text: "e2".to_string(),
            source: MoveParseError::WrongLength { length: 2 },
        };
        assert_eq!(err.to_string(), "invalid move format: e2");
        assert!(err.source().is_some());
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
