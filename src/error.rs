//! Error types for rust-sqlsplit

use thiserror::Error;

/// Errors that can occur while splitting a SQL script
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    #[error("Failed to tokenize SQL script at line {line}, column {column}: {message}")]
    Tokenize {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unknown SQL dialect: {name}")]
    UnknownDialect { name: String },

    #[error("Malformed SQL script: {}", join_diagnostics(.diagnostics))]
    MalformedScript { diagnostics: Vec<BlockDiagnostic> },
}

/// Structural problems found while tracking block depth.
///
/// These never abort a split; the tracker recovers and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockDiagnostic {
    #[error("unmatched END at line {line}, column {column}")]
    UnmatchedEnd { line: usize, column: usize },

    #[error("script ends inside {depth} open block(s), statement started at line {line}, column {column}")]
    UnclosedBlock {
        line: usize,
        column: usize,
        depth: usize,
    },
}

fn join_diagnostics(diagnostics: &[BlockDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<sqlparser::tokenizer::TokenizerError> for SplitError {
    fn from(err: sqlparser::tokenizer::TokenizerError) -> Self {
        SplitError::Tokenize {
            line: err.location.line as usize,
            column: err.location.column as usize,
            message: err.message,
        }
    }
}
