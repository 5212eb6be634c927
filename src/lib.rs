//! rust-sqlsplit: dialect-aware splitting of SQL scripts into statements
//!
//! A script is tokenized, each word is classified as a reserved keyword or not
//! for the selected dialect, and keywords drive a block depth counter so that
//! `;` inside stored routines, triggers, conditionals, loops and CASE
//! expressions does not end the enclosing statement.
//!
//! ```
//! use rust_sqlsplit::{split_script, SqlDialect};
//!
//! let sql = "CREATE TRIGGER trg AFTER INSERT ON t FOR EACH ROW \
//!            BEGIN ATOMIC INSERT INTO log VALUES (1); END;\
//!            SELECT 1;";
//! let split = split_script(sql, &SqlDialect::Hsqldb.rules()).unwrap();
//! assert_eq!(split.statements.len(), 2);
//! assert!(split.is_clean());
//! ```

pub mod dialect;
pub mod error;
pub mod parser;

pub use dialect::{BlockDelta, DialectRules, SqlDialect};
pub use error::{BlockDiagnostic, SplitError};
pub use parser::{split_script, split_scripts, ScriptSplit, SqlStatement, StatementSplitter};
