//! Script tokenization, block depth tracking and statement splitting

mod block_depth;
mod scanner;
mod splitter;

pub use block_depth::{ParserContext, SeenKeyword};
pub use scanner::{tokenize, Position, ScriptToken, SourceMap, TokenKind};
pub use splitter::{split_script, split_scripts, ScriptSplit, SqlStatement, StatementSplitter};
