//! Script to statement splitting

use rayon::prelude::*;
use tracing::{debug, warn};

use super::block_depth::ParserContext;
use super::scanner::{tokenize, Position, ScriptToken, SourceMap};
use crate::dialect::DialectRules;
use crate::error::{BlockDiagnostic, SplitError};

/// Minimum number of scripts to benefit from parallel splitting.
const PARALLEL_THRESHOLD: usize = 8;

/// One executable statement cut from a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    /// Statement text without its terminator, trimmed
    pub text: String,
    /// 1-based line of the first significant token
    pub line: usize,
    /// 1-based column of the first significant token
    pub column: usize,
    /// Number of keywords in the statement
    pub keyword_count: usize,
    /// Deepest block nesting inside the statement
    pub max_block_depth: usize,
    /// Whether the statement was closed by a terminator
    pub terminated: bool,
}

impl SqlStatement {
    /// Statement contains at least one procedural block
    pub fn has_blocks(&self) -> bool {
        self.max_block_depth > 0
    }
}

/// Result of splitting a whole script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptSplit {
    pub statements: Vec<SqlStatement>,
    pub diagnostics: Vec<BlockDiagnostic>,
}

impl ScriptSplit {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Statements only if the script had no structural problems
    pub fn into_strict(self) -> Result<Vec<SqlStatement>, SplitError> {
        if self.diagnostics.is_empty() {
            Ok(self.statements)
        } else {
            Err(SplitError::MalformedScript {
                diagnostics: self.diagnostics,
            })
        }
    }
}

/// Splits scripts for one dialect.
///
/// Holds nothing but a borrow of the rules, so one splitter can serve any
/// number of threads.
#[derive(Debug, Clone, Copy)]
pub struct StatementSplitter<'r> {
    rules: &'r DialectRules,
}

impl<'r> StatementSplitter<'r> {
    pub fn new(rules: &'r DialectRules) -> Self {
        Self { rules }
    }

    /// Tokenize and split a script.
    ///
    /// Only a tokenizer failure is an error; block depth problems are
    /// reported in [`ScriptSplit::diagnostics`].
    pub fn split(&self, sql: &str) -> Result<ScriptSplit, SplitError> {
        let sql = sql.strip_prefix('\u{FEFF}').unwrap_or(sql);
        let tokens = tokenize(sql, self.rules)?;
        Ok(self.split_tokens(sql, &tokens))
    }

    /// Split an already tokenized script. `sql` must be the text `tokens`
    /// were produced from.
    pub fn split_tokens(&self, sql: &str, tokens: &[ScriptToken]) -> ScriptSplit {
        let mut source = SourceMap::new(sql);
        let mut result = ScriptSplit::default();
        let mut context = ParserContext::new(self.rules);
        let mut start: Option<Position> = None;

        for token in tokens {
            if token.is_terminator() && context.is_at_statement_boundary() {
                if let Some(statement_start) = start.take() {
                    let text = source.slice(statement_start, token.start);
                    push_statement(&mut result, text, statement_start, &context, true);
                }
                result.diagnostics.extend(context.take_diagnostics());
                context = ParserContext::new(self.rules);
                continue;
            }

            if start.is_none() && !token.is_trivia() {
                start = Some(token.start);
            }
            context.adjust_block_depth(token);
        }

        result.diagnostics.extend(context.take_diagnostics());
        if let Some(statement_start) = start {
            if !context.is_at_statement_boundary() {
                warn!(
                    line = statement_start.line,
                    column = statement_start.column,
                    depth = context.depth(),
                    "script ended inside an open block"
                );
                result.diagnostics.push(BlockDiagnostic::UnclosedBlock {
                    line: statement_start.line,
                    column: statement_start.column,
                    depth: context.depth(),
                });
            }
            let text = source.slice_from(statement_start);
            push_statement(&mut result, text, statement_start, &context, false);
        }

        result
    }
}

fn push_statement(
    result: &mut ScriptSplit,
    text: &str,
    start: Position,
    context: &ParserContext<'_>,
    terminated: bool,
) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    debug!(
        line = start.line,
        keywords = context.keywords().len(),
        max_depth = context.max_depth(),
        "cut statement"
    );
    result.statements.push(SqlStatement {
        text: text.to_string(),
        line: start.line,
        column: start.column,
        keyword_count: context.keywords().len(),
        max_block_depth: context.max_depth(),
        terminated,
    });
}

/// Split a single script
pub fn split_script(sql: &str, rules: &DialectRules) -> Result<ScriptSplit, SplitError> {
    StatementSplitter::new(rules).split(sql)
}

/// Split many independent scripts, in parallel for larger batches.
///
/// Results are returned in input order.
pub fn split_scripts(
    scripts: &[&str],
    rules: &DialectRules,
) -> Vec<Result<ScriptSplit, SplitError>> {
    let splitter = StatementSplitter::new(rules);
    if scripts.len() >= PARALLEL_THRESHOLD {
        scripts.par_iter().map(|sql| splitter.split(sql)).collect()
    } else {
        scripts.iter().map(|sql| splitter.split(sql)).collect()
    }
}
