//! Procedural block depth tracking.
//!
//! A [`ParserContext`] lives for exactly one statement. Every keyword of the
//! statement is fed to [`ParserContext::adjust_block_depth`] in script order;
//! a terminator only ends the statement while the depth is zero.

use tracing::{trace, warn};

use super::scanner::ScriptToken;
use crate::dialect::{to_upper, BlockDelta, DialectRules};
use crate::error::BlockDiagnostic;

/// A keyword seen in the current statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenKeyword {
    pub text: String,
    pub depth_after: usize,
}

/// Per-statement block tracking state
#[derive(Debug)]
pub struct ParserContext<'r> {
    rules: &'r DialectRules,
    depth: usize,
    max_depth: usize,
    keywords: Vec<SeenKeyword>,
    diagnostics: Vec<BlockDiagnostic>,
}

impl<'r> ParserContext<'r> {
    pub fn new(rules: &'r DialectRules) -> Self {
        Self {
            rules,
            depth: 0,
            max_depth: 0,
            keywords: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Current block depth
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest nesting reached so far
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// A terminator seen now would end the statement
    #[inline]
    pub fn is_at_statement_boundary(&self) -> bool {
        self.depth == 0
    }

    /// Keywords seen so far, in order
    pub fn keywords(&self) -> &[SeenKeyword] {
        &self.keywords
    }

    /// Depth after each keyword, in order
    pub fn depth_trace(&self) -> Vec<usize> {
        self.keywords.iter().map(|k| k.depth_after).collect()
    }

    pub fn take_diagnostics(&mut self) -> Vec<BlockDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Text of the most recent keyword, or `""` at the start of a statement
    pub fn previous_keyword(&self) -> &str {
        self.keywords.last().map_or("", |k| k.text.as_str())
    }

    /// Apply one keyword token to the depth.
    ///
    /// Non-keyword tokens are ignored so callers may pass every token through.
    /// Keyword text is matched case-insensitively and kept uppercased.
    /// An `END` with nothing open leaves the depth at zero and records
    /// [`BlockDiagnostic::UnmatchedEnd`].
    pub fn adjust_block_depth(&mut self, token: &ScriptToken) -> BlockDelta {
        if !token.is_keyword() {
            return BlockDelta::Neutral;
        }

        let keyword = to_upper(&token.text).into_owned();
        let delta = self.rules.block_delta(&keyword, self.previous_keyword());
        match delta {
            BlockDelta::Open => {
                self.depth += 1;
                self.max_depth = self.max_depth.max(self.depth);
            }
            BlockDelta::Close => match self.depth.checked_sub(1) {
                Some(depth) => self.depth = depth,
                None => {
                    warn!(
                        line = token.start.line,
                        column = token.start.column,
                        keyword = %token.text,
                        "block depth underflow, clamping at 0"
                    );
                    self.diagnostics.push(BlockDiagnostic::UnmatchedEnd {
                        line: token.start.line,
                        column: token.start.column,
                    });
                }
            },
            BlockDelta::Neutral => {}
        }

        trace!(%keyword, ?delta, depth = self.depth, "adjusted block depth");

        self.keywords.push(SeenKeyword {
            text: keyword,
            depth_after: self.depth,
        });
        delta
    }
}
