//! SQL dialects: reserved words, modifiable objects and block depth rules
//!
//! Each dialect is one variant of [`SqlDialect`]. The variant selects a fixed
//! keyword table and a fixed depth rule; [`DialectRules`] bundles them together
//! with the (extensible) set of modifiable object names. Keyword tables are built
//! once on first use and shared read-only by every parse.

mod generic;
mod hsqldb;

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::SplitError;

/// Supported database dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlDialect {
    /// HyperSQL, with procedural block tracking for routines and triggers
    Hsqldb,
    /// Flat dialect: every `;` ends a statement
    Generic,
}

impl SqlDialect {
    /// All supported dialects
    pub const ALL: [SqlDialect; 2] = [SqlDialect::Hsqldb, SqlDialect::Generic];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            SqlDialect::Hsqldb => "hsqldb",
            SqlDialect::Generic => "generic",
        }
    }

    /// Build the rules for this dialect with its default modifiable objects
    pub fn rules(self) -> DialectRules {
        DialectRules::new(self)
    }

    fn keywords(&self) -> &'static KeywordSet {
        match self {
            SqlDialect::Hsqldb => &*hsqldb::KEYWORDS,
            SqlDialect::Generic => &*generic::KEYWORDS,
        }
    }

    fn default_modifiable_objects(&self) -> &'static [&'static str] {
        match self {
            SqlDialect::Hsqldb => hsqldb::MODIFIABLE_OBJECTS,
            SqlDialect::Generic => &[],
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SqlDialect {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SqlDialect::ALL
            .into_iter()
            .find(|dialect| dialect.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SplitError::UnknownDialect {
                name: name.to_string(),
            })
    }
}

/// Immutable set of uppercase reserved words for one dialect.
#[derive(Debug)]
pub struct KeywordSet {
    words: HashSet<&'static str>,
}

impl KeywordSet {
    pub(crate) fn from_words(words: &[&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    /// Check membership of an already uppercased word
    #[inline]
    pub fn contains_upper(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Case-insensitive membership check
    pub fn contains(&self, word: &str) -> bool {
        self.contains_upper(&to_upper(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

/// Names of schema object categories that appear in `<verb> <OBJECT> IF [NOT] EXISTS`.
///
/// An `IF` following one of these is an existence guard rather than a
/// control-flow block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifiableObjects {
    names: HashSet<String>,
}

impl ModifiableObjects {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut objects = Self::default();
        objects.extend(names);
        objects
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names.extend(
            names
                .into_iter()
                .map(|name| name.as_ref().trim().to_ascii_uppercase())
                .filter(|name| !name.is_empty()),
        );
    }

    /// Case-insensitive membership check
    pub fn contains(&self, word: &str) -> bool {
        self.names.contains(&word.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Effect of one keyword on the block depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockDelta {
    Open,
    Close,
    Neutral,
}

/// Everything the splitter needs to know about one dialect.
///
/// Cheap to clone and safe to share between threads; nothing in here changes
/// after construction.
#[derive(Debug, Clone)]
pub struct DialectRules {
    dialect: SqlDialect,
    keywords: &'static KeywordSet,
    modifiable_objects: ModifiableObjects,
}

impl DialectRules {
    pub fn new(dialect: SqlDialect) -> Self {
        Self {
            dialect,
            keywords: dialect.keywords(),
            modifiable_objects: ModifiableObjects::new(dialect.default_modifiable_objects()),
        }
    }

    /// Add more modifiable object names on top of the dialect defaults.
    ///
    /// ```
    /// use rust_sqlsplit::dialect::SqlDialect;
    ///
    /// let rules = SqlDialect::Hsqldb.rules().with_modifiable_objects(["TRIGGER", "procedure"]);
    /// assert!(rules.is_modifiable_object("trigger"));
    /// assert!(rules.is_modifiable_object("TABLE"));
    /// ```
    pub fn with_modifiable_objects<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.modifiable_objects.extend(names);
        self
    }

    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    pub fn keywords(&self) -> &'static KeywordSet {
        self.keywords
    }

    pub fn modifiable_objects(&self) -> &ModifiableObjects {
        &self.modifiable_objects
    }

    /// Whether `word` is a reserved word in this dialect (case-insensitive)
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Whether `word` names a modifiable object category (case-insensitive)
    pub fn is_modifiable_object(&self, word: &str) -> bool {
        self.modifiable_objects.contains(word)
    }

    /// Depth change caused by `keyword` given the previous keyword of the
    /// statement (`""` when there is none). Case-insensitive.
    pub fn block_delta(&self, keyword: &str, previous: &str) -> BlockDelta {
        match self.dialect {
            SqlDialect::Hsqldb => hsqldb::block_delta(
                &to_upper(keyword),
                &to_upper(previous),
                &self.modifiable_objects,
            ),
            SqlDialect::Generic => BlockDelta::Neutral,
        }
    }
}

/// Uppercase a word, borrowing when it already is
pub(crate) fn to_upper(word: &str) -> Cow<'_, str> {
    if word.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(word.to_ascii_uppercase())
    } else {
        Cow::Borrowed(word)
    }
}
