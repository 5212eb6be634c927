//! Generic dialect backed by the sqlparser keyword table

use once_cell::sync::Lazy;
use sqlparser::keywords::ALL_KEYWORDS;

use super::KeywordSet;

pub(super) static KEYWORDS: Lazy<KeywordSet> = Lazy::new(|| KeywordSet::from_words(ALL_KEYWORDS));
