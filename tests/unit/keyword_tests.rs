//! Tests for reserved keyword classification

use pretty_assertions::assert_eq;
use rust_sqlsplit::parser::{tokenize, TokenKind};
use rust_sqlsplit::SqlDialect;

// ============================================================================
// Keyword Oracle
// ============================================================================

#[test]
fn test_every_keyword_matches_in_any_case() {
    for dialect in SqlDialect::ALL {
        let rules = dialect.rules();
        for word in rules.keywords().iter() {
            assert!(rules.is_keyword(word), "{dialect}: {word}");
            assert!(rules.is_keyword(&word.to_ascii_lowercase()), "{dialect}: {word}");

            let mixed: String = word
                .chars()
                .enumerate()
                .map(|(i, c)| if i % 2 == 0 { c.to_ascii_lowercase() } else { c })
                .collect();
            assert!(rules.is_keyword(&mixed), "{dialect}: {mixed}");
        }
    }
}

#[test]
fn test_identifiers_are_not_keywords() {
    for dialect in SqlDialect::ALL {
        let rules = dialect.rules();
        for word in ["MYTABLE", "customer_id", "trg_audit", "x1"] {
            assert!(!rules.is_keyword(word), "{dialect}: {word}");
        }
    }
}

#[test]
fn test_hsqldb_keyword_set_size() {
    let rules = SqlDialect::Hsqldb.rules();
    assert!(rules.keywords().len() > 300);
    assert!(rules.is_keyword("SQLEXCEPTION"));
    assert!(rules.is_keyword("ELSEIF"));
    assert!(!rules.is_keyword("TRIGGERS"));
}

// ============================================================================
// Token classification
// ============================================================================

#[test]
fn test_tokens_classified_by_dialect() {
    let rules = SqlDialect::Hsqldb.rules();
    let tokens = tokenize("drop table mytable;", &rules).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Whitespace,
            TokenKind::Keyword,
            TokenKind::Whitespace,
            TokenKind::Identifier,
            TokenKind::Terminator,
        ]
    );
    assert_eq!(tokens[0].text, "DROP");
    assert_eq!(tokens[4].text, "mytable");
}

#[test]
fn test_quoted_keyword_is_identifier() {
    let rules = SqlDialect::Hsqldb.rules();
    let tokens = tokenize("CREATE TABLE \"BEGIN\" (id INT)", &rules).unwrap();
    let begin = tokens.iter().find(|t| t.text == "BEGIN").unwrap();
    assert_eq!(begin.kind, TokenKind::Identifier);
}
