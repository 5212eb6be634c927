//! Tests for procedural block depth tracking

use pretty_assertions::assert_eq;
use rust_sqlsplit::{BlockDelta, SqlDialect};

use crate::common::depth_trace;

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_create_table_if_exists_stays_at_zero() {
    let rules = SqlDialect::Hsqldb.rules();
    let (trace, depth) = depth_trace("CREATE TABLE IF EXISTS t (id INT)", &rules);
    assert!(trace.iter().all(|d| *d == 0), "trace: {trace:?}");
    assert_eq!(depth, 0);
}

#[test]
fn test_alter_table_drop_column_if_exists() {
    let rules = SqlDialect::Hsqldb.rules();
    let (trace, depth) = depth_trace("ALTER TABLE t DROP COLUMN IF EXISTS c", &rules);
    assert!(trace.iter().all(|d| *d == 0), "trace: {trace:?}");
    assert_eq!(depth, 0);
}

#[test]
fn test_trigger_body_with_if() {
    let rules = SqlDialect::Hsqldb.rules();
    let sql = "CREATE TRIGGER trg BEFORE INSERT ON t BEGIN IF x>0 THEN y:=1; END IF; END";
    let (trace, depth) = depth_trace(sql, &rules);
    // CREATE TRIGGER INSERT ON BEGIN IF THEN END IF END
    assert_eq!(trace, vec![0, 0, 0, 0, 1, 2, 2, 1, 1, 0]);
    assert_eq!(depth, 0);
}

#[test]
fn test_for_each_row_pair_is_neutral() {
    let rules = SqlDialect::Hsqldb.rules();
    let (trace, depth) = depth_trace("FOR EACH ROW", &rules);
    assert_eq!(trace, vec![1, 0, 0]);
    assert_eq!(depth, 0);
}

#[test]
fn test_extended_modifiable_objects() {
    let default_rules = SqlDialect::Hsqldb.rules();
    let (_, depth) = depth_trace("DROP TRIGGER IF EXISTS trg", &default_rules);
    assert_eq!(depth, 1, "TRIGGER is not a default modifiable object");

    let rules = SqlDialect::Hsqldb.rules().with_modifiable_objects(["trigger"]);
    let (_, depth) = depth_trace("DROP TRIGGER IF EXISTS trg", &rules);
    assert_eq!(depth, 0);
    assert_eq!(rules.block_delta("IF", "TRIGGER"), BlockDelta::Neutral);
}

#[test]
fn test_qualified_reserved_words_do_not_move_depth() {
    let rules = SqlDialect::Hsqldb.rules();
    let (trace, depth) = depth_trace("BEGIN ATOMIC SET e.end = t.begin; UPDATE x SET x.if = 1;", &rules);
    // BEGIN ATOMIC SET UPDATE SET
    assert_eq!(trace, vec![1, 1, 1, 1, 1]);
    assert_eq!(depth, 1);
}

// ============================================================================
// Known limits of the previous-keyword rule
// ============================================================================

#[test]
fn test_if_right_after_end_terminator_is_neutral() {
    let rules = SqlDialect::Hsqldb.rules();
    let sql = "BEGIN ATOMIC BEGIN ATOMIC SET v = 1; END; IF c THEN SET v = 2; END IF; END";
    let (trace, depth) = depth_trace(sql, &rules);
    // BEGIN ATOMIC BEGIN ATOMIC SET END IF THEN SET END IF END
    assert_eq!(trace, vec![1, 1, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0]);
    assert_eq!(depth, 0);
}

#[test]
fn test_drop_view_if_exists_opens_a_block() {
    // VIEW is not an HSQLDB keyword, so IF sees DROP as its previous keyword
    let default_rules = SqlDialect::Hsqldb.rules();
    let (trace, depth) = depth_trace("DROP VIEW IF EXISTS v", &default_rules);
    assert_eq!(trace, vec![0, 1, 1]);
    assert_eq!(depth, 1);

    let rules = SqlDialect::Hsqldb.rules().with_modifiable_objects(["VIEW"]);
    let (_, depth) = depth_trace("DROP VIEW IF EXISTS v", &rules);
    assert_eq!(depth, 1);
}

// ============================================================================
// Balanced nesting
// ============================================================================

fn wrap(kind: usize, inner: &str) -> String {
    match kind % 4 {
        0 => format!("BEGIN ATOMIC {inner} END"),
        1 => format!("IF c THEN {inner} END IF"),
        2 => format!("FOR r AS SELECT * FROM t DO {inner} END FOR"),
        _ => format!("CASE WHEN c THEN {inner} END CASE"),
    }
}

#[test]
fn test_balanced_nesting_returns_to_zero() {
    let rules = SqlDialect::Hsqldb.rules();
    for seed in 0..64usize {
        let mut body = "SET v = 1;".to_string();
        let levels = seed % 6 + 1;
        for level in 0..levels {
            body = format!("{};", wrap(seed / (level + 1) + level, &body));
        }

        let (trace, depth) = depth_trace(&body, &rules);
        assert_eq!(depth, 0, "unbalanced for {body}");
        assert_eq!(trace.iter().max().copied(), Some(levels), "max depth for {body}");
    }
}

#[test]
fn test_depth_trace_is_deterministic() {
    let rules = SqlDialect::Hsqldb.rules();
    let sql = "BEGIN ATOMIC FOR r AS SELECT * FROM t DO IF c THEN SET v = 1; END IF; END FOR; END";
    let first = depth_trace(sql, &rules);
    for _ in 0..5 {
        assert_eq!(depth_trace(sql, &rules), first);
    }
}

// ============================================================================
// Underflow
// ============================================================================

#[test]
fn test_stray_end_never_goes_negative() {
    let rules = SqlDialect::Hsqldb.rules();
    let (trace, depth) = depth_trace("END END BEGIN END END", &rules);
    assert_eq!(trace, vec![0, 0, 1, 0, 0]);
    assert_eq!(depth, 0);
}
