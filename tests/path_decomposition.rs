//! Path Decomposition Tests
//!
//! Decomposer properties through the public API:
//! - Valid two- and three-segment paths produce their tokens
//! - Short paths fail with MissingSegment, never a crash
//! - Length bounds reject, empty tokens are distinct from missing ones

use rowgate::route::{
    RouteDepth, RouteError, RoutePath, MAX_DATABASE_LEN, MAX_SCHEMA_LEN, MAX_TABLE_LEN,
};

// =============================================================================
// Valid Paths
// =============================================================================

/// Any in-bound, non-empty token pair decomposes at legacy depth.
#[test]
fn test_two_segment_paths() {
    for (db, table) in [("a", "b"), ("sales", "orders"), ("x1", "y_2")] {
        let route = RoutePath::infer(&format!("/{}/{}", db, table)).unwrap();
        assert_eq!(route.database, db);
        assert_eq!(route.schema, None);
        assert_eq!(route.table, table);
    }
}

/// Three segments decompose at extended depth, table free of delimiters.
#[test]
fn test_three_segment_paths() {
    let route = RoutePath::infer("/sales/public/orders").unwrap();
    assert_eq!(route.database, "sales");
    assert_eq!(route.schema.as_deref(), Some("public"));
    assert_eq!(route.table, "orders");
    assert!(!route.table.contains('/'));
}

/// Tokens exactly at their bounds pass.
#[test]
fn test_tokens_at_the_bounds() {
    let path = format!(
        "/{}/{}/{}",
        "d".repeat(MAX_DATABASE_LEN),
        "s".repeat(MAX_SCHEMA_LEN),
        "t".repeat(MAX_TABLE_LEN)
    );
    let route = RoutePath::infer(&path).unwrap();
    assert_eq!(route.database.len(), MAX_DATABASE_LEN);
    assert_eq!(route.schema.as_ref().unwrap().len(), MAX_SCHEMA_LEN);
    assert_eq!(route.table.len(), MAX_TABLE_LEN);
}

// =============================================================================
// Failure Shapes
// =============================================================================

/// `/db` has no second delimiter: MissingSegment, not a crash.
#[test]
fn test_missing_table_segment() {
    assert_eq!(
        RoutePath::infer("/db"),
        Err(RouteError::MissingSegment("table"))
    );
}

/// A present-but-empty token is its own failure.
#[test]
fn test_empty_is_not_missing() {
    assert_eq!(
        RoutePath::infer("/db/"),
        Err(RouteError::EmptySegment("table"))
    );
    assert_eq!(
        RoutePath::decompose("/db", RouteDepth::Legacy),
        Err(RouteError::MissingSegment("table"))
    );
}

/// Over-long tokens are rejected with the offending segment named.
#[test]
fn test_token_bounds_reject() {
    let err = RoutePath::infer(&format!("/{}/t", "d".repeat(MAX_DATABASE_LEN + 1))).unwrap_err();
    assert_eq!(
        err,
        RouteError::TokenTooLong {
            segment: "database",
            len: MAX_DATABASE_LEN + 1,
            max: MAX_DATABASE_LEN,
        }
    );

    let err = RoutePath::infer(&format!("/db/{}", "t".repeat(MAX_TABLE_LEN + 1))).unwrap_err();
    assert!(matches!(err, RouteError::TokenTooLong { segment: "table", .. }));
}

/// Token content is not validated here, only bounded.
#[test]
fn test_content_is_passed_through() {
    let route = RoutePath::infer("/db/1; SELECT pg_sleep(10)").unwrap();
    assert_eq!(route.table, "1; SELECT pg_sleep(10)");
}
