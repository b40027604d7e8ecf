//! Column type tag to JSON kind mapping
//!
//! The static table at the heart of the gateway: downstream consumers depend
//! on numeric-vs-string JSON typing, so the family groupings are fixed. OIDs
//! are from PostgreSQL's pg_type catalog.

const BOOL: u32 = 16;
const BOOL_ARRAY: u32 = 1000;

const INT8: u32 = 20;
const INT2: u32 = 21;
const INT4: u32 = 23;
const INT2_ARRAY: u32 = 1005;
const INT4_ARRAY: u32 = 1007;
const INT8_ARRAY: u32 = 1016;

const FLOAT4: u32 = 700;
const FLOAT8: u32 = 701;
const MONEY: u32 = 790;
const MONEY_ARRAY: u32 = 791;
const FLOAT4_ARRAY: u32 = 1021;
const FLOAT8_ARRAY: u32 = 1022;
const NUMERIC_ARRAY: u32 = 1231;
const NUMERIC: u32 = 1700;

/// JSON value kind a non-null cell serializes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// JSON boolean; true iff the cell text starts with `t`.
    Boolean,
    /// JSON number via integer parse.
    Integer,
    /// JSON number via floating-point parse.
    Double,
    /// JSON string, verbatim cell text.
    Text,
}

/// Map an engine type tag to the JSON kind its cells serialize as.
///
/// Everything outside the boolean, integer, and floating/numeric families
/// (text, temporal types, unrecognized tags) falls through to `Text`.
pub fn kind_for_tag(type_tag: u32) -> ValueKind {
    match type_tag {
        BOOL | BOOL_ARRAY => ValueKind::Boolean,
        INT8 | INT2 | INT4 | INT2_ARRAY | INT4_ARRAY | INT8_ARRAY => ValueKind::Integer,
        FLOAT4 | FLOAT8 | MONEY | MONEY_ARRAY | FLOAT4_ARRAY | FLOAT8_ARRAY | NUMERIC_ARRAY
        | NUMERIC => ValueKind::Double,
        _ => ValueKind::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_family() {
        assert_eq!(kind_for_tag(16), ValueKind::Boolean);
        assert_eq!(kind_for_tag(1000), ValueKind::Boolean);
    }

    #[test]
    fn test_integer_family() {
        for tag in [20, 21, 23, 1005, 1007, 1016] {
            assert_eq!(kind_for_tag(tag), ValueKind::Integer, "oid {}", tag);
        }
    }

    #[test]
    fn test_floating_family() {
        for tag in [700, 701, 790, 791, 1021, 1022, 1231, 1700] {
            assert_eq!(kind_for_tag(tag), ValueKind::Double, "oid {}", tag);
        }
    }

    #[test]
    fn test_everything_else_is_text() {
        // text, varchar, date, timestamp, uuid, unknown
        for tag in [25, 1043, 1082, 1114, 2950, 999_999] {
            assert_eq!(kind_for_tag(tag), ValueKind::Text, "oid {}", tag);
        }
    }
}
