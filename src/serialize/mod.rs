//! # Result Serializer
//!
//! Converts a tabular result into a JSON array of row objects. Each object is
//! keyed by column name in descriptor order; each cell's JSON kind comes from
//! the static type-tag table in [`typemap`]. A set null flag always wins over
//! the declared type. Rows keep engine scan order; nothing here imposes one.

pub mod typemap;

use serde_json::{Map, Number, Value};

use crate::engine::TableData;

pub use typemap::{kind_for_tag, ValueKind};

/// Serialize a full result into a JSON array of row objects.
///
/// A zero-row result yields `[]`, never null and never an error.
pub fn rows_to_json(data: &TableData) -> Value {
    let mut rows = Vec::with_capacity(data.rows.len());
    for row in &data.rows {
        let mut object = Map::new();
        for (column, cell) in data.columns.iter().zip(row) {
            object.insert(column.name.clone(), cell_to_json(column.type_tag, cell.as_deref()));
        }
        rows.push(Value::Object(object));
    }
    Value::Array(rows)
}

/// Serialize one cell. `None` is the null flag and short-circuits the table.
pub fn cell_to_json(type_tag: u32, cell: Option<&str>) -> Value {
    let Some(text) = cell else {
        return Value::Null;
    };

    match kind_for_tag(type_tag) {
        ValueKind::Boolean => Value::Bool(text.as_bytes().first() == Some(&b't')),
        // Parse failures fall back to 0 rather than aborting the row.
        ValueKind::Integer => Value::from(text.trim().parse::<i64>().unwrap_or(0)),
        ValueKind::Double => {
            let parsed = text.trim().parse::<f64>().unwrap_or(0.0);
            // JSON has no encoding for NaN or infinity.
            match Number::from_f64(parsed) {
                Some(number) => Value::Number(number),
                None => Value::Null,
            }
        }
        ValueKind::Text => Value::String(text.to_string()),
    }
}
