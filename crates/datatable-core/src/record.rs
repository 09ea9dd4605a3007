use std::borrow::Cow;

use serde_json::Map;
use serde_json::Value;

use crate::error::RecordError;
use crate::value::CellValue;

/// An item that can be displayed as a table row.
///
/// The table only ever borrows records for the duration of a render or event call and never
/// mutates them.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use datatable_core::record::Record;
/// use datatable_core::value::CellValue;
///
/// struct User {
///     id: u32,
///     name: String,
///     admin: bool,
/// }
///
/// impl Record for User {
///     fn row_key(&self) -> Cow<'_, str> {
///         Cow::Owned(self.id.to_string())
///     }
///
///     fn value(&self, key: &str) -> CellValue {
///         match key {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             "admin" => self.admin.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Stable identifier for this row.
    ///
    /// Used as the row key in the rendered output; it should stay the same when the caller
    /// reorders items between renders.
    fn row_key(&self) -> Cow<'_, str>;

    /// Raw property lookup by column key. Unknown keys yield [`CellValue::Empty`].
    fn value(&self, key: &str) -> CellValue;
}

impl<R: Record + ?Sized> Record for &R {
    fn row_key(&self) -> Cow<'_, str> {
        (**self).row_key()
    }

    fn value(&self, key: &str) -> CellValue {
        (**self).value(key)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn row_key(&self) -> Cow<'_, str> {
        (**self).row_key()
    }

    fn value(&self, key: &str) -> CellValue {
        (**self).value(key)
    }
}

/// A dynamic record backed by a JSON object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonRecord {
    id: String,
    fields: Map<String, Value>,
}

impl JsonRecord {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Builds a record from a JSON object, reading the row identifier from `id_key`.
    ///
    /// String identifiers are used as-is, numeric ones through their JSON text.
    pub fn from_value(value: Value, id_key: &str) -> Result<Self, RecordError> {
        let Value::Object(fields) = value else {
            return Err(RecordError::NotAnObject(json_kind(&value)));
        };
        let id = match fields.get(id_key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(RecordError::MissingId(id_key.to_string())),
        };
        Ok(Self { id, fields })
    }

    /// Builds one record per element of a JSON array.
    pub fn from_array(value: Value, id_key: &str) -> Result<Vec<Self>, RecordError> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| Self::from_value(item, id_key))
                .collect(),
            other => Err(RecordError::NotAnObject(json_kind(&other))),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Record for JsonRecord {
    fn row_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn value(&self, key: &str) -> CellValue {
        self.fields.get(key).map(cell_from_json).unwrap_or_default()
    }
}

/// Maps a JSON value onto a cell.
///
/// Strings become text, booleans stay booleans, numbers keep their integer/float nature, `null`
/// is empty, and arrays/objects render as compact JSON.
pub fn cell_from_json(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Bool(*b),
        Value::String(s) => CellValue::Text(s.clone()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => CellValue::Int(i),
            None => match n.as_f64() {
                Some(f) if n.is_f64() => CellValue::Float(f),
                _ => CellValue::Text(n.to_string()),
            },
        },
        Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
