//! Domain models that mirror the `Books` table and get passed between the
//! prompts, the record operations and the persistence layer. These types stay
//! light-weight data holders; the only behaviour they carry is the mapping
//! between a field, its column, and the key the user types to pick it.

use std::fmt;

use rusqlite::types::{ToSql, ToSqlOutput};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the `Books` table.
pub struct Book {
    /// Primary key. Assigned by SQLite unless the row came from the seed file.
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Copies in stock. Negative values are not rejected.
    pub quantity: i64,
}

/// The four columns a user can search, update, or remove by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Title,
    Author,
    Quantity,
}

impl Field {
    /// Every field in the order the selector lists them.
    pub const ALL: [Field; 4] = [Field::Author, Field::Title, Field::Id, Field::Quantity];

    /// Column name in the `Books` table. Queries interpolate this value, so it
    /// must only ever come from this match.
    pub fn column(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Quantity => "QTY",
        }
    }

    /// Lowercase description shown next to the selection key.
    pub fn label(self) -> &'static str {
        match self {
            Field::Id => "unique ID",
            Field::Title => "title",
            Field::Author => "author",
            Field::Quantity => "quantity",
        }
    }

    /// Single letter typed at the field selector.
    pub fn key(self) -> char {
        match self {
            Field::Id => 'u',
            Field::Title => 't',
            Field::Author => 'a',
            Field::Quantity => 'q',
        }
    }

    /// Resolve a selector answer. Surrounding whitespace and case are ignored.
    pub fn from_key(input: &str) -> Option<Field> {
        let trimmed = input.trim().to_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| trimmed.len() == 1 && trimmed.starts_with(field.key()))
    }

    /// Whether values for this field must parse as integers.
    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Id | Field::Quantity)
    }

    /// Turn raw console input into a value for this field. Numeric fields
    /// return `None` when the trimmed input is not an integer; text fields keep
    /// the input exactly as typed.
    pub fn parse_value(self, raw: &str) -> Option<FieldValue> {
        if self.is_numeric() {
            raw.trim().parse::<i64>().ok().map(FieldValue::Int)
        } else {
            Some(FieldValue::Text(raw.to_string()))
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A validated value for one [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            FieldValue::Int(value) => value.to_sql(),
            FieldValue::Text(value) => value.to_sql(),
        }
    }
}

/// Search criteria understood by [`crate::db::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    ByField(Field, FieldValue),
    /// Exact match on both columns, used by the duplicate check when adding.
    ByTitleAuthor { title: String, author: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_keys_map_to_fields() {
        assert_eq!(Field::from_key("a"), Some(Field::Author));
        assert_eq!(Field::from_key(" T \n"), Some(Field::Title));
        assert_eq!(Field::from_key("u"), Some(Field::Id));
        assert_eq!(Field::from_key("Q"), Some(Field::Quantity));
        assert_eq!(Field::from_key("x"), None);
        assert_eq!(Field::from_key("aa"), None);
        assert_eq!(Field::from_key(""), None);
    }

    #[test]
    fn numeric_fields_reject_text() {
        assert_eq!(Field::Quantity.parse_value(" 12 "), Some(FieldValue::Int(12)));
        assert_eq!(Field::Id.parse_value("twelve"), None);
        assert_eq!(Field::Id.parse_value("1.5"), None);
    }

    #[test]
    fn text_fields_keep_input_verbatim() {
        assert_eq!(
            Field::Title.parse_value("  Dune "),
            Some(FieldValue::Text("  Dune ".to_string()))
        );
        assert_eq!(Field::Author.parse_value(""), Some(FieldValue::Text(String::new())));
    }
}
