//! Row filtering for [`crate::types::Table`].

use crate::error::{TableError, TableResult};
use crate::types::Table;

/// Identifies the column a filter predicate is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// 0-based column index, checked against the width of the first row.
    Index(usize),
    /// Column name, resolved with [`Table::col_id_by_name`].
    Name(String),
}

impl ColumnSelector {
    /// Resolve the selector to a column index in `table`.
    pub fn resolve(&self, table: &Table) -> TableResult<usize> {
        match self {
            Self::Index(index) => {
                let index = *index;
                let width = table
                    .rows
                    .first()
                    .map(Vec::len)
                    .ok_or(TableError::NoRowsToMeasure { index })?;
                if index >= width {
                    return Err(TableError::ColumnOutOfBounds { index, width });
                }
                Ok(index)
            }
            Self::Name(name) => table.col_id_by_name(name),
        }
    }
}

impl From<usize> for ColumnSelector {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for ColumnSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for ColumnSelector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Selectors coming from untyped input (a JSON query, a config file...).
///
/// Non-negative integers select by index and strings select by name; anything else is
/// [`TableError::UnsupportedSelectorType`].
impl TryFrom<&serde_json::Value> for ColumnSelector {
    type Error = TableError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let found = match value {
            Value::String(name) => return Ok(Self::Name(name.clone())),
            Value::Number(n) => match n.as_u64().and_then(|i| usize::try_from(i).ok()) {
                Some(index) => return Ok(Self::Index(index)),
                None if n.is_f64() => "float",
                None => "negative integer",
            },
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Err(TableError::UnsupportedSelectorType {
            found: found.to_string(),
        })
    }
}

/// Returns a new [`Table`] with only the rows whose field in `column` satisfies `predicate`.
///
/// The predicate sees the raw field text. The header and the relative order of kept rows are
/// preserved, and the input table is left untouched.
///
/// ```rust
/// use tabellchen::processing::{filter, greater_or_equal};
/// use tabellchen::types::Table;
///
/// let t = Table::new(
///     vec!["Name".into(), "Year".into()],
///     vec![
///         vec!["Bob".into(), "2022".into()],
///         vec!["Bob".into(), "2024".into()],
///     ],
/// );
/// let recent = filter(&t, "Year", greater_or_equal(2023.0)).unwrap();
/// assert_eq!(recent.rows, vec![vec!["Bob", "2024"]]);
/// ```
pub fn filter<F>(
    table: &Table,
    column: impl Into<ColumnSelector>,
    mut predicate: F,
) -> TableResult<Table>
where
    F: FnMut(&str) -> bool,
{
    let col = column.into().resolve(table)?;
    Ok(table.filter_rows(|row| row.get(col).is_some_and(|field| predicate(field.as_str()))))
}

/// Predicate matching fields that parse as a number `>= threshold`.
///
/// Fields that do not parse as `f64` never match. Out-of-range numbers such as `1e400` count
/// as unparsable; only the literals `inf`/`infinity` (any case, optional sign) are infinite.
pub fn greater_or_equal(threshold: f64) -> impl Fn(&str) -> bool + Clone {
    move |field| match field.parse::<f64>() {
        Ok(value) if value.is_infinite() && !is_infinity_literal(field) => false,
        Ok(value) => value >= threshold,
        Err(_) => false,
    }
}

fn is_infinity_literal(field: &str) -> bool {
    let unsigned = field.strip_prefix(['+', '-']).unwrap_or(field);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
