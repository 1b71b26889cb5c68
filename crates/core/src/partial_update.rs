//! Builder for `UPDATE ... SET` statements over a sparse set of fields.
//!
//! Callers feed optional values in a fixed column order. Each present value
//! becomes a `column = $n` assignment with its own positional placeholder;
//! absent values are skipped without leaving a gap in the numbering. Column
//! names are `&'static str` so only identifiers compiled into the binary are
//! ever interpolated into the SQL text. Values always travel as bind
//! arguments.

use crate::error::CoreError;
use crate::types::DbId;

/// Message returned when a patch carries no assignable field.
pub const NO_FIELDS_TO_UPDATE: &str = "No valid fields to update";

/// A value bound to one positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Float(f64),
    BigInt(i64),
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<f64> for BindValue {
    fn from(value: f64) -> Self {
        BindValue::Float(value)
    }
}

/// A parameterized statement ready to be bound and executed.
///
/// `args[i]` binds to placeholder `$i+1`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub sql: String,
    pub args: Vec<BindValue>,
}

/// Accumulates assignments for a single-row update keyed by primary key.
#[derive(Debug)]
pub struct PartialUpdate {
    table: &'static str,
    assignments: Vec<String>,
    args: Vec<BindValue>,
}

impl PartialUpdate {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            args: Vec::new(),
        }
    }

    /// Add `column = $n` if `value` is present. `n` is the next free index.
    pub fn set<V: Into<BindValue>>(mut self, column: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.args.push(value.into());
            self.assignments.push(format!("{column} = ${}", self.args.len()));
        }
        self
    }

    /// Number of field assignments collected so far.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Finish the statement.
    ///
    /// Rejects an empty patch before the `touch_column` clause is appended,
    /// so a timestamp-only update never reaches the store. The touch clause
    /// is a literal `CURRENT_TIMESTAMP` and consumes no placeholder; the key
    /// is bound last, at index `len() + 1`.
    pub fn build(
        mut self,
        touch_column: &'static str,
        key_column: &'static str,
        key: DbId,
        returning: &str,
    ) -> Result<UpdateStatement, CoreError> {
        if self.is_empty() {
            return Err(CoreError::Validation(NO_FIELDS_TO_UPDATE.to_string()));
        }

        self.assignments.push(format!("{touch_column} = CURRENT_TIMESTAMP"));
        self.args.push(BindValue::BigInt(key));
        let key_index = self.args.len();

        let sql = format!(
            "UPDATE {} SET {} WHERE {key_column} = ${key_index} RETURNING {returning}",
            self.table,
            self.assignments.join(", "),
        );

        Ok(UpdateStatement {
            sql,
            args: self.args,
        })
    }
}
