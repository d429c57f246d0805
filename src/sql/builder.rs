//! Builds parameterized UPDATE statements for partial-field updates.

use super::params::BindValue;

/// Quote identifier for PostgreSQL (safe: names come from code, never from requests).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

/// Collects `SET` assignments for one row update. Columns are set in the order they were added.
pub struct UpdateBuilder<'a> {
    table: &'a str,
    sets: Vec<(&'a str, BindValue)>,
    touch: Option<&'a str>,
}

impl<'a> UpdateBuilder<'a> {
    pub fn new(table: &'a str) -> Self {
        UpdateBuilder {
            table,
            sets: Vec::new(),
            touch: None,
        }
    }

    pub fn set(&mut self, column: &'a str, value: impl Into<BindValue>) -> &mut Self {
        self.sets.push((column, value.into()));
        self
    }

    pub fn set_opt<V: Into<BindValue>>(&mut self, column: &'a str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.set(column, v);
        }
        self
    }

    /// Column set to `NOW()` whenever anything else changes.
    pub fn touch(&mut self, column: &'a str) -> &mut Self {
        self.touch = Some(column);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// `UPDATE table SET ... WHERE id_column = $n RETURNING returning`.
    pub fn build(self, id_column: &str, id: impl Into<BindValue>, returning: &str) -> QueryBuf {
        let mut q = QueryBuf::new();
        let mut assignments: Vec<String> = Vec::with_capacity(self.sets.len() + 1);
        for (col, v) in self.sets {
            let n = q.push_param(v);
            assignments.push(format!("{} = ${}", quoted(col), n));
        }
        if let Some(col) = self.touch {
            assignments.push(format!("{} = NOW()", quoted(col)));
        }
        let n = q.push_param(id.into());
        q.sql = format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
            quoted(self.table),
            assignments.join(", "),
            quoted(id_column),
            n,
            returning
        );
        q
    }
}
