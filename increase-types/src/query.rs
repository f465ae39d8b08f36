//! URL query encoding for list parameters.
//!
//! Nested objects are flattened with dots (`created_at.after=...`) and arrays
//! are comma-joined (`status.in=open,closed`).

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// A single `key=value` query pair, unescaped.
pub type QueryPair = (String, String);

/// Types that can be written into a URL query string.
pub trait ToQuery {
    /// Append this value's members to `w`.
    fn write_query(&self, w: &mut QueryWriter);

    /// Collect the encoded pairs.
    fn to_query(&self) -> Vec<QueryPair> {
        let mut w = QueryWriter::new();
        self.write_query(&mut w);
        w.finish()
    }
}

/// Scalar values with a canonical query-string representation.
pub trait QueryValue {
    /// Render as the string sent on the wire.
    fn to_query_value(&self) -> String;
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for &str {
    fn to_query_value(&self) -> String {
        (*self).to_string()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

impl QueryValue for u32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for DateTime<Utc> {
    fn to_query_value(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl QueryValue for NaiveDate {
    fn to_query_value(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

/// Accumulates query pairs under an optional dotted prefix.
#[derive(Debug, Default)]
pub struct QueryWriter {
    prefix: Option<String>,
    pairs: Vec<QueryPair>,
}

impl QueryWriter {
    /// Empty writer with no prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(&self, name: &str) -> String {
        match &self.prefix {
            Some(p) => format!("{p}.{name}"),
            None => name.to_string(),
        }
    }

    /// Append `name=value`.
    pub fn push<V: QueryValue>(&mut self, name: &str, value: &V) -> &mut Self {
        let key = self.key(name);
        self.pairs.push((key, value.to_query_value()));
        self
    }

    /// Append `name=value` when `value` is set.
    pub fn push_opt<V: QueryValue>(&mut self, name: &str, value: Option<&V>) -> &mut Self {
        if let Some(v) = value {
            self.push(name, v);
        }
        self
    }

    /// Append a comma-joined list. Empty lists are skipped.
    pub fn push_list<V: QueryValue>(&mut self, name: &str, values: &[V]) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(QueryValue::to_query_value)
            .collect::<Vec<_>>()
            .join(",");
        let key = self.key(name);
        self.pairs.push((key, joined));
        self
    }

    /// Write a nested object under `name` when present.
    pub fn nested<T: ToQuery + ?Sized>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(v) = value {
            let mut inner = Self {
                prefix: Some(self.key(name)),
                pairs: Vec::new(),
            };
            v.write_query(&mut inner);
            self.pairs.extend(inner.pairs);
        }
        self
    }

    /// Consume the writer.
    #[must_use]
    pub fn finish(self) -> Vec<QueryPair> {
        self.pairs
    }
}

/// Timestamp range filter shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedAtFilter {
    /// Only return objects created after this instant.
    pub after: Option<DateTime<Utc>>,
    /// Only return objects created before this instant.
    pub before: Option<DateTime<Utc>>,
    /// Only return objects created at or after this instant.
    pub on_or_after: Option<DateTime<Utc>>,
    /// Only return objects created at or before this instant.
    pub on_or_before: Option<DateTime<Utc>>,
}

impl ToQuery for CreatedAtFilter {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_opt("after", self.after.as_ref())
            .push_opt("before", self.before.as_ref())
            .push_opt("on_or_after", self.on_or_after.as_ref())
            .push_opt("on_or_before", self.on_or_before.as_ref());
    }
}

/// Set-membership filter, encoded as `<name>.in=a,b,c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFilter<T> {
    /// Accepted values.
    pub values: Vec<T>,
}

impl<T> InFilter<T> {
    /// Filter accepting any of `values`.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl<T> Default for InFilter<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T: QueryValue> ToQuery for InFilter<T> {
    fn write_query(&self, w: &mut QueryWriter) {
        w.push_list("in", &self.values);
    }
}
