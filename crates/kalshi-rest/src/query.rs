//! Query string construction
//!
//! Values are written with their `Display` form and are not percent-encoded.
//! Tickers, cursors, and status names are plain tokens; anything richer is
//! the caller's responsibility.

use std::fmt::Display;

/// Ordered set of optional query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    params: Vec<(&'static str, Option<String>)>,
}

impl QueryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter; `None` is recorded but never rendered
    pub fn param(mut self, name: &'static str, value: Option<impl Display>) -> Self {
        self.params.push((name, value.map(|v| v.to_string())));
        self
    }

    /// Render `?a=1&b=2`, or an empty string when every value is absent
    pub fn build(&self) -> String {
        let mut query = String::new();

        for (name, value) in &self.params {
            let Some(value) = value else { continue };
            query.push(if query.is_empty() { '?' } else { '&' });
            query.push_str(name);
            query.push('=');
            query.push_str(value);
        }

        query
    }
}

/// Append one more parameter to an already rendered query string
///
/// Joins with `&` when `query` already has parameters, else starts it with `?`.
pub fn append_param(query: &mut String, name: &str, value: impl Display) {
    query.push(if query.is_empty() { '?' } else { '&' });
    query.push_str(name);
    query.push('=');
    query.push_str(&value.to_string());
}
