//! A report is an ordered list of labelled results, rendered either as
//! `label: value` lines or as a JSON array.

use serde::Serialize;
use serde_json::Value;

/// One printed result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Topic the result belongs to, e.g. `arrays`
    pub topic: &'static str,
    /// Human-readable description of what was computed
    pub label: String,
    /// The computed value
    pub value: Value,
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result under `topic`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented as JSON.
    pub fn push<T: Serialize>(
        &mut self,
        topic: &'static str,
        label: impl Into<String>,
        value: T,
    ) -> serde_json::Result<()> {
        self.entries.push(Entry {
            topic,
            label: label.into(),
            value: serde_json::to_value(value)?,
        });
        Ok(())
    }

    /// Appends all entries of `other`, keeping their order.
    pub fn extend(&mut self, other: Report) {
        self.entries.extend(other.entries);
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the first entry with the given label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    /// One `label: value` line per entry. Strings are printed without quotes.
    #[must_use]
    pub fn render_text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| match &entry.value {
                Value::String(s) => format!("{}: {s}", entry.label),
                other => format!("{}: {other}", entry.label),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pretty-printed JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}
