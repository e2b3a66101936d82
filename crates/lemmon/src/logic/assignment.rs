//! Truth-value assignments

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A truth-value assignment for propositional variables.
///
/// Reads of absent variables return `false`; callers rely on this
/// default and it must not become an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    values: IndexMap<String, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Assignment {
            values: IndexMap::new(),
        }
    }

    /// Set the value of a variable
    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), value);
    }

    /// Look up a variable, defaulting to `false` when absent
    pub fn value(&self, name: &str) -> bool {
        self.values.get(name).copied().unwrap_or(false)
    }

    /// Whether the variable was explicitly assigned
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of explicitly assigned variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the assigned variables in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl FromIterator<(String, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Assignment {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, if *value { "T" } else { "F" })?;
        }
        Ok(())
    }
}
