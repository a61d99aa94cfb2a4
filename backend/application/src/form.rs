use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::fields::Field;

/// Snapshot of everything the applicant entered.
///
/// Updates never mutate in place: each `with_*`/`without` call returns the next
/// snapshot, so a serialized form is never touched again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApplicationForm {
    values: BTreeMap<String, String>,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a known field. Empty strings count as absent.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.raw(field.key()).filter(|value| !value.is_empty())
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn with_value(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.values.insert(key.into(), value.into());
        next
    }

    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        self.with_value(field.key(), value)
    }

    pub fn without(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.values.remove(key);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ApplicationForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// Browsers send `null` for a cleared signature and numbers for numeric inputs,
// so values are coerced instead of requiring strings.
impl<'de> Deserialize<'de> for ApplicationForm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;

        let values = raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                Value::Number(n) => Some((key, n.to_string())),
                Value::Bool(b) => Some((key, b.to_string())),
                Value::Null | Value::Array(_) | Value::Object(_) => None,
            })
            .collect();

        Ok(Self { values })
    }
}
