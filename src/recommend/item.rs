use std::collections::HashMap;

use serde::{de, Deserialize, Deserializer};
use serde_json::{Number, Value};

pub const MATERIAL_TYPE: &str = "Material Type";
pub const RECYCLABLE: &str = "Recyclable";
pub const COMPOSTABLE: &str = "Compostable";

/// A material record as returned by the backend. Keys are not validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationItem {
    fields: HashMap<String, Value>,
}

impl<'de> Deserialize<'de> for RecommendationItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Scalars and arrays have no named fields, so every field of such an
        // item is missing. Only null has no fields to look up at all.
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self {
                fields: map.into_iter().collect(),
            }),
            Value::Null => Err(de::Error::custom("recommendation item is null")),
            _ => Ok(Self::default()),
        }
    }
}

impl RecommendationItem {
    #[cfg(test)]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Display text of a field, converted the way a browser template string
    /// would: a missing key is `undefined`.
    pub fn display_field(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(value) => to_display(value),
            None => "undefined".to_string(),
        }
    }
}

fn to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_display(n),
        Value::Array(values) => values
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => to_display(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_to_display(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}
