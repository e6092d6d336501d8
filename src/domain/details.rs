use {
    super::error::AuditError,
    super::id::ensure_storable,
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

/// Free-form metadata attached to an audit event.
///
/// Values are `serde_json::Value`, so every variant (null, bool, number,
/// string, array, object) is representable and encoding cannot produce a
/// non-finite float. An empty map encodes as `{}`, never as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Details(Map<String, Value>);

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`Details::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject NUL anywhere in keys or string values; `jsonb` cannot store it.
    pub fn ensure_storable(&self) -> Result<(), AuditError> {
        ensure_map_storable(&self.0)
    }

    pub fn encode(&self) -> Result<String, AuditError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    pub fn decode(encoded: &str) -> Result<Self, AuditError> {
        Ok(serde_json::from_str(encoded)?)
    }
}

impl From<Map<String, Value>> for Details {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Details {
    type Error = AuditError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self(map)),
            other => Err(AuditError::Validation(format!(
                "details must be a JSON object, got: {other}"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Details {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn ensure_map_storable(map: &Map<String, Value>) -> Result<(), AuditError> {
    map.iter().try_for_each(|(key, value)| {
        ensure_storable("details key", key)?;
        ensure_value_storable(value)
    })
}

fn ensure_value_storable(value: &Value) -> Result<(), AuditError> {
    match value {
        Value::String(s) => ensure_storable("details value", s),
        Value::Array(items) => items.iter().try_for_each(ensure_value_storable),
        Value::Object(map) => ensure_map_storable(map),
        Value::Null | Value::Bool(_) | Value::Number(_) => Ok(()),
    }
}
