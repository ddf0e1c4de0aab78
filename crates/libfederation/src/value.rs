use indexmap::IndexMap;
use std::collections::BTreeMap;

/// A literal value passed as an argument to a
/// [`FederationDirective`](crate::FederationDirective) or used as the default
/// value of an [`InputValue`](crate::types::InputValue).
///
/// Values are carried into the output document verbatim: no coercion against
/// the directive's declared argument types is performed.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i32),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Convenience constructor for [`Value::Enum`].
    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    /// Maps a JSON value onto a [`Value`].
    ///
    /// Integers that fit in 32 bits become [`Value::Int`]; every other number
    /// becomes a [`Value::Float`]. JSON has no enum literal, so strings always
    /// map to [`Value::String`].
    pub(crate) fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null =>
                Value::Null,

            serde_json::Value::Bool(value) =>
                Value::Boolean(*value),

            serde_json::Value::Number(number) =>
                match number.as_i64().map(i32::try_from) {
                    Some(Ok(int)) => Value::Int(int),
                    _ => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
                },

            serde_json::Value::String(value) =>
                Value::String(value.clone()),

            serde_json::Value::Array(values) =>
                Value::List(values.iter().map(Value::from_json).collect()),

            serde_json::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, json_value)|
                    (key.clone(), Value::from_json(json_value))
                ).collect()),
        }
    }

    /// Convert this [`Value`] into a `graphql_parser` value node.
    ///
    /// `graphql_parser` stores object values in a `BTreeMap`, so object entries
    /// are rendered in alphabetical key order.
    pub(crate) fn to_gp(&self) -> graphql_parser::query::Value<'static, String> {
        use graphql_parser::query::Value as GpValue;
        match self {
            Value::Boolean(value) => GpValue::Boolean(*value),
            Value::Enum(name) => GpValue::Enum(name.clone()),
            Value::Float(value) => GpValue::Float(*value),
            Value::Int(value) => GpValue::Int((*value).into()),
            Value::List(values) =>
                GpValue::List(values.iter().map(Value::to_gp).collect()),
            Value::Null => GpValue::Null,
            Value::Object(entries) => {
                let mut map = BTreeMap::new();
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_gp());
                }
                GpValue::Object(map)
            },
            Value::String(value) => GpValue::String(value.clone()),
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
