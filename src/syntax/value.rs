//!
//! The parsed document.
//!

use rjson_macros::RfcRef;

use crate::lexing::TokenValue;

///
/// A JSON value.
///
/// Objects keep their members in source order,
/// duplicate keys included.
///
#[RfcRef("3", "Values")]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<Member>),
}

///
/// One `key: value` pair of an object.
///
#[RfcRef("4", "Objects")]
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub key: String,
    pub value: Value,
}

impl Member {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    ///
    /// Looks up the first member called `key`.
    ///
    /// Returns `None` for anything other than an object.
    ///
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|member| member.key == key)
            .map(|member| &member.value)
    }

    ///
    /// Every member called `key`, in source order.
    ///
    pub fn get_all<'a, 'k>(
        &'a self,
        key: &'k str,
    ) -> impl Iterator<Item = &'a Value> + use<'a, 'k> {
        self.as_object()
            .unwrap_or_default()
            .iter()
            .filter(move |member| member.key == key)
            .map(|member| &member.value)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }
}

impl From<TokenValue> for Value {
    fn from(value: TokenValue) -> Self {
        match value {
            TokenValue::Bool(b) => Self::Bool(b),
            TokenValue::Number(n) => Self::Number(n),
            TokenValue::String(s) => Self::String(s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<Member>> for Value {
    fn from(value: Vec<Member>) -> Self {
        Self::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexing::TokenValue;

    use super::{Member, Value};

    fn sample() -> Value {
        Value::Object(vec![
            Member::new("a", 1.0),
            Member::new("b", Value::Null),
            Member::new("a", "again"),
        ])
    }

    #[test]
    fn accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::from(vec![Value::Null]).as_array().map(<[_]>::len), Some(1));
        assert_eq!(sample().as_object().map(<[_]>::len), Some(3));

        assert_eq!(Value::Null.as_bool(), None);
        assert_eq!(Value::from("1").as_f64(), None);
        assert_eq!(sample().as_array(), None);
    }

    #[test]
    fn duplicate_keys() {
        let value = sample();
        assert_eq!(value.get("a"), Some(&Value::Number(1.0)));
        assert_eq!(
            value.get_all("a").collect::<Vec<_>>(),
            [&Value::Number(1.0), &Value::from("again")]
        );
        assert_eq!(value.get("b").map(Value::is_null), Some(true));
        assert_eq!(value.get("c"), None);
        assert_eq!(Value::from("a").get("a"), None);
    }

    #[test]
    fn lookups_outlive_key() {
        let value = sample();

        let first = {
            let key = String::from("a");
            value.get(&key)
        };
        assert_eq!(first, Some(&Value::Number(1.0)));

        let all = {
            let key = "b".to_string();
            value.get_all(&key).collect::<Vec<_>>()
        };
        assert_eq!(all, [&Value::Null]);
    }

    #[test]
    fn kind_names() {
        assert_eq!(sample().kind_name(), "object");
        assert_eq!(Value::Array(vec![]).kind_name(), "array");
        assert_eq!(Value::from(false).kind_name(), "boolean");
    }

    #[test]
    fn from_token_value() {
        assert_eq!(Value::from(TokenValue::Bool(false)), Value::Bool(false));
        assert_eq!(Value::from(TokenValue::Number(-0.5)), Value::Number(-0.5));
        assert_eq!(
            Value::from(TokenValue::String("s".to_string())),
            Value::String("s".to_string())
        );
    }
}
