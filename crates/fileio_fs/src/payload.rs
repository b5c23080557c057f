use serde_json::Value;

/// Content accepted by [`FileAccessor::write`](crate::FileAccessor::write).
///
/// Text is written as-is, JSON values are rendered to compact JSON text first.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Json(Value),
}

impl Payload {
    /// Renders the payload to the exact text that will be written.
    pub fn into_text(self) -> String {
        match self {
            Payload::Text(text) => text,
            Payload::Json(value) => value.to_string(),
        }
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Json(value)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_text_is_unchanged() {
        assert_eq!(Payload::from("Foo bar\n").into_text(), "Foo bar\n");
        assert_eq!(Payload::from(String::new()).into_text(), "");
    }

    #[test]
    fn test_json_is_compact() {
        assert_eq!(Payload::from(json!({ "a": 1 })).into_text(), r#"{"a":1}"#);
        assert_eq!(Payload::from(json!([1, "two", null])).into_text(), r#"[1,"two",null]"#);
    }

    #[test]
    fn test_json_string_is_quoted() {
        // A JSON string value is never empty text, even when the string is.
        assert_eq!(Payload::from(json!("")).into_text(), r#""""#);
    }
}
