//! Shared validation helpers for inbound HTTP adapters.
//!
//! Raw path and body parameters travel as strings; malformed ids are
//! rejected here, before any store access, with structured details.

use serde_json::json;

use crate::domain::Error;

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a positive integer id")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_id",
    }))
}

/// Parse a raw identifier string, rejecting anything that is not an
/// integer id before it reaches the store.
pub(crate) fn parse_id(value: &str, field: FieldName) -> Result<i32, Error> {
    value
        .parse::<i32>()
        .map_err(|_| invalid_id_error(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::Value;

    #[test]
    fn parse_id_accepts_integers() {
        let id = parse_id("42", FieldName::new("userId")).expect("valid id");
        assert_eq!(id, 42);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1.5")]
    #[case("99999999999999999999")]
    fn parse_id_rejects_malformed_values(#[case] raw: &str) {
        let err = parse_id(raw, FieldName::new("userId")).expect_err("malformed id");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details present");
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("invalid_id")
        );
        assert_eq!(
            details.get("field").and_then(Value::as_str),
            Some("userId")
        );
        assert_eq!(details.get("value").and_then(Value::as_str), Some(raw));
    }

    #[test]
    fn missing_field_error_names_the_field() {
        let err = missing_field_error(FieldName::new("restaurantId"));
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details present");
        assert_eq!(
            details.get("code").and_then(Value::as_str),
            Some("missing_field")
        );
    }
}
