//! Request envelope handed to a transport.

use serde::{Deserialize, Serialize};

/// `{query, operationName, variables}`. Absent fields are omitted when
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl Request {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    #[must_use]
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Serializes the envelope as JSON.
    ///
    /// # Errors
    ///
    /// Fails only if the variables cannot be serialized.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_omits_absent_fields() {
        let request = Request::new("{ a }");
        assert_eq!(request.to_json().unwrap(), r#"{"query":"{ a }"}"#);
    }

    #[test]
    fn test_full_envelope() {
        let request = Request::new("query Q($id: ID) { a(id: $id) }")
            .with_operation_name("Q")
            .with_variables(json!({ "id": "7" }));
        let value: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "query Q($id: ID) { a(id: $id) }",
                "operationName": "Q",
                "variables": { "id": "7" }
            })
        );
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let request: Request = serde_json::from_str(r#"{"query":"{ a }"}"#).unwrap();
        assert_eq!(request, Request::new("{ a }"));
    }
}
