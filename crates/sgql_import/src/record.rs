//! Imported operation records.

use crate::request::Request;
use serde::Serialize;
use sgql_syntax::OperationType;
use std::fmt;

/// One operation found in an imported file.
///
/// `source` is the whole file text after import expansion, so sending it
/// together with `operation_name` selects this operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    pub file_name: String,
    pub operation_name: Option<String>,
    pub operation_type: OperationType,
    pub source: String,
}

impl OperationRecord {
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.operation_name.is_none()
    }

    /// Builds the request envelope for this operation.
    #[must_use]
    pub fn to_request(&self, variables: Option<serde_json::Value>) -> Request {
        Request {
            query: self.source.clone(),
            operation_name: self.operation_name.clone(),
            variables,
        }
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file_name,
            self.operation_name.as_deref().unwrap_or(""),
            self.operation_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: Option<&str>) -> OperationRecord {
        OperationRecord {
            file_name: "heroes".to_string(),
            operation_name: name.map(str::to_string),
            operation_type: OperationType::Query,
            source: "query Hero { hero { name } }".to_string(),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(record(Some("Hero")).to_string(), "heroes:Hero:query");
        assert_eq!(record(None).to_string(), "heroes::query");
    }

    #[test]
    fn test_to_request() {
        let request = record(Some("Hero")).to_request(Some(json!({ "id": 1 })));
        assert_eq!(request.query, "query Hero { hero { name } }");
        assert_eq!(request.operation_name.as_deref(), Some("Hero"));
        assert_eq!(request.variables, Some(json!({ "id": 1 })));

        let anonymous = record(None).to_request(None);
        assert_eq!(
            anonymous.to_json().unwrap(),
            r#"{"query":"query Hero { hero { name } }"}"#
        );
    }

    #[test]
    fn test_serialize() {
        let value = serde_json::to_value(record(None)).unwrap();
        assert_eq!(
            value,
            json!({
                "fileName": "heroes",
                "operationName": null,
                "operationType": "Query",
                "source": "query Hero { hero { name } }"
            })
        );
    }
}
