//! Long-running operations returned by device commands, plus the `Status`
//! error model they carry on failure.

use crate::command::UnionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A long-running operation. While `done` is unset or false the operation is
/// still in progress; once done, exactly one of the result alternatives is
/// populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OperationRepr", into = "OperationRepr")]
pub struct Operation {
    pub name: Option<String>,
    pub metadata: Option<Value>,
    pub done: Option<bool>,
    pub result: Option<OperationResult>,
}

impl Operation {
    pub fn is_done(&self) -> bool {
        self.done.unwrap_or(false)
    }
}

/// The `error` xor `response` union of a finished operation.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult {
    Error(Status),
    Response(Value),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationRepr {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<Value>,
}

impl TryFrom<OperationRepr> for Operation {
    type Error = UnionError;

    fn try_from(repr: OperationRepr) -> Result<Self, UnionError> {
        let mut results = Vec::new();
        if let Some(error) = repr.error {
            results.push(OperationResult::Error(error));
        }
        if let Some(response) = repr.response {
            results.push(OperationResult::Response(response));
        }
        if results.len() > 1 {
            return Err(UnionError::MultiplePopulated {
                field: "result",
                got: results.len(),
            });
        }
        // A done operation must carry its result.
        if results.is_empty() && repr.done == Some(true) {
            return Err(UnionError::NonePopulated { field: "result" });
        }
        Ok(Operation {
            name: repr.name,
            metadata: repr.metadata,
            done: repr.done,
            result: results.pop(),
        })
    }
}

impl From<Operation> for OperationRepr {
    fn from(op: Operation) -> Self {
        let mut repr = OperationRepr {
            name: op.name,
            metadata: op.metadata,
            done: op.done,
            error: None,
            response: None,
        };
        match op.result {
            Some(OperationResult::Error(status)) => repr.error = Some(status),
            Some(OperationResult::Response(value)) => repr.response = Some(value),
            None => {}
        }
        repr
    }
}

/// The `google.rpc.Status` error model: numeric code, developer-facing
/// message, and free-form detail messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_operation() {
        let json = r#"{"name":"enterprises/e1/devices/d1/operations/op1","done":false}"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        assert!(!op.is_done());
        assert!(op.result.is_none());
        assert_eq!(serde_json::to_string(&op).unwrap(), json);
    }

    #[test]
    fn test_failed_operation_carries_status() {
        let json = r#"{"name":"enterprises/e1/devices/d1/operations/op1","done":true,"error":{"code":9,"message":"device not active"}}"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        match op.result {
            Some(OperationResult::Error(ref status)) => {
                assert_eq!(status.code, Some(9));
                assert_eq!(status.message.as_deref(), Some("device not active"));
            }
            other => panic!("expected error result, got {other:?}"),
        }
        assert_eq!(serde_json::to_string(&op).unwrap(), json);
    }

    #[test]
    fn test_both_result_alternatives_rejected() {
        let json = r#"{"done":true,"error":{"code":1},"response":{"ok":true}}"#;
        let err = serde_json::from_str::<Operation>(json).unwrap_err();
        assert!(err.to_string().contains("result"));
    }

    #[test]
    fn test_done_operation_without_result_rejected() {
        let json = r#"{"name":"enterprises/e1/devices/d1/operations/op1","done":true}"#;
        let err = serde_json::from_str::<Operation>(json).unwrap_err();
        assert!(err.to_string().contains("result"));
    }

    #[test]
    fn test_response_preserved_opaquely() {
        let json = r#"{"done":true,"response":{"@type":"type.googleapis.com/google.protobuf.Empty"}}"#;
        let op: Operation = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&op).unwrap(), json);
    }
}
