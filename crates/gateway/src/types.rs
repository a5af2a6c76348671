//! Wire types for the batch endpoint.

use executor::{Args, ToolError};
use serde::{Deserialize, Deserializer, Serialize};

/// A single requested operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Tool identifier, e.g. `apps.open`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tool: String,
    /// Opaque label for the target device. Echoed back, never inspected.
    #[serde(default, deserialize_with = "null_as_default")]
    pub device: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub args: Args,
}

impl Action {
    pub fn new(tool: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            device: device.into(),
            args: Args::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }
}

/// The result of attempting one [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub tool: String,
    pub device: String,
    /// [`ActionOutcome::SUCCESS`] or a human-readable failure description.
    pub status: String,
    /// Tool output; empty on failure.
    pub output: String,
}

impl ActionOutcome {
    /// Status marker for an action that completed without error.
    pub const SUCCESS: &'static str = "success";

    pub fn success(action: Action, output: String) -> Self {
        Self {
            tool: action.tool,
            device: action.device,
            status: Self::SUCCESS.to_string(),
            output,
        }
    }

    pub fn failure(action: Action, error: &ToolError) -> Self {
        Self {
            tool: action.tool,
            device: action.device,
            status: error.to_string(),
            output: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }
}

/// An ordered batch of actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(default, deserialize_with = "nullable_actions")]
    pub actions: Vec<Action>,
}

impl BatchRequest {
    /// Decode a request body.
    ///
    /// A literal `null` body is an empty batch, and a `null` entry in
    /// `actions` is an action with every field empty. Anything else that
    /// is not a batch is an error.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        Ok(serde_json::from_slice::<Option<Self>>(body)?.unwrap_or_default())
    }
}

/// Outcomes in the same order as the request's actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<ActionOutcome>,
}

/// Liveness reply for `GET /ping`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
}

impl PingResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Reply for `GET /tools`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolsResponse {
    pub tools: Vec<executor::ToolSpec>,
}

// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_actions<'de, D>(deserializer: D) -> Result<Vec<Action>, D::Error>
where
    D: Deserializer<'de>,
{
    let actions: Option<Vec<Option<Action>>> = Option::deserialize(deserializer)?;
    Ok(actions
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_parses_full_shape() {
        let action: Action = serde_json::from_value(json!({
            "tool": "apps.open",
            "device": "MacBook Pro",
            "args": { "app_name": "Safari" }
        }))
        .unwrap();

        assert_eq!(
            action,
            Action::new("apps.open", "MacBook Pro").with_arg("app_name", "Safari")
        );
    }

    #[test]
    fn missing_and_null_fields_default_to_empty() {
        let action: Action =
            serde_json::from_value(json!({ "tool": "system.info", "args": null })).unwrap();
        assert_eq!(action.device, "");
        assert!(action.args.is_empty());

        let batch: BatchRequest = serde_json::from_value(json!({})).unwrap();
        assert!(batch.actions.is_empty());
    }

    #[test]
    fn null_body_is_an_empty_batch() {
        let batch = BatchRequest::from_json(b"null").unwrap();
        assert!(batch.actions.is_empty());

        let batch = BatchRequest::from_json(br#"{"actions": null}"#).unwrap();
        assert!(batch.actions.is_empty());
    }

    #[test]
    fn null_action_entry_keeps_its_position() {
        let batch = BatchRequest::from_json(
            br#"{"actions": [{"tool": "system.info"}, null, {"tool": "apps.open"}]}"#,
        )
        .unwrap();

        assert_eq!(batch.actions.len(), 3);
        assert_eq!(batch.actions[1], Action::default());
        assert_eq!(batch.actions[2].tool, "apps.open");
    }

    #[test]
    fn non_batch_bodies_are_rejected() {
        assert!(BatchRequest::from_json(b"").is_err());
        assert!(BatchRequest::from_json(br#"{"actions": [1]}"#).is_err());
    }

    #[test]
    fn non_string_argument_values_are_rejected() {
        let result = serde_json::from_value::<Action>(json!({
            "tool": "apps.open",
            "args": { "app_name": 42 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn failure_outcome_has_empty_output() {
        let action = Action::new("nope.op", "laptop");
        let outcome =
            ActionOutcome::failure(action, &ToolError::UnsupportedTool("nope.op".into()));

        assert!(!outcome.is_success());
        assert_eq!(outcome.tool, "nope.op");
        assert_eq!(outcome.device, "laptop");
        assert_eq!(outcome.status, "tool nope.op not implemented");
        assert!(outcome.output.is_empty());
    }

    #[test]
    fn outcome_serializes_flat() {
        let outcome = ActionOutcome::success(Action::new("system.info", "mac"), "v1".into());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "tool": "system.info", "device": "mac", "status": "success", "output": "v1" })
        );
    }
}
