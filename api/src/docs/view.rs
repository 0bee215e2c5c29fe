use std::collections::HashMap;

use actix_web::http::Method;
use serde::Serialize;

use super::action::{Action, ACTIONS};

/// Extra documentation for a single action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_description: Option<String>,
}

impl OperationParams {
    pub fn summary(summary: impl Into<String>) -> Self {
        Self {
            operation_summary: Some(summary.into()),
            operation_description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.operation_description = Some(description.into());
        self
    }
}

/// One routed operation of a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub action: Action,
    pub method: Method,
    pub path: String,
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
}

/// Documentation descriptor of a view: the actions it implements and the
/// metadata attached to each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDoc {
    name: String,
    operations: Vec<Operation>,
}

impl ViewDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    /// Declare that the view implements `action`, served by `method` on `path`
    pub fn action(mut self, action: Action, method: Method, path: impl Into<String>) -> Self {
        self.operations.push(Operation {
            action,
            method,
            path: path.into(),
            tags: Vec::new(),
            summary: None,
            description: None,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn implements(&self, action: Action) -> bool {
        self.operations.iter().any(|op| op.action == action)
    }

    /// Attach tags and params to a single implemented action.
    ///
    /// Unset params leave an existing summary or description in place.
    pub fn with_operation(mut self, action: Action, tags: &[&str], params: OperationParams) -> Self {
        for op in self.operations.iter_mut().filter(|op| op.action == action) {
            op.tags = tags.iter().map(|tag| tag.to_string()).collect();
            if let Some(summary) = &params.operation_summary {
                op.summary = Some(summary.clone());
            }
            if let Some(description) = &params.operation_description {
                op.description = Some(description.clone());
            }
        }
        self
    }
}

/// Tag every action a view implements with `tag`.
///
/// `action_params` adds a summary or description to individual actions.
/// Actions the view does not implement are skipped; the skip is logged at
/// debug level so a mistyped action shows up in the logs.
pub fn swagger_tag(
    tag: &str,
    action_params: Option<HashMap<Action, OperationParams>>,
) -> impl FnOnce(ViewDoc) -> ViewDoc {
    let tag = tag.to_string();
    let mut action_params = action_params.unwrap_or_default();

    move |mut view| {
        for action in ACTIONS {
            if !view.implements(action) {
                tracing::debug!(view = %view.name, action = %action, "View does not implement action");
                continue;
            }
            let params = action_params.remove(&action).unwrap_or_default();
            view = view.with_operation(action, &[tag.as_str()], params);
        }
        view
    }
}
