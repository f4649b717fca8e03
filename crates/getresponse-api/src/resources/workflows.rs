// Marketing automation workflows

use std::fmt;

use serde_json::json;

use crate::client::Client;
use crate::error::Error;
use crate::query::{Query, QueryParams};
use crate::response::ApiResponse;

/// Target state for [`Client::update_workflow_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStatus {
    Active,
    Inactive,
}

impl WorkflowStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Client {
    /// One page of automation workflows. `None` leaves the API default.
    ///
    /// `GET workflow/?perPage=...&page=...`
    pub async fn get_automation_workflows(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<ApiResponse, Error> {
        self.get(
            "workflow",
            QueryParams::new()
                .param("perPage", per_page)
                .param("page", page),
        )
        .await
    }

    /// `GET workflow/{workflowId}/`
    pub async fn get_automation_workflow(&self, workflow_id: &str) -> Result<ApiResponse, Error> {
        self.get(&format!("workflow/{workflow_id}"), Query::None)
            .await
    }

    /// `POST workflow/{workflowId}` with `{"status": "active"|"inactive"}`
    pub async fn update_workflow_status(
        &self,
        workflow_id: &str,
        status: WorkflowStatus,
    ) -> Result<ApiResponse, Error> {
        self.post(
            &format!("workflow/{workflow_id}"),
            &json!({ "status": status.as_str() }),
        )
        .await
    }
}
