// CRM pipelines and their stages

use crate::client::{Client, fields};
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl Client {
    /// `GET pipelines/`
    pub async fn get_pipelines(&self, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        self.get("pipelines", query).await
    }

    /// `GET pipelines/{pipelineId}/?fields=...`
    pub async fn get_pipeline(
        &self,
        pipeline_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(&format!("pipelines/{pipeline_id}"), fields(field_names))
            .await
    }

    /// `GET pipelines/{pipelineId}/stages/?fields=...`
    pub async fn get_pipeline_stages(
        &self,
        pipeline_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("pipelines/{pipeline_id}/stages"),
            fields(field_names),
        )
        .await
    }

    /// `GET pipelines/{pipelineId}/stages/{stageId}/?fields=...`
    pub async fn get_pipeline_stage(
        &self,
        pipeline_id: &str,
        stage_id: &str,
        field_names: &[&str],
    ) -> Result<ApiResponse, Error> {
        self.get(
            &format!("pipelines/{pipeline_id}/stages/{stage_id}"),
            fields(field_names),
        )
        .await
    }
}
