//! The external platform services this crate consumes.
//!
//! The remote wire format is not owned by this SDK; services return raw JSON strings and only
//! the fields the resolvers consume are ever interpreted.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::{category::CategoryRequest, profile::Profile};

/// An error from an external platform service call.
#[derive(Debug, Error)]
#[error("Platform service call failed: {0}")]
pub struct ServiceError(pub String);

/// A form definition lookup request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormRequest {
    /// Form family, e.g. `pageAssemble` or `app`.
    #[serde(rename = "type")]
    pub form_type: String,
    #[allow(missing_docs)]
    pub sub_type: String,
    #[allow(missing_docs)]
    pub action: String,
    /// Bundled fallback definition used when the remote form is unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// A request for all categories of a framework.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkDetailsRequest {
    /// Resolve the default framework instead of a specific one.
    pub default_framework_details: bool,
    #[allow(missing_docs)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_id: Option<String>,
    /// Category names to include in the details.
    pub categories: Vec<String>,
}

/// A request for a single system setting value.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SystemSettingRequest {
    #[allow(missing_docs)]
    pub id: String,
}

/// Remote form definition source.
#[async_trait]
pub trait FormService: Send + Sync {
    /// Fetch a form definition. Returns the raw JSON response.
    async fn get_form(&self, request: FormRequest) -> Result<String, ServiceError>;
}

/// Remote framework and category data source.
#[async_trait]
pub trait FrameworkService: Send + Sync {
    /// Fetch all categories of a framework.
    async fn get_all_categories(
        &self,
        request: FrameworkDetailsRequest,
    ) -> Result<serde_json::Value, ServiceError>;

    /// Fetch the term data of one category. Returns the raw JSON response.
    async fn get_category_data(&self, request: CategoryRequest) -> Result<String, ServiceError>;

    /// Fetch the root organization search result. Returns the raw JSON response.
    async fn get_root_organizations(&self) -> Result<String, ServiceError>;

    /// Fetch the framework id course pages are assembled against.
    async fn get_course_framework_id(&self) -> Result<String, ServiceError>;

    /// Fetch a system setting value.
    async fn get_system_setting_value(
        &self,
        request: SystemSettingRequest,
    ) -> Result<String, ServiceError>;
}

/// Profile persistence owned by the embedding application.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Apply a profile update. Returns the updated record as raw JSON.
    async fn update_profile(&self, profile: Profile) -> Result<String, ServiceError>;
}
