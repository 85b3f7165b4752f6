//! Cache-first resolution of remotely defined configuration.
//!
//! Filter configurations, root organizations and the course framework id are fetched at most
//! once per process lifetime and served from the in-memory cache afterwards. Fetch failures
//! never propagate from the public methods here: configuration absence must not block the
//! screens asking for it, so the internal `Result` is converted to an empty default at the
//! boundary, with a warning.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use vidya_core::{require, MissingFieldError};

use crate::{
    services::{FormRequest, ServiceError, SystemSettingRequest},
    FormFrameworkClient,
};

pub(crate) const PAGE_LIBRARY_FILTER_PATH: &str = "data/form/pageassemble_library_filter.json";
pub(crate) const PAGE_COURSE_FILTER_PATH: &str = "data/form/pageassemble_course_filter.json";

const SYSTEM_SETTING_CUSTODIAN_ORG_ID: &str = "custodianOrgId";

/// An error fetching a configuration kind. Absorbed at the public boundary.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ConfigFetchError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

impl FormFrameworkClient {
    /// The library page filter configuration, fetched once and cached for the process lifetime.
    /// Fetch failures resolve to the empty configuration.
    pub async fn get_library_filter_config(&self) -> Vec<Value> {
        let cached = self.state.cache.library_filter();
        if !cached.is_empty() {
            return cached;
        }

        match self
            .fetch_filter_fields("library", PAGE_LIBRARY_FILTER_PATH)
            .await
        {
            Ok(fields) => {
                self.state.cache.set_library_filter(fields.clone());
                fields
            }
            Err(e) => {
                warn!("Failed to fetch library filter config: {e}");
                Vec::new()
            }
        }
    }

    /// The course page filter configuration, fetched once and cached for the process lifetime.
    /// Fetch failures resolve to the empty configuration.
    pub async fn get_course_filter_config(&self) -> Vec<Value> {
        let cached = self.state.cache.course_filter();
        if !cached.is_empty() {
            return cached;
        }

        match self
            .fetch_filter_fields("course", PAGE_COURSE_FILTER_PATH)
            .await
        {
            Ok(fields) => {
                self.state.cache.set_course_filter(fields.clone());
                fields
            }
            Err(e) => {
                warn!("Failed to fetch course filter config: {e}");
                Vec::new()
            }
        }
    }

    /// One form fetch for a page filter configuration; extracts `result.fields`.
    async fn fetch_filter_fields(
        &self,
        sub_type: &str,
        file_path: &str,
    ) -> Result<Vec<Value>, ConfigFetchError> {
        let request = FormRequest {
            form_type: "pageAssemble".into(),
            sub_type: sub_type.into(),
            action: "filter".into(),
            file_path: Some(file_path.into()),
        };

        let raw = self.state.form_service.get_form(request).await?;
        let response: Value = serde_json::from_str(&raw)?;
        let fields = require!(response.pointer("/result/fields").and_then(Value::as_array));

        Ok(fields.clone())
    }

    /// The root organizations, fetched once and cached for the process lifetime. Fetch failures
    /// resolve to the empty list.
    pub async fn get_root_organizations(&self) -> Vec<Value> {
        let cached = self.state.cache.root_organizations();
        if !cached.is_empty() {
            return cached;
        }

        match self.fetch_root_organizations().await {
            Ok(organizations) => {
                self.state
                    .cache
                    .set_root_organizations(organizations.clone());
                organizations
            }
            Err(e) => {
                warn!("Failed to fetch root organizations: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch_root_organizations(&self) -> Result<Vec<Value>, ConfigFetchError> {
        let raw = self.state.framework_service.get_root_organizations().await?;
        let response: Value = serde_json::from_str(&raw)?;

        // The organization search result arrives as a JSON document embedded in a string field.
        let embedded = require!(response
            .pointer("/result/orgSearchResult")
            .and_then(Value::as_str));
        let search_result: Value = serde_json::from_str(embedded)?;
        let content = require!(search_result.get("content").and_then(Value::as_array));

        Ok(content.clone())
    }

    /// The framework id course pages are assembled against, fetched once and cached for the
    /// process lifetime. Fetch failures resolve to `None`.
    pub async fn get_course_framework_id(&self) -> Option<String> {
        if let Some(id) = self.state.cache.course_framework_id() {
            return Some(id);
        }

        match self
            .state
            .framework_service
            .get_course_framework_id()
            .await
        {
            Ok(id) if !id.is_empty() => {
                self.state.cache.set_course_framework_id(id.clone());
                Some(id)
            }
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to fetch course framework id: {e}");
                None
            }
        }
    }

    /// The custodian organization id system setting. Not cached.
    pub async fn get_custodian_org_id(&self) -> Result<String, ServiceError> {
        self.state
            .framework_service
            .get_system_setting_value(SystemSettingRequest {
                id: SYSTEM_SETTING_CUSTODIAN_ORG_ID.into(),
            })
            .await
    }
}
