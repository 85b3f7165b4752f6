//! Framework category and term resolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use vidya_core::{require, MissingFieldError};

use crate::{
    services::{FrameworkDetailsRequest, ServiceError},
    FormFrameworkClient,
};

/// Framework categories requested by default.
pub const DEFAULT_FRAMEWORK_CATEGORIES: [&str; 4] = ["board", "gradeLevel", "medium", "subject"];

/// A request for the term data of one category.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    /// Language the term labels should be localized to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_language: Option<String>,
    /// The category whose terms are requested.
    pub current_category: String,
    /// Framework to resolve against; the default framework when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_id: Option<String>,
    /// Category names the framework is scoped to.
    pub categories: Vec<String>,
}

/// A single canonical category mapping unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTerm {
    /// Human-readable term name.
    pub name: String,
    /// Canonical term code.
    pub code: String,
}

/// An error resolving category terms. Absorbed per-category during profile normalization; a
/// failed category simply contributes nothing to the normalized profile.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CategoryResolutionError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}

impl FormFrameworkClient {
    /// All categories of a framework; the default framework when no id is given. Errors
    /// propagate, the caller decides how to degrade.
    pub async fn get_framework_details(
        &self,
        framework_id: Option<&str>,
    ) -> Result<Value, ServiceError> {
        let mut request = FrameworkDetailsRequest {
            default_framework_details: true,
            framework_id: None,
            categories: DEFAULT_FRAMEWORK_CATEGORIES
                .iter()
                .map(|category| (*category).to_string())
                .collect(),
        };

        if let Some(id) = framework_id.filter(|id| !id.is_empty()) {
            request.default_framework_details = false;
            request.framework_id = Some(id.to_string());
        }

        self.state.framework_service.get_all_categories(request).await
    }

    /// Resolve a category request into its ordered term list. Every call fetches fresh data;
    /// category terms are never cached, unlike the filter configurations.
    pub async fn get_category_terms(
        &self,
        request: CategoryRequest,
    ) -> Result<Vec<CategoryTerm>, CategoryResolutionError> {
        let raw = self
            .state
            .framework_service
            .get_category_data(request)
            .await?;
        let response: Value = serde_json::from_str(&raw)?;
        let terms = require!(response.get("terms").and_then(Value::as_array));

        terms
            .iter()
            .map(|term| {
                let name = require!(term.get("name").and_then(Value::as_str));
                let code = require!(term.get("code").and_then(Value::as_str));
                Ok(CategoryTerm {
                    name: name.to_string(),
                    code: code.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::harness;

    fn request(category: &str) -> CategoryRequest {
        CategoryRequest {
            selected_language: Some("en".into()),
            current_category: category.into(),
            framework_id: None,
            categories: DEFAULT_FRAMEWORK_CATEGORIES
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
        }
    }

    #[tokio::test]
    async fn parses_terms_preserving_order() {
        let harness = harness();
        harness.framework_service.stub_category(
            "board",
            &json!({
                "terms": [
                    { "name": "State Board", "code": "stateboard", "index": 2 },
                    { "name": "Central Board", "code": "centralboard", "index": 1 },
                ]
            })
            .to_string(),
        );

        let terms = harness
            .client
            .get_category_terms(request("board"))
            .await
            .unwrap();

        assert_eq!(
            terms,
            vec![
                CategoryTerm {
                    name: "State Board".into(),
                    code: "stateboard".into()
                },
                CategoryTerm {
                    name: "Central Board".into(),
                    code: "centralboard".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn terms_are_fetched_fresh_on_every_call() {
        let harness = harness();
        harness
            .framework_service
            .stub_category("board", &json!({ "terms": [] }).to_string());

        harness
            .client
            .get_category_terms(request("board"))
            .await
            .unwrap();
        harness
            .client
            .get_category_terms(request("board"))
            .await
            .unwrap();

        assert_eq!(harness.framework_service.category_call_count(), 2);
    }

    #[tokio::test]
    async fn missing_terms_list_is_an_error() {
        let harness = harness();
        harness
            .framework_service
            .stub_category("board", &json!({ "result": {} }).to_string());

        let result = harness.client.get_category_terms(request("board")).await;

        assert!(matches!(
            result,
            Err(CategoryResolutionError::MissingField(_))
        ));
    }

    #[tokio::test]
    async fn malformed_term_entry_is_an_error() {
        let harness = harness();
        harness.framework_service.stub_category(
            "board",
            &json!({ "terms": [ { "name": "State Board" } ] }).to_string(),
        );

        let result = harness.client.get_category_terms(request("board")).await;

        assert!(matches!(
            result,
            Err(CategoryResolutionError::MissingField(_))
        ));
    }

    #[tokio::test]
    async fn framework_details_request_defaults_when_no_id_given() {
        let harness = harness();
        harness
            .framework_service
            .stub_all_categories(json!({ "framework": { "code": "default" } }));

        harness.client.get_framework_details(None).await.unwrap();

        let requests = harness.framework_service.framework_details_seen();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].default_framework_details);
        assert_eq!(requests[0].framework_id, None);
    }

    #[tokio::test]
    async fn framework_details_request_targets_the_given_framework() {
        let harness = harness();
        harness
            .framework_service
            .stub_all_categories(json!({ "framework": { "code": "fw-1" } }));

        harness
            .client
            .get_framework_details(Some("fw-1"))
            .await
            .unwrap();

        let requests = harness.framework_service.framework_details_seen();
        assert!(!requests[0].default_framework_details);
        assert_eq!(requests[0].framework_id.as_deref(), Some("fw-1"));
    }
}
