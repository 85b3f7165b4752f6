//! App-upgrade policy evaluation over remotely defined version ranges.

use serde::Deserialize;
use serde_json::Value;

use crate::{config::ConfigFetchError, services::FormRequest, FormFrameworkClient};

/// A version range mapped to an upgrade type.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionRange {
    #[allow(missing_docs)]
    pub min_version_code: i64,
    #[allow(missing_docs)]
    pub max_version_code: i64,
    /// The upgrade type this range selects, e.g. `optional` or `force`.
    #[serde(rename = "type")]
    pub upgrade_type: String,
}

/// One localized entry of the upgrade form: the ranges to scan and the rules they select.
/// Unknown display fields are dropped; the rules themselves stay opaque JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpgradeFormField {
    #[allow(missing_docs)]
    pub language: Option<String>,
    #[allow(missing_docs)]
    pub range: Vec<VersionRange>,
    #[allow(missing_docs)]
    pub upgrade_types: Vec<Value>,
}

const FORCE_TYPE: &str = "force";

/// Evaluate the upgrade action applicable to `version_code`.
///
/// The entry matching `selected_language` provides the ranges and rules; without a match, or
/// with either list empty, no upgrade is required. Ranges are scanned in order: a matching
/// `force` range wins immediately and ends the scan, otherwise the last matching range's type is
/// kept. The returned rule is the one whose `type` equals the winning type; at most one rule is
/// ever returned.
pub fn evaluate_upgrade(
    version_code: i64,
    fields: &[UpgradeFormField],
    selected_language: Option<&str>,
) -> Option<Value> {
    let field = fields
        .iter()
        .find(|field| field.language.as_deref() == selected_language)?;
    if field.range.is_empty() || field.upgrade_types.is_empty() {
        return None;
    }

    let mut winning_type: Option<&str> = None;
    for range in &field.range {
        if version_code >= range.min_version_code && version_code <= range.max_version_code {
            winning_type = Some(range.upgrade_type.as_str());
            if range.upgrade_type == FORCE_TYPE {
                break;
            }
        }
    }
    let winning_type = winning_type?;

    field
        .upgrade_types
        .iter()
        .find(|rule| rule.get("type").and_then(Value::as_str) == Some(winning_type))
        .cloned()
}

impl FormFrameworkClient {
    /// Fetch the upgrade form and evaluate it against the installed `version_code`. Returns the
    /// applicable upgrade rule, if any.
    ///
    /// The upgrade form is never cached, and unlike the filter configurations a fetch failure
    /// propagates: the caller decides whether a missed upgrade check may pass silently.
    pub async fn check_app_upgrade(
        &self,
        version_code: i64,
    ) -> Result<Option<Value>, ConfigFetchError> {
        let request = FormRequest {
            form_type: "app".into(),
            sub_type: "install".into(),
            action: "upgrade".into(),
            file_path: None,
        };

        let raw = self.state.form_service.get_form(request).await?;
        let response: Value = serde_json::from_str(&raw)?;

        let fields: Vec<UpgradeFormField> = match response.pointer("/result/fields") {
            Some(fields) => serde_json::from_value(fields.clone())?,
            None => return Ok(None),
        };

        let selected_language = self.selected_language().await;
        Ok(evaluate_upgrade(
            version_code,
            &fields,
            selected_language.as_deref(),
        ))
    }
}
