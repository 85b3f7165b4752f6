//! Normalization of a logged-in user's free-text profile values into canonical framework codes,
//! and the single terminal commit that persists them.

use std::collections::HashMap;

use chrono::Local;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use vidya_core::preferences;

use crate::{
    category::{CategoryRequest, CategoryTerm, DEFAULT_FRAMEWORK_CATEGORIES},
    events::AppEvent,
    services::ServiceError,
    FormFrameworkClient,
};

/// An error committing the normalized profile. Absorbed at the public boundary; profile sync
/// must not break the caller's flow.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ProfileCommitError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// A local profile record as the Profile store holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[allow(missing_docs)]
    pub uid: String,
    #[allow(missing_docs)]
    pub handle: String,
    #[allow(missing_docs)]
    pub profile_type: String,
    #[allow(missing_docs)]
    pub source: String,
    #[allow(missing_docs)]
    pub created_at: Option<String>,
    #[allow(missing_docs)]
    pub board: Vec<String>,
    #[allow(missing_docs)]
    pub grade: Vec<String>,
    #[allow(missing_docs)]
    pub medium: Vec<String>,
    #[allow(missing_docs)]
    pub subject: Vec<String>,
    #[allow(missing_docs)]
    pub syllabus: Vec<String>,
    /// Grade code back to the raw display value it was normalized from.
    pub grade_value_map: HashMap<String, String>,
}

/// The server-side profile fields relevant to normalization: free-text values keyed by framework
/// category. The `id` key, when present, names the framework the values belong to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerProfile {
    #[allow(missing_docs)]
    pub framework: HashMap<String, Vec<String>>,
}

/// The outcome of one profile sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSyncResult {
    /// True when the committed record has board, grade and medium all populated.
    pub synced: bool,
    /// The updated record, present when the commit succeeded but left the profile incomplete.
    pub profile: Option<Profile>,
}

impl ProfileSyncResult {
    fn not_synced() -> Self {
        Self {
            synced: false,
            profile: None,
        }
    }
}

/// The in-flight accumulator of one normalization call. Owned exclusively by that call and
/// discarded after the terminal commit.
#[derive(Debug, Default)]
struct NormalizedProfile {
    board: Vec<String>,
    grade: Vec<String>,
    medium: Vec<String>,
    subject: Vec<String>,
    // Superseded by the stored framework id at commit time.
    #[allow(dead_code)]
    syllabus: Vec<String>,
    grade_value_map: HashMap<String, String>,
}

impl NormalizedProfile {
    /// Fold one settled category into the accumulator. The first term whose name equals a raw
    /// value wins; a raw value without a matching term is dropped.
    fn absorb(&mut self, category_key: &str, raw_values: &[String], terms: &[CategoryTerm]) {
        for raw in raw_values {
            let Some(term) = terms.iter().find(|term| term.name == *raw) else {
                continue;
            };

            match category_key {
                "gradeLevel" => {
                    self.grade.push(term.code.clone());
                    self.grade_value_map.insert(term.code.clone(), raw.clone());
                }
                "board" => self.board.push(term.code.clone()),
                "medium" => self.medium.push(term.code.clone()),
                "subject" => self.subject.push(term.code.clone()),
                "syllabus" => self.syllabus.push(term.code.clone()),
                // Other keys count toward completion but have no accumulator field.
                _ => {}
            }
        }
    }
}

impl FormFrameworkClient {
    /// Normalize the server profile's free-text framework values into canonical codes and commit
    /// them onto the local profile record.
    ///
    /// One category resolution is dispatched per populated framework key, all concurrently; the
    /// terminal commit runs exactly once, after every dispatched resolution has settled, in
    /// whatever order they complete. Resolution and commit failures are absorbed — the returned
    /// result only reports whether the synced profile ended up complete.
    pub async fn update_logged_in_user(
        &self,
        server_profile: &ServerProfile,
        local_profile: &Profile,
    ) -> ProfileSyncResult {
        let framework_id = server_profile
            .framework
            .get("id")
            .and_then(|ids| ids.first())
            .cloned();

        let populated: Vec<(&String, &Vec<String>)> = server_profile
            .framework
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .collect();

        if populated.is_empty() {
            return ProfileSyncResult::not_synced();
        }

        let selected_language = self.selected_language().await;

        // The total is fixed here, at dispatch time. join_all settles every lookup, success or
        // failure, before the fold below runs, so the terminal commit cannot fire early, fire
        // twice, or drop a category.
        let lookups: Vec<_> = populated
            .into_iter()
            .map(|(category_key, raw_values)| {
                let request = CategoryRequest {
                    selected_language: selected_language.clone(),
                    current_category: category_key.clone(),
                    framework_id: framework_id.clone(),
                    categories: DEFAULT_FRAMEWORK_CATEGORIES
                        .iter()
                        .map(|category| (*category).to_string())
                        .collect(),
                };
                async move {
                    (
                        category_key,
                        raw_values,
                        self.get_category_terms(request).await,
                    )
                }
            })
            .collect();

        let mut normalized = NormalizedProfile::default();
        for (category_key, raw_values, resolution) in join_all(lookups).await {
            match resolution {
                Ok(terms) => normalized.absorb(category_key, raw_values, &terms),
                Err(e) => warn!(category = %category_key, "Failed to resolve category: {e}"),
            }
        }

        self.commit_profile(normalized, local_profile).await
    }

    /// The terminal commit: build the update payload, submit it, and publish the refresh event.
    /// The fallible submission lives in [`Self::submit_profile`]; its failure is absorbed here,
    /// at the boundary the caller sees.
    async fn commit_profile(
        &self,
        mut normalized: NormalizedProfile,
        local_profile: &Profile,
    ) -> ProfileSyncResult {
        // At most one board is retained; the first accumulated entry wins.
        normalized.board.truncate(1);

        let syllabus = match self
            .state
            .preferences
            .get_string(preferences::CURRENT_FRAMEWORK_ID)
            .await
        {
            Ok(Some(id)) => vec![id],
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read current framework id: {e}");
                Vec::new()
            }
        };

        let update = Profile {
            uid: local_profile.uid.clone(),
            handle: local_profile.uid.clone(),
            profile_type: local_profile.profile_type.clone(),
            source: local_profile.source.clone(),
            created_at: Some(
                local_profile
                    .created_at
                    .clone()
                    .unwrap_or_else(format_profile_timestamp),
            ),
            board: normalized.board,
            grade: normalized.grade,
            medium: normalized.medium,
            subject: normalized.subject,
            syllabus,
            grade_value_map: normalized.grade_value_map,
        };

        let updated = match self.submit_profile(update).await {
            Ok(updated) => updated,
            Err(e) => {
                warn!("Failed to commit profile update: {e}");
                return ProfileSyncResult::not_synced();
            }
        };

        self.state.events.publish(AppEvent::LoggedInProfileRefreshed);

        if !updated.board.is_empty() && !updated.grade.is_empty() && !updated.medium.is_empty() {
            ProfileSyncResult {
                synced: true,
                profile: None,
            }
        } else {
            ProfileSyncResult {
                synced: false,
                profile: Some(updated),
            }
        }
    }

    /// Submit the update and parse the record the store echoes back.
    async fn submit_profile(&self, update: Profile) -> Result<Profile, ProfileCommitError> {
        let raw = self.state.profile_service.update_profile(update).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// The default `created_at` stamp, e.g. `Aug 08, 2026 10:12:45 AM`.
fn format_profile_timestamp() -> String {
    Local::now().format("%b %d, %Y %I:%M:%S %p").to_string()
}
