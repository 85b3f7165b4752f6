use std::sync::Arc;

use tracing::warn;
use vidya_core::preferences::{self, PreferenceStore};

use crate::{
    cache::ConfigCache,
    events::EventSink,
    services::{FormService, FrameworkService, ProfileService},
};

/// The external collaborators wired into a [`FormFrameworkClient`].
#[derive(Clone)]
pub struct FormFrameworkServices {
    #[allow(missing_docs)]
    pub form_service: Arc<dyn FormService>,
    #[allow(missing_docs)]
    pub framework_service: Arc<dyn FrameworkService>,
    #[allow(missing_docs)]
    pub profile_service: Arc<dyn ProfileService>,
    #[allow(missing_docs)]
    pub preferences: Arc<dyn PreferenceStore>,
    /// Receives fire-and-forget notifications; use
    /// [`NoopEventSink`](crate::events::NoopEventSink) when nothing listens.
    pub events: Arc<dyn EventSink>,
}

pub(crate) struct FormFrameworkState {
    pub(crate) form_service: Arc<dyn FormService>,
    pub(crate) framework_service: Arc<dyn FrameworkService>,
    pub(crate) profile_service: Arc<dyn ProfileService>,
    pub(crate) preferences: Arc<dyn PreferenceStore>,
    pub(crate) events: Arc<dyn EventSink>,
    pub(crate) cache: ConfigCache,
}

/// Subclient for form/framework resolution and profile normalization.
///
/// Built once per process and cheap to clone; every clone shares the same configuration cache.
#[derive(Clone)]
pub struct FormFrameworkClient {
    pub(crate) state: Arc<FormFrameworkState>,
}

impl FormFrameworkClient {
    /// Constructs a new `FormFrameworkClient` over the given services.
    pub fn new(services: FormFrameworkServices) -> Self {
        Self {
            state: Arc::new(FormFrameworkState {
                form_service: services.form_service,
                framework_service: services.framework_service,
                profile_service: services.profile_service,
                preferences: services.preferences,
                events: services.events,
                cache: ConfigCache::default(),
            }),
        }
    }

    /// The user's selected language code, read from preferences. `None` when never set; read
    /// failures are absorbed, a missing language only widens form matching.
    pub(crate) async fn selected_language(&self) -> Option<String> {
        match self
            .state
            .preferences
            .get_string(preferences::SELECTED_LANGUAGE_CODE)
            .await
        {
            Ok(Some(language)) if !language.is_empty() => Some(language),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read selected language: {e}");
                None
            }
        }
    }
}
