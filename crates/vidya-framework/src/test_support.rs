//! Test doubles for the external platform services.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use vidya_core::preferences::{PreferenceError, PreferenceStore};

use crate::{
    category::CategoryRequest,
    events::{AppEvent, EventSink},
    profile::Profile,
    services::{
        FormRequest, FormService, FrameworkDetailsRequest, FrameworkService, ProfileService,
        ServiceError, SystemSettingRequest,
    },
    FormFrameworkClient, FormFrameworkServices,
};

#[derive(Default)]
pub(crate) struct StubFormService {
    /// Responses keyed by the request's `sub_type`.
    responses: Mutex<HashMap<String, Result<String, String>>>,
    requests: Mutex<Vec<FormRequest>>,
    calls: AtomicUsize,
}

impl StubFormService {
    pub(crate) fn stub_response(&self, sub_type: &str, response: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(sub_type.into(), Ok(response.into()));
    }

    pub(crate) fn stub_error(&self, sub_type: &str, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(sub_type.into(), Err(message.into()));
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requests_seen(&self) -> Vec<FormRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormService for StubFormService {
    async fn get_form(&self, request: FormRequest) -> Result<String, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let sub_type = request.sub_type.clone();
        self.requests.lock().unwrap().push(request);

        match self.responses.lock().unwrap().get(&sub_type) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(ServiceError(message.clone())),
            None => Err(ServiceError(format!("no stubbed form for {sub_type}"))),
        }
    }
}

#[derive(Default)]
pub(crate) struct StubFrameworkService {
    /// Term responses keyed by the requested category.
    category_responses: Mutex<HashMap<String, Result<String, String>>>,
    /// Per-category completion delays, for exercising interleaved settlement orders.
    category_delays: Mutex<HashMap<String, Duration>>,
    category_requests: Mutex<Vec<CategoryRequest>>,
    category_calls: AtomicUsize,
    framework_details_requests: Mutex<Vec<FrameworkDetailsRequest>>,
    all_categories: Mutex<Option<serde_json::Value>>,
    root_organizations: Mutex<Option<String>>,
    root_organization_calls: AtomicUsize,
    course_framework_id: Mutex<Option<String>>,
    course_framework_calls: AtomicUsize,
    system_settings: Mutex<HashMap<String, String>>,
}

impl StubFrameworkService {
    pub(crate) fn stub_category(&self, category: &str, response: &str) {
        self.category_responses
            .lock()
            .unwrap()
            .insert(category.into(), Ok(response.into()));
    }

    pub(crate) fn stub_category_error(&self, category: &str, message: &str) {
        self.category_responses
            .lock()
            .unwrap()
            .insert(category.into(), Err(message.into()));
    }

    pub(crate) fn stub_category_delay(&self, category: &str, delay: Duration) {
        self.category_delays
            .lock()
            .unwrap()
            .insert(category.into(), delay);
    }

    pub(crate) fn category_call_count(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn category_requests_seen(&self) -> Vec<CategoryRequest> {
        self.category_requests.lock().unwrap().clone()
    }

    pub(crate) fn stub_all_categories(&self, response: serde_json::Value) {
        *self.all_categories.lock().unwrap() = Some(response);
    }

    pub(crate) fn framework_details_seen(&self) -> Vec<FrameworkDetailsRequest> {
        self.framework_details_requests.lock().unwrap().clone()
    }

    pub(crate) fn stub_root_organizations(&self, response: &str) {
        *self.root_organizations.lock().unwrap() = Some(response.into());
    }

    pub(crate) fn root_organization_call_count(&self) -> usize {
        self.root_organization_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn stub_course_framework_id(&self, id: &str) {
        *self.course_framework_id.lock().unwrap() = Some(id.into());
    }

    pub(crate) fn course_framework_call_count(&self) -> usize {
        self.course_framework_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn stub_system_setting(&self, id: &str, value: &str) {
        self.system_settings
            .lock()
            .unwrap()
            .insert(id.into(), value.into());
    }
}

#[async_trait]
impl FrameworkService for StubFrameworkService {
    async fn get_all_categories(
        &self,
        request: FrameworkDetailsRequest,
    ) -> Result<serde_json::Value, ServiceError> {
        self.framework_details_requests.lock().unwrap().push(request);
        self.all_categories
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ServiceError("no stubbed framework details".into()))
    }

    async fn get_category_data(&self, request: CategoryRequest) -> Result<String, ServiceError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        let category = request.current_category.clone();
        self.category_requests.lock().unwrap().push(request);

        let delay = self.category_delays.lock().unwrap().get(&category).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.category_responses.lock().unwrap().get(&category) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(ServiceError(message.clone())),
            None => Err(ServiceError(format!("no stubbed category {category}"))),
        }
    }

    async fn get_root_organizations(&self) -> Result<String, ServiceError> {
        self.root_organization_calls.fetch_add(1, Ordering::SeqCst);
        self.root_organizations
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ServiceError("no stubbed root organizations".into()))
    }

    async fn get_course_framework_id(&self) -> Result<String, ServiceError> {
        self.course_framework_calls.fetch_add(1, Ordering::SeqCst);
        self.course_framework_id
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ServiceError("no stubbed course framework id".into()))
    }

    async fn get_system_setting_value(
        &self,
        request: SystemSettingRequest,
    ) -> Result<String, ServiceError> {
        self.system_settings
            .lock()
            .unwrap()
            .get(&request.id)
            .cloned()
            .ok_or_else(|| ServiceError(format!("no stubbed system setting {}", request.id)))
    }
}

#[derive(Default)]
pub(crate) struct RecordingProfileService {
    commits: Mutex<Vec<Profile>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingProfileService {
    pub(crate) fn commits(&self) -> Vec<Profile> {
        self.commits.lock().unwrap().clone()
    }

    pub(crate) fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }
}

#[async_trait]
impl ProfileService for RecordingProfileService {
    async fn update_profile(&self, profile: Profile) -> Result<String, ServiceError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(ServiceError(message));
        }

        self.commits.lock().unwrap().push(profile.clone());
        // Echo the update back, like the real store returns the updated record.
        Ok(serde_json::to_string(&profile).unwrap())
    }
}

#[derive(Default)]
pub(crate) struct RecordingEventSink {
    events: Mutex<Vec<AppEvent>>,
}

impl RecordingEventSink {
    pub(crate) fn events(&self) -> Vec<AppEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingEventSink {
    fn publish(&self, event: AppEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub(crate) struct StaticPreferences(HashMap<String, String>);

#[async_trait]
impl PreferenceStore for StaticPreferences {
    async fn get_string(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.0.get(key).cloned())
    }
}

pub(crate) struct TestHarness {
    pub(crate) form_service: Arc<StubFormService>,
    pub(crate) framework_service: Arc<StubFrameworkService>,
    pub(crate) profile_service: Arc<RecordingProfileService>,
    pub(crate) events: Arc<RecordingEventSink>,
    pub(crate) client: FormFrameworkClient,
}

pub(crate) fn harness() -> TestHarness {
    harness_with_preferences(HashMap::new())
}

pub(crate) fn harness_with_preferences(preferences: HashMap<String, String>) -> TestHarness {
    let form_service = Arc::new(StubFormService::default());
    let framework_service = Arc::new(StubFrameworkService::default());
    let profile_service = Arc::new(RecordingProfileService::default());
    let events = Arc::new(RecordingEventSink::default());

    let client = FormFrameworkClient::new(FormFrameworkServices {
        form_service: form_service.clone(),
        framework_service: framework_service.clone(),
        profile_service: profile_service.clone(),
        preferences: Arc::new(StaticPreferences(preferences)),
        events: events.clone(),
    });

    TestHarness {
        form_service,
        framework_service,
        profile_service,
        events,
        client,
    }
}
