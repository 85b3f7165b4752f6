//! In-memory cache of resolved configuration blobs.
//!
//! Entries live for the process lifetime. Nothing here invalidates or expires them; a restart is
//! the only way to refresh a cached kind.

use std::sync::RwLock;

use serde_json::Value;

#[derive(Debug, Default)]
pub(crate) struct ConfigCache {
    library_filter: RwLock<Vec<Value>>,
    course_filter: RwLock<Vec<Value>>,
    root_organizations: RwLock<Vec<Value>>,
    course_framework_id: RwLock<Option<String>>,
}

impl ConfigCache {
    pub(crate) fn library_filter(&self) -> Vec<Value> {
        self.library_filter
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    pub(crate) fn set_library_filter(&self, fields: Vec<Value>) {
        *self.library_filter.write().expect("RwLock is not poisoned") = fields;
    }

    pub(crate) fn course_filter(&self) -> Vec<Value> {
        self.course_filter
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    pub(crate) fn set_course_filter(&self, fields: Vec<Value>) {
        *self.course_filter.write().expect("RwLock is not poisoned") = fields;
    }

    pub(crate) fn root_organizations(&self) -> Vec<Value> {
        self.root_organizations
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    pub(crate) fn set_root_organizations(&self, organizations: Vec<Value>) {
        *self
            .root_organizations
            .write()
            .expect("RwLock is not poisoned") = organizations;
    }

    pub(crate) fn course_framework_id(&self) -> Option<String> {
        self.course_framework_id
            .read()
            .expect("RwLock is not poisoned")
            .clone()
    }

    pub(crate) fn set_course_framework_id(&self, id: String) {
        *self
            .course_framework_id
            .write()
            .expect("RwLock is not poisoned") = Some(id);
    }
}
