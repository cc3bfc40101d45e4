use contracts::system::usage::UsageInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Store for the externally tracked generation quota
///
/// The counter is owned by the backend; this store only caches the last
/// snapshot. `refresh()` is the signal pages emit after every submission
/// attempt so dependent UI stays current.
#[derive(Clone, Copy)]
pub struct UsageContext {
    pub usage: RwSignal<Option<UsageInfo>>,
}

impl UsageContext {
    pub fn new() -> Self {
        Self {
            usage: RwSignal::new(None),
        }
    }

    /// Re-fetch the quota snapshot from the backend
    pub fn refresh(&self) {
        let usage = self.usage;
        spawn_local(async move {
            match api::get_usage().await {
                Ok(info) => usage.set(Some(info)),
                Err(e) => log::warn!("usage refresh failed: {}", e),
            }
        });
    }
}

/// Hook to access the usage store
pub fn use_usage() -> UsageContext {
    use_context::<UsageContext>().expect("UsageContext not provided in context")
}
