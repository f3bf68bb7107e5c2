//! UI-facing facade for the application core.
//!
//! The narrow async surface platform shells consume. Wrapping the core in
//! a shared lock keeps shells from reaching into internals: all mutation
//! stays on the dispatch path, reads go through short-lived guards.

use std::sync::Arc;

use async_lock::RwLock;

use crate::core::{AppCore, Intent, IntentError, Screen};
use crate::views::ViewState;

/// Shared handle to the application core.
#[derive(Clone)]
pub struct UiAppCore {
    inner: Arc<RwLock<AppCore>>,
}

impl UiAppCore {
    /// Wrap a core for shared use.
    #[must_use]
    pub fn new(core: AppCore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(core)),
        }
    }

    /// Apply one user action.
    pub async fn dispatch(&self, intent: Intent) -> Result<(), IntentError> {
        self.inner.write().await.dispatch(intent)
    }

    /// The screen currently shown.
    pub async fn current_screen(&self) -> Screen {
        self.inner.read().await.current_screen()
    }

    /// Run a closure against the current view state.
    pub async fn with_views<T>(&self, f: impl FnOnce(&ViewState) -> T) -> T {
        f(self.inner.read().await.views())
    }
}

impl Default for UiAppCore {
    fn default() -> Self {
        Self::new(AppCore::new())
    }
}

impl From<AppCore> for UiAppCore {
    fn from(core: AppCore) -> Self {
        Self::new(core)
    }
}
