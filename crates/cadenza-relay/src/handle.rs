//! Weak client handle with an explicit liveness state.

use std::sync::{Arc, RwLock, Weak};
use thiserror::Error;

use crate::client::{ArcClient, SessionClient};

/// Error returned by [`ClientHandle::resolve`] once the handle is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("client handle released")]
pub struct HandleReleased;

/// Non-owning reference to the local client.
///
/// The handle is `Bound` while the referent is alive and not explicitly
/// cleared, and `Released` afterwards. `Released` is terminal: it is entered
/// either when the last client `Arc` is dropped or when [`destroy`] runs,
/// and no later call can rebind it.
///
/// Resolution takes the read side of the lock only, so any number of
/// transport threads may resolve concurrently; [`destroy`] is the single
/// writer.
///
/// [`destroy`]: ClientHandle::destroy
#[derive(Debug)]
pub struct ClientHandle {
    referent: RwLock<Option<Weak<dyn SessionClient>>>,
}

impl ClientHandle {
    /// Create a handle bound to `client` without taking ownership of it.
    #[must_use]
    pub fn bind(client: &ArcClient) -> Self {
        Self {
            referent: RwLock::new(Some(Arc::downgrade(client))),
        }
    }

    /// Resolve the referent.
    ///
    /// # Errors
    ///
    /// Returns [`HandleReleased`] if the referent was dropped or the handle
    /// was destroyed.
    pub fn resolve(&self) -> Result<ArcClient, HandleReleased> {
        self.resolve_or_nil().ok_or(HandleReleased)
    }

    /// Resolve the referent, or `None` once released.
    ///
    /// Used where a gone client is an expected, silent outcome.
    #[must_use]
    pub fn resolve_or_nil(&self) -> Option<ArcClient> {
        let guard = match self.referent.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.as_ref().and_then(Weak::upgrade)
    }

    /// Explicitly release the handle. Idempotent.
    ///
    /// Does not affect work already submitted to an executor; it only stops
    /// future resolutions from succeeding.
    pub fn destroy(&self) {
        let mut guard = match self.referent.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.take();
    }

    /// Whether the handle can no longer resolve.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.resolve_or_nil().is_none()
    }
}
