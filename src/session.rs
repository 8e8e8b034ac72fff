//! Shared, explicitly owned handle to a [`WindowRegistry`].
//!
//! The registry itself is plain `&mut self` state. When more than one owner
//! needs it (the UI thread plus a background task posting "open screen"
//! requests, say) they share a `SessionHandle`, and every access runs under a
//! single mutex so two calls always observe each other in call order.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::window::{WindowConfig, WindowId, WindowRegistry};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("window registry lock poisoned by a panicking holder")]
    Poisoned,
}

#[derive(Debug)]
pub struct SessionHandle<S> {
    inner: Arc<Mutex<WindowRegistry<S>>>,
}

impl<S> Clone for SessionHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> Default for SessionHandle<S> {
    fn default() -> Self {
        Self::new(WindowRegistry::new())
    }
}

impl<S> SessionHandle<S> {
    pub fn new(registry: WindowRegistry<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Run `f` with exclusive access to the registry.
    pub fn with<T>(&self, f: impl FnOnce(&mut WindowRegistry<S>) -> T) -> Result<T, SessionError> {
        let mut registry = self.inner.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(f(&mut registry))
    }

    pub fn open(&self, config: WindowConfig<S>) -> Result<WindowId, SessionError> {
        self.with(|registry| registry.open(config))
    }

    pub fn close(&self, id: WindowId) -> Result<(), SessionError> {
        self.with(|registry| registry.close(id))
    }

    pub fn minimize(&self, id: WindowId) -> Result<(), SessionError> {
        self.with(|registry| registry.minimize(id))
    }

    pub fn restore(&self, id: WindowId) -> Result<(), SessionError> {
        self.with(|registry| registry.restore(id))
    }

    pub fn bring_to_front(&self, id: WindowId) -> Result<(), SessionError> {
        self.with(|registry| registry.bring_to_front(id))
    }

    pub fn active_id(&self) -> Result<Option<WindowId>, SessionError> {
        self.with(|registry| registry.active_id())
    }
}
