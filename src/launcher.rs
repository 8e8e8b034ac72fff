//! Single-instance-per-type launching.
//!
//! The registry never deduplicates on its own; this is the policy the app
//! layer applies on top of it. Look the kind up first, show the existing
//! window if there is one, otherwise open a fresh window and show it.

use crate::window::{WindowConfig, WindowId, WindowRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    Opened(WindowId),
    Focused(WindowId),
}

impl Launch {
    pub fn id(self) -> WindowId {
        match self {
            Launch::Opened(id) | Launch::Focused(id) => id,
        }
    }
}

/// Show the window for `config.kind`, opening it only when none exists.
/// The config is dropped when an existing window is reused.
pub fn launch<S>(registry: &mut WindowRegistry<S>, config: WindowConfig<S>) -> Launch {
    if let Some(existing) = registry.find_by_type(&config.kind) {
        let id = existing.id();
        if existing.is_minimized() {
            registry.restore(id);
        } else {
            registry.bring_to_front(id);
        }
        tracing::debug!(window_id = %id, kind = %config.kind, "reused window");
        return Launch::Focused(id);
    }
    let id = registry.open(config);
    registry.restore(id);
    Launch::Opened(id)
}
