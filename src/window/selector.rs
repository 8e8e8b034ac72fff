//! Derivations over the registry's window collection.
//!
//! Nothing here is stored. "Who is visible" and "who takes over after a
//! close" are recomputed from the collection on demand. Successor selection
//! follows creation order (the collection order), never stacking order.

use super::{Window, WindowId};

/// The window currently on screen, if any.
pub fn visible_window<S>(windows: &[Window<S>]) -> Option<&Window<S>> {
    windows.iter().find(|window| !window.minimized)
}

pub fn visible_count<S>(windows: &[Window<S>]) -> usize {
    windows.iter().filter(|window| !window.minimized).count()
}

/// The window that becomes active once the active one has been removed:
/// the most recently created of those remaining.
pub fn successor_after_close<S>(windows: &[Window<S>]) -> Option<WindowId> {
    windows
        .iter()
        .max_by_key(|window| window.creation_order)
        .map(|window| window.id)
}

/// Topmost window by stacking rank, minimized or not.
pub fn topmost<S>(windows: &[Window<S>]) -> Option<&Window<S>> {
    windows.iter().max_by_key(|window| window.z_index)
}
