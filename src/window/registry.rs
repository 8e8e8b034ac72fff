use super::selector;
use super::{Window, WindowConfig, WindowId};

/// Owns every tracked window and the counters that keep ids and stacking
/// ranks unique.
///
/// At most one window is visible at a time. `open` lands new windows in the
/// tab strip only (minimized); callers that want the window on screen follow
/// up with `restore`. Operations on unknown ids are silent no-ops because ids
/// frequently come from stale lookups.
#[derive(Debug)]
pub struct WindowRegistry<S> {
    // creation order
    windows: Vec<Window<S>>,
    active: Option<WindowId>,
    next_id: u64,
    next_z: u64,
    next_creation: u64,
}

impl<S> Default for WindowRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> WindowRegistry<S> {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            next_id: 1,
            next_z: 1,
            next_creation: 0,
        }
    }

    fn position(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|window| window.id == id)
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut Window<S>> {
        self.windows.iter_mut().find(|window| window.id == id)
    }

    fn bump_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z = z.saturating_add(1);
        z
    }

    fn minimize_all(&mut self) {
        for window in self.windows.iter_mut().filter(|w| !w.minimized) {
            window.minimized = true;
        }
    }

    /// Shared path for `restore` and `bring_to_front`: hide whatever is on
    /// screen first, then show the target on top.
    fn show(&mut self, id: WindowId) {
        if self.position(id).is_none() {
            return;
        }
        self.minimize_all();
        let z = self.bump_z();
        if let Some(window) = self.window_mut(id) {
            window.minimized = false;
            window.z_index = z;
        }
        self.active = Some(id);
        self.check_invariants();
    }

    fn check_invariants(&self) {
        debug_assert!(
            selector::visible_count(&self.windows) <= 1,
            "more than one visible window"
        );
        debug_assert_eq!(
            self.active,
            selector::visible_window(&self.windows).map(Window::id),
            "active window out of sync with visibility"
        );
    }

    pub fn open(&mut self, config: WindowConfig<S>) -> WindowId {
        self.minimize_all();
        let id = WindowId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let order = self.next_creation;
        self.next_creation = order.saturating_add(1);
        let z = self.bump_z();
        tracing::debug!(window_id = %id, kind = %config.kind, z, "opened window");
        self.windows.push(Window::from_config(id, config, z, order));
        self.active = None;
        self.check_invariants();
        id
    }

    pub fn close(&mut self, id: WindowId) {
        let Some(pos) = self.position(id) else {
            return;
        };
        tracing::debug!(window_id = %id, "closing window");
        self.windows.remove(pos);
        if self.active == Some(id) {
            self.active = None;
            if let Some(next) = selector::successor_after_close(&self.windows) {
                tracing::debug!(window_id = %next, "activating successor");
                self.show(next);
            }
        }
        self.check_invariants();
    }

    pub fn close_all(&mut self) {
        tracing::debug!(count = self.windows.len(), "closing all windows");
        self.windows.clear();
        self.active = None;
    }

    pub fn minimize(&mut self, id: WindowId) {
        let Some(window) = self.window_mut(id) else {
            return;
        };
        window.minimized = true;
        tracing::debug!(window_id = %id, "minimized window");
        if self.active == Some(id) {
            self.active = selector::visible_window(&self.windows).map(Window::id);
        }
        self.check_invariants();
    }

    pub fn restore(&mut self, id: WindowId) {
        tracing::debug!(window_id = %id, "restore");
        self.show(id);
    }

    /// Same effect as [`restore`](Self::restore); used where the window is
    /// already known to be open and only needs focus.
    pub fn bring_to_front(&mut self, id: WindowId) {
        tracing::debug!(window_id = %id, "bring to front");
        self.show(id);
    }

    /// Rename a window in place. Unknown ids are ignored.
    pub fn set_title(&mut self, id: WindowId, title: impl Into<String>, tab_title: Option<String>) {
        if let Some(window) = self.window_mut(id) {
            window.title = title.into();
            window.tab_title = tab_title;
        }
    }

    /// First window of `kind` in creation order, visible or not.
    pub fn find_by_type(&self, kind: &str) -> Option<&Window<S>> {
        self.windows.iter().find(|window| window.kind == kind)
    }

    pub fn is_visible(&self, kind: &str) -> bool {
        self.windows
            .iter()
            .any(|window| window.kind == kind && !window.minimized)
    }

    pub fn list_minimized(&self) -> impl Iterator<Item = &Window<S>> + '_ {
        self.windows.iter().filter(|window| window.minimized)
    }

    pub fn active_window(&self) -> Option<&Window<S>> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn active_id(&self) -> Option<WindowId> {
        self.active
    }

    pub fn top_window(&self) -> Option<&Window<S>> {
        selector::topmost(&self.windows)
    }

    pub fn get(&self, id: WindowId) -> Option<&Window<S>> {
        self.windows.iter().find(|window| window.id == id)
    }

    /// Mutable lookup. Visibility and ordering stay private to the registry;
    /// only the payload is reachable through the returned window.
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window<S>> {
        self.window_mut(id)
    }

    pub fn screen_mut(&mut self, id: WindowId) -> Option<&mut S> {
        self.window_mut(id).map(|window| &mut window.screen)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.position(id).is_some()
    }

    /// All windows in creation order.
    pub fn windows(&self) -> &[Window<S>] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
