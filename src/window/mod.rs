pub mod chrome;
pub mod selector;

mod registry;

use std::collections::BTreeMap;
use std::fmt;

pub use chrome::{ChromeAction, WindowChrome};
pub use registry::WindowRegistry;

/// Opaque per-window configuration handed back verbatim to the caller.
pub type Props = BTreeMap<String, String>;

/// Process-unique window identifier. Never reused once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "win-{}", self.0)
    }
}

/// Everything a caller supplies when opening a window.
#[derive(Debug, Clone)]
pub struct WindowConfig<S> {
    pub kind: String,
    pub title: String,
    pub tab_title: Option<String>,
    pub icon: Option<String>,
    pub screen: S,
    pub props: Props,
}

impl<S> WindowConfig<S> {
    pub fn new(kind: impl Into<String>, title: impl Into<String>, screen: S) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
            tab_title: None,
            icon: None,
            screen,
            props: Props::new(),
        }
    }

    pub fn with_tab_title(mut self, tab_title: impl Into<String>) -> Self {
        self.tab_title = Some(tab_title.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

/// A tracked screen instance.
#[derive(Debug, Clone)]
pub struct Window<S> {
    id: WindowId,
    kind: String,
    title: String,
    tab_title: Option<String>,
    icon: Option<String>,
    screen: S,
    props: Props,
    minimized: bool,
    z_index: u64,
    creation_order: u64,
}

impl<S> Window<S> {
    fn from_config(id: WindowId, config: WindowConfig<S>, z_index: u64, creation_order: u64) -> Self {
        Self {
            id,
            kind: config.kind,
            title: config.title,
            tab_title: config.tab_title,
            icon: config.icon,
            screen: config.screen,
            props: config.props,
            minimized: true,
            z_index,
            creation_order,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tab_title(&self) -> Option<&str> {
        self.tab_title.as_deref()
    }

    /// Label used by the tab strip: the tab title when set, else the title.
    pub fn display_title(&self) -> &str {
        self.tab_title.as_deref().unwrap_or(&self.title)
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn creation_order(&self) -> u64 {
        self.creation_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_title_falls_back_to_title() {
        let cfg = WindowConfig::new("member-maintenance", "Member Maintenance", ());
        let win = Window::from_config(WindowId::new(1), cfg, 1, 0);
        assert_eq!(win.display_title(), "Member Maintenance");

        let cfg = WindowConfig::new("member-maintenance", "Member Maintenance", ())
            .with_tab_title("Members");
        let win = Window::from_config(WindowId::new(2), cfg, 2, 1);
        assert_eq!(win.display_title(), "Members");
        assert_eq!(win.title(), "Member Maintenance");
    }

    #[test]
    fn props_and_icon_round_trip_verbatim() {
        let cfg = WindowConfig::new("till", "Tills", 7u8)
            .with_icon("$")
            .with_prop("branch", "042");
        let win = Window::from_config(WindowId::new(3), cfg, 1, 0);
        assert_eq!(win.icon(), Some("$"));
        assert_eq!(win.props().get("branch").map(String::as_str), Some("042"));
        assert_eq!(*win.screen(), 7u8);
        assert!(win.is_minimized());
    }

    #[test]
    fn window_id_display() {
        assert_eq!(WindowId::new(12).to_string(), "win-12");
    }
}
