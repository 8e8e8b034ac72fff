//! Per-window presentational shell: border, title bar and the
//! minimize / close / refresh buttons.
//!
//! The chrome holds no session state. Its buttons call straight through to
//! the [`WindowRegistry`]; the only thing it keeps per window is an optional
//! refresh callback, dropped when the window is closed.

use std::collections::BTreeMap;
use std::fmt;

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::{Window, WindowId, WindowRegistry};
use crate::ui::{UiFrame, rect_contains, safe_set_string, truncate_to_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeAction {
    Minimize,
    Close,
    Refresh,
    BringToFront,
}

impl ChromeAction {
    fn label(self) -> &'static str {
        match self {
            ChromeAction::Refresh => "[r]",
            ChromeAction::Minimize => "[_]",
            ChromeAction::Close => "[x]",
            ChromeAction::BringToFront => "",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ChromeHit {
    id: WindowId,
    action: ChromeAction,
    rect: Rect,
}

type RefreshCallback = Box<dyn FnMut()>;

#[derive(Default)]
pub struct WindowChrome {
    refresh: BTreeMap<WindowId, RefreshCallback>,
    // rebuilt every frame, buttons first so they win over the header
    hits: Vec<ChromeHit>,
}

impl fmt::Debug for WindowChrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowChrome")
            .field("refresh", &self.refresh.keys().collect::<Vec<_>>())
            .field("hits", &self.hits)
            .finish()
    }
}

impl WindowChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.hits.clear();
    }

    /// Register the refresh handler for `id`, replacing any previous one.
    pub fn register_refresh<F>(&mut self, id: WindowId, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.refresh.insert(id, Box::new(callback));
    }

    pub fn has_refresh(&self, id: WindowId) -> bool {
        self.refresh.contains_key(&id)
    }

    pub fn unmount(&mut self, id: WindowId) {
        if self.refresh.remove(&id).is_some() {
            tracing::debug!(window_id = %id, "dropped refresh callback");
        }
        self.hits.retain(|hit| hit.id != id);
    }

    /// Drop callbacks and hit rects for every id the registry no longer
    /// tracks, whether it was closed or never opened.
    pub fn sync_closed<S>(&mut self, registry: &WindowRegistry<S>) {
        self.refresh.retain(|id, _| {
            let live = registry.contains(*id);
            if !live {
                tracing::debug!(window_id = %id, "dropped refresh callback");
            }
            live
        });
        self.hits.retain(|hit| registry.contains(hit.id));
    }

    /// Run the refresh callback for `id`. Returns whether one was registered.
    pub fn refresh(&mut self, id: WindowId) -> bool {
        match self.refresh.get_mut(&id) {
            Some(callback) => {
                tracing::debug!(window_id = %id, "refresh");
                callback();
                true
            }
            None => false,
        }
    }

    /// Route a chrome action to the registry.
    pub fn apply<S>(
        &mut self,
        registry: &mut WindowRegistry<S>,
        id: WindowId,
        action: ChromeAction,
    ) -> bool {
        match action {
            ChromeAction::Minimize => registry.minimize(id),
            ChromeAction::Close => {
                registry.close(id);
                self.sync_closed(registry);
            }
            ChromeAction::BringToFront => registry.bring_to_front(id),
            ChromeAction::Refresh => return self.refresh(id),
        }
        true
    }

    pub fn hit_test(&self, event: &Event) -> Option<(WindowId, ChromeAction)> {
        let Event::Mouse(mouse) = event else {
            return None;
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        self.hits
            .iter()
            .find(|hit| rect_contains(hit.rect, mouse.column, mouse.row))
            .map(|hit| (hit.id, hit.action))
    }

    /// Draw the frame around `area` and return the content rectangle inside.
    pub fn render<S>(
        &mut self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        window: &Window<S>,
        focused: bool,
    ) -> Rect {
        if area.width < 4 || area.height < 3 {
            return Rect::default();
        }
        let id = window.id();
        let header_style = if focused {
            Style::default()
                .bg(crate::theme::chrome_header_bg())
                .fg(crate::theme::chrome_header_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(crate::theme::chrome_border())
                .fg(crate::theme::chrome_header_fg())
        };
        let border_style = Style::default().fg(crate::theme::chrome_border());
        let button_style = header_style.fg(crate::theme::chrome_button_fg());

        let left = area.x;
        let top = area.y;
        let right = area.x.saturating_add(area.width).saturating_sub(1);
        let bottom = area.y.saturating_add(area.height).saturating_sub(1);
        let header_y = top.saturating_add(1);
        let bounds = area.intersection(frame.area());
        let buffer = frame.buffer_mut();

        // Borders
        for x in left..=right {
            let (top_glyph, bottom_glyph) = if x == left {
                ("┌", "└")
            } else if x == right {
                ("┐", "┘")
            } else {
                ("─", "─")
            };
            safe_set_string(buffer, bounds, x, top, top_glyph, border_style);
            safe_set_string(buffer, bounds, x, bottom, bottom_glyph, border_style);
        }
        for y in header_y..bottom {
            safe_set_string(buffer, bounds, left, y, "│", border_style);
            safe_set_string(buffer, bounds, right, y, "│", border_style);
        }

        // Header background
        let header = Rect {
            x: left.saturating_add(1),
            y: header_y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        buffer.set_style(header.intersection(bounds), header_style);

        // Buttons, right-aligned
        let mut actions = Vec::with_capacity(3);
        if self.has_refresh(id) {
            actions.push(ChromeAction::Refresh);
        }
        actions.push(ChromeAction::Minimize);
        actions.push(ChromeAction::Close);
        let mut x = right;
        for action in actions.iter().rev() {
            let label = action.label();
            let width = label.chars().count() as u16;
            let start = x.saturating_sub(width.saturating_add(1));
            if start <= header.x {
                break;
            }
            safe_set_string(buffer, bounds, start, header_y, label, button_style);
            self.hits.push(ChromeHit {
                id,
                action: *action,
                rect: Rect {
                    x: start,
                    y: header_y,
                    width,
                    height: 1,
                },
            });
            x = start;
        }

        // Title
        let title = match window.icon() {
            Some(icon) => format!(" {icon} {}", window.title()),
            None => format!(" {}", window.title()),
        };
        let room = x.saturating_sub(header.x) as usize;
        let title = truncate_to_width(&title, room);
        safe_set_string(buffer, bounds, header.x, header_y, &title, header_style);

        self.hits.push(ChromeHit {
            id,
            action: ChromeAction::BringToFront,
            rect: header,
        });

        Rect {
            x: left.saturating_add(1),
            y: header_y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(3),
        }
    }
}
