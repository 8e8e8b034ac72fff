//! Tab strip: a creation-ordered listing of every tracked window.
//!
//! The projection is recomputed from the registry on demand and never
//! reorders on minimize/restore, so switching screens only flips which tab is
//! marked active.

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::ui::{UiFrame, rect_contains, safe_set_string, truncate_to_width};
use crate::window::{WindowId, WindowRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: WindowId,
    pub title: String,
    pub icon: Option<String>,
    pub active: bool,
}

pub fn tabs<S>(registry: &WindowRegistry<S>) -> Vec<Tab> {
    registry
        .windows()
        .iter()
        .map(|window| Tab {
            id: window.id(),
            title: window.display_title().to_string(),
            icon: window.icon().map(str::to_string),
            active: !window.is_minimized(),
        })
        .collect()
}

/// The tab after (or before) `from`, wrapping around. With no starting tab,
/// forward starts at the first tab and backward at the last.
pub fn neighbor<S>(
    registry: &WindowRegistry<S>,
    from: Option<WindowId>,
    forward: bool,
) -> Option<WindowId> {
    let windows = registry.windows();
    if windows.is_empty() {
        return None;
    }
    let len = windows.len() as isize;
    let next = match from.and_then(|id| windows.iter().position(|w| w.id() == id)) {
        Some(idx) => {
            let step = if forward { 1isize } else { -1isize };
            (idx as isize + step).rem_euclid(len) as usize
        }
        None if forward => 0,
        None => windows.len() - 1,
    };
    Some(windows[next].id())
}

#[derive(Debug, Clone, Copy)]
struct TabHit {
    id: WindowId,
    rect: Rect,
}

/// One-row terminal renderer for the tab strip.
#[derive(Debug, Default)]
pub struct TabStrip {
    hits: Vec<TabHit>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.hits.clear();
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, tabs: &[Tab]) {
        let area = area.intersection(frame.area());
        if area.width == 0 || area.height == 0 {
            return;
        }
        frame.fill(
            Rect { height: 1, ..area },
            Style::default().bg(crate::theme::tabs_bg()),
        );
        let buffer = frame.buffer_mut();
        let y = area.y;
        let max_x = area.x.saturating_add(area.width);
        let mut x = area.x;
        for tab in tabs {
            let mut label = match &tab.icon {
                Some(icon) => format!("{icon} {}", tab.title),
                None => tab.title.clone(),
            };
            // leave room for padding
            let max_label = max_x.saturating_sub(x).saturating_sub(2) as usize;
            if label.chars().count() > max_label {
                label = truncate_to_width(&label, max_label);
            }
            let chunk = format!(" {label} ");
            let chunk_width = chunk.chars().count() as u16;
            if max_label == 0 || x.saturating_add(chunk_width) > max_x {
                break;
            }
            let style = if tab.active {
                Style::default()
                    .bg(crate::theme::tab_active_bg())
                    .fg(crate::theme::tab_active_fg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .bg(crate::theme::tabs_bg())
                    .fg(crate::theme::tab_fg())
            };
            safe_set_string(buffer, area, x, y, &chunk, style);
            self.hits.push(TabHit {
                id: tab.id,
                rect: Rect {
                    x,
                    y,
                    width: chunk_width,
                    height: 1,
                },
            });
            x = x.saturating_add(chunk_width);
            if x < max_x {
                let separator = Style::default().bg(crate::theme::tabs_bg());
                safe_set_string(buffer, area, x, y, "│", separator);
                x = x.saturating_add(1);
            }
        }
    }

    pub fn hit_test(&self, event: &Event) -> Option<WindowId> {
        let Event::Mouse(mouse) = event else {
            return None;
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        self.hits
            .iter()
            .find(|hit| rect_contains(hit.rect, mouse.column, mouse.row))
            .map(|hit| hit.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowConfig;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::buffer::Buffer;

    fn registry() -> (WindowRegistry<()>, Vec<WindowId>) {
        let mut reg = WindowRegistry::new();
        let ids = vec![
            reg.open(
                WindowConfig::new("member", "Member Maintenance", ()).with_tab_title("Members"),
            ),
            reg.open(WindowConfig::new("branch", "Branches", ())),
            reg.open(WindowConfig::new("till", "Tills", ())),
        ];
        (reg, ids)
    }

    #[test]
    fn tabs_use_display_title_and_flag_the_visible_one() {
        let (mut reg, ids) = registry();
        reg.restore(ids[1]);
        let tabs = tabs(&reg);
        let titles: Vec<&str> = tabs.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Members", "Branches", "Tills"]);
        let active: Vec<bool> = tabs.iter().map(|t| t.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn neighbor_wraps_both_ways() {
        let (reg, ids) = registry();
        assert_eq!(neighbor(&reg, Some(ids[2]), true), Some(ids[0]));
        assert_eq!(neighbor(&reg, Some(ids[0]), false), Some(ids[2]));
        assert_eq!(neighbor(&reg, Some(ids[0]), true), Some(ids[1]));
        assert_eq!(neighbor(&reg, None, true), Some(ids[0]));
        assert_eq!(neighbor(&reg, None, false), Some(ids[2]));
    }

    #[test]
    fn neighbor_of_empty_registry_is_none() {
        let reg: WindowRegistry<()> = WindowRegistry::new();
        assert_eq!(neighbor(&reg, None, true), None);
    }

    #[test]
    fn render_records_hits_for_clicks() {
        let (reg, ids) = registry();
        let area = Rect::new(0, 0, 60, 1);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        let mut strip = TabStrip::new();
        strip.begin_frame();
        strip.render(&mut frame, area, &tabs(&reg));

        // " Members " spans columns 0..9, then a separator
        let click = |column| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(strip.hit_test(&click(1)), Some(ids[0]));
        assert_eq!(strip.hit_test(&click(11)), Some(ids[1]));
        assert_eq!(strip.hit_test(&click(59)), None);
        assert_eq!(buffer.cell((1, 0)).unwrap().symbol(), "M");
    }

    #[test]
    fn empty_title_still_gets_a_tab_and_later_tabs_follow() {
        let mut reg = WindowRegistry::new();
        let blank = reg.open(WindowConfig::new("draft", "", ()));
        let branches = reg.open(WindowConfig::new("branch", "Branches", ()));
        let area = Rect::new(0, 0, 60, 1);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        let mut strip = TabStrip::new();
        strip.render(&mut frame, area, &tabs(&reg));

        // "  " at 0..2, separator at 2, " Branches " from 3
        let ids: Vec<WindowId> = strip.hits.iter().map(|hit| hit.id).collect();
        assert_eq!(ids, vec![blank, branches]);
        assert_eq!(strip.hits[0].rect.width, 2);
        assert_eq!(strip.hits[1].rect.x, 3);
        assert_eq!(buffer.cell((4, 0)).unwrap().symbol(), "B");
    }

    #[test]
    fn render_stops_when_out_of_room() {
        let (reg, ids) = registry();
        let area = Rect::new(0, 0, 12, 1);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        let mut strip = TabStrip::new();
        strip.render(&mut frame, area, &tabs(&reg));
        assert_eq!(strip.hits.len(), 1);
        assert_eq!(strip.hits[0].id, ids[0]);
    }
}
