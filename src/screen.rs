use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// What a window shows. The registry stores it untouched; the runner draws
/// it inside the active window's chrome and forwards unhandled input to it.
pub trait Screen {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, focused: bool);

    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}

impl<T: Screen + ?Sized> Screen for Box<T> {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, focused: bool) {
        (**self).render(frame, area, focused);
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        (**self).handle_event(event)
    }
}

/// One-row line with left- and right-aligned text.
#[derive(Debug, Default)]
pub struct StatusLine {
    left: String,
    right: String,
    style: Style,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left<T: Into<String>>(&mut self, value: T) {
        self.left = value.into();
    }

    pub fn set_right<T: Into<String>>(&mut self, value: T) {
        self.right = value.into();
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        let area = area.intersection(frame.area());
        if area.height == 0 || area.width == 0 {
            return;
        }
        frame.fill(Rect { height: 1, ..area }, self.style);
        let width = area.width as usize;
        let buffer = frame.buffer_mut();

        let left = truncate_to_width(&self.left, width);
        safe_set_string(buffer, area, area.x, area.y, &left, self.style);

        let left_width = left.chars().count();
        if !self.right.is_empty() && left_width < width {
            let right = truncate_to_width(&self.right, width - left_width);
            let start_x = area.x.saturating_add((width - right.chars().count()) as u16);
            safe_set_string(buffer, area, start_x, area.y, &right, self.style);
        }
    }
}
