//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area.
//!
//! The tab strip, window chrome and screens all compute rectangles from the
//! terminal size, which can shrink to zero between frames. Routing draws
//! through `UiFrame` keeps every write inside the buffer so none of those
//! callers need their own bounds checks.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer, for drawing
    /// into an offscreen buffer (tests use this).
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Paint every cell of `area` with `style`, clipped to the frame.
    pub fn fill(&mut self, area: Rect, style: Style) {
        let Some(clipped) = self.clip_rect(area) else {
            return;
        };
        self.buffer.set_style(clipped, style);
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use ratatui::widgets::Paragraph;

    #[test]
    fn truncate_to_width_short_and_long() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn safe_set_string_clips_to_bounds() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buffer = Buffer::empty(area);
        safe_set_string(&mut buffer, area, 2, 0, "hello", Style::default());
        assert_eq!(buffer.cell((2, 0)).unwrap().symbol(), "h");
        assert_eq!(buffer.cell((3, 0)).unwrap().symbol(), "e");
        // out of bounds start is ignored
        safe_set_string(&mut buffer, area, 9, 0, "x", Style::default());
        assert_eq!(buffer.cell((0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn rect_contains_edge_cases() {
        assert!(!rect_contains(Rect::new(0, 0, 0, 5), 0, 0));
        let r = Rect::new(2, 2, 3, 1);
        assert!(rect_contains(r, 2, 2));
        assert!(rect_contains(r, 4, 2));
        assert!(!rect_contains(r, 5, 2));
        assert!(!rect_contains(r, 2, 3));
    }

    #[test]
    fn render_widget_outside_frame_is_dropped() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        frame.render_widget(Paragraph::new("zzz"), Rect::new(10, 10, 3, 1));
        frame.fill(Rect::new(0, 0, 10, 1), Style::default().bg(Color::Blue));
        assert_eq!(buffer.cell((0, 0)).unwrap().symbol(), " ");
        assert_eq!(buffer.cell((2, 0)).unwrap().bg, Color::Blue);
    }
}
