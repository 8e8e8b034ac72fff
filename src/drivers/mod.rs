pub mod console;

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;

pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

/// Replays a fixed list of events, for driving the runner without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    events: VecDeque<Event>,
    mouse_capture: Option<bool>,
}

impl ScriptedDriver {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            mouse_capture: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    pub fn mouse_capture(&self) -> Option<bool> {
        self.mouse_capture
    }
}

impl InputDriver for ScriptedDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse_capture = Some(enabled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn scripted_driver_drains_in_order_then_errors() {
        let mut d = ScriptedDriver::new([
            Event::Key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)),
            Event::Key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE)),
        ]);
        // blanket impl for &mut T
        let mut by_ref = &mut d;
        assert!(by_ref.poll(Duration::from_millis(0)).unwrap());
        let Event::Key(first) = by_ref.read().unwrap() else {
            panic!("expected key");
        };
        assert_eq!(first.code, KeyCode::Char('1'));
        by_ref.set_mouse_capture(false).unwrap();
        assert_eq!(d.remaining(), 1);
        assert_eq!(d.mouse_capture(), Some(false));
        d.read().unwrap();
        assert!(!d.poll(Duration::from_millis(0)).unwrap());
        assert!(d.read().is_err());
    }
}
