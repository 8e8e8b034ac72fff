use std::io;

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::config::SessionConfig;
use crate::drivers::InputDriver;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::keybindings::{Action, KeyBindings};
use crate::launcher::{Launch, launch};
use crate::screen::{Screen, StatusLine};
use crate::tabs::{TabStrip, neighbor, tabs};
use crate::ui::UiFrame;
use crate::window::{ChromeAction, Window, WindowChrome, WindowConfig, WindowRegistry};

/// Supplies the screens an app can launch by slot number.
pub trait ScreenCatalog<S> {
    fn config_for(&mut self, slot: u8) -> Option<WindowConfig<S>>;

    /// Called once for each freshly opened window, e.g. to register a
    /// refresh callback with the chrome.
    fn mounted(&mut self, _window: &Window<S>, _chrome: &mut WindowChrome) {}

    fn empty_message(&self) -> &str {
        "No screens open"
    }
}

/// Registry plus the views drawn from it.
pub struct Session<S> {
    registry: WindowRegistry<S>,
    chrome: WindowChrome,
    strip: TabStrip,
    status: StatusLine,
    bindings: KeyBindings,
}

impl<S: Screen> Session<S> {
    pub fn new(bindings: KeyBindings) -> Self {
        let mut status = StatusLine::new();
        status.set_style(
            Style::default()
                .bg(crate::theme::status_bg())
                .fg(crate::theme::status_fg()),
        );
        Self {
            registry: WindowRegistry::new(),
            chrome: WindowChrome::new(),
            strip: TabStrip::new(),
            status,
            bindings,
        }
    }

    pub fn registry(&self) -> &WindowRegistry<S> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry<S> {
        &mut self.registry
    }

    pub fn chrome(&self) -> &WindowChrome {
        &self.chrome
    }

    pub fn apply_action<C: ScreenCatalog<S>>(
        &mut self,
        action: Action,
        catalog: &mut C,
    ) -> ControlFlow {
        tracing::debug!(%action, "action");
        let active = self.registry.active_id();
        match action {
            Action::Quit => return ControlFlow::Quit,
            Action::NextTab | Action::PrevTab => {
                let forward = action == Action::NextTab;
                if let Some(next) = neighbor(&self.registry, active, forward) {
                    self.registry.restore(next);
                }
            }
            Action::MinimizeActive => {
                if let Some(id) = active {
                    self.chrome.apply(&mut self.registry, id, ChromeAction::Minimize);
                }
            }
            Action::CloseActive => {
                if let Some(id) = active {
                    self.chrome.apply(&mut self.registry, id, ChromeAction::Close);
                }
            }
            Action::RefreshActive => {
                if let Some(id) = active {
                    self.chrome.apply(&mut self.registry, id, ChromeAction::Refresh);
                }
            }
            Action::Launch(slot) => {
                let Some(config) = catalog.config_for(slot) else {
                    return ControlFlow::Continue;
                };
                if let Launch::Opened(id) = launch(&mut self.registry, config)
                    && let Some(window) = self.registry.get(id)
                {
                    catalog.mounted(window, &mut self.chrome);
                }
            }
        }
        ControlFlow::Continue
    }

    pub fn handle_event<C: ScreenCatalog<S>>(
        &mut self,
        event: &Event,
        catalog: &mut C,
    ) -> ControlFlow {
        let flow = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match self.bindings.action_for(key) {
                    Some(action) => self.apply_action(action, catalog),
                    None => {
                        self.forward_to_active(event);
                        ControlFlow::Continue
                    }
                }
            }
            // releases and repeats from drivers that do not normalize
            Event::Key(_) => ControlFlow::Continue,
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = self.strip.hit_test(event) {
                    self.registry.restore(id);
                } else if let Some((id, action)) = self.chrome.hit_test(event) {
                    self.chrome.apply(&mut self.registry, id, action);
                } else {
                    self.forward_to_active(event);
                }
                ControlFlow::Continue
            }
            _ => {
                self.forward_to_active(event);
                ControlFlow::Continue
            }
        };
        self.chrome.sync_closed(&self.registry);
        flow
    }

    fn forward_to_active(&mut self, event: &Event) -> bool {
        let Some(id) = self.registry.active_id() else {
            return false;
        };
        self.registry
            .screen_mut(id)
            .is_some_and(|screen| screen.handle_event(event))
    }

    pub fn draw<C: ScreenCatalog<S>>(&mut self, frame: &mut Frame, catalog: &C) {
        let mut ui = UiFrame::new(frame);
        let area = ui.area();
        self.strip.begin_frame();
        self.chrome.begin_frame();
        if area.height < 3 || area.width == 0 {
            return;
        }
        let strip_area = Rect { height: 1, ..area };
        let body = Rect {
            y: area.y.saturating_add(1),
            height: area.height - 2,
            ..area
        };
        let status_area = Rect {
            y: area.y.saturating_add(area.height - 1),
            height: 1,
            ..area
        };

        self.strip.render(&mut ui, strip_area, &tabs(&self.registry));

        let active = self
            .registry
            .active_id()
            .and_then(|id| self.registry.get(id).map(|window| (id, window)));
        match active {
            Some((id, window)) => {
                let title = window.title().to_string();
                let inner = self.chrome.render(&mut ui, body, window, true);
                if let Some(screen) = self.registry.screen_mut(id) {
                    screen.render(&mut ui, inner, true);
                }
                self.status.set_left(format!(" {title}"));
            }
            None => {
                let message_area = Rect {
                    y: body.y.saturating_add(body.height / 2),
                    height: 1,
                    ..body
                };
                ui.render_widget(
                    Paragraph::new(catalog.empty_message())
                        .centered()
                        .style(Style::default().fg(crate::theme::accent())),
                    message_area,
                );
                let minimized = self.registry.list_minimized().count();
                self.status.set_left(format!(" {minimized} minimized"));
            }
        }

        self.status.set_right(self.key_hints());
        self.status.render(&mut ui, status_area);
    }

    fn key_hints(&self) -> String {
        let hint = |action: Action, label: &str| {
            format!("{} {label}", self.bindings.display_for(action))
        };
        [
            hint(Action::NextTab, "next"),
            hint(Action::MinimizeActive, "minimize"),
            hint(Action::CloseActive, "close"),
            hint(Action::RefreshActive, "refresh"),
            hint(Action::Quit, "quit"),
        ]
        .join("  ")
            + " "
    }
}

/// Drive `session` until the quit binding fires. Redraws after every event
/// and on each idle poll.
pub fn run_session<B, D, S, C>(
    terminal: &mut Terminal<B>,
    driver: D,
    session: &mut Session<S>,
    catalog: &mut C,
    config: &SessionConfig,
) -> io::Result<()>
where
    B: Backend,
    D: InputDriver,
    S: Screen,
    C: ScreenCatalog<S>,
{
    let mut event_loop = EventLoop::new(driver, config.poll_interval);
    event_loop
        .driver()
        .set_mouse_capture(config.mouse_capture)?;

    event_loop.run(|_, event| {
        if let Some(event) = event
            && session.handle_event(&event, catalog) == ControlFlow::Quit
        {
            return Ok(ControlFlow::Quit);
        }
        terminal
            .draw(|frame| session.draw(frame, catalog))
            .map_err(|err| io::Error::other(err.to_string()))?;
        Ok(ControlFlow::Continue)
    })
}
