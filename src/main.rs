use std::cell::Cell;
use std::io;
use std::rc::Rc;

use clap::Parser;
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

use session_wm::config::{SessionCli, SessionConfig};
use session_wm::drivers::console::{ConsoleInputDriver, ConsoleTerminal};
use session_wm::keybindings::KeyBindings;
use session_wm::runner::{ScreenCatalog, Session, run_session};
use session_wm::screen::Screen;
use session_wm::ui::UiFrame;
use session_wm::window::{Window, WindowChrome, WindowConfig};

/// A placeholder form: static body text plus a refresh counter bumped by
/// the chrome's `[r]` button.
struct FormScreen {
    heading: &'static str,
    body: &'static str,
    refreshed: Rc<Cell<u32>>,
}

impl Screen for FormScreen {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _focused: bool) {
        let mut lines = vec![
            Line::styled(self.heading, Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(""),
        ];
        lines.extend(self.body.lines().map(Line::raw));
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!(
            "Refreshed {} time(s)",
            self.refreshed.get()
        )));
        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }
}

struct Entry {
    kind: &'static str,
    title: &'static str,
    tab_title: &'static str,
    icon: &'static str,
    body: &'static str,
}

static ENTRIES: [Entry; 5] = [
    Entry {
        kind: "members",
        title: "Member Management",
        tab_title: "Members",
        icon: "@",
        body: indoc! {"
            Search members by name or number.
            Enter opens the selected member record.
        "},
    },
    Entry {
        kind: "branches",
        title: "Branch Management",
        tab_title: "Branches",
        icon: "#",
        body: indoc! {"
            Branch codes, addresses and opening hours.
        "},
    },
    Entry {
        kind: "tills",
        title: "Till Sessions",
        tab_title: "Tills",
        icon: "$",
        body: indoc! {"
            Open and close teller tills.
            Balances are checked against the vault at close.
        "},
    },
    Entry {
        kind: "gl-accounts",
        title: "GL Accounts",
        tab_title: "GL",
        icon: "%",
        body: indoc! {"
            Chart of accounts and period postings.
        "},
    },
    Entry {
        kind: "deposits",
        title: "Deposit Products",
        tab_title: "Deposits",
        icon: "+",
        body: indoc! {"
            Savings and term deposit product definitions.
        "},
    },
];

struct DemoCatalog;

impl ScreenCatalog<FormScreen> for DemoCatalog {
    fn config_for(&mut self, slot: u8) -> Option<WindowConfig<FormScreen>> {
        let entry = ENTRIES.get(slot as usize)?;
        let screen = FormScreen {
            heading: entry.title,
            body: entry.body,
            refreshed: Rc::new(Cell::new(0)),
        };
        Some(
            WindowConfig::new(entry.kind, entry.title, screen)
                .with_tab_title(entry.tab_title)
                .with_icon(entry.icon),
        )
    }

    fn mounted(&mut self, window: &Window<FormScreen>, chrome: &mut WindowChrome) {
        let counter = window.screen().refreshed.clone();
        chrome.register_refresh(window.id(), move || counter.set(counter.get() + 1));
    }

    fn empty_message(&self) -> &str {
        "No screens open. Press Alt+1 to Alt+5 to open one."
    }
}

fn main() -> io::Result<()> {
    let cli = SessionCli::parse();
    let config = SessionConfig::try_from(&cli)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    if let Err(err) = session_wm::tracing_sub::init(&config) {
        eprintln!("logging disabled: {err}");
    }
    tracing::info!(poll_ms = config.poll_interval.as_millis() as u64, "starting session");

    let mut console = ConsoleTerminal::enter()?;
    let mut session = Session::new(KeyBindings::default());
    let mut catalog = DemoCatalog;
    let result = run_session(
        console.terminal_mut(),
        ConsoleInputDriver::new(),
        &mut session,
        &mut catalog,
        &config,
    );
    console.exit()?;
    if let Err(err) = &result {
        tracing::error!(%err, "session ended with error");
    }
    result
}
