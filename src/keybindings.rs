use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    // Tab strip navigation
    NextTab,
    PrevTab,
    // Active window
    MinimizeActive,
    CloseActive,
    RefreshActive,
    // Screen launchers, indexed into the app's screen catalog
    Launch(u8),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Quit => write!(f, "Quit"),
            Action::NextTab => write!(f, "Next tab (Tab)"),
            Action::PrevTab => write!(f, "Previous tab (BackTab)"),
            Action::MinimizeActive => write!(f, "Minimize window"),
            Action::CloseActive => write!(f, "Close window"),
            Action::RefreshActive => write!(f, "Refresh window"),
            Action::Launch(slot) => write!(f, "Open screen {}", slot + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "BackTab".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(NextTab, KeyCombo::new(KeyCode::Tab, KeyModifiers::NONE));
        kb.add(PrevTab, KeyCombo::new(KeyCode::BackTab, KeyModifiers::NONE));
        kb.add(
            MinimizeActive,
            KeyCombo::new(KeyCode::Char('m'), KeyModifiers::ALT),
        );
        kb.add(
            CloseActive,
            KeyCombo::new(KeyCode::Char('w'), KeyModifiers::ALT),
        );
        kb.add(
            RefreshActive,
            KeyCombo::new(KeyCode::Char('r'), KeyModifiers::ALT),
        );
        for (slot, digit) in ('1'..='9').enumerate() {
            kb.add(
                Launch(slot as u8),
                KeyCombo::new(KeyCode::Char(digit), KeyModifiers::ALT),
            );
        }
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn combos(&self, action: Action) -> &[KeyCombo] {
        self.map.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.combos(action).iter().any(|combo| combo.matches(key))
    }

    /// The action bound to `key`, if any.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.map
            .iter()
            .find(|(_, combos)| combos.iter().any(|combo| combo.matches(key)))
            .map(|(action, _)| *action)
    }

    /// Joined display form of every combo bound to `action`, e.g. `"Ctrl+Q"`.
    pub fn display_for(&self, action: Action) -> String {
        self.combos(action)
            .iter()
            .map(KeyCombo::display)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
