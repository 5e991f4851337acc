use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Quit,
    NewWindow,
    OpenHelp,
    MinimizeActive,
    ToggleMaximizeActive,
    CloseActive,
    RestoreAll,
    CycleNextWindow,
    CyclePrevWindow,
    CancelInteraction,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::NewWindow => "Open the next window",
            Action::OpenHelp => "Show help",
            Action::MinimizeActive => "Minimize active window",
            Action::ToggleMaximizeActive => "Maximize / restore active window",
            Action::CloseActive => "Close active window",
            Action::RestoreAll => "Restore minimized windows",
            Action::CycleNextWindow => "Focus next window",
            Action::CyclePrevWindow => "Focus previous window",
            Action::CancelInteraction => "Cancel drag / resize",
        };
        write!(f, "{}", s)
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

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
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
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
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
        kb.add(Quit, KeyCombo::plain(KeyCode::Char('q')));
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        kb.add(NewWindow, KeyCombo::plain(KeyCode::Char('n')));
        kb.add(OpenHelp, KeyCombo::plain(KeyCode::Char('h')));
        kb.add(MinimizeActive, KeyCombo::plain(KeyCode::Char('m')));
        kb.add(ToggleMaximizeActive, KeyCombo::plain(KeyCode::Char('x')));
        kb.add(CloseActive, KeyCombo::plain(KeyCode::Char('w')));
        kb.add(RestoreAll, KeyCombo::plain(KeyCode::Char('r')));
        kb.add(CycleNextWindow, KeyCombo::plain(KeyCode::Tab));
        kb.add(CyclePrevWindow, KeyCombo::plain(KeyCode::BackTab));
        kb.add(CancelInteraction, KeyCombo::plain(KeyCode::Esc));
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

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    /// First action, in declaration order, bound to `key`.
    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        let mut hits: Vec<Action> = self
            .map
            .iter()
            .filter(|(_, list)| list.iter().any(|c| c.matches(key)))
            .map(|(act, _)| *act)
            .collect();
        hits.sort();
        hits.first().copied()
    }

    /// Every binding, in declaration order, with its key labels.
    pub fn help_entries(&self) -> Vec<(Action, Vec<String>)> {
        let mut v: Vec<(Action, Vec<String>)> = self
            .map
            .iter()
            .map(|(act, list)| (*act, list.iter().map(|c| c.display()).collect()))
            .collect();
        v.sort_by_key(|(act, _)| *act);
        v
    }

    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}
