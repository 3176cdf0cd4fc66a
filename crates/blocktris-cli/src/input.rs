use std::{collections::HashMap, fmt, str::FromStr};

use blocktris_engine::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::KeyConfig;

/// A key as written in the configuration file: `"a"`, `"Left"`, `"Space"`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyName(KeyCode);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown key name {input:?}")]
pub struct ParseKeyError {
    input: String,
}

const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Space", KeyCode::Char(' ')),
    ("Enter", KeyCode::Enter),
    ("Esc", KeyCode::Esc),
    ("Tab", KeyCode::Tab),
    ("Backspace", KeyCode::Backspace),
];

impl KeyName {
    pub const fn code(self) -> KeyCode {
        self.0
    }

    /// Short label for the on-screen legend.
    pub fn label(self) -> String {
        match self.0 {
            KeyCode::Left => "←".to_owned(),
            KeyCode::Right => "→".to_owned(),
            KeyCode::Up => "↑".to_owned(),
            KeyCode::Down => "↓".to_owned(),
            KeyCode::Char(c) if c != ' ' => c.to_ascii_uppercase().to_string(),
            _ => self.to_string(),
        }
    }

    const fn char(c: char) -> Self {
        Self(KeyCode::Char(c))
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((name, _)) = NAMED_KEYS.iter().find(|(_, code)| *code == self.0) {
            return f.write_str(name);
        }
        match self.0 {
            KeyCode::Char(c) => write!(f, "{c}"),
            code => write!(f, "{code}"),
        }
    }
}

impl FromStr for KeyName {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((_, code)) = NAMED_KEYS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
        {
            return Ok(Self(*code));
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() && !c.is_control() => {
                Ok(Self::char(c.to_ascii_lowercase()))
            }
            _ => Err(ParseKeyError {
                input: s.to_owned(),
            }),
        }
    }
}

impl Serialize for KeyName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Default key lists, in legend order.
pub(crate) mod defaults {
    use super::{KeyCode, KeyName};

    pub const MOVE_LEFT: &[KeyName] = &[KeyName::char('a'), KeyName(KeyCode::Left)];
    pub const MOVE_RIGHT: &[KeyName] = &[KeyName::char('d'), KeyName(KeyCode::Right)];
    pub const ROTATE: &[KeyName] = &[KeyName::char('w'), KeyName(KeyCode::Up)];
    pub const HARD_DROP: &[KeyName] = &[
        KeyName::char('s'),
        KeyName(KeyCode::Down),
        KeyName::char(' '),
    ];
    pub const QUIT: &[KeyName] = &[KeyName::char('q'), KeyName(KeyCode::Esc)];
    pub const PAUSE: &[KeyName] = &[KeyName::char('p')];
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Command),
    Pause,
}

impl Action {
    pub fn description(self) -> &'static str {
        match self {
            Action::Game(Command::MoveLeft) => "left",
            Action::Game(Command::MoveRight) => "right",
            Action::Game(Command::Rotate) => "rotate",
            Action::Game(Command::HardDrop) => "drop",
            Action::Game(Command::Quit) => "quit",
            Action::Pause => "pause",
        }
    }
}

/// One entry of the on-screen key legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub keys: Vec<String>,
    pub description: &'static str,
}

/// Lookup table from key codes to actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    actions: HashMap<KeyCode, Action>,
    legend: Vec<LegendEntry>,
}

impl KeyBindings {
    /// Builds the table. A key listed for several actions keeps the last one.
    pub fn new(keys: &KeyConfig) -> Self {
        let mut actions = HashMap::new();
        let mut legend = vec![];
        for (action, names) in keys.entries() {
            for name in names {
                if let Some(previous) = actions.insert(name.code(), action)
                    && previous != action
                {
                    warn!(
                        "key {name} is bound to both {} and {}; using {}",
                        previous.description(),
                        action.description(),
                        action.description()
                    );
                }
            }
            if !names.is_empty() {
                legend.push(LegendEntry {
                    keys: names.iter().map(|name| name.label()).collect(),
                    description: action.description(),
                });
            }
        }
        Self { actions, legend }
    }

    /// Returns the action for a key press. Ctrl-C is not handled here.
    pub fn action(&self, event: &KeyEvent) -> Option<Action> {
        let code = match event.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            code => code,
        };
        self.actions.get(&code).copied()
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }
}

/// Returns whether `event` is Ctrl-C.
pub fn is_interrupt(event: &KeyEvent) -> bool {
    event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c' | 'C'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!("a".parse(), Ok(KeyName::char('a')));
        assert_eq!("A".parse(), Ok(KeyName::char('a')));
        assert_eq!("left".parse(), Ok(KeyName(KeyCode::Left)));
        assert_eq!("SPACE".parse(), Ok(KeyName::char(' ')));
        assert_eq!("Esc".parse(), Ok(KeyName(KeyCode::Esc)));
        assert_eq!("/".parse(), Ok(KeyName::char('/')));
        assert!("".parse::<KeyName>().is_err());
        assert!(" ".parse::<KeyName>().is_err());
        assert_eq!(
            "Hyper".parse::<KeyName>(),
            Err(ParseKeyError {
                input: "Hyper".to_owned()
            })
        );
    }

    #[test]
    fn test_key_name_display() {
        assert_eq!(KeyName::char('a').to_string(), "a");
        assert_eq!(KeyName::char(' ').to_string(), "Space");
        assert_eq!(KeyName(KeyCode::Left).to_string(), "Left");
        assert_eq!(KeyName::char('a').label(), "A");
        assert_eq!(KeyName(KeyCode::Left).label(), "←");
        assert_eq!(KeyName::char(' ').label(), "Space");
        assert_eq!(KeyName(KeyCode::Esc).label(), "Esc");
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new(&KeyConfig::default());
        let cases = [
            (KeyCode::Char('a'), Action::Game(Command::MoveLeft)),
            (KeyCode::Left, Action::Game(Command::MoveLeft)),
            (KeyCode::Char('d'), Action::Game(Command::MoveRight)),
            (KeyCode::Right, Action::Game(Command::MoveRight)),
            (KeyCode::Char('w'), Action::Game(Command::Rotate)),
            (KeyCode::Up, Action::Game(Command::Rotate)),
            (KeyCode::Char('s'), Action::Game(Command::HardDrop)),
            (KeyCode::Down, Action::Game(Command::HardDrop)),
            (KeyCode::Char(' '), Action::Game(Command::HardDrop)),
            (KeyCode::Char('q'), Action::Game(Command::Quit)),
            (KeyCode::Esc, Action::Game(Command::Quit)),
            (KeyCode::Char('p'), Action::Pause),
        ];
        for (code, action) in cases {
            assert_eq!(bindings.action(&press(code)), Some(action), "{code:?}");
        }
        assert_eq!(bindings.action(&press(KeyCode::Char('x'))), None);
        assert_eq!(
            bindings.action(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Game(Command::MoveLeft))
        );
    }

    #[test]
    fn test_later_binding_wins() {
        let keys = KeyConfig {
            pause: vec![KeyName::char('q')],
            ..KeyConfig::default()
        };
        let bindings = KeyBindings::new(&keys);
        assert_eq!(
            bindings.action(&press(KeyCode::Char('q'))),
            Some(Action::Pause)
        );
    }

    #[test]
    fn test_legend_follows_bindings() {
        let keys = KeyConfig {
            pause: vec![],
            ..KeyConfig::default()
        };
        let bindings = KeyBindings::new(&keys);
        let legend = bindings.legend();
        assert_eq!(legend.len(), 5);
        assert_eq!(
            legend[0],
            LegendEntry {
                keys: vec!["A".to_owned(), "←".to_owned()],
                description: "left",
            }
        );
        assert_eq!(legend[3].keys, ["S", "↓", "Space"]);
    }

    #[test]
    fn test_interrupt() {
        assert!(is_interrupt(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt(&press(KeyCode::Char('c'))));
    }
}
