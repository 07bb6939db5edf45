//! User configuration: keybindings and notifier timings.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/edge-pager/config.toml` (default `~/.config/edge-pager/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::notifier::NotifierConfig;
use crate::error::{PagerError, Result};

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    ToggleNotifier,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::ScrollUp,
        Action::ScrollDown,
        Action::PageUp,
        Action::PageDown,
        Action::Top,
        Action::Bottom,
        Action::ToggleNotifier,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::ScrollUp => "scroll_up",
            Action::ScrollDown => "scroll_down",
            Action::PageUp => "page_up",
            Action::PageDown => "page_down",
            Action::Top => "top",
            Action::Bottom => "bottom",
            Action::ToggleNotifier => "toggle_notifier",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Short label for the hint line (e.g. `"↓"`, `"Ctrl+d"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+d"`, `"PageDown"`, `"g"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            // Single characters keep their case: `G` and `g` differ.
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Header title.
    pub title: String,
    /// Rows short of the bottom that still count as the bottom edge.
    /// Terminal rows are whole, so no slack is needed by default; use
    /// `--tolerance 5` (or `bottom_tolerance = 5`) for the 5-row slack of
    /// `NotifierConfig::default`.
    pub bottom_tolerance: u32,
    /// Toast display time.
    pub notice_ms: u64,
    /// Bounce + scroll-lock time.
    pub cycle_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            title: "\"Where Did My Money Go?\" Analyzer".into(),
            bottom_tolerance: 0,
            notice_ms: 1500,
            cycle_ms: 800,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut m = HashMap::new();

        m.insert(Action::ScrollUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(Action::ScrollDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(Action::PageUp, vec![KeyBind::new(PageUp, n), KeyBind::new(Char('u'), ctrl)]);
        m.insert(
            Action::PageDown,
            vec![
                KeyBind::new(PageDown, n),
                KeyBind::new(Char(' '), n),
                KeyBind::new(Char('d'), ctrl),
            ],
        );
        m.insert(Action::Top, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(
            Action::Bottom,
            vec![KeyBind::new(End, n), KeyBind::new(Char('G'), KeyModifiers::SHIFT)],
        );
        m.insert(Action::ToggleNotifier, vec![KeyBind::new(Char('n'), n)]);
        m.insert(Action::Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action bound to a key event.  The binding with the most
    /// modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Hint line shown under the title.
    pub fn hint(&self, notifier_on: bool) -> String {
        format!(
            "{}/{}: scroll | {}: page | {}/{}: top/bottom | {}: edge notices {} | {}: quit",
            self.short_binding(Action::ScrollUp),
            self.short_binding(Action::ScrollDown),
            self.short_binding(Action::PageDown),
            self.short_binding(Action::Top),
            self.short_binding(Action::Bottom),
            self.short_binding(Action::ToggleNotifier),
            if notifier_on { "on" } else { "off" },
            self.short_binding(Action::Quit),
        )
    }

    pub fn notifier_config(&self) -> NotifierConfig {
        NotifierConfig {
            bottom_tolerance: self.bottom_tolerance,
            notice_duration: Duration::from_millis(self.notice_ms),
            cycle_duration: Duration::from_millis(self.cycle_ms),
        }
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk.  A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| PagerError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse the key-value format.  Unknown keys are skipped with a warning;
    /// malformed lines and values are errors.
    pub fn parse(s: &str) -> Result<Self> {
        let mut config = Self::default();

        for (lineno, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(PagerError::Config(format!(
                    "line {}: expected `key = value`",
                    lineno + 1
                )));
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "title" => {
                    config.title = value.trim_matches('"').to_string();
                    continue;
                }
                "bottom_tolerance" => {
                    config.bottom_tolerance = parse_number::<u32>(key, value)?.min(50);
                    continue;
                }
                "notice_ms" => {
                    config.notice_ms = parse_number::<u64>(key, value)?.clamp(100, 10_000);
                    continue;
                }
                "cycle_ms" => {
                    config.cycle_ms = parse_number::<u64>(key, value)?.clamp(50, 5_000);
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                tracing::warn!(key, "unknown config key");
                continue;
            };

            let mut parsed = Vec::new();
            for part in value.split(',') {
                let part = part.trim().trim_matches('"');
                match KeyBind::parse(part) {
                    Some(bind) => parsed.push(bind),
                    None => {
                        return Err(PagerError::Config(format!("{key}: unknown key `{part}`")));
                    }
                }
            }
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| PagerError::Config(format!("{key}: `{value}` is not a number")))
}

/// Return the config file path (`$XDG_CONFIG_HOME/edge-pager/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("edge-pager").join("config.toml")
}
