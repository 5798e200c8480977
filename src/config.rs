use std::collections::HashMap;

use color_eyre::eyre::{eyre, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{
    de::{DeserializeOwned, Deserializer, Error as _},
    Deserialize,
};

use crate::{
    action::{Action, ActionState, Command, SceneAction},
    pages::PageId,
};

const CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
}

impl Config {
    /// Loads the user's `config.yaml` (if any) and fills every binding it
    /// leaves out from the embedded defaults.
    pub fn new() -> Result<Self> {
        let default_config: Config = serde_yaml::from_str(CONFIG)?;
        let config_dir = crate::utils::get_config_dir();
        let mut builder = config::Config::builder();

        let config_files = [("config.yaml", config::FileFormat::Yaml)];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(config::File::from(config_dir.join(file)).format(*format).required(false));
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!("No user configuration file found, using default keybindings");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.keybindings.merge_defaults(default_config.keybindings);

        Ok(cfg)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawPageKeyBindings {
    pub click: Option<HashMap<String, String>>,
    pub hold: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RawKeyBindings {
    #[serde(default)]
    pub global: RawPageKeyBindings,
    #[serde(default)]
    pub pages: HashMap<String, RawPageKeyBindings>,
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct PageKeyBindings(pub HashMap<KeyEvent, Action>);

#[derive(Clone, Debug, Default)]
pub struct KeyBindings {
    pub global: PageKeyBindings,
    pub pages: HashMap<PageId, PageKeyBindings>,
}

impl KeyBindings {
    /// Adds every binding from `defaults` whose key is not bound yet.
    pub fn merge_defaults(&mut self, defaults: KeyBindings) {
        for (scope, default_bindings) in defaults.pages {
            let user_bindings = self.pages.entry(scope).or_default();
            for (key, action) in default_bindings.0 {
                user_bindings.entry(key).or_insert(action);
            }
        }
        for (key, action) in defaults.global.0 {
            self.global.entry(key).or_insert(action);
        }
    }

    /// Looks `key` up in the global bindings first, then in the page's.
    pub fn lookup(&self, page: &PageId, key: &KeyEvent) -> Option<&Action> {
        self.global.get(key).or_else(|| self.pages.get(page).and_then(|bindings| bindings.get(key)))
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_keybindings = RawKeyBindings::deserialize(deserializer)?;

        let global_keybindings = PageKeyBindings(
            parse_page_keybindings::<Command>(&raw_keybindings.global)
                .map_err(D::Error::custom)?
                .into_iter()
                .map(|(event, (command, state))| (event, Action { command, state }))
                .collect(),
        );
        let page_keybindings: HashMap<PageId, PageKeyBindings> = raw_keybindings
            .pages
            .into_iter()
            .map(|(page, keybindings)| match_page_keybindings(&page, keybindings))
            .collect::<Result<_, String>>()
            .map_err(D::Error::custom)?;

        Ok(KeyBindings { global: global_keybindings, pages: page_keybindings })
    }
}

macro_rules! parse_and_map_actions {
    ( $( ( $page_id_variant:path, $action_type:ty, $action_variant:path ) ),* ) => {
        fn match_page_keybindings(
            page: &str,
            raw_page_keybindings: RawPageKeyBindings,
        ) -> Result<(PageId, PageKeyBindings), String> {
            let page_id: PageId = serde_yaml::from_str(page).map_err(|e| format!("Unknown page `{page}`: {e}"))?;
            let map = match page_id {
                $(
                    $page_id_variant => {
                        parse_page_keybindings::<$action_type>(&raw_page_keybindings)?
                            .into_iter()
                            .map(|(event, (command, state))| (event, Action { command: $action_variant(command), state }))
                            .collect()
                    },
                )*
            };

            Ok((page_id, PageKeyBindings(map)))
        }
    };
}

parse_and_map_actions![(PageId::Scene, SceneAction, Command::Scene)];

fn parse_binding_pairs<T>(map: &Option<HashMap<String, String>>) -> Result<HashMap<KeyEvent, T>, String>
where
    T: DeserializeOwned,
{
    let Some(inner_map) = map else {
        return Ok(HashMap::new());
    };
    inner_map
        .iter()
        .map(|(key_str, action_str)| -> Result<(KeyEvent, T), String> {
            let action: T =
                serde_yaml::from_str(action_str).map_err(|e| format!("Unknown action `{action_str}`: {e}"))?;
            Ok((parse_key_event(key_str)?, action))
        })
        .collect()
}

fn parse_page_keybindings<T>(
    raw_page_keybindings: &RawPageKeyBindings,
) -> Result<HashMap<KeyEvent, (T, ActionState)>, String>
where
    T: DeserializeOwned + Clone,
{
    let click_keybindings = parse_binding_pairs(&raw_page_keybindings.click)?;
    let hold_keybindings = parse_binding_pairs(&raw_page_keybindings.hold)?;

    Ok(merge_keybinding_maps(click_keybindings, hold_keybindings))
}

fn merge_keybinding_maps<A: Clone>(
    click: HashMap<KeyEvent, A>,
    hold: HashMap<KeyEvent, A>,
) -> HashMap<KeyEvent, (A, ActionState)> {
    let mut click: HashMap<KeyEvent, (A, ActionState)> =
        click.into_iter().map(|(event, command)| (event, (command, ActionState::default()))).collect();
    for (mut key_event, action) in hold {
        click.insert(key_event, (action.clone(), ActionState::Start));
        key_event.kind = KeyEventKind::Release;
        click.insert(key_event, (action.clone(), ActionState::End));
        key_event.kind = KeyEventKind::Repeat;
        click.insert(key_event, (action, ActionState::Repeat));
    }

    click
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{}`", raw));
    }
    let raw = raw.trim_start_matches('<').trim_end_matches('>');

    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            },
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            },
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            },
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(raw: &str, mut modifiers: KeyModifiers) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        },
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        f if f.len() > 1 && f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(format!("Unable to parse {raw}")),
        },
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Unable to parse {raw}"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        },
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let char;
    let key_code = match key_event.code {
        KeyCode::Backspace => "Backspace",
        KeyCode::Enter => "Enter",
        KeyCode::Left => "Left",
        KeyCode::Right => "Right",
        KeyCode::Up => "Up",
        KeyCode::Down => "Down",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Tab => "Tab",
        KeyCode::BackTab => "BackTab",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::F(c) => {
            char = format!("F({c})");
            &char
        },
        KeyCode::Char(' ') => "Space",
        KeyCode::Char(c) => {
            char = c.to_string();
            &char
        },
        KeyCode::Esc => "Esc",
        _ => "",
    };

    let mut modifiers = Vec::with_capacity(3);

    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("Ctrl");
    }

    if key_event.modifiers.intersects(KeyModifiers::SHIFT) {
        modifiers.push("Shift");
    }

    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("Alt");
    }

    let mut key = modifiers.join("-");

    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(key_code);

    key
}

/// Parses a keybinding block the way the embedded defaults are parsed.
pub fn parse_keybindings(yaml: &str) -> Result<KeyBindings> {
    #[derive(Deserialize)]
    struct Wrapper {
        keybindings: KeyBindings,
    }
    serde_yaml::from_str::<Wrapper>(yaml).map(|w| w.keybindings).map_err(|e| eyre!("Invalid keybindings: {e}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::action::act;

    #[test]
    fn test_default_keybindings() -> Result<()> {
        let keybindings = parse_keybindings(CONFIG)?;

        assert_eq!(
            keybindings.lookup(&PageId::Scene, &KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())),
            Some(&act!(Command::Quit))
        );
        assert_eq!(
            keybindings.lookup(&PageId::Scene, &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(&act!(Command::Quit))
        );
        assert_eq!(
            keybindings.lookup(&PageId::Scene, &KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty())),
            Some(&act!(Command::Scene(SceneAction::DropGift)))
        );
        assert_eq!(keybindings.lookup(&PageId::Scene, &KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty())), None);
        Ok(())
    }

    #[test]
    fn test_hold_bindings_track_key_state() -> Result<()> {
        let keybindings = parse_keybindings(
            r#"
keybindings:
  pages:
    Scene:
      hold:
        "<g>": DropGift
"#,
        )?;
        let bindings = &keybindings.pages[&PageId::Scene];
        let mut event = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty());
        assert_eq!(bindings.get(&event).map(|a| a.state.clone()), Some(ActionState::Start));
        event.kind = KeyEventKind::Release;
        assert_eq!(bindings.get(&event).map(|a| a.state.clone()), Some(ActionState::End));
        Ok(())
    }

    #[test]
    fn test_user_bindings_override_defaults() -> Result<()> {
        let mut user = parse_keybindings(
            r#"
keybindings:
  global:
    click:
      "<q>": ToggleShowHelp
"#,
        )?;
        user.merge_defaults(parse_keybindings(CONFIG)?);

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        assert_eq!(user.global.get(&q), Some(&act!(Command::ToggleShowHelp)));
        assert!(user.pages.contains_key(&PageId::Scene));
        Ok(())
    }

    #[test]
    fn test_user_file_layers_over_defaults() -> Result<()> {
        let user = r#"
keybindings:
  global:
    click:
      "<q>": ToggleShowHelp
"#;
        let mut cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(user, config::FileFormat::Yaml))
            .build()?
            .try_deserialize()?;
        cfg.keybindings.merge_defaults(parse_keybindings(CONFIG)?);

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(cfg.keybindings.lookup(&PageId::Scene, &q), Some(&act!(Command::ToggleShowHelp)));
        assert_eq!(cfg.keybindings.lookup(&PageId::Scene, &enter), Some(&act!(Command::Scene(SceneAction::DropGift))));
        Ok(())
    }

    #[test]
    fn test_invalid_bindings_are_errors() {
        assert!(parse_keybindings("keybindings:\n  global:\n    click:\n      \"<q>\": Explode\n").is_err());
        assert!(parse_keybindings("keybindings:\n  pages:\n    Attic:\n      click: {}\n").is_err());
    }

    #[test]
    fn test_simple_keys() {
        assert_eq!(parse_key_event("a").unwrap(), KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty()));

        assert_eq!(parse_key_event("enter").unwrap(), KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));

        assert_eq!(parse_key_event("<space>").unwrap(), KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty()));

        assert_eq!(parse_key_event("f5").unwrap(), KeyEvent::new(KeyCode::F(5), KeyModifiers::empty()));
    }

    #[test]
    fn test_with_modifiers() {
        assert_eq!(parse_key_event("ctrl-a").unwrap(), KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));

        assert_eq!(parse_key_event("alt-enter").unwrap(), KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));

        assert_eq!(parse_key_event("shift-esc").unwrap(), KeyEvent::new(KeyCode::Esc, KeyModifiers::SHIFT));
    }

    #[test]
    fn test_multiple_modifiers() {
        assert_eq!(
            parse_key_event("ctrl-alt-a").unwrap(),
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL | KeyModifiers::ALT)
        );

        assert_eq!(
            parse_key_event("ctrl-shift-enter").unwrap(),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL | KeyModifiers::SHIFT)
        );
    }

    #[test]
    fn test_key_event_to_string() {
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL | KeyModifiers::ALT)),
            "Ctrl-Alt-a".to_string()
        );
        assert_eq!(key_event_to_string(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty())), "Space");
    }

    #[test]
    fn test_invalid_keys() {
        assert!(parse_key_event("invalid-key").is_err());
        assert!(parse_key_event("ctrl-invalid-key").is_err());
        assert!(parse_key_event("f13").is_err());
        assert!(parse_key_event("<a").is_err());
    }

    #[test]
    fn test_case_insensitivity() {
        assert_eq!(parse_key_event("CTRL-a").unwrap(), KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));

        assert_eq!(parse_key_event("AlT-eNtEr").unwrap(), KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
    }
}
