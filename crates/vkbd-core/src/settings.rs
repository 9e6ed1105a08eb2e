// Vkbd Settings Module
// TOML configuration: window placement, input discipline, button chords and
// an optional layout override

use std::path::{Path, PathBuf};

use crate::event::PointerButton;
use crate::key::key_from_name;
use crate::layout::spec::{ButtonMap, KeyDef, LayoutSpec};
use crate::layouts;
use crate::press::Discipline;

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Unknown key name: {0}")]
    UnknownKey(String),

    #[error("Unknown discipline: {0} (expected \"toggle\" or \"momentary\")")]
    UnknownDiscipline(String),

    #[error("Key {0} has zero width weight")]
    ZeroWidth(String),
}

/// Requested window geometry, before resolution against a screen size.
///
/// Non-positive values are interpreted specially, the way the launch flags
/// always have been: a zero width/height means the full screen dimension, a
/// negative `-n` means the screen dimension divided by `n`, and a negative
/// x/y offsets from the opposite screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlacement {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

impl Default for WindowPlacement {
    fn default() -> Self {
        // Full-width strip, a quarter of the screen tall, anchored top-left.
        Self { width: 0, height: -4, x: 0, y: 0 }
    }
}

impl WindowPlacement {
    /// Apply the non-positive interpretation rules against a screen size.
    pub fn resolve(&self, screen_w: i32, screen_h: i32) -> WindowPlacement {
        let width = match self.width {
            0 => screen_w,
            w if w < 0 => screen_w / -w,
            w => w,
        };
        let height = match self.height {
            0 => screen_h,
            h if h < 0 => screen_h / -h,
            h => h,
        };
        let x = if self.x < 0 { screen_w + self.x } else { self.x };
        let y = if self.y < 0 { screen_h + self.y } else { self.y };
        WindowPlacement { width, height, x, y }
    }
}

/// Validated program settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub placement: WindowPlacement,
    pub discipline: Discipline,
    /// Substring filter for pointer device names; `None` means autodetect.
    pub device_filter: Option<String>,
    pub buttons: ButtonMap,
    pub layout: LayoutSpec,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placement: WindowPlacement::default(),
            discipline: Discipline::default(),
            device_filter: None,
            buttons: layouts::default_buttons(),
            layout: layouts::qwerty(),
        }
    }
}

/// TOML representation, deserialized before validation.
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    window: Option<WindowToml>,

    #[serde(default)]
    input: Option<InputToml>,

    #[serde(default)]
    buttons: Option<ButtonsToml>,

    #[serde(default)]
    layout: Option<LayoutToml>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct WindowToml {
    width: Option<i32>,
    height: Option<i32>,
    x: Option<i32>,
    y: Option<i32>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct InputToml {
    discipline: Option<String>,
    device: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct ButtonsToml {
    left: Option<String>,
    middle: Option<String>,
    right: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct LayoutToml {
    #[serde(default)]
    rows: Vec<RowToml>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct RowToml {
    #[serde(default)]
    keys: Vec<KeyToml>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct KeyToml {
    label: Option<String>,
    key: String,
    width: Option<u32>,
    modifier: Option<bool>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load settings from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let raw: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::default();

        if let Some(window) = raw.window {
            if let Some(w) = window.width {
                settings.placement.width = w;
            }
            if let Some(h) = window.height {
                settings.placement.height = h;
            }
            if let Some(x) = window.x {
                settings.placement.x = x;
            }
            if let Some(y) = window.y {
                settings.placement.y = y;
            }
        }

        if let Some(input) = raw.input {
            if let Some(name) = input.discipline {
                settings.discipline = Discipline::from_name(&name)
                    .ok_or(SettingsError::UnknownDiscipline(name))?;
            }
            settings.device_filter = input.device;
        }

        if let Some(buttons) = raw.buttons {
            let mut map = ButtonMap::new();
            for (button, name) in [
                (PointerButton::Left, buttons.left),
                (PointerButton::Middle, buttons.middle),
                (PointerButton::Right, buttons.right),
            ] {
                if let Some(name) = name {
                    let key =
                        key_from_name(&name).ok_or_else(|| SettingsError::UnknownKey(name))?;
                    map.insert(button, key);
                }
            }
            settings.buttons = map;
        }

        if let Some(layout) = raw.layout {
            if !layout.rows.is_empty() {
                settings.layout = parse_layout(layout)?;
            }
        }

        Ok(settings)
    }

    /// Default config location: `~/.config/vkbd/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vkbd").join("config.toml"))
    }

    /// Load from the default location, falling back to built-in defaults
    /// when no file exists.
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }
}

fn parse_layout(layout: LayoutToml) -> Result<LayoutSpec, SettingsError> {
    let mut rows = Vec::with_capacity(layout.rows.len());
    for row in layout.rows {
        let mut defs = Vec::with_capacity(row.keys.len());
        for key in row.keys {
            let code = key_from_name(&key.key)
                .ok_or_else(|| SettingsError::UnknownKey(key.key.clone()))?;
            if key.width == Some(0) {
                return Err(SettingsError::ZeroWidth(key.key));
            }
            let mut def = match key.label {
                Some(label) => KeyDef::labeled(&label, code),
                None => KeyDef::new(code),
            };
            if let Some(width) = key.width {
                def = def.width(width);
            }
            if let Some(modifier) = key.modifier {
                def = def.modifier(modifier);
            }
            defs.push(def);
        }
        rows.push(defs);
    }
    Ok(LayoutSpec::new(rows))
}
