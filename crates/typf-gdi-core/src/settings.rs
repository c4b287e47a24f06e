//! Per-font rendering settings
//!
//! The render-mode selector asks one question per draw: how should this
//! font family be rendered? [`FontSettingsLookup`] is that question. The
//! selector takes it as a parameter, so tests can answer with a plain
//! `HashMap` while the hook answers with a shared [`FontSettingsCache`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{GdiError, Result};
use crate::settings_config;

/// How one font family should be rendered
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontSettings {
    /// Antialias even when the application asked for non-antialiased text
    pub render_non_aa: bool,
    /// Use subpixel (LCD) rendering on 24 and 32 bpp surfaces
    pub subpixel_render: bool,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            render_non_aa: false,
            subpixel_render: true,
        }
    }
}

/// A settings entry that may leave fields to the defaults
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSettingsOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_non_aa: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subpixel_render: Option<bool>,
}

impl FontSettingsOverride {
    /// Fill the gaps from `base`
    pub fn apply(&self, base: FontSettings) -> FontSettings {
        FontSettings {
            render_non_aa: self.render_non_aa.unwrap_or(base.render_non_aa),
            subpixel_render: self.subpixel_render.unwrap_or(base.subpixel_render),
        }
    }
}

impl From<FontSettings> for FontSettingsOverride {
    fn from(settings: FontSettings) -> Self {
        Self {
            render_non_aa: Some(settings.render_non_aa),
            subpixel_render: Some(settings.subpixel_render),
        }
    }
}

/// Answers "how should this family render?"
///
/// What happens for an unknown family is up to the implementation.
pub trait FontSettingsLookup {
    fn lookup(&self, font_name: &str) -> FontSettings;
}

/// Exact-name lookup; unknown names get [`FontSettings::default`]
impl FontSettingsLookup for HashMap<String, FontSettings> {
    fn lookup(&self, font_name: &str) -> FontSettings {
        self.get(font_name).copied().unwrap_or_default()
    }
}

/// On-disk layout of a settings file
///
/// ```json
/// {
///   "default": { "subpixel_render": true },
///   "fonts": {
///     "Tahoma": { "render_non_aa": true },
///     "Courier New": { "subpixel_render": false }
///   }
/// }
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    default: FontSettingsOverride,
    #[serde(default)]
    fonts: HashMap<String, FontSettingsOverride>,
}

/// Shared per-family settings with a default for everything else
///
/// Family names compare case-insensitively, as GDI compares face names.
/// Changes are visible to the next lookup.
#[derive(Debug)]
pub struct FontSettingsCache {
    defaults: RwLock<FontSettings>,
    overrides: RwLock<HashMap<String, FontSettingsOverride>>,
}

fn family_key(font_name: &str) -> String {
    font_name.trim().to_lowercase()
}

impl FontSettingsCache {
    pub fn new(defaults: FontSettings) -> Self {
        Self {
            defaults: RwLock::new(defaults),
            overrides: RwLock::new(HashMap::new()),
        }
    }

    /// Load a settings file's JSON text
    ///
    /// Missing fields in `default` come from [`FontSettings::default`];
    /// missing fields in a font entry come from the resulting default.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::parse(json, FontSettings::default())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(path.as_ref(), FontSettings::default())
    }

    /// Build from the environment: defaults from the `TYPF_GDI_*` flags,
    /// plus the file named by `TYPF_GDI_SETTINGS` when it is set
    pub fn from_env() -> Result<Self> {
        let base = settings_config::default_settings();
        match settings_config::settings_path() {
            Some(path) => Self::load(&path, base),
            None => Ok(Self::new(base)),
        }
    }

    fn load(path: &Path, base: FontSettings) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            log::warn!("failed to read font settings from {}: {e}", path.display());
            e
        })?;
        let cache = Self::parse(&json, base)?;
        log::info!(
            "loaded settings for {} font families from {}",
            cache.overrides.read().len(),
            path.display()
        );
        Ok(cache)
    }

    fn parse(json: &str, base: FontSettings) -> Result<Self> {
        let file: SettingsFile = serde_json::from_str(json)?;
        let cache = Self::new(file.default.apply(base));
        {
            let mut overrides = cache.overrides.write();
            for (family, entry) in file.fonts {
                let key = family_key(&family);
                if key.is_empty() {
                    return Err(GdiError::Config(
                        "font settings entry with an empty family name".to_string(),
                    ));
                }
                overrides.insert(key, entry);
            }
        }
        Ok(cache)
    }

    pub fn defaults(&self) -> FontSettings {
        *self.defaults.read()
    }

    pub fn set_defaults(&self, defaults: FontSettings) {
        *self.defaults.write() = defaults;
    }

    /// Add or replace the entry for one family
    pub fn set_override(&self, font_name: &str, entry: impl Into<FontSettingsOverride>) {
        self.overrides
            .write()
            .insert(family_key(font_name), entry.into());
    }

    pub fn remove_override(&self, font_name: &str) -> bool {
        self.overrides
            .write()
            .remove(&family_key(font_name))
            .is_some()
    }

    /// Drop every family entry, keeping the defaults
    pub fn clear(&self) {
        self.overrides.write().clear();
    }

    /// Number of families with their own entry
    pub fn len(&self) -> usize {
        self.overrides.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.read().is_empty()
    }
}

impl Default for FontSettingsCache {
    fn default() -> Self {
        Self::new(FontSettings::default())
    }
}

impl FontSettingsLookup for FontSettingsCache {
    fn lookup(&self, font_name: &str) -> FontSettings {
        let defaults = self.defaults();
        match self.overrides.read().get(&family_key(font_name)) {
            Some(entry) => entry.apply(defaults),
            None => defaults,
        }
    }
}
