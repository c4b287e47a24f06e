//! Process-wide rendering defaults
//!
//! Fonts without their own entry in a [`FontSettingsCache`] render with
//! these defaults. They start from the environment and can be changed at
//! runtime; runtime changes win.
//!
//! # Environment Variables
//!
//! - `TYPF_GDI_SUBPIXEL` - subpixel (LCD) rendering on true-color surfaces, on by default
//! - `TYPF_GDI_RENDER_NON_AA` - antialias fonts that asked for non-antialiased quality
//! - `TYPF_GDI_SETTINGS` - path to a JSON settings file, see [`FontSettingsCache::from_json`]
//!
//! Flags accept `1`, `true`, `yes`, `on` and `0`, `false`, `no`, `off`.
//!
//! ```bash
//! TYPF_GDI_SUBPIXEL=0 TYPF_GDI_SETTINGS=C:\typf\fonts.json ./my_app
//! ```
//!
//! [`FontSettingsCache`]: crate::settings::FontSettingsCache
//! [`FontSettingsCache::from_json`]: crate::settings::FontSettingsCache::from_json

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::settings::FontSettings;

pub const SUBPIXEL_ENV: &str = "TYPF_GDI_SUBPIXEL";
pub const RENDER_NON_AA_ENV: &str = "TYPF_GDI_RENDER_NON_AA";
pub const SETTINGS_PATH_ENV: &str = "TYPF_GDI_SETTINGS";

static SUBPIXEL_RENDER: AtomicBool = AtomicBool::new(true);
static RENDER_NON_AA: AtomicBool = AtomicBool::new(false);

/// Whether the env vars have been read
static ENV_CHECKED: OnceLock<()> = OnceLock::new();

/// Read a boolean flag the way users tend to write them
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_env_flag(name: &str, target: &AtomicBool) {
    if let Ok(val) = std::env::var(name) {
        match parse_flag(&val) {
            Some(enabled) => {
                target.store(enabled, Ordering::SeqCst);
                log::info!("{name}={enabled} from environment");
            }
            None => log::warn!("ignoring {name}={val:?}: expected a boolean"),
        }
    }
}

fn check_env() {
    ENV_CHECKED.get_or_init(|| {
        read_env_flag(SUBPIXEL_ENV, &SUBPIXEL_RENDER);
        read_env_flag(RENDER_NON_AA_ENV, &RENDER_NON_AA);
    });
}

/// Settings for fonts with no entry of their own
pub fn default_settings() -> FontSettings {
    check_env();
    FontSettings {
        render_non_aa: RENDER_NON_AA.load(Ordering::SeqCst),
        subpixel_render: SUBPIXEL_RENDER.load(Ordering::SeqCst),
    }
}

/// Replace the defaults at runtime, overriding the environment
pub fn set_default_settings(settings: FontSettings) {
    // A first environment read after this point would overwrite the new values
    check_env();
    RENDER_NON_AA.store(settings.render_non_aa, Ordering::SeqCst);
    SUBPIXEL_RENDER.store(settings.subpixel_render, Ordering::SeqCst);
    log::debug!("default font settings set to {settings:?}");
}

/// Location of the JSON settings file, if one is configured
pub fn settings_path() -> Option<PathBuf> {
    std::env::var_os(SETTINGS_PATH_ENV)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}
