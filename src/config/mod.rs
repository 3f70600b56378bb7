//! DriftWM general configuration.
//!
//! Everything here is evaluated once, synchronously, at load time; the
//! result is a plain data structure the host runtime consumes. The one
//! exception is [`Config::spawn_autostart`], which the host invokes once
//! per session from its startup hook.

mod bar;
mod checks;
mod default;
mod groups;
mod keybind;
mod mousebind;
mod window_rules;

pub use bar::{
    BarConfig, Palette, ScreenConfig, Widget, WidgetDefaults, WidgetKind, WidgetSettings,
};
pub use checks::check_bindings;
pub use groups::{check_group_labels, group_keybinds};
pub use keybind::{CommandCall, Keybind, Modifier};
pub use mousebind::{default_mousebinds, MouseAction, MouseButton, Mousebind};
pub use window_rules::{default_float_rules, should_float, FloatRule, WindowIdent};

use crate::layouts::Layout;
use crate::theme_setting::{Margins, ThemeSetting};
use crate::utils::child_process::Nanny;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// How focus moves between windows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusBehaviour {
    /// Focus follows the mouse.
    Sloppy,
    /// Focus changes on click.
    ClickTo,
    /// Focus only changes through commands.
    Driven,
}

/// What the host does when a window asks to be activated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowActivation {
    /// Focus the window only when its group is already visible.
    Smart,
    /// Always focus, switching groups if needed.
    Focus,
    /// Ignore the request.
    Ignore,
}

/// General configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    /// Ordered group labels; order defines the on-screen group order and
    /// each label doubles as the key that reaches the group.
    pub groups: Vec<String>,
    pub layouts: Vec<Layout>,
    /// Script spawned once per session by the host's startup hook.
    pub autostart: String,
    pub focus_behaviour: FocusBehaviour,
    pub focus_new_windows: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: WindowActivation,
    pub palette: Palette,
    pub widget_defaults: WidgetDefaults,
    pub theme: ThemeSetting,
    pub float_rules: Vec<FloatRule>,
    pub keybind: Vec<Keybind>,
    pub mousebind: Vec<Mousebind>,
    pub screens: Vec<ScreenConfig>,
}

/// Load the configuration from `$XDG_CONFIG_HOME/driftwm/config.toml`,
/// writing the default configuration there on first run.
///
/// # Errors
///
/// Errors if the config directory cannot be created or the file cannot be
/// read or written, if the file is not valid TOML, or if validation
/// rejects the parsed configuration. Nothing falls back silently; a bad
/// configuration never reaches the host.
pub fn load() -> Result<Config> {
    let path = BaseDirectories::with_prefix("driftwm")?;
    let config_filename = path.place_config_file("config.toml")?;
    if Path::new(&config_filename).exists() {
        load_from_file(&config_filename)
    } else {
        let config = Config::default();
        let toml = toml::to_string(&config)?;
        let mut file = File::create(&config_filename)?;
        file.write_all(toml.as_bytes())?;
        Ok(config)
    }
}

/// Load and validate a configuration from an explicit path.
///
/// # Errors
///
/// Same failure modes as [`load`], minus the first-run file creation.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// The full binding list handed to the host: the manually declared
    /// bindings followed by the generated per-group bindings, with the
    /// `modkey` placeholder substituted everywhere.
    ///
    /// # Errors
    ///
    /// Errors if a group label does not name a key symbol (generation is
    /// all-or-nothing).
    pub fn keybinds(&self) -> crate::errors::Result<Vec<Keybind>> {
        let mut binds = self.keybind.clone();
        binds.extend(group_keybinds(&self.groups)?);
        for bind in &mut binds {
            if let Some(modifier) = &mut bind.modifier {
                modifier.apply_modkey(&self.modkey);
            }
        }
        Ok(binds)
    }

    /// Pointer bindings with the `modkey` placeholder substituted.
    #[must_use]
    pub fn mousebinds(&self) -> Vec<Mousebind> {
        let mut binds = self.mousebind.clone();
        for bind in &mut binds {
            if let Some(modifier) = &mut bind.modifier {
                modifier.apply_modkey(&self.modkey);
            }
        }
        binds
    }

    #[must_use]
    pub fn group_labels(&self) -> Vec<String> {
        self.groups.clone()
    }

    /// Floating classification for a newly mapped window. The host calls
    /// this once per map; a floating window is free-positioned instead of
    /// being inserted into the active layout.
    #[must_use]
    pub fn floats(&self, window: &WindowIdent) -> bool {
        let floats = should_float(&self.float_rules, window);
        if floats {
            log::debug!(
                "Window [[ NAME={:?}; WM_CLASS={:?} ]] will spawn floating",
                window.name,
                window.res_class,
            );
        }
        floats
    }

    #[must_use]
    pub fn border_width(&self) -> i32 {
        self.theme.border_width
    }

    #[must_use]
    pub fn margin(&self) -> Margins {
        match self.theme.margin.clone().try_into() {
            Ok(margins) => margins,
            Err(err) => {
                log::warn!("Could not read margin: {}", err);
                Margins::new(0)
            }
        }
    }

    #[must_use]
    pub fn focused_border_color(&self) -> &str {
        &self.theme.focused_border_color
    }

    #[must_use]
    pub fn default_border_color(&self) -> &str {
        &self.theme.default_border_color
    }

    /// Theme parameters for `layout`. Every declared layout shares the
    /// one theme table, so this returns the same reference for all of
    /// them.
    #[must_use]
    pub fn layout_theme(&self, _layout: Layout) -> &ThemeSetting {
        &self.theme
    }

    /// The autostart script path with `~` expanded to the invoking
    /// user's home directory.
    #[must_use]
    pub fn autostart_path(&self) -> Option<PathBuf> {
        let home = dirs_next::home_dir()?;
        let expanded =
            shellexpand::tilde_with_context(&self.autostart, || Some(home.to_string_lossy().into_owned()));
        Some(PathBuf::from(expanded.as_ref()))
    }

    /// Boot the autostart script. The host invokes this exactly once per
    /// session, after loading the configuration and before its event
    /// loop starts. A missing script is fine; a script that fails to
    /// spawn is logged and otherwise ignored.
    pub fn spawn_autostart(&self) {
        let path = match self.autostart_path() {
            Some(path) => path,
            None => return,
        };
        if !path.is_file() {
            log::debug!("No autostart script at {}", path.display());
            return;
        }
        if let Err(err) = Nanny::run_autostart(&path) {
            log::error!(
                "Could not boot autostart script {}: {}",
                path.display(),
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::BaseCommand;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.keybind, config.keybind);
        assert_eq!(parsed.float_rules, config.float_rules);
        assert_eq!(parsed.screens, config.screens);
        assert_eq!(parsed.theme, config.theme);
    }

    #[test]
    fn load_from_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = toml::to_string(&Config::default()).unwrap();
        file.write_all(toml.as_bytes()).unwrap();
        assert!(load_from_file(file.path()).is_ok());

        // A group label that is not a key symbol must be rejected.
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        bad.write_all(b"groups = [\"1\", \"nope!\"]").unwrap();
        assert!(load_from_file(bad.path()).is_err());
    }

    #[test]
    fn keybinds_substitute_the_primary_modifier() {
        let config = Config::default();
        let binds = config.keybinds().unwrap();
        assert!(!binds.is_empty());
        for bind in &binds {
            if let Some(modifier) = &bind.modifier {
                let names: Vec<String> = modifier.clone().into();
                assert!(
                    !names.iter().any(|name| name == "modkey"),
                    "unsubstituted modkey in {:?}",
                    bind
                );
            }
        }
        assert!(binds.iter().any(|bind| {
            bind.modifier == Some(Modifier::List(vec!["Mod4".to_owned()]))
                && bind.key == "Return"
        }));
    }

    #[test]
    fn generated_bindings_append_to_manual_ones() {
        let config = Config::default();
        let manual = config.keybind.len();
        let binds = config.keybinds().unwrap();
        assert_eq!(binds.len(), manual + 2 * config.groups.len());
        // The manual list itself is untouched.
        assert_eq!(config.keybind.len(), manual);
        let goto = binds
            .iter()
            .filter(|bind| {
                bind.commands
                    .iter()
                    .any(|call| call.command == BaseCommand::GotoGroup)
            })
            .count();
        assert_eq!(goto, config.groups.len());
    }

    #[test]
    fn one_theme_parameterizes_every_layout() {
        let mut config = Config::default();
        for layout in crate::layouts::LAYOUTS {
            let theme = config.layout_theme(*layout);
            assert_eq!(theme.border_width, 3);
            assert_eq!(theme.focused_border_color, "#5e81ac");
            assert_eq!(theme.default_border_color, "#3b4252");
        }
        config.theme.border_width = 1;
        for layout in crate::layouts::LAYOUTS {
            assert_eq!(config.layout_theme(*layout).border_width, 1);
        }
        assert_eq!(config.border_width(), 1);
        assert_eq!(config.margin(), Margins::new(10));
    }

    #[test]
    fn autostart_path_expands_the_home_directory() {
        let config = Config::default();
        let path = config.autostart_path().unwrap();
        assert!(path.ends_with(".config/driftwm/autostart.sh"));
        assert!(!path.to_string_lossy().contains('~'));
    }
}
