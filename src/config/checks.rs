//! Eager configuration validation.
//!
//! The host runtime resolves configuration mistakes at its own pace:
//! an unknown key symbol fails deep inside its keyboard grab and a
//! duplicate binding is silently shadowed by the last declaration.
//! Everything here is checked up front instead, before any data reaches
//! the host.

use super::{Config, Keybind, Mousebind};
use crate::command::BaseCommand;
use crate::errors::{ConfigError, Result};
use crate::utils::keysym_lookup;
use std::collections::HashMap;

impl Config {
    /// Validate the whole configuration.
    ///
    /// # Errors
    ///
    /// Errors on the first problem found: an invalid group list, a
    /// binding with an unknown key symbol or modifier, a collision
    /// between two bindings, a group command naming an undeclared group,
    /// an invalid pointer binding, or a palette reference past the end
    /// of the palette.
    pub fn validate(&self) -> Result<()> {
        let binds = self.keybinds()?;
        check_bindings(&binds, &self.groups)?;
        check_mousebinds(&self.mousebinds())?;
        self.check_palette_refs()
    }

    /// Every palette reference in the bar declarations must point inside
    /// the palette.
    fn check_palette_refs(&self) -> Result<()> {
        let len = self.palette.len();
        let mut refs = vec![(
            "widget_defaults.foreground".to_owned(),
            self.widget_defaults.foreground,
        )];
        for (index, screen) in self.screens.iter().enumerate() {
            if let Some(bar) = &screen.bar {
                refs.push((format!("screens[{}].bar.background", index), bar.background));
                for widget in &bar.widgets {
                    for (field, palette_index) in widget.palette_refs() {
                        refs.push((format!("{:?}.{}", widget.kind, field), palette_index));
                    }
                }
            }
        }
        for (widget, index) in refs {
            if index >= len {
                return Err(ConfigError::PaletteIndexOutOfRange { widget, index, len });
            }
        }
        Ok(())
    }
}

/// Check a fully resolved binding list: key symbols and modifiers must
/// exist, group commands must name declared groups, and no two bindings
/// may share a (modifier mask, key symbol) pair. Masks are compared, not
/// names, so `Mod4` + x colliding with `Super` + x is caught.
pub fn check_bindings(binds: &[Keybind], groups: &[String]) -> Result<()> {
    let mut seen: HashMap<(keysym_lookup::ModMask, keysym_lookup::XKeysym), &Keybind> =
        HashMap::new();
    for bind in binds {
        if bind.commands.is_empty() {
            return Err(ConfigError::EmptyKeybind(bind.key.clone()));
        }
        for call in &bind.commands {
            call.check_value()?;
            if matches!(
                call.command,
                BaseCommand::GotoGroup | BaseCommand::MoveToGroup
            ) && !groups.contains(&call.value)
            {
                return Err(ConfigError::UnknownGroup(call.value.clone()));
            }
        }

        let keysym = keysym_lookup::into_keysym(&bind.key)
            .ok_or_else(|| ConfigError::UnknownKey(bind.key.clone()))?;
        let modifiers: Vec<String> = bind.modifier.clone().map(Into::into).unwrap_or_default();
        for name in &modifiers {
            if name != "None" && keysym_lookup::into_mod(name) == 0 {
                return Err(ConfigError::UnknownModifier(name.clone()));
            }
        }

        let mask = keysym_lookup::into_modmask(&modifiers);
        if let Some(first) = seen.insert((mask, keysym), bind) {
            let combo = format!(
                "{} + {}",
                bind.modifier
                    .as_ref()
                    .map_or_else(|| "None".to_owned(), ToString::to_string),
                bind.key,
            );
            return Err(ConfigError::BindingCollision {
                combo,
                first: Box::new(first.clone()),
                second: Box::new(bind.clone()),
            });
        }
    }
    Ok(())
}

fn check_mousebinds(mousebinds: &[Mousebind]) -> Result<()> {
    for bind in mousebinds {
        let modifiers: Vec<String> = bind.modifier.clone().map(Into::into).unwrap_or_default();
        for name in &modifiers {
            if name != "None" && keysym_lookup::into_mod(name) == 0 {
                return Err(ConfigError::UnknownModifier(name.clone()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CommandCall, WidgetSettings};

    #[test]
    fn the_default_configuration_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn a_manual_binding_colliding_with_a_generated_one_fails() {
        let mut config = Config::default();
        // The generated group bindings already claim modkey + "1".
        config.keybind.push(Keybind {
            commands: vec![CommandCall::with_value(BaseCommand::Execute, "dmenu_run")],
            modifier: Some(vec!["modkey".to_owned()].into()),
            key: "1".to_owned(),
            description: None,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BindingCollision { .. })
        ));
    }

    #[test]
    fn modifier_aliases_collide() {
        let mut config = Config::default();
        config.keybind.push(Keybind {
            commands: vec![CommandCall::with_value(BaseCommand::Execute, "slock")],
            modifier: Some(vec!["Super".to_owned()].into()),
            key: "b".to_owned(),
            description: None,
        });
        // Mod4 + b is already bound (browser); Super is the same mask.
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BindingCollision { .. })
        ));
    }

    #[test]
    fn unknown_key_symbols_are_rejected() {
        let mut config = Config::default();
        config.keybind.push(Keybind {
            commands: vec![CommandCall::new(BaseCommand::CloseWindow)],
            modifier: Some("modkey".into()),
            key: "Retrun".to_owned(),
            description: None,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownKey(key)) if key == "Retrun"
        ));
    }

    #[test]
    fn unknown_modifiers_are_rejected() {
        let mut config = Config::default();
        config.keybind.push(Keybind {
            commands: vec![CommandCall::new(BaseCommand::CloseWindow)],
            modifier: Some("Hyper".into()),
            key: "z".to_owned(),
            description: None,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownModifier(name)) if name == "Hyper"
        ));
    }

    #[test]
    fn group_commands_must_name_a_declared_group() {
        let mut config = Config::default();
        config.keybind.push(Keybind {
            commands: vec![CommandCall::with_value(BaseCommand::GotoGroup, "0")],
            modifier: Some("modkey".into()),
            key: "0".to_owned(),
            description: None,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownGroup(label)) if label == "0"
        ));
    }

    #[test]
    fn palette_references_must_be_in_range() {
        let mut config = Config::default();
        if let Some(bar) = &mut config.screens[0].bar {
            bar.widgets[0].settings = WidgetSettings {
                background: Some(99),
                ..WidgetSettings::default()
            };
        }
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaletteIndexOutOfRange { index: 99, .. })
        ));
    }

    #[test]
    fn bindings_without_commands_are_rejected() {
        let mut config = Config::default();
        config.keybind.push(Keybind {
            commands: vec![],
            modifier: Some("modkey".into()),
            key: "z".to_owned(),
            description: None,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyKeybind(key)) if key == "z"
        ));
    }
}
