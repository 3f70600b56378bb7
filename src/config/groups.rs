//! Group declarations and the bindings generated from them.

use super::keybind::{CommandCall, Keybind};
use crate::command::BaseCommand;
use crate::errors::{ConfigError, Result};
use crate::utils::keysym_lookup;
use std::collections::HashSet;

/// Generate the two per-group bindings from an ordered group list:
///
/// * `modkey` + label — activate the group on the current screen;
/// * `modkey` + Shift + label — move the focused window into the group
///   and activate it.
///
/// The group label doubles as the key symbol, so every label must name a
/// key (`check_group_labels` runs first and a non-key label fails the
/// whole generation). The caller appends the returned list to the
/// manually declared bindings; nothing is mutated here.
pub fn group_keybinds(groups: &[String]) -> Result<Vec<Keybind>> {
    check_group_labels(groups)?;
    let mut binds = Vec::with_capacity(groups.len() * 2);
    for label in groups {
        binds.push(Keybind {
            commands: vec![CommandCall::with_value(BaseCommand::GotoGroup, label)],
            modifier: Some(vec!["modkey".to_owned()].into()),
            key: label.clone(),
            description: Some(format!("Switch to group {}", label)),
        });
        binds.push(Keybind {
            commands: vec![CommandCall::with_value(BaseCommand::MoveToGroup, label)],
            modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
            key: label.clone(),
            description: Some(format!(
                "Switch to & move focused window to group {}",
                label
            )),
        });
    }
    Ok(binds)
}

/// A group list must be non-empty, free of duplicates, and every label
/// must name a key symbol on the target keyboard layout.
pub fn check_group_labels(groups: &[String]) -> Result<()> {
    if groups.is_empty() {
        return Err(ConfigError::NoGroups);
    }
    let mut seen = HashSet::new();
    for label in groups {
        if !seen.insert(label) {
            return Err(ConfigError::DuplicateGroupLabel(label.clone()));
        }
        if keysym_lookup::into_keysym(label).is_none() {
            return Err(ConfigError::GroupLabelNotAKey(label.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Modifier;

    fn digit_groups() -> Vec<String> {
        (1..=9).map(|i| i.to_string()).collect()
    }

    #[test]
    fn two_bindings_per_group() {
        let groups = digit_groups();
        let binds = group_keybinds(&groups).unwrap();
        assert_eq!(binds.len(), 2 * groups.len());
    }

    #[test]
    fn switch_and_move_bindings_cover_every_group() {
        let groups = digit_groups();
        let binds = group_keybinds(&groups).unwrap();
        for label in &groups {
            let switch = binds.iter().find(|kb| {
                kb.key == *label
                    && kb.modifier == Some(Modifier::List(vec!["modkey".to_owned()]))
            });
            let moved = binds.iter().find(|kb| {
                kb.key == *label
                    && kb.modifier
                        == Some(Modifier::List(vec![
                            "modkey".to_owned(),
                            "Shift".to_owned(),
                        ]))
            });
            assert_eq!(
                switch.unwrap().commands,
                vec![CommandCall::with_value(BaseCommand::GotoGroup, label)]
            );
            assert_eq!(
                moved.unwrap().commands,
                vec![CommandCall::with_value(BaseCommand::MoveToGroup, label)]
            );
        }
    }

    #[test]
    fn non_key_label_fails_generation() {
        let groups = vec!["1".to_owned(), "not-a-key".to_owned()];
        assert!(matches!(
            group_keybinds(&groups),
            Err(ConfigError::GroupLabelNotAKey(label)) if label == "not-a-key"
        ));
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let groups = vec!["1".to_owned(), "1".to_owned()];
        assert!(matches!(
            group_keybinds(&groups),
            Err(ConfigError::DuplicateGroupLabel(_))
        ));
    }

    #[test]
    fn empty_group_list_is_rejected() {
        assert!(matches!(group_keybinds(&[]), Err(ConfigError::NoGroups)));
    }
}
