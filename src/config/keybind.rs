use crate::command::BaseCommand;
use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// One deferred call into the host runtime's command surface.
///
/// Nothing is resolved at load time beyond validation; the host looks the
/// command up and runs it when the owning binding fires.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CommandCall {
    pub command: BaseCommand,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl CommandCall {
    #[must_use]
    pub fn new(command: BaseCommand) -> Self {
        Self {
            command,
            value: String::default(),
        }
    }

    #[must_use]
    pub fn with_value(command: BaseCommand, value: &str) -> Self {
        Self {
            command,
            value: value.to_owned(),
        }
    }

    /// Commands that carry an argument must not be declared without one.
    pub fn check_value(&self) -> Result<()> {
        match self.command {
            BaseCommand::Execute | BaseCommand::GotoGroup | BaseCommand::MoveToGroup
                if self.value.is_empty() =>
            {
                Err(ConfigError::MissingCommandValue {
                    command: self.command.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// A key binding: modifier set + key symbol firing one or more commands.
///
/// Most bindings fire a single command. A binding may chain several when
/// the right action differs per layout; the host runs them in order and
/// layouts ignore the calls they do not implement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keybind {
    pub commands: Vec<CommandCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Modifier::Single(single) => single.is_empty(),
            Modifier::List(list) => list.is_empty(),
        }
    }

    /// Replace the magic name `modkey` with the configured primary
    /// modifier.
    pub fn apply_modkey(&mut self, modkey: &str) {
        match self {
            Modifier::Single(m) if m == "modkey" => *m = modkey.to_owned(),
            Modifier::Single(_) => {}
            Modifier::List(ms) => {
                for m in ms {
                    if m == "modkey" {
                        *m = modkey.to_owned();
                    }
                }
            }
        }
    }
}

impl std::convert::From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{}", modifier),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modkey_substitution_only_touches_the_placeholder() {
        let mut modifier: Modifier = vec!["modkey".to_owned(), "Shift".to_owned()].into();
        modifier.apply_modkey("Mod4");
        assert_eq!(
            Vec::<String>::from(modifier),
            vec!["Mod4".to_owned(), "Shift".to_owned()]
        );
    }

    #[test]
    fn execute_without_a_command_line_is_rejected() {
        assert!(CommandCall::new(BaseCommand::Execute).check_value().is_err());
        assert!(CommandCall::with_value(BaseCommand::Execute, "firefox")
            .check_value()
            .is_ok());
        assert!(CommandCall::new(BaseCommand::CloseWindow)
            .check_value()
            .is_ok());
    }
}
