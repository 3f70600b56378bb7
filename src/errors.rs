use crate::command::BaseCommand;
use crate::config::Keybind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors surfaced by eager configuration validation.
///
/// The host runtime resolves a duplicate binding by letting the last
/// declaration win, silently. Everything here is reported at load time
/// instead, before any binding reaches the host.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("key `{0}` is not a valid key symbol")]
    UnknownKey(String),

    #[error("modifier `{0}` is not a valid modifier name")]
    UnknownModifier(String),

    #[error(
        "multiple commands bound to key combination {combo}:\
        \n    -> {first:?}\
        \n    -> {second:?}\
        \nHelp: change one of the keybindings to something else."
    )]
    BindingCollision {
        combo: String,
        first: Box<Keybind>,
        second: Box<Keybind>,
    },

    #[error("group label `{0}` does not name a key symbol")]
    GroupLabelNotAKey(String),

    #[error("duplicate group label `{0}`")]
    DuplicateGroupLabel(String),

    #[error("no groups are declared")]
    NoGroups,

    #[error("`{0}` is not a declared group")]
    UnknownGroup(String),

    #[error("command {command:?} requires a value")]
    MissingCommandValue { command: BaseCommand },

    #[error("keybind for key `{0}` has no commands")]
    EmptyKeybind(String),

    #[error("{widget} references palette color {index} but the palette holds {len} colors")]
    PaletteIndexOutOfRange {
        widget: String,
        index: usize,
        len: usize,
    },
}
