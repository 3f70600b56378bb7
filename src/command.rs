use serde::{Deserialize, Serialize};

/// A command exposed by the host runtime.
///
/// A keybinding stores one of these together with an optional string value;
/// the host resolves and executes the command only when the binding fires,
/// never at configuration-load time. Commands a layout does not implement
/// are ignored by the host, which is why some bindings chain several of
/// them (see [`crate::config::Keybind`]).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    /// Shell out to an external program. The value is the command line;
    /// the spawn is fire-and-forget and its exit status is not observed.
    Execute,
    CloseWindow,
    ToggleFullScreen,
    ToggleFloating,
    FocusWindowLeft,
    FocusWindowRight,
    FocusWindowUp,
    FocusWindowDown,
    /// Cycle focus to the next window in the current layout's order.
    FocusWindowNext,
    MoveWindowLeft,
    MoveWindowRight,
    MoveWindowUp,
    MoveWindowDown,
    /// Move the focused window into the section below it. Only layouts
    /// with window sections respond to this.
    MoveSectionDown,
    MoveSectionUp,
    GrowWindowLeft,
    GrowWindowRight,
    GrowWindowUp,
    GrowWindowDown,
    /// Shrink the main pane. The fallback for layouts that only size
    /// their main area.
    ShrinkMain,
    GrowMain,
    /// Reset every window in the current group to its layout-given size.
    NormalizeWindowSizes,
    MaximizeWindow,
    NextLayout,
    /// Activate the group named by the value on the current screen.
    GotoGroup,
    /// Move the focused window to the group named by the value, then
    /// activate that group.
    MoveToGroup,
    SoftReload,
    Shutdown,
}
