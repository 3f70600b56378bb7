use super::keybind::Modifier;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Button1,
    Button2,
    Button3,
    Button4,
    Button5,
}

/// What the host does while the button is held (drags) or on press
/// (clicks). All three act on floating windows only.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Drag: reposition the window under the pointer.
    MoveFloating,
    /// Drag: resize the window from its grabbed corner.
    ResizeFloating,
    /// Click: raise the window above its siblings.
    RaiseWindow,
}

/// A pointer binding, the mouse counterpart of a [`super::Keybind`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mousebind {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
    pub button: MouseButton,
    pub action: MouseAction,
}

/// The stock pointer bindings: modkey-drag to move, modkey-right-drag to
/// resize, modkey-middle-click to raise.
#[must_use]
pub fn default_mousebinds() -> Vec<Mousebind> {
    vec![
        Mousebind {
            modifier: Some("modkey".into()),
            button: MouseButton::Button1,
            action: MouseAction::MoveFloating,
        },
        Mousebind {
            modifier: Some("modkey".into()),
            button: MouseButton::Button3,
            action: MouseAction::ResizeFloating,
        },
        Mousebind {
            modifier: Some("modkey".into()),
            button: MouseButton::Button2,
            action: MouseAction::RaiseWindow,
        },
    ]
}
