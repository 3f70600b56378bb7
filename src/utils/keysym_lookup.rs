//! Mapping of configuration key and modifier names onto X key symbols and
//! modifier masks.
//!
//! Bindings are declared with the textual keysym names `xev` reports
//! ("Return", "XF86AudioRaiseVolume", "a"). Everything here is resolved
//! eagerly so a typo is a load-time error rather than an unbound key.

use x11_dl::keysym;
use x11_dl::xlib;

pub type XKeysym = u32;
pub type ModMask = u32;

/// Resolve a configuration key name to an X keysym.
#[must_use]
pub fn into_keysym(key: &str) -> Option<XKeysym> {
    let sym = match key {
        "Return" => keysym::XK_Return,
        "Tab" => keysym::XK_Tab,
        "space" => keysym::XK_space,
        "Escape" => keysym::XK_Escape,
        "BackSpace" => keysym::XK_BackSpace,
        "Delete" => keysym::XK_Delete,
        "Insert" => keysym::XK_Insert,
        "Home" => keysym::XK_Home,
        "End" => keysym::XK_End,
        "Prior" => keysym::XK_Prior,
        "Next" => keysym::XK_Next,
        "Up" => keysym::XK_Up,
        "Down" => keysym::XK_Down,
        "Left" => keysym::XK_Left,
        "Right" => keysym::XK_Right,
        "Print" => keysym::XK_Print,
        "F1" => keysym::XK_F1,
        "F2" => keysym::XK_F2,
        "F3" => keysym::XK_F3,
        "F4" => keysym::XK_F4,
        "F5" => keysym::XK_F5,
        "F6" => keysym::XK_F6,
        "F7" => keysym::XK_F7,
        "F8" => keysym::XK_F8,
        "F9" => keysym::XK_F9,
        "F10" => keysym::XK_F10,
        "F11" => keysym::XK_F11,
        "F12" => keysym::XK_F12,
        "XF86AudioRaiseVolume" => keysym::XF86XK_AudioRaiseVolume,
        "XF86AudioLowerVolume" => keysym::XF86XK_AudioLowerVolume,
        "XF86AudioMute" => keysym::XF86XK_AudioMute,
        "XF86AudioPlay" => keysym::XF86XK_AudioPlay,
        "XF86AudioNext" => keysym::XF86XK_AudioNext,
        "XF86AudioPrev" => keysym::XF86XK_AudioPrev,
        "XF86MonBrightnessUp" => keysym::XF86XK_MonBrightnessUp,
        "XF86MonBrightnessDown" => keysym::XF86XK_MonBrightnessDown,
        // Latin-1 keysyms coincide with their character codes.
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if (' '..='\u{ff}').contains(&c) => c as u32,
                _ => return None,
            }
        }
    };
    Some(sym)
}

/// Resolve a single modifier name to its X modifier mask. Unknown names
/// map to zero; `into_modmask` callers must reject those beforehand.
#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => xlib::ShiftMask,
        "Control" => xlib::ControlMask,
        "Mod1" | "Alt" => xlib::Mod1Mask,
        "Mod3" => xlib::Mod3Mask,
        "Mod4" | "Super" => xlib::Mod4Mask,
        "Mod5" => xlib::Mod5Mask,
        _ => 0,
    }
}

/// Fold a modifier set into one mask.
#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = 0;
    for key in keys {
        mask |= into_mod(key);
    }
    // Numlock and caps lock never participate in a binding.
    mask & !(xlib::Mod2Mask | xlib::LockMask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_single_char_keys_resolve() {
        assert_eq!(into_keysym("Return"), Some(keysym::XK_Return));
        assert_eq!(into_keysym("1"), Some(keysym::XK_1));
        assert_eq!(into_keysym("h"), Some(keysym::XK_h));
        assert_eq!(
            into_keysym("XF86AudioRaiseVolume"),
            Some(keysym::XF86XK_AudioRaiseVolume)
        );
    }

    #[test]
    fn unknown_keys_do_not_resolve() {
        assert_eq!(into_keysym("NotAKey"), None);
        assert_eq!(into_keysym(""), None);
    }

    #[test]
    fn modifier_aliases_share_a_mask() {
        assert_eq!(into_mod("Mod4"), into_mod("Super"));
        assert_eq!(into_mod("Mod1"), into_mod("Alt"));
        assert_eq!(into_mod("hyper"), 0);
    }

    #[test]
    fn modmask_strips_lock_modifiers() {
        let mask = into_modmask(&["Mod4".to_owned(), "Shift".to_owned()]);
        assert_eq!(mask, xlib::Mod4Mask | xlib::ShiftMask);
        assert_eq!(mask & xlib::Mod2Mask, 0);
    }
}
