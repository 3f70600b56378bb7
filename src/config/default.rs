use super::bar::{BarConfig, Palette, ScreenConfig, Widget, WidgetDefaults, WidgetKind, WidgetSettings};
use super::keybind::{CommandCall, Keybind};
use super::mousebind::default_mousebinds;
use super::window_rules::default_float_rules;
use super::{Config, FocusBehaviour, WindowActivation};
use crate::command::BaseCommand;
use crate::layouts::LAYOUTS;
use crate::theme_setting::ThemeSetting;

/// Dracula-ish palette; widgets refer to these colors by index.
fn default_palette() -> Palette {
    Palette(vec![
        "#282a36".to_owned(), // background               [0]
        "#44475a".to_owned(), // current line / selection [1]
        "#f8f8f2".to_owned(), // foreground               [2]
        "#6272a4".to_owned(), // comment                  [3]
        "#8be9fd".to_owned(), // cyan                     [4]
        "#50fa7b".to_owned(), // green                    [5]
        "#ffb86c".to_owned(), // orange                   [6]
        "#ff79c6".to_owned(), // pink                     [7]
        "#bd93f9".to_owned(), // purple                   [8]
        "#ff5555".to_owned(), // red                      [9]
        "#0000ff".to_owned(), // blue                     [10]
        "#f1fa8c".to_owned(), // yellow                   [11]
    ])
}

/// First screen carries the bar; the second is bare.
fn default_screens() -> Vec<ScreenConfig> {
    let widgets = vec![
        Widget::new(
            WidgetKind::CurrentLayoutIcon,
            WidgetSettings {
                background: Some(1),
                ..WidgetSettings::default()
            },
        ),
        Widget::new(
            WidgetKind::Spacer,
            WidgetSettings {
                length: Some(5),
                background: Some(0),
                ..WidgetSettings::default()
            },
        ),
        Widget::new(
            WidgetKind::GroupBox,
            WidgetSettings {
                background: Some(0),
                this_current_screen_border: Some(1),
                this_screen_border: Some(6),
                active: Some(4),
                inactive: Some(3),
                ..WidgetSettings::default()
            },
        ),
        Widget::new(
            WidgetKind::Spacer,
            WidgetSettings {
                length: Some(5),
                background: Some(0),
                ..WidgetSettings::default()
            },
        ),
        Widget::new(
            WidgetKind::WindowName,
            WidgetSettings {
                padding: Some(690),
                max_chars: Some(17),
                ..WidgetSettings::default()
            },
        ),
        Widget::new(
            WidgetKind::Volume,
            WidgetSettings {
                background: Some(0),
                foreground: Some(4),
                format: Some("  Vol: {}".to_owned()),
                ..WidgetSettings::default()
            },
        ),
        Widget::new(
            WidgetKind::Clock,
            WidgetSettings {
                format: Some("  %a,  %I:%M %p ".to_owned()),
                background: Some(0),
                foreground: Some(6),
                ..WidgetSettings::default()
            },
        ),
        Widget::new(
            WidgetKind::Systray,
            WidgetSettings {
                background: Some(0),
                padding: Some(5),
                ..WidgetSettings::default()
            },
        ),
    ];
    vec![
        ScreenConfig {
            bar: Some(BarConfig {
                height: 20,
                background: 0,
                widgets,
            }),
        },
        ScreenConfig { bar: None },
    ]
}

impl Default for Config {
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        let commands = vec![
            // Switch between windows
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::FocusWindowLeft)],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "h".to_owned(),
                description: Some("Move focus to left".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::FocusWindowRight)],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "l".to_owned(),
                description: Some("Move focus to right".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::FocusWindowDown)],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "j".to_owned(),
                description: Some("Move focus down".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::FocusWindowUp)],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "k".to_owned(),
                description: Some("Move focus up".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::FocusWindowNext)],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "space".to_owned(),
                description: Some("Move window focus to other window".to_owned()),
            },
            // Move windows around the stack. Moving out of range in the
            // Columns layout creates a new column.
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::MoveWindowLeft)],
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "h".to_owned(),
                description: Some("Move window to the left".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::MoveWindowRight)],
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "l".to_owned(),
                description: Some("Move window to the right".to_owned()),
            },
            Keybind {
                commands: vec![
                    CommandCall::new(BaseCommand::MoveWindowDown),
                    CommandCall::new(BaseCommand::MoveSectionDown),
                ],
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "j".to_owned(),
                description: Some("Move window down".to_owned()),
            },
            Keybind {
                commands: vec![
                    CommandCall::new(BaseCommand::MoveWindowUp),
                    CommandCall::new(BaseCommand::MoveSectionUp),
                ],
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "k".to_owned(),
                description: Some("Move window up".to_owned()),
            },
            // Grow windows. A window on the screen edge growing toward
            // that edge shrinks instead.
            Keybind {
                commands: vec![
                    CommandCall::new(BaseCommand::GrowWindowLeft),
                    CommandCall::new(BaseCommand::ShrinkMain),
                ],
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "h".to_owned(),
                description: Some("Grow window to the left".to_owned()),
            },
            Keybind {
                commands: vec![
                    CommandCall::new(BaseCommand::GrowWindowRight),
                    CommandCall::new(BaseCommand::GrowMain),
                ],
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "l".to_owned(),
                description: Some("Grow window to the right".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::GrowWindowDown)],
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "j".to_owned(),
                description: Some("Grow window down".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::GrowWindowUp)],
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "k".to_owned(),
                description: Some("Grow window up".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::NormalizeWindowSizes)],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "n".to_owned(),
                description: Some("Reset all window sizes".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::MaximizeWindow)],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "m".to_owned(),
                description: Some("Maximize".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::ToggleFullScreen)],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "f".to_owned(),
                description: Some("Toggle fullscreen".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::ToggleFloating)],
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "f".to_owned(),
                description: Some("Toggle floating".to_owned()),
            },
            // Mod + Return => open a terminal
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "gnome-terminal",
                )],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "Return".to_owned(),
                description: Some("Launch terminal".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::NextLayout)],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "Tab".to_owned(),
                description: Some("Toggle between layouts".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::CloseWindow)],
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "c".to_owned(),
                description: Some("Kill focused window".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::SoftReload)],
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "r".to_owned(),
                description: Some("Restart the window manager".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::new(BaseCommand::Shutdown)],
                modifier: Some(vec!["modkey".to_owned(), "Control".to_owned()].into()),
                key: "q".to_owned(),
                description: Some("Shutdown the window manager".to_owned()),
            },
            // Sound
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "amixer -c 0 sset Master 1- unmute",
                )],
                modifier: None,
                key: "XF86AudioLowerVolume".to_owned(),
                description: None,
            },
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "amixer -c 0 sset Master 1+ unmute",
                )],
                modifier: None,
                key: "XF86AudioRaiseVolume".to_owned(),
                description: None,
            },
            // Backlight
            Keybind {
                commands: vec![CommandCall::with_value(BaseCommand::Execute, "light -A 2")],
                modifier: None,
                key: "XF86MonBrightnessUp".to_owned(),
                description: None,
            },
            Keybind {
                commands: vec![CommandCall::with_value(BaseCommand::Execute, "light -U 2")],
                modifier: None,
                key: "XF86MonBrightnessDown".to_owned(),
                description: None,
            },
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "scrot -e 'mv $f ~/Pictures/Screenshots/ 2>/dev/null'",
                )],
                modifier: None,
                key: "Print".to_owned(),
                description: Some("Screenshot".to_owned()),
            },
            // Launchers and dmenu scripts
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "rofi -show drun",
                )],
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "Return".to_owned(),
                description: Some("Find desktop apps".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "bash ~/dmscripts/switch",
                )],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "s".to_owned(),
                description: Some("Switch window".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "bash ~/dmscripts/dmsearch",
                )],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "i".to_owned(),
                description: Some("Internet search".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "bash ~/dmscripts/dman",
                )],
                modifier: Some(vec!["modkey".to_owned(), "Shift".to_owned()].into()),
                key: "m".to_owned(),
                description: Some("Man pages".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "bash ~/dmscripts/dmkill",
                )],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "q".to_owned(),
                description: Some("Kill a process".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "bash ~/dmscripts/dmconf",
                )],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "e".to_owned(),
                description: Some("Edit config files".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "bash ~/dmscripts/dmscrot",
                )],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "p".to_owned(),
                description: Some("Print screen".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::with_value(
                    BaseCommand::Execute,
                    "bash ~/dmscripts/mpdmenu",
                )],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "a".to_owned(),
                description: Some("Browse music by artist".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::with_value(BaseCommand::Execute, "ytfzf -D")],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "y".to_owned(),
                description: Some("Youtube".to_owned()),
            },
            Keybind {
                commands: vec![CommandCall::with_value(BaseCommand::Execute, "clipmenu")],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "c".to_owned(),
                description: Some("Clipboard manager".to_owned()),
            },
            // GUI browser
            Keybind {
                commands: vec![CommandCall::with_value(BaseCommand::Execute, "firefox")],
                modifier: Some(vec!["modkey".to_owned()].into()),
                key: "b".to_owned(),
                description: Some("Firefox".to_owned()),
            },
        ];

        let groups = (1..=9).map(|i| i.to_string()).collect();

        Self {
            modkey: "Mod4".to_owned(), // win key
            groups,
            layouts: LAYOUTS.to_vec(),
            autostart: "~/.config/driftwm/autostart.sh".to_owned(),
            focus_behaviour: FocusBehaviour::ClickTo,
            focus_new_windows: true,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: WindowActivation::Smart,
            palette: default_palette(),
            widget_defaults: WidgetDefaults::default(),
            theme: ThemeSetting::default(),
            float_rules: default_float_rules(),
            keybind: commands,
            mousebind: default_mousebinds(),
            screens: default_screens(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    #[test]
    fn serialize_default_config() {
        let config = Config::default();
        assert!(toml::to_string(&config).is_ok());
    }

    #[test]
    fn default_groups_are_the_nine_digits() {
        let config = Config::default();
        assert_eq!(config.groups.len(), 9);
        assert_eq!(config.groups.first().map(String::as_str), Some("1"));
        assert_eq!(config.groups.last().map(String::as_str), Some("9"));
    }
}
