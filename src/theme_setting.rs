use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Appearance parameters shared by every declared layout.
///
/// This is a plain value object: the host reads it once per layout pass,
/// so changing it changes the rendered parameters of all layouts at the
/// same time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeSetting {
    pub border_width: i32,
    pub margin: CustomMargins,
    pub focused_border_color: String,
    pub default_border_color: String,
}

impl ThemeSetting {
    /// Replace this theme with the one at `path`, keeping the current
    /// values if the file cannot be read or parsed.
    pub fn load(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match load_theme_file(path) {
            Ok(theme) => *self = theme,
            Err(err) => {
                log::error!("Could not load theme at path {}: {}", path.display(), err);
            }
        }
    }
}

impl Default for ThemeSetting {
    fn default() -> Self {
        ThemeSetting {
            border_width: 3,
            margin: CustomMargins::Int(10),
            focused_border_color: "#5e81ac".to_owned(),
            default_border_color: "#3b4252".to_owned(),
        }
    }
}

fn load_theme_file(path: impl AsRef<Path>) -> Result<ThemeSetting> {
    let contents = fs::read_to_string(path)?;
    let from_file: ThemeSetting = toml::from_str(&contents)?;
    Ok(from_file)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum CustomMargins {
    Int(u32),
    // format: [top, right, bottom, left] as per HTML
    Vec(Vec<u32>),
}

/// Pixel margins around a tiled window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    #[must_use]
    pub const fn new_from_pair(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    #[must_use]
    pub const fn new_from_triple(top: u32, horizontal: u32, bottom: u32) -> Self {
        Self {
            top,
            right: horizontal,
            bottom,
            left: horizontal,
        }
    }
}

impl std::convert::TryFrom<CustomMargins> for Margins {
    type Error = &'static str;

    fn try_from(c: CustomMargins) -> Result<Self, Self::Error> {
        match c {
            CustomMargins::Int(size) => Ok(Self::new(size)),
            CustomMargins::Vec(vec) => match vec.len() {
                1 => Ok(Self::new(vec[0])),
                2 => Ok(Self::new_from_pair(vec[0], vec[1])),
                3 => Ok(Self::new_from_triple(vec[0], vec[1], vec[2])),
                4 => Ok(Self {
                    top: vec[0],
                    right: vec[1],
                    bottom: vec[2],
                    left: vec[3],
                }),
                0 => Err("Empty margin array"),
                _ => Err("Too many entries in margin array"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_custom_theme() {
        let config = r#"
border_width = 1
margin = 5
focused_border_color = '#FFB53A'
default_border_color = '#222222'
"#;
        let theme: ThemeSetting = toml::from_str(config).unwrap();

        assert_eq!(
            theme,
            ThemeSetting {
                border_width: 1,
                margin: CustomMargins::Int(5),
                focused_border_color: "#FFB53A".to_string(),
                default_border_color: "#222222".to_string(),
            }
        );
    }

    #[test]
    fn margins_from_array() {
        let margins: Margins = CustomMargins::Vec(vec![1, 2, 3, 4]).try_into().unwrap();
        assert_eq!(
            margins,
            Margins {
                top: 1,
                right: 2,
                bottom: 3,
                left: 4,
            }
        );
        assert!(Margins::try_from(CustomMargins::Vec(vec![])).is_err());
        assert!(Margins::try_from(CustomMargins::Vec(vec![1, 2, 3, 4, 5])).is_err());
    }
}
