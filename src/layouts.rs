use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The tiling strategies the host runtime can instantiate.
///
/// Every declared layout is parameterized by the one shared
/// [`crate::ThemeSetting`]; the layout algorithms themselves live in the
/// host runtime.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Columns,
    MonadTall,
    Floating,
}

pub const LAYOUTS: &[Layout] = &[Layout::Columns, Layout::MonadTall, Layout::Floating];

#[derive(Debug, Error)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(String);

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Columns" => Ok(Self::Columns),
            "MonadTall" => Ok(Self::MonadTall),
            "Floating" => Ok(Self::Floating),
            _ => Err(ParseLayoutError(s.to_owned())),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Columns => "Columns",
            Self::MonadTall => "MonadTall",
            Self::Floating => "Floating",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_layout() {
        for layout in LAYOUTS {
            assert_eq!(*layout, layout.to_string().parse().unwrap());
        }
    }

    #[test]
    fn unknown_layout_fails_to_parse() {
        assert!("Spiral".parse::<Layout>().is_err());
    }
}
