use serde::{Deserialize, Serialize};

/// Identifying properties of a newly mapped window, as reported by the
/// host runtime (`WM_CLASS` and `_NET_WM_NAME` in X11 terms).
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct WindowIdent {
    pub res_class: Option<String>,
    pub name: Option<String>,
}

impl WindowIdent {
    #[must_use]
    pub fn with_class(class: &str) -> Self {
        Self {
            res_class: Some(class.to_owned()),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Self {
            res_class: None,
            name: Some(name.to_owned()),
        }
    }
}

/// A single floating-classification rule.
///
/// Matching is exact; window titles with dynamic suffixes intentionally do
/// not match a `ByName` rule for their static prefix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum FloatRule {
    /// Float windows whose class equals the value.
    ByClass(String),
    /// Float windows whose name/title equals the value.
    ByName(String),
}

impl FloatRule {
    #[must_use]
    pub fn matches(&self, window: &WindowIdent) -> bool {
        match self {
            Self::ByClass(class) => window.res_class.as_deref() == Some(class.as_str()),
            Self::ByName(name) => window.name.as_deref() == Some(name.as_str()),
        }
    }
}

/// Any rule matching is sufficient: the rule list is a logical OR, so its
/// order affects evaluation cost only, never the outcome.
#[must_use]
pub fn should_float(rules: &[FloatRule], window: &WindowIdent) -> bool {
    rules.iter().any(|rule| rule.matches(window))
}

/// The stock rule set: session dialogs, gitk's transient windows, and GPG
/// and SSH passphrase prompts all float.
#[must_use]
pub fn default_float_rules() -> Vec<FloatRule> {
    let classes = [
        "confirm",
        "tor",
        "dialog",
        "download",
        "error",
        "file_progress",
        "notification",
        "splash",
        "toolbar",
        "confirmreset",
        "makebranch",
        "maketag",
    ];
    let names = ["branchdialog", "pinentry", "ssh-askpass"];
    classes
        .iter()
        .map(|class| FloatRule::ByClass((*class).to_owned()))
        .chain(names.iter().map(|name| FloatRule::ByName((*name).to_owned())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stock_class_and_name_floats() {
        let rules = default_float_rules();
        for class in [
            "confirm",
            "tor",
            "dialog",
            "download",
            "error",
            "file_progress",
            "notification",
            "splash",
            "toolbar",
            "confirmreset",
            "makebranch",
            "maketag",
        ] {
            assert!(
                should_float(&rules, &WindowIdent::with_class(class)),
                "class `{}` should float",
                class
            );
        }
        for name in ["branchdialog", "pinentry", "ssh-askpass"] {
            assert!(
                should_float(&rules, &WindowIdent::with_name(name)),
                "name `{}` should float",
                name
            );
        }
    }

    #[test]
    fn unmatched_windows_tile() {
        let rules = default_float_rules();
        assert!(!should_float(&rules, &WindowIdent::with_class("firefox")));
        assert!(!should_float(&rules, &WindowIdent::default()));
    }

    #[test]
    fn matching_is_exact_not_substring() {
        let rules = default_float_rules();
        assert!(!should_float(
            &rules,
            &WindowIdent::with_name("pinentry-gtk-2")
        ));
        assert!(!should_float(&rules, &WindowIdent::with_class("dialogs")));
    }

    #[test]
    fn class_rules_do_not_match_names() {
        let rules = vec![FloatRule::ByClass("pinentry".to_owned())];
        assert!(!should_float(&rules, &WindowIdent::with_name("pinentry")));
    }
}
