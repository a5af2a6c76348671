//! Typed argument schemas for each tool.
//!
//! Actions carry a flat string-to-string bag. Each tool converts that bag
//! into its own struct up front, so validation happens in one place and the
//! tool body works with named fields.

use std::collections::HashMap;

use crate::ToolError;

/// The untyped argument bag attached to an action.
pub type Args = HashMap<String, String>;

/// Extension used by `filesystem.search` when none is given.
pub const WILDCARD_EXTENSION: &str = "*";

/// Arguments for `apps.open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAppArgs {
    pub app_name: String,
}

impl TryFrom<&Args> for OpenAppArgs {
    type Error = ToolError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let app_name = non_empty(args, "app_name").ok_or(ToolError::MissingArgument("app_name"))?;
        Ok(Self {
            app_name: app_name.to_string(),
        })
    }
}

/// Arguments for `filesystem.search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
    /// File extension without the leading dot. `None` searches every extension.
    pub extension: Option<String>,
}

impl SearchArgs {
    /// The filename glob handed to the search command, e.g. `*.pdf`.
    pub fn pattern(&self) -> String {
        let extension = self.extension.as_deref().unwrap_or(WILDCARD_EXTENSION);
        format!("*.{extension}")
    }
}

impl From<&Args> for SearchArgs {
    fn from(args: &Args) -> Self {
        Self {
            extension: non_empty(args, "extension").map(str::to_string),
        }
    }
}

/// Arguments for `system.info`. The tool takes none; anything supplied is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemInfoArgs;

impl From<&Args> for SystemInfoArgs {
    fn from(_: &Args) -> Self {
        Self
    }
}

/// Look up `key`, treating an empty value the same as an absent one.
fn non_empty<'a>(args: &'a Args, key: &str) -> Option<&'a str> {
    args.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> Args {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn open_app_requires_app_name() {
        let err = OpenAppArgs::try_from(&Args::new()).unwrap_err();
        assert!(matches!(err, ToolError::MissingArgument("app_name")));
    }

    #[test]
    fn open_app_rejects_empty_app_name() {
        let err = OpenAppArgs::try_from(&args(&[("app_name", "")])).unwrap_err();
        assert!(matches!(err, ToolError::MissingArgument("app_name")));
    }

    #[test]
    fn open_app_reads_app_name() {
        let parsed = OpenAppArgs::try_from(&args(&[("app_name", "Safari")])).unwrap();
        assert_eq!(parsed.app_name, "Safari");
    }

    #[test]
    fn search_defaults_to_wildcard() {
        assert_eq!(SearchArgs::from(&Args::new()).pattern(), "*.*");
        assert_eq!(SearchArgs::from(&args(&[("extension", "")])).pattern(), "*.*");
    }

    #[test]
    fn search_uses_given_extension() {
        let parsed = SearchArgs::from(&args(&[("extension", "pdf")]));
        assert_eq!(parsed.extension.as_deref(), Some("pdf"));
        assert_eq!(parsed.pattern(), "*.pdf");
    }

    #[test]
    fn system_info_ignores_arguments() {
        let parsed = SystemInfoArgs::from(&args(&[("verbose", "yes")]));
        assert_eq!(parsed, SystemInfoArgs);
    }
}
