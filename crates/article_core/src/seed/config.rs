//! Seed run configuration with typed defaults.
//!
//! Defaults live in `SeedConfig::default()`; caller input arrives as
//! `SeedOverrides` and is applied through `SeedConfig::merge`.

use crate::seed::{SeedError, SeedResult};
use std::path::PathBuf;

/// File name of the optional external record set.
pub const EXTRA_FILE_NAME: &str = "articles.extra.json";
/// Spaces per JSON nesting level.
pub const DEFAULT_INDENT: usize = 4;
pub const MAX_INDENT: usize = 16;

/// Effective configuration for one seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    /// External records merged into the output. `None` disables merging.
    pub extra_path: Option<PathBuf>,
    pub indent: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            extra_path: default_extra_path(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Caller-supplied values. Unset fields keep the base config value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedOverrides {
    pub extra_path: Option<PathBuf>,
    /// Disables the external file even when `extra_path` is set.
    pub no_extra: bool,
    pub indent: Option<usize>,
}

impl SeedConfig {
    /// Applies `overrides` on top of `self`.
    ///
    /// # Errors
    /// - `InvalidArgument` when the indent exceeds `MAX_INDENT`.
    pub fn merge(self, overrides: SeedOverrides) -> SeedResult<Self> {
        let indent = overrides.indent.unwrap_or(self.indent);
        if indent > MAX_INDENT {
            return Err(SeedError::InvalidArgument(format!(
                "indent must be <= {MAX_INDENT}, got {indent}"
            )));
        }

        let extra_path = if overrides.no_extra {
            None
        } else {
            overrides.extra_path.or(self.extra_path)
        };

        Ok(Self { extra_path, indent })
    }
}

/// `articles.extra.json` next to the running executable.
pub fn default_extra_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(EXTRA_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::{SeedConfig, SeedOverrides, DEFAULT_INDENT, EXTRA_FILE_NAME};
    use crate::seed::SeedError;
    use std::path::PathBuf;

    fn base() -> SeedConfig {
        SeedConfig {
            extra_path: Some(PathBuf::from("/opt/seed/articles.extra.json")),
            indent: DEFAULT_INDENT,
        }
    }

    #[test]
    fn default_points_next_to_executable() {
        let config = SeedConfig::default();
        assert_eq!(config.indent, 4);
        let extra = config.extra_path.expect("test binary has a parent dir");
        assert!(extra.ends_with(EXTRA_FILE_NAME));
    }

    #[test]
    fn empty_overrides_keep_base() {
        assert_eq!(base().merge(SeedOverrides::default()).unwrap(), base());
    }

    #[test]
    fn overrides_replace_set_fields() {
        let merged = base()
            .merge(SeedOverrides {
                extra_path: Some(PathBuf::from("custom.json")),
                no_extra: false,
                indent: Some(2),
            })
            .unwrap();
        assert_eq!(merged.extra_path, Some(PathBuf::from("custom.json")));
        assert_eq!(merged.indent, 2);
    }

    #[test]
    fn no_extra_wins_over_extra_path() {
        let merged = base()
            .merge(SeedOverrides {
                extra_path: Some(PathBuf::from("custom.json")),
                no_extra: true,
                indent: None,
            })
            .unwrap();
        assert_eq!(merged.extra_path, None);
    }

    #[test]
    fn oversized_indent_is_rejected() {
        let err = base()
            .merge(SeedOverrides {
                indent: Some(64),
                ..SeedOverrides::default()
            })
            .unwrap_err();
        assert!(matches!(err, SeedError::InvalidArgument(message) if message.contains("indent")));
    }
}
