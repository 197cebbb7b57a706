//! Configuration to acknowledge project preferences as well as set defaults.
//!
//! Specifically, we try to find a dirtocgen.toml, and if present we load settings from there.
//! This provides the depth limits of the generated tables of contents and whether hidden
//! entries are listed. Command line flags override whatever the file says.

use crate::error::{Result, TocError};
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Settings file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "dirtocgen.toml";

#[derive(Facet, Clone, Debug, Default, PartialEq, Eq)]
/// Project preferences loaded from dirtocgen.toml or falling back to defaults.
pub struct Config {
    #[facet(default)]
    /// Deepest level listed in the root directory's table of contents.
    pub root_toc_max_depth: Option<usize>,
    #[facet(default)]
    /// Deepest level listed in every other directory's table of contents.
    pub toc_max_depth: Option<usize>,
    #[facet(default)]
    /// List entries with a dot-prefixed segment instead of skipping them.
    pub include_hidden: bool,
}

impl Config {
    /// Load configuration from `path`, or from dirtocgen.toml if no path is given.
    ///
    /// A missing default file yields the defaults; an explicitly named file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let target = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        match fs::read_to_string(target) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound && path.is_none() => Ok(Self::default()),
            Err(source) => Err(TocError::Io {
                path: target.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::Config`] if the text is not valid configuration.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| TocError::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
