//! Shared configuration loader for the blockkit toolchain.
//!
//! `defaults/blockkit.default.toml` is embedded into every binary, so the
//! documented defaults and the runtime defaults cannot drift apart. Callers
//! layer `blockkit.toml` files and CLI overrides on top through [`Loader`]
//! before deserializing into [`BlockkitConfig`].

use blockkit::ParseOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/blockkit.default.toml");

/// Name of the optional per-directory config file picked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "blockkit.toml";

/// Top-level configuration consumed by blockkit applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockkitConfig {
    pub parse: ParseConfig,
    pub output: OutputConfig,
}

/// Markdown extensions handed to the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub strikethrough: bool,
    pub table: bool,
    pub autolink: bool,
}

impl From<ParseConfig> for ParseOptions {
    fn from(config: ParseConfig) -> Self {
        ParseOptions::from(&config)
    }
}

impl From<&ParseConfig> for ParseOptions {
    fn from(config: &ParseConfig) -> Self {
        ParseOptions {
            strikethrough: config.strikethrough,
            table: config.table,
            autolink: config.autolink,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

/// Builds a [`BlockkitConfig`] from the embedded defaults plus any number of
/// TOML files and single-key overrides, later layers winning.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `blockkit.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file that must exist, such as the path given to `--config`.
    /// A missing file surfaces as an error from [`Loader::build`].
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file that may be absent, such as `./blockkit.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Force one dotted key, e.g. `output.pretty` when `--pretty` is passed.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all layers and deserialize. Unknown keys are ignored; a value of
    /// the wrong type is an error.
    pub fn build(self) -> Result<BlockkitConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults on their own.
pub fn load_defaults() -> Result<BlockkitConfig, ConfigError> {
    Loader::new().build()
}
