//! Configuration for rules generation
//!
//! Settings start from fixed defaults and are overridden by command-line
//! arguments. Only logging reads the environment (see [`crate::util::logging`]).

use std::fmt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_MANIFEST_FILE: &str = "package.json";
pub const DEFAULT_TYPE_CONFIG_FILE: &str = "tsconfig.json";
pub const DEFAULT_OUTPUT_FILE: &str = ".cursorrules";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Project directory does not exist: {0}")]
    ProjectDirNotFound(PathBuf),

    #[error("Project path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid {field}: {reason}")]
    InvalidFileName { field: &'static str, reason: String },
}

/// Where to read the manifest from and where to write the rules document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub project_dir: PathBuf,
    pub manifest_file: String,
    pub type_config_file: String,
    pub output_file: String,
    /// Render without writing the output file
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            type_config_file: DEFAULT_TYPE_CONFIG_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    pub fn for_project(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            ..Default::default()
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir.join(&self.manifest_file)
    }

    pub fn type_config_path(&self) -> PathBuf {
        self.project_dir.join(&self.type_config_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_dir.join(&self.output_file)
    }

    /// Checks that the project directory exists and every file name is a
    /// plain name inside it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.project_dir.exists() {
            return Err(ConfigError::ProjectDirNotFound(self.project_dir.clone()));
        }
        if !self.project_dir.is_dir() {
            return Err(ConfigError::NotADirectory(self.project_dir.clone()));
        }

        validate_file_name("manifest file", &self.manifest_file)?;
        validate_file_name("type config file", &self.type_config_file)?;
        validate_file_name("output file", &self.output_file)?;
        Ok(())
    }
}

fn validate_file_name(field: &'static str, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::InvalidFileName {
            field,
            reason: "must not be empty".to_string(),
        });
    }

    // a leading `./` still names a file in the project directory
    let mut components = Path::new(name)
        .components()
        .skip_while(|c| matches!(c, Component::CurDir));
    let is_plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !is_plain {
        return Err(ConfigError::InvalidFileName {
            field,
            reason: format!("'{}' must be a file name without directories", name),
        });
    }

    Ok(())
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stackrules Configuration:")?;
        writeln!(f, "  Project Dir: {}", self.project_dir.display())?;
        writeln!(f, "  Manifest: {}", self.manifest_file)?;
        writeln!(f, "  Type Config: {}", self.type_config_file)?;
        writeln!(f, "  Output: {}", self.output_file)?;
        writeln!(f, "  Dry Run: {}", self.dry_run)?;
        Ok(())
    }
}
