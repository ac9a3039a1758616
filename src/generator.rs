//! Run orchestration: read the manifest, detect the stack, write the rules document

use crate::config::GeneratorConfig;
use crate::docs::{resolve_docs, DocReference};
use crate::rules::assemble_rules;
use crate::stack::{
    build_fingerprint, detect_capabilities, detect_context, CapabilitySet, PackageManifest,
    ProjectContext, TechFingerprint,
};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("package.json not found at {0}")]
    ManifestNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Everything detected about a project, without the rendered document
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub project_name: Option<String>,
    pub context: ProjectContext,
    pub capabilities: CapabilitySet,
    pub fingerprint: TechFingerprint,
    pub docs: Vec<DocReference>,
}

/// Outcome of a full generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub detection: DetectionReport,
    pub document: String,
    pub output_path: PathBuf,
    /// False for dry runs
    pub written: bool,
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Reads the manifest and detects the stack. Nothing is written.
    pub fn detect(&self) -> Result<DetectionReport, GenerateError> {
        let manifest = self.read_manifest()?;
        let deps = manifest.merged_dependencies();
        debug!(count = deps.len(), "Merged dependency table");

        let type_config_path = self.config.type_config_path();
        let has_type_config = type_config_path.exists();
        debug!(
            path = %type_config_path.display(),
            exists = has_type_config,
            "Checked type config"
        );

        let context = detect_context(&manifest, &deps, has_type_config);
        let capabilities = detect_capabilities(&context, &deps);
        let fingerprint = build_fingerprint(&context, &capabilities);
        let docs = resolve_docs(&fingerprint.to_string());

        Ok(DetectionReport {
            project_name: manifest.name,
            context,
            capabilities,
            fingerprint,
            docs,
        })
    }

    /// Detects the stack, renders the rules document and writes it unless
    /// this is a dry run. An existing output file is overwritten.
    pub fn run(&self) -> Result<GenerationReport, GenerateError> {
        let detection = self.detect()?;
        let document = assemble_rules(&detection.context, &detection.fingerprint);
        let output_path = self.config.output_path();

        let written = if self.config.dry_run {
            debug!(path = %output_path.display(), "Dry run, skipping write");
            false
        } else {
            fs::write(&output_path, &document).map_err(|source| GenerateError::WriteOutput {
                path: output_path.clone(),
                source,
            })?;
            info!(
                path = %output_path.display(),
                bytes = document.len(),
                "Wrote rules document"
            );
            true
        };

        Ok(GenerationReport {
            detection,
            document,
            output_path,
            written,
        })
    }

    fn read_manifest(&self) -> Result<PackageManifest, GenerateError> {
        let path = self.config.manifest_path();
        debug!(path = %path.display(), "Reading manifest");

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GenerateError::ManifestNotFound(path));
            }
            Err(source) => return Err(GenerateError::ManifestRead { path, source }),
        };

        PackageManifest::from_json(&content)
            .map_err(|source| GenerateError::ManifestParse { path, source })
    }
}
