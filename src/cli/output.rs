//! Console output for generation results

use anyhow::{Context, Result};

use crate::generator::{DetectionReport, GenerationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Confirmation line plus the tech stack
    Human,
    /// Detection report as pretty-printed JSON
    Json,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn format_generation(&self, report: &GenerationReport) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(self.format_generation_human(report)),
            OutputFormat::Json => self.format_detection_json(&report.detection),
        }
    }

    pub fn format_detection_json(&self, detection: &DetectionReport) -> Result<String> {
        serde_json::to_string_pretty(detection).context("Failed to serialize detection report")
    }

    fn format_generation_human(&self, report: &GenerationReport) -> String {
        let mut output = String::new();

        if report.written {
            output.push_str(&format!("✅ Generated {}\n", report.output_path.display()));
        } else {
            output.push_str(&report.document);
            output.push('\n');
        }
        output.push_str(&format!("Tech stack: {}", report.detection.fingerprint));

        output
    }
}
