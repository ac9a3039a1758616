//! stackrules - AI assistant rules from a frontend project's `package.json`
//!
//! The library detects a project's technology stack deterministically from its
//! dependency manifest and renders a static rules document describing it.
//!
//! # Core Concepts
//!
//! - **Project Context**: framework identity (Vue, React, uni-app), its major
//!   version and the source language mode
//! - **Capabilities**: optional UI library, bundler, CSS, state management and
//!   HTTP client labels, each found by an ordered rule table
//! - **Fingerprint**: the `" + "`-joined summary of all detected labels, e.g.
//!   `vue3 + element-plus2 + vite5 + scss + pinia2 + axios`
//! - **Documentation**: version-pinned links resolved from the fingerprint
//!
//! # Example Usage
//!
//! ```no_run
//! use stackrules::{Generator, GeneratorConfig};
//!
//! let report = Generator::new(GeneratorConfig::for_project("./web")).run()?;
//! println!("Tech stack: {}", report.detection.fingerprint);
//! # Ok::<(), stackrules::GenerateError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`stack`]: manifest parsing and stack detection
//! - [`docs`]: documentation registry and fingerprint lookup
//! - [`rules`]: rules document template
//! - [`generator`]: file I/O around detection and rendering

pub mod cli;
pub mod config;
pub mod docs;
pub mod generator;
pub mod rules;
pub mod stack;
pub mod util;

pub use config::{ConfigError, GeneratorConfig};
pub use docs::{resolve_docs, DocReference};
pub use generator::{DetectionReport, GenerateError, GenerationReport, Generator};
pub use rules::assemble_rules;
pub use stack::{ProjectContext, TechFingerprint};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
