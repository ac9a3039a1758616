//! Frontend stack detection from `package.json`.
//!
//! Detection is deterministic pattern matching over the merged dependency
//! table: a [`ProjectContext`] names the framework, its major version and the
//! source language, and the [`capability`] detectors add one optional label
//! per category. Both feed the [`TechFingerprint`].
//!
//! # Example
//!
//! ```
//! use stackrules::stack::{detect_capabilities, detect_context, build_fingerprint, PackageManifest};
//!
//! let manifest = PackageManifest::from_json(r#"{"dependencies": {"react": "^18.2.0"}}"#).unwrap();
//! let deps = manifest.merged_dependencies();
//! let context = detect_context(&manifest, &deps, false);
//! let capabilities = detect_capabilities(&context, &deps);
//!
//! assert_eq!(build_fingerprint(&context, &capabilities).to_string(), "react18 + css + fetch");
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod capability;
pub mod context;
pub mod fingerprint;
pub mod framework_id;
pub mod manifest;
pub mod version;

pub use capability::{detect_capabilities, CapabilitySet};
pub use context::{detect_context, ProjectContext};
pub use fingerprint::{build_fingerprint, TechFingerprint, DELIMITER, PLATFORM_PREFIX};
pub use framework_id::{FrameworkId, LanguageMode};
pub use manifest::{merge_dependencies, DependencyTable, PackageManifest};
pub use version::parse_major;
