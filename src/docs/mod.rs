//! Documentation resolution for a tech fingerprint.
//!
//! Fingerprint segments are parsed back into `(library, major)` pairs and
//! looked up in the static [`registry`]. Segments that cannot be parsed, and
//! pairs the registry does not know, are dropped without error.

pub mod registry;

use crate::stack::fingerprint::{DELIMITER, PLATFORM_PREFIX};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

/// Tailwind labels carry no version; its docs are pinned to this major
const TAILWIND_DEFAULT_MAJOR: u32 = 3;

static PARENTHESIZED_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z][a-z0-9-]*)\([a-z]*(\d+)\)$").expect("valid regex"));

static TRAILING_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z][a-z0-9-]*?)(\d+)$").expect("valid regex"));

/// A resolved documentation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocReference {
    pub library: String,
    pub major: u32,
    pub url: &'static str,
}

impl DocReference {
    pub fn to_line(&self) -> String {
        format!("- {} {}: {}", self.library, self.major, self.url)
    }
}

/// Recovers `(library, major)` from a single fingerprint segment.
pub fn parse_segment(segment: &str) -> Option<(String, u32)> {
    let segment = segment.trim();

    if segment.starts_with(PLATFORM_PREFIX) {
        return None;
    }

    if segment == "tailwind" {
        return Some(("tailwind".to_string(), TAILWIND_DEFAULT_MAJOR));
    }

    let captures = PARENTHESIZED_VERSION
        .captures(segment)
        .or_else(|| TRAILING_VERSION.captures(segment))?;

    let major = captures[2].parse::<u32>().ok()?;
    Some((captures[1].to_string(), major))
}

/// Resolves documentation links for every segment of `fingerprint`, in segment order.
pub fn resolve_docs(fingerprint: &str) -> Vec<DocReference> {
    fingerprint
        .split(DELIMITER)
        .filter_map(|segment| {
            let (library, major) = parse_segment(segment)?;
            let url = registry::lookup(&library, major);
            trace!(segment, library = library.as_str(), major, found = url.is_some(), "Doc lookup");
            Some(DocReference {
                library,
                major,
                url: url?,
            })
        })
        .collect()
}

pub fn render_docs(docs: &[DocReference]) -> Vec<String> {
    docs.iter().map(DocReference::to_line).collect()
}
