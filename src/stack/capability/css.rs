//! CSS solution detection. Always yields a label.

use super::{first_match, CapabilityRule};
use crate::stack::manifest::DependencyTable;

/// Label used when no CSS tooling is declared
pub const PLAIN_CSS: &str = "css";

pub const CSS_RULES: &[CapabilityRule] = &[
    CapabilityRule::bare("tailwindcss", "tailwind"),
    CapabilityRule::bare("unocss", "unocss"),
    CapabilityRule::bare("styled-components", "styled-components"),
    CapabilityRule::bare("@emotion/react", "emotion"),
    CapabilityRule::bare("sass", "scss"),
    CapabilityRule::bare("node-sass", "scss"),
    CapabilityRule::bare("less", "less"),
    CapabilityRule::bare("stylus", "stylus"),
];

pub fn detect_css(deps: &DependencyTable) -> String {
    first_match(CSS_RULES, deps).unwrap_or_else(|| PLAIN_CSS.to_string())
}
