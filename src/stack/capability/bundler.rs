//! Build tool detection
//!
//! Vue CLI and Create React App never list webpack directly; their own major
//! version implies which webpack generation they bundle with.

use super::{first_match, CapabilityRule, LabelStyle};
use crate::stack::manifest::DependencyTable;

/// First scaffolding major that ships webpack 5
const WEBPACK5_SCAFFOLD_MAJOR: u32 = 5;

const SCAFFOLD_WEBPACK: LabelStyle = LabelStyle::Threshold {
    at_least: WEBPACK5_SCAFFOLD_MAJOR,
    above: "webpack5",
    below: "webpack4",
};

pub const BUNDLER_RULES: &[CapabilityRule] = &[
    CapabilityRule::versioned("vite", "vite"),
    CapabilityRule {
        package: "@vue/cli-service",
        label: SCAFFOLD_WEBPACK,
    },
    CapabilityRule {
        package: "react-scripts",
        label: SCAFFOLD_WEBPACK,
    },
    CapabilityRule::versioned("webpack", "webpack"),
    CapabilityRule::versioned("rollup", "rollup"),
    CapabilityRule::versioned("parcel", "parcel"),
    CapabilityRule::bare("esbuild", "esbuild"),
];

pub fn detect_bundler(deps: &DependencyTable) -> Option<String> {
    first_match(BUNDLER_RULES, deps)
}
