//! Capability detectors
//!
//! Each capability category (UI library, bundler, CSS solution, state
//! management, HTTP client) is detected by an ordered rule table evaluated
//! top to bottom against the merged dependency table. The first rule whose
//! package is present produces the category label; no match means the
//! category is omitted from the fingerprint.

use super::context::ProjectContext;
use super::manifest::DependencyTable;
use super::version::parse_major;
use serde::Serialize;
use tracing::debug;

pub mod bundler;
pub mod css;
pub mod http;
pub mod state;
pub mod ui;

pub use bundler::detect_bundler;
pub use css::detect_css;
pub use http::detect_http;
pub use state::detect_state;
pub use ui::detect_ui;

/// How a matched rule renders its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// Label used as-is
    Bare(&'static str),
    /// Label followed by the package's major version
    Versioned(&'static str),
    /// Package major version selects between two fixed labels
    Threshold {
        at_least: u32,
        above: &'static str,
        below: &'static str,
    },
}

impl LabelStyle {
    pub fn render(&self, version: &str) -> String {
        match *self {
            LabelStyle::Bare(label) => label.to_string(),
            LabelStyle::Versioned(label) => format!("{}{}", label, parse_major(Some(version))),
            LabelStyle::Threshold {
                at_least,
                above,
                below,
            } => {
                if parse_major(Some(version)) >= at_least {
                    above.to_string()
                } else {
                    below.to_string()
                }
            }
        }
    }
}

/// A single detection rule: if `package` is present, emit `label`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityRule {
    pub package: &'static str,
    pub label: LabelStyle,
}

impl CapabilityRule {
    pub const fn bare(package: &'static str, label: &'static str) -> Self {
        Self {
            package,
            label: LabelStyle::Bare(label),
        }
    }

    pub const fn versioned(package: &'static str, label: &'static str) -> Self {
        Self {
            package,
            label: LabelStyle::Versioned(label),
        }
    }
}

/// Evaluates `rules` in order and renders the first one whose package is present.
pub fn first_match(rules: &[CapabilityRule], deps: &DependencyTable) -> Option<String> {
    rules.iter().find_map(|rule| {
        deps.get(rule.package)
            .map(|version| rule.label.render(version))
    })
}

/// Labels for every capability category of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilitySet {
    pub ui: Option<String>,
    pub bundler: Option<String>,
    pub css: String,
    pub state: Option<String>,
    pub http: Option<String>,
}

impl CapabilitySet {
    /// Labels in fingerprint order, absent categories skipped.
    pub fn labels(&self) -> Vec<&str> {
        [
            self.ui.as_deref(),
            self.bundler.as_deref(),
            Some(self.css.as_str()),
            self.state.as_deref(),
            self.http.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

pub fn detect_capabilities(context: &ProjectContext, deps: &DependencyTable) -> CapabilitySet {
    let set = CapabilitySet {
        ui: detect_ui(deps),
        bundler: detect_bundler(deps),
        css: detect_css(deps),
        state: detect_state(deps),
        http: detect_http(context, deps),
    };

    debug!(
        ui = set.ui.as_deref(),
        bundler = set.bundler.as_deref(),
        css = set.css.as_str(),
        state = set.state.as_deref(),
        http = set.http.as_deref(),
        "Detected capabilities"
    );

    set
}

#[cfg(test)]
pub(crate) fn deps(entries: &[(&str, &str)]) -> DependencyTable {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_styles() {
        assert_eq!(LabelStyle::Bare("axios").render("^1.6.0"), "axios");
        assert_eq!(LabelStyle::Versioned("vite").render("^4.5.0"), "vite4");
        assert_eq!(LabelStyle::Versioned("vite").render("latest"), "vite0");

        let threshold = LabelStyle::Threshold {
            at_least: 5,
            above: "webpack5",
            below: "webpack4",
        };
        assert_eq!(threshold.render("^5.0.0"), "webpack5");
        assert_eq!(threshold.render("~4.5.0"), "webpack4");
    }

    #[test]
    fn test_first_match_respects_rule_order() {
        let rules = [
            CapabilityRule::bare("first", "first"),
            CapabilityRule::bare("second", "second"),
        ];

        let table = deps(&[("second", "1"), ("first", "1")]);
        assert_eq!(first_match(&rules, &table).as_deref(), Some("first"));

        let table = deps(&[("second", "1")]);
        assert_eq!(first_match(&rules, &table).as_deref(), Some("second"));

        assert_eq!(first_match(&rules, &deps(&[])), None);
    }

    #[test]
    fn test_labels_skip_absent_categories() {
        let set = CapabilitySet {
            ui: None,
            bundler: Some("vite5".to_string()),
            css: "css".to_string(),
            state: None,
            http: Some("fetch".to_string()),
        };

        assert_eq!(set.labels(), vec!["vite5", "css", "fetch"]);
    }
}
