//! Tech fingerprint: the one-line stack summary

use super::capability::CapabilitySet;
use super::context::ProjectContext;
use super::framework_id::FrameworkId;
use serde::{Serialize, Serializer};
use std::fmt;

pub const DELIMITER: &str = " + ";

/// Prefix of the optional uni-app target platform segment
pub const PLATFORM_PREFIX: &str = "platform:";

/// Ordered stack labels: framework, platform, UI, bundler, CSS, state, HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechFingerprint {
    segments: Vec<String>,
}

impl fmt::Display for TechFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(DELIMITER))
    }
}

impl Serialize for TechFingerprint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

pub fn framework_label(context: &ProjectContext) -> String {
    match context.framework {
        FrameworkId::Vue => format!("vue{}", context.major),
        FrameworkId::React => format!("react{}", context.major),
        FrameworkId::UniApp => format!("uni-app(vue{})", context.major),
        FrameworkId::Unknown => "unknown".to_string(),
    }
}

pub fn build_fingerprint(context: &ProjectContext, capabilities: &CapabilitySet) -> TechFingerprint {
    let mut segments = vec![framework_label(context)];

    if context.framework == FrameworkId::UniApp {
        if let Some(name) = &context.platform_name {
            segments.push(format!("{}{}", PLATFORM_PREFIX, name));
        }
    }

    for label in capabilities.labels() {
        // labels are distinct per category, but keep the no-repeat guarantee explicit
        if !segments.iter().any(|s| s == label) {
            segments.push(label.to_string());
        }
    }

    TechFingerprint { segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::framework_id::LanguageMode;

    fn context(framework: FrameworkId, major: u32) -> ProjectContext {
        ProjectContext {
            framework,
            major,
            language: LanguageMode::JavaScript,
            platform: None,
            platform_name: None,
        }
    }

    fn capabilities() -> CapabilitySet {
        CapabilitySet {
            ui: None,
            bundler: Some("vite5".to_string()),
            css: "scss".to_string(),
            state: None,
            http: Some("uni.request".to_string()),
        }
    }

    #[test]
    fn test_framework_labels() {
        assert_eq!(framework_label(&context(FrameworkId::Vue, 3)), "vue3");
        assert_eq!(framework_label(&context(FrameworkId::React, 18)), "react18");
        assert_eq!(framework_label(&context(FrameworkId::UniApp, 2)), "uni-app(vue2)");
        assert_eq!(framework_label(&context(FrameworkId::Unknown, 0)), "unknown");
    }

    #[test]
    fn test_uni_app_platform_segment() {
        let mut ctx = context(FrameworkId::UniApp, 3);
        ctx.platform = Some("mp-weixin".to_string());
        ctx.platform_name = Some("WeChat Mini Program".to_string());

        let fingerprint = build_fingerprint(&ctx, &capabilities());
        assert_eq!(
            fingerprint.to_string(),
            "uni-app(vue3) + platform:WeChat Mini Program + vite5 + scss + uni.request"
        );
    }

    #[test]
    fn test_uni_app_without_platform() {
        let fingerprint = build_fingerprint(&context(FrameworkId::UniApp, 3), &capabilities());
        assert_eq!(fingerprint.to_string(), "uni-app(vue3) + vite5 + scss + uni.request");
    }

    #[test]
    fn test_serializes_as_string() {
        let fingerprint = build_fingerprint(&context(FrameworkId::Vue, 3), &capabilities());
        assert_eq!(
            serde_json::to_string(&fingerprint).unwrap(),
            "\"vue3 + vite5 + scss + uni.request\""
        );
    }
}
