//! Framework, major version and language mode detection

use super::framework_id::{FrameworkId, LanguageMode};
use super::manifest::{DependencyTable, PackageManifest};
use super::version::parse_major;
use serde::Serialize;
use tracing::debug;

/// Packages that mark a project as uni-app
const UNI_APP_MARKERS: &[&str] = &[
    "@dcloudio/uni-app",
    "@dcloudio/uni-h5",
    "@dcloudio/vite-plugin-uni",
    "@dcloudio/uni-mp-weixin",
];

/// uni-app projects without an explicit `vue` dependency are Vue 2 based
const UNI_APP_DEFAULT_MAJOR: u32 = 2;

/// Build-target keywords searched for in `scripts` entries, in priority order
const PLATFORM_KEYWORDS: &[(&str, &str)] = &[
    ("mp-weixin", "WeChat Mini Program"),
    ("mp-alipay", "Alipay Mini Program"),
    ("mp-baidu", "Baidu Smart Program"),
    ("mp-toutiao", "ByteDance Mini Program"),
    ("mp-qq", "QQ Mini Program"),
    ("app-plus", "Native App"),
    ("h5", "H5"),
];

const TYPESCRIPT_PACKAGE: &str = "typescript";

/// Detected project identity. Exactly one is produced per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectContext {
    pub framework: FrameworkId,
    pub major: u32,
    pub language: LanguageMode,
    pub platform: Option<String>,
    pub platform_name: Option<String>,
}

impl ProjectContext {
    pub fn is_typescript(&self) -> bool {
        self.language == LanguageMode::TypeScript
    }
}

/// Decides the framework identity. The first matching rule wins:
/// uni-app markers, then `vue`, then `react`, otherwise unknown.
///
/// `has_type_config` reports whether a `tsconfig.json` exists next to the
/// manifest.
pub fn detect_context(
    manifest: &PackageManifest,
    deps: &DependencyTable,
    has_type_config: bool,
) -> ProjectContext {
    let language = detect_language(deps, has_type_config);

    let (framework, major, platform) = if UNI_APP_MARKERS.iter().any(|m| deps.contains_key(*m)) {
        let major = deps
            .get("vue")
            .map(|v| parse_major(Some(v)))
            .unwrap_or(UNI_APP_DEFAULT_MAJOR);
        (FrameworkId::UniApp, major, detect_platform(manifest))
    } else if let Some(version) = deps.get("vue") {
        (FrameworkId::Vue, parse_major(Some(version)), None)
    } else if let Some(version) = deps.get("react") {
        (FrameworkId::React, parse_major(Some(version)), None)
    } else {
        (FrameworkId::Unknown, 0, None)
    };

    let (platform, platform_name) = match platform {
        Some((keyword, name)) => (Some(keyword.to_string()), Some(name.to_string())),
        None => (None, None),
    };

    debug!(
        framework = %framework,
        major,
        language = %language,
        platform = platform.as_deref(),
        "Detected project context"
    );

    ProjectContext {
        framework,
        major,
        language,
        platform,
        platform_name,
    }
}

fn detect_language(deps: &DependencyTable, has_type_config: bool) -> LanguageMode {
    if deps.contains_key(TYPESCRIPT_PACKAGE) || has_type_config {
        LanguageMode::TypeScript
    } else {
        LanguageMode::JavaScript
    }
}

/// Searches script names and commands alike, so `"dev:h5": "uni"` counts.
fn detect_platform(manifest: &PackageManifest) -> Option<(&'static str, &'static str)> {
    PLATFORM_KEYWORDS.iter().copied().find(|(keyword, _)| {
        manifest
            .scripts
            .iter()
            .any(|(name, command)| name.contains(keyword) || command.contains(keyword))
    })
}
