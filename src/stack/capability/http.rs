//! HTTP client detection
//!
//! uni-app projects default to the platform request API; every other project
//! falls back through explicit clients, query libraries and finally `fetch`.

use super::{first_match, CapabilityRule};
use crate::stack::context::ProjectContext;
use crate::stack::framework_id::FrameworkId;
use crate::stack::manifest::DependencyTable;

pub const UNI_REQUEST: &str = "uni.request";
pub const GENERIC_FETCH: &str = "fetch";

pub const EXPLICIT_CLIENT_RULES: &[CapabilityRule] = &[
    CapabilityRule::bare("axios", "axios"),
    CapabilityRule::bare("ky", "ky"),
    CapabilityRule::bare("luch-request", "luch-request"),
];

pub const QUERY_LIBRARY_RULES: &[CapabilityRule] = &[
    CapabilityRule::versioned("@tanstack/react-query", "tanstack-query"),
    CapabilityRule::versioned("@tanstack/vue-query", "tanstack-query"),
    CapabilityRule::bare("swr", "swr"),
];

pub fn detect_http(context: &ProjectContext, deps: &DependencyTable) -> Option<String> {
    if let Some(label) = first_match(EXPLICIT_CLIENT_RULES, deps) {
        return Some(label);
    }

    if context.framework == FrameworkId::UniApp {
        return Some(UNI_REQUEST.to_string());
    }

    Some(first_match(QUERY_LIBRARY_RULES, deps).unwrap_or_else(|| GENERIC_FETCH.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::capability::deps;
    use crate::stack::framework_id::LanguageMode;

    fn context(framework: FrameworkId) -> ProjectContext {
        ProjectContext {
            framework,
            major: 3,
            language: LanguageMode::JavaScript,
            platform: None,
            platform_name: None,
        }
    }

    #[test]
    fn test_uni_app_prefers_platform_request() {
        let table = deps(&[("@dcloudio/uni-app", "^2.0.0"), ("swr", "^2.0.0")]);
        assert_eq!(
            detect_http(&context(FrameworkId::UniApp), &table).as_deref(),
            Some(UNI_REQUEST)
        );
    }

    #[test]
    fn test_uni_app_explicit_client_overrides() {
        let table = deps(&[("@dcloudio/uni-app", "^2.0.0"), ("luch-request", "^3.1.0")]);
        assert_eq!(
            detect_http(&context(FrameworkId::UniApp), &table).as_deref(),
            Some("luch-request")
        );
    }

    #[test]
    fn test_explicit_client_outranks_query_library() {
        let table = deps(&[("@tanstack/react-query", "^5.0.0"), ("axios", "^1.6.0")]);
        assert_eq!(
            detect_http(&context(FrameworkId::React), &table).as_deref(),
            Some("axios")
        );
    }

    #[test]
    fn test_query_library() {
        let table = deps(&[("@tanstack/vue-query", "^5.17.0")]);
        assert_eq!(
            detect_http(&context(FrameworkId::Vue), &table).as_deref(),
            Some("tanstack-query5")
        );

        let table = deps(&[("swr", "^2.2.0")]);
        assert_eq!(
            detect_http(&context(FrameworkId::React), &table).as_deref(),
            Some("swr")
        );
    }

    #[test]
    fn test_fetch_fallback() {
        assert_eq!(
            detect_http(&context(FrameworkId::Unknown), &deps(&[])).as_deref(),
            Some(GENERIC_FETCH)
        );
    }
}
