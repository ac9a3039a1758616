use stackrules::stack::{
    build_fingerprint, detect_capabilities, detect_context, FrameworkId, LanguageMode,
    PackageManifest,
};
use stackrules::{resolve_docs, Generator, GeneratorConfig};
use std::fs;
use tempfile::TempDir;
use yare::parameterized;

fn fingerprint_of(manifest: &str, has_type_config: bool) -> String {
    let manifest = PackageManifest::from_json(manifest).unwrap();
    let deps = manifest.merged_dependencies();
    let context = detect_context(&manifest, &deps, has_type_config);
    build_fingerprint(&context, &detect_capabilities(&context, &deps)).to_string()
}

#[test]
fn test_six_category_vue2_fingerprint() {
    let fingerprint = fingerprint_of(
        r#"{"dependencies": {
            "vue": "^2.6.0",
            "element-ui": "^2.15.0",
            "vite": "^4.0.0",
            "tailwindcss": "*",
            "pinia": "^2.0.0",
            "axios": "^1.0.0"
        }}"#,
        false,
    );

    assert_eq!(fingerprint, "vue2 + element-ui2 + vite4 + tailwind + pinia2 + axios");
}

#[test]
fn test_react_only_fingerprint() {
    assert_eq!(
        fingerprint_of(r#"{"dependencies": {"react": "^18.2.0"}}"#, false),
        "react18 + css + fetch"
    );
}

#[test]
fn test_vue3_typescript_context() {
    let manifest = PackageManifest::from_json(r#"{"dependencies": {"vue": "^3.4.0"}}"#).unwrap();
    let deps = manifest.merged_dependencies();
    let context = detect_context(&manifest, &deps, true);

    assert_eq!(context.framework, FrameworkId::Vue);
    assert_eq!(context.major, 3);
    assert_eq!(context.language, LanguageMode::TypeScript);
    assert!(fingerprint_of(r#"{"dependencies": {"vue": "^3.4.0"}}"#, true).starts_with("vue3"));
}

#[parameterized(
    vue_cli_project = {
        r#"{"dependencies": {"vue": "^2.6.14", "vuex": "^3.6.2", "ant-design-vue": "^1.7.8"}, "devDependencies": {"@vue/cli-service": "~4.5.0", "less": "^3.0.4"}}"#,
        "vue2 + ant-design-vue1 + webpack4 + less + vuex3 + fetch"
    },
    cra_project = {
        r#"{"dependencies": {"react": "^18.2.0", "react-scripts": "5.0.1", "@reduxjs/toolkit": "^1.9.5", "@mui/material": "^5.14.0", "@emotion/react": "^11.11.0"}}"#,
        "react18 + mui5 + webpack5 + emotion + redux-toolkit1 + fetch"
    },
    query_project = {
        r#"{"dependencies": {"react": "^19.0.0", "@tanstack/react-query": "^5.59.0", "zustand": "^5.0.0"}, "devDependencies": {"vite": "^6.0.0", "unocss": "^0.65.0"}}"#,
        "react19 + vite6 + unocss + zustand5 + tanstack-query5"
    },
    uni_app_vue2 = {
        r#"{"dependencies": {"@dcloudio/uni-app": "^2.0.2", "uview-ui": "^2.0.36"}, "devDependencies": {"sass": "^1.56.0"}, "scripts": {"build:h5": "uni build -p h5"}}"#,
        "uni-app(vue2) + platform:H5 + uview-ui2 + scss + uni.request"
    },
    unknown_project = {
        r#"{"name": "tooling"}"#,
        "unknown + css + fetch"
    },
)]
fn test_realistic_fingerprints(manifest: &str, expected: &str) {
    assert_eq!(fingerprint_of(manifest, false), expected);
}

#[test]
fn test_dev_dependency_version_wins() {
    let fingerprint = fingerprint_of(
        r#"{"dependencies": {"vite": "^3.0.0", "vue": "^3.0.0"}, "devDependencies": {"vite": "^5.1.0"}}"#,
        false,
    );
    assert_eq!(fingerprint, "vue3 + vite5 + css + fetch");
}

#[test]
fn test_docs_for_vite4_segment() {
    let docs = resolve_docs("vite4");

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].library, "vite");
    assert_eq!(docs[0].major, 4);
}

#[test]
fn test_docs_drop_unregistered_segments() {
    assert!(resolve_docs("vite99").is_empty());
    assert!(resolve_docs("solid1").is_empty());
    assert!(resolve_docs("axios").is_empty());
}

#[test]
fn test_generator_end_to_end() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("package.json"),
        r#"{"dependencies": {"vue": "^3.4.0", "pinia": "^2.1.0"}, "devDependencies": {"typescript": "^5.3.0", "vite": "^5.0.0"}}"#,
    )
    .unwrap();

    let config = GeneratorConfig {
        output_file: ".cursorrules".to_string(),
        ..GeneratorConfig::for_project(project.path())
    };
    let report = Generator::new(config).run().unwrap();

    assert!(report.written);
    assert_eq!(
        report.detection.fingerprint.to_string(),
        "vue3 + vite5 + css + pinia2 + fetch"
    );

    let written = fs::read_to_string(project.path().join(".cursorrules")).unwrap();
    assert!(written.contains("## TypeScript"));
    assert!(written.contains("- pinia 2: https://pinia.vuejs.org/core-concepts/"));
}
