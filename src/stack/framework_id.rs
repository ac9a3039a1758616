crate::define_id_enum! {
    /// Frontend framework identity detected from the dependency table
    FrameworkId {
        Vue => "vue" : "Vue",
        React => "react" : "React",
        /// Cross-platform mobile framework built on Vue
        UniApp => "uni-app" : "uni-app",
        Unknown => "unknown" : "Unknown",
    }
}

crate::define_id_enum! {
    /// Source language mode of the project
    LanguageMode {
        TypeScript => "typescript" : "TypeScript",
        JavaScript => "javascript" : "JavaScript",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_id_serialization() {
        assert_eq!(serde_json::to_string(&FrameworkId::UniApp).unwrap(), "\"uni-app\"");
        assert_eq!(serde_json::to_string(&FrameworkId::Vue).unwrap(), "\"vue\"");
        assert_eq!(
            serde_json::to_string(&LanguageMode::TypeScript).unwrap(),
            "\"typescript\""
        );
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(LanguageMode::TypeScript.to_string(), "TypeScript");
        assert_eq!(FrameworkId::Unknown.to_string(), "Unknown");
        assert_eq!(FrameworkId::UniApp.id(), "uni-app");
    }
}
