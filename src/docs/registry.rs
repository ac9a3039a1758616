//! Version-pinned documentation links, keyed by library and major version

/// Documentation links for one library
#[derive(Debug, Clone, Copy)]
pub struct DocEntry {
    pub library: &'static str,
    pub versions: &'static [(u32, &'static str)],
}

pub const DOC_REGISTRY: &[DocEntry] = &[
    DocEntry {
        library: "vue",
        versions: &[
            (2, "https://v2.vuejs.org/v2/guide/"),
            (3, "https://vuejs.org/guide/introduction.html"),
        ],
    },
    DocEntry {
        library: "react",
        versions: &[
            (16, "https://legacy.reactjs.org/docs/getting-started.html"),
            (17, "https://legacy.reactjs.org/docs/getting-started.html"),
            (18, "https://18.react.dev/"),
            (19, "https://react.dev/"),
        ],
    },
    DocEntry {
        library: "uni-app",
        versions: &[
            (2, "https://uniapp.dcloud.net.cn/tutorial/vue-basics.html"),
            (3, "https://uniapp.dcloud.net.cn/tutorial/vue3-basics.html"),
        ],
    },
    DocEntry {
        library: "element-ui",
        versions: &[(2, "https://element.eleme.cn/#/en-US/component/installation")],
    },
    DocEntry {
        library: "element-plus",
        versions: &[(2, "https://element-plus.org/en-US/component/overview.html")],
    },
    DocEntry {
        library: "ant-design-vue",
        versions: &[
            (1, "https://1x.antdv.com/docs/vue/introduce/"),
            (3, "https://3x.antdv.com/docs/vue/introduce"),
            (4, "https://antdv.com/docs/vue/introduce"),
        ],
    },
    DocEntry {
        library: "antd",
        versions: &[
            (4, "https://4x.ant.design/docs/react/introduce"),
            (5, "https://ant.design/docs/react/introduce"),
        ],
    },
    DocEntry {
        library: "vant",
        versions: &[
            (2, "https://vant-ui.github.io/vant/v2/"),
            (3, "https://vant-ui.github.io/vant/v3/"),
            (4, "https://vant-ui.github.io/vant/"),
        ],
    },
    DocEntry {
        library: "uview-ui",
        versions: &[
            (1, "https://v1.uviewui.com/"),
            (2, "https://www.uviewui.com/"),
        ],
    },
    DocEntry {
        library: "mui",
        versions: &[
            (5, "https://v5.mui.com/material-ui/getting-started/"),
            (6, "https://mui.com/material-ui/getting-started/"),
        ],
    },
    DocEntry {
        library: "vite",
        versions: &[
            (2, "https://v2.vitejs.dev/guide/"),
            (3, "https://v3.vitejs.dev/guide/"),
            (4, "https://v4.vitejs.dev/guide/"),
            (5, "https://v5.vite.dev/guide/"),
            (6, "https://vite.dev/guide/"),
        ],
    },
    DocEntry {
        library: "webpack",
        versions: &[
            (4, "https://v4.webpack.js.org/concepts/"),
            (5, "https://webpack.js.org/concepts/"),
        ],
    },
    DocEntry {
        library: "tailwind",
        versions: &[(3, "https://v3.tailwindcss.com/docs")],
    },
    DocEntry {
        library: "pinia",
        versions: &[(2, "https://pinia.vuejs.org/core-concepts/")],
    },
    DocEntry {
        library: "vuex",
        versions: &[
            (3, "https://v3.vuex.vuejs.org/"),
            (4, "https://vuex.vuejs.org/"),
        ],
    },
    DocEntry {
        library: "redux-toolkit",
        versions: &[
            (1, "https://redux-toolkit.js.org/introduction/getting-started"),
            (2, "https://redux-toolkit.js.org/introduction/getting-started"),
        ],
    },
    DocEntry {
        library: "tanstack-query",
        versions: &[
            (4, "https://tanstack.com/query/v4/docs/framework/react/overview"),
            (5, "https://tanstack.com/query/v5/docs/framework/react/overview"),
        ],
    },
];

/// Looks up the documentation URL for `library` at `major`.
pub fn lookup(library: &str, major: u32) -> Option<&'static str> {
    DOC_REGISTRY
        .iter()
        .find(|entry| entry.library == library)?
        .versions
        .iter()
        .find(|(version, _)| *version == major)
        .map(|(_, url)| *url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit() {
        assert_eq!(lookup("vite", 4), Some("https://v4.vitejs.dev/guide/"));
        assert_eq!(lookup("vue", 3), Some("https://vuejs.org/guide/introduction.html"));
    }

    #[test]
    fn test_lookup_unknown_major() {
        assert_eq!(lookup("vite", 1), None);
    }

    #[test]
    fn test_lookup_unknown_library() {
        assert_eq!(lookup("svelte", 4), None);
    }

    #[test]
    fn test_registry_has_no_duplicate_libraries() {
        let mut names: Vec<_> = DOC_REGISTRY.iter().map(|e| e.library).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DOC_REGISTRY.len());
    }
}
