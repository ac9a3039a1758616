//! UI component library detection

use super::{first_match, CapabilityRule};
use crate::stack::manifest::DependencyTable;

pub const UI_RULES: &[CapabilityRule] = &[
    CapabilityRule::versioned("element-plus", "element-plus"),
    CapabilityRule::versioned("element-ui", "element-ui"),
    CapabilityRule::versioned("ant-design-vue", "ant-design-vue"),
    CapabilityRule::versioned("antd", "antd"),
    CapabilityRule::versioned("vant", "vant"),
    CapabilityRule::bare("uview-plus", "uview-plus"),
    CapabilityRule::versioned("uview-ui", "uview-ui"),
    CapabilityRule::bare("naive-ui", "naive-ui"),
    CapabilityRule::bare("@arco-design/web-vue", "arco-vue"),
    CapabilityRule::versioned("@mui/material", "mui"),
];

pub fn detect_ui(deps: &DependencyTable) -> Option<String> {
    first_match(UI_RULES, deps)
}
