//! State management detection

use super::{first_match, CapabilityRule};
use crate::stack::manifest::DependencyTable;

pub const STATE_RULES: &[CapabilityRule] = &[
    CapabilityRule::versioned("pinia", "pinia"),
    CapabilityRule::versioned("vuex", "vuex"),
    CapabilityRule::versioned("@reduxjs/toolkit", "redux-toolkit"),
    CapabilityRule::versioned("redux", "redux"),
    CapabilityRule::versioned("mobx", "mobx"),
    CapabilityRule::versioned("zustand", "zustand"),
    CapabilityRule::bare("jotai", "jotai"),
    CapabilityRule::bare("recoil", "recoil"),
];

pub fn detect_state(deps: &DependencyTable) -> Option<String> {
    first_match(STATE_RULES, deps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::capability::deps;
    use yare::parameterized;

    #[parameterized(
        pinia = { "pinia", "^2.0.0", "pinia2" },
        vuex = { "vuex", "^3.6.2", "vuex3" },
        rtk = { "@reduxjs/toolkit", "^2.0.1", "redux-toolkit2" },
        redux = { "redux", "^4.2.1", "redux4" },
        mobx = { "mobx", "^6.12.0", "mobx6" },
        zustand = { "zustand", "^4.4.7", "zustand4" },
        jotai = { "jotai", "^2.6.0", "jotai" },
        recoil = { "recoil", "^0.7.7", "recoil" },
    )]
    fn test_state_label(package: &str, version: &str, expected: &str) {
        assert_eq!(detect_state(&deps(&[(package, version)])).as_deref(), Some(expected));
    }

    #[test]
    fn test_toolkit_outranks_plain_redux() {
        let table = deps(&[("redux", "^4.2.1"), ("@reduxjs/toolkit", "^1.9.7")]);
        assert_eq!(detect_state(&table).as_deref(), Some("redux-toolkit1"));
    }

    #[test]
    fn test_no_state_library() {
        assert_eq!(detect_state(&deps(&[("react", "^18.2.0")])), None);
    }
}
