//! `package.json` reading and dependency table merging

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Package name to version specifier
pub type DependencyTable = BTreeMap<String, String>;

/// The parts of `package.json` that stack detection looks at.
///
/// Fields of the wrong JSON type are treated as absent, and non-string
/// dependency values are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub dependencies: Option<DependencyTable>,
    pub dev_dependencies: Option<DependencyTable>,
    pub scripts: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Parses manifest JSON. Only malformed JSON is an error.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let parsed: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&parsed))
    }

    pub fn from_value(parsed: &Value) -> Self {
        Self {
            name: parsed
                .get("name")
                .and_then(|v| v.as_str())
                .map(String::from),
            dependencies: string_table(parsed.get("dependencies")),
            dev_dependencies: string_table(parsed.get("devDependencies")),
            scripts: string_table(parsed.get("scripts")).unwrap_or_default(),
        }
    }

    /// Declared and development dependencies as one lookup table.
    pub fn merged_dependencies(&self) -> DependencyTable {
        merge_dependencies(self.dependencies.as_ref(), self.dev_dependencies.as_ref())
    }
}

fn string_table(value: Option<&Value>) -> Option<DependencyTable> {
    let object = value?.as_object()?;
    Some(
        object
            .iter()
            .filter_map(|(name, version)| {
                version.as_str().map(|v| (name.clone(), v.to_string()))
            })
            .collect(),
    )
}

/// Right-biased union: on a key collision the development entry wins.
/// Absent tables count as empty.
pub fn merge_dependencies(
    declared: Option<&DependencyTable>,
    development: Option<&DependencyTable>,
) -> DependencyTable {
    let mut merged = DependencyTable::new();
    for table in [declared, development].into_iter().flatten() {
        for (name, version) in table {
            merged.insert(name.clone(), version.clone());
        }
    }
    merged
}
