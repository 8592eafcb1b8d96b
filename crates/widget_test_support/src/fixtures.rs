use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Env var narrowing golden runs to fixtures whose name contains its value.
pub const FIXTURE_FILTER_VAR: &str = "TAGWIDGETS_FIXTURE";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FixtureStatus {
    #[default]
    Active,
    Xfail,
}

#[derive(Debug)]
pub struct Fixture<T> {
    pub name: String,
    pub case: T,
}

pub struct FixtureFilter {
    raw: Option<String>,
}

impl FixtureFilter {
    pub fn matches(&self, name: &str) -> bool {
        let Some(filter) = &self.raw else {
            return true;
        };
        name.contains(filter.as_str())
    }
}

pub fn fixture_filter() -> FixtureFilter {
    FixtureFilter {
        raw: std::env::var(FIXTURE_FILTER_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty()),
    }
}

/// Every `*.toml` file under `root`, parsed as `T`, sorted by file name.
/// The fixture name is the file stem.
pub fn load_toml_fixtures<T: DeserializeOwned>(root: &Path) -> Vec<Fixture<T>> {
    let mut entries: Vec<_> = fs::read_dir(root)
        .unwrap_or_else(|err| panic!("failed to read fixture root {root:?}: {err}"))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    entries.sort();

    entries
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| panic!("fixture without a file name: {path:?}"));
            if name != name.trim() {
                panic!("fixture name has leading/trailing whitespace: '{name}'");
            }
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|err| panic!("failed to read fixture {path:?}: {err}"));
            let case = toml::from_str(&content)
                .unwrap_or_else(|err| panic!("failed to parse fixture {path:?}: {err}"));
            Fixture { name, case }
        })
        .collect()
}
