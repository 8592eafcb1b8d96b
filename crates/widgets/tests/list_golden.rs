use dom::dom_snapshot::DomSnapshot;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use widget_test_support::fixtures::{FixtureStatus, fixture_filter, load_toml_fixtures};
use widget_test_support::{diff_lines, snapshot_lines};
use widgets::{ConfigError, DataError, List, ListData, WidgetError};

#[derive(Debug, Deserialize)]
struct ListCase {
    #[serde(default)]
    status: FixtureStatus,
    kind: Option<String>,
    /// JSON document; TOML cannot express null entries.
    data: String,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    error: Option<String>,
    dom: Option<String>,
}

#[test]
fn list_golden_fixtures() {
    let filter = fixture_filter();
    let mut ran = 0usize;
    for fixture in load_toml_fixtures::<ListCase>(&fixture_root()) {
        if !filter.matches(&fixture.name) {
            continue;
        }
        ran += 1;
        match (fixture.case.status, run_case(&fixture.case)) {
            (FixtureStatus::Active, Ok(())) | (FixtureStatus::Xfail, Err(_)) => {}
            (FixtureStatus::Active, Err(report)) => {
                panic!("fixture '{}' failed:\n{report}", fixture.name)
            }
            (FixtureStatus::Xfail, Ok(())) => panic!(
                "fixture '{}' is marked xfail but passed; drop the status",
                fixture.name
            ),
        }
    }
    assert!(ran > 0, "no fixtures matched filter");
}

fn run_case(case: &ListCase) -> Result<(), String> {
    let json: serde_json::Value =
        serde_json::from_str(&case.data).map_err(|err| format!("bad fixture json: {err}"))?;
    let data = ListData::try_from(json).map_err(WidgetError::from);
    let built = data.and_then(|data| match &case.kind {
        Some(kind) => List::build_named(kind, data),
        None => List::build(None, data),
    });

    let list = match (built, case.expected.error.as_deref()) {
        (Ok(list), None) => list,
        (Ok(_), Some(expected)) => return Err(format!("expected {expected} error, got a list")),
        (Err(err), Some(expected)) if error_kind(&err) == expected => return Ok(()),
        (Err(err), _) => return Err(format!("build failed: {err}")),
    };

    let expected = snapshot_lines(case.expected.dom.as_deref().unwrap_or_default());
    let actual = DomSnapshot::new(&list.into_node()).into_lines();
    if actual != expected {
        return Err(diff_lines(&expected, &actual));
    }
    Ok(())
}

fn error_kind(err: &WidgetError) -> &'static str {
    match err {
        WidgetError::Data(DataError::UnsupportedListInput { .. }) => "UnsupportedListInput",
        WidgetError::Config(ConfigError::UnknownListKind(_)) => "UnknownListKind",
        WidgetError::Data(_) => "Data",
    }
}

fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("list")
}
