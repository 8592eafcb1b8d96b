//! Nested lists built from sequences and mappings.
//!
//! Unordered and ordered lists emit one `li` per key and nest a sublist of
//! the same kind inside the `li` for non-empty values. Definition lists emit a
//! `dt` per key followed by sibling `dd` nodes for its value.

use crate::error::{ConfigError, DataError, Result, WidgetError};
use crate::value::Value;
use dom::{Element, Node};
use std::fmt;
use std::str::FromStr;

const LOG_TARGET: &str = "widgets.list";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListKind {
    #[default]
    Unordered,
    Ordered,
    Definition,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
            ListKind::Definition => "dl",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ListKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let kind = value.trim();
        let matches = |names: [&str; 2]| names.iter().any(|name| kind.eq_ignore_ascii_case(name));
        if matches(["ul", "unordered"]) {
            Ok(ListKind::Unordered)
        } else if matches(["ol", "ordered"]) {
            Ok(ListKind::Ordered)
        } else if matches(["dl", "definition"]) {
            Ok(ListKind::Definition)
        } else {
            Err(ConfigError::UnknownListKind(value.to_string()))
        }
    }
}

/// Input of a list level.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListData {
    #[default]
    Empty,
    /// A lone value; only valid as the definition of a `dt`.
    Item(Value),
    /// Flat items; duplicates collapse onto their first occurrence.
    Seq(Vec<Value>),
    Map(ListMap),
}

/// Ordered key to sublist mapping, with an optional kind for this level only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListMap {
    pub kind: Option<ListKind>,
    pub entries: Vec<(Value, ListData)>,
}

impl ListMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: ListKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn entry(mut self, key: impl Into<Value>, value: impl Into<ListData>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ListData {
    pub fn seq<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        ListData::Seq(values.into_iter().map(Into::into).collect())
    }

    pub fn item(value: impl Into<Value>) -> Self {
        ListData::Item(value.into())
    }

    /// Nothing to render: no value, an empty collection, or an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            ListData::Empty => true,
            ListData::Item(value) => value.is_blank(),
            ListData::Seq(values) => values.is_empty(),
            ListData::Map(map) => map.is_empty(),
        }
    }

    fn kind_override(&self) -> Option<ListKind> {
        match self {
            ListData::Map(map) => map.kind,
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            ListData::Empty => "null",
            ListData::Item(value) => value.type_name(),
            ListData::Seq(_) => "sequence",
            ListData::Map(_) => "mapping",
        }
    }
}

impl From<ListMap> for ListData {
    fn from(map: ListMap) -> Self {
        ListData::Map(map)
    }
}

impl From<Vec<Value>> for ListData {
    fn from(values: Vec<Value>) -> Self {
        ListData::Seq(values)
    }
}

impl From<Value> for ListData {
    fn from(value: Value) -> Self {
        match value {
            Value::Empty => ListData::Empty,
            value => ListData::Item(value),
        }
    }
}

impl<T: Into<ListData>> From<Option<T>> for ListData {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl TryFrom<serde_json::Value> for ListData {
    type Error = DataError;

    /// Objects keep document order; nested arrays inside a sequence are
    /// rejected since sequence items become keys.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(ListData::Empty),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    Value::try_from(item).map_err(|found| DataError::UnsupportedListInput {
                        widget: "list".to_string(),
                        found,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ListData::Seq),
            serde_json::Value::Object(object) => {
                let mut map = ListMap::new();
                for (key, value) in object {
                    map.entries.push((Value::from(key), ListData::try_from(value)?));
                }
                Ok(ListData::Map(map))
            }
            scalar => Value::try_from(scalar)
                .map(ListData::Item)
                .map_err(|found| DataError::UnsupportedListInput {
                    widget: "list".to_string(),
                    found,
                }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct List {
    kind: ListKind,
    root: Element,
}

impl List {
    /// Builds a list tree from `data`.
    ///
    /// The kind is `kind` when given, else the top-level map's own kind,
    /// else unordered. Sublists inherit the kind of their parent unless their
    /// map names one.
    pub fn build(kind: Option<ListKind>, data: ListData) -> Result<Self> {
        let kind = kind
            .or_else(|| data.kind_override())
            .unwrap_or_default();
        let root = build_level(kind, data)?;
        log::trace!(
            target: LOG_TARGET,
            "built {kind} with {} top-level nodes",
            root.len()
        );
        Ok(List { kind, root })
    }

    /// Parses `kind` (`ul`, `ol`, `dl` or their long names) before building.
    pub fn build_named(kind: &str, data: ListData) -> Result<Self> {
        let kind = kind.parse::<ListKind>().map_err(WidgetError::from)?;
        Self::build(Some(kind), data)
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Top-level `li`, `dt` and `dd` nodes.
    pub fn items(&self) -> &[Node] {
        self.root.children()
    }

    pub fn as_element(&self) -> &Element {
        &self.root
    }

    pub fn into_node(self) -> Node {
        Node::Element(self.root)
    }
}

fn build_level(kind: ListKind, data: ListData) -> Result<Element> {
    let mut root = Element::new(kind.tag());
    let entries = match data {
        ListData::Empty => return Ok(root),
        ListData::Seq(values) => dedup_keys(values),
        ListData::Map(map) => map.entries,
        item @ ListData::Item(_) => {
            return Err(DataError::UnsupportedListInput {
                widget: kind.tag().to_string(),
                found: item.type_name(),
            }
            .into());
        }
    };

    for (key, value) in entries {
        match kind {
            ListKind::Definition => {
                root.append(wrap("dt", key));
                if !value.is_empty() {
                    for definition in definitions(value) {
                        root.append(wrap("dd", definition));
                    }
                }
            }
            ListKind::Unordered | ListKind::Ordered => {
                let mut item = wrap("li", key);
                if !value.is_empty() {
                    let nested = value.kind_override().unwrap_or(kind);
                    item.append(build_level(nested, value)?);
                }
                root.append(item);
            }
        }
    }
    Ok(root)
}

/// Keeps the first occurrence of each value. `Value` holds floats and has no
/// `Hash`, so this is a linear scan per value; fine for widget-sized lists.
fn dedup_keys(values: Vec<Value>) -> Vec<(Value, ListData)> {
    let mut entries: Vec<(Value, ListData)> = Vec::with_capacity(values.len());
    for value in values {
        if !entries.iter().any(|(key, _)| *key == value) {
            entries.push((value, ListData::Empty));
        }
    }
    entries
}

/// Values rendered as `dd` after a term: one per element of a collection,
/// otherwise the value itself.
fn definitions(value: ListData) -> Vec<Value> {
    match value {
        ListData::Empty => Vec::new(),
        ListData::Item(value) => vec![value],
        ListData::Seq(values) => values,
        ListData::Map(map) => map.entries.into_iter().map(|(key, _)| key).collect(),
    }
}

fn wrap(tag: &str, value: Value) -> Element {
    let mut element = Element::new(tag);
    element.set_content(value.into_node());
    element
}
