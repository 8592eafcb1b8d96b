use serde::{Deserialize, Serialize};
use std::fmt;

/// Leaf content carried by a text node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(value) => Some(*value as f64),
            Scalar::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// True for the empty string; numbers and booleans are never blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::Text(text) if text.is_empty())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Text(_) => "text",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// A node in an owned tag tree.
///
/// Every node has exactly one owner: either its parent's child list or the
/// widget/document holding the root. Detaching a node moves it out.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Document {
        doctype: Option<String>,
        children: Vec<Node>,
    },
    Element(Element),
    Text(Scalar),
}

impl Node {
    pub fn document(doctype: Option<String>) -> Self {
        Node::Document {
            doctype,
            children: Vec::new(),
        }
    }

    pub fn element(name: &str) -> Self {
        Node::Element(Element::new(name))
    }

    pub fn text(value: impl Into<Scalar>) -> Self {
        Node::Text(value.into())
    }

    /// Tag name for elements, `None` for documents and text.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element(element) => Some(element.name()),
            Node::Document { .. } | Node::Text(_) => None,
        }
    }

    pub fn is_element_named(&self, name: &str) -> bool {
        matches!(self, Node::Element(element) if element.is_named(name))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Children in order; text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document { children, .. } => children,
            Node::Element(element) => element.children(),
            Node::Text(_) => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Document { children, .. } => Some(children),
            Node::Element(element) => Some(element.children_mut()),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Text(value)
    }
}

/// Element node: tag name, attributes with unique keys, ordered children.
///
/// Tag names and attribute keys are stored ASCII-lowercase. Attribute order is
/// insertion order; setting an existing key overwrites it in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attrs<K, V>(name: &str, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut element = Self::new(name);
        for (key, value) in attrs {
            element.set_attr(key.as_ref(), value);
        }
        element
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key.to_ascii_lowercase(), value)),
        }
        self
    }

    /// Adds one token to the `class` attribute, keeping existing tokens.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        let class = class.trim();
        if class.is_empty() || self.has_class(class) {
            return self;
        }
        let joined = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_string(),
        };
        self.set_attr("class", joined)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|value| value.split_whitespace().any(|token| token == class))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends `child` and returns it for chaining.
    pub fn append(&mut self, child: impl Into<Node>) -> &mut Node {
        self.children.push(child.into());
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Inserts `child` at `index`, clamped to the end of the child list.
    pub fn insert(&mut self, index: usize, child: impl Into<Node>) -> &mut Node {
        let index = index.min(self.children.len());
        self.children.insert(index, child.into());
        &mut self.children[index]
    }

    /// Detaches the child at `index` and hands ownership back.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    pub fn pop(&mut self) -> Option<Node> {
        self.children.pop()
    }

    /// Removes all children, keeping the element and its attributes.
    pub fn empty(&mut self) -> &mut Self {
        self.children.clear();
        self
    }

    /// The single content value of a leaf-like element (first child).
    pub fn content(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Replaces all children with `content`, or leaves the element empty.
    pub fn set_content(&mut self, content: Option<Node>) -> &mut Self {
        self.children.clear();
        if let Some(node) = content {
            self.children.push(node);
        }
        self
    }

    /// Index of the first child element named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.is_element_named(name))
    }

    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find(|element| element.is_named(name))
    }

    pub fn find_child_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.children
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find(|element| element.is_named(name))
    }

    pub fn into_parts(self) -> (String, Vec<(String, String)>, Vec<Node>) {
        (self.name, self.attributes, self.children)
    }
}
