use dom::{Element, Node, Scalar};

/// Content of one table cell or list entry.
///
/// `Empty` is the explicit "none": the slot stays in the tree but holds
/// nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Empty,
    Scalar(Scalar),
    Node(Node),
}

/// Row-major grid of cell values.
pub type Grid = Vec<Vec<Value>>;

impl Value {
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Empty, or a scalar that renders to nothing.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Scalar(value) => value.is_blank(),
            Value::Node(_) => false,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Tree form of the value; `Empty` produces no node.
    pub fn into_node(self) -> Option<Node> {
        match self {
            Value::Empty => None,
            Value::Scalar(value) => Some(Node::Text(value)),
            Value::Node(node) => Some(node),
        }
    }

    /// Reads back the content of a leaf-like element (its first child).
    pub fn from_content(element: &Element) -> Self {
        element
            .content()
            .map(|node| Value::from(node.clone()))
            .unwrap_or_default()
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "null",
            Value::Scalar(value) => value.type_name(),
            Value::Node(_) => "node",
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Text(value) => Value::Scalar(value),
            other => Value::Node(other),
        }
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Value::Node(Node::Element(element))
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! scalar_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

scalar_value_from!(&str, String, i64, i32, u32, f64, bool);

impl TryFrom<serde_json::Value> for Value {
    type Error = &'static str;

    /// Scalars and null convert; arrays and objects are reported by type name.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Value::Empty),
            serde_json::Value::Bool(flag) => Ok(Value::from(flag)),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => Ok(Value::from(int)),
                None => number.as_f64().map(Value::from).ok_or("number"),
            },
            serde_json::Value::String(text) => Ok(Value::from(text)),
            serde_json::Value::Array(_) => Err("array"),
            serde_json::Value::Object(_) => Err("object"),
        }
    }
}

/// Builds a [`Grid`] from row literals: `grid![[1, "a"], [2, "b"]]`.
#[macro_export]
macro_rules! grid {
    ($([$($cell:expr),* $(,)?]),* $(,)?) => {
        vec![$(vec![$($crate::Value::from($cell)),*]),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn options_map_to_empty() {
        assert_eq!(Value::from(None::<&str>), Value::Empty);
        assert_eq!(Value::from(Some(3)), Value::Scalar(Scalar::Int(3)));
    }

    #[test]
    fn text_nodes_read_back_as_scalars() {
        let td = Element::new("td").with_child(Node::text("x"));
        assert_eq!(Value::from_content(&td), Value::from("x"));
        assert_eq!(Value::from_content(&Element::new("td")), Value::Empty);
    }

    #[test]
    fn json_scalars_convert() {
        assert_eq!(Value::try_from(json!(null)), Ok(Value::Empty));
        assert_eq!(Value::try_from(json!(1.5)), Ok(Value::from(1.5)));
        assert_eq!(Value::try_from(json!([1])), Err("array"));
    }

    #[test]
    fn grid_macro_converts_cells() {
        let grid: Grid = grid![[1, "a"], [None::<i64>]];
        assert_eq!(grid[0], vec![Value::from(1), Value::from("a")]);
        assert_eq!(grid[1], vec![Value::Empty]);
    }
}
