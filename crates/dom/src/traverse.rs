use crate::{Element, Node};

/// First element (pre-order, root included) named `name`.
pub fn find_element<'a>(node: &'a Node, name: &str) -> Option<&'a Element> {
    find_element_by(node, &|element: &Element| element.is_named(name))
}

pub fn find_element_mut<'a>(node: &'a mut Node, name: &str) -> Option<&'a mut Element> {
    find_element_by_mut(node, &|element: &Element| element.is_named(name))
}

pub fn find_element_by<'a, F>(node: &'a Node, pred: &F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    if let Node::Element(element) = node {
        if pred(element) {
            return Some(element);
        }
    }
    node.children()
        .iter()
        .find_map(|child| find_element_by(child, pred))
}

pub fn find_element_by_mut<'a, F>(node: &'a mut Node, pred: &F) -> Option<&'a mut Element>
where
    F: Fn(&Element) -> bool,
{
    if matches!(node, Node::Element(element) if pred(element)) {
        return node.as_element_mut();
    }
    node.children_mut()?
        .iter_mut()
        .find_map(|child| find_element_by_mut(child, pred))
}

/// Concatenated text of every scalar leaf in the subtree, space separated.
pub fn text_content(node: &Node) -> String {
    fn walk(node: &Node, out: &mut String) {
        match node {
            Node::Text(value) => {
                let text = value.to_string();
                let text = text.trim();
                if !text.is_empty() {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(text);
                }
            }
            Node::Document { children, .. } => {
                for child in children {
                    walk(child, out);
                }
            }
            Node::Element(element) => {
                for child in element.children() {
                    walk(child, out);
                }
            }
        }
    }

    let mut out = String::new();
    walk(node, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let mut doc = Node::document(Some("html".to_string()));
        if let Some(children) = doc.children_mut() {
            children.push(
                Element::new("div")
                    .with_child(Element::new("p").with_child(Node::text("one")))
                    .with_child(
                        Element::new("p")
                            .with_attr("id", "second")
                            .with_child(Node::text(2)),
                    )
                    .into(),
            );
        }
        doc
    }

    #[test]
    fn finds_first_match_in_pre_order() {
        let doc = sample();
        let p = find_element(&doc, "p").expect("p exists");
        assert_eq!(text_content(&Node::Element(p.clone())), "one");
        assert!(find_element(&doc, "table").is_none());
    }

    #[test]
    fn finds_by_predicate_and_mutates() {
        let mut doc = sample();
        let second = find_element_by_mut(&mut doc, &|el: &Element| el.attr("id") == Some("second"))
            .expect("second paragraph");
        second.add_class("lead");
        let found = find_element_by(&doc, &|el: &Element| el.has_class("lead"));
        assert_eq!(found.and_then(|el| el.attr("id")), Some("second"));
    }

    #[test]
    fn collects_text() {
        let doc = sample();
        assert_eq!(text_content(&doc), "one 2");
    }
}
