use dom::traverse::{find_element, find_element_by, find_element_mut};
use dom::{Element, Node};

const LOG_TARGET: &str = "widgets.page";

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub title: String,
    pub description: Option<String>,
    pub charset: String,
    pub keywords: Vec<String>,
    pub doctype: Option<String>,
    /// Attributes of the `<html>` element.
    pub attributes: Vec<(String, String)>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            charset: "UTF-8".to_string(),
            keywords: Vec::new(),
            doctype: None,
            attributes: Vec::new(),
        }
    }
}

/// What the page head currently declares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub charset: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
}

/// An html document with a fixed head: charset, description and keywords
/// metas plus a title. Content goes into [`Page::body_mut`].
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    document: Node,
}

impl Page {
    pub fn new(config: PageConfig) -> Self {
        let head = Element::new("head")
            .with_child(Element::new("meta"))
            .with_child(Element::new("meta").with_attr("name", "description"))
            .with_child(Element::new("meta").with_attr("name", "keywords"))
            .with_child(Element::new("title"));
        let html = Element::with_attrs("html", config.attributes)
            .with_child(head)
            .with_child(Element::new("body"));
        let mut page = Page {
            document: Node::Document {
                doctype: None,
                children: vec![html.into()],
            },
        };

        page.set_title(&config.title).set_charset(&config.charset);
        page.set_keywords(&config.keywords);
        if let Some(description) = config.description.filter(|text| !text.is_empty()) {
            page.set_description(&description);
        }
        if let Some(doctype) = config.doctype.filter(|text| !text.is_empty()) {
            page.set_doctype(&doctype);
        }
        log::trace!(target: LOG_TARGET, "built page {:?}", config.title);
        page
    }

    pub fn document(&self) -> &Node {
        &self.document
    }

    pub fn into_node(self) -> Node {
        self.document
    }

    pub fn head(&self) -> &Element {
        match find_element(&self.document, "head") {
            Some(head) => head,
            None => unreachable!("page head is created on construction"),
        }
    }

    pub fn body(&self) -> &Element {
        match find_element(&self.document, "body") {
            Some(body) => body,
            None => unreachable!("page body is created on construction"),
        }
    }

    pub fn body_mut(&mut self) -> &mut Element {
        match find_element_mut(&mut self.document, "body") {
            Some(body) => body,
            None => unreachable!("page body is created on construction"),
        }
    }

    pub fn set_doctype(&mut self, value: &str) -> &mut Self {
        if let Node::Document { doctype, .. } = &mut self.document {
            *doctype = Some(value.to_string());
        }
        self
    }

    pub fn set_charset(&mut self, charset: &str) -> &mut Self {
        self.head_element_mut(&is_charset_meta).set_attr("charset", charset);
        self
    }

    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.head_element_mut(&|element: &Element| is_named_meta(element, "description"))
            .set_attr("content", description);
        self
    }

    /// Joins `keywords` with `", "` into the keywords meta.
    pub fn set_keywords<S: AsRef<str>>(&mut self, keywords: &[S]) -> &mut Self {
        let joined = keywords
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ");
        self.head_element_mut(&|element: &Element| is_named_meta(element, "keywords"))
            .set_attr("content", joined);
        self
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        let content = (!title.is_empty()).then(|| Node::text(title));
        self.head_element_mut(&|element: &Element| element.is_named("title"))
            .set_content(content);
        self
    }

    /// Reads the head back.
    pub fn metadata(&self) -> PageMetadata {
        let meta_content = |name: &str| {
            find_element_by(&self.document, &|element: &Element| is_named_meta(element, name))
                .and_then(|meta| meta.attr("content"))
                .map(str::to_string)
        };
        PageMetadata {
            title: find_element(&self.document, "title")
                .and_then(Element::content)
                .and_then(Node::as_scalar)
                .map(ToString::to_string),
            charset: find_element_by(&self.document, &is_charset_meta)
                .and_then(|meta| meta.attr("charset"))
                .map(str::to_string),
            description: meta_content("description").filter(|text| !text.is_empty()),
            keywords: meta_content("keywords")
                .map(|joined| {
                    joined
                        .split(',')
                        .map(str::trim)
                        .filter(|keyword| !keyword.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    fn head_element_mut<F>(&mut self, pred: &F) -> &mut Element
    where
        F: Fn(&Element) -> bool,
    {
        let Some(head) = find_element_mut(&mut self.document, "head") else {
            unreachable!("page head is created on construction");
        };
        let head = head.children_mut();
        match head
            .iter_mut()
            .filter_map(Node::as_element_mut)
            .find(|element| pred(element))
        {
            Some(element) => element,
            None => unreachable!("page head elements are created on construction"),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

/// The first head meta is the charset one; it may not carry the attribute
/// yet while the page is being built.
fn is_charset_meta(element: &Element) -> bool {
    element.is_named("meta") && element.attr("name").is_none()
}

fn is_named_meta(element: &Element, name: &str) -> bool {
    element.is_named("meta") && element.attr("name") == Some(name)
}
