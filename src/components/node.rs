/// View tree produced by wizard components
///
/// A minimal element/text tree that mirrors the markup structure and class
/// names of the wizard. Hosts translate it to their toolkit; `Display`
/// renders HTML-like markup for debugging and the demo harness.
use std::fmt;

use crate::wizard::NavAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Empty,
    Text(String),
    Element(ElementNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub disabled: bool,
    pub on_click: Option<NavAction>,
    pub children: Vec<Node>,
}

impl Node {
    /// Start building an element
    pub fn el(tag: &'static str) -> ElementNode {
        ElementNode {
            tag,
            attrs: Vec::new(),
            disabled: false,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Empty => {}
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first walk over all elements
    pub fn elements(&self) -> Vec<&ElementNode> {
        let mut found = Vec::new();
        self.walk(&mut found);
        found
    }

    fn walk<'a>(&'a self, found: &mut Vec<&'a ElementNode>) {
        if let Node::Element(element) = self {
            found.push(element);
            for child in &element.children {
                child.walk(found);
            }
        }
    }

    /// Elements carrying `class` among their classes
    pub fn find_by_class(&self, class: &str) -> Vec<&ElementNode> {
        self.elements()
            .into_iter()
            .filter(|element| element.has_class(class))
            .collect()
    }

    /// First button whose text is `label`
    pub fn find_button(&self, label: &str) -> Option<&ElementNode> {
        self.as_element()?.find_button(label)
    }
}

impl ElementNode {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, action: NavAction) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// First button in this subtree, itself included, whose text is `label`
    pub fn find_button(&self, label: &str) -> Option<&ElementNode> {
        if self.tag == "button" && self.text_content() == label {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_button(label))
    }

    /// Action to dispatch on click, unless the element is disabled
    pub fn click_action(&self) -> Option<NavAction> {
        if self.disabled {
            return None;
        }
        self.on_click
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => Ok(()),
            Node::Text(text) => write!(f, "{}", escape(text)),
            Node::Element(element) => write!(f, "{}", element),
        }
    }
}

impl fmt::Display for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        if self.disabled {
            write!(f, " disabled")?;
        }
        write!(f, ">")?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::el("div")
            .class("outer wrap")
            .child(Node::el("h1").child("Page <1>"))
            .child(
                Node::el("button")
                    .class("next")
                    .on_click(NavAction::Next)
                    .child("Next"),
            )
            .child(
                Node::el("button")
                    .disabled(true)
                    .on_click(NavAction::Previous)
                    .child("Previous"),
            )
            .into()
    }

    #[test]
    fn test_display_markup() {
        let node = Node::from(Node::el("p").attr("id", "a\"b").disabled(true).child("x & y"));
        assert_eq!(node.to_string(), "<p id=\"a&quot;b\" disabled>x &amp; y</p>");
        assert_eq!(Node::Empty.to_string(), "");
    }

    #[test]
    fn test_text_content() {
        assert_eq!(sample().text_content(), "Page <1>NextPrevious");
    }

    #[test]
    fn test_find_by_class() {
        let node = sample();
        assert_eq!(node.find_by_class("wrap").len(), 1);
        assert_eq!(node.find_by_class("next").len(), 1);
        assert!(node.find_by_class("missing").is_empty());
    }

    #[test]
    fn test_find_button_and_click_action() {
        let node = sample();
        let next = node.find_button("Next").unwrap();
        assert_eq!(next.click_action(), Some(NavAction::Next));

        let previous = node.find_button("Previous").unwrap();
        assert_eq!(previous.click_action(), None);

        assert!(node.find_button("Finish").is_none());
        assert!(Node::text("Next").find_button("Next").is_none());
    }

    #[test]
    fn test_find_button_within_subtree() {
        let node = sample();
        let root = node.as_element().unwrap();
        assert_eq!(root.tag, "div");
        assert_eq!(root.find_button("Next").unwrap().click_action(), Some(NavAction::Next));

        let button = root.children[1].as_element().unwrap();
        assert_eq!(button.find_button("Next").map(|b| b.tag), Some("button"));
        assert!(Node::Empty.as_element().is_none());
    }
}
