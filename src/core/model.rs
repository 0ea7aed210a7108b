//! Document Tree Model
//!
//! An ordered, mutable element tree. Character data follows the
//! ElementTree convention: `text` is the data before the first child and
//! `tail` is the data after an element's end tag, inside its parent.

use indexmap::IndexMap;

/// Tag name that marks an element as an include directive
pub const INCLUDE_TAG: &str = "include";

/// A parsed XML document with exactly one root element
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

/// A single XML element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    /// Tag name, including any namespace prefix
    pub name: String,

    /// Attributes in document order
    pub attributes: IndexMap<String, String>,

    /// Child elements in document order
    pub children: Vec<Element>,

    /// Character data before the first child
    pub text: Option<String>,

    /// Character data after this element's end tag
    pub tail: Option<String>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute (builder style)
    #[cfg(test)]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the text content (builder style)
    #[cfg(test)]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child (builder style)
    #[cfg(test)]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Whether this element is an include marker
    pub fn is_include(&self) -> bool {
        self.name == INCLUDE_TAG
    }

    /// Tag names of the direct children, in order
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    /// Append character data at the current end of this element's content.
    ///
    /// Goes to the last child's tail when there is one, otherwise to `text`.
    pub fn push_character_data(&mut self, data: &str) {
        let slot = match self.children.last_mut() {
            Some(last) => &mut last.tail,
            None => &mut self.text,
        };
        slot.get_or_insert_with(String::new).push_str(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_include() {
        assert!(Element::new("include").is_include());
        assert!(!Element::new("Include").is_include());
        assert!(!Element::new("xi:include").is_include());
        assert!(!Element::new("types").is_include());
    }

    #[test]
    fn test_builder_keeps_attribute_order() {
        let el = Element::new("type")
            .with_attribute("name", "AK101")
            .with_attribute("count", "3")
            .with_attribute("active", "1");
        let keys: Vec<_> = el.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "count", "active"]);
    }

    #[test]
    fn test_push_character_data_goes_to_text_then_tail() {
        let mut el = Element::new("root");
        el.push_character_data("a");
        el.push_character_data("b");
        assert_eq!(el.text.as_deref(), Some("ab"));

        el.children.push(Element::new("child"));
        el.push_character_data("c");
        assert_eq!(el.text.as_deref(), Some("ab"));
        assert_eq!(el.children[0].tail.as_deref(), Some("c"));
    }

    #[test]
    fn test_child_names() {
        let el = Element::new("root")
            .with_child(Element::new("a"))
            .with_child(Element::new("b"));
        assert_eq!(el.child_names(), vec!["a", "b"]);
    }
}
