use serde_json::Value;

use crate::props::PropBag;

use super::TargetDescriptor;

/// A renderable child.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A tagged element with its final attributes, ready for a [`Renderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    target: TargetDescriptor,
    props: PropBag,
    children: Vec<Node>,
}

impl Element {
    pub fn new(target: TargetDescriptor, props: PropBag, children: Vec<Node>) -> Self {
        Self {
            target,
            props,
            children,
        }
    }

    pub fn target(&self) -> &TargetDescriptor {
        &self.target
    }

    /// The name of the element this renders as.
    pub fn tag(&self) -> &str {
        self.target.name()
    }

    pub fn props(&self) -> &PropBag {
        &self.props
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// The rendering engine: turns a finished element into its output.
pub trait Renderer {
    type Output;

    fn render(&self, element: Element) -> Self::Output;
}

impl<F, O> Renderer for F
where
    F: Fn(Element) -> O,
{
    type Output = O;

    fn render(&self, element: Element) -> O {
        self(element)
    }
}
