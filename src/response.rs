use crate::{Error, Namespace, Result};
use roxmltree::{Document, Node};
use std::collections::HashMap;

/// A decoded reply envelope:
///
/// ```text
/// <UIC>
///   <method>GetVolume</method>
///   <response result="ok"><volume>12</volume></response>
/// </UIC>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    namespace: Namespace,
    method: Option<String>,
    result: Option<String>,
    fields: HashMap<String, String>,
}

#[allow(missing_docs)]
impl Response {
    /// Parses a reply to a command sent to `namespace`.
    pub fn parse(namespace: Namespace, xml: &str) -> Result<Self> {
        let doc = Document::parse(xml.trim_start())?;
        let root = doc.root_element();
        if root.tag_name().name() != namespace.as_str() {
            return Err(Error::UnexpectedRoot {
                expected: namespace,
                found: root.tag_name().name().to_string(),
            });
        }

        let response = child(root, "response").ok_or(Error::MissingResponse(namespace))?;

        let mut fields = HashMap::new();
        for field in response.children().filter(Node::is_element) {
            fields
                .entry(field.tag_name().name().to_string())
                .or_insert_with(|| text(field));
        }

        Ok(Self {
            namespace,
            method: child(root, "method").map(text),
            result: response.attribute("result").map(str::to_string),
            fields,
        })
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// The action the speaker says it answered.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// `ok` or `ng`, when the speaker reports it.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn is_rejected(&self) -> bool {
        self.result
            .as_deref()
            .map_or(false, |result| result.eq_ignore_ascii_case("ng"))
    }

    /// The field's text, if present and non-empty.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Like [`get`](Self::get), but moves the value out.
    pub fn take(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field).filter(|value| !value.is_empty())
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
}

// CDATA sections arrive as text nodes, so titles like `<![CDATA[Jazz FM]]>` are covered.
fn text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|c| c.text())
        .collect::<String>()
        .trim()
        .to_string()
}
