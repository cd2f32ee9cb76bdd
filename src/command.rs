//! Requests understood by multiroom speakers.
//!
//! A command is an action name, optionally followed by a single typed
//! parameter. It is rendered as an XML fragment which travels URL-encoded
//! in the `cmd` query parameter:
//!
//! ```text
//! <name>GetVolume</name>
//! <name>SetVolume</name><p type="dec" name="volume" val="12"/>
//! ```

use crate::{utils::escape_xml, Namespace};
use std::fmt;

/// A parameter value together with its wire type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Sent as `type="str"`.
    Str(String),
    /// Sent as `type="dec"`.
    Dec(i64),
}

impl Value {
    /// `str` or `dec`.
    pub fn wire_type(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Dec(_) => "dec",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Dec(n) => write!(f, "{}", n),
        }
    }
}

/// A named property set by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    name: String,
    value: Value,
}

#[allow(missing_docs)]
impl Param {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// A single request for one of the speaker's namespaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    namespace: Namespace,
    action: String,
    param: Option<Param>,
}

#[allow(missing_docs)]
impl Command {
    /// A query without parameters.
    pub fn get(namespace: Namespace, action: impl Into<String>) -> Self {
        Self {
            namespace,
            action: action.into(),
            param: None,
        }
    }

    /// An action setting `property` to `value`.
    pub fn set(
        namespace: Namespace,
        action: impl Into<String>,
        property: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            namespace,
            action: action.into(),
            param: Some(Param {
                name: property.into(),
                value,
            }),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }
    pub fn action(&self) -> &str {
        &self.action
    }
    pub fn param(&self) -> Option<&Param> {
        self.param.as_ref()
    }

    /// The XML fragment sent as `cmd`.
    pub fn to_xml(&self) -> String {
        let mut xml = format!("<name>{}</name>", escape_xml(&self.action));
        if let Some(param) = &self.param {
            xml.push_str(&format!(
                r#"<p type="{}" name="{}" val="{}"/>"#,
                param.value.wire_type(),
                escape_xml(&param.name),
                escape_xml(&param.value.to_string()),
            ));
        }
        xml
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.action)
    }
}
