//! Sub-protocol namespaces exposed by multiroom speakers.

use std::fmt;

/// Every command is sent to one of two paths on the speaker. The path name
/// doubles as the root tag of the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Device control: power, volume, mute, source.
    Uic,
    /// Content player: streamed and radio metadata.
    Cpm,
}

impl Namespace {
    /// The path segment and reply root tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Uic => "UIC",
            Namespace::Cpm => "CPM",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
