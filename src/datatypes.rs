use std::fmt;

/// Whether the speaker is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    /// Standby or unreachable.
    #[default]
    Off,
    /// Powered and answering.
    On,
}

impl PowerState {
    /// The `powerStatus` value on the wire.
    pub(crate) fn wire_value(self) -> i64 {
        match self {
            PowerState::Off => 0,
            PowerState::On => 1,
        }
    }

    /// `true` for [`PowerState::On`].
    pub fn is_on(self) -> bool {
        self == PowerState::On
    }
}

impl From<bool> for PowerState {
    fn from(on: bool) -> Self {
        if on {
            PowerState::On
        } else {
            PowerState::Off
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::Off => f.write_str("off"),
            PowerState::On => f.write_str("on"),
        }
    }
}

/// The input a speaker is playing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    /// Optical (TOSLINK) input.
    Optical,
    /// TV sound share.
    SoundShare,
    /// HDMI input.
    Hdmi,
    /// Network playback, including the content player.
    Wifi,
    /// Analog auxiliary input.
    Aux,
    /// Bluetooth.
    Bluetooth,
}

impl Source {
    /// Every source the speaker can be switched to.
    pub const ALL: [Source; 6] = [
        Source::Optical,
        Source::SoundShare,
        Source::Hdmi,
        Source::Wifi,
        Source::Aux,
        Source::Bluetooth,
    ];

    /// The `function` value on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Optical => "optical",
            Source::SoundShare => "soundshare",
            Source::Hdmi => "hdmi",
            Source::Wifi => "wifi",
            Source::Aux => "aux",
            Source::Bluetooth => "bt",
        }
    }

    /// All sources ordered by their wire name, the way a source picker lists them.
    pub fn sorted() -> Vec<Source> {
        let mut sources = Source::ALL.to_vec();
        sources.sort_by_key(Source::as_str);
        sources
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The name given isn't one of the speaker's sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSourceError(pub(crate) String);
impl std::error::Error for ParseSourceError {}
impl fmt::Display for ParseSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not one of `optical`, `soundshare`, `hdmi`, `wifi`, `aux` or `bt`",
            self.0
        )
    }
}

impl From<ParseSourceError> for crate::Error {
    fn from(err: ParseSourceError) -> Self {
        crate::Error::UnknownSource(err.0)
    }
}

impl std::str::FromStr for Source {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Source::ALL
            .iter()
            .copied()
            .find(|source| source.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSourceError(s.to_string()))
    }
}

/// Secondary state under the active source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubMode {
    /// `cp`: the built-in content player (internet radio, streaming services).
    ContentPlayer,
    /// `dlna`: a DLNA renderer session.
    Dlna,
    /// Anything the speaker reports that isn't modelled.
    Other(String),
}

impl SubMode {
    /// Whether now-playing metadata is available.
    pub fn is_content_player(&self) -> bool {
        matches!(self, SubMode::ContentPlayer)
    }
}

impl From<&str> for SubMode {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cp" => SubMode::ContentPlayer,
            "dlna" => SubMode::Dlna,
            _ => SubMode::Other(s.trim().to_string()),
        }
    }
}

impl fmt::Display for SubMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubMode::ContentPlayer => f.write_str("cp"),
            SubMode::Dlna => f.write_str("dlna"),
            SubMode::Other(mode) => f.write_str(mode),
        }
    }
}
