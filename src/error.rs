use crate::Namespace;
use thiserror::Error;

/// The crate-wide result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
/// Errors that can occur while talking to a multiroom speaker.
pub enum Error {
    /// The device didn't answer within the configured timeout.
    #[error("request to {0} timed out")]
    Timeout(String),
    /// Connection refused, reset, or any other transport failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The device answered with a non-success HTTP status.
    #[error("device answered with HTTP status {0}")]
    Status(u16),
    /// The request URI couldn't be built from the endpoint.
    #[error("invalid request uri: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),
    /// The response body is not well-formed XML.
    #[error("malformed response: {0}")]
    Xml(#[from] roxmltree::Error),
    /// The response envelope belongs to another namespace.
    #[error("expected a <{expected}> envelope but got <{found}>")]
    UnexpectedRoot {
        /// namespace the request was sent to
        expected: Namespace,
        /// root tag of the received document
        found: String,
    },
    /// The envelope has no `response` element.
    #[error("<{0}> envelope contains no <response> element")]
    MissingResponse(Namespace),
    /// The device answered `result="ng"`.
    #[error("device rejected {0}")]
    Rejected(String),
    /// The name is not one of the supported input sources.
    #[error("{0:?} is not a supported source")]
    UnknownSource(String),
    /// The raw volume is above the configured maximum.
    #[error("volume {volume} is above the configured maximum of {max}")]
    VolumeOutOfRange {
        #[allow(missing_docs)]
        volume: u16,
        #[allow(missing_docs)]
        max: u16,
    },
    /// A response field holds a value that can't be interpreted.
    #[error("invalid value {value:?} for `{field}`")]
    InvalidValue {
        #[allow(missing_docs)]
        field: &'static str,
        #[allow(missing_docs)]
        value: String,
    },
    /// The configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The runtime backing the blocking client couldn't be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl Error {
    /// Whether the failure happened before or while reaching the device,
    /// as opposed to the device answering with something unusable.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Timeout(_) | Error::Http(_) | Error::Status(_))
    }
}
