use crate::{Error, Namespace, Result};
use http::{uri::Authority, Uri};
use std::fmt;

/// The port multiroom speakers listen on.
pub const DEFAULT_PORT: u16 = 55001;

/// Where a speaker's HTTP server lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    authority: Authority,
}

impl Endpoint {
    /// Validates `host` (a hostname, IPv4 or IPv6 address) and combines it with `port`.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(Error::Config("host must not be empty".into()));
        }
        let authority = if host.contains(':') && !host.starts_with('[') {
            format!("[{}]:{}", host, port)
        } else {
            format!("{}:{}", host, port)
        };
        let authority = authority.parse::<Authority>()?;
        if authority.port_u16() != Some(port) {
            return Err(Error::Config(format!("host {:?} must not carry a port", host)));
        }
        Ok(Self { authority })
    }

    /// Hostname or address, IPv6 addresses in brackets.
    pub fn host(&self) -> &str {
        self.authority.host()
    }

    /// The speaker's HTTP port.
    pub fn port(&self) -> u16 {
        self.authority.port_u16().unwrap_or(DEFAULT_PORT)
    }

    /// `http://{host}:{port}/{namespace}?cmd={url-encoded cmd}`
    pub fn uri(&self, namespace: Namespace, cmd: &str) -> Result<Uri> {
        Ok(format!(
            "http://{}/{}?cmd={}",
            self.authority,
            namespace,
            urlencoding::encode(cmd)
        )
        .parse()?)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.authority, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri() {
        let endpoint = Endpoint::new("10.0.0.5", DEFAULT_PORT).unwrap();
        let uri = endpoint
            .uri(Namespace::Uic, "<name>GetVolume</name>")
            .unwrap();
        assert_eq!(
            uri.to_string(),
            "http://10.0.0.5:55001/UIC?cmd=%3Cname%3EGetVolume%3C%2Fname%3E"
        );
        assert_eq!(uri.path(), "/UIC");
    }

    #[test]
    fn test_set_command_is_fully_encoded() {
        let endpoint = Endpoint::new("speaker.local", 8080).unwrap();
        let uri = endpoint
            .uri(
                Namespace::Cpm,
                r#"<name>SetMute</name><p type="str" name="mute" val="on"/>"#,
            )
            .unwrap();
        assert_eq!(uri.path(), "/CPM");
        let query = uri.query().unwrap();
        assert!(query.starts_with("cmd="));
        assert!(!query[4..].contains(|c| matches!(c, '<' | '>' | '"' | ' ' | '=' | '/')));
        assert_eq!(
            urlencoding::decode(&query[4..]).unwrap(),
            r#"<name>SetMute</name><p type="str" name="mute" val="on"/>"#
        );
    }

    #[test]
    fn test_host_and_port() {
        let endpoint = Endpoint::new(" 192.168.1.20 ", 55001).unwrap();
        assert_eq!(endpoint.host(), "192.168.1.20");
        assert_eq!(endpoint.port(), 55001);
        assert_eq!(endpoint.to_string(), "192.168.1.20:55001");
    }

    #[test]
    fn test_ipv6_host_is_bracketed() {
        let endpoint = Endpoint::new("fe80::1", 55001).unwrap();
        assert_eq!(endpoint.to_string(), "[fe80::1]:55001");
    }

    #[test]
    fn test_invalid_hosts() {
        assert!(matches!(Endpoint::new("", 55001), Err(Error::Config(_))));
        assert!(Endpoint::new("bad host", 55001).is_err());
        assert!(Endpoint::new("[::1]:80", 55001).is_err());
    }
}
