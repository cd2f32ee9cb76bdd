use crate::{
    command::{Command, Value},
    transport::{HttpTransport, Transport},
    utils, Config, Endpoint, Error, Namespace, PowerState, Response, Result, Snapshot, Source,
    SubMode,
};
use std::{net::IpAddr, sync::Arc};

#[derive(Debug, Clone)]
/// A multiroom speaker, providing user-oriented methods over its HTTP+XML
/// control protocol in an asynchronous API.
///
/// Queries never fail: an unreachable speaker, a malformed reply or a missing
/// field all come back as `None`. Actions report what went wrong.
pub struct Speaker {
    endpoint: Endpoint,
    max_volume: u16,
    transport: Arc<dyn Transport>,
}

#[allow(missing_docs)]
impl Speaker {
    /// Creates a speaker talking plain HTTP with the configured timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a speaker on the default port with the default calibration.
    pub fn from_ip(addr: IpAddr) -> Result<Self> {
        Self::new(&Config::new(addr.to_string()))
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let endpoint = config.validate()?;
        Ok(Self {
            endpoint,
            max_volume: config.max_volume,
            transport,
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The raw volume that corresponds to a volume level of `1.0`.
    pub fn max_volume(&self) -> u16 {
        self.max_volume
    }

    // UIC

    pub async fn power_state(&self) -> Option<PowerState> {
        self.query_with(
            Command::get(Namespace::Uic, "GetPowerStatus"),
            "powerStatus",
            utils::parse_bool,
        )
        .await
        .map(PowerState::from)
    }
    pub async fn set_power_state(&self, state: PowerState) -> Result<()> {
        self.send(Command::set(
            Namespace::Uic,
            "SetPowerStatus",
            "powerStatus",
            Value::Dec(state.wire_value()),
        ))
        .await
    }

    pub async fn speaker_name(&self) -> Option<String> {
        self.query(Command::get(Namespace::Uic, "GetSpkName"), "spkname")
            .await
    }

    /// Every field of the speaker's main info reply.
    pub async fn main_info(&self) -> Option<Response> {
        self.execute(&Command::get(Namespace::Uic, "GetMainInfo"))
            .await
            .map_err(|e| degraded("GetMainInfo", &e))
            .ok()
    }

    /// The raw volume, between 0 and the speaker's own maximum.
    pub async fn volume(&self) -> Option<u16> {
        self.query_with(
            Command::get(Namespace::Uic, "GetVolume"),
            "volume",
            utils::parse_number,
        )
        .await
    }
    /// Volumes above the configured maximum are rejected without contacting the speaker.
    pub async fn set_volume(&self, volume: u16) -> Result<()> {
        if volume > self.max_volume {
            return Err(Error::VolumeOutOfRange {
                volume,
                max: self.max_volume,
            });
        }
        self.send(Command::set(
            Namespace::Uic,
            "SetVolume",
            "volume",
            Value::Dec(volume.into()),
        ))
        .await
    }
    /// Sets the volume as a level between `0.0` and `1.0` of the configured maximum.
    /// Levels outside that range are clamped.
    pub async fn set_volume_fraction(&self, level: f64) -> Result<()> {
        self.set_volume(utils::raw_volume(level, self.max_volume))
            .await
    }

    pub async fn muted(&self) -> Option<bool> {
        self.query_with(
            Command::get(Namespace::Uic, "GetMute"),
            "mute",
            utils::parse_on_off,
        )
        .await
    }
    pub async fn set_muted(&self, muted: bool) -> Result<()> {
        self.send(Command::set(
            Namespace::Uic,
            "SetMute",
            "mute",
            Value::Str(utils::on_off(muted).into()),
        ))
        .await
    }

    pub async fn source(&self) -> Option<Source> {
        self.query_with(
            Command::get(Namespace::Uic, "GetFunc"),
            "function",
            |_, s| Ok(s.parse::<Source>()?),
        )
        .await
    }
    pub async fn set_source(&self, source: Source) -> Result<()> {
        self.send(Command::set(
            Namespace::Uic,
            "SetFunc",
            "function",
            Value::Str(source.as_str().into()),
        ))
        .await
    }
    /// Fails with [`Error::UnknownSource`] before sending anything if `name`
    /// isn't a supported source.
    pub async fn set_source_by_name(&self, name: &str) -> Result<()> {
        self.set_source(name.parse()?).await
    }

    pub async fn sub_mode(&self) -> Option<SubMode> {
        self.read_sub_mode()
            .await
            .map_err(|e| degraded("GetFunc", &e))
            .ok()
            .flatten()
    }

    /// `Ok(None)` when the speaker answered without a sub-mode, which it
    /// does for inputs that have none.
    pub(crate) async fn read_sub_mode(&self) -> Result<Option<SubMode>> {
        let command = Command::get(Namespace::Uic, "GetFunc");
        let mut response = self.execute(&command).await?;
        if response.is_rejected() {
            return Err(Error::Rejected(command.to_string()));
        }
        Ok(response
            .take("submode")
            .map(|mode| SubMode::from(mode.as_str())))
    }

    // CPM

    /// Only meaningful while the content player is active.
    pub async fn now_playing_title(&self) -> Option<String> {
        self.query(Command::get(Namespace::Cpm, "GetRadioInfo"), "title")
            .await
    }
    /// Only meaningful while the content player is active.
    pub async fn now_playing_artwork_url(&self) -> Option<String> {
        self.query(Command::get(Namespace::Cpm, "GetRadioInfo"), "thumbnail")
            .await
    }

    /// Take a snapshot of the state the speaker is in right now.
    pub async fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.refresh(self).await;
        snapshot
    }

    /// Applies a snapshot previously taken by the [snapshot](struct.Speaker.html#method.snapshot)-method.
    pub async fn apply(&self, snapshot: &Snapshot) -> Result<()> {
        snapshot.apply(self).await
    }

    /// Sends a command and decodes the reply, reporting every failure.
    pub async fn execute(&self, command: &Command) -> Result<Response> {
        let cmd = command.to_xml();
        let uri = self.endpoint.uri(command.namespace(), &cmd)?;
        log::debug!("Executing: {} with cmd: {}", uri, cmd);

        let body = self.transport.get(&uri).await?;
        log::trace!("{}", body);
        Response::parse(command.namespace(), &body)
    }

    async fn send(&self, command: Command) -> Result<()> {
        let response = self.execute(&command).await?;
        if response.is_rejected() {
            return Err(Error::Rejected(command.to_string()));
        }
        Ok(())
    }

    async fn query(&self, command: Command, field: &str) -> Option<String> {
        match self.execute(&command).await {
            Ok(mut response) => {
                let value = response.take(field);
                if value.is_none() {
                    log::debug!("{} returned no `{}`", command, field);
                }
                value
            }
            Err(err) => {
                degraded(command.action(), &err);
                None
            }
        }
    }

    async fn query_with<T>(
        &self,
        command: Command,
        field: &'static str,
        parse: impl FnOnce(&'static str, &str) -> Result<T>,
    ) -> Option<T> {
        let value = self.query(command, field).await?;
        parse(field, &value)
            .map_err(|e| log::warn!("Ignoring reply: {}", e))
            .ok()
    }
}

fn degraded(action: &str, err: &Error) {
    if err.is_network() {
        log::debug!("{} failed: {}", action, err);
    } else {
        log::warn!("{} returned an unusable reply: {}", action, err);
    }
}
