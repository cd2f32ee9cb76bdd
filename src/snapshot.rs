use crate::{utils, PowerState, Result, Source, Speaker, SubMode};

/// What a speaker was doing the last time it was asked.
///
/// A snapshot is rebuilt by [`refresh`](Snapshot::refresh); readings the
/// speaker doesn't answer leave the previous value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Unreachable speakers are reported as off.
    pub power: PowerState,
    /// Input source.
    pub source: Option<Source>,
    /// Between `0.0` and `1.0` of the configured maximum volume.
    pub volume: f64,
    /// Whether the speaker is muted.
    pub muted: bool,
    /// `None` when the current input has no sub-mode.
    pub sub_mode: Option<SubMode>,
    /// Set only while the content player is active.
    pub media_title: Option<String>,
    /// Set only while the content player is active.
    pub media_image_url: Option<String>,
}

#[allow(missing_docs)]
impl Snapshot {
    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Reads the speaker's state one request at a time: power, then source,
    /// volume, mute and sub-mode, then the now-playing metadata when the
    /// content player is active. Nothing past power is read while the
    /// speaker is off or unreachable.
    pub async fn refresh(&mut self, speaker: &Speaker) {
        log::info!("Refreshing state of {}", speaker.endpoint());

        match speaker.power_state().await {
            Some(PowerState::On) => self.power = PowerState::On,
            _ => {
                self.power = PowerState::Off;
                return;
            }
        }

        if let Some(source) = speaker.source().await {
            self.source = Some(source);
        }
        if let Some(volume) = speaker.volume().await {
            self.volume = utils::volume_fraction(volume, speaker.max_volume());
        }
        if let Some(muted) = speaker.muted().await {
            self.muted = muted;
        }

        let sub_mode = match speaker.read_sub_mode().await {
            Ok(sub_mode) => sub_mode,
            Err(err) => {
                log::debug!("Keeping now-playing metadata: {}", err);
                return;
            }
        };
        if sub_mode.as_ref().map_or(false, SubMode::is_content_player) {
            if let Some(title) = speaker.now_playing_title().await {
                self.media_title = Some(title);
            }
            if let Some(url) = speaker.now_playing_artwork_url().await {
                self.media_image_url = Some(url);
            }
        } else {
            self.media_title = None;
            self.media_image_url = None;
        }
        self.sub_mode = sub_mode;
    }

    /// Puts the speaker back into this state. Source, volume and mute are
    /// only restored when the snapshot was taken while the speaker was on.
    pub async fn apply(&self, speaker: &Speaker) -> Result<()> {
        speaker.set_power_state(self.power).await?;
        if !self.is_on() {
            return Ok(());
        }
        if let Some(source) = self.source {
            speaker.set_source(source).await?;
        }
        speaker.set_volume_fraction(self.volume).await?;
        speaker.set_muted(self.muted).await
    }
}
