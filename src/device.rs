//! The speaker as a media player entity.
//!
//! [`MediaPlayer`] is the capability contract a home-automation host adapts
//! to its own entity model. [`MultiRoomDevice`] implements it by mirroring a
//! [`Snapshot`] of one speaker.

use crate::{
    throttle::{RefreshPolicy, Unthrottled},
    Config, PowerState, Result, Snapshot, Source, Speaker,
};
use async_trait::async_trait;
use std::time::Instant;

/// Name used when neither the configuration nor the speaker provides one.
pub const DEFAULT_NAME: &str = "Samsung Soundbar";

/// A set of [`MediaPlayer`] capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Features(u8);

impl Features {
    /// No capabilities.
    pub const NONE: Self = Self(0);
    /// [`MediaPlayer::turn_on`]
    pub const TURN_ON: Self = Self(1);
    /// [`MediaPlayer::turn_off`]
    pub const TURN_OFF: Self = Self(1 << 1);
    /// [`MediaPlayer::set_volume_level`]
    pub const VOLUME_SET: Self = Self(1 << 2);
    /// [`MediaPlayer::mute_volume`]
    pub const VOLUME_MUTE: Self = Self(1 << 3);
    /// [`MediaPlayer::select_source`]
    pub const SELECT_SOURCE: Self = Self(1 << 4);

    /// Whether every capability in `other` is also in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw bits, for hosts that keep capabilities as an integer mask.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for Features {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Everything a multiroom speaker can be asked to do.
pub const SUPPORTED_FEATURES: Features = Features(
    Features::TURN_ON.0
        | Features::TURN_OFF.0
        | Features::VOLUME_SET.0
        | Features::VOLUME_MUTE.0
        | Features::SELECT_SOURCE.0,
);

/// Power, volume, mute, source selection and now-playing metadata.
///
/// Getters report the state as of the last [`update`](MediaPlayer::update).
#[async_trait]
pub trait MediaPlayer {
    /// Display name.
    fn name(&self) -> &str;
    /// On or off.
    fn state(&self) -> PowerState;
    /// The actions this player supports.
    fn supported_features(&self) -> Features;
    /// Between `0.0` and `1.0`.
    fn volume_level(&self) -> f64;
    /// Whether the player is muted.
    fn is_volume_muted(&self) -> bool;
    /// Current input source, if known.
    fn source(&self) -> Option<Source>;
    /// Selectable sources, sorted by name.
    fn source_list(&self) -> Vec<Source>;
    /// Title of what's playing.
    fn media_title(&self) -> Option<&str>;
    /// Artwork of what's playing.
    fn media_image_url(&self) -> Option<&str>;

    /// Powers the player on.
    async fn turn_on(&mut self) -> Result<()>;
    /// Powers the player off.
    async fn turn_off(&mut self) -> Result<()>;
    /// Sets the volume, between `0.0` and `1.0`.
    async fn set_volume_level(&mut self, level: f64) -> Result<()>;
    /// Mutes or unmutes the player.
    async fn mute_volume(&mut self, mute: bool) -> Result<()>;
    /// Names that aren't in [`source_list`](MediaPlayer::source_list) are rejected.
    async fn select_source(&mut self, source: &str) -> Result<()>;
    /// Refreshes the mirrored state, subject to the refresh policy.
    async fn update(&mut self);
}

/// A [`MediaPlayer`] backed by a multiroom [`Speaker`].
#[derive(Debug)]
pub struct MultiRoomDevice {
    name: Option<String>,
    speaker: Speaker,
    snapshot: Snapshot,
    policy: Box<dyn RefreshPolicy>,
}

#[allow(missing_docs)]
impl MultiRoomDevice {
    /// A device for the configured speaker, refreshing on every update.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::from_speaker(Speaker::new(config)?, config.name.clone()))
    }

    pub fn from_speaker(speaker: Speaker, name: Option<String>) -> Self {
        Self {
            name,
            speaker,
            snapshot: Snapshot::default(),
            policy: Box::new(Unthrottled),
        }
    }

    pub fn with_refresh_policy(mut self, policy: impl RefreshPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The content player's sub-mode as of the last update.
    pub fn mode(&self) -> Option<&crate::SubMode> {
        self.snapshot.sub_mode.as_ref()
    }

    async fn refresh(&mut self, forced: bool) {
        if !self.policy.should_refresh(Instant::now(), forced) {
            log::debug!("Skipping refresh of {}", self.name());
            return;
        }
        self.snapshot.refresh(&self.speaker).await;
        if self.name.is_none() && self.snapshot.is_on() {
            self.name = self.speaker.speaker_name().await;
        }
    }
}

#[async_trait]
impl MediaPlayer for MultiRoomDevice {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    fn state(&self) -> PowerState {
        self.snapshot.power
    }

    fn supported_features(&self) -> Features {
        SUPPORTED_FEATURES
    }

    fn volume_level(&self) -> f64 {
        self.snapshot.volume
    }

    fn is_volume_muted(&self) -> bool {
        self.snapshot.muted
    }

    fn source(&self) -> Option<Source> {
        self.snapshot.source
    }

    fn source_list(&self) -> Vec<Source> {
        Source::sorted()
    }

    fn media_title(&self) -> Option<&str> {
        self.snapshot.media_title.as_deref()
    }

    fn media_image_url(&self) -> Option<&str> {
        self.snapshot.media_image_url.as_deref()
    }

    async fn turn_on(&mut self) -> Result<()> {
        self.speaker.set_power_state(PowerState::On).await?;
        self.refresh(true).await;
        Ok(())
    }

    async fn turn_off(&mut self) -> Result<()> {
        self.speaker.set_power_state(PowerState::Off).await?;
        self.refresh(true).await;
        Ok(())
    }

    async fn set_volume_level(&mut self, level: f64) -> Result<()> {
        self.speaker.set_volume_fraction(level).await?;
        self.refresh(true).await;
        Ok(())
    }

    async fn mute_volume(&mut self, mute: bool) -> Result<()> {
        self.speaker.set_muted(mute).await?;
        self.snapshot.muted = mute;
        self.refresh(true).await;
        Ok(())
    }

    async fn select_source(&mut self, source: &str) -> Result<()> {
        let source = source.parse::<Source>().map_err(|e| {
            log::error!("Unsupported source: {}", e);
            e
        })?;
        self.speaker.set_source(source).await?;
        self.refresh(true).await;
        Ok(())
    }

    async fn update(&mut self) {
        self.refresh(false).await;
    }
}
