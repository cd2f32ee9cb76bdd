//! A blocking multiroom speaker.
//!
//! [`blocking::Speaker`](Speaker) wraps the asynchronous [`crate::Speaker`]
//! and drives it on its own single-threaded runtime, for callers without an
//! async executor. It must not be used from within an async runtime.

use crate::{Config, PowerState, Response, Result, Snapshot, Source, SubMode};
use std::{fmt, net::IpAddr};
use tokio::runtime::{Builder, Runtime};

/// A multiroom speaker whose methods block until the speaker answers.
pub struct Speaker {
    inner: crate::Speaker,
    runtime: Runtime,
}

impl fmt::Debug for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speaker")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[allow(missing_docs)]
impl Speaker {
    pub fn new(config: &Config) -> Result<Self> {
        Self::from_async(crate::Speaker::new(config)?)
    }

    pub fn from_ip(addr: IpAddr) -> Result<Self> {
        Self::from_async(crate::Speaker::from_ip(addr)?)
    }

    pub fn from_async(inner: crate::Speaker) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    /// The asynchronous speaker this one drives.
    pub fn as_async(&self) -> &crate::Speaker {
        &self.inner
    }

    pub fn power_state(&self) -> Option<PowerState> {
        self.runtime.block_on(self.inner.power_state())
    }
    pub fn set_power_state(&self, state: PowerState) -> Result<()> {
        self.runtime.block_on(self.inner.set_power_state(state))
    }

    pub fn speaker_name(&self) -> Option<String> {
        self.runtime.block_on(self.inner.speaker_name())
    }
    pub fn main_info(&self) -> Option<Response> {
        self.runtime.block_on(self.inner.main_info())
    }

    pub fn volume(&self) -> Option<u16> {
        self.runtime.block_on(self.inner.volume())
    }
    pub fn set_volume(&self, volume: u16) -> Result<()> {
        self.runtime.block_on(self.inner.set_volume(volume))
    }
    pub fn set_volume_fraction(&self, level: f64) -> Result<()> {
        self.runtime.block_on(self.inner.set_volume_fraction(level))
    }

    pub fn muted(&self) -> Option<bool> {
        self.runtime.block_on(self.inner.muted())
    }
    pub fn set_muted(&self, muted: bool) -> Result<()> {
        self.runtime.block_on(self.inner.set_muted(muted))
    }

    pub fn source(&self) -> Option<Source> {
        self.runtime.block_on(self.inner.source())
    }
    pub fn set_source(&self, source: Source) -> Result<()> {
        self.runtime.block_on(self.inner.set_source(source))
    }
    pub fn set_source_by_name(&self, name: &str) -> Result<()> {
        self.runtime.block_on(self.inner.set_source_by_name(name))
    }

    pub fn sub_mode(&self) -> Option<SubMode> {
        self.runtime.block_on(self.inner.sub_mode())
    }
    pub fn now_playing_title(&self) -> Option<String> {
        self.runtime.block_on(self.inner.now_playing_title())
    }
    pub fn now_playing_artwork_url(&self) -> Option<String> {
        self.runtime.block_on(self.inner.now_playing_artwork_url())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.runtime.block_on(self.inner.snapshot())
    }
    pub fn refresh(&self, snapshot: &mut Snapshot) {
        self.runtime.block_on(snapshot.refresh(&self.inner))
    }
    pub fn apply(&self, snapshot: &Snapshot) -> Result<()> {
        self.runtime.block_on(self.inner.apply(snapshot))
    }
}
