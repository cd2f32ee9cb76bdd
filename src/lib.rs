//! # multiroom
//!
//! multiroom is a library for controlling Samsung multiroom speakers and
//! soundbars over their HTTP+XML control protocol.
//!
//! Every operation is a single `GET` request: the command travels as an XML
//! fragment in the `cmd` query parameter, and the speaker answers with an XML
//! envelope whose fields are extracted by name.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use multiroom::{Config, Source, Speaker};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), multiroom::Error> {
//! let speaker = Speaker::new(&Config::new("192.168.1.20"))?;
//!
//! println!("volume: {:?}", speaker.volume().await);
//! speaker.set_source(Source::Bluetooth).await?;
//! speaker.set_muted(false).await?;
//!
//! let snapshot = speaker.snapshot().await;
//! println!("{:?} playing from {:?}", snapshot.power, snapshot.source);
//! # Ok(())
//! # }
//! ```
//!
//! Queries return `None` when the speaker is unreachable or doesn't answer
//! the question; actions return a [`Result`].

#![warn(missing_docs)]

mod command;
mod config;
mod datatypes;
mod endpoint;
mod error;
mod namespaces;
mod response;
mod snapshot;
mod speaker;
mod utils;

pub mod blocking;
pub mod device;
pub mod throttle;
pub mod transport;


pub use command::{Command, Param, Value};
pub use config::{Config, DEFAULT_MAX_VOLUME};
pub use datatypes::{ParseSourceError, PowerState, Source, SubMode};
pub use device::{Features, MediaPlayer, MultiRoomDevice};
pub use endpoint::{Endpoint, DEFAULT_PORT};
pub use error::{Error, Result};
pub use namespaces::Namespace;
pub use response::Response;
pub use snapshot::Snapshot;
pub use speaker::Speaker;
pub use utils::{raw_volume, volume_fraction};
