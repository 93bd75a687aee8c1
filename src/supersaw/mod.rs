pub mod assist;
pub mod config;
pub mod message;
pub mod spread;

pub use self::assist::{assist, ChannelKind};
pub use self::config::{ConfigError, SupersawConfig};
pub use self::message::{Message, MessageError};
pub use self::spread::{Emission, VoiceSpreadCalculator};
