pub mod channel;
pub mod gtp;
pub mod sgf;

pub use channel::{ByteChannel, ChannelReader, ChannelWriter};
pub use gtp::{EngineArgs, GtpBridge, GtpEngine};
pub use sgf::{Loc, Move, Player, Record, RecordError};
