pub mod cmd;
pub use cmd::IntoCmd;

pub mod config;
pub use config::{Category, Config};

pub mod error;
pub use error::Error;

pub mod reply;

pub mod session;
pub use session::{Session, Transcript, TranscriptEntry};

pub mod tour;

pub const DEFAULT_PORT: u16 = 6379;
pub const DEFAULT_HOST: &str = "127.0.0.1";

pub type TourResult<T> = std::result::Result<T, crate::error::Error>;
