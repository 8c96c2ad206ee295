mod error;
pub mod messages;
pub mod school;
mod session;

pub use error::{Error, Result};
pub use session::{SESSION_COOKIE_NAME, UserSession, decode_session, encode_session};
