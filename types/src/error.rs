use serde::{Deserialize, Serialize};

/// A serializable error for client rendering.
///
/// Server functions bubble this up as a `ServerFnError`, whose message the
/// forms display verbatim. When the platform rejected a request with a
/// structured `detail`, `message` carries that detail unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self {
            message: s.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        // The alternate format includes the error chain.
        Self {
            message: format!("{:#}", err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "server")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Build an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn err_macro_formats_message() {
        let e = err!("compte '{}' introuvable", "FORM-0042");
        assert_eq!(e.message, "compte 'FORM-0042' introuvable");
        assert_eq!(e.to_string(), "compte 'FORM-0042' introuvable");
    }

    #[test]
    fn survives_serde_round_trip() {
        let e = Error::from("Cet email est déjà utilisé");
        let json = serde_json::to_string(&e).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(back.message, e.message);
    }
}
