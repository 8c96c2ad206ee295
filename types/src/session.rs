use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::school::Role;
use crate::{Result, err};

pub const SESSION_COOKIE_NAME: &str = "scolaris_session";

/// The logged-in user, as carried in the session cookie. `access_token` is
/// the platform bearer token issued at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub identifiant: String,
    pub email: String,
    pub nom: String,
    pub prenom: String,
    pub role: Role,
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
}

impl UserSession {
    pub fn is_de(&self) -> bool {
        self.role == Role::De
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}

pub fn encode_session(session: &UserSession) -> Result<String> {
    let json = serde_json::to_string(session)?;
    use base64::Engine;
    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

pub fn decode_session(encoded: &str) -> Result<UserSession> {
    use base64::Engine;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| err!("invalid session cookie encoding"))?;
    let json = String::from_utf8(bytes).map_err(|_| err!("invalid UTF-8 in session"))?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn session() -> UserSession {
        UserSession {
            identifiant: "DE-0001".into(),
            email: "directeur@example.com".into(),
            nom: "Durand".into(),
            prenom: "Claire".into(),
            role: Role::De,
            access_token: "jwt-token".to_string().into(),
        }
    }

    #[test]
    fn cookie_round_trip() {
        let encoded = encode_session(&session()).unwrap();
        let decoded = decode_session(&encoded).unwrap();
        assert_eq!(decoded.identifiant, "DE-0001");
        assert_eq!(decoded.role, Role::De);
        assert_eq!(decoded.access_token.expose_secret(), "jwt-token");
        assert_eq!(decoded.display_name(), "Claire Durand");
    }

    #[test]
    fn rejects_garbage_cookie() {
        assert!(decode_session("not base64 !!").is_err());
    }

    #[test]
    fn only_de_passes_the_role_check() {
        let mut s = session();
        assert!(s.is_de());
        s.role = Role::Formateur;
        assert!(!s.is_de());
    }
}
