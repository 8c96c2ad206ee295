use reqwest::{Client, Method, RequestBuilder, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use types::school::{
    DashboardSnapshot, EspaceCreate, EtudiantCreate, Formateur, FormateurCreate, Formation,
    Promotion, Role,
};
use types::{Result, UserSession, messages};

use crate::CONFIG;

pub static PLATFORM_CLIENT: LazyLock<PlatformClient> =
    LazyLock::new(|| PlatformClient::new(CONFIG.platform_url.clone()));

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
    async fn try_send_created(self, fallback: &str) -> Result<()>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = rejection_detail(&body)
                .unwrap_or_else(|| format!("réponse {status} du service scolarité"));
            return Err(message.into());
        }

        match serde_json::from_slice(&body) {
            Ok(r) => Ok(r),
            Err(error) => {
                // NOTE: We don't want to log these responses in production, but
                // they can be useful for debugging.
                // tracing::debug!(?error, ?body, "failed to parse response");
                Err(error.into())
            }
        }
    }

    /// Send a creation request. Any failure without a structured `detail`
    /// (transport error included) surfaces as the form's fixed fallback.
    async fn try_send_created(self, fallback: &str) -> Result<()> {
        let response = match self.send().await {
            Ok(r) => r,
            Err(error) => {
                tracing::error!(%error, "platform request failed");
                return Err(fallback.into());
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(rejection_detail(&body)
            .unwrap_or_else(|| fallback.to_string())
            .into())
    }
}

/// Extract the FastAPI-style `detail` string from a rejection body.
///
/// Validation rejections carry a list under `detail`; those don't parse
/// here and fall back like a missing detail.
fn rejection_detail(body: &[u8]) -> Option<String> {
    #[derive(Deserialize)]
    struct Rejection {
        detail: String,
    }

    serde_json::from_slice::<Rejection>(body)
        .ok()
        .map(|r| r.detail)
}

/// HTTP client for the school-platform REST API. Requests carry the
/// logged-in user's bearer token; the platform enforces its own role rules.
#[derive(Clone)]
pub struct PlatformClient {
    client: Client,
    base_url: Url,
}

impl PlatformClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn request(&self, method: Method, path: &str, token: &SecretString) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;

        Ok(self
            .client
            .request(method, url)
            .bearer_auth(token.expose_secret()))
    }

    fn get(&self, path: &str, token: &SecretString) -> Result<RequestBuilder> {
        self.request(Method::GET, path, token)
    }

    fn post(&self, path: &str, token: &SecretString) -> Result<RequestBuilder> {
        self.request(Method::POST, path, token)
    }

    pub async fn de_dashboard(&self, token: &SecretString) -> Result<DashboardSnapshot> {
        self.get("/api/dashboard/de", token)?.try_send().await
    }

    pub async fn create_formateur(
        &self,
        token: &SecretString,
        data: &FormateurCreate,
    ) -> Result<()> {
        self.post("/api/gestion-comptes/creer-formateur", token)?
            .json(data)
            .try_send_created(messages::ERREUR_CREATION_FORMATEUR)
            .await
    }

    pub async fn create_etudiant(&self, token: &SecretString, data: &EtudiantCreate) -> Result<()> {
        self.post("/api/gestion-comptes/creer-etudiant", token)?
            .json(data)
            .try_send_created(messages::ERREUR_CREATION_ETUDIANT)
            .await
    }

    pub async fn creer_espace(&self, token: &SecretString, data: &EspaceCreate) -> Result<()> {
        self.post("/api/espaces-pedagogiques/creer", token)?
            .json(data)
            .try_send_created(messages::ERREUR_CREATION_ESPACE)
            .await
    }

    pub async fn annees_academiques(&self, token: &SecretString) -> Result<Vec<String>> {
        #[derive(Deserialize)]
        struct Annees {
            annees_disponibles: Vec<String>,
        }

        let annees: Annees = self
            .get("/api/gestion-comptes/annees-academiques", token)?
            .try_send()
            .await?;
        Ok(annees.annees_disponibles)
    }

    pub async fn formations(&self, token: &SecretString) -> Result<Vec<Formation>> {
        #[derive(Deserialize)]
        struct Formations {
            formations: Vec<Formation>,
        }

        let list: Formations = self
            .get("/api/gestion-comptes/formations", token)?
            .try_send()
            .await?;
        Ok(list.formations)
    }

    pub async fn promotions(&self, token: &SecretString) -> Result<Vec<Promotion>> {
        #[derive(Deserialize)]
        struct Promotions {
            promotions: Vec<Promotion>,
        }

        let list: Promotions = self
            .get("/api/gestion-comptes/promotions", token)?
            .try_send()
            .await?;
        Ok(list.promotions)
    }

    pub async fn formateurs(&self, token: &SecretString) -> Result<Vec<Formateur>> {
        #[derive(Deserialize)]
        struct Formateurs {
            formateurs: Vec<Formateur>,
        }

        let list: Formateurs = self
            .get("/api/gestion-comptes/formateurs", token)?
            .try_send()
            .await?;
        Ok(list.formateurs)
    }

    /// Exchange credentials for a platform token and build the session.
    pub async fn login(&self, email: &str, mot_de_passe: &str) -> Result<UserSession> {
        #[derive(Deserialize)]
        struct Utilisateur {
            identifiant: String,
            email: String,
            nom: String,
            prenom: String,
            role: Role,
        }

        #[derive(Deserialize)]
        struct LoginResponse {
            access_token: String,
            utilisateur: Utilisateur,
        }

        let response: LoginResponse = self
            .client
            .post(self.base_url.join("/api/auth/login")?)
            .json(&serde_json::json!({
                "email": email,
                "mot_de_passe": mot_de_passe,
            }))
            .try_send()
            .await?;

        Ok(UserSession {
            identifiant: response.utilisateur.identifiant,
            email: response.utilisateur.email,
            nom: response.utilisateur.nom,
            prenom: response.utilisateur.prenom,
            role: response.utilisateur.role,
            access_token: response.access_token.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_structured_detail_verbatim() {
        let body = r#"{"detail": "Cet email est déjà utilisé"}"#.as_bytes();
        assert_eq!(
            rejection_detail(body).as_deref(),
            Some("Cet email est déjà utilisé")
        );
    }

    #[test]
    fn missing_or_unstructured_detail_yields_none() {
        assert_eq!(rejection_detail(b""), None);
        assert_eq!(rejection_detail(b"Internal Server Error"), None);
        assert_eq!(rejection_detail(br#"{"message": "boom"}"#), None);
        // FastAPI validation errors: detail is a list, not a string.
        assert_eq!(
            rejection_detail(br#"{"detail": [{"loc": ["body", "email"], "msg": "invalid"}]}"#),
            None
        );
    }
}
