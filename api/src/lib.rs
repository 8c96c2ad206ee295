use dioxus::prelude::*;
use types::UserSession;
use types::school::{
    DashboardSnapshot, EspaceCreate, EtudiantCreate, Formateur, FormateurCreate, Formation,
    Promotion,
};

#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<UserSession>> {
    match server::get_session_from_cookie().await {
        Ok(session) => Ok(Some(session)),
        Err(_) => Ok(None),
    }
}

#[post("/api/dashboard/de")]
pub async fn get_de_dashboard() -> ServerFnResult<DashboardSnapshot> {
    let session = server::require_de_session().await?;
    Ok(server::PLATFORM_CLIENT
        .de_dashboard(&session.access_token)
        .await?)
}

#[post("/api/comptes/formateur")]
pub async fn create_formateur(data: FormateurCreate) -> ServerFnResult<()> {
    let session = server::require_de_session().await?;
    server::PLATFORM_CLIENT
        .create_formateur(&session.access_token, &data)
        .await?;
    Ok(())
}

#[post("/api/comptes/etudiant")]
pub async fn create_etudiant(data: EtudiantCreate) -> ServerFnResult<()> {
    let session = server::require_de_session().await?;
    server::PLATFORM_CLIENT
        .create_etudiant(&session.access_token, &data)
        .await?;
    Ok(())
}

#[post("/api/comptes/annees-academiques")]
pub async fn get_annees_academiques() -> ServerFnResult<Vec<String>> {
    let session = server::require_de_session().await?;
    Ok(server::PLATFORM_CLIENT
        .annees_academiques(&session.access_token)
        .await?)
}

#[post("/api/comptes/formations")]
pub async fn get_formations() -> ServerFnResult<Vec<Formation>> {
    let session = server::require_de_session().await?;
    Ok(server::PLATFORM_CLIENT
        .formations(&session.access_token)
        .await?)
}

#[post("/api/comptes/promotions")]
pub async fn get_promotions() -> ServerFnResult<Vec<Promotion>> {
    let session = server::require_de_session().await?;
    Ok(server::PLATFORM_CLIENT
        .promotions(&session.access_token)
        .await?)
}

#[post("/api/comptes/formateurs")]
pub async fn get_formateurs() -> ServerFnResult<Vec<Formateur>> {
    let session = server::require_de_session().await?;
    Ok(server::PLATFORM_CLIENT
        .formateurs(&session.access_token)
        .await?)
}

#[post("/api/espaces/creer")]
pub async fn creer_espace(data: EspaceCreate) -> ServerFnResult<()> {
    let session = server::require_de_session().await?;
    server::PLATFORM_CLIENT
        .creer_espace(&session.access_token, &data)
        .await?;
    Ok(())
}
