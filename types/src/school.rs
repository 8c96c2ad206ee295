use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

/// Account role as the platform serializes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    De,
    Formateur,
    Etudiant,
}

impl Role {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::De => "de",
            Role::Formateur => "formateur",
            Role::Etudiant => "etudiant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::De => "DE",
            Role::Formateur => "FORMATEUR",
            Role::Etudiant => "ETUDIANT",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub id_formation: String,
    pub nom_formation: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id_promotion: String,
    pub annee_academique: String,
    pub libelle: String,
    pub date_debut: Date,
    pub date_fin: Date,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formateur {
    pub id_formateur: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    #[serde(default)]
    pub specialite: Option<String>,
    #[serde(default)]
    pub numero_employe: Option<String>,
}

impl Formateur {
    /// Select-option label: "Prénom Nom", with the specialty appended when
    /// one is recorded.
    pub fn libelle(&self) -> String {
        match self.specialite.as_deref() {
            Some(specialite) if !specialite.is_empty() => {
                format!("{} {} ({})", self.prenom, self.nom, specialite)
            }
            _ => format!("{} {}", self.prenom, self.nom),
        }
    }
}

/// One row of the "Comptes créés récemment" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompteRecent {
    pub identifiant: String,
    pub email: String,
    pub nom: String,
    pub prenom: String,
    pub role: Role,
    pub date_creation: DateTime,
    pub actif: bool,
}

/// Aggregate counts. Every field defaults to zero so a partial payload from
/// the platform still renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistiques {
    #[serde(default)]
    pub total_formateurs: u32,
    #[serde(default)]
    pub total_etudiants: u32,
    #[serde(default)]
    pub etudiants_actifs: u32,
    #[serde(default)]
    pub total_promotions: u32,
    #[serde(default)]
    pub total_formations: u32,
}

/// The whole dashboard payload. Replaced wholesale on every reload, never
/// merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub statistiques: Statistiques,
    #[serde(default)]
    pub promotions_recentes: Vec<Promotion>,
    #[serde(default)]
    pub comptes_recents: Vec<CompteRecent>,
}

// Creation payloads. Fields are plain strings so the forms can bind inputs
// directly; optional fields left empty are omitted from the JSON body.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormateurCreate {
    pub email: String,
    pub nom: String,
    pub prenom: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub specialite: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EtudiantCreate {
    pub email: String,
    pub nom: String,
    pub prenom: String,
    pub annee_academique: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EspaceCreate {
    pub id_formation: String,
    pub id_promotion: String,
    pub id_formateur: String,
    pub nom_matiere: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_defaults_missing_counts_to_zero() {
        let snapshot: DashboardSnapshot =
            serde_json::from_str(r#"{"statistiques": {"total_formateurs": 3}}"#).unwrap();
        assert_eq!(snapshot.statistiques.total_formateurs, 3);
        assert_eq!(snapshot.statistiques.total_etudiants, 0);
        assert_eq!(snapshot.statistiques.etudiants_actifs, 0);
        assert!(snapshot.promotions_recentes.is_empty());
        assert!(snapshot.comptes_recents.is_empty());
    }

    #[test]
    fn parses_recent_account_row() {
        let compte: CompteRecent = serde_json::from_str(
            r#"{
                "identifiant": "ETUD-00017",
                "email": "sophie.martin@example.com",
                "nom": "Martin",
                "prenom": "Sophie",
                "role": "ETUDIANT",
                "date_creation": "2025-09-02T08:15:30.123456",
                "actif": true
            }"#,
        )
        .unwrap();
        assert_eq!(compte.role, Role::Etudiant);
        assert_eq!(compte.role.badge_class(), "etudiant");
        assert_eq!(compte.date_creation.strftime("%d/%m/%Y").to_string(), "02/09/2025");
    }

    #[test]
    fn parses_promotion_dates() {
        let promo: Promotion = serde_json::from_str(
            r#"{
                "id_promotion": "PROMO-2024",
                "annee_academique": "2024-2025",
                "libelle": "Promotion 2024-2025",
                "date_debut": "2024-09-01",
                "date_fin": "2025-06-30"
            }"#,
        )
        .unwrap();
        assert_eq!(promo.date_debut.strftime("%d/%m/%Y").to_string(), "01/09/2024");
    }

    #[test]
    fn formateur_libelle_includes_specialty_when_present() {
        let mut formateur = Formateur {
            id_formateur: "FORM-0001".into(),
            nom: "Dupont".into(),
            prenom: "Jean".into(),
            email: "jean.dupont@example.com".into(),
            specialite: Some("Développement Web".into()),
            numero_employe: None,
        };
        assert_eq!(formateur.libelle(), "Jean Dupont (Développement Web)");

        formateur.specialite = None;
        assert_eq!(formateur.libelle(), "Jean Dupont");

        formateur.specialite = Some(String::new());
        assert_eq!(formateur.libelle(), "Jean Dupont");
    }

    #[test]
    fn empty_optional_fields_are_omitted_from_payloads() {
        let body = serde_json::to_value(FormateurCreate {
            email: "f@example.com".into(),
            nom: "Dupont".into(),
            prenom: "Jean".into(),
            specialite: String::new(),
        })
        .unwrap();
        assert!(body.get("specialite").is_none());

        let body = serde_json::to_value(EspaceCreate {
            id_formation: "F1".into(),
            id_promotion: "P1".into(),
            id_formateur: "FO1".into(),
            nom_matiere: "Développement Web".into(),
            description: "Objectifs du cours".into(),
        })
        .unwrap();
        assert_eq!(body["description"], "Objectifs du cours");
    }
}
