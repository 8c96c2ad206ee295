//! Fixed per-form fallback strings.
//!
//! Shared by the server side (substituted when the platform rejects a
//! creation without a structured `detail`) and the client side (shown when
//! the request never reached the platform at all).

pub const ERREUR_CREATION_FORMATEUR: &str = "Erreur lors de la création du formateur";
pub const ERREUR_CREATION_ETUDIANT: &str = "Erreur lors de la création de l'étudiant";
pub const ERREUR_CREATION_ESPACE: &str = "Erreur lors de la création de l'espace pédagogique";
