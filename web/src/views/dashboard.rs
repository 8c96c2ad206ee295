use dioxus::prelude::*;
use types::school::DashboardSnapshot;
use ui::{LoadingSpinner, StatCard};

use super::forms::{CreateEspacePedagogique, CreateEtudiant, CreateFormateur};

/// Which creation modal is mounted. At most one at a time; `None` means the
/// dashboard is alone on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveModal {
    Formateur,
    Etudiant,
    Espace,
}

#[component]
pub fn Dashboard() -> Element {
    let mut snapshot = use_signal(|| None::<DashboardSnapshot>);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<&'static str>);
    let mut active_modal = use_signal(|| None::<ActiveModal>);

    let mut load_dashboard = move || {
        spawn(async move {
            loading.set(true);
            match api::get_de_dashboard().await {
                Ok(data) => {
                    // The snapshot is replaced wholesale, never merged.
                    snapshot.set(Some(data));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!(%err, "dashboard load failed");
                    error.set(Some("Impossible de charger les données du dashboard"));
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || {
        load_dashboard();
    });

    // The only reload path besides mount: a creation modal reporting success.
    let mut on_create_success = move || {
        active_modal.set(None);
        load_dashboard();
    };

    if *loading.read() {
        return rsx! {
            LoadingSpinner { message: "Chargement du dashboard..." }
        };
    }

    if let Some(message) = *error.read() {
        return rsx! {
            div { class: "error-message", "{message}" }
        };
    }

    let data = snapshot.read().clone().unwrap_or_default();
    let stats = data.statistiques;

    rsx! {
        div { class: "dashboard-content",
            div { class: "dashboard-header",
                div {
                    h1 { "Dashboard Directeur d'Établissement" }
                    p { "Vue d'ensemble de l'établissement" }
                }
                div { class: "dashboard-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| active_modal.set(Some(ActiveModal::Formateur)),
                        "Créer Formateur"
                    }
                    button {
                        class: "btn btn-success",
                        onclick: move |_| active_modal.set(Some(ActiveModal::Etudiant)),
                        "Créer Étudiant"
                    }
                    button {
                        class: "btn btn-purple",
                        onclick: move |_| active_modal.set(Some(ActiveModal::Espace)),
                        "Créer Espace"
                    }
                }
            }

            div { class: "stats-grid",
                StatCard {
                    title: "Formateurs",
                    value: stats.total_formateurs,
                    color: "blue",
                }
                StatCard {
                    title: "Étudiants",
                    value: stats.total_etudiants,
                    color: "green",
                    subtitle: format!("{} actifs", stats.etudiants_actifs),
                }
                StatCard {
                    title: "Promotions",
                    value: stats.total_promotions,
                    color: "purple",
                }
                StatCard {
                    title: "Formations",
                    value: stats.total_formations,
                    color: "yellow",
                }
            }

            div { class: "dashboard-section",
                h2 { "Promotions récentes" }
                div { class: "table-container",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Année académique" }
                                th { "Libellé" }
                                th { "Date début" }
                                th { "Date fin" }
                            }
                        }
                        tbody {
                            for promo in data.promotions_recentes.iter() {
                                tr { key: "{promo.id_promotion}",
                                    td {
                                        strong { "{promo.annee_academique}" }
                                    }
                                    td { "{promo.libelle}" }
                                    td { {promo.date_debut.strftime("%d/%m/%Y").to_string()} }
                                    td { {promo.date_fin.strftime("%d/%m/%Y").to_string()} }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "dashboard-section",
                h2 { "Comptes créés récemment" }
                div { class: "table-container",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Nom" }
                                th { "Email" }
                                th { "Rôle" }
                                th { "Date création" }
                                th { "Statut" }
                            }
                        }
                        tbody {
                            for compte in data.comptes_recents.iter() {
                                tr { key: "{compte.identifiant}",
                                    td { "{compte.prenom} {compte.nom}" }
                                    td { "{compte.email}" }
                                    td {
                                        span { class: "badge badge-{compte.role.badge_class()}",
                                            "{compte.role}"
                                        }
                                    }
                                    td { {compte.date_creation.strftime("%d/%m/%Y").to_string()} }
                                    td {
                                        span {
                                            class: if compte.actif { "status-badge active" } else { "status-badge inactive" },
                                            if compte.actif { "Actif" } else { "Inactif" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        {match *active_modal.read() {
            Some(ActiveModal::Formateur) => rsx! {
                CreateFormateur {
                    on_close: move |_| active_modal.set(None),
                    on_success: move |_| on_create_success(),
                }
            },
            Some(ActiveModal::Etudiant) => rsx! {
                CreateEtudiant {
                    on_close: move |_| active_modal.set(None),
                    on_success: move |_| on_create_success(),
                }
            },
            Some(ActiveModal::Espace) => rsx! {
                CreateEspacePedagogique {
                    on_close: move |_| active_modal.set(None),
                    on_success: move |_| on_create_success(),
                }
            },
            None => rsx! {},
        }}
    }
}
