use dioxus::prelude::dioxus_core::Task;
use dioxus::prelude::*;
use types::messages;
use types::school::{EspaceCreate, Formateur, Formation, Promotion};

use super::{SubmitState, schedule_success_close, submission_error};

const SUCCES_CREATION: &str = "Espace pédagogique créé avec succès !";

#[component]
pub fn CreateEspacePedagogique(on_close: EventHandler<()>, on_success: EventHandler<()>) -> Element {
    let mut form = use_signal(EspaceCreate::default);
    let mut formations = use_signal(Vec::<Formation>::new);
    let mut promotions = use_signal(Vec::<Promotion>::new);
    let mut formateurs = use_signal(Vec::<Formateur>::new);
    let mut loading_data = use_signal(|| true);
    let mut load_error = use_signal(|| None::<&'static str>);
    let mut state = use_signal(|| SubmitState::Idle);
    let mut close_task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Some(task) = close_task.with_mut(|slot| slot.take()) {
            task.cancel();
        }
    });

    // One lookup batch per modal activation, no retry. A failed batch leaves
    // every select empty; the required constraints then block submission.
    use_effect(move || {
        spawn(async move {
            let formations_res = api::get_formations().await;
            let promotions_res = api::get_promotions().await;
            let formateurs_res = api::get_formateurs().await;

            match (formations_res, promotions_res, formateurs_res) {
                (Ok(f), Ok(p), Ok(fo)) => {
                    formations.set(f);
                    promotions.set(p);
                    formateurs.set(fo);
                }
                (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
                    tracing::error!(%err, "espace reference data load failed");
                    load_error.set(Some("Impossible de charger les données nécessaires"));
                }
            }
            loading_data.set(false);
        });
    });

    let on_formation_change = move |e: FormEvent| {
        let id = e.value();
        form.with_mut(|f| {
            f.id_formation = id.clone();
            // The subject name follows the selected formation on every
            // change, even over a manual edit.
            if let Some(nom) = formation_label(&formations.read(), &id) {
                f.nom_matiere = nom.to_string();
            }
        });
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let data = form.read().clone();
        spawn(async move {
            state.set(SubmitState::Submitting);
            match api::creer_espace(data).await {
                Ok(()) => {
                    state.set(SubmitState::Succeeded(SUCCES_CREATION.to_string()));
                    close_task.set(Some(schedule_success_close(on_success)));
                }
                Err(err) => {
                    tracing::error!(%err, "espace creation failed");
                    state.set(SubmitState::Failed(submission_error(
                        &err,
                        messages::ERREUR_CREATION_ESPACE,
                    )));
                }
            }
        });
    };

    if *loading_data.read() {
        return rsx! {
            div { class: "modal-overlay",
                div { class: "modal-content",
                    div { class: "modal-header",
                        h2 { "Créer un espace pédagogique" }
                        button { class: "close-btn", onclick: move |_| on_close.call(()), "×" }
                    }
                    div { class: "create-form",
                        div { class: "loading-select", "Chargement des données..." }
                    }
                }
            }
        };
    }

    let busy = state.read().is_submitting();
    let locked = state.read().locks_submit();

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-content",
                div { class: "modal-header",
                    h2 { "Créer un espace pédagogique" }
                    button { class: "close-btn", onclick: move |_| on_close.call(()), "×" }
                }

                form { class: "create-form", onsubmit: submit,
                    div { class: "form-group",
                        label { r#for: "id_formation", "Formation (Matière)" }
                        select {
                            id: "id_formation",
                            required: true,
                            value: "{form.read().id_formation}",
                            onchange: on_formation_change,
                            option { value: "", "Sélectionner une formation" }
                            for formation in formations.read().iter() {
                                option {
                                    key: "{formation.id_formation}",
                                    value: "{formation.id_formation}",
                                    "{formation.nom_formation}"
                                }
                            }
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "nom_matiere", "Nom de la matière" }
                        input {
                            id: "nom_matiere",
                            r#type: "text",
                            required: true,
                            placeholder: "Ex: Développement Web Avancé",
                            value: "{form.read().nom_matiere}",
                            oninput: move |e| form.with_mut(|f| f.nom_matiere = e.value()),
                        }
                        small { class: "form-help",
                            "Personnalisez le nom si nécessaire (auto-rempli depuis la formation)"
                        }
                    }

                    div { class: "form-row",
                        div { class: "form-group",
                            label { r#for: "id_promotion", "Promotion" }
                            select {
                                id: "id_promotion",
                                required: true,
                                value: "{form.read().id_promotion}",
                                onchange: move |e| form.with_mut(|f| f.id_promotion = e.value()),
                                option { value: "", "Sélectionner une promotion" }
                                for promotion in promotions.read().iter() {
                                    option {
                                        key: "{promotion.id_promotion}",
                                        value: "{promotion.id_promotion}",
                                        "{promotion.libelle}"
                                    }
                                }
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "id_formateur", "Formateur" }
                            select {
                                id: "id_formateur",
                                required: true,
                                value: "{form.read().id_formateur}",
                                onchange: move |e| form.with_mut(|f| f.id_formateur = e.value()),
                                option { value: "", "Sélectionner un formateur" }
                                for formateur in formateurs.read().iter() {
                                    option {
                                        key: "{formateur.id_formateur}",
                                        value: "{formateur.id_formateur}",
                                        {formateur.libelle()}
                                    }
                                }
                            }
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "description", "Description (optionnel)" }
                        textarea {
                            id: "description",
                            rows: "3",
                            placeholder: "Description du cours, objectifs, prérequis...",
                            value: "{form.read().description}",
                            oninput: move |e| form.with_mut(|f| f.description = e.value()),
                        }
                    }

                    if let Some(message) = *load_error.read() {
                        div { class: "alert alert-error", "{message}" }
                    }

                    {match &*state.read() {
                        SubmitState::Failed(message) => rsx! {
                            div { class: "alert alert-error", "{message}" }
                        },
                        SubmitState::Succeeded(message) => rsx! {
                            div { class: "alert alert-success", "{message}" }
                        },
                        _ => rsx! {},
                    }}

                    div { class: "form-actions",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            disabled: busy,
                            onclick: move |_| on_close.call(()),
                            "Annuler"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: locked,
                            if busy { "Création..." } else { "Créer l'espace" }
                        }
                    }
                }
            }
        }
    }
}

/// Display label of the formation with the given id.
fn formation_label<'a>(formations: &'a [Formation], id: &str) -> Option<&'a str> {
    formations
        .iter()
        .find(|f| f.id_formation == id)
        .map(|f| f.nom_formation.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formations() -> Vec<Formation> {
        vec![
            Formation {
                id_formation: "T1".into(),
                nom_formation: "Web Dev".into(),
                description: None,
            },
            Formation {
                id_formation: "T2".into(),
                nom_formation: "Base de données".into(),
                description: Some("SQL et modélisation".into()),
            },
        ]
    }

    #[test]
    fn selecting_a_formation_resolves_its_label() {
        assert_eq!(formation_label(&formations(), "T1"), Some("Web Dev"));
        assert_eq!(formation_label(&formations(), "T2"), Some("Base de données"));
    }

    #[test]
    fn unknown_formation_leaves_the_subject_name_alone() {
        assert_eq!(formation_label(&formations(), "T9"), None);
    }
}
