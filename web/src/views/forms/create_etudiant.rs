use dioxus::prelude::dioxus_core::Task;
use dioxus::prelude::*;
use types::messages;
use types::school::EtudiantCreate;

use super::{SubmitState, schedule_success_close, submission_error};

const SUCCES_CREATION: &str =
    "Étudiant créé avec succès ! Un email a été envoyé avec les identifiants.";

#[component]
pub fn CreateEtudiant(on_close: EventHandler<()>, on_success: EventHandler<()>) -> Element {
    let mut form = use_signal(EtudiantCreate::default);
    let mut annees = use_signal(Vec::<String>::new);
    let mut loading_annees = use_signal(|| true);
    let mut load_error = use_signal(|| None::<&'static str>);
    let mut state = use_signal(|| SubmitState::Idle);
    let mut close_task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Some(task) = close_task.with_mut(|slot| slot.take()) {
            task.cancel();
        }
    });

    // One fetch per modal activation, no retry. On failure the year select
    // stays empty, which blocks submission through the required constraint.
    use_effect(move || {
        spawn(async move {
            match api::get_annees_academiques().await {
                Ok(list) => annees.set(list),
                Err(err) => {
                    tracing::error!(%err, "academic years load failed");
                    load_error.set(Some("Impossible de charger les années académiques"));
                }
            }
            loading_annees.set(false);
        });
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let data = form.read().clone();
        spawn(async move {
            state.set(SubmitState::Submitting);
            match api::create_etudiant(data).await {
                Ok(()) => {
                    state.set(SubmitState::Succeeded(SUCCES_CREATION.to_string()));
                    close_task.set(Some(schedule_success_close(on_success)));
                }
                Err(err) => {
                    tracing::error!(%err, "etudiant creation failed");
                    state.set(SubmitState::Failed(submission_error(
                        &err,
                        messages::ERREUR_CREATION_ETUDIANT,
                    )));
                }
            }
        });
    };

    let busy = state.read().is_submitting();
    let locked = state.read().locks_submit() || *loading_annees.read();

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-content",
                div { class: "modal-header",
                    h2 { "Créer un compte étudiant" }
                    button { class: "close-btn", onclick: move |_| on_close.call(()), "×" }
                }

                form { class: "create-form", onsubmit: submit,
                    div { class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            placeholder: "etudiant@example.com",
                            value: "{form.read().email}",
                            oninput: move |e| form.with_mut(|f| f.email = e.value()),
                        }
                    }

                    div { class: "form-row",
                        div { class: "form-group",
                            label { r#for: "nom", "Nom" }
                            input {
                                id: "nom",
                                r#type: "text",
                                required: true,
                                placeholder: "Martin",
                                value: "{form.read().nom}",
                                oninput: move |e| form.with_mut(|f| f.nom = e.value()),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "prenom", "Prénom" }
                            input {
                                id: "prenom",
                                r#type: "text",
                                required: true,
                                placeholder: "Sophie",
                                value: "{form.read().prenom}",
                                oninput: move |e| form.with_mut(|f| f.prenom = e.value()),
                            }
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "annee_academique", "Année académique" }
                        if *loading_annees.read() {
                            div { class: "loading-select", "Chargement des années..." }
                        } else {
                            select {
                                id: "annee_academique",
                                required: true,
                                value: "{form.read().annee_academique}",
                                onchange: move |e| form.with_mut(|f| f.annee_academique = e.value()),
                                option { value: "", "Sélectionner une année" }
                                for annee in annees.read().iter() {
                                    option { key: "{annee}", value: "{annee}", "{annee}" }
                                }
                            }
                        }
                        small { class: "form-help",
                            "La promotion sera créée automatiquement si elle n'existe pas"
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
                            if busy { "Création..." } else { "Créer l'étudiant" }
                        }
                    }
                }
            }
        }
    }
}
