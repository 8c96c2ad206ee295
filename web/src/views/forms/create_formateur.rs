use dioxus::prelude::dioxus_core::Task;
use dioxus::prelude::*;
use types::messages;
use types::school::FormateurCreate;

use super::{SubmitState, schedule_success_close, submission_error};

const SUCCES_CREATION: &str =
    "Formateur créé avec succès ! Un email a été envoyé avec les identifiants.";

#[component]
pub fn CreateFormateur(on_close: EventHandler<()>, on_success: EventHandler<()>) -> Element {
    let mut form = use_signal(FormateurCreate::default);
    let mut state = use_signal(|| SubmitState::Idle);
    let mut close_task = use_signal(|| None::<Task>);

    // A torn-down form must not fire the delayed close+reload callback.
    use_drop(move || {
        if let Some(task) = close_task.with_mut(|slot| slot.take()) {
            task.cancel();
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let data = form.read().clone();
        spawn(async move {
            state.set(SubmitState::Submitting);
            match api::create_formateur(data).await {
                Ok(()) => {
                    state.set(SubmitState::Succeeded(SUCCES_CREATION.to_string()));
                    close_task.set(Some(schedule_success_close(on_success)));
                }
                Err(err) => {
                    tracing::error!(%err, "formateur creation failed");
                    state.set(SubmitState::Failed(submission_error(
                        &err,
                        messages::ERREUR_CREATION_FORMATEUR,
                    )));
                }
            }
        });
    };

    let busy = state.read().is_submitting();
    let locked = state.read().locks_submit();

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-content",
                div { class: "modal-header",
                    h2 { "Créer un compte formateur" }
                    button { class: "close-btn", onclick: move |_| on_close.call(()), "×" }
                }

                form { class: "create-form", onsubmit: submit,
                    div { class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            placeholder: "formateur@example.com",
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
                                placeholder: "Dupont",
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
                                placeholder: "Jean",
                                value: "{form.read().prenom}",
                                oninput: move |e| form.with_mut(|f| f.prenom = e.value()),
                            }
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "specialite", "Spécialité (optionnel)" }
                        input {
                            id: "specialite",
                            r#type: "text",
                            placeholder: "Développement Web, Base de données...",
                            value: "{form.read().specialite}",
                            oninput: move |e| form.with_mut(|f| f.specialite = e.value()),
                        }
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
                            if busy { "Création..." } else { "Créer le formateur" }
                        }
                    }
                }
            }
        }
    }
}
