use dioxus::prelude::*;

#[component]
pub fn Login(error: Option<String>) -> Element {
    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Scolaris" }
                    p { class: "login-subtitle", "Console du Directeur d'Établissement" }
                }
                if let Some(message) = error.as_ref() {
                    div { class: "alert alert-error", "{message}" }
                }
                form {
                    action: "/auth/login",
                    method: "post",
                    div { class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            name: "email",
                            r#type: "email",
                            required: true,
                            placeholder: "directeur@example.com",
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "mot_de_passe", "Mot de passe" }
                        input {
                            id: "mot_de_passe",
                            name: "mot_de_passe",
                            r#type: "password",
                            required: true,
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Se connecter"
                    }
                }
            }
        }
    }
}
