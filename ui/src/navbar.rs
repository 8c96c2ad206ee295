use dioxus::prelude::*;

#[component]
pub fn Navbar(user_name: String) -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "navbar-brand", "Scolaris" }
            div { class: "navbar-user",
                span { class: "navbar-user-name", "{user_name}" }
                a {
                    href: "/auth/logout",
                    rel: "external",
                    class: "navbar-logout",
                    "Se déconnecter"
                }
            }
        }
    }
}
