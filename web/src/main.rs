use dioxus::prelude::*;

mod views;

use views::{Dashboard, Login};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:error")]
    Login { error: Option<String> },
    #[layout(DeLayout)]
        #[route("/")]
        Dashboard {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Scolaris" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// Session-guarded shell around the dashboard. Anything below this layout
/// is only reachable by a logged-in Directeur d'Établissement.
#[component]
fn DeLayout() -> Element {
    let user = use_server_future(api::get_current_user)?;

    match &*user.read() {
        Some(Ok(Some(session))) if session.is_de() => {
            let session = session.clone();
            rsx! {
                div { class: "dashboard-container",
                    ui::Navbar { user_name: session.display_name() }
                    Outlet::<Route> {}
                }
            }
        }
        Some(Ok(Some(_))) => rsx! {
            div { class: "dashboard-container",
                div { class: "error-message", "Accès réservé au Directeur d'Établissement" }
                a { href: "/auth/logout", rel: "external", class: "navbar-logout",
                    "Se déconnecter"
                }
            }
        },
        Some(Ok(None)) | Some(Err(_)) => {
            let nav = navigator();
            nav.push(Route::Login { error: None });
            rsx! {
                div { class: "loading", "Redirection vers la connexion..." }
            }
        }
        None => rsx! {
            div { class: "loading", "Chargement..." }
        },
    }
}
