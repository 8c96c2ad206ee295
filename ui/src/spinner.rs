use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = String::from("Chargement..."))] message: String) -> Element {
    rsx! {
        div { class: "loading-spinner",
            div { class: "spinner" }
            p { class: "loading-message", "{message}" }
        }
    }
}
