use dioxus::prelude::*;

/// One aggregate-count tile of the dashboard stats grid.
#[component]
pub fn StatCard(
    title: String,
    value: u32,
    color: String,
    #[props(default)] subtitle: String,
) -> Element {
    rsx! {
        div { class: "stat-card stat-card-{color}",
            div { class: "stat-card-title", "{title}" }
            div { class: "stat-card-value", "{value}" }
            if !subtitle.is_empty() {
                div { class: "stat-card-subtitle", "{subtitle}" }
            }
        }
    }
}
