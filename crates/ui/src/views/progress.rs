use dioxus::prelude::*;

#[component]
pub fn ProgressView() -> Element {
    let streak_days = 5;
    let chapters_mastered = 12;

    rsx! {
        div { class: "page",
            h2 { "Progress" }
            p { class: "muted", "Track your improvement over time." }
            div { class: "card",
                "Weekly streak: {streak_days} days • Chapters mastered: {chapters_mastered}"
            }
        }
    }
}
