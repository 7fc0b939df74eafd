use dioxus::prelude::*;

// Placeholder insights; no scoring is computed.
const INSIGHTS: [(&str, &str); 3] = [
    ("Strengths", "Biology"),
    ("Weaknesses", "Physics Mechanics"),
    ("Focus", "Chemical Kinetics"),
];

#[component]
pub fn AnalyticsView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Score Analysis" }
            p { class: "muted", "Personalized feedback after each test." }
            div { class: "grid",
                for (label, value) in INSIGHTS {
                    div { key: "{label}", class: "card", "{label}: {value}" }
                }
            }
        }
    }
}
