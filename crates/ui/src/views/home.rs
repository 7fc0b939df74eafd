use dioxus::prelude::*;

use crate::routes::Page;

const FEATURES: [(Page, &str, &str); 6] = [
    (Page::Lessons, "Daily Lessons", "New content every day across subjects."),
    (Page::Tests, "Mock Tests", "Timed tests that mimic NEET format."),
    (Page::Exams, "Monthly Model Exams", "Full-length practice every month."),
    (Page::Analytics, "Score Analysis", "Understand strengths and gaps."),
    (Page::Progress, "Progress", "Track improvement over time."),
    (Page::Papers, "Old Papers", "Past exams with solutions."),
];

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page",
            section { class: "card",
                h1 { "Welcome to NEET Prep Pro" }
                p { class: "muted",
                    "Daily lessons in Physics, Chemistry, and Biology. Practice with mock tests and monthly model exams. Get detailed analytics and adaptive recommendations to reach 650/720."
                }
            }
            section { class: "grid",
                for (page, title, blurb) in FEATURES {
                    a { key: "{page.path()}", class: "card", href: page.path(),
                        h3 { "{title}" }
                        p { class: "muted", "{blurb}" }
                    }
                }
            }
        }
    }
}
