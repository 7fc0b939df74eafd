use dioxus::prelude::*;

const MODEL_EXAMS: [&str; 3] = ["June Model Exam", "July Model Exam", "August Model Exam"];

#[component]
pub fn ExamsView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Monthly Model Exams" }
            p { class: "muted", "Full-length practice at the end of each month." }
            ul { class: "grid",
                for exam in MODEL_EXAMS {
                    li { key: "{exam}", class: "card", "{exam}" }
                }
            }
        }
    }
}
