use dioxus::prelude::*;

const AIDS: [&str; 3] = ["Quick Quiz", "Flashcards", "Concept Animations"];

#[component]
pub fn AidsView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Interactive Teaching Aids" }
            p { class: "muted", "Quizzes, flashcards, and animations to reinforce concepts." }
            div { class: "grid",
                for aid in AIDS {
                    div { key: "{aid}", class: "card", "{aid}" }
                }
            }
        }
    }
}
