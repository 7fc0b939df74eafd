use dioxus::prelude::*;
use prep_core::catalog::SeedDataset;

#[component]
pub fn LessonsView() -> Element {
    let chapters = match SeedDataset::demo() {
        Ok(dataset) => dataset.chapters,
        Err(err) => return rsx! { p { class: "error", "{err}" } },
    };

    rsx! {
        div { class: "page",
            h2 { "Daily Lessons" }
            p { class: "muted", "Browse lessons by subject and chapter." }
            ul { class: "grid",
                for chapter in chapters {
                    li { key: "{chapter.id()}", class: "card",
                        "{chapter.subject().label()} — {chapter.title()}"
                    }
                }
            }
        }
    }
}
