use dioxus::prelude::*;

const PAST_PAPER_YEARS: [u16; 3] = [2023, 2022, 2021];

#[component]
pub fn PapersView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Old Question Papers" }
            p { class: "muted", "Practice with previous years' NEET papers and solutions." }
            ul { class: "grid",
                for year in PAST_PAPER_YEARS {
                    li { key: "{year}", class: "card", "NEET {year} — Paper + Solutions" }
                }
            }
        }
    }
}
