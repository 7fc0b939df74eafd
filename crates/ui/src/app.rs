use dioxus::prelude::*;

use crate::routes::Page;
use crate::views::{
    AidsView, AnalyticsView, ExamsView, HomeView, LessonsView, PapersView, ProgressView,
    TestsView,
};

pub const APP_NAME: &str = "NEET Prep Pro";
pub const APP_DESCRIPTION: &str =
    "Daily lessons, mock tests, model exams, and adaptive learning for NEET.";

const STYLE: &str = "
body { margin: 0; font-family: system-ui, sans-serif; color: #111827; background: #fff; }
header { border-bottom: 1px solid #e5e7eb; }
nav { max-width: 80rem; margin: 0 auto; padding: 1rem 1.5rem; display: flex; justify-content: space-between; align-items: center; }
nav .brand { font-size: 1.25rem; font-weight: 600; color: #1d4ed8; text-decoration: none; }
nav .links { display: flex; gap: 1rem; font-size: 0.875rem; }
nav .links a { color: inherit; text-decoration: none; }
main { max-width: 80rem; margin: 0 auto; padding: 2rem 1.5rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 0.75rem; padding: 0; list-style: none; }
.card { border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 1rem; color: inherit; text-decoration: none; display: block; }
.muted { color: #4b5563; }
";

/// Render a page as a complete HTML document.
///
/// dioxus has no `html` element, so the component renders `head` and `body`
/// and the document element is added around them here.
#[must_use]
pub fn render_page(page: Page) -> String {
    let mut dom = VirtualDom::new_with_props(PageDocument, PageDocumentProps { page });
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    )
}

#[component]
fn PageDocument(page: Page) -> Element {
    let title = match page {
        Page::Home => APP_NAME.to_string(),
        other => format!("{} · {APP_NAME}", other.nav_label()),
    };

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "description", content: APP_DESCRIPTION }
            title { "{title}" }
            style { "{STYLE}" }
        }
        body {
            NavHeader {}
            main { {page_body(page)} }
        }
    }
}

#[component]
fn NavHeader() -> Element {
    rsx! {
        header {
            nav {
                a { class: "brand", href: Page::Home.path(), "{APP_NAME}" }
                div { class: "links",
                    for page in Page::NAV {
                        a { key: "{page.path()}", href: page.path(), "{page.nav_label()}" }
                    }
                }
            }
        }
    }
}

fn page_body(page: Page) -> Element {
    match page {
        Page::Home => rsx! { HomeView {} },
        Page::Lessons => rsx! { LessonsView {} },
        Page::Tests => rsx! { TestsView {} },
        Page::Exams => rsx! { ExamsView {} },
        Page::Analytics => rsx! { AnalyticsView {} },
        Page::Progress => rsx! { ProgressView {} },
        Page::Papers => rsx! { PapersView {} },
        Page::Aids => rsx! { AidsView {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_renders_the_navigation_shell() {
        for page in Page::ALL {
            let html = render_page(page);
            assert!(html.starts_with("<!DOCTYPE html>"), "missing doctype for {page:?}");
            assert!(html.contains(APP_NAME), "missing brand in {html}");
            for link in Page::NAV {
                let href = format!("href=\"{}\"", link.path());
                assert!(html.contains(&href), "missing {href} in {html}");
            }
        }
    }

    #[test]
    fn document_element_wraps_head_and_body() {
        let html = render_page(Page::Home);
        assert!(
            html.starts_with("<!DOCTYPE html><html lang=\"en\">"),
            "unexpected document start: {html}"
        );
        assert!(html.ends_with("</html>"), "unexpected document end: {html}");
        assert!(html.contains("<head") && html.contains("<body"), "missing head or body in {html}");
        assert_eq!(html.matches("<html").count(), 1, "nested html element in {html}");
    }

    #[test]
    fn page_titles_name_the_section() {
        let html = render_page(Page::Papers);
        assert!(html.contains("Old Papers · NEET Prep Pro"), "missing title in {html}");
    }
}
