use crate::app::render_page;
use crate::routes::Page;

#[test]
fn home_view_links_every_feature() {
    let html = render_page(Page::Home);
    assert!(html.contains("Welcome to NEET Prep Pro"), "missing heading in {html}");
    for title in ["Daily Lessons", "Mock Tests", "Monthly Model Exams", "Old Papers"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
}

#[test]
fn lessons_view_lists_seeded_chapters() {
    let html = render_page(Page::Lessons);
    assert!(html.contains("Physics — Kinematics"), "missing chapter in {html}");
    assert!(html.contains("Chemistry — Chemical Bonding"), "missing chapter in {html}");
    assert!(html.contains("Biology — Cell Structure"), "missing chapter in {html}");
}

#[test]
fn tests_view_shows_question_count_and_duration() {
    let html = render_page(Page::Tests);
    assert!(html.contains("Full NEET"), "missing test title in {html}");
    assert!(html.contains("180 questions · 200 minutes"), "missing details in {html}");
    assert!(html.contains("45 questions · 45 minutes"), "missing details in {html}");
}

#[test]
fn static_pages_render_their_headings() {
    let cases = [
        (Page::Exams, "Monthly Model Exams"),
        (Page::Analytics, "Score Analysis"),
        (Page::Progress, "Weekly streak: 5 days"),
        (Page::Papers, "NEET 2021 — Paper + Solutions"),
        (Page::Aids, "Interactive Teaching Aids"),
    ];
    for (page, expected) in cases {
        let html = render_page(page);
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}
