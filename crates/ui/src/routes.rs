/// Presentation routes served by the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Lessons,
    Tests,
    Exams,
    Analytics,
    Progress,
    Papers,
    Aids,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Lessons,
        Page::Tests,
        Page::Exams,
        Page::Analytics,
        Page::Progress,
        Page::Papers,
        Page::Aids,
    ];

    /// Pages linked from the navigation header, in display order.
    pub const NAV: [Page; 7] = [
        Page::Lessons,
        Page::Tests,
        Page::Exams,
        Page::Analytics,
        Page::Progress,
        Page::Papers,
        Page::Aids,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Lessons => "/lessons",
            Page::Tests => "/tests",
            Page::Exams => "/exams",
            Page::Analytics => "/analytics",
            Page::Progress => "/progress",
            Page::Papers => "/papers",
            Page::Aids => "/aids",
        }
    }

    /// Label used in the navigation header.
    #[must_use]
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Lessons => "Lessons",
            Page::Tests => "Mock Tests",
            Page::Exams => "Model Exams",
            Page::Analytics => "Analytics",
            Page::Progress => "Progress",
            Page::Papers => "Old Papers",
            Page::Aids => "Aids",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_unique_and_nav_skips_home() {
        let mut paths: Vec<&str> = Page::ALL.iter().map(|page| page.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
        assert!(!Page::NAV.contains(&Page::Home));
    }
}
