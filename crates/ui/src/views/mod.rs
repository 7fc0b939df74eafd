mod aids;
mod analytics;
mod exams;
mod home;
mod lessons;
mod papers;
mod progress;

#[cfg(test)]
mod view_smoke;

pub use aids::AidsView;
pub use analytics::AnalyticsView;
pub use exams::ExamsView;
pub use home::HomeView;
pub use lessons::LessonsView;
pub use mock_tests::TestsView;
pub use papers::PapersView;
pub use progress::ProgressView;
