//! JSON endpoints under `/api`.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use prep_core::model::{
    AnswerOption, Chapter, ChapterId, LessonSummary, MockTest, Question, QuestionId, Subject,
    TestKind,
};
use serde::Serialize;
use tracing::error;

use crate::AppState;

pub const SEED_FAILED: &str = "Seed failed";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lessons", get(list_lessons))
        .route("/tests", get(list_tests))
        .route("/seed", post(seed))
        .route("/chapters", get(list_chapters))
        .route("/chapters/{id}", get(get_chapter))
        .route("/questions/{id}", get(get_question))
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

#[derive(Debug, Serialize)]
pub struct LessonsResponse {
    pub lessons: Vec<LessonSummary>,
}

pub async fn list_lessons(State(state): State<AppState>) -> Json<LessonsResponse> {
    Json(LessonsResponse {
        lessons: state.services.catalog().list_lessons(),
    })
}

#[derive(Debug, Serialize)]
pub struct TestItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TestKind,
    pub questions: u32,
}

impl From<&MockTest> for TestItem {
    fn from(test: &MockTest) -> Self {
        Self {
            id: test.id().to_string(),
            title: test.title().to_owned(),
            kind: test.kind(),
            questions: test.question_count(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TestsResponse {
    pub tests: Vec<TestItem>,
}

pub async fn list_tests(State(state): State<AppState>) -> Response {
    match state.services.catalog().list_tests() {
        Ok(tests) => Json(TestsResponse {
            tests: tests.iter().map(TestItem::from).collect(),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "failed to build test listing");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load tests")
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSucceeded {
    pub ok: bool,
    pub chapters_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SeedFailed {
    pub ok: bool,
    pub error: &'static str,
}

/// Runs the seed operation. Failures are logged by the seed service and
/// reported with a generic body.
pub async fn seed(State(state): State<AppState>) -> Response {
    match state.services.seed().run().await {
        Ok(report) => Json(SeedSucceeded {
            ok: true,
            chapters_count: report.chapters_count,
        })
        .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SeedFailed {
                ok: false,
                error: SEED_FAILED,
            }),
        )
            .into_response(),
    }
}

#[derive(Debug, Serialize)]
pub struct ChapterItem {
    pub id: String,
    pub subject: Subject,
    pub title: String,
}

impl From<&Chapter> for ChapterItem {
    fn from(chapter: &Chapter) -> Self {
        Self {
            id: chapter.id().to_string(),
            subject: chapter.subject(),
            title: chapter.title().to_owned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChaptersResponse {
    pub chapters: Vec<ChapterItem>,
}

pub async fn list_chapters(State(state): State<AppState>) -> Response {
    match state.services.catalog().list_chapters().await {
        Ok(chapters) => Json(ChaptersResponse {
            chapters: chapters.iter().map(ChapterItem::from).collect(),
        })
        .into_response(),
        Err(e) => {
            error!(error = %e, "failed to list chapters");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load chapters")
        }
    }
}

pub async fn get_chapter(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = ChapterId::new(id) else {
        return error_response(StatusCode::NOT_FOUND, "Chapter not found");
    };
    match state.services.catalog().get_chapter(&id).await {
        Ok(Some(chapter)) => Json(ChapterItem::from(&chapter)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Chapter not found"),
        Err(e) => {
            error!(error = %e, chapter = %id, "failed to load chapter");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load chapter")
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionItem {
    pub idx: u32,
    pub text: String,
    pub is_correct: bool,
}

impl From<&AnswerOption> for OptionItem {
    fn from(option: &AnswerOption) -> Self {
        Self {
            idx: option.idx(),
            text: option.text().to_owned(),
            is_correct: option.is_correct(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub chapter_id: String,
    pub text: String,
    pub difficulty: u8,
    pub options: Vec<OptionItem>,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id().to_string(),
            chapter_id: question.chapter_id().to_string(),
            text: question.text().to_owned(),
            difficulty: question.difficulty(),
            options: question.options().iter().map(OptionItem::from).collect(),
        }
    }
}

pub async fn get_question(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = QuestionId::new(id) else {
        return error_response(StatusCode::NOT_FOUND, "Question not found");
    };
    match state.services.catalog().get_question(&id).await {
        Ok(Some(question)) => Json(QuestionResponse::from(&question)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Question not found"),
        Err(e) => {
            error!(error = %e, question = %id, "failed to load question");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load question")
        }
    }
}
