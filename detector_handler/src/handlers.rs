use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use emotion_detection::service::common_structs::EmotionScores;
use emotion_detection::service::CommonService;
use serde::Deserialize;
use tracing::{debug, info};

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

const INDEX_PAGE: &str = include_str!("../templates/index.html");


#[derive(Debug, Deserialize)]
pub struct DetectorParams {
    #[serde(rename = "textToAnalyze")]
    pub text_to_analyze: Option<String>,
}


fn build_text_response(body: String) -> Response {
    let mut text_header = HeaderMap::new();
    text_header.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    (text_header, body).into_response()
}

// Integral scores keep a trailing ".0", e.g. 1.0 rather than 1.
fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

// Request text stays out of info logs.
fn describe_text(text: &str) -> String {
    format!("{} chars", text.chars().count())
}

pub fn format_scores(scores: &EmotionScores) -> Option<String> {
    let dominant = scores.dominant_emotion?;
    let [anger, disgust, fear, joy, sadness] = scores.scores()?.map(format_score);
    Some(format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        anger, disgust, fear, joy, sadness, dominant
    ))
}


pub async fn render_index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn emotion_detector(
    State(service): State<CommonService>,
    Query(params): Query<DetectorParams>
) -> Response {
    let text = params.text_to_analyze.unwrap_or_default();
    info!("textToAnalyze: {}", describe_text(&text));
    debug!("textToAnalyze: {}", text);

    let scores = service.watson.classify(&text).await;
    let body = format_scores(&scores).unwrap_or_else(|| INVALID_TEXT_MESSAGE.to_owned());
    info!("response: {}", body);

    build_text_response(body)
}
