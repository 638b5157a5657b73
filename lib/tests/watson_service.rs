use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use emotion_detection::config::DetectorConfig;
use emotion_detection::service::common_structs::{Emotion, EmotionScores};
use emotion_detection::service::watson_service::{RemoteOutcome, WatsonService};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};


async fn spawn_api(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict", addr)
}

fn service_for(url: &str, timeout: Duration) -> WatsonService {
    let config = DetectorConfig {
        api_url: url.to_owned(),
        timeout,
        ..DetectorConfig::default()
    };
    WatsonService::new(&config).unwrap()
}

async fn predict(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let model = headers.get("grpc-metadata-mm-model-id").and_then(|v| v.to_str().ok());
    if model != Some("emotion_aggregated-workflow_lang_en_stock") {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "unknown model"})));
    }
    let Some(text) = body["raw_document"]["text"].as_str() else {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "missing text"})));
    };
    if text == "reject me" {
        return (StatusCode::BAD_REQUEST, Json(json!({"code": 3, "message": "invalid text"})));
    }
    (StatusCode::OK, Json(json!({
        "emotionPredictions": [{
            "emotion": {"anger": 0.0132, "disgust": 0.0021, "fear": 0.0094, "joy": 0.9571, "sadness": 0.0482},
            "target": "",
            "emotionMentions": []
        }]
    })))
}


#[tokio::test]
async fn success_returns_remote_scores() {
    let url = spawn_api(Router::new().route("/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict", post(predict))).await;
    let service = service_for(&url, Duration::from_secs(3));

    // a fixture sentence still goes to the remote service first
    let scores = service.classify("I am so sad about this").await;
    assert_eq!(scores, EmotionScores::from_scores(0.0132, 0.0021, 0.0094, 0.9571, 0.0482));
    assert_eq!(scores.dominant_emotion, Some(Emotion::Joy));

    assert!(matches!(service.predict("anything").await, RemoteOutcome::Success(_)));
}

#[tokio::test]
async fn bad_request_is_invalid_not_fallback() {
    let url = spawn_api(Router::new().route("/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict", post(predict))).await;
    let service = service_for(&url, Duration::from_secs(3));

    assert!(matches!(service.predict("reject me").await, RemoteOutcome::Invalid));
    assert_eq!(service.classify("reject me").await, EmotionScores::invalid());
}

#[tokio::test]
async fn server_error_falls_back() {
    let app = Router::new().route(
        "/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = spawn_api(app).await;
    let service = service_for(&url, Duration::from_secs(3));

    assert!(matches!(service.predict("I am so sad about this").await, RemoteOutcome::Failure(_)));
    let scores = service.classify("I am so sad about this").await;
    assert_eq!(scores.sadness, Some(0.90));
    assert_eq!(scores.dominant_emotion, Some(Emotion::Sadness));
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let app = Router::new()
        .route("/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict", post(|| async { Json(json!({"emotionPredictions": []})) }));
    let url = spawn_api(app).await;
    let service = service_for(&url, Duration::from_secs(3));

    let scores = service.classify("I am really afraid that this will happen").await;
    assert_eq!(scores.fear, Some(0.88));
    assert_eq!(scores.dominant_emotion, Some(Emotion::Fear));
}

#[tokio::test]
async fn timeout_matches_mock_scorer() {
    let app = Router::new().route(
        "/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let url = spawn_api(app).await;
    let service = service_for(&url, Duration::from_millis(200));
    let text = "I absolutely hate waiting in line";

    let from_client = service.classify_with_rng(text, &mut StdRng::seed_from_u64(11)).await;
    let from_mock = service.fallback().classify_with_rng(text, &mut StdRng::seed_from_u64(11));

    assert_eq!(from_client, from_mock);
    assert_eq!(from_client.dominant_emotion, Some(Emotion::Anger));
}

#[tokio::test]
async fn unreachable_api_falls_back() {
    let service = service_for("http://127.0.0.1:1/EmotionPredict", Duration::from_secs(3));

    let scores = service.classify("I think I am having fun").await;
    assert_eq!(scores.joy, Some(0.92));

    let scores = service.classify("Some text with no keywords").await;
    assert!(scores.is_valid());
    let total: f64 = scores.scores().unwrap().iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

async fn counted_predict(State(hits): State<Arc<AtomicUsize>>) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "emotionPredictions": [{
            "emotion": {"anger": 0.1, "disgust": 0.1, "fear": 0.1, "joy": 0.6, "sadness": 0.1}
        }]
    }))
}

#[tokio::test]
async fn blank_text_never_reaches_the_api() {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict", post(counted_predict))
        .with_state(hits.clone());
    let url = spawn_api(app).await;
    let service = service_for(&url, Duration::from_secs(3));

    assert_eq!(service.classify("").await, EmotionScores::invalid());
    assert_eq!(service.classify("  \n").await, EmotionScores::invalid());
    assert_eq!(service.classify_with_rng("", &mut StdRng::seed_from_u64(3)).await, EmotionScores::invalid());
    assert_eq!(service.classify_with_rng(" \t ", &mut StdRng::seed_from_u64(3)).await, EmotionScores::invalid());
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    // the counter does move for real text
    let scores = service.classify("hello there").await;
    assert_eq!(scores.dominant_emotion, Some(Emotion::Joy));
    assert_eq!(scores.joy, Some(0.6));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
