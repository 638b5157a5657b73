pub mod structs;

use anyhow::{bail, Context, Result};
use rand::Rng;
use reqwest::{header::{HeaderMap, HeaderName, HeaderValue}, Client, StatusCode};
use tracing::{debug, warn};

use structs::{EmotionPredictRequest, EmotionPredictResponse};
use crate::config::{DetectorConfig, MODEL_ID_HEADER};
use crate::utilities::is_blank;
use super::common_structs::EmotionScores;
use super::mock_service::MockService;


#[derive(Debug)]
pub enum RemoteOutcome {
    Success(EmotionScores),
    // 400 from the API: the text itself was rejected
    Invalid,
    Failure(anyhow::Error),
}


#[derive(Debug, Clone)]
pub struct WatsonService {
    client: Client,
    url: String,
    headers: HeaderMap,
    fallback: MockService,
}

impl WatsonService {
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Error building http client")?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(MODEL_ID_HEADER),
            HeaderValue::from_str(&config.model_id).context("Invalid model id")?,
        );

        Ok(Self {
            client,
            url: config.api_url.to_owned(),
            headers,
            fallback: MockService::new(),
        })
    }

    pub fn fallback(&self) -> &MockService {
        &self.fallback
    }

    /// Never fails: anything other than a success or a 400 is scored by the mock service.
    pub async fn classify(&self, text: &str) -> EmotionScores {
        if is_blank(text) {
            return EmotionScores::invalid();
        }
        let outcome = self.predict(text).await;
        self.settle(outcome, text, &mut rand::thread_rng())
    }

    pub async fn classify_with_rng<R: Rng + Send + ?Sized>(&self, text: &str, rng: &mut R) -> EmotionScores {
        if is_blank(text) {
            return EmotionScores::invalid();
        }
        let outcome = self.predict(text).await;
        self.settle(outcome, text, rng)
    }

    fn settle<R: Rng + ?Sized>(&self, outcome: RemoteOutcome, text: &str, rng: &mut R) -> EmotionScores {
        match outcome {
            RemoteOutcome::Success(scores) => scores,
            RemoteOutcome::Invalid => EmotionScores::invalid(),
            RemoteOutcome::Failure(error) => {
                warn!("Emotion API not accessible, using mock scorer: {:#}", error);
                self.fallback.classify_with_rng(text, rng)
            },
        }
    }

    pub async fn predict(&self, text: &str) -> RemoteOutcome {
        match self.send(text).await {
            Ok(Some(scores)) => RemoteOutcome::Success(scores),
            Ok(None) => RemoteOutcome::Invalid,
            Err(error) => RemoteOutcome::Failure(error),
        }
    }

    // Ok(None) when the API rejects the text.
    async fn send(&self, text: &str) -> Result<Option<EmotionScores>> {
        let response = self.client
            .post(&self.url)
            .headers(self.headers.clone())
            .json(&EmotionPredictRequest::new(text))
            .send()
            .await
            .context("Error sending emotion predict request")?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            debug!("emotion api rejected text: {}", text);
            return Ok(None);
        }
        if !status.is_success() {
            bail!("Unexpected status from emotion api: {}", status);
        }

        let body_string = response.text().await.context("Error reading emotion predict response")?;
        debug!("response_body: {}", body_string);

        Ok(Some(parse_prediction(&body_string)?))
    }
}


pub fn parse_prediction(body: &str) -> Result<EmotionScores> {
    let response = serde_json::from_str::<EmotionPredictResponse>(body).context("Error parsing emotion predict response")?;
    let prediction = response.emotion_predictions.first().context("No emotion prediction in response")?;
    Ok(prediction.emotion.into())
}
