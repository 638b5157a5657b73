use serde::{Deserialize, Serialize};

use crate::service::common_structs::EmotionScores;


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionPredictRequest {
    pub raw_document: RawDocument,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawDocument {
    pub text: String,
}

impl EmotionPredictRequest {
    pub fn new(text: &str) -> Self {
        Self {
            raw_document: RawDocument { text: text.to_owned() }
        }
    }
}


#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmotionPredictResponse {
    pub emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmotionPrediction {
    pub emotion: PredictedEmotion,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct PredictedEmotion {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl From<PredictedEmotion> for EmotionScores {
    fn from(emotion: PredictedEmotion) -> Self {
        EmotionScores::from_scores(emotion.anger, emotion.disgust, emotion.fear, emotion.joy, emotion.sadness)
    }
}
