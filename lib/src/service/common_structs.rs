use std::fmt;
use serde::{Deserialize, Serialize};


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    // declaration order, also the tie-break order
    pub const ALL: [Emotion; 5] = [Emotion::Anger, Emotion::Disgust, Emotion::Fear, Emotion::Joy, Emotion::Sadness];

    pub fn index(&self) -> usize {
        match self {
            Emotion::Anger => 0,
            Emotion::Disgust => 1,
            Emotion::Fear => 2,
            Emotion::Joy => 3,
            Emotion::Sadness => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Scores for a single text. Every field is `None` when the text was rejected.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct EmotionScores {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
    pub dominant_emotion: Option<Emotion>,
}

impl EmotionScores {
    pub fn invalid() -> Self {
        Self::default()
    }

    pub fn from_scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> Self {
        Self::from_array([anger, disgust, fear, joy, sadness])
    }

    /// Scores indexed in `Emotion::ALL` order.
    pub fn from_array(scores: [f64; 5]) -> Self {
        let [anger, disgust, fear, joy, sadness] = scores;
        Self {
            anger: Some(anger),
            disgust: Some(disgust),
            fear: Some(fear),
            joy: Some(joy),
            sadness: Some(sadness),
            dominant_emotion: Some(dominant_emotion(&scores)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.dominant_emotion.is_some()
    }

    pub fn scores(&self) -> Option<[f64; 5]> {
        Some([self.anger?, self.disgust?, self.fear?, self.joy?, self.sadness?])
    }

    pub fn score(&self, emotion: Emotion) -> Option<f64> {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }
}


/// First maximum wins, so equal scores resolve in `Emotion::ALL` order.
pub fn dominant_emotion(scores: &[f64; 5]) -> Emotion {
    let mut dominant = Emotion::ALL[0];
    for emotion in Emotion::ALL.into_iter().skip(1) {
        if scores[emotion.index()] > scores[dominant.index()] {
            dominant = emotion;
        }
    }
    dominant
}
