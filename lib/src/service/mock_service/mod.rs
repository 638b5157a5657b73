pub mod fixtures;
pub mod keywords;

use rand::Rng;
use tracing::debug;

use keywords::{find_category, NEUTRAL_JOY_RANGE, NEUTRAL_OTHER_RANGE, PRIMARY_RANGE};
use crate::utilities::{is_blank, normalize};
use super::common_structs::{Emotion, EmotionScores};


/// Network-free scorer used when the emotion API cannot be reached.
#[derive(Debug, Clone, Default)]
pub struct MockService;

impl MockService {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str) -> EmotionScores {
        self.classify_with_rng(text, &mut rand::thread_rng())
    }

    pub fn classify_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> EmotionScores {
        if is_blank(text) {
            return EmotionScores::invalid();
        }

        if let Some(scores) = fixtures::lookup(text) {
            debug!("fixture hit for: {}", text);
            return scores;
        }

        let scores = normalize(self.draw_scores(&text.to_lowercase(), rng));
        EmotionScores::from_array(scores)
    }

    // Raw draws in `Emotion::ALL` order, primary drawn first.
    fn draw_scores<R: Rng + ?Sized>(&self, lowercase_text: &str, rng: &mut R) -> [f64; 5] {
        let mut scores = [0.0; 5];

        let Some(category) = find_category(lowercase_text) else {
            debug!("no keyword match, scoring as neutral");
            for emotion in Emotion::ALL {
                let range = if emotion == Emotion::Joy { NEUTRAL_JOY_RANGE } else { NEUTRAL_OTHER_RANGE };
                scores[emotion.index()] = rng.gen_range(range);
            }
            return scores;
        };

        debug!("keyword match: {}", category.primary);
        scores[category.primary.index()] = rng.gen_range(PRIMARY_RANGE);
        for emotion in Emotion::ALL {
            if let Some(range) = category.secondary_range(emotion) {
                scores[emotion.index()] = rng.gen_range(range);
            }
        }
        scores
    }
}
