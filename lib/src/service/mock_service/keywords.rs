use std::ops::RangeInclusive;

use crate::service::common_structs::Emotion;

pub const PRIMARY_RANGE: RangeInclusive<f64> = 0.7..=0.95;
pub const SECONDARY_FLOOR: f64 = 0.001;

pub const NEUTRAL_JOY_RANGE: RangeInclusive<f64> = 0.2..=0.4;
pub const NEUTRAL_OTHER_RANGE: RangeInclusive<f64> = 0.1..=0.2;


#[derive(Debug)]
pub struct KeywordCategory {
    pub primary: Emotion,
    pub words: &'static [&'static str],
    // upper bound per emotion in `Emotion::ALL` order; the primary slot is unused
    pub secondary_ceilings: [f64; 5],
}

impl KeywordCategory {
    pub fn matches(&self, lowercase_text: &str) -> bool {
        self.words.iter().any(|word| lowercase_text.contains(word))
    }

    /// `None` for the primary emotion, which is drawn from `PRIMARY_RANGE`.
    pub fn secondary_range(&self, emotion: Emotion) -> Option<RangeInclusive<f64>> {
        if emotion == self.primary {
            return None;
        }
        Some(SECONDARY_FLOOR..=self.secondary_ceilings[emotion.index()])
    }
}


// Checked in this order; the first category with a match wins.
pub static CATEGORIES: [KeywordCategory; 5] = [
    KeywordCategory {
        primary: Emotion::Joy,
        words: &["happy", "joy", "love", "great", "awesome", "wonderful", "amazing", "excellent", "fantastic", "fun"],
        secondary_ceilings: [0.05, 0.05, 0.05, 0.0, 0.05],
    },
    KeywordCategory {
        primary: Emotion::Anger,
        words: &["angry", "mad", "hate", "furious", "annoyed", "irritated"],
        secondary_ceilings: [0.0, 0.1, 0.05, 0.05, 0.1],
    },
    KeywordCategory {
        primary: Emotion::Sadness,
        words: &["sad", "depressed", "unhappy", "miserable", "disappointed"],
        secondary_ceilings: [0.05, 0.05, 0.1, 0.05, 0.0],
    },
    KeywordCategory {
        primary: Emotion::Fear,
        words: &["afraid", "scared", "fearful", "terrified", "worried", "anxious"],
        secondary_ceilings: [0.05, 0.05, 0.0, 0.05, 0.1],
    },
    KeywordCategory {
        primary: Emotion::Disgust,
        words: &["disgusted", "disgusting", "gross", "revolting", "repulsive"],
        secondary_ceilings: [0.1, 0.0, 0.05, 0.05, 0.05],
    },
];

pub fn find_category(lowercase_text: &str) -> Option<&'static KeywordCategory> {
    CATEGORIES.iter().find(|category| category.matches(lowercase_text))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_has_no_secondary_range() {
        for category in CATEGORIES.iter() {
            assert!(category.secondary_range(category.primary).is_none());
            for emotion in Emotion::ALL.into_iter().filter(|e| *e != category.primary) {
                let range = category.secondary_range(emotion).unwrap();
                assert!(range.start() < range.end(), "{:?} {:?}", category.primary, emotion);
            }
        }
    }

    #[test]
    fn categories_in_priority_order() {
        let order: Vec<Emotion> = CATEGORIES.iter().map(|c| c.primary).collect();
        assert_eq!(order, vec![Emotion::Joy, Emotion::Anger, Emotion::Sadness, Emotion::Fear, Emotion::Disgust]);
        assert_eq!(find_category("i hate this").map(|c| c.primary), Some(Emotion::Anger));
        assert!(find_category("the meeting is at noon").is_none());
    }
}
