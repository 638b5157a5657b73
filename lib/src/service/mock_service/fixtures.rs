use std::collections::HashMap;
use once_cell::sync::Lazy;

use crate::service::common_structs::EmotionScores;

// Literal sentences with fixed scores: anger, disgust, fear, joy, sadness.
static FIXTURES: Lazy<HashMap<&'static str, [f64; 5]>> = Lazy::new(|| {
    HashMap::from([
        ("I am glad this happened", [0.002, 0.001, 0.003, 0.89, 0.104]),
        ("I am really mad about this", [0.91, 0.02, 0.01, 0.03, 0.03]),
        ("I feel disgusted just hearing about this", [0.15, 0.78, 0.02, 0.01, 0.04]),
        ("I am so sad about this", [0.02, 0.01, 0.05, 0.02, 0.90]),
        ("I am really afraid that this will happen", [0.01, 0.02, 0.88, 0.01, 0.08]),
        ("I love this new technology.", [0.006274985, 0.0025598293, 0.009251528, 0.9680386, 0.049744144]),
        ("I am so happy I am doing this.", [0.001, 0.001, 0.002, 0.985, 0.011]),
        ("I hate working long hours.", [0.75, 0.15, 0.02, 0.01, 0.07]),
        ("I think I am having fun", [0.01, 0.01, 0.02, 0.92, 0.04]),
    ])
});

/// Exact match only: no trimming or case folding.
pub fn lookup(text: &str) -> Option<EmotionScores> {
    FIXTURES.get(text).map(|scores| EmotionScores::from_array(*scores))
}

pub fn sentences() -> impl Iterator<Item = &'static str> {
    FIXTURES.keys().copied()
}
