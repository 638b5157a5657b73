// Empty or whitespace-only text never reaches a classifier.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

// Scales the scores so they sum to 1. A zero sum is left untouched.
pub fn normalize(scores: [f64; 5]) -> [f64; 5] {
    let total: f64 = scores.iter().sum();
    if total <= 0.0 {
        return scores;
    }
    scores.map(|score| score / total)
}
