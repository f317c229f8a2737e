//! Answer text builders for scripted agents.

pub fn prediction(n: u32) -> String {
    format!("PREDICTION: {n}")
}

pub fn play(token: &str) -> String {
    format!("I PLAY: {token}")
}

/// A script of plays, in order.
pub fn plays(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| play(t)).collect()
}
