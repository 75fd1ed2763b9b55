use std::time::Duration;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{ChartEntry, ChartTableRow};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Renders a count with comma thousands separators, the way kworb prints them.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn chart_table_rows(entries: &[ChartEntry]) -> Vec<ChartTableRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| ChartTableRow {
            rank: i + 1,
            song: e.display_name.clone(),
            daily: format!("{}/day", format_count(e.daily_streams)),
        })
        .collect()
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
