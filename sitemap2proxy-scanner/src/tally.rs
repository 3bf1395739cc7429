use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What happened to a single replayed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RequestOutcome {
    /// The request was dispatched and a response came back.
    Status(u16),
    /// The request never produced a response (bad URL, DNS failure,
    /// reset, ...). Non-fatal: the replay loop moves on.
    Failed(String),
}

impl RequestOutcome {
    /// Human-readable form for verbose output, e.g. `200 OK`.
    pub fn describe(&self) -> String {
        match self {
            RequestOutcome::Status(code) => {
                match StatusCode::from_u16(*code)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                {
                    Some(reason) => format!("{} {}", code, reason),
                    None => code.to_string(),
                }
            }
            RequestOutcome::Failed(err) => err.clone(),
        }
    }
}

/// Running count of replayed requests, grouped by response status code.
///
/// The BTreeMap keeps the final report sorted ascending by code. The
/// processed counter covers every attempted request, including failed
/// ones, so it matches the number of sitemap entries when a run finishes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseTally {
    counts: BTreeMap<u16, u64>,
    processed: u64,
}

impl ResponseTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &RequestOutcome) {
        self.processed += 1;
        if let RequestOutcome::Status(code) = outcome {
            *self.counts.entry(*code).or_insert(0) += 1;
        }
    }

    /// Number of URLs attempted so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Total responses tallied across all status codes.
    pub fn dispatched(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn counts(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts.iter().map(|(code, count)| (*code, *count))
    }

    /// Render the final stats block.
    pub fn render(&self) -> String {
        let mut report = String::new();
        report.push_str("Stats\n-----\n\n");
        report.push_str(&format!("{} URLs parsed\n\n", self.processed));
        for (code, count) in &self.counts {
            report.push_str(&format!("Code: {} Count: {}\n", code, count));
        }
        report
    }
}
