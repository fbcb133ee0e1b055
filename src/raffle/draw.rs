//! Weighted sampling without replacement, at the participant level.
//!
//! A pick is uniform over the remaining tickets; once a name wins, every
//! remaining ticket carrying that name leaves the pool.

use crate::models::{Entry, WinnerRecord};
use chrono::{SecondsFormat, Utc};
use rand::{Rng, RngCore};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Draw winners for each prize in `prize_order` from one shared pool.
///
/// A prize absent from `prize_winner_counts` gets no winners. A prize stops
/// early when the pool runs dry; asking for more winners than there are
/// participants is not an error.
pub fn run_draw<R: RandomSource>(
    pool: &[String],
    prize_winner_counts: &HashMap<String, usize>,
    prize_order: &[String],
    rng: &mut R,
) -> Vec<WinnerRecord> {
    let mut remaining = pool.to_vec();
    let mut winners = Vec::new();

    for prize in prize_order {
        let wanted = prize_winner_counts.get(prize).copied().unwrap_or(0);
        draw_prize(&mut remaining, prize, wanted, rng, &mut winners);
    }

    winners
}

/// Draw each prize from its own pool.
///
/// A participant who already won is removed from the pools of the prizes
/// drawn after it.
pub fn run_draw_per_prize<R: RandomSource>(
    prize_pools: &BTreeMap<String, Vec<String>>,
    prize_winner_counts: &HashMap<String, usize>,
    prize_order: &[String],
    rng: &mut R,
) -> Vec<WinnerRecord> {
    let mut already_won: HashSet<String> = HashSet::new();
    let mut winners = Vec::new();

    for prize in prize_order {
        let wanted = prize_winner_counts.get(prize).copied().unwrap_or(0);
        let mut remaining: Vec<String> = prize_pools
            .get(prize)
            .map(|p| {
                p.iter()
                    .filter(|n| !already_won.contains(*n))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let start = winners.len();
        draw_prize(&mut remaining, prize, wanted, rng, &mut winners);
        already_won.extend(winners[start..].iter().map(|w| w.name.clone()));
    }

    winners
}

fn draw_prize<R: RandomSource>(
    remaining: &mut Vec<String>,
    prize: &str,
    wanted: usize,
    rng: &mut R,
    winners: &mut Vec<WinnerRecord>,
) {
    for _ in 0..wanted {
        if remaining.is_empty() {
            break;
        }

        let idx = pick_index(rng, remaining.len());
        let name = remaining[idx].clone();
        remaining.retain(|n| *n != name);

        winners.push(WinnerRecord {
            name,
            prize: prize.to_string(),
            timestamp: now_iso(),
            email: None,
        });
    }
}

fn pick_index<R: RandomSource>(rng: &mut R, len: usize) -> usize {
    let r = rng.next_f64();
    let idx = if r.is_finite() && r > 0.0 {
        (r * len as f64) as usize
    } else {
        0
    };
    idx.min(len - 1)
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Copy each winner's email from the first entry with the same name that
/// has one.
pub fn attach_emails(winners: &mut [WinnerRecord], entries: &[Entry]) {
    let mut emails: HashMap<&str, &str> = HashMap::new();
    for e in entries {
        if let Some(email) = e.email.as_deref().filter(|m| !m.is_empty()) {
            emails.entry(e.name.as_str()).or_insert(email);
        }
    }

    for w in winners.iter_mut() {
        if w.email.is_none() {
            w.email = emails.get(w.name.as_str()).map(|m| m.to_string());
        }
    }
}
