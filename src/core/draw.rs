use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::save_run;
use crate::errors::{AppError, AppResult};
use crate::models::{ColumnMapping, CreatedRun, Entry, NewRun, WinnerRecord};
use crate::raffle::{
    RandomSource, attach_emails, create_entry_pool, create_prize_pools, effective_tickets,
    extract_prizes_from_entries, map_csv_data, parse_csv, run_draw, run_draw_per_prize,
};
use crate::utils::path::expand_tilde;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::fs;

/// Largest ticket pool a draw will build.
pub const MAX_POOL_TICKETS: i64 = 1_000_000;

/// What the user asked for on the `draw` command line.
#[derive(Debug, Clone, Default)]
pub struct DrawRequest {
    /// Explicit column choices; unset fields are guessed from the headers.
    pub mapping: ColumnMapping,
    /// Prizes in draw order with their winner counts. Empty means "every
    /// prize found in the CSV", or the configured default prize.
    pub prizes: Vec<(String, usize)>,
    /// Winners per prize when a prize has no explicit count.
    pub winners: Option<usize>,
    pub seed: Option<u64>,
    /// Draw each prize only among the tickets bought for it.
    pub per_prize: bool,
    pub save: bool,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub entries: Vec<Entry>,
    pub pool_size: usize,
    pub prize_order: Vec<String>,
    pub winners: Vec<WinnerRecord>,
    pub created: Option<CreatedRun>,
}

impl DrawOutcome {
    pub fn to_new_run(&self) -> NewRun {
        NewRun {
            entries: self.entries.clone(),
            winners: self.winners.clone(),
            total_entries: self.pool_size as i64,
        }
    }
}

pub struct DrawLogic;

impl DrawLogic {
    /// Read `csv_file`, draw winners and, when asked, store the run.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        csv_file: &str,
        req: &DrawRequest,
    ) -> AppResult<DrawOutcome> {
        let path = expand_tilde(csv_file);
        let content = fs::read_to_string(&path)?;

        let mut rng = match req.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut outcome = Self::draw_from_text(&content, cfg, req, &mut rng)?;

        if req.save {
            let created = save_run(&pool.conn, &cfg.user_id, &outcome.to_new_run(), req.is_public)?;

            ttlog_quiet(
                &pool.conn,
                "draw",
                &created.run_id,
                &format!(
                    "{} winners from {} tickets ({})",
                    outcome.winners.len(),
                    outcome.pool_size,
                    path.display()
                ),
            );

            outcome.created = Some(created);
        }

        Ok(outcome)
    }

    /// The whole pipeline on in-memory CSV text, with an injected RNG.
    ///
    /// A CSV without participants is not an error: like a pool of only
    /// negative ticket counts, it draws zero winners.
    pub fn draw_from_text<R: RandomSource>(
        content: &str,
        cfg: &Config,
        req: &DrawRequest,
        rng: &mut R,
    ) -> AppResult<DrawOutcome> {
        let parsed = parse_csv(content);

        let mapping = req.mapping.clone().or(ColumnMapping::guess(&parsed.headers));
        let entries = map_csv_data(&parsed.data, &mapping);
        check_pool_size(&entries)?;
        let entry_pool = create_entry_pool(&entries);

        let per_prize_default = req.winners.unwrap_or(cfg.default_winners);
        let (prize_order, counts) =
            resolve_prizes(&req.prizes, &entries, &cfg.default_prize, per_prize_default);

        let prize_pools = create_prize_pools(&entries);
        let mut winners = if req.per_prize && !prize_pools.is_empty() {
            run_draw_per_prize(&prize_pools, &counts, &prize_order, rng)
        } else {
            run_draw(&entry_pool, &counts, &prize_order, rng)
        };
        attach_emails(&mut winners, &entries);

        Ok(DrawOutcome {
            entries,
            pool_size: entry_pool.len(),
            prize_order,
            winners,
            created: None,
        })
    }
}

fn check_pool_size(entries: &[Entry]) -> AppResult<()> {
    let total = entries
        .iter()
        .map(|e| effective_tickets(e).max(0))
        .fold(0i64, i64::saturating_add);

    if total > MAX_POOL_TICKETS {
        return Err(AppError::TooManyTickets {
            total,
            limit: MAX_POOL_TICKETS,
        });
    }
    Ok(())
}

/// Draw order and winner counts.
///
/// Explicit prizes win; then prizes found in the entries; then the default
/// prize. A repeated explicit prize keeps its first position and its last
/// count.
fn resolve_prizes(
    explicit: &[(String, usize)],
    entries: &[Entry],
    default_prize: &str,
    per_prize_default: usize,
) -> (Vec<String>, HashMap<String, usize>) {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    if !explicit.is_empty() {
        for (name, count) in explicit {
            if !counts.contains_key(name) {
                order.push(name.clone());
            }
            counts.insert(name.clone(), *count);
        }
        return (order, counts);
    }

    order = extract_prizes_from_entries(entries);
    if order.is_empty() {
        order.push(default_prize.to_string());
    }
    for p in &order {
        counts.insert(p.clone(), per_prize_default);
    }

    (order, counts)
}

/// Parse a `--prize` value: `NAME=COUNT`, or `NAME` for the default count.
pub fn parse_prize_spec(spec: &str, default_count: usize) -> AppResult<(String, usize)> {
    let (name, count) = match spec.rsplit_once('=') {
        Some((name, count)) => {
            let count = count
                .trim()
                .parse::<usize>()
                .map_err(|_| AppError::InvalidPrizeSpec(spec.to_string()))?;
            (name.trim(), count)
        }
        None => (spec.trim(), default_count),
    };

    if name.is_empty() {
        return Err(AppError::InvalidPrizeSpec(spec.to_string()));
    }

    Ok((name.to_string(), count))
}
