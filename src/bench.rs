//! src/bench.rs
//!
//! Meetcode rond de optimizer: reproduceerbare willekeurige gewichten en
//! gemiddelde looptijden per (n, k). De optimizer zelf gebruikt geen
//! willekeur en meet geen tijd; alles daarvan zit hier.

use crate::{error::OptimizeError, optimizer, params::BenchParams};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use tracing::info;

/// Eén regel in een experimentrapport.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentRow {
    pub label: String,
    pub n: usize,
    pub k: usize,
    /// Gemiddelde looptijd over alle runs, in seconden.
    pub avg_seconds: f64,
}

impl ExperimentRow {
    /// `n · k`, de verwachte kostenfactor.
    pub fn work(&self) -> usize {
        self.n.saturating_mul(self.k)
    }

    /// Tijd per eenheid `n · k`; 0 als `n · k` nul is.
    pub fn ratio(&self) -> f64 {
        match self.work() {
            0 => 0.0,
            w => self.avg_seconds / w as f64,
        }
    }
}

/// De vaste experimentreeksen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suite {
    /// n varieert, k = 5.
    Sizes,
    /// n = 1000, k varieert.
    FixedN,
    /// Paren met gelijke `n · k`, plus één grotere.
    Mixed,
    /// Oplopende `n · k` van 100 000 tot 2 000 000.
    Product,
}

impl Suite {
    pub const ALL: [Suite; 4] = [Suite::Sizes, Suite::FixedN, Suite::Mixed, Suite::Product];

    /// Herkent de naam zoals die vanuit Python wordt doorgegeven.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sizes" => Some(Suite::Sizes),
            "fixed_n" => Some(Suite::FixedN),
            "mixed" => Some(Suite::Mixed),
            "product" => Some(Suite::Product),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Suite::Sizes => "Sizes",
            Suite::FixedN => "Fix N",
            Suite::Mixed => "Vary Both",
            Suite::Product => "Vary Both",
        }
    }

    /// Aantal gemeten aanroepen per geval: de groottereeks meet één keer,
    /// de andere reeksen middelen over `p.runs`.
    pub fn runs(self, p: &BenchParams) -> usize {
        match self {
            Suite::Sizes => 1,
            _ => p.runs.max(1),
        }
    }

    /// De (n, k)-paren van deze reeks.
    pub fn cases(self) -> Vec<(usize, usize)> {
        match self {
            Suite::Sizes => [10, 50, 100, 200, 500, 1000, 2000]
                .iter()
                .map(|&n| (n, 5))
                .collect(),
            Suite::FixedN => [10, 50, 100, 200, 500, 800, 1000]
                .iter()
                .map(|&k| (1000, k))
                .collect(),
            Suite::Mixed => vec![(500, 500), (1000, 250), (2000, 125), (1000, 1000)],
            Suite::Product => vec![
                (500, 200),
                (400, 625),
                (800, 500),
                (1000, 600),
                (1600, 500),
                (1000, 1000),
                (1400, 1000),
                (2000, 1000),
            ],
        }
    }
}

/// Genereert `n` gehele gewichten uniform in `[min_weight, max_weight]`.
/// Dezelfde seed geeft altijd dezelfde reeks.
pub fn random_weights(n: usize, p: &BenchParams) -> Vec<i64> {
    let (lo, hi) = (p.min_weight.min(p.max_weight), p.max_weight.max(p.min_weight));
    let mut rng = ChaCha8Rng::seed_from_u64(p.seed);
    (0..n)
        .map(|_| i64::from(rng.gen_range(lo..=hi)))
        .collect()
}

/// Meet één aanroep van de optimizer.
pub fn time_call(weights: &[i64], k: usize) -> Result<Duration, OptimizeError> {
    let start = Instant::now();
    std::hint::black_box(optimizer::optimize(weights, k)?);
    Ok(start.elapsed())
}

/// Draait `p.runs` gemeten aanroepen op dezelfde seeded invoer en geeft het
/// gemiddelde terug. Respecteert `p.max_cells`.
pub fn run_experiment(
    label: &str,
    n: usize,
    k: usize,
    p: &BenchParams,
) -> Result<ExperimentRow, OptimizeError> {
    if let Some(limit) = p.max_cells {
        let cells = optimizer::table_cells(n, k);
        if cells > limit {
            return Err(OptimizeError::CapacityExceeded { cells, limit });
        }
    }

    let weights = random_weights(n, p);
    let runs = p.runs.max(1);
    let mut total = Duration::ZERO;
    for _ in 0..runs {
        total += time_call(&weights, k)?;
    }

    let row = ExperimentRow {
        label: label.to_string(),
        n,
        k,
        avg_seconds: total.as_secs_f64() / runs as f64,
    };
    info!(label, n, k, avg_seconds = row.avg_seconds, "experiment finished");
    Ok(row)
}

/// Draait alle gevallen van een reeks, in volgorde.
pub fn run_suite(suite: Suite, p: &BenchParams) -> Result<Vec<ExperimentRow>, OptimizeError> {
    let mut params = p.clone();
    params.runs = suite.runs(p);
    suite
        .cases()
        .into_iter()
        .map(|(n, k)| run_experiment(suite.label(), n, k, &params))
        .collect()
}
