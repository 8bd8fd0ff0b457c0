//! src/optimizer.rs
//!
//! Dynamisch programmeren voor subset-selectie met een begrensd aantal
//! aangrenzende paren. Eén voorwaartse pass vult de tabel
//! (positie × gebruikte adjacencies × laatst-geselecteerd) met
//! max-accumulatie; daarna volgt een terugwaartse pass die per positie de
//! transitie zoekt die de waarde van de huidige cel verklaart.
//!
//! Tijd en geheugen zijn O(n · min(k, n)).

use crate::{
    error::OptimizeError,
    selection::Selection,
    table::StateTable,
    weight::Weight,
};
use bitvec::prelude::*;
use tracing::debug;

const SKIP: usize = 0;
const TAKE: usize = 1;

/// Berekent de maximale som van gewichten waarbij het masker hoogstens `k`
/// aangrenzende geselecteerde paren bevat, samen met één optimaal masker.
///
/// Bij gelijke optima is het masker deterministisch: de eindtoestand met
/// kleinste `j` (en `last = 0` vóór `last = 1`) wint, en bij het
/// terugzoeken gaat "via een adjacency" vóór "verse selectie" en een
/// niet-geselecteerde voorganger vóór een geselecteerde.
pub fn optimize<W: Weight>(weights: &[W], k: usize) -> Result<Selection<W>, OptimizeError> {
    let n = weights.len();
    if n == 0 {
        return Ok(Selection::empty());
    }
    validate_weights(weights)?;

    // Een masker van lengte n heeft hoogstens n - 1 aangrenzende paren.
    let k = k.min(n - 1);
    let table = forward(weights, k)?;
    debug!(n, k, cells = table.cells(), "state table filled");

    let (best_j, best_last, value) = best_final_state(&table, n, k)?;
    let mask = backtrack(&table, weights, best_j, best_last)?;
    Ok(Selection::new(value, mask))
}

/// Zoals [`optimize`], maar met een getekende grens zoals die vanuit
/// Python of een andere dynamische bron binnenkomt.
pub fn optimize_signed<W: Weight>(weights: &[W], k: i64) -> Result<Selection<W>, OptimizeError> {
    let k = usize::try_from(k).map_err(|_| OptimizeError::NegativeBound(k))?;
    optimize(weights, k)
}

/// Zoals [`optimize`], maar weigert instanties waarvan de tabel meer dan
/// `max_cells` cellen zou beslaan.
pub fn optimize_within<W: Weight>(
    weights: &[W],
    k: usize,
    max_cells: usize,
) -> Result<Selection<W>, OptimizeError> {
    let cells = table_cells(weights.len(), k);
    if cells > max_cells {
        return Err(OptimizeError::CapacityExceeded {
            cells,
            limit: max_cells,
        });
    }
    optimize(weights, k)
}

/// Aantal tabelcellen dat `optimize` voor `n` gewichten en grens `k` alloceert
/// (nul voor een lege invoer). Verzadigt op `usize::MAX`.
pub fn table_cells(n: usize, k: usize) -> usize {
    if n == 0 {
        return 0;
    }
    StateTable::<i64>::cell_count(n, k.min(n - 1)).unwrap_or(usize::MAX)
}

/// Telt aangrenzende enen in een 0/1-reeks; elke waarde ongelijk aan nul telt als 1.
pub fn count_adjacent_ones(bits: &[u8]) -> usize {
    bits.windows(2).filter(|w| w[0] != 0 && w[1] != 0).count()
}

fn validate_weights<W: Weight>(weights: &[W]) -> Result<(), OptimizeError> {
    match weights.iter().position(|w| !w.is_finite()) {
        Some(index) => Err(OptimizeError::NonFiniteWeight { index }),
        None => Ok(()),
    }
}

fn forward<W: Weight>(weights: &[W], k: usize) -> Result<StateTable<W>, OptimizeError> {
    let n = weights.len();
    let mut dp = StateTable::new(n, k);

    for (i, &w) in weights.iter().enumerate() {
        let add = |v: W| v.checked_add(w).ok_or(OptimizeError::Overflow { position: i });
        for j in 0..=k {
            // Vorige niet geselecteerd: overslaan of vers selecteren.
            if let Some(v) = dp.get(i, j, SKIP) {
                dp.relax(i + 1, j, SKIP, v);
                dp.relax(i + 1, j, TAKE, add(v)?);
            }
            // Vorige wel geselecteerd: overslaan breekt de reeks,
            // selecteren kost een adjacency.
            if let Some(v) = dp.get(i, j, TAKE) {
                dp.relax(i + 1, j, SKIP, v);
                if j < k {
                    dp.relax(i + 1, j + 1, TAKE, add(v)?);
                }
            }
        }
    }
    Ok(dp)
}

/// Eerste maximum in scanvolgorde `j` oplopend, `last = 0` vóór `last = 1`.
fn best_final_state<W: Weight>(
    dp: &StateTable<W>,
    n: usize,
    k: usize,
) -> Result<(usize, usize, W), OptimizeError> {
    let mut best: Option<(usize, usize, W)> = None;
    for j in 0..=k {
        for last in [SKIP, TAKE] {
            if let Some(v) = dp.get(n, j, last) {
                if best.map_or(true, |(_, _, b)| v > b) {
                    best = Some((j, last, v));
                }
            }
        }
    }
    best.ok_or(OptimizeError::Unreachable)
}

fn backtrack<W: Weight>(
    dp: &StateTable<W>,
    weights: &[W],
    mut j: usize,
    mut last: usize,
) -> Result<BitVec, OptimizeError> {
    let n = weights.len();
    let mut mask = bitvec![0; n];

    for i in (1..=n).rev() {
        let broken = OptimizeError::BrokenTrace { position: i - 1 };
        let cur = dp.get(i, j, last).ok_or_else(|| broken.clone())?;
        let w = weights[i - 1];
        // Alleen bereikbare voorgangers tellen; een overlopende som kan
        // nooit de huidige waarde hebben opgeleverd.
        let explains = |pj: usize, plast: usize, add: bool| {
            dp.get(i - 1, pj, plast)
                .and_then(|p| if add { p.checked_add(w) } else { Some(p) })
                .map_or(false, |p| p == cur)
        };

        if last == TAKE {
            mask.set(i - 1, true);
            if j > 0 && explains(j - 1, TAKE, true) {
                j -= 1;
            } else if explains(j, SKIP, true) {
                last = SKIP;
            } else {
                return Err(broken);
            }
        } else if explains(j, SKIP, false) {
            last = SKIP;
        } else if explains(j, TAKE, false) {
            last = TAKE;
        } else {
            return Err(broken);
        }
    }
    Ok(mask)
}
