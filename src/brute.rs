//! src/brute.rs
//!
//! Uitputtende referentie-oplosser: probeert alle 2^n maskers. Alleen
//! bedoeld om de DP op kleine instanties te controleren.

use crate::{error::OptimizeError, selection::Selection, weight::Weight};
use bitvec::prelude::*;

/// Grootste `n` die `brute_force` accepteert.
pub const BRUTE_FORCE_LIMIT: usize = 24;

/// Zoekt het beste masker met hoogstens `k` aangrenzende paren door alle
/// maskers te evalueren. Maskers worden als geheel getal doorlopen (bit `i`
/// is gewicht `i`); bij gelijke sommen wint het kleinste getal.
pub fn brute_force<W: Weight>(weights: &[W], k: usize) -> Result<Selection<W>, OptimizeError> {
    let n = weights.len();
    if n > BRUTE_FORCE_LIMIT {
        return Err(OptimizeError::TooLarge {
            n,
            limit: BRUTE_FORCE_LIMIT,
        });
    }
    if let Some(index) = weights.iter().position(|w| !w.is_finite()) {
        return Err(OptimizeError::NonFiniteWeight { index });
    }

    let mut best: Option<(u32, W)> = None;
    for bits in 0u32..(1u32 << n) {
        // Aangrenzende paren: posities waar zowel bit i als bit i + 1 staat.
        if ((bits & (bits >> 1)).count_ones() as usize) > k {
            continue;
        }
        // Een overlopende som is een fout, net als in de DP.
        let sum = mask_sum(weights, bits)?;
        if best.map_or(true, |(_, b)| sum > b) {
            best = Some((bits, sum));
        }
    }

    // Het lege masker is altijd toegestaan, dus er is altijd een kandidaat.
    let (bits, value) = best.ok_or(OptimizeError::Unreachable)?;
    let mut mask = bitvec![0; n];
    for i in 0..n {
        mask.set(i, (bits >> i) & 1 == 1);
    }
    Ok(Selection::new(value, mask))
}

/// Som van links naar rechts; `Overflow` meldt de index waar de som overloopt.
fn mask_sum<W: Weight>(weights: &[W], bits: u32) -> Result<W, OptimizeError> {
    weights
        .iter()
        .enumerate()
        .filter(|&(i, _)| (bits >> i) & 1 == 1)
        .try_fold(W::ZERO, |acc, (i, &w)| {
            acc.checked_add(w)
                .ok_or(OptimizeError::Overflow { position: i })
        })
}
