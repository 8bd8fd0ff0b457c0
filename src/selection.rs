//! src/selection.rs
//!
//! Representeert een getuige-oplossing: het bereikte maximum samen met het
//! masker 'b' dat het realiseert. Het masker is een `BitVec` zodat telling
//! van geselecteerde posities en aangrenzende paren O(n/64) kost.

use crate::weight::Weight;
use bitvec::prelude::*;

/// Resultaat van `optimize`: de optimale waarde en één masker dat die waarde haalt.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection<W> {
    value: W,
    mask: BitVec,
}

impl<W: Weight> Selection<W> {
    /*────────── Constructors ──────────*/

    /// Creëert een selectie uit een waarde en een masker.
    pub fn new(value: W, mask: BitVec) -> Self {
        Self { value, mask }
    }

    /// De lege selectie voor een lege invoer.
    pub fn empty() -> Self {
        Self {
            value: W::ZERO,
            mask: BitVec::new(),
        }
    }

    /*────────── Queries ──────────*/

    /// Geeft de optimale som terug.
    #[inline]
    pub fn value(&self) -> W {
        self.value
    }

    /// Geeft het masker terug; bit `i` staat aan als gewicht `i` gekozen is.
    #[inline]
    pub fn mask(&self) -> &BitSlice {
        &self.mask
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Aantal geselecteerde posities.
    #[inline]
    pub fn selected(&self) -> usize {
        self.mask.count_ones()
    }

    /// Indices van de geselecteerde gewichten, oplopend.
    pub fn indices(&self) -> Vec<usize> {
        self.mask.iter_ones().collect()
    }

    /// Aantal paren `(i, i + 1)` die beide geselecteerd zijn.
    pub fn adjacent_pairs(&self) -> usize {
        count_adjacent_pairs(&self.mask)
    }

    /// Controleert de adjacency-grens.
    pub fn is_feasible(&self, k: usize) -> bool {
        self.adjacent_pairs() <= k
    }

    /// Herberekent de som van de geselecteerde gewichten, van links naar
    /// rechts vanaf nul, dus in dezelfde volgorde als de DP optelt.
    /// `None` als het masker niet bij `weights` past of de som overloopt.
    pub fn selected_sum(&self, weights: &[W]) -> Option<W> {
        if weights.len() != self.mask.len() {
            return None;
        }
        self.mask
            .iter_ones()
            .try_fold(W::ZERO, |acc, i| acc.checked_add(weights[i]))
    }

    /// Het masker als 0/1-waarden, zoals de Python-kant het verwacht.
    pub fn to_bits(&self) -> Vec<u8> {
        self.mask.iter().by_vals().map(u8::from).collect()
    }
}

/// Telt de posities `i` waarvoor zowel `bits[i]` als `bits[i + 1]` aan staan.
pub fn count_adjacent_pairs(bits: &BitSlice) -> usize {
    bits.windows(2).filter(|w| w[0] && w[1]).count()
}
