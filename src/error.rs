//! src/error.rs
//!
//! Alle manieren waarop een aanroep van de optimizer (of de brute-force
//! referentie) kan falen. Er wordt nooit een gedeeltelijk resultaat
//! teruggegeven: ofwel een volledige `Selection`, ofwel een fout.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptimizeError {
    /// De adjacency-grens `k` is negatief.
    #[error("adjacency bound must be non-negative, got {0}")]
    NegativeBound(i64),

    /// Een gewicht is NaN of oneindig.
    #[error("weight at index {index} is not finite")]
    NonFiniteWeight { index: usize },

    /// Geen enkele eindtoestand is bereikbaar.
    #[error("no reachable final state")]
    Unreachable,

    /// Een cumulatieve som past niet in het gewichtstype.
    #[error("cumulative sum overflows at position {position}")]
    Overflow { position: usize },

    /// Geen enkele transitie verklaart de waarde van de huidige cel.
    #[error("backtracking found no predecessor at position {position}")]
    BrokenTrace { position: usize },

    /// De tabel zou groter worden dan het opgegeven plafond.
    #[error("state table needs {cells} cells, limit is {limit}")]
    CapacityExceeded { cells: usize, limit: usize },

    /// Te veel gewichten voor uitputtend zoeken.
    #[error("brute force supports at most {limit} weights, got {n}")]
    TooLarge { n: usize, limit: usize },
}

impl OptimizeError {
    /// Fouten die direct terug te voeren zijn op ongeldige invoer.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            OptimizeError::NegativeBound(_)
                | OptimizeError::NonFiniteWeight { .. }
                | OptimizeError::Unreachable
        )
    }

    /// Fouten die een te grote instantie signaleren (geheugen of tijd).
    pub fn is_resource_limit(&self) -> bool {
        matches!(
            self,
            OptimizeError::CapacityExceeded { .. } | OptimizeError::TooLarge { .. }
        )
    }
}
