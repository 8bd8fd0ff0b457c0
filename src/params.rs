//! src/params.rs
//!
//! Bundelt alle afstembare parameters voor de tijdmetingen.

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Instellingen voor het genereren van invoer en het meten van de optimizer.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct BenchParams {
    pub seed: u64, // Random seed voor de gewichten
    pub runs: usize, // Aantal gemeten aanroepen per experiment
    pub min_weight: u32,
    pub max_weight: u32,
    pub max_cells: Option<usize>, // Plafond op de tabelgrootte (Optioneel)
}

#[cfg(feature = "python")]
#[pymethods]
impl BenchParams {
    #[new]
    #[pyo3(signature = (
        seed = 42,
        runs = 5,
        min_weight = 1,
        max_weight = 1_000,
        max_cells = None,
    ))]
    fn py_new(
        seed: u64,
        runs: usize,
        min_weight: u32,
        max_weight: u32,
        max_cells: Option<usize>,
    ) -> Self {
        Self::new(seed, runs, min_weight, max_weight, max_cells)
    }

    // Kopie voor Python; `Clone` is al afgeleid.
    #[pyo3(name = "copy")]
    fn py_copy(&self) -> Self {
        self.clone()
    }
}

impl Default for BenchParams {
    fn default() -> Self {
        BenchParams {
            seed: 42,
            runs: 5,
            min_weight: 1,
            max_weight: 1_000,
            max_cells: None,
        }
    }
}

impl BenchParams {
    /// Normaliseert: minstens één run en `min_weight <= max_weight`.
    pub fn new(
        seed: u64,
        runs: usize,
        min_weight: u32,
        max_weight: u32,
        max_cells: Option<usize>,
    ) -> Self {
        Self {
            seed,
            runs: runs.max(1),
            min_weight: min_weight.min(max_weight),
            max_weight: max_weight.max(min_weight),
            max_cells,
        }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Zet het aantal gemeten aanroepen per experiment (minstens 1).
    pub fn with_runs(&mut self, runs: usize) -> &mut Self {
        self.runs = runs.max(1);
        self
    }

    /// Begrenst de tabelgrootte; grotere experimenten worden geweigerd.
    pub fn with_max_cells(&mut self, max_cells: usize) -> &mut Self {
        self.max_cells = Some(max_cells);
        self
    }
}
