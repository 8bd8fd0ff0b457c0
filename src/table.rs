//! src/table.rs
//!
//! De DP-toestandstabel voor één aanroep van de optimizer. Cel
//! `(i, j, last)` bevat de beste som over de eerste `i` gewichten met exact
//! `j` aangrenzende geselecteerde paren, waarbij `last` aangeeft of gewicht
//! `i - 1` geselecteerd is. `None` betekent onbereikbaar.
//!
//! Opslag is één platte `Vec` in row-major volgorde (positie, daarna `j`,
//! daarna `last`); de tweede dimensie heeft één extra slot zodat `j + 1`
//! nooit buiten de rij valt.

use crate::weight::Weight;

#[derive(Clone, Debug)]
pub struct StateTable<W> {
    cells: Vec<Option<W>>,
    /// Aantal slots per positie in de `j`-dimensie (`k + 2`).
    width: usize,
    positions: usize,
}

impl<W> StateTable<W> {
    /// Aantal cellen dat `new(n, k)` zou alloceren, zonder te alloceren.
    /// `None` als het product niet in een `usize` past.
    pub fn cell_count(n: usize, k: usize) -> Option<usize> {
        n.checked_add(1)?
            .checked_mul(k.checked_add(2)?)?
            .checked_mul(2)
    }
}

impl<W: Weight> StateTable<W> {
    /// Creëert een tabel voor `n` gewichten en grens `k`, met alleen de
    /// basistoestand `(0, 0, 0) = 0` bereikbaar.
    pub fn new(n: usize, k: usize) -> Self {
        let width = k + 2;
        let positions = n + 1;
        let mut cells = vec![None; positions * width * 2];
        cells[0] = Some(W::ZERO);
        Self {
            cells,
            width,
            positions,
        }
    }

    #[inline]
    fn index(&self, i: usize, j: usize, last: usize) -> usize {
        debug_assert!(i < self.positions && j < self.width && last < 2);
        (i * self.width + j) * 2 + last
    }

    /// Beste bekende waarde van cel `(i, j, last)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, last: usize) -> Option<W> {
        self.cells[self.index(i, j, last)]
    }

    /// Max-accumulatie: de cel houdt het maximum van alle aangeboden waarden.
    #[inline]
    pub fn relax(&mut self, i: usize, j: usize, last: usize, value: W) {
        let idx = self.index(i, j, last);
        match self.cells[idx] {
            Some(cur) if cur >= value => {}
            _ => self.cells[idx] = Some(value),
        }
    }

    /// Totaal aantal cellen in de tabel.
    #[inline]
    pub fn cells(&self) -> usize {
        self.cells.len()
    }
}
