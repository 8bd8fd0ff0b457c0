//! src/report.rs
//!
//! Tekstuele rapporten: een tabel met looptijden per experiment en een
//! verificatieblok voor één opgeloste instantie.

use crate::{bench::ExperimentRow, selection::Selection, weight::Weight};
use std::fmt::Write;

const RULE_WIDTH: usize = 85;

/// Kopregel van de experimenttabel.
pub fn header() -> String {
    format!(
        "{:<15} {:<8} {:<8} {:<12} {:<12} {:<20}",
        "Exp Type", "n", "k", "n*k", "Time (s)", "Ratio (Time/n*k)"
    )
}

/// Eén tabelregel; de tijd met zes decimalen, de ratio wetenschappelijk.
pub fn format_row(row: &ExperimentRow) -> String {
    format!(
        "{:<15} {:<8} {:<8} {:<12} {:<12.6} {}",
        row.label,
        row.n,
        row.k,
        row.work(),
        row.avg_seconds,
        format_sci(row.ratio())
    )
}

/// Wetenschappelijke notatie met twee decimalen en een exponent van minstens
/// twee cijfers met teken: `1.25e-06`, `0.00e+00`.
pub fn format_sci(x: f64) -> String {
    let s = format!("{:.2e}", x);
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        // inf en NaN hebben geen exponent.
        None => s,
    }
}

/// Volledige tabel: kop, streep, en één regel per experiment.
pub fn format_table(rows: &[ExperimentRow]) -> String {
    let mut out = String::new();
    out.push_str(&header());
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}

/// Tabel voor de groottereeks: alleen `n` en de gemeten tijd.
pub fn format_size_table(rows: &[ExperimentRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>6} {:>20}", "n", "Time (seconds)");
    let _ = writeln!(out, "{}", "-".repeat(30));
    for row in rows {
        let _ = writeln!(out, "{:6} {:20.6}", row.n, row.avg_seconds);
    }
    out
}

/// Verificatieblok voor één instantie: invoer, masker, maximum en het
/// aantal aangrenzende paren.
pub fn format_selection<W: Weight>(weights: &[W], k: usize, sel: &Selection<W>) -> String {
    let mut out = String::new();
    // Schrijven naar een String faalt niet.
    let _ = writeln!(out, "Array a: {:?}", weights);
    let _ = writeln!(out, "k = {}", k);
    let _ = writeln!(out, "Array b: {:?}", sel.to_bits());
    let _ = writeln!(out, "Maximum sum: {:?}", sel.value());
    let _ = writeln!(out, "Adjacent 1s: {}", sel.adjacent_pairs());
    out
}
