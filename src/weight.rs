//! src/weight.rs
//!
//! Numerieke abstractie voor de gewichten. De DP vergelijkt alleen, telt op
//! en test op gelijkheid; meer is niet nodig. Gehele typen zijn exact, bij
//! floats levert dezelfde optelling in dezelfde volgorde steeds hetzelfde
//! resultaat op, waardoor de terugreconstructie ook daar exact blijft.

use std::fmt::Debug;

/// Een gewicht dat in de tabel kan worden opgeteld en vergeleken.
pub trait Weight: Copy + PartialOrd + Debug + Send + Sync {
    /// Het neutrale element: de som van een lege selectie.
    const ZERO: Self;

    /// Optelling die `None` geeft bij overflow (of, voor floats, bij een
    /// resultaat buiten het eindige bereik).
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `false` voor NaN en ±∞; gehele typen zijn altijd eindig.
    fn is_finite(self) -> bool;
}

macro_rules! impl_weight_int {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn is_finite(self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! impl_weight_float {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0.0;

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                let sum = self + rhs;
                if sum.is_finite() { Some(sum) } else { None }
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    )*};
}

impl_weight_int!(i32, i64, u32, u64);
impl_weight_float!(f32, f64);
