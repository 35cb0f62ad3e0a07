//! Descriptive statistics for one group of values
//!
//! Semantics follow the usual dataframe `describe()` conventions:
//!
//! - `std` is the **sample** standard deviation (divisor n − 1), `NaN` for a single value
//! - quartiles use linear interpolation between the closest ranks:
//!   $q(p) = x_{\lfloor h \rfloor} + (h - \lfloor h \rfloor)(x_{\lfloor h \rfloor + 1} - x_{\lfloor h \rfloor})$
//!   with $h = p\,(n-1)$ over the sorted values

use nalgebra::DVector;

/// Summary row: count, mean, std, min, quartiles, max
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Describe a group of values, `None` when the group is empty
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let vector = DVector::from_column_slice(values);
        let count = vector.len();
        let mean = vector.mean();
        let std = if count > 1 {
            (vector.map(|x| (x - mean).powi(2)).sum() / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile_sorted(&sorted, 0.25),
            q50: quantile_sorted(&sorted, 0.50),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
        })
    }
}

/// Linear-interpolation quantile of already sorted, non-empty values
pub(crate) fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let h = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}
