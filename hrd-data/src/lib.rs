//! Descriptive statistics used by the dashboard panels.
//!
//! Everything here is a pure function over plain numbers so it can be
//! exercised without a database or a browser.

/// Rounding and ratio helpers for metric tiles.
pub mod rounding {
    /// Round to 2 decimal places, exact halves to even (`1.125 -> 1.12`).
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round_ties_even() / 100.0
    }

    /// `100 * part / total` rounded to 2 decimals. `None` when `total` is zero.
    pub fn percentage(part: u64, total: u64) -> Option<f64> {
        if total == 0 {
            return None;
        }
        Some(round2(part as f64 * 100.0 / total as f64))
    }

    /// Render an optional metric, `n/a` when undefined. Whole numbers keep
    /// one decimal (`3.0`) so tiles read consistently.
    pub fn format_metric(value: Option<f64>) -> String {
        match value {
            Some(v) if v.fract() == 0.0 => format!("{:.1}", v),
            Some(v) => format!("{}", v),
            None => "n/a".to_string(),
        }
    }

}

/// Quartiles and box-plot summaries.
pub mod quantiles {
    use serde::Serialize;

    /// Quantile `p` (0..=1) of an ascending slice, linearly interpolated
    /// between the two nearest order statistics.
    pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
        if sorted.is_empty() {
            return None;
        }
        let p = p.clamp(0.0, 1.0);
        let pos = p * (sorted.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = pos.ceil() as usize;
        let frac = pos - lo as f64;
        Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
    }

    /// Five-number summary plus Tukey whiskers and outliers.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct BoxStats {
        pub count: usize,
        pub min: f64,
        pub q1: f64,
        pub median: f64,
        pub q3: f64,
        pub max: f64,
        /// Smallest value within `q1 - 1.5 * IQR`.
        pub lower_whisker: f64,
        /// Largest value within `q3 + 1.5 * IQR`.
        pub upper_whisker: f64,
        pub outliers: Vec<f64>,
    }

    impl BoxStats {
        /// Summarize `values` (any order). `None` for an empty group.
        pub fn from_values(mut values: Vec<f64>) -> Option<Self> {
            if values.is_empty() {
                return None;
            }
            values.sort_by(f64::total_cmp);

            let q1 = quantile_sorted(&values, 0.25)?;
            let median = quantile_sorted(&values, 0.5)?;
            let q3 = quantile_sorted(&values, 0.75)?;
            let iqr = q3 - q1;
            let lower_fence = q1 - 1.5 * iqr;
            let upper_fence = q3 + 1.5 * iqr;

            let lower_whisker = values
                .iter()
                .copied()
                .find(|v| *v >= lower_fence)
                .unwrap_or(q1);
            let upper_whisker = values
                .iter()
                .rev()
                .copied()
                .find(|v| *v <= upper_fence)
                .unwrap_or(q3);
            let outliers = values
                .iter()
                .copied()
                .filter(|v| *v < lower_fence || *v > upper_fence)
                .collect();

            Some(Self {
                count: values.len(),
                min: values[0],
                q1,
                median,
                q3,
                max: values[values.len() - 1],
                lower_whisker,
                upper_whisker,
                outliers,
            })
        }
    }

}

/// Histogram binning over integer value counts.
pub mod histogram {
    use serde::Serialize;

    /// A half-open integer bin `[lower, upper)`.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct HistogramBin {
        pub label: String,
        pub lower: i64,
        pub upper: i64,
        pub count: u64,
    }

    /// Group `(value, count)` pairs into contiguous integer bins.
    ///
    /// One bin per integer while the value range fits in `max_bins`, otherwise
    /// equal-width bins. Empty bins inside the range are kept so gaps show.
    pub fn bin_counts(counts: &[(i64, u64)], max_bins: usize) -> Vec<HistogramBin> {
        let max_bins = max_bins.max(1) as i64;
        let (min, max) = match (
            counts.iter().map(|(v, _)| *v).min(),
            counts.iter().map(|(v, _)| *v).max(),
        ) {
            (Some(min), Some(max)) => (min, max),
            _ => return Vec::new(),
        };

        let range = max - min + 1;
        let width = ((range + max_bins - 1) / max_bins).max(1);
        let n_bins = ((range + width - 1) / width) as usize;

        let mut bins: Vec<HistogramBin> = (0..n_bins)
            .map(|i| {
                let lower = min + i as i64 * width;
                let upper = lower + width;
                let label = if width == 1 {
                    lower.to_string()
                } else {
                    format!("{}-{}", lower, upper - 1)
                };
                HistogramBin {
                    label,
                    lower,
                    upper,
                    count: 0,
                }
            })
            .collect();

        for (value, count) in counts {
            let idx = ((value - min) / width) as usize;
            bins[idx].count += count;
        }
        bins
    }

}
