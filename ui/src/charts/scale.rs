//! Band, linear, and categorical color scales for the grouped bar chart.

/// Maps a discrete domain to evenly spaced pixel bands with a padding
/// fraction between bands (outer padding equals inner padding).
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let span = range.1 - range.0;
        let step = if domain.is_empty() {
            0.0
        } else {
            span / (n - padding + 2.0 * padding)
        };

        Self {
            domain,
            start: range.0 + step * padding,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Left edge of the band at `index` within the domain.
    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Continuous mapping from a value domain to a pixel range. The chart's
/// y scale is built with an inverted range so larger counts draw taller
/// bars upward from the baseline.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            // Degenerate domain (e.g. all-zero counts) pins to the baseline.
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Round tick values covering the domain, roughly `count` of them,
    /// snapped to 1/2/5 steps the way d3 picks them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            (self.domain.0, self.domain.1)
        } else {
            (self.domain.1, self.domain.0)
        };
        let span = hi - lo;
        if !span.is_finite() || span <= 0.0 {
            return vec![lo];
        }

        let step = tick_step(span, count.max(1));
        // Each tick is index * step rather than an accumulated sum, so
        // fractional steps never drift past (or short of) the domain end.
        // The quotient slack absorbs cases like 1.0 / 0.1 < 10.
        let first = (lo / step - 1e-9).ceil() as i64;
        let last = (hi / step + 1e-9).floor() as i64;
        (first..=last).map(|index| index as f64 * step).collect()
    }
}

fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;

    // Same breakpoints d3 uses: sqrt(50), sqrt(10), sqrt(2).
    let factor = if residual >= 7.071 {
        10.0
    } else if residual >= 3.162 {
        5.0
    } else if residual >= 1.414 {
        2.0
    } else {
        1.0
    };
    magnitude * factor
}

/// The classic 20-category palette, cycling when there are more series.
pub const CATEGORY20: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

pub fn category_color(index: usize) -> &'static str {
    CATEGORY20[index % CATEGORY20.len()]
}
