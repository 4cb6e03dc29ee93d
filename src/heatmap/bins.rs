/// Coverage-weighted accumulator over `n` equal-width bins of one interval
#[derive(Debug, Clone)]
pub struct BinAccumulator {
    start: f64,
    end: f64,
    bin_width: f64,
    /// `score * overlap` summed per bin
    sums: Vec<f64>,
}

impl BinAccumulator {
    pub fn new(start: i64, end: i64, num_bins: usize) -> Self {
        let start = start as f64;
        let end = end as f64;
        Self {
            start,
            end,
            bin_width: (end - start) / num_bins as f64,
            sums: vec![0.0; num_bins],
        }
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Weighted sums before averaging
    pub fn sums(&self) -> &[f64] {
        &self.sums
    }

    /// Add `score * overlap` to every bin overlapped by `[start, end)`.
    /// Portions outside the interval are ignored.
    pub fn add(&mut self, start: i64, end: i64, score: f64) {
        let n = self.sums.len();
        let lo = (start as f64).max(self.start);
        let hi = (end as f64).min(self.end);
        if hi <= lo || n == 0 {
            return;
        }

        let first = ((lo - self.start) / self.bin_width).floor() as usize;
        let last = (((hi - self.start) / self.bin_width).ceil() as usize).min(n);

        for i in first..last {
            let bin_start = self.start + i as f64 * self.bin_width;
            let bin_end = if i + 1 == n {
                self.end
            } else {
                bin_start + self.bin_width
            };
            let overlap = hi.min(bin_end) - lo.max(bin_start);
            if overlap > 0.0 {
                self.sums[i] += score * overlap;
            }
        }
    }

    /// Average each bin over its width, optionally flipping bin order
    pub fn finish(self, reverse: bool) -> Vec<f64> {
        let width = self.bin_width;
        let mut values: Vec<f64> = self.sums.into_iter().map(|s| s / width).collect();
        if reverse {
            values.reverse();
        }
        values
    }
}
