//! Inverse (head → flow) lookup.
//!
//! The dataset is re-ordered by head with a stable sort and interpolated
//! linearly, extending the end segments beyond the head range. Nothing here
//! checks that flow is a function of head: on a curve that rises before it
//! falls, the re-ordered samples interleave both branches and the result is
//! whatever the neighbouring samples give. Two samples with the same head
//! bracketing the query make the slope infinite.

#[derive(Clone, Debug)]
pub struct InverseLookup {
    heads: Vec<f64>,
    flows: Vec<f64>,
}

impl InverseLookup {
    pub fn new(flows: &[f64], heads: &[f64]) -> Self {
        let mut pairs: Vec<(f64, f64)> = heads.iter().copied().zip(flows.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (heads, flows) = pairs.into_iter().unzip();
        Self { heads, flows }
    }

    pub fn eval(&self, head: f64) -> f64 {
        let n = self.heads.len();
        let hi = self.heads.partition_point(|&h| h < head).clamp(1, n - 1);
        let lo = hi - 1;
        let slope = (self.flows[hi] - self.flows[lo]) / (self.heads[hi] - self.heads[lo]);
        slope * (head - self.heads[lo]) + self.flows[lo]
    }
}
