#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub values: Vec<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DegenerateEmbedding {
    #[error("embedding dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("embedding has zero magnitude")]
    ZeroMagnitude,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Cosine of the angle between two embeddings, accumulated in `f64`.
    pub fn cosine_similarity(&self, other: &Self) -> Result<f64, DegenerateEmbedding> {
        if self.values.len() != other.values.len() {
            return Err(DegenerateEmbedding::DimensionMismatch {
                left: self.values.len(),
                right: other.values.len(),
            });
        }

        let dot_product: f64 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| f64::from(*a) * f64::from(*b))
            .sum();

        let magnitude_a = magnitude(&self.values);
        let magnitude_b = magnitude(&other.values);

        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            return Err(DegenerateEmbedding::ZeroMagnitude);
        }

        Ok(dot_product / (magnitude_a * magnitude_b))
    }
}

fn magnitude(values: &[f32]) -> f64 {
    values
        .iter()
        .map(|x| f64::from(*x) * f64::from(*x))
        .sum::<f64>()
        .sqrt()
}
