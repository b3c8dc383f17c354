use super::sparse::SparseVector;

/// Per-feature variance scaling without centering, so sparse vectors stay sparse.
#[derive(Clone, Debug)]
pub struct FeatureScaler {
	scale: Vec<f64>,
}
impl FeatureScaler {
	/// Fits the population standard deviation of every feature over `vectors`, implicit zeros
	/// included. Features with (near) zero variance scale by one.
	pub fn fit(vectors: &[SparseVector], n_features: usize) -> Self {
		let mut sum = vec![0.0_f64; n_features];
		let mut sum_sq = vec![0.0_f64; n_features];

		for vector in vectors {
			for &(idx, value) in vector.entries() {
				sum[idx] += value;
				sum_sq[idx] += value * value;
			}
		}

		let n = vectors.len().max(1) as f64;
		let scale = sum
			.iter()
			.zip(&sum_sq)
			.map(|(sum, sum_sq)| {
				let mean = sum / n;
				let std = (sum_sq / n - mean * mean).max(0.0).sqrt();

				if std < 10.0 * f64::EPSILON { 1.0 } else { std }
			})
			.collect();

		Self { scale }
	}

	pub fn scale(&self) -> &[f64] {
		&self.scale
	}

	pub fn transform(&self, vector: SparseVector) -> SparseVector {
		vector.map_values(|idx, value| value / self.scale[idx])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scales_by_population_std() {
		let vectors = vec![
			SparseVector::from_entries(vec![(0, 2.0)]),
			SparseVector::from_entries(vec![(0, 4.0), (1, 5.0)]),
		];
		let scaler = FeatureScaler::fit(&vectors, 2);

		// Feature 0: mean 3, var 1. Feature 1: mean 2.5, var 6.25.
		assert!((scaler.scale()[0] - 1.0).abs() < 1e-12);
		assert!((scaler.scale()[1] - 2.5).abs() < 1e-12);

		let scaled = scaler.transform(vectors[1].clone());

		assert_eq!(scaled.entries(), &[(0, 4.0), (1, 2.0)]);
	}

	#[test]
	fn constant_features_keep_unit_scale() {
		let vectors = vec![
			SparseVector::from_entries(vec![(0, 1.0)]),
			SparseVector::from_entries(vec![(0, 1.0)]),
		];
		let scaler = FeatureScaler::fit(&vectors, 1);

		assert_eq!(scaler.scale(), &[1.0]);
	}
}
