/// Sparse feature vector with entries sorted by feature index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparseVector {
	entries: Vec<(usize, f64)>,
}
impl SparseVector {
	/// Builds a vector from unsorted entries, dropping zeros.
	pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
		entries.retain(|(_, value)| *value != 0.0);
		entries.sort_by_key(|(idx, _)| *idx);

		Self { entries }
	}

	pub fn entries(&self) -> &[(usize, f64)] {
		&self.entries
	}

	pub fn is_zero(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn norm(&self) -> f64 {
		self.entries.iter().map(|(_, value)| value * value).sum::<f64>().sqrt()
	}

	pub fn dot(&self, other: &Self) -> f64 {
		let (mut i, mut j) = (0, 0);
		let mut sum = 0.0;

		while i < self.entries.len() && j < other.entries.len() {
			let (a_idx, a) = self.entries[i];
			let (b_idx, b) = other.entries[j];

			match a_idx.cmp(&b_idx) {
				std::cmp::Ordering::Less => i += 1,
				std::cmp::Ordering::Greater => j += 1,
				std::cmp::Ordering::Equal => {
					sum += a * b;
					i += 1;
					j += 1;
				},
			}
		}

		sum
	}

	/// Cosine similarity; zero when either side is the zero vector.
	pub fn cosine(&self, other: &Self) -> f64 {
		let denom = self.norm() * other.norm();

		if denom == 0.0 {
			return 0.0;
		}

		self.dot(other) / denom
	}

	pub fn l2_normalized(mut self) -> Self {
		let norm = self.norm();

		if norm > 0.0 {
			for (_, value) in &mut self.entries {
				*value /= norm;
			}
		}

		self
	}

	pub fn map_values(mut self, f: impl Fn(usize, f64) -> f64) -> Self {
		for (idx, value) in &mut self.entries {
			*value = f(*idx, *value);
		}

		self
	}
}
