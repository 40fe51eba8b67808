// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// A grid position; `x` grows to the right, `y` grows downwards.
pub type Pos = [isize; 2];

/// Orthogonal unit steps, in reading order: up, left, right, down.
pub const ADJACENT_DELTAS: [Pos; 4] = [[0, -1], [-1, 0], [1, 0], [0, 1]];


pub fn add_coordinates<const N: usize>(a: [isize; N], b: [isize; N]) -> [isize; N] {
	std::array::from_fn(|d| a[d] + b[d])
}

pub fn manhattan_distance<const N: usize>(a: [isize; N], b: [isize; N]) -> usize {
	a.into_iter().zip(b).map(|(a, b)| a.abs_diff(b)).sum()
}

/// Sort key ordering positions top-to-bottom, then left-to-right.
pub fn reading_order(pos: &Pos) -> [isize; 2] {
	[pos[1], pos[0]]
}

/// Returns the first of `options` in reading order.
pub fn solve_tie(options: impl IntoIterator<Item = Pos>) -> Option<Pos> {
	options.into_iter().min_by_key(reading_order)
}


/// An axis-aligned box in `N` dimensions, half-open along every axis:
/// `min[d] <= p[d] < max[d]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HyperRect<const N: usize> {
	pub min: [isize; N],
	pub max: [isize; N],
}

impl<const N: usize> HyperRect<N> {
	pub fn new(min: [isize; N], max: [isize; N]) -> Self {
		Self { min, max }
	}

	pub fn from_origin_size(origin: [isize; N], size: [usize; N]) -> Self {
		Self { min: origin, max: std::array::from_fn(|d| origin[d] + size[d] as isize) }
	}

	pub fn is_empty(&self) -> bool {
		(0..N).any(|d| self.max[d] <= self.min[d])
	}

	pub fn volume(&self) -> u64 {
		if self.is_empty() { return 0 }
		(0..N).map(|d| self.min[d].abs_diff(self.max[d]) as u64).product()
	}

	pub fn contains(&self, point: &[isize; N]) -> bool {
		(0..N).all(|d| self.min[d] <= point[d] && point[d] < self.max[d])
	}

	pub fn intersection(&self, other: &Self) -> Option<Self> {
		let common = Self {
			min: std::array::from_fn(|d| self.min[d].max(other.min[d])),
			max: std::array::from_fn(|d| self.max[d].min(other.max[d])),
		};
		(!common.is_empty()).then_some(common)
	}

	pub fn overlaps(&self, other: &Self) -> bool {
		self.intersection(other).is_some()
	}

	/// Returns the pieces of `self` not covered by `other`. The pieces are
	/// pairwise disjoint and there are at most `2 * N` of them.
	pub fn split(&self, other: &Self) -> impl Iterator<Item = Self> {
		use either::Either;

		let Some(common) = self.intersection(other) else {
			return Either::Left((!self.is_empty()).then_some(*self).into_iter())
		};

		// Peel slabs off both ends of each axis in turn, narrowing `rest`
		// until it equals `common`.
		let mut rest = *self;
		let mut pieces = Vec::with_capacity(2 * N);
		for d in 0..N {
			if rest.min[d] < common.min[d] {
				pieces.push(Self { max: { let mut max = rest.max; max[d] = common.min[d]; max }, ..rest });
				rest.min[d] = common.min[d];
			}
			if common.max[d] < rest.max[d] {
				pieces.push(Self { min: { let mut min = rest.min; min[d] = common.max[d]; min }, ..rest });
				rest.max[d] = common.max[d];
			}
		}
		Either::Right(pieces.into_iter())
	}

	/// Returns the volume covered by at least one of `rects`.
	pub fn union_volume(rects: impl IntoIterator<Item = Self>) -> u64 {
		let mut disjoint: Vec<Self> = vec![];
		for rect in rects.into_iter().filter(|r| !r.is_empty()) {
			disjoint = disjoint.iter().flat_map(|d| d.split(&rect)).collect();
			disjoint.push(rect);
		}
		disjoint.iter().map(Self::volume).sum()
	}

	/// Returns the volume covered by at least two of `rects`.
	pub fn overlap_volume(rects: impl IntoIterator<Item = Self>) -> u64 {
		use itertools::Itertools as _;
		let rects = rects.into_iter().collect::<Vec<_>>();
		Self::union_volume(rects.iter()
			.tuple_combinations()
			.filter_map(|(a, b)| a.intersection(b)))
	}
}
