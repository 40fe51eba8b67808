// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::geometry::Pos;


/// A `width` × `height` grid of symbols, stored row by row. Cells may be unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMap<T = char> {
	cells: Vec<Option<T>>,
	width: usize,
	height: usize,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("no lines to build a map from")]
	NoLines,
	#[error("line {line} has {found} symbols, expected {expected}")]
	LineLen { line: usize, expected: usize, found: usize },
	#[error("position {0:?} is outside the map")]
	OutOfBounds(Pos),
}

impl<T> Default for CharMap<T> {
	fn default() -> Self {
		Self { cells: vec![], width: 0, height: 0 }
	}
}

impl<T> CharMap<T> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_dimensions(width: usize, height: usize) -> Self {
		Self { cells: std::iter::repeat_with(|| None).take(width * height).collect(), width, height }
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	pub fn len(&self) -> usize {
		self.cells.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cells.is_empty()
	}

	fn offset(&self, [x, y]: Pos) -> Option<usize> {
		let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
		(x < self.width && y < self.height).then(|| y * self.width + x)
	}

	pub fn contains(&self, pos: Pos) -> bool {
		self.offset(pos).is_some()
	}

	/// Returns `None` if `pos` is out of bounds, or the cell otherwise.
	pub fn get(&self, pos: Pos) -> Option<&Option<T>> {
		self.offset(pos).map(|o| &self.cells[o])
	}

	pub fn set(&mut self, pos: Pos, value: impl Into<Option<T>>) -> Result<(), Error> {
		let offset = self.offset(pos).ok_or(Error::OutOfBounds(pos))?;
		self.cells[offset] = value.into();
		Ok(())
	}

	/// Returns an [`Iterator`] over all positions, in reading order.
	pub fn coordinates(&self) -> impl Iterator<Item = Pos> {
		itertools::iproduct!(0..self.height as isize, 0..self.width as isize).map(|(y, x)| [x, y])
	}

	pub fn values(&self) -> impl Iterator<Item = &Option<T>> {
		self.cells.iter()
	}

	pub fn items(&self) -> impl Iterator<Item = (Pos, &Option<T>)> {
		self.coordinates().zip(self.cells.iter())
	}
}

impl<T: PartialEq> CharMap<T> {
	/// Returns an [`Iterator`] over the positions holding `value`, in reading order.
	pub fn search<'a>(&'a self, value: &'a T) -> impl Iterator<Item = Pos> + 'a {
		self.items().filter_map(move |(pos, v)| (v.as_ref() == Some(value)).then_some(pos))
	}
}

impl<T> CharMap<T> {
	/// Builds the smallest map holding all `items`, whose positions may be
	/// negative. Also returns where `[0, 0]` of the `items`’ coordinates ended
	/// up in the map.
	pub fn from_sparse(items: impl IntoIterator<Item = (Pos, T)>) -> (Self, Pos) {
		use itertools::{Itertools as _, MinMaxResult::*};

		let items = items.into_iter().collect::<Vec<_>>();
		let range = |d: usize| match items.iter().map(|(pos, _)| pos[d]).minmax() {
			NoElements => 0..=-1,
			OneElement(v) => v..=v,
			MinMax(min, max) => min..=max,
		};
		let (xr, yr) = (range(0), range(1));
		let size = |r: &std::ops::RangeInclusive<isize>| (r.end() + 1 - r.start()) as usize;

		let mut map = Self::with_dimensions(size(&xr), size(&yr));
		let origin = [-xr.start(), -yr.start()];
		for ([x, y], value) in items {
			let offset = (y + origin[1]) as usize * map.width + (x + origin[0]) as usize;
			map.cells[offset] = Some(value);
		}
		(map, origin)
	}
}

impl<T> std::ops::Index<Pos> for CharMap<T> {
	type Output = Option<T>;
	fn index(&self, pos: Pos) -> &Self::Output {
		match self.get(pos) {
			Some(cell) => cell,
			None => panic!("position {pos:?} is outside the {}×{} map", self.width, self.height),
		}
	}
}

impl<T> std::ops::IndexMut<Pos> for CharMap<T> {
	fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
		let (width, height) = (self.width, self.height);
		match self.offset(pos) {
			Some(offset) => &mut self.cells[offset],
			None => panic!("position {pos:?} is outside the {width}×{height} map"),
		}
	}
}


mod parsing {
	use std::str::FromStr;
	use super::{CharMap, Error};

	impl CharMap<char> {
		pub fn from_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>) -> Result<Self, Error> {
			let mut cells = vec![];
			let mut width = None;
			let mut height = 0;
			for (l, line) in lines.into_iter().enumerate() {
				let len0 = cells.len();
				cells.extend(line.as_ref().chars().map(Some));
				let found = cells.len() - len0;
				match width {
					None => width = Some(found),
					Some(expected) if expected != found =>
						return Err(Error::LineLen { line: l + 1, expected, found }),
					_ => (),
				}
				height += 1;
			}
			Ok(CharMap { cells, width: width.ok_or(Error::NoLines)?, height })
		}
	}

	impl FromStr for CharMap<char> {
		type Err = Error;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			Self::from_lines(s.lines())
		}
	}
}


mod fmt {
	use std::fmt::Display;
	use super::CharMap;

	impl<T: Display> CharMap<T> {
		/// Returns an [`Iterator`] of rendered rows; unset cells become spaces.
		pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
			use itertools::Itertools as _;
			let width = self.width;
			(0..self.height).map(move |y| self.cells[y * width..][..width].iter()
				.map(|cell| cell.as_ref().map_or_else(|| " ".to_string(), T::to_string))
				.join(""))
		}
	}

	impl<T: Display> Display for CharMap<T> {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			for (y, line) in self.lines().enumerate() {
				if y > 0 { writeln!(f)? }
				f.write_str(&line)?;
			}
			Ok(())
		}
	}
}
