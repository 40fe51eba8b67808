// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashSet;
use crate::{char_map::CharMap, geometry::{self, Pos, ADJACENT_DELTAS}};


/// Decides how a [`MapExplorer`] progresses through a map.
pub trait ProgressRules<T> {
	/// Checked before each wave of progress; return `true` to stop.
	fn stop_progressing(&self) -> bool {
		false
	}

	/// Called for each reached position before progressing from it; return
	/// `false` to not progress any further from `pos`.
	fn examine(&mut self, _pos: Pos) -> bool {
		true
	}

	/// Returns the positions to try to progress to from `from`.
	fn next_coordinates(&self, from: Pos) -> impl Iterator<Item = Pos> {
		ADJACENT_DELTAS.into_iter().map(move |delta| geometry::add_coordinates(from, delta))
	}

	/// Returns the positions from which `to` may be progressed to, for walking
	/// paths back. Defaults to [`Self::next_coordinates`], which only holds
	/// when every move can be made in both directions.
	fn previous_coordinates(&self, to: Pos) -> impl Iterator<Item = Pos> {
		self.next_coordinates(to)
	}

	/// Returns whether progressing onto `pos`, holding `value`, is allowed.
	fn progress_to(&self, pos: Pos, value: Option<&T>) -> bool;

	/// Picks one of equally distant `options` while reconstructing a path
	/// from `start` to `end`.
	fn solve_tie(&self, options: &[Pos], _start: Pos, _end: Pos) -> Option<Pos> {
		geometry::solve_tie(options.iter().copied())
	}
}


/// Rules progressing onto any cell whose value is in a set.
#[derive(Debug, Clone)]
pub struct AllowedValues<T> {
	values: Vec<T>,
	unset: bool,
}

impl<T: PartialEq> AllowedValues<T> {
	pub fn new(values: impl IntoIterator<Item = T>) -> Self {
		Self { values: values.into_iter().collect(), unset: false }
	}

	/// Also allows progressing onto unset cells.
	pub fn with_unset(self) -> Self {
		Self { unset: true, ..self }
	}

	pub fn allows(&self, value: Option<&T>) -> bool {
		match value {
			Some(value) => self.values.contains(value),
			None => self.unset,
		}
	}
}

impl<T: PartialEq> ProgressRules<T> for AllowedValues<T> {
	fn progress_to(&self, _pos: Pos, value: Option<&T>) -> bool {
		self.allows(value)
	}
}


/// Rules looking for the closest of a set of targets. Progress stops after
/// the first wave reaching any target, so all equally close ones are found.
#[derive(Debug, Clone)]
pub struct FindAllClosest<T> {
	allowed: AllowedValues<T>,
	targets: HashSet<Pos>,
	results: Vec<Pos>,
}

impl<T: PartialEq> FindAllClosest<T> {
	pub fn new(targets: impl IntoIterator<Item = Pos>, allowed: AllowedValues<T>) -> Self {
		Self { allowed, targets: targets.into_iter().collect(), results: vec![] }
	}

	/// The targets found, in the order they were reached.
	pub fn results(&self) -> &[Pos] {
		&self.results
	}

	/// The first of the found targets in reading order.
	pub fn closest(&self) -> Option<Pos> {
		geometry::solve_tie(self.results.iter().copied())
	}
}

impl<T: PartialEq> ProgressRules<T> for FindAllClosest<T> {
	fn stop_progressing(&self) -> bool {
		!self.results.is_empty()
	}

	fn examine(&mut self, pos: Pos) -> bool {
		if !self.targets.contains(&pos) { return true }
		self.results.push(pos);
		false
	}

	fn progress_to(&self, pos: Pos, value: Option<&T>) -> bool {
		self.allowed.progress_to(pos, value)
	}
}


/// Breadth-first exploration of a [`CharMap`], remembering how many steps it
/// took to reach every position, and which positions it progressed from.
pub struct MapExplorer<'m, T> {
	map: &'m CharMap<T>,
	distances: CharMap<usize>,
	expanded: CharMap<bool>,
}

impl<'m, T> MapExplorer<'m, T> {
	pub fn new(map: &'m CharMap<T>) -> Self {
		let (width, height) = (map.width(), map.height());
		Self { map, distances: CharMap::with_dimensions(width, height), expanded: CharMap::with_dimensions(width, height) }
	}

	pub fn map(&self) -> &'m CharMap<T> {
		self.map
	}

	/// Explores the map from `start`, wave by wave, as directed by `rules`.
	/// Forgets the distances of any previous exploration.
	pub fn explore(&mut self, start: Pos, rules: &mut impl ProgressRules<T>) {
		timed!("explore", self.explore_impl(start, rules))
	}

	fn explore_impl(&mut self, start: Pos, rules: &mut impl ProgressRules<T>) {
		self.distances = CharMap::with_dimensions(self.map.width(), self.map.height());
		self.expanded = CharMap::with_dimensions(self.map.width(), self.map.height());
		if self.distances.set(start, 0).is_err() { return }

		let mut progress = vec![start];
		let mut steps = 0;
		while !progress.is_empty() && !rules.stop_progressing() {
			steps += 1;

			#[cfg(LOGGING)]
			println!("wave {steps}: {} position(s), from {:?}", progress.len(), progress[0]);

			let mut next_progress = vec![];
			for pos in progress {
				if !rules.examine(pos) { continue }
				self.expanded[pos] = Some(true);
				for next in rules.next_coordinates(pos) {
					let Some(None) = self.distances.get(next) else { continue };
					if rules.progress_to(next, self.map[next].as_ref()) {
						self.distances[next] = Some(steps);
						next_progress.push(next);
					}
				}
			}
			progress = next_progress;
		}
	}

	/// Returns the number of steps it took to reach `pos`, if it was.
	pub fn distance(&self, pos: Pos) -> Option<usize> {
		self.distances.get(pos).copied().flatten()
	}

	/// Returns whether exploration progressed from `pos`, as opposed to only
	/// reaching it.
	pub fn expanded(&self, pos: Pos) -> bool {
		matches!(self.expanded.get(pos), Some(Some(true)))
	}

	/// Returns an [`Iterator`] of reached positions and their distances, in
	/// reading order.
	pub fn reached(&self) -> impl Iterator<Item = (Pos, usize)> + '_ {
		self.distances.items().filter_map(|(pos, distance)| distance.map(|d| (pos, d)))
	}

	/// Reconstructs a shortest path from `start` to `end`, both included, by
	/// walking back from `end` through ever closer positions that exploration
	/// progressed from. Ties are left to `rules`.
	pub fn shortest_path(&self, start: Pos, end: Pos, rules: &impl ProgressRules<T>) -> Option<Vec<Pos>> {
		let mut distance = self.distance(end)?;
		let mut pos = end;
		let mut path = vec![end];
		while distance > 0 {
			let options = rules.previous_coordinates(pos)
				.filter(|&prev| self.expanded(prev) && self.distance(prev) == Some(distance - 1))
				.collect::<Vec<_>>();
			pos = rules.solve_tie(&options, start, end)?;
			distance -= 1;
			path.push(pos);
		}
		path.reverse();
		(pos == start).then_some(path)
	}

	/// Returns the reached position furthest away (the first in reading order
	/// on ties) and its distance.
	pub fn furthest_point(&self) -> Option<(Pos, usize)> {
		self.reached().fold(None, |furthest, (pos, distance)| match furthest {
			Some((_, d)) if d >= distance => furthest,
			_ => Some((pos, distance)),
		})
	}
}



#[cfg(BENCHING)]
mod bench {
	extern crate test;
	use super::*;

	#[bench]
	fn flood_fill(b: &mut test::Bencher) {
		let map = CharMap::from_lines(std::iter::repeat(".".repeat(100)).take(100)).unwrap();
		b.iter(|| {
			let mut explorer = MapExplorer::new(&map);
			explorer.explore([50, 50], &mut AllowedValues::new(['.']));
			explorer.furthest_point()
		})
	}
}
