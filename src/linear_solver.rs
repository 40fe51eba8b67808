// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Linear programming: maximize or minimize a linear objective over bounded
//! real variables, subject to bounded linear constraints.

use std::collections::HashMap;


/// Values within this distance of each other compare equal while solving.
pub const EPSILON: f64 = 1e-9;


#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
	pub lower: Option<f64>,
	pub upper: Option<f64>,
}

impl Bounds {
	pub fn free() -> Self {
		Self::default()
	}

	pub fn at_least(lower: f64) -> Self {
		Self { lower: Some(lower), upper: None }
	}

	pub fn at_most(upper: f64) -> Self {
		Self { lower: None, upper: Some(upper) }
	}

	pub fn between(lower: f64, upper: f64) -> Self {
		Self { lower: Some(lower), upper: Some(upper) }
	}

	pub fn exactly(value: f64) -> Self {
		Self::between(value, value)
	}

	fn is_free(&self) -> bool {
		self.lower.is_none() && self.upper.is_none()
	}

	fn is_impossible(&self) -> bool {
		matches!((self.lower, self.upper), (Some(l), Some(u)) if l > u)
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction { Maximize, Minimize }


#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("variable {0:?} already exists")]
	DuplicateVariable(String),
	#[error("unknown variable {0:?}")]
	UnknownVariable(String),
	#[error("lower bound exceeds upper bound")]
	ImpossibleBounds,
	#[error("constraint is unbounded")]
	UnboundedConstraint,
	#[error("equation has no non-zero coefficients")]
	EmptyEquation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
	#[error("no objective set")]
	NoObjective,
	#[error("constraints cannot all be satisfied")]
	Infeasible,
	#[error("objective is unbounded")]
	Unbounded,
}


/// A sum of coefficients times variables, by variable index.
type Equation = Vec<(usize, f64)>;

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
	pub objective: f64,
	pub values: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default)]
pub struct LinearProblem {
	variables: Vec<(String, Bounds)>,
	constraints: Vec<(Equation, Bounds)>,
	objective: Option<(Direction, Equation)>,
}

impl LinearProblem {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn variable_count(&self) -> usize {
		self.variables.len()
	}

	pub fn constraint_count(&self) -> usize {
		self.constraints.len()
	}

	pub fn bounds(&self, name: &str) -> Option<Bounds> {
		self.variables.iter().find(|(n, _)| n == name).map(|&(_, bounds)| bounds)
	}

	pub fn add_variable(&mut self, name: impl Into<String>, bounds: Bounds) -> Result<(), Error> {
		let name = name.into();
		if self.bounds(&name).is_some() { return Err(Error::DuplicateVariable(name)) }
		if bounds.is_impossible() { return Err(Error::ImpossibleBounds) }
		self.variables.push((name, bounds));
		Ok(())
	}

	fn equation<'a>(&self, terms: impl IntoIterator<Item = (&'a str, f64)>) -> Result<Equation, Error> {
		let mut equation: Equation = vec![];
		for (name, coefficient) in terms {
			let index = self.variables.iter().position(|(n, _)| n == name)
				.ok_or_else(|| Error::UnknownVariable(name.to_owned()))?;
			if coefficient == 0.0 { continue }
			match equation.iter_mut().find(|(i, _)| *i == index) {
				Some((_, c)) => *c += coefficient,
				None => equation.push((index, coefficient)),
			}
		}
		equation.retain(|&(_, c)| c != 0.0);
		if equation.is_empty() { return Err(Error::EmptyEquation) }
		Ok(equation)
	}

	/// Adds a constraint keeping the weighted sum of `terms` within `bounds`.
	pub fn add_constraint<'a>(&mut self, terms: impl IntoIterator<Item = (&'a str, f64)>, bounds: Bounds) -> Result<(), Error> {
		if bounds.is_free() { return Err(Error::UnboundedConstraint) }
		if bounds.is_impossible() { return Err(Error::ImpossibleBounds) }
		let equation = self.equation(terms)?;
		self.constraints.push((equation, bounds));
		Ok(())
	}

	/// Sets (or replaces) the objective.
	pub fn set_objective<'a>(&mut self, direction: Direction, terms: impl IntoIterator<Item = (&'a str, f64)>) -> Result<(), Error> {
		self.objective = Some((direction, self.equation(terms)?));
		Ok(())
	}

	pub fn solve(&self) -> Result<Solution, SolveError> {
		timed!("solve", self.solve_impl())
	}

	fn solve_impl(&self) -> Result<Solution, SolveError> {
		let (direction, objective) = self.objective.as_ref().ok_or(SolveError::NoObjective)?;

		// Every variable becomes `offset + Σ factor × column`, columns being
		// non-negative.
		let mut columns = 0;
		let mut rows = vec![];
		let substitutions = self.variables.iter().map(|(_, bounds)| {
			let column = columns;
			match (bounds.lower, bounds.upper) {
				(Some(lower), upper) => {
					columns += 1;
					if let Some(upper) = upper {
						rows.push(Row::new(vec![(column, 1.0)], Kind::Le, upper - lower));
					}
					(lower, vec![(column, 1.0)])
				}
				(None, Some(upper)) => {
					columns += 1;
					(upper, vec![(column, -1.0)])
				}
				(None, None) => {
					columns += 2;
					(0.0, vec![(column, 1.0), (column + 1, -1.0)])
				}
			}
		}).collect::<Vec<_>>();

		let substitute = |equation: &Equation| {
			let mut coefficients = vec![0.0; columns];
			let mut constant = 0.0;
			for &(variable, coefficient) in equation {
				let (offset, factors) = &substitutions[variable];
				constant += coefficient * offset;
				for &(column, factor) in factors {
					coefficients[column] += coefficient * factor;
				}
			}
			(coefficients, constant)
		};

		for (equation, bounds) in &self.constraints {
			let (coefficients, constant) = substitute(equation);
			let coefficients = coefficients.into_iter().enumerate().filter(|&(_, c)| c != 0.0).collect::<Vec<_>>();
			match (bounds.lower, bounds.upper) {
				(Some(lower), Some(upper)) if lower == upper =>
					rows.push(Row::new(coefficients, Kind::Eq, lower - constant)),
				(lower, upper) => {
					if let Some(lower) = lower {
						rows.push(Row::new(coefficients.clone(), Kind::Ge, lower - constant));
					}
					if let Some(upper) = upper {
						rows.push(Row::new(coefficients, Kind::Le, upper - constant));
					}
				}
			}
		}

		let (coefficients, constant) = substitute(objective);
		let sign = match direction { Direction::Maximize => 1.0, Direction::Minimize => -1.0 };
		let costs = coefficients.into_iter().map(|c| sign * c).collect::<Vec<_>>();

		let mut tableau = Tableau::new(columns, rows);
		let values = tableau.optimize(&costs)?;

		let values = self.variables.iter().zip(&substitutions)
			.map(|((name, _), (offset, factors))| {
				(name.clone(), offset + factors.iter().map(|&(c, f)| f * values[c]).sum::<f64>())
			})
			.collect();
		Ok(Solution { objective: sign * tableau.objective_value() + constant, values })
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind { Le, Ge, Eq }

#[derive(Debug, Clone)]
struct Row {
	coefficients: Vec<(usize, f64)>,
	kind: Kind,
	rhs: f64,
}

impl Row {
	/// Keeps the right-hand side non-negative, flipping the row if needed.
	fn new(coefficients: Vec<(usize, f64)>, kind: Kind, rhs: f64) -> Self {
		if rhs >= 0.0 { return Self { coefficients, kind, rhs } }
		let kind = match kind { Kind::Le => Kind::Ge, Kind::Ge => Kind::Le, Kind::Eq => Kind::Eq };
		Self { coefficients: coefficients.into_iter().map(|(c, a)| (c, -a)).collect(), kind, rhs: -rhs }
	}
}


/// A dense simplex tableau. Columns are, in order: the problem’s own, one
/// slack or surplus per inequality, one artificial per `>=` or `=` row, and
/// the right-hand side.
struct Tableau {
	cells: Vec<Vec<f64>>,
	basis: Vec<usize>,
	/// Reduced costs; the right-hand side cell holds minus the objective.
	costs: Vec<f64>,
	first_artificial: usize,
	width: usize,
}

impl Tableau {
	fn new(columns: usize, rows: Vec<Row>) -> Self {
		let slacks = rows.iter().filter(|r| r.kind != Kind::Eq).count();
		let artificials = rows.iter().filter(|r| r.kind != Kind::Le).count();
		let first_artificial = columns + slacks;
		let width = first_artificial + artificials + 1;

		let (mut slack, mut artificial) = (columns, first_artificial);
		let mut cells = Vec::with_capacity(rows.len());
		let mut basis = Vec::with_capacity(rows.len());
		for row in rows {
			let mut cells_row = vec![0.0; width];
			for (column, coefficient) in row.coefficients {
				cells_row[column] = coefficient;
			}
			cells_row[width - 1] = row.rhs;
			if row.kind == Kind::Le {
				cells_row[slack] = 1.0;
				basis.push(slack);
				slack += 1;
			} else {
				if row.kind == Kind::Ge {
					cells_row[slack] = -1.0;
					slack += 1;
				}
				cells_row[artificial] = 1.0;
				basis.push(artificial);
				artificial += 1;
			}
			cells.push(cells_row);
		}

		Self { cells, basis, costs: vec![0.0; width], first_artificial, width }
	}

	fn rhs(&self) -> usize {
		self.width - 1
	}

	fn objective_value(&self) -> f64 {
		-self.costs[self.rhs()]
	}

	fn price(&mut self, costs: impl Fn(usize) -> f64) {
		let rhs = self.rhs();
		self.costs = (0..self.width).map(|j| if j < rhs { costs(j) } else { 0.0 }).collect();
		for (row, &basic) in self.cells.iter().zip(&self.basis) {
			let cost = costs(basic);
			if cost == 0.0 { continue }
			for (c, &cell) in self.costs.iter_mut().zip(row) { *c -= cost * cell }
		}
	}

	fn pivot(&mut self, p: usize, q: usize) {
		#[cfg(LOGGING)]
		println!("pivot: column {q} enters, column {} leaves", self.basis[p]);

		let factor = self.cells[p][q];
		self.cells[p].iter_mut().for_each(|cell| *cell /= factor);
		let pivot_row = self.cells[p].clone();
		for (i, row) in self.cells.iter_mut().enumerate() {
			let factor = row[q];
			if i == p || factor == 0.0 { continue }
			for (cell, &x) in row.iter_mut().zip(&pivot_row) { *cell -= factor * x }
		}
		let factor = self.costs[q];
		for (c, &x) in self.costs.iter_mut().zip(&pivot_row) { *c -= factor * x }
		self.basis[p] = q;
	}

	/// Pivots until no column before `limit` improves the objective, using
	/// Bland’s rule. Returns `false` if the objective is unbounded.
	fn run(&mut self, limit: usize) -> bool {
		let rhs = self.rhs();
		loop {
			let Some(q) = (0..limit).find(|&j| self.costs[j] > EPSILON) else { return true };
			let mut leaving: Option<(usize, f64)> = None;
			for (i, row) in self.cells.iter().enumerate() {
				if row[q] <= EPSILON { continue }
				let ratio = row[rhs] / row[q];
				match leaving {
					Some((p, best)) if ratio > best + EPSILON
						|| (ratio > best - EPSILON && self.basis[p] < self.basis[i]) => (),
					_ => leaving = Some((i, ratio)),
				}
			}
			let Some((p, _)) = leaving else { return false };
			self.pivot(p, q);
		}
	}

	/// Finds a basic feasible solution, then optimizes `costs` (to be
	/// maximized) from there. Returns the value of every problem column.
	fn optimize(&mut self, costs: &[f64]) -> Result<Vec<f64>, SolveError> {
		let (first_artificial, rhs) = (self.first_artificial, self.rhs());

		self.price(|j| if j >= first_artificial { -1.0 } else { 0.0 });
		self.run(rhs);
		if self.objective_value() < -EPSILON { return Err(SolveError::Infeasible) }
		for p in 0..self.basis.len() {
			if self.basis[p] < first_artificial { continue }
			if let Some(q) = (0..first_artificial).find(|&j| self.cells[p][j].abs() > EPSILON) {
				self.pivot(p, q);
			}
		}

		self.price(|j| costs.get(j).copied().unwrap_or(0.0));
		if !self.run(first_artificial) { return Err(SolveError::Unbounded) }

		let mut values = vec![0.0; costs.len()];
		for (row, &basic) in self.cells.iter().zip(&self.basis) {
			if let Some(value) = values.get_mut(basic) { *value = row[rhs] }
		}
		Ok(values)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	macro_rules! assert_approx { ( $left:expr, $right:expr ) => { {
		let (left, right): (f64, f64) = ($left, $right);
		assert!((left - right).abs() < 1e-6, "{left} != {right}");
	} } }

	fn problem<'a>(
		variables: impl IntoIterator<Item = (&'a str, Bounds)>,
		constraints: impl IntoIterator<Item = (&'a [(&'a str, f64)], Bounds)>,
		direction: Direction,
		objective: &'a [(&'a str, f64)],
	) -> LinearProblem {
		let mut pb = LinearProblem::new();
		for (name, bounds) in variables {
			pb.add_variable(name, bounds).unwrap();
		}
		for (terms, bounds) in constraints {
			pb.add_constraint(terms.iter().copied(), bounds).unwrap();
		}
		pb.set_objective(direction, objective.iter().copied()).unwrap();
		pb
	}

	fn assert_values(solution: &Solution, expected: &[(&str, f64)]) {
		assert_eq!(solution.values.len(), expected.len());
		for &(name, value) in expected {
			assert_approx!(solution.values[name], value);
		}
	}

	#[test]
	fn add_variable() {
		let mut pb = LinearProblem::new();
		pb.add_variable("unbound", Bounds::free()).unwrap();
		pb.add_variable("lower", Bounds::at_least(42.0)).unwrap();
		pb.add_variable("upper", Bounds::at_most(69.0)).unwrap();
		pb.add_variable("bound", Bounds::between(33.0, 55.0)).unwrap();
		assert_eq!(pb.variable_count(), 4);
		assert_eq!(pb.bounds("unbound"), Some(Bounds { lower: None, upper: None }));
		assert_eq!(pb.bounds("lower"), Some(Bounds { lower: Some(42.0), upper: None }));
		assert_eq!(pb.bounds("upper"), Some(Bounds { lower: None, upper: Some(69.0) }));
		assert_eq!(pb.bounds("bound"), Some(Bounds { lower: Some(33.0), upper: Some(55.0) }));
		assert_eq!(pb.bounds("unknown"), None);

		assert_eq!(pb.add_variable("bound", Bounds::free()), Err(Error::DuplicateVariable("bound".into())));
		assert_eq!(pb.add_variable("backwards", Bounds::between(2.0, 1.0)), Err(Error::ImpossibleBounds));
		assert_eq!(pb.variable_count(), 4);
	}

	fn xyz() -> LinearProblem {
		let mut pb = LinearProblem::new();
		pb.add_variable("x", Bounds::free()).unwrap();
		pb.add_variable("y", Bounds::at_least(33.0)).unwrap();
		pb.add_variable("z", Bounds::at_most(42.0)).unwrap();
		pb
	}

	#[test]
	fn add_constraint() {
		let mut pb = xyz();
		pb.add_constraint([("x", 1.0)], Bounds::between(2.0, 3.0)).unwrap();
		pb.add_constraint([("y", 4.0)], Bounds::at_least(5.0)).unwrap();
		pb.add_constraint([("z", 5.0)], Bounds::at_most(7.0)).unwrap();
		pb.add_constraint([("x", 8.0), ("y", 9.0), ("z", 10.0)], Bounds::between(11.0, 12.0)).unwrap();
		pb.add_constraint([("x", 0.0), ("y", 1.0)], Bounds::exactly(40.0)).unwrap();
		assert_eq!(pb.constraint_count(), 5);

		assert_eq!(pb.add_constraint([("x", 14.0)], Bounds::free()), Err(Error::UnboundedConstraint));
		assert_eq!(pb.add_constraint([("x", 15.0)], Bounds::between(17.0, 16.0)), Err(Error::ImpossibleBounds));
		assert_eq!(pb.add_constraint([], Bounds::between(18.0, 19.0)), Err(Error::EmptyEquation));
		assert_eq!(pb.add_constraint([("x", 0.0)], Bounds::between(20.0, 21.0)), Err(Error::EmptyEquation));
		assert_eq!(pb.add_constraint([("x", 1.0), ("x", -1.0)], Bounds::at_most(1.0)), Err(Error::EmptyEquation));
		assert_eq!(pb.add_constraint([("unknown", 22.0)], Bounds::between(23.0, 24.0)),
			Err(Error::UnknownVariable("unknown".into())));
		assert_eq!(pb.constraint_count(), 5);
	}

	#[test]
	fn set_objective() {
		let mut pb = xyz();
		assert_eq!(pb.solve(), Err(SolveError::NoObjective));
		pb.set_objective(Direction::Maximize, [("x", 1.0)]).unwrap();
		pb.set_objective(Direction::Maximize, [("y", 2.0)]).unwrap();
		pb.set_objective(Direction::Maximize, [("z", 3.0)]).unwrap();
		pb.set_objective(Direction::Maximize, [("x", 4.0), ("y", 5.0), ("z", 6.0)]).unwrap();

		assert_eq!(pb.set_objective(Direction::Maximize, [("unknown", 7.0)]),
			Err(Error::UnknownVariable("unknown".into())));
		assert_eq!(pb.set_objective(Direction::Maximize, []), Err(Error::EmptyEquation));
		assert_eq!(pb.set_objective(Direction::Maximize, [("x", 0.0)]), Err(Error::EmptyEquation));
	}

	#[test]
	fn equalities() {
		let pb = problem(
			[("x", Bounds::free()), ("y", Bounds::at_least(0.0)), ("z", Bounds::at_least(0.0))],
			[
				(&[("x", 1.0), ("y", -2.0), ("z", 1.0)][..], Bounds::exactly(3.0)),
				(&[("x", 3.0), ("y", -1.0), ("z", 4.0)][..], Bounds::exactly(10.0)),
			],
			Direction::Maximize,
			&[("x", 2.0), ("y", -1.0), ("z", 3.0)]);
		let solution = pb.solve().unwrap();
		assert_approx!(solution.objective, 7.0);
		assert_values(&solution, &[("x", 2.0), ("y", 0.0), ("z", 1.0)]);
	}

	#[test]
	fn inequalities() {
		let pb = problem(
			[("x", Bounds::at_least(0.0)), ("y", Bounds::at_least(0.0))],
			[
				(&[("x", 2.0), ("y", 1.0)][..], Bounds::at_most(18.0)),
				(&[("x", 6.0), ("y", 5.0)][..], Bounds::at_most(60.0)),
				(&[("x", 2.0), ("y", 5.0)][..], Bounds::at_most(40.0)),
			],
			Direction::Maximize,
			&[("x", 2.0), ("y", 3.0)]);
		let solution = pb.solve().unwrap();
		assert_approx!(solution.objective, 28.0);
		assert_values(&solution, &[("x", 5.0), ("y", 6.0)]);
	}

	#[test]
	fn standard_form() {
		let pb = problem(
			["x", "y", "u", "v", "w"].map(|name| (name, Bounds::at_least(0.0))),
			[
				(&[("x", 2.0), ("y", 1.0), ("u", 1.0)][..], Bounds::exactly(18.0)),
				(&[("x", 6.0), ("y", 5.0), ("v", 1.0)][..], Bounds::exactly(60.0)),
				(&[("x", 2.0), ("y", 5.0), ("w", 1.0)][..], Bounds::exactly(40.0)),
			],
			Direction::Maximize,
			&[("x", 2.0), ("y", 3.0)]);
		let solution = pb.solve().unwrap();
		assert_approx!(solution.objective, 28.0);
		assert_values(&solution, &[("x", 5.0), ("y", 6.0), ("u", 2.0), ("v", 0.0), ("w", 0.0)]);
	}

	#[test]
	fn lower_bounded_constraint() {
		let pb = problem(
			["x", "y", "z"].map(|name| (name, Bounds::at_least(0.0))),
			[
				(&[("x", 15.0), ("y", 20.0), ("z", 25.0)][..], Bounds::at_most(1200.0)),
				(&[("x", 35.0), ("y", 60.0), ("z", 60.0)][..], Bounds::at_most(3000.0)),
				(&[("x", 20.0), ("y", 30.0), ("z", 25.0)][..], Bounds::at_most(1500.0)),
				(&[("x", 0.0), ("y", 250.0), ("z", 0.0)][..], Bounds::at_least(500.0)),
			],
			Direction::Maximize,
			&[("x", 300.0), ("y", 250.0), ("z", 450.0)]);
		let solution = pb.solve().unwrap();
		assert_approx!(solution.objective, 23060.0);
		assert_values(&solution, &[("x", 56.0), ("y", 2.0), ("z", 12.8)]);
	}

	#[test]
	fn bounded_variables() {
		let pb = problem(
			[("x", Bounds::at_least(45.0)), ("y", Bounds::at_least(5.0))],
			[
				(&[("x", 50.0), ("y", 24.0)][..], Bounds::at_most(2400.0)),
				(&[("x", 30.0), ("y", 33.0)][..], Bounds::at_most(2100.0)),
			],
			Direction::Maximize,
			&[("x", 1.0), ("y", 1.0)]);
		let solution = pb.solve().unwrap();
		assert_approx!(solution.objective, 51.25);
		assert_values(&solution, &[("x", 45.0), ("y", 6.25)]);

		let pb = problem(
			[("x", Bounds::at_most(10.0)), ("y", Bounds::between(-3.0, 4.0))],
			[(&[("x", 1.0), ("y", 1.0)][..], Bounds::at_most(100.0))],
			Direction::Maximize,
			&[("x", 1.0), ("y", 2.0)]);
		let solution = pb.solve().unwrap();
		assert_approx!(solution.objective, 18.0);
		assert_values(&solution, &[("x", 10.0), ("y", 4.0)]);
	}

	#[test]
	fn minimize() {
		let pb = problem(
			["a", "b", "c"].map(|name| (name, Bounds::at_least(0.0))),
			[
				(&[("a", 1.0), ("b", 1.0)][..], Bounds::at_least(11.0)),
				(&[("a", 1.0), ("b", -1.0)][..], Bounds::at_most(5.0)),
				(&[("a", -1.0), ("b", -1.0), ("c", 1.0)][..], Bounds::exactly(0.0)),
				(&[("a", 7.0), ("b", 12.0)][..], Bounds::at_least(35.0)),
			],
			Direction::Minimize,
			&[("a", 4.0), ("b", 5.0), ("c", 6.0)]);
		let solution = pb.solve().unwrap();
		assert_approx!(solution.objective, 113.0);
		assert_values(&solution, &[("a", 8.0), ("b", 3.0), ("c", 11.0)]);
	}

	#[test]
	fn unsolvable() {
		let unbounded = problem(
			[("x", Bounds::at_least(0.0))],
			[(&[("x", 1.0)][..], Bounds::at_least(1.0))],
			Direction::Maximize,
			&[("x", 1.0)]);
		assert_eq!(unbounded.solve(), Err(SolveError::Unbounded));

		let infeasible = problem(
			[("x", Bounds::at_least(0.0))],
			[(&[("x", 1.0)][..], Bounds::at_most(-1.0))],
			Direction::Maximize,
			&[("x", 1.0)]);
		assert_eq!(infeasible.solve(), Err(SolveError::Infeasible));
	}
}

#[cfg(BENCHING)]
mod bench {
	extern crate test;
	use super::*;

	#[bench]
	fn production_plan(b: &mut test::Bencher) {
		let mut pb = LinearProblem::new();
		for name in ["x", "y", "z"] {
			pb.add_variable(name, Bounds::at_least(0.0)).unwrap();
		}
		pb.add_constraint([("x", 15.0), ("y", 20.0), ("z", 25.0)], Bounds::at_most(1200.0)).unwrap();
		pb.add_constraint([("x", 35.0), ("y", 60.0), ("z", 60.0)], Bounds::at_most(3000.0)).unwrap();
		pb.add_constraint([("x", 20.0), ("y", 30.0), ("z", 25.0)], Bounds::at_most(1500.0)).unwrap();
		pb.add_constraint([("y", 250.0)], Bounds::at_least(500.0)).unwrap();
		pb.set_objective(Direction::Maximize, [("x", 300.0), ("y", 250.0), ("z", 450.0)]).unwrap();
		b.iter(|| pb.solve())
	}
}
