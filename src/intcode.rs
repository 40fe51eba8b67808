// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! The “Intcode computer” of the 2019 puzzles. Days 2, 5, 7, 9, 11, 13 and
//! 15 each run programs on it, needing ever more of its instructions; see
//! [`InstructionSet`].

use std::collections::{HashMap, VecDeque};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op { Nop, Add, Mul, In, Out, JumpIfTrue, JumpIfFalse, Lt, Eq, RelAdj, Halt }

impl Op {
	pub const fn code(self) -> u32 {
		use Op::*;
		match self {
			Nop => 0, Add => 1, Mul => 2, In => 3, Out => 4, JumpIfTrue => 5,
			JumpIfFalse => 6, Lt => 7, Eq => 8, RelAdj => 9, Halt => 99,
		}
	}

	fn from_code(code: i64) -> Option<Self> {
		use Op::*;
		Some(match code {
			0 => Nop, 1 => Add, 2 => Mul, 3 => In, 4 => Out, 5 => JumpIfTrue,
			6 => JumpIfFalse, 7 => Lt, 8 => Eq, 9 => RelAdj, 99 => Halt,
			_ => return None,
		})
	}

	/// The number of memory cells taken up by the instruction.
	pub fn size(self) -> usize {
		use Op::*;
		match self {
			Nop | Halt => 1,
			In | Out | RelAdj => 2,
			JumpIfTrue | JumpIfFalse => 3,
			Add | Mul | Lt | Eq => 4,
		}
	}
}


/// The set of [`Op`]s a [`Processor`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionSet(u128);

macro_rules! instruction_sets {
	( $( $( #[$doc:meta] )* $name:ident = $( $base:ident + )? [ $( $op:ident ),* ]; )+ ) => { paste::paste! {
		impl InstructionSet {
			$(
				$( #[$doc] )*
				pub const [<$name:upper>]: Self = Self(0 $( | Self::[<$base:upper>].0 )? $( | 1 << Op::$op.code() )*);
			)+
		}
	} }
}

instruction_sets! {
	/// Day 2: `add`, `mul`, `halt` and a one-cell no-op.
	arithmetic = [Nop, Add, Mul, Halt];
	/// Day 5, part 1: adds input and output.
	io = arithmetic + [In, Out];
	/// Day 5, part 2: adds jumps and comparisons.
	conditional = io + [JumpIfTrue, JumpIfFalse, Lt, Eq];
	/// Day 9: adds relative base adjustment (and with it, relative mode).
	relative = conditional + [RelAdj];
}

impl InstructionSet {
	pub const fn with(self, op: Op) -> Self {
		Self(self.0 | 1 << op.code())
	}

	pub fn supports(&self, op: Op) -> bool {
		self.0 & 1 << op.code() != 0
	}
}

impl Default for InstructionSet {
	fn default() -> Self {
		Self::RELATIVE
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParMode { Pos, Imm, Rel }

impl ParMode {
	/// Reads the mode of parameter `index` off the hundreds (and up) digits of
	/// an instruction.
	fn of(code: i64, index: usize) -> Result<Self, i64> {
		match code / 10_i64.pow(index as u32 + 2) % 10 {
			0 => Ok(ParMode::Pos),
			1 => Ok(ParMode::Imm),
			2 => Ok(ParMode::Rel),
			mode => Err(mode),
		}
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("unsupported opcode {opcode} at address {address}")]
	UnsupportedOpcode { address: usize, opcode: i64 },
	#[error("unknown parameter mode {mode} at address {address}")]
	UnknownMode { address: usize, mode: i64 },
	#[error("negative address {0}")]
	NegativeAddress(i64),
	#[error("arithmetic overflow at address {address}")]
	Overflow { address: usize },
	#[error("program needs more input")]
	InputExhausted,
}


/// A program’s memory. Reading past the loaded program yields zeroes;
/// writing there extends it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
	program: Vec<i64>,
	ext: HashMap<usize, i64>,
}

impl Memory {
	fn address(address: i64) -> Result<usize, Error> {
		usize::try_from(address).map_err(|_| Error::NegativeAddress(address))
	}

	/// The length of the loaded program.
	pub fn len(&self) -> usize {
		self.program.len()
	}

	pub fn is_empty(&self) -> bool {
		self.program.is_empty()
	}

	/// The loaded program, as modified by execution so far.
	pub fn as_slice(&self) -> &[i64] {
		&self.program
	}

	pub fn read(&self, address: i64) -> Result<i64, Error> {
		let address = Self::address(address)?;
		Ok(self.program.get(address).or_else(|| self.ext.get(&address)).copied().unwrap_or(0))
	}

	pub fn write(&mut self, address: i64, value: i64) -> Result<(), Error> {
		let address = Self::address(address)?;
		match self.program.get_mut(address) {
			Some(cell) => *cell = value,
			None => { self.ext.insert(address, value); }
		}
		Ok(())
	}
}

impl From<Vec<i64>> for Memory {
	fn from(program: Vec<i64>) -> Self {
		Self { program, ext: HashMap::new() }
	}
}


/// Why [`Processor::execute`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
	Halted,
	/// Feed more input and call [`Processor::execute`] again to resume.
	NeedsInput,
}

/// What executing a single instruction means for the instruction pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
	Advance(usize),
	Jump(usize),
	Halt,
	NeedsInput,
}


#[derive(Debug, Clone)]
pub struct Processor {
	memory: Memory,
	ip: usize,
	rel_base: i64,
	instructions: InstructionSet,
	input: VecDeque<i64>,
	output: VecDeque<i64>,
}

impl Processor {
	pub fn new(memory: impl Into<Memory>, instructions: InstructionSet) -> Self {
		Self {
			memory: memory.into(),
			ip: 0,
			rel_base: 0,
			instructions,
			input: VecDeque::new(),
			output: VecDeque::new(),
		}
	}

	pub fn with_input(mut self, values: impl IntoIterator<Item = i64>) -> Self {
		self.input.extend(values);
		self
	}

	pub fn memory(&self) -> &Memory {
		&self.memory
	}

	pub fn memory_mut(&mut self) -> &mut Memory {
		&mut self.memory
	}

	/// The value at address 0, where day 2 programs leave their result.
	pub fn result(&self) -> i64 {
		self.memory.read(0).unwrap_or(0)
	}

	pub fn instruction_pointer(&self) -> usize {
		self.ip
	}

	pub fn relative_base(&self) -> i64 {
		self.rel_base
	}

	pub fn push_input(&mut self, value: i64) {
		self.input.push_back(value)
	}

	pub fn extend_input(&mut self, values: impl IntoIterator<Item = i64>) {
		self.input.extend(values)
	}

	pub fn outputs(&self) -> impl Iterator<Item = i64> + '_ {
		self.output.iter().copied()
	}

	pub fn take_output(&mut self) -> Option<i64> {
		self.output.pop_front()
	}

	pub fn drain_outputs(&mut self) -> Vec<i64> {
		self.output.drain(..).collect()
	}

	pub fn is_halted(&self) -> bool {
		self.ip >= self.memory.len()
			|| matches!(self.memory.read(self.ip as i64), Ok(code) if code % 100 == Op::Halt.code() as i64)
	}

	fn param_address(&self, address: usize, code: i64, index: usize) -> Result<i64, Error> {
		let cell = (address + 1 + index) as i64;
		match ParMode::of(code, index).map_err(|mode| Error::UnknownMode { address, mode })? {
			ParMode::Pos => self.memory.read(cell),
			ParMode::Imm => Ok(cell),
			ParMode::Rel => self.rel_base.checked_add(self.memory.read(cell)?).ok_or(Error::Overflow { address }),
		}
	}

	fn load(&self, address: usize, code: i64, index: usize) -> Result<i64, Error> {
		self.memory.read(self.param_address(address, code, index)?)
	}

	fn store(&mut self, address: usize, code: i64, index: usize, value: i64) -> Result<(), Error> {
		let to = self.param_address(address, code, index)?;
		self.memory.write(to, value)
	}

	/// Executes the instruction at `address`, leaving the instruction pointer
	/// alone.
	pub fn execute_instruction_at(&mut self, address: usize) -> Result<Effect, Error> {
		use Op::*;

		let code = self.memory.read(address as i64)?;
		let op = Op::from_code(code % 100)
			.filter(|op| self.instructions.supports(*op))
			.ok_or(Error::UnsupportedOpcode { address, opcode: code })?;

		macro_rules! load { ( $index:literal ) => { self.load(address, code, $index)? } }

		let effect = match op {
			Nop => Effect::Advance(op.size()),
			Add | Mul | Lt | Eq => {
				let (a, b) = (load!(0), load!(1));
				let value = match op {
					Add => a.checked_add(b).ok_or(Error::Overflow { address })?,
					Mul => a.checked_mul(b).ok_or(Error::Overflow { address })?,
					Lt => i64::from(a < b),
					_ => i64::from(a == b),
				};
				self.store(address, code, 2, value)?;
				Effect::Advance(op.size())
			}
			In => match self.input.front().copied() {
				None => Effect::NeedsInput,
				Some(value) => {
					self.store(address, code, 0, value)?;
					self.input.pop_front();
					Effect::Advance(op.size())
				}
			}
			Out => {
				let value = load!(0);
				self.output.push_back(value);
				Effect::Advance(op.size())
			}
			JumpIfTrue | JumpIfFalse => {
				if (load!(0) != 0) == (op == JumpIfTrue) {
					let to = load!(1);
					Effect::Jump(usize::try_from(to).map_err(|_| Error::NegativeAddress(to))?)
				} else {
					Effect::Advance(op.size())
				}
			}
			RelAdj => {
				let delta = load!(0);
				self.rel_base = self.rel_base.checked_add(delta).ok_or(Error::Overflow { address })?;
				Effect::Advance(op.size())
			}
			Halt => Effect::Halt,
		};

		#[cfg(LOGGING)]
		println!("{address:>5}: {code:>5} {op:?} -> {effect:?}");

		Ok(effect)
	}

	/// Executes the instruction at the instruction pointer, returning a
	/// [`State`] if execution cannot continue.
	pub fn step(&mut self) -> Result<Option<State>, Error> {
		match self.execute_instruction_at(self.ip)? {
			Effect::Advance(size) => self.ip += size,
			Effect::Jump(to) => self.ip = to,
			Effect::Halt => return Ok(Some(State::Halted)),
			Effect::NeedsInput => return Ok(Some(State::NeedsInput)),
		}
		Ok(None)
	}

	/// Executes until halting or running out of input. Running past the end
	/// of the loaded program counts as halting, even onto cells written since.
	pub fn execute(&mut self) -> Result<State, Error> {
		while self.ip < self.memory.len() {
			if let Some(state) = self.step()? { return Ok(state) }
		}
		Ok(State::Halted)
	}

	/// Executes until halting, returning all outputs not yet taken.
	pub fn run_to_halt(&mut self) -> Result<Vec<i64>, Error> {
		match self.execute()? {
			State::Halted => Ok(self.drain_outputs()),
			State::NeedsInput => Err(Error::InputExhausted),
		}
	}
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program(Vec<i64>);

impl Program {
	pub fn as_slice(&self) -> &[i64] {
		&self.0
	}

	pub fn processor(&self, instructions: InstructionSet) -> Processor {
		Processor::new(self.0.clone(), instructions)
	}

	/// Runs the program once for every candidate patch, its values written to
	/// `addresses` first, and returns any patch for which the program halts
	/// and `accept`s the result. Candidates are tried in parallel, so with
	/// more than one acceptable patch, which one is returned is unspecified.
	pub fn search_patches<const N: usize>(
		&self,
		instructions: InstructionSet,
		addresses: [usize; N],
		candidates: impl rayon::iter::IntoParallelIterator<Item = [i64; N]>,
		accept: impl Fn(&Processor) -> bool + Sync,
	) -> Option<[i64; N]> {
		use rayon::iter::ParallelIterator as _;
		timed!("search_patches", candidates.into_par_iter().find_any(|patch| {
			let mut processor = self.processor(instructions);
			addresses.iter().zip(patch)
				.all(|(&address, &value)| processor.memory.write(address as i64, value).is_ok())
				&& processor.run_to_halt().is_ok()
				&& accept(&processor)
		}))
	}
}

impl From<Vec<i64>> for Program {
	fn from(ints: Vec<i64>) -> Self {
		Self(ints)
	}
}


pub use parsing::ProgramError;

mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Program;

	#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
	#[error("invalid integer {found:?} at position {position}")]
	pub struct ProgramError {
		pub position: usize,
		pub found: String,
		#[source]
		source: ParseIntError,
	}

	impl FromStr for Program {
		type Err = ProgramError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.trim_end();
			let s = s.strip_suffix(',').unwrap_or(s);
			if s.is_empty() { return Ok(Program(vec![])) }
			s.split(',')
				.enumerate()
				.map(|(i, int)| {
					let int = int.trim();
					int.parse().map_err(|source| ProgramError { position: i + 1, found: int.to_owned(), source })
				})
				.collect::<Result<_, _>>()
				.map(Program)
		}
	}
}



#[cfg(BENCHING)]
mod bench {
	extern crate test;
	use super::*;

	#[bench]
	fn quine(b: &mut test::Bencher) {
		let program = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99".parse::<Program>().unwrap();
		b.iter(|| program.processor(InstructionSet::RELATIVE).run_to_halt())
	}
}
