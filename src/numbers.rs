// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


/// Returns an [`Iterator`] over the primes up to and including `n`, ascending.
pub fn primes(n: u32) -> impl Iterator<Item = u32> {
	let n = n as usize;
	let mut composite = vec![false; n + 1];
	for x in (2..).take_while(|x| x * x <= n) {
		if composite[x] { continue }
		for multiple in (x * x..=n).step_by(x) { composite[multiple] = true }
	}
	composite.into_iter().enumerate().skip(2)
		.filter_map(|(i, composite)| (!composite).then_some(i as u32))
}

/// Returns the prime factors of `n`, each with its exponent. Empty for 0 and 1.
pub fn prime_factors(n: u32) -> HashMap<u32, u32> {
	let mut factors = HashMap::new();
	if n < 2 { return factors }

	let mut rest = n;
	let mut p: u32 = 2;
	while u64::from(p) * u64::from(p) <= u64::from(rest) {
		while rest % p == 0 {
			rest /= p;
			*factors.entry(p).or_insert(0) += 1;
		}
		p += if p == 2 { 1 } else { 2 };
	}
	if rest > 1 { *factors.entry(rest).or_insert(0) += 1 }
	factors
}
