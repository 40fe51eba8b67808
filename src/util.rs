// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Evaluates `$expr`; with `--cfg LOGGING`, also prints how long that took.
macro_rules! timed { ( $title:expr, $expr:expr ) => { {
	#[cfg(LOGGING)]
	let start = std::time::Instant::now();
	let result = $expr;
	#[cfg(LOGGING)]
	println!("Timed {}: {:>10.4} ms", $title, start.elapsed().as_secs_f64() * 1000.0);
	#[cfg(not(LOGGING))]
	let _ = $title;
	result
} } }
