//! The CPU workload: a hot phase and a warm phase run back to back forever.
//!
//! Phase functions are never inlined so each one shows up as its own frame
//! when a sampling profiler walks the stack.

use std::hint::black_box;

pub const HOT_ITERATIONS: u32 = 1_000_000;
pub const WARM_ITERATIONS: u32 = 500_000;

/// Accumulator the phases write into so the loops can't be optimized away.
#[derive(Debug, Default)]
pub struct Sink {
    value: f64,
}

impl Sink {
    pub fn new() -> Self {
        Self { value: 0.0 }
    }

    #[inline(always)]
    pub fn add(&mut self, x: f64) {
        self.value = black_box(self.value + x);
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hot,
    Warm,
}

impl Phase {
    pub fn iterations(&self) -> u32 {
        match self {
            Phase::Hot => HOT_ITERATIONS,
            Phase::Warm => WARM_ITERATIONS,
        }
    }

    pub fn run(&self, sink: &mut Sink) {
        match self {
            Phase::Hot => hot_function(sink),
            Phase::Warm => warm_function(sink),
        }
    }
}

#[inline(never)]
pub fn hot_function(sink: &mut Sink) {
    for i in 0..HOT_ITERATIONS {
        let x = f64::from(i);
        sink.add(x.sin() * x.cos());
    }
}

#[inline(never)]
pub fn warm_function(sink: &mut Sink) {
    for i in 0..WARM_ITERATIONS {
        sink.add(f64::from(i).sin());
    }
}

pub struct Driver {
    sink: Sink,
    cycles: u64,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            sink: Sink::new(),
            cycles: 0,
        }
    }

    /// One hot pass followed by one warm pass.
    pub fn cycle(&mut self) {
        Phase::Hot.run(&mut self.sink);
        Phase::Warm.run(&mut self.sink);
        self.cycles += 1;
        log::trace!("cycle {} done, sink={}", self.cycles, self.sink.value());
    }

    /// Runs until the process is killed.
    pub fn run(mut self) -> ! {
        log::debug!(
            "Starting workload: hot={} iterations, warm={} iterations",
            HOT_ITERATIONS,
            WARM_ITERATIONS
        );
        loop {
            self.cycle();
        }
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn sink(&self) -> &Sink {
        &self.sink
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
