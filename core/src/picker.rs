//! # Sex Pickers
//!
//! The only nondeterminism in the model is the sex of a pup. It is drawn
//! through [`SexPicker`] so callers can swap the process-wide generator for a
//! seeded or scripted one.

use kennel_common::{config::Config, sex::Sex};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// A two-outcome source: every call returns one of [`Sex::ALL`].
pub trait SexPicker {
    fn pick(&mut self) -> Sex;
}

fn sex_from_coin(heads: bool) -> Sex {
    if heads { Sex::Male } else { Sex::Female }
}

/// Uniform choice backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl SexPicker for ThreadRngPicker {
    fn pick(&mut self) -> Sex {
        sex_from_coin(rand::rng().random_bool(0.5))
    }
}

/// Uniform choice from a seeded generator. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct SeededPicker {
    rng: StdRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SexPicker for SeededPicker {
    fn pick(&mut self) -> Sex {
        sex_from_coin(self.rng.random_bool(0.5))
    }
}

/// Always returns the same sex.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub Sex);

impl SexPicker for FixedPicker {
    fn pick(&mut self) -> Sex {
        self.0
    }
}

/// Alternates between the two sexes, starting with `next`.
#[derive(Debug, Clone, Copy)]
pub struct CyclePicker {
    next: Sex,
}

impl CyclePicker {
    pub fn starting_with(sex: Sex) -> Self {
        Self { next: sex }
    }
}

impl SexPicker for CyclePicker {
    fn pick(&mut self) -> Sex {
        let sex = self.next;
        self.next = sex.opposite();
        sex
    }
}

/// Selects the seeded picker when the config carries a seed.
pub fn picker_from_config(cfg: &Config) -> Box<dyn SexPicker> {
    match cfg.seed {
        Some(seed) => Box::new(SeededPicker::new(seed)),
        None => Box::new(ThreadRngPicker),
    }
}
