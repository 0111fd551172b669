//! # Breeding Rules
//!
//! Everything [`Dog::mate`] decides lives here: which dog is the father,
//! what breed the pup inherits, and the bookkeeping on both parents.

use std::rc::Rc;

use kennel_common::sex::Sex;
use tracing::{debug, warn};

use crate::dog::Dog;
use crate::error::{KennelError, Result};
use crate::picker::SexPicker;

/// Breed given to a pup whose parents differ in breed.
pub const MIXED_BREED: &str = "mixed-breed";

/// Splits a pair into `(father, mother)`.
///
/// Fails with [`KennelError::Mating`] when both share a sex, which also
/// covers a dog paired with itself.
pub fn resolve_parents<'a>(
    a: &'a Rc<Dog>,
    b: &'a Rc<Dog>,
) -> Result<(&'a Rc<Dog>, &'a Rc<Dog>)> {
    if a.sex() == b.sex() {
        let (first, second) = (a.name(), b.name());
        warn!(sex = %a.sex(), first = %first, second = %second, "rejected same-sex pairing");
        return Err(KennelError::Mating {
            first,
            second,
            sex: a.sex(),
        });
    }

    match a.sex() {
        Sex::Male => Ok((a, b)),
        Sex::Female => Ok((b, a)),
    }
}

/// Shared breed when both parents match exactly, [`MIXED_BREED`] otherwise.
pub fn derive_breed(father: &Dog, mother: &Dog) -> String {
    if father.breed() == mother.breed() {
        father.breed().to_string()
    } else {
        MIXED_BREED.to_string()
    }
}

/// Creates one pup and records it on both parents. Parents must already be resolved.
pub(crate) fn whelp<P>(father: &Rc<Dog>, mother: &Rc<Dog>, picker: &mut P) -> Rc<Dog>
where
    P: SexPicker + ?Sized,
{
    let pup: Rc<Dog> = Dog::pup(derive_breed(father, mother), picker.pick(), father, mother);
    father.record_pup(&pup);
    mother.record_pup(&pup);

    debug!(
        father = %father.name(),
        mother = %mother.name(),
        breed = pup.breed(),
        sex = %pup.sex(),
        "pup whelped"
    );
    pup
}

/// Male/female counts over a set of dogs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SexTally {
    pub males: usize,
    pub females: usize,
}

impl SexTally {
    pub fn record(&mut self, sex: Sex) {
        match sex {
            Sex::Male => self.males += 1,
            Sex::Female => self.females += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.males + self.females
    }

    pub fn from_dogs(dogs: &[Rc<Dog>]) -> Self {
        let mut tally = Self::default();
        for dog in dogs {
            tally.record(dog.sex());
        }
        tally
    }
}
