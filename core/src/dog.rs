//! # Dog Entity
//!
//! Breed and sex are fixed at construction. The name can be reassigned at any
//! time by whoever holds the dog. Parents are set only when a dog is born
//! through [`Dog::mate`]; the offspring list only ever grows.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use kennel_common::sex::Sex;

use crate::breeding::{self, resolve_parents};
use crate::error::Result;
use crate::picker::{SexPicker, ThreadRngPicker};

const BARK: &str = "Woff";

#[derive(Debug)]
pub struct Dog {
    breed: String,
    sex: Sex,
    name: RefCell<String>,
    mother: Option<Weak<Dog>>,
    father: Option<Weak<Dog>>,
    offspring: RefCell<Vec<Weak<Dog>>>,
}

impl Dog {
    /// A dog with no parents and no offspring.
    pub fn new(breed: impl Into<String>, sex: Sex, name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            breed: breed.into(),
            sex,
            name: RefCell::new(name.into()),
            mother: None,
            father: None,
            offspring: RefCell::new(Vec::new()),
        })
    }

    pub fn unnamed(breed: impl Into<String>, sex: Sex) -> Rc<Self> {
        Self::new(breed, sex, String::new())
    }

    /// Like [`Dog::new`] but takes the sex as text (`M`, `F`, `male`, `female`).
    ///
    /// Fails with [`crate::KennelError::InvalidAttribute`] on anything else.
    pub fn try_new(
        breed: impl Into<String>,
        sex: &str,
        name: impl Into<String>,
    ) -> Result<Rc<Self>> {
        let sex: Sex = sex.parse()?;
        Ok(Self::new(breed, sex, name))
    }

    pub(crate) fn pup(breed: String, sex: Sex, father: &Rc<Dog>, mother: &Rc<Dog>) -> Rc<Self> {
        Rc::new(Self {
            breed,
            sex,
            name: RefCell::new(String::new()),
            mother: Some(Rc::downgrade(mother)),
            father: Some(Rc::downgrade(father)),
            offspring: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn record_pup(&self, pup: &Rc<Dog>) {
        self.offspring.borrow_mut().push(Rc::downgrade(pup));
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = name.into();
    }

    /// `None` for dogs created directly, or once the mother has been dropped.
    pub fn mother(&self) -> Option<Rc<Dog>> {
        self.mother.as_ref().and_then(Weak::upgrade)
    }

    /// `None` for dogs created directly, or once the father has been dropped.
    pub fn father(&self) -> Option<Rc<Dog>> {
        self.father.as_ref().and_then(Weak::upgrade)
    }

    /// Snapshot of the pups still alive, in the order they were born.
    pub fn offspring(&self) -> Vec<Rc<Dog>> {
        self.offspring
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    /// Number of pairings this dog took part in, dropped pups included.
    pub fn offspring_count(&self) -> usize {
        self.offspring.borrow().len()
    }

    pub fn is_parent_of(&self, pup: &Dog) -> bool {
        let me: *const Dog = self;
        [&pup.mother, &pup.father]
            .into_iter()
            .flatten()
            .any(|parent| std::ptr::eq(parent.as_ptr(), me))
    }

    /// `"Woff"` repeated `n` times, no separator.
    pub fn bark(&self, n: usize) -> String {
        BARK.repeat(n)
    }

    pub fn bark_once(&self) -> String {
        self.bark(1)
    }

    /// Drops the last character of `stuff`. Chewing nothing leaves nothing.
    pub fn chew(&self, stuff: &str) -> String {
        let mut chars = stuff.chars();
        chars.next_back();
        chars.as_str().to_string()
    }

    /// Pairs with `other`, drawing the pup's sex from the thread-local generator.
    pub fn mate(self: &Rc<Self>, other: &Rc<Dog>) -> Result<Rc<Dog>> {
        self.mate_with(other, &mut ThreadRngPicker)
    }

    /// Pairs with `other` and returns the pup.
    ///
    /// The male becomes the father. The pup inherits the shared breed or
    /// [`breeding::MIXED_BREED`], has an empty name, and is appended to both
    /// parents' offspring. Same-sex pairs fail with no side effects.
    pub fn mate_with<P>(self: &Rc<Self>, other: &Rc<Dog>, picker: &mut P) -> Result<Rc<Dog>>
    where
        P: SexPicker + ?Sized,
    {
        let (father, mother) = resolve_parents(self, other)?;
        Ok(breeding::whelp(father, mother, picker))
    }

    /// Runs `size` pairings in a row. The sex check happens once, up front.
    pub fn litter<P>(
        self: &Rc<Self>,
        other: &Rc<Dog>,
        size: usize,
        picker: &mut P,
    ) -> Result<Vec<Rc<Dog>>>
    where
        P: SexPicker + ?Sized,
    {
        let (father, mother) = resolve_parents(self, other)?;
        Ok((0..size)
            .map(|_| breeding::whelp(father, mother, &mut *picker))
            .collect())
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dog: {}, Breed: {}, Sex: {}",
            self.name.borrow(),
            self.breed,
            self.sex
        )
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
