use std::rc::Rc;

use kennel_core::{Dog, Sex};

/// Rex and Bella, the two Labradors every scenario starts from.
pub fn labrador_pair() -> (Rc<Dog>, Rc<Dog>) {
    (
        Dog::new("Labrador", Sex::Male, "Rex"),
        Dog::new("Labrador", Sex::Female, "Bella"),
    )
}

pub fn contains_once(pups: &[Rc<Dog>], pup: &Rc<Dog>) -> bool {
    pups.iter().filter(|p| Rc::ptr_eq(p, pup)).count() == 1
}
