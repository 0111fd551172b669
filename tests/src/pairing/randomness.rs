#![cfg(test)]
use std::rc::Rc;

use kennel_core::breeding::SexTally;
use kennel_core::Dog;

use crate::util::labrador_pair;

const PAIRINGS: usize = 1000;

/// With a fair coin, 1000 draws land outside 400..=600 with probability
/// well under one in a billion.
#[test]
fn pup_sex_is_roughly_uniform() {
    let (rex, bella) = labrador_pair();
    let mut tally = SexTally::default();

    for _ in 0..PAIRINGS {
        let pup: Rc<Dog> = rex.mate(&bella).unwrap();
        tally.record(pup.sex());
    }

    assert_eq!(tally.total(), PAIRINGS);
    assert!(
        (400..=600).contains(&tally.males),
        "Skewed outcome: {} male / {} female",
        tally.males,
        tally.females
    );
    assert_eq!(rex.offspring_count(), PAIRINGS);
}

#[test]
fn pup_sex_ignores_parent_order() {
    let (rex, bella) = labrador_pair();
    let mut tally = SexTally::default();

    for i in 0..PAIRINGS {
        let pup: Rc<Dog> = if i % 2 == 0 {
            rex.mate(&bella).unwrap()
        } else {
            bella.mate(&rex).unwrap()
        };
        tally.record(pup.sex());
    }

    assert!(tally.males > 0 && tally.females > 0);
    assert!((400..=600).contains(&tally.females));
}
