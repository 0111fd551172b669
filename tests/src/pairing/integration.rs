#![cfg(test)]
use std::rc::Rc;

use kennel_common::config::Config;
use kennel_core::breeding::MIXED_BREED;
use kennel_core::picker::{FixedPicker, SeededPicker, picker_from_config};
use kennel_core::{Dog, KennelError, Sex};

use crate::util::{contains_once, labrador_pair};

/// Rex and Bella produce a Labrador pup that both of them list exactly once.
#[test]
fn labrador_pairing_end_to_end() -> anyhow::Result<()> {
    let (rex, bella) = labrador_pair();

    let pup: Rc<Dog> = rex.mate(&bella)?;

    assert_eq!(pup.breed(), "Labrador");
    assert_eq!(pup.name(), "");
    assert!(Sex::ALL.contains(&pup.sex()));
    assert!(Rc::ptr_eq(&pup.father().unwrap(), &rex));
    assert!(Rc::ptr_eq(&pup.mother().unwrap(), &bella));

    let rex_pups = rex.offspring();
    let bella_pups = bella.offspring();
    assert_eq!(rex_pups.len(), 1);
    assert_eq!(bella_pups.len(), 1);
    assert!(contains_once(&rex_pups, &pup));
    assert!(contains_once(&bella_pups, &pup));
    Ok(())
}

#[test]
fn pairing_is_symmetric_in_argument_order() -> anyhow::Result<()> {
    let (rex, bella) = labrador_pair();

    let pup: Rc<Dog> = bella.mate_with(&rex, &mut FixedPicker(Sex::Male))?;

    assert!(Rc::ptr_eq(&pup.father().unwrap(), &rex));
    assert!(Rc::ptr_eq(&pup.mother().unwrap(), &bella));
    Ok(())
}

#[test]
fn cross_breed_pup_is_mixed() -> anyhow::Result<()> {
    let rex = Dog::new("Labrador", Sex::Male, "Rex");
    let fifi = Dog::new("Poodle", Sex::Female, "Fifi");

    let pup: Rc<Dog> = fifi.mate(&rex)?;

    assert_eq!(pup.breed(), MIXED_BREED);
    assert_eq!(pup.breed(), "mixed-breed");
    Ok(())
}

#[test]
fn same_sex_pairing_fails_without_side_effects() {
    for sex in Sex::ALL {
        let a = Dog::new("Labrador", sex, "A");
        let b = Dog::new("Poodle", sex, "B");

        let result = a.mate(&b);

        assert_eq!(
            result.unwrap_err(),
            KennelError::Mating {
                first: "A".to_string(),
                second: "B".to_string(),
                sex,
            }
        );
        assert!(a.offspring().is_empty());
        assert!(b.offspring().is_empty());
        assert_eq!(a.offspring_count(), 0);
        assert_eq!(b.offspring_count(), 0);
    }
}

#[test]
fn second_generation_keeps_pedigree() -> anyhow::Result<()> {
    let (rex, bella) = labrador_pair();
    let son: Rc<Dog> = rex.mate_with(&bella, &mut FixedPicker(Sex::Male))?;
    son.set_name("Junior");
    let daisy = Dog::new("Beagle", Sex::Female, "Daisy");

    let grandpup: Rc<Dog> = son.mate(&daisy)?;

    assert_eq!(grandpup.breed(), MIXED_BREED);
    let father: Rc<Dog> = grandpup.father().unwrap();
    assert_eq!(father.name(), "Junior");
    assert!(Rc::ptr_eq(&father.father().unwrap(), &rex));
    assert_eq!(rex.offspring().len(), 1);
    assert_eq!(son.offspring().len(), 1);
    Ok(())
}

#[test]
fn repeated_pairings_append_in_order() -> anyhow::Result<()> {
    let (rex, bella) = labrador_pair();
    let fifi = Dog::new("Poodle", Sex::Female, "Fifi");

    let first: Rc<Dog> = rex.mate(&bella)?;
    let second: Rc<Dog> = rex.mate(&fifi)?;
    let third: Rc<Dog> = bella.mate(&rex)?;

    let rex_pups = rex.offspring();
    assert_eq!(rex_pups.len(), 3);
    assert!(Rc::ptr_eq(&rex_pups[0], &first));
    assert!(Rc::ptr_eq(&rex_pups[1], &second));
    assert!(Rc::ptr_eq(&rex_pups[2], &third));

    let bella_pups = bella.offspring();
    assert_eq!(bella_pups.len(), 2);
    assert!(Rc::ptr_eq(&bella_pups[0], &first));
    assert!(Rc::ptr_eq(&bella_pups[1], &third));
    assert_eq!(fifi.offspring().len(), 1);
    Ok(())
}

#[test]
fn seeded_litters_are_reproducible() -> anyhow::Result<()> {
    let (rex, bella) = labrador_pair();

    let left: Vec<Sex> = rex
        .litter(&bella, 16, &mut SeededPicker::new(2024))?
        .iter()
        .map(|pup| pup.sex())
        .collect();

    let cfg = Config {
        seed: Some(2024),
        ..Config::default()
    };
    let mut picker = picker_from_config(&cfg);
    let right: Vec<Sex> = rex
        .litter(&bella, 16, picker.as_mut())?
        .iter()
        .map(|pup| pup.sex())
        .collect();

    assert_eq!(left, right);
    Ok(())
}

#[test]
fn text_constructor_rejects_unknown_sex() {
    let result = Dog::try_new("Labrador", "neither", "Rex");
    assert!(matches!(
        result,
        Err(KennelError::InvalidAttribute { attribute: "sex", ref value }) if value == "neither"
    ));
}
