use crate::terminal::colors;
use colored::*;
use kennel_core::breeding::MIXED_BREED;
use kennel_core::{Dog, Sex};

pub type Detail = (String, ColoredString);

pub fn sex_colored(sex: Sex) -> ColoredString {
    match sex {
        Sex::Male => "Male".color(colors::MALE),
        Sex::Female => "Female".color(colors::FEMALE),
    }
}

pub fn breed_colored(breed: &str) -> ColoredString {
    if breed == MIXED_BREED {
        breed.color(colors::MIXED).italic()
    } else {
        breed.normal()
    }
}

/// Display name for a dog, falling back when it has none yet.
pub fn name_or_placeholder(dog: &Dog) -> String {
    let name: String = dog.name();
    if name.is_empty() {
        String::from("(unnamed)")
    } else {
        name
    }
}

fn parent_detail(label: &str, parent: Option<std::rc::Rc<Dog>>) -> Detail {
    let value: ColoredString = match parent {
        Some(dog) => format!("{} ({})", name_or_placeholder(&dog), dog.breed()).normal(),
        None => "unknown".dimmed(),
    };
    (label.to_string(), value)
}

pub fn dog_to_details(dog: &Dog) -> Vec<Detail> {
    vec![
        (String::from("Breed"), breed_colored(dog.breed())),
        (String::from("Sex"), sex_colored(dog.sex())),
        parent_detail("Father", dog.father()),
        parent_detail("Mother", dog.mother()),
    ]
}
