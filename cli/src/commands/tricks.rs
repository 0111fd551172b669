use std::rc::Rc;

use kennel_common::config::Config;
use kennel_core::Dog;
use tracing::debug;

use crate::commands::DogArg;
use crate::terminal::{format, print};

pub fn bark(dog: &DogArg, count: usize, cfg: &Config) -> anyhow::Result<()> {
    let dog: Rc<Dog> = dog.build()?;
    debug!(count, "barking");
    perform(&dog, dog.bark(count), cfg);
    Ok(())
}

pub fn chew(dog: &DogArg, stuff: &str, cfg: &Config) -> anyhow::Result<()> {
    let dog: Rc<Dog> = dog.build()?;
    debug!(stuff, "chewing");
    perform(&dog, dog.chew(stuff), cfg);
    Ok(())
}

fn perform(dog: &Dog, output: String, cfg: &Config) {
    if cfg.quiet > 1 {
        print::print(&output);
        return;
    }
    print::aligned_line(&format::name_or_placeholder(dog), &output);
}
