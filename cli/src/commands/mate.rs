use std::rc::Rc;

use colored::*;
use kennel_common::config::Config;
use kennel_core::Dog;
use kennel_core::breeding::SexTally;
use kennel_core::picker::{SexPicker, picker_from_config};
use tracing::info;

use crate::commands::DogArg;
use crate::kprint;
use crate::terminal::{colors, format, print};

pub fn mate(first: &DogArg, second: &DogArg, litter: usize, cfg: &Config) -> anyhow::Result<()> {
    let first: Rc<Dog> = first.build()?;
    let second: Rc<Dog> = second.build()?;
    let mut picker: Box<dyn SexPicker> = picker_from_config(cfg);

    if let Some(seed) = cfg.seed {
        info!("Using seed {seed}");
    }

    let pups: Vec<Rc<Dog>> = first.litter(&second, litter, picker.as_mut())?;

    if pups.is_empty() {
        print::print_status("No pups whelped");
        return Ok(());
    }

    print_pups(&pups, cfg);
    print_summary(&pups, cfg);
    Ok(())
}

fn print_pups(pups: &[Rc<Dog>], cfg: &Config) {
    for (idx, pup) in pups.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(&pup.to_string()),
            _ => {
                print::tree_head(idx, &format::name_or_placeholder(pup));
                print::as_tree_one_level(format::dog_to_details(pup));
                if idx + 1 != pups.len() {
                    kprint!();
                }
            }
        }
    }
}

fn print_summary(pups: &[Rc<Dog>], cfg: &Config) {
    let tally: SexTally = SexTally::from_dogs(pups);
    let males: ColoredString = format!("{} male", tally.males).color(colors::MALE).bold();
    let females: ColoredString = format!("{} female", tally.females).color(colors::FEMALE).bold();
    let output: String = format!("Litter of {}: {males}, {females}", tally.total());

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        1 => info!("{}", output),
        _ => {}
    }
}
