pub mod describe;
pub mod mate;
pub mod tricks;

use std::rc::Rc;
use std::str::FromStr;

use clap::{ArgAction, Parser, Subcommand};
use kennel_core::Dog;

#[derive(Parser)]
#[command(name = "kennel")]
#[command(about = "Breed, name and pair dogs.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output; repeat for less (-qq prints results only)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Seed the pairing generator for reproducible litters
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the record of a single dog
    #[command(alias = "d")]
    Describe {
        breed: String,
        /// M or F
        sex: String,
        name: Option<String>,
    },
    /// Make a dog bark
    #[command(alias = "b")]
    Bark {
        /// Dog written as breed:sex[:name]
        #[arg(long, default_value = "mutt:M")]
        dog: DogArg,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Hand a dog something to chew
    #[command(alias = "c")]
    Chew {
        #[arg(long, default_value = "mutt:M")]
        dog: DogArg,
        stuff: String,
    },
    /// Pair two dogs of opposite sex
    #[command(alias = "m")]
    Mate {
        /// Dog written as breed:sex[:name]
        first: DogArg,
        /// Dog written as breed:sex[:name]
        second: DogArg,
        /// Number of pups to whelp
        #[arg(short, long, default_value_t = 1)]
        litter: usize,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// A dog given on the command line as `breed:sex[:name]`.
///
/// Only the shape is checked here; the sex is validated when the dog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogArg {
    pub breed: String,
    pub sex: String,
    pub name: String,
}

impl DogArg {
    pub fn build(&self) -> kennel_core::Result<Rc<Dog>> {
        Dog::try_new(self.breed.as_str(), &self.sex, self.name.as_str())
    }
}

impl FromStr for DogArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let breed: &str = parts.next().unwrap_or_default().trim();
        let sex: &str = match parts.next() {
            Some(sex) => sex.trim(),
            None => anyhow::bail!("Expected breed:sex[:name], got '{s}'"),
        };
        let name: &str = parts.next().unwrap_or_default();

        if breed.is_empty() {
            anyhow::bail!("Missing breed in '{s}'");
        }

        Ok(Self {
            breed: breed.to_string(),
            sex: sex.to_string(),
            name: name.to_string(),
        })
    }
}
