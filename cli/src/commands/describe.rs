use std::rc::Rc;

use kennel_common::config::Config;
use kennel_core::Dog;

use crate::terminal::{format, print};

pub fn describe(breed: &str, sex: &str, name: &str, cfg: &Config) -> anyhow::Result<()> {
    let dog: Rc<Dog> = Dog::try_new(breed, sex, name)?;

    if cfg.quiet > 1 {
        print::print(&dog.to_string());
        return Ok(());
    }

    print::tree_head(0, &format::name_or_placeholder(&dog));
    print::as_tree_one_level(format::dog_to_details(&dog));
    Ok(())
}
