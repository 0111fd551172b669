//! # Kennel Core
//!
//! The dog model and its one interesting operation, pairing.
//!
//! * **[`dog`]**: the [`Dog`] entity with its parent and offspring links.
//! * **[`breeding`]**: parent resolution, breed derivation and litter tallies.
//! * **[`picker`]**: the randomness port used to choose a pup's sex.
//! * **[`error`]**: the error taxonomy shared by all of the above.
//!
//! Dogs are handed out as `Rc<Dog>`. Whoever holds the `Rc` owns the dog;
//! parent and offspring links are `Weak` so a pedigree never keeps itself alive.

pub mod breeding;
pub mod dog;
pub mod error;
pub mod picker;

pub use dog::Dog;
pub use error::{KennelError, Result};
pub use kennel_common::sex::Sex;
