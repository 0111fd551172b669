#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `0` prints everything, `1` drops headers, `2` prints results only.
    pub quiet: u8,
    /// Seeds the pairing generator so litters are reproducible.
    ///
    /// `None` falls back to the thread-local generator.
    pub seed: Option<u64>,
    pub no_color: bool,
}
