#[cfg(test)]
mod pairing;
#[cfg(test)]
mod util;
