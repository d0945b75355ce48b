//! Random number sets to sort.
use crate::common_types::Value;
use rand::Rng;
use std::ops::Range;

/// how many values a generated set holds
pub const SET_LEN: Range<usize> = 400..1000;
/// generated values, all inside the radix sort domain
pub const SET_VALUES: Range<Value> = 0..1000;

/// Draw a new number set: a random length in `SET_LEN`, values in `SET_VALUES`.
pub fn random_numbers<R: Rng + ?Sized>(rng: &mut R) -> Vec<Value> {
    let len = rng.gen_range(SET_LEN);
    (0..len).map(|_| rng.gen_range(SET_VALUES)).collect()
}
