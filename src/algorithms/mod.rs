//! Instrumented sorting algorithms.
//!
//! Every algorithm sorts the whole working array in place and reports its
//! progress to a [`Pacer`] which decides when to pause.
//! None of them stops early on already sorted input: timings must stay
//! comparable from one call to the next.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;

use crate::common_types::{AlgorithmId, Value};
use crate::error::Interrupted;
use crate::pause::Pacer;

pub(crate) use self::radix::RADIX_DOMAIN;

/// Sort `data` with the given algorithm, pausing through `pacer`.
pub(crate) fn run(
    algorithm: AlgorithmId,
    data: &mut [Value],
    pacer: &mut Pacer,
) -> Result<(), Interrupted> {
    match algorithm {
        AlgorithmId::InsertionSort => insertion::insertion_sort(data, pacer),
        AlgorithmId::HeapSort => heap::heap_sort(data, pacer),
        AlgorithmId::BubbleSort => bubble::bubble_sort(data, pacer),
        AlgorithmId::MergeSort => merge::merge_sort(data, pacer),
        AlgorithmId::QuickSort => quick::quick_sort(data, pacer),
        AlgorithmId::RadixSort => radix::radix_sort(data, pacer),
    }
}
