//! Types which are common between the engine, the controller and the front end.
use crate::error::SortError;
use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// the numbers we sort
pub type Value = u32;

/// default number of pause points in a stepped run
pub const STEP_BUDGET: usize = 20;

/// how many full runs the timing harness averages over
pub const TIMING_TRIALS: usize = 100;

/// All available sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmId {
    /// shift-insert each element into the sorted prefix
    InsertionSort,
    /// max-heap then repeated root extraction
    HeapSort,
    /// adjacent swaps over a shrinking window
    BubbleSort,
    /// top-down merge sort with a single auxiliary buffer
    MergeSort,
    /// Lomuto quicksort, last element as pivot
    QuickSort,
    /// LSD base 10 radix sort over three digits
    RadixSort,
}

lazy_static! {
    // every accepted spelling, lower case
    static ref NAMES: HashMap<String, AlgorithmId> = {
        let mut names = HashMap::new();
        for algorithm in AlgorithmId::ALL.iter().cloned() {
            let name = algorithm.name().to_lowercase();
            names.insert(name.replace(' ', "_"), algorithm);
            names.insert(name.replace(' ', ""), algorithm);
            names.insert(algorithm.short_name().to_string(), algorithm);
            names.insert(name, algorithm);
        }
        names
    };
}

impl AlgorithmId {
    /// All algorithms in menu order.
    pub const ALL: [AlgorithmId; 6] = [
        AlgorithmId::InsertionSort,
        AlgorithmId::HeapSort,
        AlgorithmId::BubbleSort,
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::RadixSort,
    ];

    /// Human readable name, as displayed in menus.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmId::InsertionSort => "Insertion Sort",
            AlgorithmId::HeapSort => "Heap Sort",
            AlgorithmId::BubbleSort => "Bubble Sort",
            AlgorithmId::MergeSort => "Merge Sort",
            AlgorithmId::QuickSort => "Quick Sort",
            AlgorithmId::RadixSort => "Radix Sort",
        }
    }

    /// Short lower case name, convenient on a command line.
    pub fn short_name(self) -> &'static str {
        match self {
            AlgorithmId::InsertionSort => "insertion",
            AlgorithmId::HeapSort => "heap",
            AlgorithmId::BubbleSort => "bubble",
            AlgorithmId::MergeSort => "merge",
            AlgorithmId::QuickSort => "quick",
            AlgorithmId::RadixSort => "radix",
        }
    }

    /// Does this algorithm keep equal values in their input order.
    pub fn is_stable(self) -> bool {
        match self {
            AlgorithmId::BubbleSort | AlgorithmId::RadixSort | AlgorithmId::InsertionSort => true,
            _ => false,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmId {
    type Err = SortError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAMES
            .get(s.trim().to_lowercase().as_str())
            .cloned()
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_spelling() {
        for algorithm in AlgorithmId::ALL.iter().cloned() {
            assert_eq!(algorithm.name().parse::<AlgorithmId>().unwrap(), algorithm);
            assert_eq!(
                algorithm.short_name().parse::<AlgorithmId>().unwrap(),
                algorithm
            );
            assert_eq!(
                algorithm.to_string().to_uppercase().parse::<AlgorithmId>().unwrap(),
                algorithm
            );
        }
        assert_eq!(
            "quick_sort".parse::<AlgorithmId>().unwrap(),
            AlgorithmId::QuickSort
        );
        assert_eq!(
            " MergeSort ".parse::<AlgorithmId>().unwrap(),
            AlgorithmId::MergeSort
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        match "bogo".parse::<AlgorithmId>() {
            Err(SortError::UnknownAlgorithm(name)) => assert_eq!(name, "bogo"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
