use crate::common_types::Value;
use crate::error::Interrupted;
use crate::pause::Pacer;
use std::ops::Range;

const RADIX: usize = 10;

/// ones, tens, hundreds
const DIGITS: [Value; 3] = [1, 10, 100];

/// Values the radix sort orders correctly. Anything above is only ordered on
/// its three lowest decimal digits.
pub(crate) const RADIX_DOMAIN: Range<Value> = 0..1000;

fn bucket(value: Value, digit: Value) -> usize {
    (value / digit) as usize % RADIX
}

/// Stable counting sort of `data` on `digit` into `sorted`.
fn counting_pass(data: &[Value], digit: Value, sorted: &mut [Value]) {
    let mut counts = [0usize; RADIX];
    for &value in data {
        counts[bucket(value, digit)] += 1;
    }
    for i in 1..RADIX {
        counts[i] += counts[i - 1];
    }
    // walking backwards keeps equal digits in input order
    for &value in data.iter().rev() {
        let b = bucket(value, digit);
        counts[b] -= 1;
        sorted[counts[b]] = value;
    }
}

/// LSD radix sort, exactly three decimal passes. One pause per pass.
pub(super) fn radix_sort(data: &mut [Value], pacer: &mut Pacer) -> Result<(), Interrupted> {
    let mut sorted = vec![0; data.len()];
    for &digit in &DIGITS {
        counting_pass(data, digit, &mut sorted);
        data.copy_from_slice(&sorted);
        pacer.pause(data)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::{paused, sorted};
    use super::*;
    use crate::common_types::AlgorithmId;

    #[test]
    fn textbook_example() {
        let input = vec![170, 45, 75, 90, 802, 24, 2, 66];
        let (output, pauses) = paused(AlgorithmId::RadixSort, &input, 20);
        assert_eq!(output, vec![2, 24, 45, 66, 75, 90, 170, 802]);
        assert_eq!(pauses.len(), 3);
        // after the ones pass
        assert_eq!(pauses[0], vec![170, 90, 802, 2, 24, 45, 75, 66]);
    }

    #[test]
    fn out_of_domain_values_only_sort_on_low_digits() {
        assert!(!RADIX_DOMAIN.contains(&1000));
        // 1005 looks like 5 to three decimal passes
        assert_eq!(sorted(AlgorithmId::RadixSort, &[7, 1005]), vec![1005, 7]);
    }

    #[test]
    fn counting_pass_is_stable() {
        let mut out = vec![0; 4];
        counting_pass(&[21, 11, 31, 2], 1, &mut out);
        assert_eq!(out, vec![21, 11, 31, 2]);
    }
}
