use crate::common_types::Value;
use crate::error::Interrupted;
use crate::pause::Pacer;

/// Lomuto partition of `data[low..high]` around its last element.
/// Returns the final pivot position.
fn partition(data: &mut [Value], low: usize, high: usize) -> usize {
    let last = high - 1;
    let pivot = data[last];
    let mut i = low;
    for j in low..last {
        if data[j] <= pivot {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, last);
    i
}

/// Sort `data[low..high]`. Not randomized: sorted input recurses `n` deep.
fn sort_range(
    data: &mut [Value],
    low: usize,
    high: usize,
    pacer: &mut Pacer,
) -> Result<(), Interrupted> {
    if high - low < 2 {
        return Ok(());
    }
    let p = partition(data, low, high);
    sort_range(data, low, p, pacer)?;
    sort_range(data, p + 1, high, pacer)?;
    pacer.tick(data)
}

/// Recursive quicksort, one tick per partitioned range.
pub(super) fn quick_sort(data: &mut [Value], pacer: &mut Pacer) -> Result<(), Interrupted> {
    let len = data.len();
    sort_range(data, 0, len, pacer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_pivot() {
        let mut data = vec![9, 1, 8, 2, 5];
        let p = partition(&mut data, 0, 5);
        assert_eq!(p, 2);
        assert_eq!(data[p], 5);
        assert!(data[..p].iter().all(|&v| v <= 5));
        assert!(data[p + 1..].iter().all(|&v| v > 5));
    }

    #[test]
    fn partition_with_equal_values_goes_left() {
        let mut data = vec![3, 3, 3];
        assert_eq!(partition(&mut data, 0, 3), 2);
    }
}
