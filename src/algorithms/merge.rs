use crate::common_types::Value;
use crate::error::Interrupted;
use crate::pause::Pacer;

/// Merge the sorted runs `data[begin..middle]` and `data[middle..end]`
/// into `work[begin..end]`.
fn merge(data: &[Value], begin: usize, middle: usize, end: usize, work: &mut [Value]) {
    let (mut i, mut j) = (begin, middle);
    for slot in &mut work[begin..end] {
        if i < middle && (j >= end || data[i] <= data[j]) {
            *slot = data[i];
            i += 1;
        } else {
            *slot = data[j];
            j += 1;
        }
    }
}

/// Sort `data[begin..end]`, recursion depth is logarithmic.
fn split(
    data: &mut [Value],
    begin: usize,
    end: usize,
    work: &mut [Value],
    pacer: &mut Pacer,
) -> Result<(), Interrupted> {
    if end - begin < 2 {
        return Ok(());
    }
    let middle = (begin + end) / 2;
    split(data, begin, middle, work, pacer)?;
    split(data, middle, end, work, pacer)?;
    merge(data, begin, middle, end, work);
    data[begin..end].copy_from_slice(&work[begin..end]);
    pacer.tick(data)
}

/// Top down merge sort sharing a single auxiliary buffer across the whole
/// recursion tree. One tick per merge.
pub(super) fn merge_sort(data: &mut [Value], pacer: &mut Pacer) -> Result<(), Interrupted> {
    let mut work = vec![0; data.len()];
    let len = data.len();
    split(data, 0, len, &mut work, pacer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_two_runs() {
        let data = vec![1, 4, 9, 2, 3, 10];
        let mut work = vec![0; 6];
        merge(&data, 0, 3, 6, &mut work);
        assert_eq!(work, vec![1, 2, 3, 4, 9, 10]);
    }

    #[test]
    fn merges_only_the_given_range() {
        let data = vec![8, 7, 5, 6, 1, 0];
        let mut work = vec![0; 6];
        merge(&data, 2, 3, 4, &mut work);
        assert_eq!(work, vec![0, 0, 5, 6, 0, 0]);
    }
}
