use crate::common_types::Value;
use crate::error::Interrupted;
use crate::pause::Pacer;

/// Repair the max-heap rooted at `root`, `end` being the last heap index.
fn sift_down(heap: &mut [Value], mut root: usize, end: usize) {
    while 2 * root + 1 <= end {
        let child = 2 * root + 1;
        let mut swap = root;
        if heap[swap] < heap[child] {
            swap = child;
        }
        if child + 1 <= end && heap[swap] < heap[child + 1] {
            swap = child + 1;
        }
        if swap == root {
            return;
        }
        heap.swap(root, swap);
        root = swap;
    }
}

/// Turn `heap` into a max-heap, sifting down from the last parent to the root.
fn heapify(heap: &mut [Value]) {
    let end = heap.len() - 1;
    for start in (0..=(end / 2)).rev() {
        sift_down(heap, start, end);
    }
}

/// Heapify then move the root to the end of the shrinking heap.
/// One tick per extraction.
pub(super) fn heap_sort(data: &mut [Value], pacer: &mut Pacer) -> Result<(), Interrupted> {
    if data.len() < 2 {
        return Ok(());
    }
    heapify(data);
    for end in (1..data.len()).rev() {
        pacer.tick(data)?;
        data.swap(0, end);
        sift_down(data, 0, end - 1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heapify_builds_a_max_heap() {
        let mut heap = vec![1, 5, 3, 9, 2, 8, 7, 4];
        heapify(&mut heap);
        for child in 1..heap.len() {
            assert!(heap[(child - 1) / 2] >= heap[child], "{:?}", heap);
        }
        assert_eq!(heap[0], 9);
    }
}
