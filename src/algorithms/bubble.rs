use crate::common_types::Value;
use crate::error::Interrupted;
use crate::pause::Pacer;

/// Let the largest remaining value float to the end, `n - 1` times.
/// Only strictly smaller values move left so equal values keep their order.
pub(super) fn bubble_sort(data: &mut [Value], pacer: &mut Pacer) -> Result<(), Interrupted> {
    let len = data.len();
    for pass in 1..len {
        for i in 1..=len - pass {
            if data[i] < data[i - 1] {
                data.swap(i, i - 1);
            }
        }
        pacer.tick(data)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::paused;
    use crate::common_types::AlgorithmId;

    #[test]
    fn each_pass_fixes_the_largest_remaining() {
        let input = vec![4, 3, 2, 1, 0, 9, 8, 7, 6, 5];
        let (output, pauses) = paused(AlgorithmId::BubbleSort, &input, 20);
        assert_eq!(pauses.len(), 9);
        assert_eq!(pauses[0][9], 9);
        assert_eq!(&pauses[1][8..], &[8, 9]);
        assert_eq!(output, (0..10).collect::<Vec<u32>>());
    }
}
