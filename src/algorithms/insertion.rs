use crate::common_types::Value;
use crate::error::Interrupted;
use crate::pause::Pacer;

/// Shift each element down into the sorted prefix.
/// One tick per outer iteration, before the shift.
pub(super) fn insertion_sort(data: &mut [Value], pacer: &mut Pacer) -> Result<(), Interrupted> {
    for i in 1..data.len() {
        pacer.tick(data)?;
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
    Ok(())
}
