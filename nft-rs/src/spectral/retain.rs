/// Order-preserving in-place compaction shared by every filter.
///
/// Walks `values` front to back, asks `keep` about each element and packs the
/// survivors into the leading entries. `keep` also sees the survivors packed
/// so far. The companion, when present, receives exactly the same moves, so
/// index `i` of both buffers refers to the same element before and after.
///
/// Returns the number of survivors. Entries past that count are unspecified.
pub(crate) fn retain_in_place<T, C, P>(
    values: &mut [T],
    mut companion: Option<&mut [C]>,
    mut keep: P,
) -> usize
where
    T: Copy,
    C: Copy,
    P: FnMut(&[T], &T) -> bool,
{
    debug_assert!(companion.as_ref().is_none_or(|c| c.len() == values.len()));

    let mut kept = 0;
    for i in 0..values.len() {
        let candidate = values[i];
        if !keep(&values[..kept], &candidate) {
            continue;
        }
        values[kept] = candidate;
        if let Some(c) = companion.as_deref_mut() {
            c[kept] = c[i];
        }
        kept += 1;
    }
    kept
}
