//! Per-axis helpers shared by the torus topology.

/// Wrap `val` onto `[0, len)`.
///
/// Uses Euclidean remainder so negative intermediates (e.g. `0 - 1`)
/// land on `len - 1` rather than a negative index. `len` must be
/// non-zero and at most `i32::MAX`.
pub(crate) fn wrap_axis(val: i32, len: u32) -> i32 {
    val.rem_euclid(len as i32)
}

/// 1D distance along a wrapping axis: the shorter way round.
pub(crate) fn axis_distance(a: i32, b: i32, len: u32) -> u32 {
    let a = wrap_axis(a, len);
    let b = wrap_axis(b, len);
    let diff = (a - b).unsigned_abs();
    diff.min(len - diff)
}

/// Whether `val` lies in `[0, len)`.
pub(crate) fn in_axis(val: i32, len: u32) -> bool {
    val >= 0 && (val as u32) < len
}
