use super::marker::Marker;

/// Piecewise-linear evaluation of sorted stops at `x`.
///
/// Without stops the channel's [`Marker::empty_value`] is returned. Outside
/// the covered range the nearest end stop holds its value; a NaN `x`
/// evaluates like a position before the first stop.
///
/// Finite stops always yield a bracket, even out of order. A NaN stop
/// position (written through `*_marker_mut`) trips the bracket check in
/// debug builds.
pub(crate) fn sample<T: Marker>(markers: &[T], x: f32) -> T::Value {
    let (Some(first), Some(last)) = (markers.first(), markers.last()) else {
        return T::empty_value();
    };

    if x.is_nan() || x < first.position() {
        return first.value();
    }
    if last.position() <= x {
        return last.value();
    }

    // first.position() <= x < last.position(), so at least two stops exist and
    // the lower bound is 0 only when the first stop sits exactly at x. The
    // clamps only matter when ordering was broken upstream.
    let mut lo = markers.partition_point(|m| m.position() < x).min(markers.len() - 1);
    if markers[lo].position() != x {
        lo = lo.saturating_sub(1);
    }
    let lo = lo.min(markers.len() - 2);
    let (a, b) = (&markers[lo], &markers[lo + 1]);

    debug_assert!(
        a.position() <= x && x <= b.position(),
        "stops out of order: x = {x} not within [{}, {}] at index {lo}",
        a.position(),
        b.position(),
    );

    let width = b.position() - a.position();
    if width <= 0.0 {
        return a.value();
    }

    let t = (x - a.position()) / width;
    T::lerp(a.value(), b.value(), t)
}
