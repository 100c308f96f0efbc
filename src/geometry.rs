use glam::DVec2;

/// A line through `start` and `end`, directed from `start` towards `end`.
///
/// The direction gives the line an orientation: walking from `start` to
/// `end`, a point is either strictly to the left, on the line, or strictly
/// to the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DirectedLine {
    pub start: DVec2,
    pub end: DVec2,
}

impl DirectedLine {
    #[inline]
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Computes a distance indicator for `point` relative to this line.
    ///
    /// The indicator is twice the signed area of the triangle
    /// (`start`, `end`, `point`): positive if `point` is strictly left of
    /// the line, zero if collinear, negative if strictly right. The
    /// magnitude is proportional to the perpendicular distance, which makes
    /// it sufficient for ranking points by distance, but it is not a metric
    /// distance itself.
    ///
    /// If `start` and `end` coincide, the indicator is zero for every point.
    #[inline]
    pub fn distance_indicator(&self, point: DVec2) -> f64 {
        let line = self.end - self.start;
        let offset = point - self.start;
        line.perp_dot(offset)
    }

    /// Returns the points strictly left of this line, each paired with its
    /// distance indicator.
    ///
    /// Points with an indicator of zero or below are dropped, including the
    /// line's own endpoints and any point collinear with them.
    pub fn left_points(&self, points: &[DVec2]) -> Vec<(DVec2, f64)> {
        points
            .iter()
            .filter_map(|&point| {
                let indicator = self.distance_indicator(point);
                (indicator > 0.0).then_some((point, indicator))
            })
            .collect()
    }
}

/// Returns the point with the strictly largest distance indicator,
/// or `None` if `pairs` is empty.
///
/// Ties are broken by the first occurrence in input order.
pub(crate) fn farthest_point(pairs: &[(DVec2, f64)]) -> Option<DVec2> {
    pairs
        .iter()
        .copied()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(point, _)| point)
}
