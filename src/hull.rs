use std::ops::Range;
use std::sync::OnceLock;

use glam::DVec2;
use thiserror::Error;

use crate::geometry::{farthest_point, DirectedLine};

/// An error returned when a convex hull cannot be computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvexHull2dError {
    /// The input point set is empty, so the extreme points that anchor the
    /// hull construction do not exist.
    #[error("the input point set is empty")]
    EmptyInput,
}

/// A 2D [convex hull] computed with the Quickhull algorithm,
/// keeping the input point set alongside the result.
///
/// The hull is computed lazily on the first call to
/// [`hull_points`](Self::hull_points) and cached for the lifetime of the
/// value. The input is fixed at construction; there is no mutation API, so
/// the cache never needs invalidation.
///
/// Point comparisons use exact coordinate equality throughout, faithful to
/// the indicator arithmetic: collinear points produce an indicator of
/// exactly zero and are dropped as non-extremal, and no tolerance is applied
/// to near-zero indicators arising from round-off.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use glam::DVec2;
/// use quickhull2d::ConvexHull2d;
///
/// let points = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(4.0, 0.0),
///     DVec2::new(4.0, 4.0),
///     DVec2::new(0.0, 4.0),
///     DVec2::new(2.0, 2.0),
/// ];
///
/// let hull = ConvexHull2d::try_from_points(&points).unwrap();
///
/// // The hull points trace the boundary clockwise. The interior
/// // point (2, 2) is excluded.
/// assert_eq!(
///     hull.hull_points(),
///     &[
///         DVec2::new(0.0, 4.0),
///         DVec2::new(4.0, 4.0),
///         DVec2::new(4.0, 0.0),
///         DVec2::new(0.0, 0.0),
///     ],
/// );
///
/// // The original input is kept, unchanged, for downstream consumers.
/// assert_eq!(hull.input_points(), &points[..]);
/// ```
#[derive(Clone, Debug)]
pub struct ConvexHull2d {
    input_points: Vec<DVec2>,
    hull_points: OnceLock<Vec<DVec2>>,
}

impl ConvexHull2d {
    /// Creates a [`ConvexHull2d`] for the given set of points.
    ///
    /// The points are stored as-is; the hull itself is not computed until
    /// [`hull_points`](Self::hull_points) is first called.
    ///
    /// # Errors
    ///
    /// Returns [`ConvexHull2dError::EmptyInput`] if `points` is empty.
    pub fn try_from_points(points: &[DVec2]) -> Result<Self, ConvexHull2dError> {
        if points.is_empty() {
            return Err(ConvexHull2dError::EmptyInput);
        }

        Ok(Self {
            input_points: points.to_vec(),
            hull_points: OnceLock::new(),
        })
    }

    /// Returns the points of the convex hull in clockwise order.
    ///
    /// The first call computes the hull and caches it; subsequent calls
    /// return the cached sequence.
    pub fn hull_points(&self) -> &[DVec2] {
        self.hull_points.get_or_init(|| {
            // The input was validated as non-empty at construction.
            convex_hull(&self.input_points).expect("input point set is non-empty")
        })
    }

    /// Returns the original input points, unchanged.
    #[inline]
    pub fn input_points(&self) -> &[DVec2] {
        &self.input_points
    }
}

/// Computes the convex hull of `points` in clockwise order.
///
/// The extreme points with the smallest and largest `x` coordinate are both
/// hull vertices; the hull is assembled from two symmetric Quickhull runs,
/// one for each side of the line through them. Ties for the extremes are
/// broken by the first occurrence in input order. A degenerate point set
/// whose extremes coincide (a single point, or every point sharing one `x`
/// coordinate) produces a single-point hull.
///
/// # Errors
///
/// Returns [`ConvexHull2dError::EmptyInput`] if `points` is empty.
///
/// # Example
///
/// ```
/// use glam::DVec2;
/// use quickhull2d::convex_hull;
///
/// let points = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(4.0, 0.0),
///     DVec2::new(0.0, 4.0),
/// ];
/// let hull = convex_hull(&points).unwrap();
/// assert_eq!(hull.len(), 3);
/// ```
pub fn convex_hull(points: &[DVec2]) -> Result<Vec<DVec2>, ConvexHull2dError> {
    let (min_x, max_x) = extreme_x_points(points)?;
    if min_x == max_x {
        return Ok(vec![min_x]);
    }

    let mut hull = Vec::new();
    half_hull(points, min_x, max_x, &mut hull);
    half_hull(points, max_x, min_x, &mut hull);
    Ok(hull)
}

/// Computes the convex hull of `points` in clockwise order, using an
/// explicit work stack instead of recursion.
///
/// This produces the exact sequence [`convex_hull`] produces, traversing the
/// subproblems in the same order. Prefer it for very large or adversarial
/// point sets, where the recursion depth of [`convex_hull`] approaches the
/// worst case and could exhaust the call stack.
///
/// # Errors
///
/// Returns [`ConvexHull2dError::EmptyInput`] if `points` is empty.
pub fn convex_hull_iterative(points: &[DVec2]) -> Result<Vec<DVec2>, ConvexHull2dError> {
    let (min_x, max_x) = extreme_x_points(points)?;
    if min_x == max_x {
        return Ok(vec![min_x]);
    }

    // Candidate sets live in a shared arena; each pending segment holds a
    // range into it. Sibling segments share their parent's left set, so
    // ranges may be referenced twice but are only ever read.
    let mut arena = points.to_vec();
    let mut hull = Vec::new();

    // Popping runs the half for the min-to-max line first, matching the
    // recursive traversal order.
    let mut stack: Vec<(Range<usize>, DVec2, DVec2)> = vec![
        (0..arena.len(), max_x, min_x),
        (0..arena.len(), min_x, max_x),
    ];

    while let Some((candidates, start, end)) = stack.pop() {
        let line = DirectedLine::new(start, end);
        let left = line.left_points(&arena[candidates]);

        let Some(pivot) = farthest_point(&left) else {
            // No point outside the segment: it is a hull edge.
            hull.push(end);
            continue;
        };

        let left_start = arena.len();
        arena.extend(left.into_iter().map(|(point, _)| point));
        let left_range = left_start..arena.len();

        // Push the far side first so the near side is popped first.
        stack.push((left_range.clone(), pivot, end));
        stack.push((left_range, start, pivot));
    }

    Ok(hull)
}

/// Appends the hull points strictly left of the line from `start` to `end`,
/// followed by `end` itself, to `hull`.
///
/// This is the Quickhull recursion. The point with the largest distance
/// indicator is a hull vertex; it splits the segment in two, and everything
/// inside the triangle it forms with `start` and `end` fails the left-of
/// test for both child segments and drops out. When no point is left of the
/// line, the segment is a hull edge and contributes its far endpoint, so
/// the completed hull is assembled as a chain of endpoints with no
/// duplicates.
fn half_hull(points: &[DVec2], start: DVec2, end: DVec2, hull: &mut Vec<DVec2>) {
    let line = DirectedLine::new(start, end);
    let left = line.left_points(points);

    let Some(pivot) = farthest_point(&left) else {
        hull.push(end);
        return;
    };

    let candidates: Vec<DVec2> = left.into_iter().map(|(point, _)| point).collect();
    half_hull(&candidates, start, pivot, hull);
    half_hull(&candidates, pivot, end, hull);
}

/// Finds the points with the smallest and largest `x` coordinate.
///
/// Ties are broken by the first occurrence in input order.
fn extreme_x_points(points: &[DVec2]) -> Result<(DVec2, DVec2), ConvexHull2dError> {
    let (&first, rest) = points.split_first().ok_or(ConvexHull2dError::EmptyInput)?;

    let mut min_x = first;
    let mut max_x = first;
    for &point in rest {
        if point.x < min_x.x {
            min_x = point;
        }
        if point.x > max_x.x {
            max_x = point;
        }
    }

    Ok((min_x, max_x))
}
