//! Convex hull construction and planar polygon area
//!
//! Pure functions over slices of [`Point`]; they work the same for
//! geographic degrees and projected meters.

use crate::coordinate::Point;

/// Z component of the cross product of `o→a` and `o→b`
///
/// Positive for a counter-clockwise turn, negative for clockwise,
/// zero when the three points are collinear.
pub fn cross(o: &Point, a: &Point, b: &Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Indices of the convex hull vertices, counter-clockwise, ring left open
///
/// Andrew's monotone chain, O(n log n). Duplicate points are collapsed and
/// collinear points on hull edges are dropped. Degenerate inputs return one
/// vertex (all points coincide) or two (all points collinear).
pub fn convex_hull_indices(points: &[Point]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        points[a].x.total_cmp(&points[b].x)
            .then(points[a].y.total_cmp(&points[b].y))
    });
    order.dedup_by(|a, b| points[*a] == points[*b]);

    if order.len() <= 2 {
        return order;
    }

    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while lower.len() >= 2
            && cross(&points[lower[lower.len() - 2]], &points[lower[lower.len() - 1]], &points[i]) <= 0.0
        {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order.iter().rev() {
        while upper.len() >= 2
            && cross(&points[upper[upper.len() - 2]], &points[upper[upper.len() - 1]], &points[i]) <= 0.0
        {
            upper.pop();
        }
        upper.push(i);
    }

    // Last point of each chain is the first of the other
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Append the first vertex to the end of a ring if it is not already closed
pub fn close_ring(mut vertices: Vec<Point>) -> Vec<Point> {
    if let Some(&first) = vertices.first() {
        if vertices.len() == 1 || vertices.last() != Some(&first) {
            vertices.push(first);
        }
    }
    vertices
}

/// Polygon area from the shoelace formula
///
/// Accepts open or closed rings of either winding; the result is always
/// non-negative and zero for fewer than three distinct vertices.
pub fn polygon_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }

    let mut twice_area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        twice_area += ring[i].x * ring[j].y;
        twice_area -= ring[j].x * ring[i].y;
    }
    twice_area.abs() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn convex_hull(points: &[Point]) -> Vec<Point> {
        close_ring(convex_hull_indices(points).into_iter().map(|i| points[i]).collect())
    }

    #[test]
    fn test_square_with_interior_points() {
        let points = pts(&[
            (0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (1.0, 3.0),
            (4.0, 4.0), (0.0, 4.0), (2.0, 2.0),
        ]);
        let ring = convex_hull(&points);

        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[0], Point::new(0.0, 0.0));
        assert_eq!(polygon_area(&ring), 16.0);
    }

    #[test]
    fn test_counter_clockwise_order() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
        let hull = convex_hull_indices(&points);

        assert_eq!(hull, vec![0, 2, 1, 3]);
        for k in 0..hull.len() {
            let a = &points[hull[k]];
            let b = &points[hull[(k + 1) % hull.len()]];
            let c = &points[hull[(k + 2) % hull.len()]];
            assert!(cross(a, b, c) > 0.0);
        }
    }

    #[test]
    fn test_collinear_points_have_zero_area() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let ring = convex_hull(&points);

        assert_eq!(ring, pts(&[(0.0, 0.0), (3.0, 3.0), (0.0, 0.0)]));
        assert_eq!(polygon_area(&ring), 0.0);
    }

    #[test]
    fn test_coincident_points() {
        let points = pts(&[(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)]);
        let ring = convex_hull(&points);

        assert_eq!(ring, pts(&[(5.0, 5.0), (5.0, 5.0)]));
        assert_eq!(polygon_area(&ring), 0.0);
    }

    #[test]
    fn test_duplicates_do_not_change_hull() {
        let base = pts(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]);
        let mut doubled = base.clone();
        doubled.extend(base.iter().copied());

        assert_eq!(convex_hull(&base), convex_hull(&doubled));
        assert_eq!(polygon_area(&convex_hull(&doubled)), 4.5);
    }

    #[test]
    fn test_area_ignores_winding_and_closure() {
        let ccw = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 3.0), (0.0, 3.0)]);
        let mut cw = ccw.clone();
        cw.reverse();

        assert_eq!(polygon_area(&ccw), 6.0);
        assert_eq!(polygon_area(&cw), 6.0);
        assert_eq!(polygon_area(&close_ring(ccw)), 6.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(convex_hull(&[]).is_empty());
        assert_eq!(polygon_area(&[]), 0.0);
    }
}
