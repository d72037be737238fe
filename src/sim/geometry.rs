//! Hitbox geometry
//!
//! Fighters collide as triangles. Both functions here are pure and total over
//! finite inputs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A point in world space (pixels, +Y down)
pub type Point = Vec2;

/// Three world-space points forming a fighter's hitbox
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }
}

/// Position of `point` after rotating its frame by `rotation` radians about `pivot`
#[inline]
pub fn rotate_point_around_pivot(point: Point, pivot: Point, rotation: f32) -> Point {
    let (sin, cos) = rotation.sin_cos();
    let d = point - pivot;

    Vec2::new(
        pivot.x + d.x * cos - d.y * sin,
        pivot.y + d.x * sin + d.y * cos,
    )
}

/// Check whether two triangles overlap
///
/// Touching edges count as separated.
pub fn triangles_intersect(t0: &Triangle, t1: &Triangle) -> bool {
    !(all_outside_one_edge(t0, t1) || all_outside_one_edge(t1, t0))
}

/// True when every vertex of `points` lies beyond a single edge line of `triangle`
///
/// Works in barycentric coordinates relative to `triangle.c`: `s` and `t` are
/// the (unnormalized) weights of `a` and `b`, `d` is the shared denominator.
/// The three tests are the lines `b-c` (s = 0), `c-a` (t = 0) and `a-b`
/// (s + t = d); the sign of `d` flips with the triangle's winding.
fn all_outside_one_edge(points: &Triangle, triangle: &Triangle) -> bool {
    let (p0, p1, p2) = (triangle.a, triangle.b, triangle.c);

    let dx21 = p2.x - p1.x;
    let dy12 = p1.y - p2.y;
    let d = dy12 * (p0.x - p2.x) + dx21 * (p0.y - p2.y);

    let weights = [points.a, points.b, points.c].map(|p| {
        let dx = p.x - p2.x;
        let dy = p.y - p2.y;
        let s = dy12 * dx + dx21 * dy;
        let t = (p2.y - p0.y) * dx + (p0.x - p2.x) * dy;
        (s, t)
    });

    if d < 0.0 {
        weights.iter().all(|&(s, _)| s >= 0.0)
            || weights.iter().all(|&(_, t)| t >= 0.0)
            || weights.iter().all(|&(s, t)| s + t <= d)
    } else {
        weights.iter().all(|&(s, _)| s <= 0.0)
            || weights.iter().all(|&(_, t)| t <= 0.0)
            || weights.iter().all(|&(s, t)| s + t >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    impl Triangle {
        fn translated(&self, offset: Vec2) -> Self {
            Self::new(self.a + offset, self.b + offset, self.c + offset)
        }

        /// Twice the signed area (positive when a, b, c wind clockwise on screen)
        fn doubled_area(&self) -> f32 {
            (self.b - self.a).perp_dot(self.c - self.a)
        }
    }

    fn tri(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Triangle {
        Triangle::new(Vec2::new(a.0, a.1), Vec2::new(b.0, b.1), Vec2::new(c.0, c.1))
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let pivot = Vec2::new(10.0, 10.0);
        let point = Vec2::new(20.0, 10.0);

        let rotated = rotate_point_around_pivot(point, pivot, FRAC_PI_2);
        assert!((rotated - Vec2::new(10.0, 20.0)).length() < 1e-4);

        let rotated = rotate_point_around_pivot(point, pivot, PI);
        assert!((rotated - Vec2::new(0.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_overlapping_triangles() {
        let t0 = tri((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        let t1 = tri((2.0, 2.0), (12.0, 2.0), (2.0, 12.0));
        assert!(triangles_intersect(&t0, &t1));
        assert!(triangles_intersect(&t1, &t0));
    }

    #[test]
    fn test_contained_triangle() {
        let outer = tri((0.0, 0.0), (100.0, 0.0), (0.0, 100.0));
        let inner = tri((10.0, 10.0), (20.0, 10.0), (10.0, 20.0));
        assert!(triangles_intersect(&outer, &inner));
        assert!(triangles_intersect(&inner, &outer));
    }

    #[test]
    fn test_separated_triangles() {
        let t0 = tri((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        // Just past the hypotenuse x + y = 10
        let t1 = tri((6.0, 6.0), (16.0, 6.0), (6.0, 16.0));
        assert!(!triangles_intersect(&t0, &t1));
    }

    #[test]
    fn test_winding_does_not_matter() {
        let cw = tri((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        let ccw = tri((0.0, 0.0), (0.0, 10.0), (10.0, 0.0));
        let other = tri((3.0, 3.0), (8.0, 3.0), (3.0, 8.0));
        assert!(cw.doubled_area() * ccw.doubled_area() < 0.0);
        assert_eq!(triangles_intersect(&cw, &other), triangles_intersect(&ccw, &other));
        assert!(triangles_intersect(&ccw, &other));
    }

    #[test]
    fn test_sliding_apart_crosses_boundary_once() {
        let t0 = tri((0.0, 0.0), (20.0, 0.0), (10.0, 20.0));
        let mut last = true;
        let mut crossings = 0;
        for step in 0..100 {
            let t1 = t0.translated(Vec2::new(step as f32 * 0.5, 3.0));
            let hit = triangles_intersect(&t0, &t1);
            if hit != last {
                crossings += 1;
                last = hit;
            }
        }
        // Overlapping at step 0, separated at the end, one transition between
        assert_eq!(crossings, 1);
        assert!(!last);
    }

    fn finite_triangle() -> impl Strategy<Value = Triangle> {
        let coord = -100.0f32..100.0;
        (
            coord.clone(),
            coord.clone(),
            coord.clone(),
            coord.clone(),
            coord.clone(),
            coord,
        )
            .prop_map(|(ax, ay, bx, by, cx, cy)| tri((ax, ay), (bx, by), (cx, cy)))
    }

    proptest! {
        #[test]
        fn prop_pivot_is_fixed_point(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            rotation in -20.0f32..20.0,
        ) {
            let pivot = Vec2::new(x, y);
            prop_assert_eq!(rotate_point_around_pivot(pivot, pivot, rotation), pivot);
        }

        #[test]
        fn prop_rotation_preserves_distance(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            rotation in -10.0f32..10.0,
        ) {
            let pivot = Vec2::new(3.0, -7.0);
            let point = Vec2::new(x, y);
            let rotated = rotate_point_around_pivot(point, pivot, rotation);
            let before = point.distance(pivot);
            let after = rotated.distance(pivot);
            prop_assert!((before - after).abs() <= 1e-3 * before.max(1.0));
        }

        #[test]
        fn prop_triangle_intersects_itself(t in finite_triangle()) {
            prop_assume!(t.doubled_area().abs() > 1.0);
            prop_assert!(triangles_intersect(&t, &t));
        }

        #[test]
        fn prop_far_translation_separates(
            t0 in finite_triangle(),
            t1 in finite_triangle(),
            angle in 0.0f32..std::f32::consts::TAU,
        ) {
            prop_assume!(t0.doubled_area().abs() > 1.0);
            prop_assume!(t1.doubled_area().abs() > 1.0);
            let far = Vec2::new(angle.cos(), angle.sin()) * 1000.0;
            prop_assert!(!triangles_intersect(&t0, &t1.translated(far)));
            // Back on top of its twin it overlaps again
            prop_assert!(triangles_intersect(&t0, &t0.translated(far).translated(-far)));
        }

        #[test]
        fn prop_intersection_is_symmetric(t0 in finite_triangle(), t1 in finite_triangle()) {
            prop_assert_eq!(triangles_intersect(&t0, &t1), triangles_intersect(&t1, &t0));
        }
    }
}
