//! Connection curves: one cubic Bézier per directed edge.

use bevy::math::cubic_splines::{CubicBezier, CubicGenerator};
use bevy::prelude::*;

use crate::models::Edge;
use crate::visualization::constants::{base_color, CONNECTION_ALPHA, CONNECTION_SEGMENTS};

/// Shape and color of one rendered edge.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSpec {
    /// Source node position.
    pub start: Vec3,
    /// Control point above/below the source at the vertical midpoint.
    pub control_a: Vec3,
    /// Control point above/below the target at the vertical midpoint.
    pub control_b: Vec3,
    /// Target node position.
    pub end: Vec3,
    /// Source category's base color at curve opacity.
    pub color: Color,
}

impl CurveSpec {
    /// Derive the curve for an edge. Only the endpoints feed the shape.
    pub fn from_edge(edge: &Edge) -> Self {
        let start = Vec3::from_array(edge.source.position);
        let end = Vec3::from_array(edge.target.position);
        let color = base_color(edge.source.category).with_alpha(CONNECTION_ALPHA);
        Self::between(start, end, color)
    }

    /// Curve from `start` to `end` bending through the vertical midpoint.
    pub fn between(start: Vec3, end: Vec3, color: Color) -> Self {
        let mid_y = (start.y + end.y) / 2.0;
        Self {
            start,
            control_a: Vec3::new(start.x, mid_y, start.z),
            control_b: Vec3::new(end.x, mid_y, end.z),
            end,
            color,
        }
    }

    /// Evenly spaced (in parameter) points from `start` to `end`, inclusive.
    pub fn sample(&self, segments: usize) -> Vec<Vec3> {
        let bezier = CubicBezier::new([[self.start, self.control_a, self.control_b, self.end]]);
        match bezier.to_curve() {
            Ok(curve) => curve.iter_positions(segments).collect(),
            Err(_) => vec![self.start, self.end],
        }
    }

    /// Points used for the rendered line strip.
    pub fn polyline(&self) -> Vec<Vec3> {
        self.sample(CONNECTION_SEGMENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{authored, Category};
    use crate::visualization::constants::COLOR_TRUNK;

    #[test]
    fn test_control_points_sit_at_mid_height() {
        let spec = CurveSpec::between(
            Vec3::new(-4.0, -3.0, 2.0),
            Vec3::new(0.0, 0.0, 0.0),
            Color::WHITE,
        );
        assert_eq!(spec.control_a, Vec3::new(-4.0, -1.5, 2.0));
        assert_eq!(spec.control_b, Vec3::new(0.0, -1.5, 0.0));
    }

    #[test]
    fn test_sample_hits_endpoints() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let end = Vec3::new(-2.0, 6.0, 0.5);
        let points = CurveSpec::between(start, end, Color::WHITE).sample(16);
        assert_eq!(points.len(), 17);
        assert!(points[0].distance(start) < 1e-5);
        assert!(points[16].distance(end) < 1e-5);
    }

    #[test]
    fn test_curve_bends_rather_than_straight() {
        let start = Vec3::new(-3.0, 3.0, 2.0);
        let end = Vec3::new(-5.0, 6.0, 3.0);
        let spec = CurveSpec::between(start, end, Color::WHITE);
        let points = spec.sample(2);
        let straight_mid = (start + end) / 2.0;
        // Symmetric control points keep the midpoint on the chord's midpoint
        assert!(points[1].distance(straight_mid) < 1e-4);
        // ...but a quarter of the way along it leaves the chord
        let quarter = spec.sample(4)[1];
        let chord_quarter = start.lerp(end, 0.25);
        assert!(quarter.distance(chord_quarter) > 1e-3);
    }

    #[test]
    fn test_trunk_edges_use_trunk_base_color() {
        let dataset = authored().unwrap();
        let trunk_curves: Vec<CurveSpec> = dataset
            .edges()
            .iter()
            .filter(|e| e.source.id == "T1")
            .map(CurveSpec::from_edge)
            .collect();
        assert_eq!(trunk_curves.len(), 5);
        for curve in &trunk_curves {
            assert_eq!(curve.color, COLOR_TRUNK.with_alpha(CONNECTION_ALPHA));
            assert_eq!(curve.start, Vec3::ZERO);
        }
    }

    #[test]
    fn test_color_follows_source_category() {
        let dataset = authored().unwrap();
        for edge in dataset.edges() {
            let spec = CurveSpec::from_edge(edge);
            assert_eq!(
                spec.color,
                base_color(edge.source.category).with_alpha(CONNECTION_ALPHA)
            );
        }
        assert!(dataset
            .edges()
            .iter()
            .any(|e| e.source.category == Category::Root));
    }
}
