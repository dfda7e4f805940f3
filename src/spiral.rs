// src/spiral.rs

//! Lazy generator of points along an Archimedean spiral.

use crate::config::SpiralConfig;
use crate::point::ContinuousPoint;

/// Unbounded iterator tracing `r = k * theta` from a starting angle and
/// radius. Each step emits `(cos(angle) * radius, sin(angle) * radius)` and
/// then advances both by their fixed increments.
///
/// The iterator never ends on its own; the consumer decides when to stop.
#[derive(Debug, Clone)]
pub struct Spiral {
    angle: f64,
    radius: f64,
    angle_step: f64,
    radius_step: f64,
}

impl Spiral {
    pub fn new(start_angle: f64, start_radius: f64, angle_step: f64, radius_step: f64) -> Self {
        Self {
            angle: start_angle,
            radius: start_radius,
            angle_step,
            radius_step,
        }
    }

    /// Builds a spiral with the configured steps, starting at the given
    /// angle and radius.
    pub fn starting_at(config: &SpiralConfig, start_angle: f64, start_radius: f64) -> Self {
        Self::new(start_angle, start_radius, config.angle_step, config.radius_step)
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl From<&SpiralConfig> for Spiral {
    fn from(config: &SpiralConfig) -> Self {
        Self::starting_at(config, config.start_angle, config.start_radius)
    }
}

impl Iterator for Spiral {
    type Item = ContinuousPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let point = ContinuousPoint::new(
            self.angle.cos() * self.radius,
            self.angle.sin() * self.radius,
        );
        self.angle += self.angle_step;
        self.radius += self.radius_step;
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test_log::test]
    fn first_point_is_origin_by_default() {
        let mut spiral = Spiral::from(&SpiralConfig::default());
        assert_eq!(spiral.next(), Some(ContinuousPoint::new(0.0, 0.0)));
    }

    #[test_log::test]
    fn steps_advance_angle_and_radius() {
        let mut spiral = Spiral::new(0.0, 0.0, 0.5, 2.0);
        spiral.next();
        let p = spiral.next().unwrap();
        assert!((p.x - 0.5f64.cos() * 2.0).abs() < EPSILON);
        assert!((p.y - 0.5f64.sin() * 2.0).abs() < EPSILON);
        assert!((spiral.angle() - 1.0).abs() < EPSILON);
        assert!((spiral.radius() - 4.0).abs() < EPSILON);
    }

    #[test_log::test]
    fn honours_start_position() {
        let config = SpiralConfig::default();
        let mut spiral = Spiral::starting_at(&config, std::f64::consts::FRAC_PI_2, 3.0);
        let p = spiral.next().unwrap();
        assert!(p.x.abs() < EPSILON);
        assert!((p.y - 3.0).abs() < EPSILON);
    }

    #[test_log::test]
    fn distance_from_origin_grows_monotonically() {
        let radii: Vec<f64> = Spiral::from(&SpiralConfig::default())
            .take(1_000)
            .map(|p| p.x.hypot(p.y))
            .collect();
        assert!(radii.windows(2).all(|w| w[1] > w[0]));
    }
}
