//! Concrete animation curves
//!
//! A `Curve` carries the shape parameters of one animation: an easing with a
//! fixed duration, a response-based spring, or a physical interpolating spring.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Easing function of a timing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    EaseIn,
    EaseOut,
    EaseInOut,
    Linear,
}

/// A concrete animation curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    /// Fixed-duration curve with an easing function
    Timing {
        easing: Easing,
        /// Duration in seconds
        duration: f64,
    },
    /// Spring described by its perceptual response
    Spring {
        /// Time for one oscillation period of the undamped spring, in seconds
        response: f64,
        /// 1.0 is critically damped, lower values overshoot
        damping_fraction: f64,
        /// Seconds over which a change of response is blended in
        blend_duration: f64,
    },
    /// Spring described by its physical parameters
    InterpolatingSpring {
        mass: f64,
        stiffness: f64,
        damping: f64,
        initial_velocity: f64,
    },
}

impl Curve {
    pub const fn timing(easing: Easing, duration: f64) -> Self {
        Curve::Timing { easing, duration }
    }

    pub const fn spring(response: f64, damping_fraction: f64, blend_duration: f64) -> Self {
        Curve::Spring {
            response,
            damping_fraction,
            blend_duration,
        }
    }

    pub const fn interpolating_spring(
        mass: f64,
        stiffness: f64,
        damping: f64,
        initial_velocity: f64,
    ) -> Self {
        Curve::InterpolatingSpring {
            mass,
            stiffness,
            damping,
            initial_velocity,
        }
    }

    /// Play this curve `multiplier` times faster.
    ///
    /// A multiplier that is not finite and positive leaves the curve unchanged.
    /// Scaling compresses time: durations divide by the multiplier, and an
    /// interpolating spring keeps its damping ratio while its natural
    /// frequency grows by the multiplier.
    pub fn speed(self, multiplier: f64) -> Self {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return self;
        }

        match self {
            Curve::Timing { easing, duration } => Curve::Timing {
                easing,
                duration: duration / multiplier,
            },
            Curve::Spring {
                response,
                damping_fraction,
                blend_duration,
            } => Curve::Spring {
                response: response / multiplier,
                damping_fraction,
                blend_duration: blend_duration / multiplier,
            },
            Curve::InterpolatingSpring {
                mass,
                stiffness,
                damping,
                initial_velocity,
            } => Curve::InterpolatingSpring {
                mass,
                stiffness: stiffness * multiplier * multiplier,
                damping: damping * multiplier,
                initial_velocity: initial_velocity * multiplier,
            },
        }
    }

    /// Perceptual duration in seconds, used to drive the host animation engine
    pub fn nominal_duration(&self) -> f64 {
        match *self {
            Curve::Timing { duration, .. } => duration,
            Curve::Spring {
                response,
                blend_duration,
                ..
            } => response + blend_duration,
            Curve::InterpolatingSpring {
                mass, stiffness, ..
            } => {
                if stiffness <= 0.0 || mass <= 0.0 {
                    0.0
                } else {
                    TAU * (mass / stiffness).sqrt()
                }
            }
        }
    }

    /// Damping ratio of spring curves (1.0 = critically damped)
    pub fn damping_ratio(&self) -> Option<f64> {
        match *self {
            Curve::Timing { .. } => None,
            Curve::Spring {
                damping_fraction, ..
            } => Some(damping_fraction),
            Curve::InterpolatingSpring {
                mass,
                stiffness,
                damping,
                ..
            } => {
                let critical = 2.0 * (stiffness * mass).sqrt();
                if critical > 0.0 {
                    Some(damping / critical)
                } else {
                    None
                }
            }
        }
    }

    /// Short human readable description of the shape parameters
    pub fn describe(&self) -> String {
        match *self {
            Curve::Timing { easing, duration } => {
                format!("{:?} over {:.2}s", easing, duration)
            }
            Curve::Spring {
                response,
                damping_fraction,
                blend_duration,
            } => format!(
                "Spring: response {:.2}s, damping {:.3}, blend {:.2}s",
                response, damping_fraction, blend_duration
            ),
            Curve::InterpolatingSpring {
                mass,
                stiffness,
                damping,
                initial_velocity,
            } => format!(
                "Spring: mass {}, stiffness {}, damping {}, velocity {}",
                mass, stiffness, damping, initial_velocity
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_scales_timing_duration() {
        let curve = Curve::timing(Easing::Linear, 0.35).speed(2.0);
        assert_eq!(curve, Curve::timing(Easing::Linear, 0.175));
    }

    #[test]
    fn test_speed_keeps_spring_damping() {
        let curve = Curve::spring(0.5, 0.7, 0.0).speed(0.5);
        assert_eq!(curve, Curve::spring(1.0, 0.7, 0.0));
    }

    #[test]
    fn test_speed_preserves_interpolating_damping_ratio() {
        let base = Curve::interpolating_spring(1.0, 170.0, 15.0, 0.0);
        let faster = base.speed(3.0);

        let before = base.damping_ratio().unwrap();
        let after = faster.damping_ratio().unwrap();
        assert!((before - after).abs() < 1e-9);
        assert!((faster.nominal_duration() * 3.0 - base.nominal_duration()).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_multiplier_is_ignored() {
        let curve = Curve::spring(0.55, 1.0, 0.0);
        assert_eq!(curve.speed(0.0), curve);
        assert_eq!(curve.speed(-1.0), curve);
        assert_eq!(curve.speed(f64::NAN), curve);
        assert_eq!(curve.speed(f64::INFINITY), curve);
    }

    #[test]
    fn test_nominal_duration() {
        assert_eq!(Curve::timing(Easing::EaseIn, 0.35).nominal_duration(), 0.35);
        assert!((Curve::spring(0.15, 0.86, 0.25).nominal_duration() - 0.4).abs() < 1e-12);
    }
}
