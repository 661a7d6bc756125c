//! Input contract for a section computation.

use crate::errors::GeometryError;
use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// Parameter set describing one drum ("fût") cross-section profile.
///
/// All lengths share one linear unit; results come back in that unit
/// squared (area) and to the fourth power (second moments).
///
/// `t1` is the canonical name for the radial gap between the ring outer
/// surface and the inner edge of a reinforcement panel: before rotation a
/// panel starts at `y = -d/2 - t1` and extends outward by `t5`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FutParams {
    /// Outer diameter of the ring.
    pub d: Real,
    /// Wall thickness; the inner diameter is `d - 2t`.
    pub t: Real,
    /// Radial gap between the ring and the panel placement.
    pub t1: Real,
    /// Opening width along the tangential direction.
    pub t3: Real,
    /// Panel width.
    pub t4: Real,
    /// Panel length (radial extent).
    pub t5: Real,
    /// Number of evenly spaced openings / panel pairs. Zero yields a
    /// plain annulus with no cuts and no panels.
    pub nb_openings: u32,
    /// Global rotation applied to the finished profile, in degrees.
    pub theta_deg: Real,
}

impl FutParams {
    /// Inner diameter derived from the outer diameter and wall thickness.
    pub fn inner_diameter(&self) -> Real {
        self.d - 2.0 * self.t
    }

    /// Checks that the parameter set can produce valid geometry.
    ///
    /// A zero-thickness wall (`d == di`) is rejected here rather than
    /// surfacing later as a silent zero-area result. The opening and panel
    /// dimensions are only constrained when `nb_openings > 0`; with zero
    /// openings they are never used.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.d.is_finite() || self.d <= 0.0 {
            return Err(GeometryError::Construction {
                shape: "annulus",
                reason: format!("outer diameter must be positive and finite, got {}", self.d),
            });
        }
        if !self.t.is_finite() || self.t <= 0.0 || self.t >= self.d / 2.0 {
            return Err(GeometryError::Construction {
                shape: "annulus",
                reason: format!(
                    "wall thickness must satisfy 0 < t < D/2, got t = {} for D = {}",
                    self.t, self.d
                ),
            });
        }
        if !self.t1.is_finite() {
            return Err(GeometryError::Construction {
                shape: "panel",
                reason: format!("radial gap t1 must be finite, got {}", self.t1),
            });
        }
        if !self.theta_deg.is_finite() {
            return Err(GeometryError::Construction {
                shape: "profile",
                reason: format!("rotation angle must be finite, got {}", self.theta_deg),
            });
        }
        if self.nb_openings > 0 {
            for (name, value) in [("t3", self.t3), ("t4", self.t4), ("t5", self.t5)] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(GeometryError::Construction {
                        shape: "rectangle",
                        reason: format!("{name} must be positive and finite, got {value}"),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> FutParams {
        FutParams {
            d: 700.0,
            t: 10.0,
            t1: 100.0,
            t3: 200.0,
            t4: 10.0,
            t5: 200.0,
            nb_openings: 3,
            theta_deg: 0.0,
        }
    }

    #[test]
    fn accepts_valid_params() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_zero_thickness_wall() {
        let params = FutParams { t: 0.0, ..valid() };
        assert!(matches!(
            params.validate(),
            Err(GeometryError::Construction { shape: "annulus", .. })
        ));
    }

    #[test]
    fn rejects_wall_meeting_center() {
        let params = FutParams { t: 350.0, ..valid() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_nonpositive_diameter() {
        assert!(FutParams { d: 0.0, ..valid() }.validate().is_err());
        assert!(FutParams { d: -5.0, ..valid() }.validate().is_err());
    }

    #[test]
    fn opening_dims_unchecked_when_no_openings() {
        let params = FutParams {
            nb_openings: 0,
            t3: 0.0,
            t4: -1.0,
            t5: 0.0,
            ..valid()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn opening_dims_checked_when_openings_present() {
        let params = FutParams { t4: 0.0, ..valid() };
        assert!(matches!(
            params.validate(),
            Err(GeometryError::Construction { shape: "rectangle", .. })
        ));
    }

    #[test]
    fn inner_diameter_derivation() {
        assert_eq!(valid().inner_diameter(), 680.0);
    }
}
