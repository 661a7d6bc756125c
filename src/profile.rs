//! Profile Composer: builds the drum cross-section as a boolean
//! combination of primitive faces.

use crate::errors::GeometryError;
use crate::float_types::{Real, TAU};
use crate::params::FutParams;
use crate::sketch::Sketch;
use log::debug;
use nalgebra::Point3;

/// Number of edges used to discretize each circle. Keeps the
/// polygon-vs-circle area error around 1e-4 relative while the profile
/// stays cheap to combine.
pub const CIRCLE_SEGMENTS: usize = 256;

/// Builds the composed profile: annulus, minus `nb_openings` radial
/// openings, plus two reinforcement panels per opening, optionally rotated
/// as a whole by `theta_deg`.
///
/// Openings sit at angles `i * 2π / nb_openings` for `i = 1..=nb_openings`,
/// the 1-indexed placement of the original model. With zero openings no
/// cutter or panel is ever constructed.
pub fn compose_profile(params: &FutParams) -> Result<Sketch, GeometryError> {
    params.validate()?;
    debug!("composing profile for {params:?}");

    let outer = Sketch::circle(params.d / 2.0, CIRCLE_SEGMENTS)?;
    let inner = Sketch::circle(params.inner_diameter() / 2.0, CIRCLE_SEGMENTS)?;
    let mut shape = outer.difference(&inner)?;

    if params.nb_openings > 0 {
        // One cutter, re-rotated per opening: a radial slot of width t3
        // reaching from the origin out past the ring.
        let cutter = Sketch::rectangle(params.t3, params.d)?
            .translate(-params.t3 / 2.0, -params.d);
        let panel = Sketch::rectangle(params.t4, params.t5)?;
        let step = TAU / params.nb_openings as Real;

        for i in 1..=params.nb_openings {
            let angle = i as Real * step;
            shape = shape.difference(&cutter.rotate_z(Point3::origin(), angle))?;

            let panel_1 = panel
                .translate(params.t3 / 2.0, -params.d / 2.0 - params.t1)
                .rotate_z(Point3::origin(), angle);
            shape = shape.union(&panel_1)?;

            let panel_2 = panel
                .translate(-(params.t3 / 2.0 + params.t4), -params.d / 2.0 - params.t1)
                .rotate_z(Point3::origin(), angle);
            shape = shape.union(&panel_2)?;
        }
        debug!(
            "cut {} openings and fused {} panels",
            params.nb_openings,
            2 * params.nb_openings
        );
    }

    if params.theta_deg != 0.0 {
        shape = shape.rotate_z(Point3::origin(), params.theta_deg.to_radians());
    }

    Ok(shape)
}
