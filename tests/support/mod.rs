//! Test support library
//! Shared parameter sets and closed-form cross-checks.

use fut_section::FutParams;
use fut_section::float_types::{Real, TAU};

/// Reference parameter set of the original drum model
/// (`D=700, t=10, T1=100, T3=200, T4=10, T5=200`).
pub fn base_params() -> FutParams {
    FutParams {
        d: 700.0,
        t: 10.0,
        t1: 100.0,
        t3: 200.0,
        t4: 10.0,
        t5: 200.0,
        nb_openings: 0,
        theta_deg: 0.0,
    }
}

/// Exact area of the regular n-gon discretizing a circle of radius `r`.
pub fn ngon_area(r: Real, n: usize) -> Real {
    0.5 * n as Real * r * r * (TAU / n as Real).sin()
}

/// Exact centroidal `∫y²dA` (= `∫x²dA`) of the same regular n-gon.
pub fn ngon_second_moment(r: Real, n: usize) -> Real {
    let theta = TAU / n as Real;
    n as Real * r.powi(4) / 24.0 * (2.0 + theta.cos()) * theta.sin()
}
