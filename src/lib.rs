//! Cross-section properties of parametric drum ("fût") profiles.
//!
//! The profile is an annular ring with a configurable number of evenly
//! spaced radial openings and reinforcement panels, built as a boolean
//! combination of planar faces on top of [`geo`] and measured by planar
//! mass-property integration: area, centroid, centroidal second moments,
//! bounding box, lever arms and section moduli.
//!
//! The single entry point is [`compute_section`]; callers exchange the
//! [`FutParams`] and [`SectionProperties`] records with it and receive the
//! finished, centroid-centered [`Sketch`] alongside the numbers. The crate
//! is stateless between calls and performs one complete, blocking
//! recomputation per call; serializing rapid parameter changes (e.g.
//! debouncing UI input) is the caller's concern.
//!
//! ```
//! use fut_section::{FutParams, compute_section};
//!
//! let params = FutParams {
//!     d: 700.0,
//!     t: 10.0,
//!     t1: 100.0,
//!     t3: 200.0,
//!     t4: 10.0,
//!     t5: 200.0,
//!     nb_openings: 3,
//!     theta_deg: 0.0,
//! };
//! let result = compute_section(&params).unwrap();
//! assert!(result.properties.area > 0.0);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod params;
pub mod profile;
pub mod properties;
pub mod sketch;

pub use errors::GeometryError;
pub use params::FutParams;
pub use properties::{SectionProperties, SectionResult, extract_properties};
pub use sketch::{MassProperties, Sketch};

/// Runs the full pipeline: compose the profile from `params`, then extract
/// its section properties.
///
/// Fails with [`GeometryError`] on invalid parameters, an invalid boolean
/// result, or a degenerate section; no partial result is returned.
pub fn compute_section(params: &FutParams) -> Result<SectionResult, GeometryError> {
    let shape = profile::compose_profile(params)?;
    extract_properties(shape)
}
