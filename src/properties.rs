//! Section Property Extractor: derives the engineering record from a
//! composed profile.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::sketch::Sketch;
use log::debug;
use serde::{Deserialize, Serialize};

/// Cross-sectional properties of a profile, all about centroidal axes.
///
/// The lever arms cross axes on purpose: bending about x is limited by the
/// extreme fiber along y and vice versa, so `levier_x` comes from the Y
/// extent of the bounding box and `levier_y` from the X extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Area of the region (mass under unit density).
    pub area: Real,
    /// Centroidal second moment about the x axis, `∫y² dA`.
    pub ixx: Real,
    /// Centroidal second moment about the y axis, `∫x² dA`.
    pub iyy: Real,
    /// Centre of mass after re-centering; all components ≈ 0.
    pub com: [Real; 3],
    pub bb_x_min: Real,
    pub bb_x_max: Real,
    pub bb_y_min: Real,
    pub bb_y_max: Real,
    /// `max(|bb_y_min|, |bb_y_max|)`
    pub levier_x: Real,
    /// `max(|bb_x_min|, |bb_x_max|)`
    pub levier_y: Real,
    /// Section modulus about x, `ixx / levier_x`.
    pub sx: Real,
    /// Section modulus about y, `iyy / levier_y`.
    pub sy: Real,
}

/// Everything a caller gets back: the property record plus the
/// centroid-centered shape, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionResult {
    pub shape: Sketch,
    pub properties: SectionProperties,
}

/// Computes the section properties of `shape` and returns them together
/// with the shape translated so its centroid sits on the origin.
///
/// Surface properties are integrated twice, as the original pipeline did:
/// once about the world origin to locate the centroid, then again on the
/// re-centered shape to obtain the centroidal inertia tensor.
pub fn extract_properties(shape: Sketch) -> Result<SectionResult, GeometryError> {
    let first = shape.mass_properties().ok_or_else(|| {
        GeometryError::DegenerateSection {
            reason: "region encloses no area".into(),
        }
    })?;

    let centered = shape.translate(-first.centroid.x, -first.centroid.y);
    let props = centered.mass_properties().ok_or_else(|| {
        GeometryError::DegenerateSection {
            reason: "region encloses no area".into(),
        }
    })?;

    let bb = centered
        .bounding_box()
        .ok_or_else(|| GeometryError::DegenerateSection {
            reason: "region has no bounding box".into(),
        })?;
    let (bb_x_min, bb_y_min) = (bb.min().x, bb.min().y);
    let (bb_x_max, bb_y_max) = (bb.max().x, bb.max().y);

    let levier_x = bb_y_min.abs().max(bb_y_max.abs());
    let levier_y = bb_x_min.abs().max(bb_x_max.abs());
    if levier_x <= tolerance() {
        return Err(GeometryError::DegenerateSection {
            reason: "zero extent about the x axis".into(),
        });
    }
    if levier_y <= tolerance() {
        return Err(GeometryError::DegenerateSection {
            reason: "zero extent about the y axis".into(),
        });
    }

    let properties = SectionProperties {
        area: props.area,
        ixx: props.ixx,
        iyy: props.iyy,
        com: [props.centroid.x, props.centroid.y, props.centroid.z],
        bb_x_min,
        bb_x_max,
        bb_y_min,
        bb_y_max,
        levier_x,
        levier_y,
        sx: props.ixx / levier_x,
        sy: props.iyy / levier_y,
    };
    debug!(
        "extracted section properties: area = {}, ixx = {}, iyy = {}",
        properties.area, properties.ixx, properties.iyy
    );

    Ok(SectionResult {
        shape: centered,
        properties,
    })
}
