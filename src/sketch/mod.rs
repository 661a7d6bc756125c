//! 2D planar regions with boolean combination, rigid transforms and
//! mass-property integration.

pub mod shapes;

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use geo::{BooleanOps, BoundingRect, MapCoords, MultiPolygon, Polygon, LineString, Rect, coord};
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

/// An owned planar region in the z = 0 plane.
///
/// Built by boolean combination of primitive faces, consumed by the
/// section-property extractor and finally handed back to the caller.
/// Dropping it releases everything; nothing is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    geom: MultiPolygon<Real>,
}

/// Surface properties of a [`Sketch`] under unit density: mass equals area.
///
/// The second moments are taken about the world x/y axes through the
/// origin, so they only become centroidal once the shape has been
/// re-centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProperties {
    /// Area of the region (mass under unit density).
    pub area: Real,
    /// Centre of mass; z is always 0.
    pub centroid: Point3<Real>,
    /// Second moment about the x axis, `∫y² dA`.
    pub ixx: Real,
    /// Second moment about the y axis, `∫x² dA`.
    pub iyy: Real,
    /// Product of inertia, `∫xy dA`.
    pub ixy: Real,
}

/// Green's-theorem line integrals accumulated over one closed ring.
#[derive(Debug, Default, Clone, Copy)]
struct RingIntegrals {
    area: Real,
    /// First moment about the x axis, `∫y dA`.
    qx: Real,
    /// First moment about the y axis, `∫x dA`.
    qy: Real,
    ixx: Real,
    iyy: Real,
    ixy: Real,
}

impl RingIntegrals {
    /// Flips signs so the enclosed area is non-negative, making the result
    /// independent of ring winding.
    fn oriented(self) -> Self {
        if self.area < 0.0 {
            Self {
                area: -self.area,
                qx: -self.qx,
                qy: -self.qy,
                ixx: -self.ixx,
                iyy: -self.iyy,
                ixy: -self.ixy,
            }
        } else {
            self
        }
    }

    fn add(&mut self, other: Self) {
        self.area += other.area;
        self.qx += other.qx;
        self.qy += other.qy;
        self.ixx += other.ixx;
        self.iyy += other.iyy;
        self.ixy += other.ixy;
    }

    fn subtract(&mut self, other: Self) {
        self.area -= other.area;
        self.qx -= other.qx;
        self.qy -= other.qy;
        self.ixx -= other.ixx;
        self.iyy -= other.iyy;
        self.ixy -= other.ixy;
    }
}

/// Shoelace-style integration of area, first and second moments over a
/// closed ring. The sign follows the ring winding.
fn ring_integrals(ring: &LineString<Real>) -> RingIntegrals {
    let mut acc = RingIntegrals::default();
    for line in ring.lines() {
        let (x0, y0) = (line.start.x, line.start.y);
        let (x1, y1) = (line.end.x, line.end.y);
        let cross = x0 * y1 - x1 * y0;
        acc.area += cross / 2.0;
        acc.qx += (y0 + y1) * cross / 6.0;
        acc.qy += (x0 + x1) * cross / 6.0;
        acc.ixx += (y0 * y0 + y0 * y1 + y1 * y1) * cross / 12.0;
        acc.iyy += (x0 * x0 + x0 * x1 + x1 * x1) * cross / 12.0;
        acc.ixy += (x0 * y1 + 2.0 * x0 * y0 + 2.0 * x1 * y1 + x1 * y0) * cross / 24.0;
    }
    acc
}

/// Exterior contribution minus every hole, winding-independent.
fn polygon_integrals(polygon: &Polygon<Real>) -> RingIntegrals {
    let mut acc = ring_integrals(polygon.exterior()).oriented();
    for hole in polygon.interiors() {
        acc.subtract(ring_integrals(hole).oriented());
    }
    acc
}

impl Sketch {
    /// An empty region.
    pub fn new() -> Self {
        Self {
            geom: MultiPolygon::new(Vec::new()),
        }
    }

    pub fn from_geo(geom: MultiPolygon<Real>) -> Self {
        Self { geom }
    }

    /// Read-only view of the underlying polygons, e.g. for a tessellation
    /// collaborator.
    pub fn as_multipolygon(&self) -> &MultiPolygon<Real> {
        &self.geom
    }

    pub fn is_empty(&self) -> bool {
        self.geom.0.is_empty()
    }

    fn all_coords_finite(geom: &MultiPolygon<Real>) -> bool {
        geom.0.iter().all(|polygon| {
            polygon
                .exterior()
                .coords()
                .chain(polygon.interiors().iter().flat_map(|ring| ring.coords()))
                .all(|c| c.x.is_finite() && c.y.is_finite())
        })
    }

    fn checked(geom: MultiPolygon<Real>, op: &'static str) -> Result<Self, GeometryError> {
        if Self::all_coords_finite(&geom) {
            Ok(Self { geom })
        } else {
            Err(GeometryError::BooleanOperation { op })
        }
    }

    /// Boolean union (fuse) with another region.
    pub fn union(&self, other: &Self) -> Result<Self, GeometryError> {
        Self::checked(self.geom.union(&other.geom), "union")
    }

    /// Boolean subtraction (cut) of another region from this one.
    /// An empty result is valid; only an invalid one is an error.
    pub fn difference(&self, other: &Self) -> Result<Self, GeometryError> {
        Self::checked(self.geom.difference(&other.geom), "difference")
    }

    /// Applies an arbitrary homogeneous transform to every coordinate,
    /// keeping the region in the z = 0 plane.
    pub fn transform(&self, matrix: &Matrix4<Real>) -> Self {
        let geom = self.geom.map_coords(|c| {
            let p = matrix.transform_point(&Point3::new(c.x, c.y, 0.0));
            coord! { x: p.x, y: p.y }
        });
        Self { geom }
    }

    /// Returns a new Sketch translated by x and y.
    pub fn translate(&self, x: Real, y: Real) -> Self {
        self.transform(&Translation3::new(x, y, 0.0).to_homogeneous())
    }

    /// Returns a new Sketch rotated by `radians` about the z axis through
    /// `pivot`.
    pub fn rotate_z(&self, pivot: Point3<Real>, radians: Real) -> Self {
        let rot = Rotation3::from_axis_angle(&Vector3::z_axis(), radians).to_homogeneous();
        let to_pivot = Translation3::new(pivot.x, pivot.y, pivot.z).to_homogeneous();
        let from_pivot = Translation3::new(-pivot.x, -pivot.y, -pivot.z).to_homogeneous();
        self.transform(&(to_pivot * rot * from_pivot))
    }

    /// Axis-aligned bounding box, or `None` for an empty region.
    pub fn bounding_box(&self) -> Option<Rect<Real>> {
        self.geom.bounding_rect()
    }

    /// Integrates area, centroid and second moments about the world axes.
    /// Returns `None` when the region encloses no area.
    pub fn mass_properties(&self) -> Option<MassProperties> {
        let mut total = RingIntegrals::default();
        for polygon in &self.geom.0 {
            total.add(polygon_integrals(polygon));
        }
        if total.area.abs() <= tolerance() {
            return None;
        }
        Some(MassProperties {
            area: total.area,
            centroid: Point3::new(total.qy / total.area, total.qx / total.area, 0.0),
            ixx: total.ixx,
            iyy: total.iyy,
            ixy: total.ixy,
        })
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::FRAC_PI_2;
    use approx::assert_relative_eq;

    #[test]
    fn rectangle_mass_properties_about_origin() {
        // rect spanning (0,0)..(2,3): A = 6, centroid (1, 1.5),
        // Ixx = w h^3 / 3, Iyy = h w^3 / 3, Ixy = w^2 h^2 / 4
        let rect = Sketch::rectangle(2.0, 3.0).unwrap();
        let mp = rect.mass_properties().unwrap();
        assert_relative_eq!(mp.area, 6.0, max_relative = 1e-12);
        assert_relative_eq!(mp.centroid.x, 1.0, max_relative = 1e-12);
        assert_relative_eq!(mp.centroid.y, 1.5, max_relative = 1e-12);
        assert_relative_eq!(mp.ixx, 2.0 * 27.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(mp.iyy, 3.0 * 8.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(mp.ixy, 4.0 * 9.0 / 4.0, max_relative = 1e-12);
    }

    #[test]
    fn centered_rectangle_matches_centroidal_formulas() {
        let rect = Sketch::rectangle(2.0, 3.0).unwrap().translate(-1.0, -1.5);
        let mp = rect.mass_properties().unwrap();
        assert_relative_eq!(mp.ixx, 2.0 * 27.0 / 12.0, max_relative = 1e-12);
        assert_relative_eq!(mp.iyy, 3.0 * 8.0 / 12.0, max_relative = 1e-12);
        assert!(mp.ixy.abs() < 1e-12);
        assert!(mp.centroid.x.abs() < 1e-12 && mp.centroid.y.abs() < 1e-12);
    }

    #[test]
    fn hole_is_subtracted_from_integrals() {
        // 10x10 square with a 2x2 hole cut out of the middle
        let outer = Sketch::rectangle(10.0, 10.0).unwrap();
        let inner = Sketch::rectangle(2.0, 2.0).unwrap().translate(4.0, 4.0);
        let ring = outer.difference(&inner).unwrap();
        let mp = ring.mass_properties().unwrap();
        assert_relative_eq!(mp.area, 96.0, max_relative = 1e-9);
        assert_relative_eq!(mp.centroid.x, 5.0, max_relative = 1e-9);
        assert_relative_eq!(mp.centroid.y, 5.0, max_relative = 1e-9);
    }

    #[test]
    fn union_of_disjoint_regions_adds_area() {
        let a = Sketch::rectangle(1.0, 1.0).unwrap();
        let b = Sketch::rectangle(2.0, 2.0).unwrap().translate(5.0, 5.0);
        let fused = a.union(&b).unwrap();
        let mp = fused.mass_properties().unwrap();
        assert_relative_eq!(mp.area, 5.0, max_relative = 1e-9);
    }

    #[test]
    fn difference_consuming_everything_is_empty() {
        let small = Sketch::rectangle(1.0, 1.0).unwrap();
        let big = Sketch::rectangle(3.0, 3.0).unwrap().translate(-1.0, -1.0);
        let gone = small.difference(&big).unwrap();
        assert!(gone.mass_properties().is_none());
    }

    #[test]
    fn rotation_about_origin_moves_bounding_box() {
        // unit square rotated +90 degrees: (x,y) -> (-y,x)
        let square = Sketch::rectangle(1.0, 1.0).unwrap();
        let rotated = square.rotate_z(Point3::origin(), FRAC_PI_2);
        let bb = rotated.bounding_box().unwrap();
        assert_relative_eq!(bb.min().x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(bb.max().x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bb.min().y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bb.max().y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_about_pivot_keeps_pivot_fixed() {
        let square = Sketch::rectangle(2.0, 2.0).unwrap();
        let rotated = square.rotate_z(Point3::new(1.0, 1.0, 0.0), FRAC_PI_2);
        let mp = rotated.mass_properties().unwrap();
        // centroid coincides with the pivot, so it must not move
        assert_relative_eq!(mp.centroid.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mp.centroid.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_sketch_has_no_properties() {
        let empty = Sketch::new();
        assert!(empty.is_empty());
        assert!(empty.mass_properties().is_none());
        assert!(empty.bounding_box().is_none());
    }
}
