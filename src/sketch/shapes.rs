//! Primitive planar faces as `Sketch`es

use crate::errors::GeometryError;
use crate::float_types::{Real, TAU};
use crate::sketch::Sketch;
use geo::{Coord, LineString, MultiPolygon, Polygon as GeoPolygon, coord, line_string};

impl Sketch {
    /// Creates a circular face in the XY plane, centered on the origin,
    /// as a regular polygon with uniform angular sampling.
    ///
    /// # Parameters
    ///
    /// - `radius`: the circle radius, must be positive and finite
    /// - `segments`: number of polygon edges, minimum 3
    ///
    /// # Example
    /// ```
    /// use fut_section::Sketch;
    /// let disc = Sketch::circle(5.0, 64).unwrap();
    /// ```
    pub fn circle(radius: Real, segments: usize) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::Construction {
                shape: "circle",
                reason: format!("radius must be positive and finite, got {radius}"),
            });
        }
        if segments < 3 {
            return Err(GeometryError::Construction {
                shape: "circle",
                reason: format!("at least 3 segments are required, got {segments}"),
            });
        }
        let mut coords: Vec<Coord<Real>> = (0..segments)
            .map(|i| {
                let theta = TAU * (i as Real) / (segments as Real);
                coord! { x: radius * theta.cos(), y: radius * theta.sin() }
            })
            .collect();
        // close it
        coords.push(coords[0]);
        let polygon_2d = GeoPolygon::new(LineString::new(coords), vec![]);

        Ok(Self::from_geo(MultiPolygon::new(vec![polygon_2d])))
    }

    /// Creates a rectangular face in the XY plane with one corner at the
    /// origin, spanning `(0,0)` to `(width, length)`.
    ///
    /// # Parameters
    ///
    /// - `width`: extent along x, must be positive and finite
    /// - `length`: extent along y, must be positive and finite
    pub fn rectangle(width: Real, length: Real) -> Result<Self, GeometryError> {
        for (name, value) in [("width", width), ("length", length)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::Construction {
                    shape: "rectangle",
                    reason: format!("{name} must be positive and finite, got {value}"),
                });
            }
        }
        let outer = line_string![
            (x: 0.0,   y: 0.0),
            (x: width, y: 0.0),
            (x: width, y: length),
            (x: 0.0,   y: length),
            (x: 0.0,   y: 0.0),  // close explicitly
        ];
        let polygon_2d = GeoPolygon::new(outer, vec![]);

        Ok(Self::from_geo(MultiPolygon::new(vec![polygon_2d])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circle_rejects_bad_dimensions() {
        assert!(matches!(
            Sketch::circle(0.0, 64),
            Err(GeometryError::Construction { shape: "circle", .. })
        ));
        assert!(Sketch::circle(-1.0, 64).is_err());
        assert!(Sketch::circle(Real::NAN, 64).is_err());
        assert!(Sketch::circle(1.0, 2).is_err());
    }

    #[test]
    fn rectangle_rejects_bad_dimensions() {
        assert!(matches!(
            Sketch::rectangle(0.0, 1.0),
            Err(GeometryError::Construction { shape: "rectangle", .. })
        ));
        assert!(Sketch::rectangle(1.0, -2.0).is_err());
        assert!(Sketch::rectangle(Real::INFINITY, 1.0).is_err());
    }

    #[test]
    fn circle_area_matches_regular_polygon() {
        let n = 128;
        let r = 3.0;
        let disc = Sketch::circle(r, n).unwrap();
        let mp = disc.mass_properties().unwrap();
        let exact = 0.5 * n as Real * r * r * (TAU / n as Real).sin();
        assert_relative_eq!(mp.area, exact, max_relative = 1e-12);
        assert!(mp.centroid.x.abs() < 1e-12 && mp.centroid.y.abs() < 1e-12);
    }

    #[test]
    fn circle_second_moments_are_isotropic() {
        let disc = Sketch::circle(2.0, 256).unwrap();
        let mp = disc.mass_properties().unwrap();
        assert_relative_eq!(mp.ixx, mp.iyy, max_relative = 1e-9);
        assert!(mp.ixy.abs() < 1e-9);
    }
}
