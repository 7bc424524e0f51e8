use nalgebra::Vector3;

use crate::bounds::Aabb;
use crate::mesh::ObjDocument;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pivot {
    /// Scale about the origin and leave the model where that puts it.
    Origin,
    /// Scale, then move the center of the scaled bounds to the origin.
    BoundsCenter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rescale {
    pub scale: Vector3<f64>,
    pub pivot: Pivot,
}

impl Rescale {
    pub fn new(scale: Vector3<f64>, pivot: Pivot) -> Self {
        Self { scale, pivot }
    }

    /// Rewrites every vertex of `doc` and returns the resulting bounds.
    pub fn apply(&self, doc: &mut ObjDocument) -> Aabb {
        doc.map_vertices(|p| p.coords.component_mul(&self.scale).into());
        let scaled = Aabb::from_points(doc.vertices());
        if self.pivot == Pivot::Origin || scaled.is_empty() {
            return scaled;
        }

        let offset = scaled.center().coords;
        log::debug!("Recentering by {:?}", offset.as_slice());
        doc.map_vertices(|p| p - offset);
        Aabb::new(scaled.min - offset, scaled.max - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn doc() -> ObjDocument {
        ObjDocument::parse("o box\nv 1 2 3\nv 3 6 5\nf 1 2\n")
    }

    #[test]
    fn scales_about_origin() {
        let mut doc = doc();
        let bounds = Rescale::new(Vector3::new(2.0, 0.5, 1.0), Pivot::Origin).apply(&mut doc);
        assert_eq!(doc.vertices[0], Point3::new(2.0, 1.0, 3.0));
        assert_eq!(doc.vertices[1], Point3::new(6.0, 3.0, 5.0));
        assert_eq!(bounds.min, Point3::new(2.0, 1.0, 3.0));
        assert_eq!(bounds.max, Point3::new(6.0, 3.0, 5.0));
    }

    #[test]
    fn recentered_bounds_straddle_origin() {
        let mut doc = doc();
        let bounds = Rescale::new(Vector3::repeat(0.5), Pivot::BoundsCenter).apply(&mut doc);
        assert_relative_eq!(bounds.center(), Point3::origin());
        assert_relative_eq!(bounds.extents(), Vector3::new(1.0, 2.0, 1.0));
        assert_relative_eq!(doc.vertices[0], Point3::new(-0.5, -1.0, -0.5));
        assert_relative_eq!(
            doc.bounds().unwrap().center(),
            Point3::origin(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn recentering_near_f64_max_stays_finite() {
        let mut doc = ObjDocument::parse("v 1e308 0 0\nv 1.5e308 1 1\n");
        Rescale::new(Vector3::repeat(1.0), Pivot::BoundsCenter).apply(&mut doc);
        assert!(doc.vertices().all(|p| p.coords.iter().all(|c| c.is_finite())));
        assert_relative_eq!(
            doc.vertices[0],
            Point3::new(-2.5e307, -0.5, -0.5),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            doc.vertices[1],
            Point3::new(2.5e307, 0.5, 0.5),
            max_relative = 1e-12
        );
    }

    #[test]
    fn no_vertices_is_a_no_op() {
        let mut doc = ObjDocument::parse("# nothing here\n");
        let bounds = Rescale::new(Vector3::repeat(3.0), Pivot::BoundsCenter).apply(&mut doc);
        assert!(bounds.is_empty());
        assert_eq!(doc.to_text(6), "# nothing here\n");
    }
}
