// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use mgl_core::Vec3;

use crate::GeomError;

/// Projections onto the four body diagonals (1,1,1), (1,1,−1), (1,−1,1),
/// (−1,1,1). The axes are not normalized; only comparisons are made.
fn project(p: Vec3) -> [f32; 4] {
    let (x, y, z) = (p.x(), p.y(), p.z());
    [x + y + z, x + y - z, x - y + z, -x + y + z]
}

/// 8-DOP: the intersection of four slabs along the body diagonals.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dop8 {
    /// Minimum projection per axis.
    pub min: [f32; 4],
    /// Maximum projection per axis.
    pub max: [f32; 4],
}

impl Dop8 {
    /// Tightest 8-DOP around `points`.
    ///
    /// # Errors
    /// [`GeomError::EmptyPointSet`] if `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Result<Self, GeomError> {
        let (first, rest) = points.split_first().ok_or(GeomError::EmptyPointSet)?;
        let start = project(*first);
        let mut dop = Self {
            min: start,
            max: start,
        };
        for p in rest {
            let d = project(*p);
            for k in 0..4 {
                dop.min[k] = dop.min[k].min(d[k]);
                dop.max[k] = dop.max[k].max(d[k]);
            }
        }
        Ok(dop)
    }

    /// Returns `true` if the intervals overlap on all four axes.
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..4).all(|k| self.min[k] <= other.max[k] && other.min[k] <= self.max[k])
    }

    /// Returns `true` if `p` lies inside or on the polytope.
    pub fn contains_point(&self, p: Vec3) -> bool {
        let d = project(p);
        (0..4).all(|k| d[k] >= self.min[k] && d[k] <= self.max[k])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_corners() {
        let corners: Vec<Vec3> = (0..8)
            .map(|i| {
                Vec3::new(
                    f32::from(i & 1 != 0),
                    f32::from(i & 2 != 0),
                    f32::from(i & 4 != 0),
                )
            })
            .collect();
        let Ok(dop) = Dop8::from_points(&corners) else {
            panic!("cube corners should build a dop");
        };
        assert_eq!(dop.min, [0.0, -1.0, -1.0, -1.0]);
        assert_eq!(dop.max, [3.0, 2.0, 2.0, 2.0]);
        assert!(dop.contains_point(Vec3::new(0.5, 0.5, 0.5)));
        assert!(!dop.contains_point(Vec3::new(2.0, 1.0, 1.0)));

        let shifted = Dop8::from_points(&[Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0)]);
        assert_eq!(shifted.map(|s| dop.overlaps(&s)), Ok(false));
        let touching = Dop8::from_points(&[Vec3::new(1.0, 1.0, 1.0)]);
        assert_eq!(touching.map(|s| dop.overlaps(&s)), Ok(true));
        assert_eq!(Dop8::from_points(&[]), Err(GeomError::EmptyPointSet));
    }
}
