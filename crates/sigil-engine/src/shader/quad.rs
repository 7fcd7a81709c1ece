use crate::coords::{TextureRect, Vec2};

use super::ShaderError;

/// Corner of a symbol quad, named by its x side then its y side.
///
/// The discriminant is the value of the `a_index` attribute:
///
/// ```text
///   3 (min x, max y) ── 2 (max x, max y)
///   │                   │
///   0 (min x, min y) ── 1 (max x, min y)
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    MinMin = 0,
    MaxMin = 1,
    MaxMax = 2,
    MinMax = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::MinMin, Corner::MaxMin, Corner::MaxMax, Corner::MinMax];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_min_x(self) -> bool {
        matches!(self, Corner::MinMin | Corner::MinMax)
    }

    #[inline]
    pub fn is_min_y(self) -> bool {
        matches!(self, Corner::MinMin | Corner::MaxMin)
    }
}

impl TryFrom<f32> for Corner {
    type Error = ShaderError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Corner::ALL
            .into_iter()
            .find(|c| c.index() as f32 == value)
            .ok_or(ShaderError::CornerIndex(value))
    }
}

/// Precomputed min/max bounds of a symbol quad and its texture region.
///
/// This is the CPU-side mirror of the branch the generated shader takes per
/// corner: min-side corners pick `min`, the others pick `max`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadBounds {
    pub offset_min: Vec2,
    pub offset_max: Vec2,
    pub texture: TextureRect,
}

impl QuadBounds {
    /// Bounds of a `size` quad centered on `offset`.
    pub fn new(size: Vec2, offset: Vec2, texture: TextureRect) -> Self {
        let half = size / 2.0;
        Self {
            offset_min: offset - half,
            offset_max: offset + half,
            texture,
        }
    }

    pub fn corner_offset(&self, corner: Corner) -> Vec2 {
        pick(corner, self.offset_min, self.offset_max)
    }

    pub fn corner_tex_coord(&self, corner: Corner) -> Vec2 {
        pick(corner, self.texture.min(), self.texture.max())
    }
}

fn pick(corner: Corner, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(
        if corner.is_min_x() { min.x } else { max.x },
        if corner.is_min_y() { min.y } else { max.y },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> QuadBounds {
        QuadBounds::new(
            Vec2::new(2.0, 4.0),
            Vec2::new(10.0, 20.0),
            TextureRect::new(0.25, 0.5, 0.75, 1.0),
        )
    }

    #[test]
    fn bounds_are_centered_on_offset() {
        let b = bounds();
        assert_eq!(b.offset_min, Vec2::new(9.0, 18.0));
        assert_eq!(b.offset_max, Vec2::new(11.0, 22.0));
    }

    #[test]
    fn corner_offsets_follow_index_convention() {
        let b = bounds();
        assert_eq!(b.corner_offset(Corner::MinMin), Vec2::new(9.0, 18.0));
        assert_eq!(b.corner_offset(Corner::MaxMin), Vec2::new(11.0, 18.0));
        assert_eq!(b.corner_offset(Corner::MaxMax), Vec2::new(11.0, 22.0));
        assert_eq!(b.corner_offset(Corner::MinMax), Vec2::new(9.0, 22.0));
    }

    #[test]
    fn texture_corners_track_quad_corners() {
        let b = bounds();
        for corner in Corner::ALL {
            let uv = b.corner_tex_coord(corner);
            assert_eq!(uv.x == 0.25, corner.is_min_x());
            assert_eq!(uv.y == 0.5, corner.is_min_y());
        }
    }

    #[test]
    fn corner_from_index() {
        assert_eq!(Corner::try_from(0.0f32), Ok(Corner::MinMin));
        assert_eq!(Corner::try_from(2.0f32), Ok(Corner::MaxMax));
        assert_eq!(Corner::try_from(3.0f32), Ok(Corner::MinMax));
    }

    #[test]
    fn corner_rejects_out_of_range() {
        assert_eq!(Corner::try_from(4.0f32), Err(ShaderError::CornerIndex(4.0f32)));
        assert!(Corner::try_from(-1.0f32).is_err());
        assert!(Corner::try_from(1.5f32).is_err());
        assert!(Corner::try_from(f32::NAN).is_err());
    }
}
