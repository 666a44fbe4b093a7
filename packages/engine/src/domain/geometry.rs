//! Geometry snapshot
//!
//! Container and element boxes are measured once per world build. Spawn
//! positions, wall placement and every clamp work against these numbers,
//! never against a fresh DOM query.

/// A bounding box as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn size(&self) -> ElementSize {
        ElementSize { width: self.width, height: self.height }
    }
}

/// Width and height of a bound element, captured at spawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementSize {
    pub width: f32,
    pub height: f32,
}

impl ElementSize {
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

/// Container dimensions plus the wall thickness used for this build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerGeometry {
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
}

impl ContainerGeometry {
    pub fn from_rect(rect: Rect, thickness: f32) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
            thickness,
        }
    }

    /// Bottom, left and right walls as `(cx, cy, w, h)`.
    pub fn side_walls(&self) -> [(f32, f32, f32, f32); 3] {
        let (w, h, t) = (self.width, self.height, self.thickness);
        [
            (w / 2.0, h + t / 2.0, w + t * 2.0, t),
            (-t / 2.0, h / 2.0, t, h + t * 2.0),
            (w + t / 2.0, h / 2.0, t, h + t * 2.0),
        ]
    }

    /// Ceiling placed after the spawn delay, as `(cx, cy, w, h)`.
    pub fn top_wall(&self) -> (f32, f32, f32, f32) {
        let (w, t) = (self.width, self.thickness);
        (w / 2.0, -t / 2.0, w + t * 2.0, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_sit_just_outside_the_visible_box() {
        let geo = ContainerGeometry::from_rect(Rect::new(0.0, 0.0, 800.0, 600.0), 200.0);
        let [bottom, left, right] = geo.side_walls();

        // inner faces touch the container edges
        assert_eq!(bottom.1 - bottom.3 / 2.0, 600.0);
        assert_eq!(left.0 + left.2 / 2.0, 0.0);
        assert_eq!(right.0 - right.2 / 2.0, 800.0);

        let top = geo.top_wall();
        assert_eq!(top.1 + top.3 / 2.0, 0.0);
        assert_eq!(top.2, 1200.0);
    }
}
