//! Fitting a logical canvas into a container while keeping its aspect ratio.

use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// Largest factor that fits `content` inside `container` (aspect kept).
pub fn scale_factor(content: Size, container: Size) -> f64 {
    (container.width / content.width).min(container.height / content.height)
}

/// Logical drawing area mapped onto a physical one by a uniform scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledCanvas {
    pub logical: Size,
    pub scale: f64,
}

impl ScaledCanvas {
    pub fn fit(logical: Size, container: Size) -> Self {
        Self {
            logical,
            scale: scale_factor(logical, container),
        }
    }

    pub fn physical_size(&self) -> Size {
        self.logical.scaled(self.scale)
    }

    #[inline]
    pub fn to_physical(&self, p: Vector2<f64>) -> Vector2<f64> {
        p * self.scale
    }

    #[inline]
    pub fn to_logical(&self, p: Vector2<f64>) -> Vector2<f64> {
        p / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn limited_by_the_tighter_side() {
        let logical = Size::new(640.0, 480.0);
        assert_eq!(scale_factor(logical, Size::new(1280.0, 1200.0)), 2.0);
        assert_eq!(scale_factor(logical, Size::new(320.0, 480.0)), 0.5);
    }

    #[test]
    fn canvas_maps_points_both_ways() {
        let c = ScaledCanvas::fit(Size::new(640.0, 480.0), Size::new(960.0, 1000.0));
        assert_eq!(c.scale, 1.5);
        assert_eq!(c.physical_size(), Size::new(960.0, 720.0));
        let p = vector![320.0, 240.0];
        assert_eq!(c.to_physical(p), vector![480.0, 360.0]);
        assert_eq!(c.to_logical(c.to_physical(p)), p);
    }
}
