//! Spiral placement of word boxes on a bounded canvas.

/// Axis-aligned box, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Places boxes along an Archimedean spiral from the canvas centre.
///
/// Each box is tried at successive spiral points until it fits inside the
/// canvas (minus `margin`) without overlapping an earlier box.
#[derive(Debug, Clone)]
pub struct SpiralLayout {
    width: f64,
    height: f64,
    margin: f64,
    step: f64,
    max_steps: usize,
    placed: Vec<Rect>,
}

impl SpiralLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, margin: 4.0, step: 0.1, max_steps: 8000, placed: Vec::new() }
    }

    pub fn placed(&self) -> &[Rect] {
        &self.placed
    }

    /// Finds a free spot for a `width` × `height` box and reserves it.
    pub fn place(&mut self, width: f64, height: f64) -> Option<Rect> {
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        let aspect = self.width / self.height;

        for i in 0..self.max_steps {
            let theta = i as f64 * self.step;
            let radius = 2.0 * theta;
            let x = cx + radius * theta.cos() * aspect - width / 2.0;
            let y = cy + radius * theta.sin() - height / 2.0;
            let candidate = Rect { x, y, width, height };

            if self.fits(&candidate) {
                self.placed.push(candidate);
                return Some(candidate);
            }
        }

        None
    }

    fn fits(&self, rect: &Rect) -> bool {
        rect.x >= self.margin
            && rect.y >= self.margin
            && rect.x + rect.width <= self.width - self.margin
            && rect.y + rect.height <= self.height - self.margin
            && !self.placed.iter().any(|p| p.intersects(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
        let b = Rect { x: 5.0, y: 5.0, width: 10.0, height: 10.0 };
        let c = Rect { x: 10.0, y: 0.0, width: 5.0, height: 5.0 };
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_first_box_is_centred() {
        let mut layout = SpiralLayout::new(800.0, 600.0);
        let rect = layout.place(100.0, 40.0).unwrap();
        assert_eq!(rect.center(), (400.0, 300.0));
    }

    #[test]
    fn test_boxes_never_overlap() {
        let mut layout = SpiralLayout::new(400.0, 300.0);
        for _ in 0..20 {
            layout.place(60.0, 20.0);
        }
        let placed = layout.placed();
        assert!(placed.len() > 1);
        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                assert!(!a.intersects(b));
            }
        }
    }

    #[test]
    fn test_oversized_box_is_rejected() {
        let mut layout = SpiralLayout::new(100.0, 100.0);
        assert!(layout.place(200.0, 20.0).is_none());
        assert!(layout.placed().is_empty());
    }
}
