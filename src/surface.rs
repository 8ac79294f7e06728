// The 2D drawing operations effects need. The browser build implements this
// over a canvas 2d context; tests use a recording surface.

use crate::color::Color;

pub trait Surface {
    // Reassigning the dimensions also wipes whatever was drawn
    fn resize(&mut self, width: f64, height: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn set_fill_color(&mut self, color: &Color);
    fn set_global_alpha(&mut self, alpha: f64);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;
    use crate::color::Color;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Resize(f64, f64),
        Clear(f64, f64, f64, f64),
        FillRect(f64, f64, f64, f64),
        FillCircle { x: f64, y: f64, radius: f64, alpha: f64 },
        Save,
        Restore,
        Translate(f64, f64),
        Rotate(f64),
        FillColor(Color),
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
        alpha: Vec<f64>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            RecordingSurface {
                ops: Vec::new(),
                alpha: vec![1.0],
            }
        }

        pub fn circles(&self) -> Vec<(f64, f64, f64)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::FillCircle { x, y, alpha, .. } => Some((*x, *y, *alpha)),
                    _ => None,
                })
                .collect()
        }

        pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
            self.ops.iter().filter(|op| pred(*op)).count()
        }

        pub fn reset(&mut self) {
            self.ops.clear();
        }

        fn current_alpha(&self) -> f64 {
            self.alpha.last().copied().unwrap_or(1.0)
        }
    }

    impl Surface for RecordingSurface {
        fn resize(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Resize(width, height));
        }
        fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(Op::Clear(x, y, width, height));
        }
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
            self.ops.push(Op::FillRect(x, y, width, height));
        }
        fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
            let alpha = self.current_alpha();
            self.ops.push(Op::FillCircle {
                x,
                y,
                radius,
                alpha,
            });
        }
        fn save(&mut self) {
            let alpha = self.current_alpha();
            self.alpha.push(alpha);
            self.ops.push(Op::Save);
        }
        fn restore(&mut self) {
            if self.alpha.len() > 1 {
                self.alpha.pop();
            }
            self.ops.push(Op::Restore);
        }
        fn translate(&mut self, x: f64, y: f64) {
            self.ops.push(Op::Translate(x, y));
        }
        fn rotate(&mut self, angle: f64) {
            self.ops.push(Op::Rotate(angle));
        }
        fn set_fill_color(&mut self, color: &Color) {
            self.ops.push(Op::FillColor(*color));
        }
        fn set_global_alpha(&mut self, alpha: f64) {
            if let Some(top) = self.alpha.last_mut() {
                *top = alpha;
            }
        }
    }
}
