use crate::model::entropy::Entropy;

/// Browser entropy backed by `Math.random`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl Entropy for MathRandom {
    fn roll(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
