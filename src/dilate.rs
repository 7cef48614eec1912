
/// Grow a region by the same margin on every side.
pub trait Dilate: Sized {
    fn expand(&self, margin: f64) -> Self;

    fn contract(&self, margin: f64) -> Self {
        self.expand(-margin)
    }
}
