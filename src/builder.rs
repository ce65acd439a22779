use crate::engine::{LcsEngine, Variant};
use crate::traits::Symbol;

pub struct LcsEngineBuilder<'a, T> {
    x: &'a [T],
    y: &'a [T],
    variant: Option<Variant>,
}

impl<'a, T: Symbol> LcsEngineBuilder<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self {
            x,
            y,
            variant: None,
        }
    }
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }
    pub fn build(self) -> LcsEngine<'a, T> {
        match self.variant {
            Some(v) => LcsEngine::with_variant(self.x, self.y, v),
            None => LcsEngine::new(self.x, self.y),
        }
    }
}
