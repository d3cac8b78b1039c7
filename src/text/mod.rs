// Text handling: alphabet normalization and symbol counting.

pub mod normalize;
pub mod symbols;
