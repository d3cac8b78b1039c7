// Similarity scoring: set overlap as a two-decimal percentage.

pub mod overlap;
