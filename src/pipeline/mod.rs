// Pipeline: corpus preparation, comparison, and output.

pub mod comparison;
pub mod corpus;
pub mod result;
