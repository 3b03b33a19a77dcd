// Application layer - use cases over the domain model
pub mod monitor;
pub mod normalizer;
