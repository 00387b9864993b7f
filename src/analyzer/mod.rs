pub mod engine;
pub mod graph;
pub mod normalize;
pub mod scoring;
pub mod strategy;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::*;
pub use graph::*;
pub use normalize::*;
pub use scoring::*;
pub use strategy::*;
pub use types::*;
