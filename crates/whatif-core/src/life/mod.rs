//! Life-state model.
//!
//! Six discrete regimes describe how a student is coping. The classifier maps
//! raw habit metrics onto one of them, and the transition graph documents
//! which regime can follow which.

mod classifier;
mod graph;

pub use classifier::{classify, LifeState};
pub use graph::TransitionGraph;
