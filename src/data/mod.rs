//! Model and protocol parameter containers consumed by the solver.

pub mod model;
pub mod protocol;

pub use model::{Model, ModelBuilder};
pub use protocol::{DoseFn, Protocol, Route};
