//! Graph algorithms
//!
//! Every algorithm is an extension trait implemented for all graphs that can be queried,
//! so bringing the trait into scope is enough to call it.
mod search;
pub use self::search::*;
mod reachability;
pub use self::reachability::*;
mod path;
pub use self::path::*;
mod components;
pub use self::components::*;
mod cycle;
pub use self::cycle::*;
mod connectivity;
pub use self::connectivity::*;
pub mod graphviz;
