//! Topology Module
//!
//! Self + peer mesh model with link-health coloring for the map renderer.
//!
//! ## Structure
//! - `types`: MeshNode, PeerStatus, MeshLink
//! - `model`: validation (`load`) and link derivation
//! - `registry`: roster source (compiled-in today, live feed later)

pub mod model;
pub mod registry;
pub mod types;

pub use model::{load, TopologyError, TopologyView};
pub use registry::{load_from, PeerRegistry, StaticPeerRegistry};
pub use types::{MeshLink, MeshNode, NodeRole, PeerStatus};
