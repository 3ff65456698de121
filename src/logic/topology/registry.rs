//! Peer Registry
//!
//! Source of the mesh roster. Compiled-in today; the trait keeps the
//! topology contract unchanged when a live feed replaces it.

use once_cell::sync::Lazy;

use super::model::{load, TopologyError, TopologyView};
use super::types::{MeshNode, PeerStatus};

/// Yields the current mesh roster: the sovereign node plus its peers
pub trait PeerRegistry: Send + Sync {
    fn sovereign(&self) -> MeshNode;
    fn peers(&self) -> Vec<MeshNode>;
}

/// Load a validated topology view straight from a registry
pub fn load_from(registry: &dyn PeerRegistry) -> Result<TopologyView, TopologyError> {
    load(registry.sovereign(), registry.peers())
}

// Compiled-in roster for the East-African pilot mesh.
static STATIC_ROSTER: Lazy<(MeshNode, Vec<MeshNode>)> = Lazy::new(|| {
    (
        MeshNode::sovereign("ETH-01", 9.03, 38.74),
        vec![
            MeshNode::peer("KEN-02", -1.29, 36.82, PeerStatus::Online),
            MeshNode::peer("UGA-03", 0.34, 32.58, PeerStatus::Syncing),
            MeshNode::peer("RWA-04", -1.94, 30.06, PeerStatus::Online),
        ],
    )
});

/// Static peer roster until the live topology feed lands
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPeerRegistry;

impl PeerRegistry for StaticPeerRegistry {
    fn sovereign(&self) -> MeshNode {
        STATIC_ROSTER.0.clone()
    }

    fn peers(&self) -> Vec<MeshNode> {
        STATIC_ROSTER.1.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_roster_loads_and_links() {
        let view = load_from(&StaticPeerRegistry).unwrap();
        assert_eq!(view.sovereign().id, "ETH-01");
        assert_eq!(view.peers().len(), 3);
        assert_eq!(view.links().len(), 3);
    }
}
