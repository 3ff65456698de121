//! Topology Model
//!
//! Validated self+peers view and the link derivation the map renderer
//! consumes.

use std::collections::HashSet;

use serde::Serialize;

use super::types::{MeshLink, MeshNode, NodeRole, LINK_WEIGHT};

/// Validated topology: one sovereign node plus its peer set.
///
/// Only constructed through [`load`]; a view that exists passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopologyView {
    sovereign: MeshNode,
    peers: Vec<MeshNode>,
}

/// Validate and assemble a topology view.
///
/// Hard-fails on role mismatches, peers without a link status, and
/// duplicate peer ids; a rejected roster never produces a partial view.
pub fn load(sovereign: MeshNode, peers: Vec<MeshNode>) -> Result<TopologyView, TopologyError> {
    if sovereign.role != NodeRole::Sovereign {
        return Err(TopologyError::RoleMismatch {
            id: sovereign.id,
            expected: NodeRole::Sovereign,
        });
    }

    let mut seen = HashSet::new();
    for peer in &peers {
        if peer.role != NodeRole::Peer {
            return Err(TopologyError::RoleMismatch {
                id: peer.id.clone(),
                expected: NodeRole::Peer,
            });
        }
        if peer.status.is_none() {
            return Err(TopologyError::MissingPeerStatus(peer.id.clone()));
        }
        if !seen.insert(peer.id.clone()) {
            return Err(TopologyError::DuplicatePeerId(peer.id.clone()));
        }
    }

    Ok(TopologyView { sovereign, peers })
}

impl TopologyView {
    pub fn sovereign(&self) -> &MeshNode {
        &self.sovereign
    }

    pub fn peers(&self) -> &[MeshNode] {
        &self.peers
    }

    /// One link per peer, input order preserved.
    ///
    /// Endpoints are the raw coordinate pairs; straight segments, no
    /// great-circle correction.
    pub fn links(&self) -> Vec<MeshLink> {
        self.peers
            .iter()
            .map(|peer| {
                // every peer carries a status, load() rejects the rest
                let status = peer.status.expect("validated peer has a status");
                MeshLink {
                    from: (self.sovereign.lat, self.sovereign.lng),
                    to: (peer.lat, peer.lng),
                    color: status.link_color(),
                    weight: LINK_WEIGHT,
                }
            })
            .collect()
    }
}

/// Topology configuration errors
///
/// These are caller/configuration errors, not network hiccups; `load`
/// fails hard on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// Two peers share an id - a data-integrity violation
    DuplicatePeerId(String),
    RoleMismatch { id: String, expected: NodeRole },
    MissingPeerStatus(String),
}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePeerId(id) => write!(f, "duplicate peer id: {}", id),
            Self::RoleMismatch { id, expected } => {
                write!(f, "node {} does not have the {:?} role", id, expected)
            }
            Self::MissingPeerStatus(id) => write!(f, "peer {} has no link status", id),
        }
    }
}

impl std::error::Error for TopologyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::types::{PeerStatus, ONLINE_LINK_COLOR, SYNCING_LINK_COLOR};

    fn sovereign() -> MeshNode {
        MeshNode::sovereign("ETH-01", 9.03, 38.74)
    }

    #[test]
    fn test_links_follow_peer_order_and_status() {
        let view = load(
            sovereign(),
            vec![
                MeshNode::peer("KEN-02", -1.29, 36.82, PeerStatus::Online),
                MeshNode::peer("UGA-03", 0.34, 32.58, PeerStatus::Syncing),
            ],
        )
        .unwrap();

        let links = view.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].color, ONLINE_LINK_COLOR);
        assert_eq!(links[1].color, SYNCING_LINK_COLOR);
        assert_eq!(links[0].from, (9.03, 38.74));
        assert_eq!(links[0].to, (-1.29, 36.82));
        assert_eq!(links[1].to, (0.34, 32.58));
    }

    #[test]
    fn test_duplicate_peer_id_rejected() {
        let result = load(
            sovereign(),
            vec![
                MeshNode::peer("KEN-02", -1.29, 36.82, PeerStatus::Online),
                MeshNode::peer("KEN-02", -1.30, 36.80, PeerStatus::Syncing),
            ],
        );

        assert_eq!(
            result.unwrap_err(),
            TopologyError::DuplicatePeerId("KEN-02".to_string())
        );
    }

    #[test]
    fn test_wrong_sovereign_role_rejected() {
        let not_sovereign = MeshNode::peer("ETH-01", 9.03, 38.74, PeerStatus::Online);
        let result = load(not_sovereign, vec![]);
        assert!(matches!(
            result.unwrap_err(),
            TopologyError::RoleMismatch { expected: NodeRole::Sovereign, .. }
        ));
    }

    #[test]
    fn test_sovereign_in_peer_list_rejected() {
        let result = load(sovereign(), vec![MeshNode::sovereign("KEN-02", -1.29, 36.82)]);
        assert!(matches!(
            result.unwrap_err(),
            TopologyError::RoleMismatch { expected: NodeRole::Peer, .. }
        ));
    }

    #[test]
    fn test_peer_without_status_rejected() {
        let mut peer = MeshNode::peer("KEN-02", -1.29, 36.82, PeerStatus::Online);
        peer.status = None;
        let result = load(sovereign(), vec![peer]);
        assert_eq!(
            result.unwrap_err(),
            TopologyError::MissingPeerStatus("KEN-02".to_string())
        );
    }

    #[test]
    fn test_no_peers_means_no_links() {
        let view = load(sovereign(), vec![]).unwrap();
        assert!(view.links().is_empty());
    }

    #[test]
    fn test_links_reflect_reloaded_status() {
        let peers = |status| vec![MeshNode::peer("KEN-02", -1.29, 36.82, status)];

        let before = load(sovereign(), peers(PeerStatus::Syncing)).unwrap();
        assert_eq!(before.links()[0].color, SYNCING_LINK_COLOR);

        let after = load(sovereign(), peers(PeerStatus::Online)).unwrap();
        assert_eq!(after.links()[0].color, ONLINE_LINK_COLOR);
    }
}
