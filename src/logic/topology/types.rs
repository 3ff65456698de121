//! Topology Types

use serde::{Deserialize, Serialize};

/// Mesh connection color for online peers
pub const ONLINE_LINK_COLOR: &str = "#00732E";

/// Mesh connection color for peers still syncing
pub const SYNCING_LINK_COLOR: &str = "#C69214";

/// Stroke weight for mesh connections
pub const LINK_WEIGHT: f32 = 2.0;

/// Role of a participant in the surveillance mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// This node, the anchor every link starts from
    #[serde(rename = "self")]
    Sovereign,
    Peer,
}

/// Link health of a peer as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerStatus {
    Online,
    Syncing,
}

impl PeerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeerStatus::Online => "online",
            PeerStatus::Syncing => "syncing",
        }
    }

    /// Connection color on the mesh map; an exact two-way mapping,
    /// no third visual state.
    pub fn link_color(&self) -> &'static str {
        match self {
            PeerStatus::Online => ONLINE_LINK_COLOR,
            PeerStatus::Syncing => SYNCING_LINK_COLOR,
        }
    }
}

/// A participant in the mesh topology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshNode {
    /// Short node code, e.g. "ETH-01"
    pub id: String,
    /// WGS84 degrees
    pub lat: f64,
    pub lng: f64,
    pub role: NodeRole,
    /// Present on peers only; the sovereign node carries no link status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PeerStatus>,
}

impl MeshNode {
    pub fn sovereign(id: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: id.to_string(),
            lat,
            lng,
            role: NodeRole::Sovereign,
            status: None,
        }
    }

    pub fn peer(id: &str, lat: f64, lng: f64, status: PeerStatus) -> Self {
        Self {
            id: id.to_string(),
            lat,
            lng,
            role: NodeRole::Peer,
            status: Some(status),
        }
    }
}

/// Straight-line connection from the sovereign node to one peer.
///
/// Never stored: recomputed from the current view so link styling cannot
/// drift out of sync with node state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshLink {
    /// (lat, lng) of the sovereign node
    pub from: (f64, f64),
    /// (lat, lng) of the peer
    pub to: (f64, f64),
    pub color: &'static str,
    pub weight: f32,
}
