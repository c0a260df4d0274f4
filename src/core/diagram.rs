//! Diagramm-Container: Nodes, Kanten und Punkt-Picking.

use glam::DVec2;
use indexmap::IndexMap;

use crate::geometry::{self, EdgeArc, GeometryError, NodeDisc};

use super::{DiagramEdge, DiagramNode};

/// Vollstaendiges FSM-/Graph-Diagramm.
///
/// Die Nodes liegen in einer geordneten Map: die Einfuegereihenfolge
/// bestimmt sowohl die Z-Ordnung beim Picking als auch die positionsbasierten
/// Node-Indizes des persistierten JSON-Formats.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    nodes: IndexMap<u64, DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl Diagram {
    /// Erstellt ein leeres Diagramm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Kanten.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Naechste freie Node-ID.
    pub fn next_node_id(&self) -> u64 {
        self.nodes.keys().max().copied().unwrap_or(0) + 1
    }

    /// Legt einen neuen Node an der Position an und gibt seine ID zurueck.
    pub fn add_node(&mut self, center: DVec2) -> u64 {
        let id = self.next_node_id();
        self.nodes.insert(id, DiagramNode::new(id, center));
        id
    }

    /// Fuegt einen fertig konstruierten Node ein (Laden aus Datei).
    /// Gibt `false` zurueck, wenn die ID bereits vergeben ist.
    pub fn insert_node(&mut self, node: DiagramNode) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(node.id, node);
        true
    }

    /// Entfernt einen Node inklusive aller angebundenen Kanten.
    pub fn remove_node(&mut self, node_id: u64) -> Option<DiagramNode> {
        let removed = self.nodes.shift_remove(&node_id);
        if removed.is_some() {
            self.edges.retain(|edge| !edge.connects(node_id));
        }
        removed
    }

    /// Liefert einen Node per ID.
    pub fn node(&self, node_id: u64) -> Option<&DiagramNode> {
        self.nodes.get(&node_id)
    }

    /// Liefert einen Node mutierbar per ID.
    pub fn node_mut(&mut self, node_id: u64) -> Option<&mut DiagramNode> {
        self.nodes.get_mut(&node_id)
    }

    /// Aktualisiert die Position eines Nodes.
    pub fn update_node_position(&mut self, node_id: u64, new_center: DVec2) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };
        node.center = new_center;
        true
    }

    /// Iterator ueber alle Nodes in Einfuegereihenfolge.
    pub fn nodes_iter(&self) -> impl Iterator<Item = &DiagramNode> {
        self.nodes.values()
    }

    /// Fuegt eine Kante hinzu.
    ///
    /// Gibt `false` zurueck, wenn ein Endpunkt fehlt oder die Bogenform
    /// nicht zur Endpunkt-Identitaet passt (`SelfLoop` verlangt
    /// `start_id == end_id` und umgekehrt).
    pub fn add_edge(&mut self, edge: DiagramEdge) -> bool {
        if !self.nodes.contains_key(&edge.start_id) || !self.nodes.contains_key(&edge.end_id) {
            return false;
        }
        if edge.is_self_loop() != (edge.start_id == edge.end_id) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Liefert eine Kante per Index.
    pub fn edge(&self, index: usize) -> Option<&DiagramEdge> {
        self.edges.get(index)
    }

    /// Liefert eine Kante mutierbar per Index.
    pub fn edge_mut(&mut self, index: usize) -> Option<&mut DiagramEdge> {
        self.edges.get_mut(index)
    }

    /// Entfernt eine Kante per Index.
    pub fn remove_edge(&mut self, index: usize) -> Option<DiagramEdge> {
        if index < self.edges.len() {
            Some(self.edges.remove(index))
        } else {
            None
        }
    }

    /// Iterator ueber alle Kanten.
    pub fn edges_iter(&self) -> impl Iterator<Item = &DiagramEdge> {
        self.edges.iter()
    }

    /// Kreis-Sichten der beiden Endpunkte einer Kante.
    pub fn edge_discs(&self, edge: &DiagramEdge) -> Option<(NodeDisc, NodeDisc)> {
        let start = self.nodes.get(&edge.start_id)?.disc();
        let end = self.nodes.get(&edge.end_id)?.disc();
        Some((start, end))
    }

    /// Berechnet den aktuellen Bogen einer Kante per Index.
    pub fn edge_arc(&self, index: usize) -> Option<Result<EdgeArc, GeometryError>> {
        let edge = self.edges.get(index)?;
        let (start, end) = self.edge_discs(edge)?;
        Some(geometry::edge_arc(start, end, edge.shape))
    }

    /// Findet den obersten Node unter dem Punkt.
    ///
    /// Zuletzt eingefuegte Nodes liegen optisch oben und gewinnen daher.
    pub fn node_at(&self, point: DVec2) -> Option<u64> {
        self.nodes
            .values()
            .rev()
            .find(|node| node.contains(point))
            .map(|node| node.id)
    }

    /// Findet die erste Kante, deren Kurve der Punkt trifft.
    ///
    /// Kanten mit degenerierter Geometrie (zusammengefallene Node-Zentren)
    /// gelten als nicht treffbar statt den ganzen Pick scheitern zu lassen.
    pub fn edge_at(&self, point: DVec2, tolerance: f64) -> Option<usize> {
        self.edges.iter().position(|edge| {
            let Some((start, end)) = self.edge_discs(edge) else {
                return false;
            };
            geometry::edge_hit(start, end, edge.shape, point, tolerance).unwrap_or(false)
        })
    }
}
