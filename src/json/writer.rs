//! Writer fuer das JSON-Diagrammformat.

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::core::{Diagram, EdgeDirection};
use crate::geometry::{EdgeShape, Side};

use super::{DiagramRecord, EdgeRecord, NodeRecord};

/// Schreibt ein Diagramm als JSON-String.
///
/// Nodes werden in Einfuegereihenfolge geschrieben; Kanten referenzieren
/// sie ueber ihre Position im Array. Die Kruemmungsparameter gehen als f64
/// unveraendert in die Datei, damit ein erneutes Laden bitidentische
/// Geometrie liefert.
pub fn write_diagram_json(diagram: &Diagram) -> Result<String> {
    let mut node_index: HashMap<u64, usize> = HashMap::new();
    let mut nodes = Vec::with_capacity(diagram.node_count());

    for node in diagram.nodes_iter() {
        node_index.insert(node.id, nodes.len());
        nodes.push(NodeRecord {
            x: node.center.x,
            y: node.center.y,
            radius: node.radius,
            is_start: node.is_start,
            is_accept: node.is_accept,
            label: node.label.clone(),
        });
    }

    let mut edges = Vec::with_capacity(diagram.edge_count());
    for edge in diagram.edges_iter() {
        let node_start = *node_index
            .get(&edge.start_id)
            .context("Kanten-Start fehlt im Node-Bestand")?;
        let node_end = *node_index
            .get(&edge.end_id)
            .context("Kanten-Ende fehlt im Node-Bestand")?;

        let (angle, arc_chord_height, arc_side) = match edge.shape {
            EdgeShape::SelfLoop { angle } => (Some(angle), None, None),
            EdgeShape::Chord { height, side } => {
                let side = match side {
                    Side::Positive => 1,
                    Side::Negative => -1,
                };
                (None, Some(height), Some(side))
            }
        };

        edges.push(EdgeRecord {
            node_start,
            node_end,
            edge_direction: direction_name(edge.direction).to_string(),
            label: edge.label.clone(),
            angle,
            arc_chord_height,
            arc_side,
        });
    }

    serde_json::to_string(&DiagramRecord { nodes, edges })
        .context("Fehler beim Serialisieren des Diagramms")
}

fn direction_name(direction: EdgeDirection) -> &'static str {
    match direction {
        EdgeDirection::None => "NONE",
        EdgeDirection::Single => "SINGLE",
        EdgeDirection::Double => "DOUBLE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiagramEdge;
    use glam::DVec2;

    #[test]
    fn written_json_contains_positional_indices_and_curvature_fields() {
        let mut diagram = Diagram::new();
        let a = diagram.add_node(DVec2::new(0.0, 0.0));
        let b = diagram.add_node(DVec2::new(200.0, 0.0));
        assert!(diagram.add_edge(DiagramEdge::new_chord(a, b, EdgeDirection::Double)));
        assert!(diagram.add_edge(DiagramEdge::new_self_loop(b, EdgeDirection::Single)));

        let json = write_diagram_json(&diagram).expect("Export fehlgeschlagen");

        assert!(json.contains("\"node_start\":0"));
        assert!(json.contains("\"node_end\":1"));
        assert!(json.contains("\"arc_chord_height\":-100000.0"));
        assert!(json.contains("\"arc_side\":1"));
        assert!(json.contains("\"angle\":"));
        assert!(json.contains("\"edge_direction\":\"DOUBLE\""));
    }

    #[test]
    fn self_loop_edges_omit_chord_fields() {
        let mut diagram = Diagram::new();
        let a = diagram.add_node(DVec2::new(10.0, 10.0));
        assert!(diagram.add_edge(DiagramEdge::new_self_loop(a, EdgeDirection::Single)));

        let json = write_diagram_json(&diagram).expect("Export fehlgeschlagen");
        assert!(json.contains("\"angle\":"));
        assert!(!json.contains("arc_chord_height"));
        assert!(!json.contains("arc_side"));
    }
}
