//! Parser fuer das JSON-Diagrammformat.

use anyhow::{bail, Context, Result};
use glam::DVec2;

use crate::core::{Diagram, DiagramEdge, DiagramNode, EdgeDirection};
use crate::geometry::{EdgeShape, Side};

use super::DiagramRecord;

/// Parsed ein Diagramm aus einem JSON-String.
///
/// Validiert Kanten-Indizes und Richtungs-Strings wie der Editor beim
/// Oeffnen einer Datei; fehlerhafte Dateien werden abgelehnt statt ein
/// halbes Diagramm zu liefern.
pub fn parse_diagram_json(json_content: &str) -> Result<Diagram> {
    let record: DiagramRecord =
        serde_json::from_str(json_content).context("Fehler beim Parsen des JSON")?;

    let mut diagram = Diagram::new();
    let node_count = record.nodes.len();

    let mut node_ids = Vec::with_capacity(node_count);
    for (index, node) in record.nodes.into_iter().enumerate() {
        let id = (index + 1) as u64;
        let loaded = DiagramNode {
            id,
            center: DVec2::new(node.x, node.y),
            radius: node.radius,
            is_start: node.is_start,
            is_accept: node.is_accept,
            label: node.label,
        };
        if !diagram.insert_node(loaded) {
            bail!("Doppelte Node-ID beim Laden");
        }
        node_ids.push(id);
    }

    for edge in record.edges {
        if edge.node_start >= node_count {
            bail!("node_start Index ausserhalb des gueltigen Bereichs");
        }
        if edge.node_end >= node_count {
            bail!("node_end Index ausserhalb des gueltigen Bereichs");
        }

        let direction = parse_direction(&edge.edge_direction)?;
        let start_id = node_ids[edge.node_start];
        let end_id = node_ids[edge.node_end];

        let shape = if start_id == end_id {
            let angle = edge
                .angle
                .context("Self-Loop-Kante ohne angle-Feld")?;
            EdgeShape::SelfLoop { angle }
        } else {
            let height = edge
                .arc_chord_height
                .context("Kante ohne arc_chord_height-Feld")?;
            let side = match edge.arc_side.context("Kante ohne arc_side-Feld")? {
                1 => Side::Positive,
                -1 => Side::Negative,
                other => bail!("Ungueltige arc_side {other}, erwartet +1 oder -1"),
            };
            EdgeShape::Chord { height, side }
        };

        let added = diagram.add_edge(DiagramEdge {
            start_id,
            end_id,
            shape,
            direction,
            label: edge.label,
        });
        if !added {
            bail!("Kante referenziert fehlende Nodes");
        }
    }

    log::debug!(
        "Diagramm geladen: {} Nodes, {} Kanten",
        diagram.node_count(),
        diagram.edge_count()
    );

    Ok(diagram)
}

fn parse_direction(value: &str) -> Result<EdgeDirection> {
    match value {
        "NONE" => Ok(EdgeDirection::None),
        "SINGLE" => Ok(EdgeDirection::Single),
        "DOUBLE" => Ok(EdgeDirection::Double),
        other => bail!("Unbekannte Kantenrichtung: {other}"),
    }
}
