//! JSON Import/Export fuer Diagramm-Dateien.
//!
//! Das Format speichert Nodes als Array und referenziert sie in den Kanten
//! ueber positionsbasierte Indizes. Zwei-Node-Kanten persistieren ihre
//! Kruemmung als `arc_chord_height` + `arc_side` (+1/-1), Self-Loops als
//! `angle`. Datei-I/O liegt beim Aufrufer; hier wird nur zwischen String
//! und [`crate::core::Diagram`] uebersetzt.

use serde::{Deserialize, Serialize};

pub mod reader;
pub mod writer;

pub use reader::parse_diagram_json;
pub use writer::write_diagram_json;

/// Persistierte Form eines Nodes.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct NodeRecord {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub is_start: bool,
    pub is_accept: bool,
    pub label: String,
}

/// Persistierte Form einer Kante.
///
/// `angle` ist nur bei Self-Loops gesetzt, `arc_chord_height`/`arc_side`
/// nur bei Zwei-Node-Kanten.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct EdgeRecord {
    pub node_start: usize,
    pub node_end: usize,
    pub edge_direction: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_chord_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_side: Option<i32>,
}

/// Persistierte Form des gesamten Diagramms.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct DiagramRecord {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}
