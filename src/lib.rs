//! FSM Diagram Engine Library.
//! Geometrie-Kern und Datenmodell fuer einen interaktiven FSM-/Graph-Diagramm-Editor:
//! Kreisbogen-Kanten durch zwei Node-Zentren, Self-Loops, Hit-Tests,
//! Pfeilspitzen und das persistierte JSON-Diagrammformat.

pub mod core;
pub mod geometry;
pub mod json;

pub use core::{Diagram, DiagramEdge, DiagramNode, EdgeDirection};
pub use geometry::{
    chord_arc, diamond_angle, edge_arc, edge_backward_arrow, edge_forward_arrow, edge_hit,
    self_loop_arc, ArrowHead, ChordArc, EdgeArc, EdgeShape, GeometryError, LoopArc, NodeDisc,
    Side, ARROW_SIZE, HIT_TOLERANCE,
};
pub use json::{parse_diagram_json, write_diagram_json};
