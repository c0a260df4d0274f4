//! Kanten-Datentyp: Endpunkte, Bogenform und Pfeilrichtung.

use std::f64::consts::FRAC_PI_4;

use crate::geometry::{EdgeShape, Side};

/// Welche Pfeilspitzen einer Kante gezeichnet werden.
///
/// Reine Render-Policy; hat keinerlei Einfluss auf die Bogenform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDirection {
    /// Keine Pfeilspitze
    None,
    /// Pfeilspitze am End-Node
    #[default]
    Single,
    /// Pfeilspitzen an beiden Nodes
    Double,
}

/// Eine Kante des Diagramms.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramEdge {
    /// ID des Start-Nodes
    pub start_id: u64,
    /// ID des End-Nodes (gleich `start_id` bei Self-Loops)
    pub end_id: u64,
    /// Bogenform; Invariante: `SelfLoop` genau dann wenn `start_id == end_id`
    pub shape: EdgeShape,
    /// Pfeilrichtung(en)
    pub direction: EdgeDirection,
    /// Anzeigename; wird nur gespeichert, Editierung liegt ausserhalb
    pub label: String,
}

impl DiagramEdge {
    /// Sehnenhoehe neu angelegter Zwei-Node-Kanten: betragsgross, damit die
    /// Kante zunaechst praktisch gerade erscheint.
    pub const DEFAULT_CHORD_HEIGHT: f64 = -100000.0;
    /// Loop-Winkel neu angelegter Self-Loops.
    pub const DEFAULT_LOOP_ANGLE: f64 = FRAC_PI_4;
    /// Label neu angelegter Kanten.
    pub const DEFAULT_LABEL: &'static str = "0";

    /// Erstellt eine Zwei-Node-Kante mit Default-Kruemmung.
    pub fn new_chord(start_id: u64, end_id: u64, direction: EdgeDirection) -> Self {
        Self {
            start_id,
            end_id,
            shape: EdgeShape::Chord {
                height: Self::DEFAULT_CHORD_HEIGHT,
                side: Side::Positive,
            },
            direction,
            label: Self::DEFAULT_LABEL.to_string(),
        }
    }

    /// Erstellt einen Self-Loop am gegebenen Node.
    pub fn new_self_loop(node_id: u64, direction: EdgeDirection) -> Self {
        Self {
            start_id: node_id,
            end_id: node_id,
            shape: EdgeShape::SelfLoop {
                angle: Self::DEFAULT_LOOP_ANGLE,
            },
            direction,
            label: Self::DEFAULT_LABEL.to_string(),
        }
    }

    /// Verbindet die Kante einen Node mit sich selbst?
    pub fn is_self_loop(&self) -> bool {
        matches!(self.shape, EdgeShape::SelfLoop { .. })
    }

    /// Haengt die Kante an dem gegebenen Node?
    pub fn connects(&self, node_id: u64) -> bool {
        self.start_id == node_id || self.end_id == node_id
    }
}
