//! Diagramm-Node: kreisfoermiger Zustand eines FSM-/Graph-Diagramms.

use glam::DVec2;

use crate::geometry::NodeDisc;

/// Ein Zustand/Knoten des Diagramms.
///
/// Das Modell haelt Position und Radius als Ground Truth; abgeleitete
/// Geometrie (Kantenboegen, Pfeile) wird nie hier gecacht, sondern pro
/// Abfrage aus der aktuellen Kreis-Sicht berechnet.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramNode {
    /// Eindeutige ID innerhalb des Diagramms
    pub id: u64,
    /// Zentrum in Welt-Koordinaten
    pub center: DVec2,
    /// Radius des Node-Kreises
    pub radius: f64,
    /// Markierung als Startzustand
    pub is_start: bool,
    /// Markierung als akzeptierender Zustand
    pub is_accept: bool,
    /// Anzeigename; wird nur gespeichert, Editierung liegt ausserhalb
    pub label: String,
}

impl DiagramNode {
    /// Kleinster zulaessiger Node-Radius.
    pub const MIN_RADIUS: f64 = 20.0;
    /// Radius neu angelegter Nodes.
    pub const DEFAULT_RADIUS: f64 = 30.0;

    /// Erstellt einen neuen Node mit Default-Radius und generiertem Label.
    pub fn new(id: u64, center: DVec2) -> Self {
        Self {
            id,
            center,
            radius: Self::DEFAULT_RADIUS,
            is_start: false,
            is_accept: false,
            label: format!("q_{id}"),
        }
    }

    /// Kreis-Sicht fuer den Geometrie-Kern.
    pub fn disc(&self) -> NodeDisc {
        NodeDisc::new(self.center, self.radius)
    }

    /// Setzt den Radius, begrenzt auf [`Self::MIN_RADIUS`].
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(Self::MIN_RADIUS);
    }

    /// Prueft, ob ein Punkt im Node-Kreis liegt (Picking).
    pub fn contains(&self, point: DVec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}
