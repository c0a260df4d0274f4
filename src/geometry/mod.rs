//! Geometrie-Kern: Kreisbogen-Kanten, Hit-Tests und Pfeilspitzen.
//!
//! Layer-neutral und rein funktional: alle Funktionen rechnen aus den
//! aktuellen Node-Positionen und Kurvenparametern; es gibt keinen internen
//! Cache. Node-Zentren duerfen sich zwischen zwei Aufrufen beliebig aendern
//! (Drag-Operationen im umgebenden Editor).

use glam::DVec2;
use thiserror::Error;

pub mod arc;
pub mod arrow;
pub mod diamond;
pub mod hit;

pub use arc::{chord_arc, self_loop_arc, ChordArc, LoopArc};
pub use arrow::{
    backward_arrow, forward_arrow, self_loop_backward_arrow, self_loop_forward_arrow, ArrowHead,
};
pub use diamond::diamond_angle;
pub use hit::{hit_chord_arc, hit_self_loop};

/// Kantenlaenge der Pfeilspitzen in Screen-Einheiten.
/// Fester Wert, skaliert bewusst nicht mit Bogen- oder Node-Radius.
pub const ARROW_SIZE: f64 = 12.0;

/// Default-Toleranz fuer Kurven-Hit-Tests in Screen-Einheiten (bei Zoom 1:1).
/// Aufrufer mit anderem Masstab rechnen die Toleranz vorher um.
pub const HIT_TOLERANCE: f64 = 6.0;

/// Abstand des Label-Ankers von der Kurve in Screen-Einheiten.
pub const LABEL_OFFSET: f64 = 25.0;

/// Betragsmaessige Obergrenze fuer die Sehnenhoehe.
/// Persistierte Extremwerte wuerden sonst zu nicht-endlichen Radien fuehren.
pub const MAX_CHORD_HEIGHT: f64 = 1.0e9;

/// Fehler des Geometrie-Kerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Die Sehne zwischen den beiden Node-Zentren hat Laenge null; ein
    /// Bogen durch zwei identische Punkte ist nicht definiert.
    #[error("Node-Zentren fallen zusammen, Sehne hat Laenge null")]
    DegenerateChord,
}

/// Kreis-Sicht auf einen Node: Zentrum und Radius.
///
/// Wird pro Abfrage vom Aufrufer geliefert; der Geometrie-Kern haelt keine
/// Referenz auf das Diagramm-Modell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeDisc {
    /// Zentrum in Welt-Koordinaten
    pub center: DVec2,
    /// Radius (> 0)
    pub radius: f64,
}

impl NodeDisc {
    /// Erstellt eine Kreis-Sicht aus Zentrum und Radius.
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Welche der beiden Kreise durch die zwei Node-Zentren gewaehlt wird,
/// d.h. zu welcher Seite der Bogen ausbeult und in welcher Reihenfolge
/// seine Endwinkel traversiert werden.
///
/// Persistiert als `arc_side` `+1` (`Positive`) bzw. `-1` (`Negative`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// `arc_side = +1`
    #[default]
    Positive,
    /// `arc_side = -1`
    Negative,
}

impl Side {
    /// Vorzeichen der Seite als Faktor fuer die Sign-Konventionen
    /// (Winkelreihenfolge, Pfeil-Offsets, Label-Anker).
    pub fn sign(self) -> f64 {
        match self {
            Side::Positive => 1.0,
            Side::Negative => -1.0,
        }
    }
}

/// Form einer Kante: Bogen durch zwei Node-Zentren oder Self-Loop.
///
/// Genau eine Fallunterscheidung pro Kante; die Geometrie-Funktionen
/// verzweigen auf dieser Variante statt ueberall `start == end` zu pruefen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeShape {
    /// Bogen durch zwei verschiedene Node-Zentren.
    Chord {
        /// Vorzeichenbehafteter Abstand vom Sehnen-Mittelpunkt zum
        /// Bogen-Zentrum, gemessen entlang der Sehnen-Senkrechten.
        /// `0` ergibt einen Halbkreis, grosse Betraege naehern die Gerade an.
        height: f64,
        /// Gewaehlter Kreis bzw. Ausbeul-Seite.
        side: Side,
    },
    /// Schleife von einem Node zu sich selbst.
    SelfLoop {
        /// Polarwinkel (Radiant) am Node, an dem die Schleife haengt.
        angle: f64,
    },
}

/// Berechneter Kantenbogen, je nach Kantenform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeArc {
    /// Bogen durch zwei Node-Zentren
    Chord(ChordArc),
    /// Self-Loop-Bogen
    Loop(LoopArc),
}

/// Berechnet den Bogen einer Kante aus den aktuellen Node-Kreisen.
///
/// Bei [`EdgeShape::SelfLoop`] wird nur `start` gelesen.
pub fn edge_arc(start: NodeDisc, end: NodeDisc, shape: EdgeShape) -> Result<EdgeArc, GeometryError> {
    match shape {
        EdgeShape::Chord { height, side } => {
            Ok(EdgeArc::Chord(chord_arc(start, end, height, side)?))
        }
        EdgeShape::SelfLoop { angle } => Ok(EdgeArc::Loop(self_loop_arc(start, angle))),
    }
}

/// Prueft, ob ein Punkt innerhalb der Toleranz auf der Kantenkurve liegt.
pub fn edge_hit(
    start: NodeDisc,
    end: NodeDisc,
    shape: EdgeShape,
    point: DVec2,
    tolerance: f64,
) -> Result<bool, GeometryError> {
    match shape {
        EdgeShape::Chord { height, side } => hit_chord_arc(start, end, height, side, point, tolerance),
        EdgeShape::SelfLoop { angle } => Ok(hit_self_loop(start, angle, point, tolerance)),
    }
}

/// Pfeilspitze am End-Node der Kante.
pub fn edge_forward_arrow(
    start: NodeDisc,
    end: NodeDisc,
    shape: EdgeShape,
) -> Result<ArrowHead, GeometryError> {
    match shape {
        EdgeShape::Chord { height, side } => forward_arrow(start, end, height, side),
        EdgeShape::SelfLoop { angle } => Ok(self_loop_forward_arrow(start, angle)),
    }
}

/// Pfeilspitze am Start-Node der Kante.
pub fn edge_backward_arrow(
    start: NodeDisc,
    end: NodeDisc,
    shape: EdgeShape,
) -> Result<ArrowHead, GeometryError> {
    match shape {
        EdgeShape::Chord { height, side } => backward_arrow(start, end, height, side),
        EdgeShape::SelfLoop { angle } => Ok(self_loop_backward_arrow(start, angle)),
    }
}
