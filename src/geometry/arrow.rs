//! Pfeilspitzen: Dreiecke tangential zum Kantenbogen am Node-Rand.

use glam::DVec2;
use std::f64::consts::FRAC_PI_4;

use super::{GeometryError, NodeDisc, Side, ARROW_SIZE};

/// Pfeilspitzen-Dreieck in Zeichenreihenfolge `left`, `right`, `tip`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    /// Linke Basis-Ecke
    pub left: DVec2,
    /// Rechte Basis-Ecke
    pub right: DVec2,
    /// Spitze (liegt auf dem Rand des Ziel-Nodes)
    pub tip: DVec2,
}

impl ArrowHead {
    /// Eckpunkte als Polygon-Array.
    pub fn points(&self) -> [DVec2; 3] {
        [self.left, self.right, self.tip]
    }
}

/// Pfeilspitze am End-Node eines Zwei-Punkte-Bogens.
pub fn forward_arrow(
    start: NodeDisc,
    end: NodeDisc,
    height: f64,
    side: Side,
) -> Result<ArrowHead, GeometryError> {
    let half = (end.center - start.center) / 2.0;
    let half_len = half.length();
    if half_len < f64::EPSILON {
        return Err(GeometryError::DegenerateChord);
    }

    // Radiusvektor vom Bogen-Zentrum zum End-Node; die Senkrechte ist hier
    // entgegengesetzt zu der der Bogen-Anpassung orientiert
    let perp = DVec2::new(half.y, -half.x) / half_len;
    let radius_vec = perp * height + half;

    let s = side.sign();
    Ok(chord_arrow(end, radius_vec, -s, s))
}

/// Pfeilspitze am Start-Node eines Zwei-Punkte-Bogens.
///
/// Spiegelbild von [`forward_arrow`]: Radiusvektor zum Start-Node und
/// umgekehrte Vorzeichen fuer Tangenten-Drehung und Basis-Offset.
pub fn backward_arrow(
    start: NodeDisc,
    end: NodeDisc,
    height: f64,
    side: Side,
) -> Result<ArrowHead, GeometryError> {
    let half = (end.center - start.center) / 2.0;
    let half_len = half.length();
    if half_len < f64::EPSILON {
        return Err(GeometryError::DegenerateChord);
    }

    let perp = DVec2::new(half.y, -half.x) / half_len;
    let radius_vec = perp * height - half;

    let s = side.sign();
    Ok(chord_arrow(start, radius_vec, s, -s))
}

/// Gemeinsame Konstruktion fuer beide Bogen-Pfeilspitzen.
///
/// Dreht den Radiusvektor um den doppelten Winkel θ mit
/// `sin θ = node.radius / (2·|radius_vec|)` und erhaelt so den
/// Quasi-Tangentenvektor: eine Naeherung der Bogentangente am Schnittpunkt
/// mit dem Node-Rand, exakt genug solange der Bogenradius den Node-Radius
/// deutlich uebersteigt. Die Spitze landet dabei genau auf dem Node-Rand.
fn chord_arrow(node: NodeDisc, radius_vec: DVec2, cos_sign: f64, base_sign: f64) -> ArrowHead {
    let radius_len = radius_vec.length();

    // Ueberlappende Nodes: sin θ auf 1 begrenzen, damit die Wurzel reell bleibt
    let sin_theta = (node.radius / (2.0 * radius_len)).min(1.0);
    let cos_theta = (1.0 - sin_theta * sin_theta).sqrt() * cos_sign;

    // Doppelwinkel statt zweifacher Drehung
    let sin_two_theta = 2.0 * sin_theta * cos_theta;
    let cos_two_theta = cos_theta * cos_theta - sin_theta * sin_theta;

    let quasi_tangent = DVec2::new(
        cos_two_theta * radius_vec.x + sin_two_theta * radius_vec.y,
        -sin_two_theta * radius_vec.x + cos_two_theta * radius_vec.y,
    );

    let tip = node.center - radius_vec + quasi_tangent;
    let base =
        tip + base_sign * DVec2::new(-quasi_tangent.y, quasi_tangent.x) / radius_len * ARROW_SIZE;
    let lateral = quasi_tangent / radius_len * (ARROW_SIZE / 2.0);

    ArrowHead {
        left: base + lateral,
        right: base - lateral,
        tip,
    }
}

/// Pfeilspitze am "Ende" eines Self-Loops.
///
/// Feste Konstruktion: Spitze und Basis liegen 45° vor dem Loop-Winkel auf
/// dem Node-Rand bzw. `ARROW_SIZE` dahinter, unabhaengig vom Loop-Kreis.
pub fn self_loop_forward_arrow(node: NodeDisc, angle: f64) -> ArrowHead {
    self_loop_arrow(node, angle - FRAC_PI_4, angle + FRAC_PI_4)
}

/// Pfeilspitze am "Anfang" eines Self-Loops (Spiegelbild der Forward-Spitze).
pub fn self_loop_backward_arrow(node: NodeDisc, angle: f64) -> ArrowHead {
    self_loop_arrow(node, angle + FRAC_PI_4, angle - FRAC_PI_4)
}

fn self_loop_arrow(node: NodeDisc, ray_angle: f64, tangent_angle: f64) -> ArrowHead {
    let ray = DVec2::new(ray_angle.cos(), ray_angle.sin());
    let tangent = DVec2::new(tangent_angle.cos(), tangent_angle.sin());

    let tip = node.center + ray * node.radius;
    let base = node.center + ray * (node.radius + ARROW_SIZE);
    let lateral = tangent * (ARROW_SIZE / 2.0);

    ArrowHead {
        left: base + lateral,
        right: base - lateral,
        tip,
    }
}
