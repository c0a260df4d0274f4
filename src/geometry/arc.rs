//! Kreisbogen-Anpassung: Bogen durch zwei Node-Zentren und Self-Loop-Konstruktion.

use glam::DVec2;
use std::f64::consts::SQRT_2;

use super::{GeometryError, NodeDisc, Side, LABEL_OFFSET, MAX_CHORD_HEIGHT};

/// Kreisbogen durch die Zentren zweier verschiedener Nodes.
///
/// `start_angle`/`end_angle` sind die echten Polarwinkel (Radiant) der beiden
/// Node-Zentren um das Bogen-Zentrum, bereits in Traversierungsreihenfolge
/// gemaess [`Side`]. Die Render-Schicht zeichnet den Sweep von `start_angle`
/// nach `end_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordArc {
    /// Zentrum des Bogenkreises
    pub center: DVec2,
    /// Radius des Bogenkreises
    pub radius: f64,
    /// Polarwinkel des Sweep-Anfangs (Radiant)
    pub start_angle: f64,
    /// Polarwinkel des Sweep-Endes (Radiant)
    pub end_angle: f64,
    /// Ankerpunkt fuer das Kanten-Label, seitlich der Kurve
    pub label_anchor: DVec2,
}

/// Self-Loop-Bogen: fester Kreis am Node-Rand.
///
/// Keine Zwei-Punkte-Anpassung — es gibt nur einen Node, also legt die
/// Konstruktion Groesse und Sweep fest. Die Sweep-Winkel bleiben in Grad,
/// das ist der Zeichen-Kontrakt der Render-Schicht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopArc {
    /// Zentrum des Loop-Kreises
    pub center: DVec2,
    /// Radius des Loop-Kreises (gleich dem Node-Radius)
    pub radius: f64,
    /// Startwinkel des Zeichen-Sweeps in Grad
    pub sweep_start_deg: f64,
    /// Ausdehnung des Zeichen-Sweeps in Grad (immer 270)
    pub sweep_extent_deg: f64,
    /// Ankerpunkt fuer das Kanten-Label, radial hinter der Schleife
    pub label_anchor: DVec2,
}

/// Passt einen Kreisbogen durch die Zentren von `start` und `end`.
///
/// `height` ist der vorzeichenbehaftete Abstand vom Sehnen-Mittelpunkt zum
/// Bogen-Zentrum entlang der Sehnen-Senkrechten; `side` waehlt einen der
/// beiden moeglichen Kreise und damit die Sweep-Richtung. `height` wird auf
/// [`MAX_CHORD_HEIGHT`] begrenzt, damit der Radius endlich bleibt.
pub fn chord_arc(
    start: NodeDisc,
    end: NodeDisc,
    height: f64,
    side: Side,
) -> Result<ChordArc, GeometryError> {
    let half = (end.center - start.center) / 2.0;
    let half_len = half.length();
    if half_len < f64::EPSILON {
        return Err(GeometryError::DegenerateChord);
    }

    let height = height.clamp(-MAX_CHORD_HEIGHT, MAX_CHORD_HEIGHT);

    // Einheitsvektor senkrecht zur Sehne, feste Orientierung
    let perp = DVec2::new(-half.y, half.x) / half_len;
    let radius_vec = perp * height + half;
    let radius = radius_vec.length();
    let center = start.center + radius_vec;

    let angle_of_start = polar_angle(start.center - center);
    let angle_of_end = polar_angle(end.center - center);
    let (start_angle, end_angle) = match side {
        Side::Positive => (angle_of_start, angle_of_end),
        Side::Negative => (angle_of_end, angle_of_start),
    };

    let s = side.sign();
    let label_anchor = start.center + half + s * perp * (radius + s * height + LABEL_OFFSET);

    Ok(ChordArc {
        center,
        radius,
        start_angle,
        end_angle,
        label_anchor,
    })
}

/// Konstruiert den Self-Loop-Bogen eines Nodes.
///
/// Das Loop-Zentrum liegt im Abstand `radius·√2` vom Node-Zentrum in
/// Richtung `angle`; der Loop-Kreis hat denselben Radius wie der Node und
/// bleibt damit optisch am Node-Rand verankert.
pub fn self_loop_arc(node: NodeDisc, angle: f64) -> LoopArc {
    let dir = DVec2::new(angle.cos(), angle.sin());
    LoopArc {
        center: node.center + dir * node.radius * SQRT_2,
        radius: node.radius,
        sweep_start_deg: -angle.to_degrees() - 135.0,
        sweep_extent_deg: 270.0,
        label_anchor: node.center + dir * (node.radius * (SQRT_2 + 1.0) + LABEL_OFFSET),
    }
}

/// Echter Polarwinkel eines Vektors in Radiant.
fn polar_angle(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}
