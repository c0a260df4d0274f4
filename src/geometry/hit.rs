//! Hit-Tests: liegt ein Punkt auf der gerenderten Kantenkurve?

use glam::DVec2;

use super::{chord_arc, diamond_angle, GeometryError, NodeDisc, Side};

/// Prueft, ob `point` innerhalb der Toleranz auf dem Zwei-Punkte-Bogen liegt.
///
/// Zwei Bedingungen: der radiale Abstand zum Bogenkreis unterschreitet die
/// Toleranz, und die Winkelposition faellt in die Winkelausdehnung des
/// Bogens. Die Winkelpruefung nutzt den Diamant-Winkel als reine
/// Ordnungsfunktion — keine inverse Trigonometrie im Maus-Pfad.
pub fn hit_chord_arc(
    start: NodeDisc,
    end: NodeDisc,
    height: f64,
    side: Side,
    point: DVec2,
    tolerance: f64,
) -> Result<bool, GeometryError> {
    let arc = chord_arc(start, end, height, side)?;

    let mouse = point - arc.center;
    let mouse_len = mouse.length();
    if (mouse_len - arc.radius).abs() >= tolerance {
        return Ok(false);
    }

    // Die Radius-Pruefung oben schliesst das Bogen-Zentrum aus, daher ist
    // der Diamant-Winkel hier definiert
    let theta_mouse = diamond_angle(mouse);
    let theta_start = diamond_angle(start.center - arc.center);
    let theta_end = diamond_angle(end.center - arc.center);

    // Winkelgrenzen in Traversierungsreihenfolge der Seite
    let (from, to) = match side {
        Side::Positive => (theta_end, theta_start),
        Side::Negative => (theta_start, theta_end),
    };

    Ok(in_diamond_range(from, to, theta_mouse))
}

/// Prueft, ob `point` innerhalb der Toleranz auf dem Self-Loop-Kreis liegt.
///
/// Geprueft wird nur das radiale Band um den Loop-Kreis; die
/// Winkelausdehnung bleibt bewusst ungeprueft, der komplette Loop-Kreis ist
/// klickempfindlich. Loops sind klein und fast vollstaendig sichtbar, daher
/// bleibt diese Vereinfachung erhalten statt sie zu "reparieren".
pub fn hit_self_loop(node: NodeDisc, angle: f64, point: DVec2, tolerance: f64) -> bool {
    let arc = super::self_loop_arc(node, angle);
    ((point - arc.center).length() - arc.radius).abs() < tolerance
}

/// Wrap-bewusster Bereichstest auf Diamant-Winkeln.
///
/// Ueberschreitet der Bogen die 0/4-Grenze (`from > to`), zerfaellt der
/// Bereich in zwei Teilintervalle.
fn in_diamond_range(from: f64, to: f64, value: f64) -> bool {
    if from < to {
        from < value && value < to
    } else {
        value < to || value > from
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HIT_TOLERANCE;
    use glam::DVec2;

    fn disc(x: f64, y: f64, radius: f64) -> NodeDisc {
        NodeDisc::new(DVec2::new(x, y), radius)
    }

    #[test]
    fn point_on_arc_hits_point_off_radius_misses() {
        let start = disc(0.0, 0.0, 30.0);
        let end = disc(200.0, 0.0, 30.0);

        // height 0: Halbkreis mit Zentrum (100, 0) und Radius 100; die Seite
        // Positive verlaeuft durch (100, 100)
        let hit = hit_chord_arc(
            start,
            end,
            0.0,
            Side::Positive,
            DVec2::new(100.0, 100.0),
            HIT_TOLERANCE,
        )
        .expect("Hit-Test erwartet");
        assert!(hit);

        // Gleicher Winkel, aber 2 Toleranzen zu weit draussen
        let miss = hit_chord_arc(
            start,
            end,
            0.0,
            Side::Positive,
            DVec2::new(100.0, 100.0 + 2.0 * HIT_TOLERANCE),
            HIT_TOLERANCE,
        )
        .expect("Hit-Test erwartet");
        assert!(!miss);
    }

    #[test]
    fn angular_range_is_respected() {
        let start = disc(0.0, 0.0, 30.0);
        let end = disc(200.0, 0.0, 30.0);

        // Der Bogen der Seite Positive verlaeuft durch (100, 100); der
        // gegenueberliegende Halbkreis durch (100, -100) gehoert nicht dazu
        let opposite = hit_chord_arc(
            start,
            end,
            0.0,
            Side::Positive,
            DVec2::new(100.0, -100.0),
            HIT_TOLERANCE,
        )
        .expect("Hit-Test erwartet");
        assert!(!opposite);

        // Die Seite Negative trifft genau dort
        let hit = hit_chord_arc(
            start,
            end,
            0.0,
            Side::Negative,
            DVec2::new(100.0, -100.0),
            HIT_TOLERANCE,
        )
        .expect("Hit-Test erwartet");
        assert!(hit);
    }

    #[test]
    fn wrap_around_range_is_handled() {
        // Vertikale Sehne: die Diamant-Winkel der Endpunkte liegen bei 1 und
        // 3, der Bereich der einen Seite umschliesst die 0/4-Grenze
        let start = disc(0.0, -100.0, 30.0);
        let end = disc(0.0, 100.0, 30.0);

        let right = hit_chord_arc(
            start,
            end,
            0.0,
            Side::Negative,
            DVec2::new(100.0, 0.0),
            HIT_TOLERANCE,
        )
        .expect("Hit-Test erwartet");
        let left = hit_chord_arc(
            start,
            end,
            0.0,
            Side::Negative,
            DVec2::new(-100.0, 0.0),
            HIT_TOLERANCE,
        )
        .expect("Hit-Test erwartet");

        assert!(right);
        assert!(!left);
    }

    #[test]
    fn degenerate_chord_is_reported() {
        let a = disc(10.0, 10.0, 30.0);
        let b = disc(10.0, 10.0, 30.0);
        assert_eq!(
            hit_chord_arc(a, b, 5.0, Side::Positive, DVec2::new(0.0, 0.0), HIT_TOLERANCE),
            Err(GeometryError::DegenerateChord)
        );
    }

    #[test]
    fn self_loop_hit_ignores_angular_position() {
        let node = disc(50.0, 50.0, 30.0);
        let angle = std::f64::consts::FRAC_PI_4;
        let arc = crate::geometry::self_loop_arc(node, angle);

        // Punkte auf dem Loop-Kreis in allen Richtungen treffen, auch
        // ausserhalb des gezeichneten 270°-Sweeps
        for step in 0..12 {
            let a = std::f64::consts::TAU * f64::from(step) / 12.0;
            let on_circle = arc.center + DVec2::new(a.cos(), a.sin()) * arc.radius;
            assert!(hit_self_loop(node, angle, on_circle, HIT_TOLERANCE));

            let outside =
                arc.center + DVec2::new(a.cos(), a.sin()) * (arc.radius + 2.0 * HIT_TOLERANCE);
            assert!(!hit_self_loop(node, angle, outside, HIT_TOLERANCE));
        }
    }
}
