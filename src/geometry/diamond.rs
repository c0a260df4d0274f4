//! Diamant-Winkel: billiger, streng monotoner Ersatz fuer `atan2`.

use glam::DVec2;

/// Diamant-Winkel eines Vektors, Wertebereich `[0, 4)`.
///
/// Stueckweise lineare Ordnungsfunktion: waechst streng monoton mit dem
/// echten Polarwinkel und ist skaleninvariant, liefert aber KEINEN Winkel
/// in Radiant oder Grad. Nur fuer Vergleiche von Winkelpositionen nutzen,
/// nie fuer Zeichen-Sweeps. Die Werte 0, 1, 2, 3 entsprechen den vier
/// Achsenrichtungen (+x, +y, -x, -y).
///
/// Am Ursprung undefiniert (`0/0`); Aufrufer muessen `v != 0` sicherstellen.
/// Im Hit-Test uebernimmt das die Radius-Toleranz-Pruefung, die das
/// Bogen-Zentrum selbst ausschliesst.
pub fn diamond_angle(v: DVec2) -> f64 {
    let t = v.y / (v.x.abs() + v.y.abs());
    if v.x < 0.0 {
        2.0 - t
    } else if v.y < 0.0 {
        t + 4.0
    } else {
        t
    }
}
