//! Orientierungs-Interpolation zwischen zwei Kontrollpunkten.
//!
//! Zwei Semantiken, wählbar über [`RotationMode`]:
//! - Quaternion-SLERP mit Shortest-Arc-Korrektur und NLERP-Fallback
//!   bei nahezu parallelen Eingaben
//! - komponentenweises LERP auf Euler-Winkeln, bewusst ohne
//!   Winkel-Wraparound-Kanonisierung

use super::{RotationMode, TrackPoint};
use glam::{EulerRot, Quat, Vec3};

/// Schwellwert für den NLERP-Fallback: ist `dot(a, b) > 1 - ε`, liegen die
/// Quaternionen so nah beieinander, dass die SLERP-Formel durch
/// `sin(θ) ≈ 0` instabil würde.
pub const SLERP_PARALLEL_EPSILON: f32 = 1e-5;

/// Spherical Linear Interpolation zwischen zwei Einheitsquaternionen.
///
/// Bei `dot(a, b) < 0` wird `b` negiert (q und -q beschreiben dieselbe
/// Rotation), damit immer der kurze Bogen genommen wird. Das Ergebnis ist
/// renormalisiert; `t = 0` liefert `a`, `t = 1` liefert `b` (bis auf
/// numerisches Epsilon und Vorzeichen).
pub fn slerp(a: Quat, b: Quat, t: f32) -> Quat {
    let mut b = b;
    let mut dot = a.dot(b);

    // Shortest-Arc-Korrektur
    if dot < 0.0 {
        b = -b;
        dot = -dot;
    }

    if dot > 1.0 - SLERP_PARALLEL_EPSILON {
        // Nahezu parallel: normalisiertes LERP statt Division durch sin(θ) ≈ 0.
        // Nach der Vorzeichenkorrektur ist dot ≥ 0, die Summe kann sich also
        // nicht auslöschen.
        return (a * (1.0 - t) + b * t).normalize();
    }

    let theta = dot.clamp(-1.0, 1.0).acos();
    let sin_theta = theta.sin();
    let weight_a = ((1.0 - t) * theta).sin() / sin_theta;
    let weight_b = (t * theta).sin() / sin_theta;

    (a * weight_a + b * weight_b).normalize()
}

/// Komponentenweises LERP auf Euler-Winkeln (Radiant).
///
/// Kein Wraparound-Handling: 350°→10° interpoliert über den langen Weg.
/// Genau diese Eigenschaft macht den Modus-Vergleich (SLERP vs. Euler-LERP)
/// für den Nutzer sichtbar.
pub fn lerp_euler(e1: Vec3, e2: Vec3, t: f32) -> Vec3 {
    e1 + (e2 - e1) * t
}

/// Interpoliert die Orientierung zwischen zwei Kontrollpunkten unter der
/// aktiven Repräsentation. Das Euler-Ergebnis wird für die Präsentation
/// in ein Quaternion zurückkonvertiert.
pub fn interpolate(a: &TrackPoint, b: &TrackPoint, mode: RotationMode, t: f32) -> Quat {
    match mode {
        RotationMode::Quaternion => slerp(a.orientation, b.orientation, t),
        RotationMode::Euler => euler_to_quat(lerp_euler(a.euler_angles, b.euler_angles, t)),
    }
}

/// Euler-Winkel (XYZ, Radiant) → Einheitsquaternion. Immer wohldefiniert.
pub fn euler_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z).normalize()
}

/// Einheitsquaternion → Euler-Winkel (XYZ, Radiant).
///
/// In Gimbal-Lock-Konfigurationen (Pitch ≈ ±90°) ist die Zerlegung mehrdeutig;
/// das zurückgegebene Tripel ist dann nur eine der gültigen Lösungen. Das
/// Quaternion selbst bleibt davon unberührt und autoritativ.
pub fn quat_to_euler(quat: Quat) -> Vec3 {
    let (x, y, z) = quat.to_euler(EulerRot::XYZ);
    Vec3::new(x, y, z)
}
