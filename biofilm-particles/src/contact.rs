use biofilm_numerical::{closest_point_on_segment, closest_points_on_segments, Vec2};

use crate::particle::{Cell, Eps, Particle};

/// Signed surface-to-surface separation; negative when the two particles interpenetrate
fn surface_separation(a: &Particle, b: &Particle) -> f64 {
    match (a, b) {
        (Particle::Eps(ea), Particle::Eps(eb)) => {
            ea.position.distance_to(&eb.position) - (ea.radius + eb.radius)
        }
        (Particle::Eps(e), Particle::Cell(c)) | (Particle::Cell(c), Particle::Eps(e)) => {
            sphere_rod_separation(e, c)
        }
        (Particle::Cell(ca), Particle::Cell(cb)) => rod_rod_separation(ca, cb),
    }
}

/// Separation between a sphere and a spherocylinder.
///
/// The reference point on the rod is the closest of: the nearest point of the
/// cylindrical axis segment and the two hemisphere cap centres.
fn sphere_rod_separation(sphere: &Eps, rod: &Cell) -> f64 {
    let (a, b) = rod.axis_endpoints();
    let q = closest_point_on_segment(&sphere.position, &a, &b);
    let (cap_left, cap_right) = rod.cap_centres();
    let d = sphere
        .position
        .distance_to(&q)
        .min(sphere.position.distance_to(&cap_left))
        .min(sphere.position.distance_to(&cap_right));
    return d - rod.radius() - sphere.radius;
}

/// Separation between two spherocylinders.
///
/// A spherocylinder is the set of points within the cap radius of its cylindrical
/// axis segment, so the surface separation is the canonical segment-segment
/// distance between the two axis segments minus both radii.
fn rod_rod_separation(a: &Cell, b: &Cell) -> f64 {
    let (a0, a1) = a.axis_endpoints();
    let (b0, b1) = b.axis_endpoints();
    let (s, t) = closest_points_on_segments(&a0, &a1, &b0, &b1);
    return s.distance_to(&t) - a.radius() - b.radius();
}

/// Shortest surface-to-surface distance between two particles, clamped to be non-negative.
///
/// ```
/// # use biofilm_numerical::Vec2;
/// # use biofilm_particles::{min_distance, Eps, Particle};
/// let a = Particle::Eps(Eps::new(10000, Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 0.25));
/// let b = Particle::Eps(Eps::new(10001, Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.0), 0.25));
/// assert!((min_distance(&a, &b) - 0.5).abs() < 0.000001);
/// ```
pub fn min_distance(a: &Particle, b: &Particle) -> f64 {
    return surface_separation(a, b).max(0.0);
}

/// Penetration depth of two particles; zero when their surfaces do not touch.
///
/// This is the `h` of the Hertzian contact law: the force and torque kernels are
/// active only where it is positive.
pub fn overlap(a: &Particle, b: &Particle) -> f64 {
    return (-surface_separation(a, b)).max(0.0);
}

/// A representative point on the contact manifold between two particles.
///
/// For a sphere pair the point lies on the surface of `a` towards `b`; for a
/// sphere and a rod, on the sphere surface towards the rod's axis; for two rods
/// it is the midpoint of the closest-point pair of their axis segments. Whenever
/// the construction degenerates (coincident centres within `epsilon`) the centre
/// of `a` is returned.
pub fn contact_point(a: &Particle, b: &Particle, epsilon: f64) -> Vec2 {
    match (a, b) {
        (Particle::Eps(ea), Particle::Eps(eb)) => {
            let towards = eb.position - ea.position;
            if towards.length() <= epsilon {
                return ea.position;
            }
            return ea.position + towards.normalized() * ea.radius;
        }
        (Particle::Eps(e), Particle::Cell(c)) | (Particle::Cell(c), Particle::Eps(e)) => {
            let (s0, s1) = c.axis_endpoints();
            let q = closest_point_on_segment(&e.position, &s0, &s1);
            let towards = q - e.position;
            if towards.length() <= epsilon {
                return e.position;
            }
            return e.position + towards.normalized() * e.radius;
        }
        (Particle::Cell(ca), Particle::Cell(cb)) => {
            let (a0, a1) = ca.axis_endpoints();
            let (b0, b1) = cb.axis_endpoints();
            let (s, t) = closest_points_on_segments(&a0, &a1, &b0, &b1);
            return (s + t) * 0.5;
        }
    }
}
