mod vec2;
mod segment;
mod testing_macros;

pub use vec2::{Vec2, random_unit_versor};
pub use segment::{closest_point_on_segment, closest_points_on_segments};
