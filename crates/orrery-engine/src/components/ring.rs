/// Guide annulus constraining an orbiting body's radial distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl Ring {
    pub fn new(inner_radius: f32, outer_radius: f32) -> Self {
        Self { inner_radius, outer_radius }
    }

    /// Whether a distance from the origin lies inside the band (edges included).
    pub fn contains(&self, distance: f32) -> bool {
        distance >= self.inner_radius && distance <= self.outer_radius
    }
}
