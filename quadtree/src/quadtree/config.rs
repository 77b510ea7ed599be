#[derive(Debug, Clone)]
pub struct Config {
    /// Points a leaf holds before it splits.
    pub node_capacity: usize,
    /// Leaves narrower than this never split and take points past capacity.
    /// Values below 2 are raised to 2 so a split never yields zero-width quadrants.
    pub min_subdivide_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 4,
            min_subdivide_width: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RepaintOptions {
    pub draw_bbox: bool,
    pub draw_points: bool,
    pub draw_heat_map: bool,
    pub outline_thickness: f32,
    pub point_radius: f32,
    /// Heat map alpha added per level of depth, capped at 1.0.
    pub heat_map_alpha_step: f32,
}

impl Default for RepaintOptions {
    fn default() -> Self {
        RepaintOptions {
            draw_bbox: true,
            draw_points: true,
            draw_heat_map: true,
            outline_thickness: 1.0,
            point_radius: 8.0,
            heat_map_alpha_step: 0.05,
        }
    }
}
