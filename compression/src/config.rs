use crate::colour::Rgb;

#[derive(Debug, Clone)]
pub struct Config {
    /// Subtrees at least this wide compress their quadrants on the rayon pool.
    pub parallel_min_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            parallel_min_width: 64,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractSettings {
    pub should_draw_borders: bool,
    /// Only blocks at least this wide get a border.
    pub border_cutoff: u32,
    pub border_color: Rgb,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        ExtractSettings {
            should_draw_borders: false,
            border_cutoff: 8,
            border_color: Rgb::BLACK,
        }
    }
}
