use crate::config::ExtractSettings;
use crate::pixels::PixelBuffer;
use crate::region_tree::{ImageData, RegionQuadTree};

/// Paints every filled leaf of `tree` as a solid block into a fresh
/// `width` x `height` RGBA buffer with full alpha.
///
/// Areas no leaf covers stay transparent black. Blocks reaching past the
/// image edge are clipped.
pub fn quadtree_to_image_data(
    tree: &RegionQuadTree,
    width: u32,
    height: u32,
    settings: &ExtractSettings,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    tree.for_each_filled_leaf(|data| paint_block(&mut buffer, data, settings));
    buffer
}

// With borders on, a wide enough block gets its top row and left column in
// the border colour, which draws each edge between neighbours once.
fn paint_block(buffer: &mut PixelBuffer, data: &ImageData, settings: &ExtractSettings) {
    let fill = data.color.to_rgba();
    let x_end = data.x.saturating_add(data.width);
    let y_end = data.y.saturating_add(data.width).min(buffer.height());
    let draw_border = settings.should_draw_borders && data.width >= settings.border_cutoff;
    if !draw_border {
        for y in data.y..y_end {
            buffer.fill_row(y, data.x, x_end, fill);
        }
        return;
    }
    let border = settings.border_color.to_rgba();
    for y in data.y..y_end {
        if y == data.y {
            buffer.fill_row(y, data.x, x_end, border);
        } else {
            buffer.put_pixel(data.x, y, border);
            buffer.fill_row(y, data.x + 1, x_end, fill);
        }
    }
}
