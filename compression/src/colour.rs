use crate::error::{CompressionError, CompressionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.red, self.green, self.blue, 255]
    }
}

/// Euclidean norm of the per-channel `max - min` spread.
pub fn colour_difference(colours: &[Rgb]) -> CompressionResult<f64> {
    let first = colours.first().ok_or(CompressionError::EmptyColourList)?;
    let (min, max) = colours.iter().fold((*first, *first), |(min, max), c| {
        (
            Rgb::new(
                min.red.min(c.red),
                min.green.min(c.green),
                min.blue.min(c.blue),
            ),
            Rgb::new(
                max.red.max(c.red),
                max.green.max(c.green),
                max.blue.max(c.blue),
            ),
        )
    });
    let red = f64::from(max.red - min.red);
    let green = f64::from(max.green - min.green);
    let blue = f64::from(max.blue - min.blue);
    Ok((red * red + green * green + blue * blue).sqrt())
}

/// Unweighted per-channel mean, rounded to the nearest integer.
pub fn blend_colours(colours: &[Rgb]) -> CompressionResult<Rgb> {
    if colours.is_empty() {
        return Err(CompressionError::EmptyColourList);
    }
    let count = colours.len() as f64;
    let (red, green, blue) = colours.iter().fold((0u64, 0u64, 0u64), |(r, g, b), c| {
        (
            r + u64::from(c.red),
            g + u64::from(c.green),
            b + u64::from(c.blue),
        )
    });
    let mean = |sum: u64| (sum as f64 / count).round() as u8;
    Ok(Rgb::new(mean(red), mean(green), mean(blue)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_of_single_channel_spread() {
        let colours = [Rgb::new(0, 5, 5), Rgb::new(10, 5, 5)];
        assert_eq!(colour_difference(&colours).unwrap(), 10.0);
    }

    #[test]
    fn difference_uses_range_not_pairwise_distance() {
        let colours = [
            Rgb::new(0, 0, 0),
            Rgb::new(3, 0, 0),
            Rgb::new(0, 4, 0),
            Rgb::new(0, 0, 0),
        ];
        assert_eq!(colour_difference(&colours).unwrap(), 5.0);
    }

    #[test]
    fn identical_colours_have_no_difference() {
        let colours = [Rgb::new(12, 34, 56); 4];
        assert_eq!(colour_difference(&colours).unwrap(), 0.0);
    }

    #[test]
    fn blend_rounds_mean() {
        let colours = [
            Rgb::new(10, 0, 0),
            Rgb::new(0, 0, 0),
            Rgb::new(0, 0, 0),
            Rgb::new(0, 0, 0),
        ];
        // 2.5 rounds up.
        assert_eq!(blend_colours(&colours).unwrap(), Rgb::new(3, 0, 0));

        let colours = [
            Rgb::new(255, 1, 9),
            Rgb::new(255, 2, 9),
            Rgb::new(255, 2, 9),
            Rgb::new(254, 2, 10),
        ];
        assert_eq!(blend_colours(&colours).unwrap(), Rgb::new(255, 2, 9));
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert_eq!(
            colour_difference(&[]),
            Err(CompressionError::EmptyColourList)
        );
        assert_eq!(blend_colours(&[]), Err(CompressionError::EmptyColourList));
    }
}
