use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::util::hsb::hsb_to_rgb;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeneratePaletteError {
    EmptyPalette,
    ZeroHueFactor,
    ZeroBrightnessFactor,
}

impl fmt::Display for GeneratePaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette => write!(f, "palette length must be greater than zero"),
            Self::ZeroHueFactor => write!(f, "hue factor must not be zero"),
            Self::ZeroBrightnessFactor => write!(f, "brightness factor must not be zero"),
        }
    }
}

impl Error for GeneratePaletteError {}

/// Builds the colour table for an iteration budget. Pure function of
/// `(count, parameters)` — regenerating with the same inputs yields the
/// same palette.
///
/// Hue and brightness advance by `1 / (ln(i + 2) * factor)` per entry:
/// `i + 2` keeps the logarithm away from `ln(0)` and `ln(1) = 0`, and the
/// logarithmic step concentrates colour change in the low iteration counts
/// where most escaping pixels land.
pub fn generate_palette(
    count: u32,
    parameters: &RenderParameters,
) -> Result<Palette, GeneratePaletteError> {
    if count == 0 {
        return Err(GeneratePaletteError::EmptyPalette);
    }
    if parameters.hue_factor == 0 {
        return Err(GeneratePaletteError::ZeroHueFactor);
    }
    if parameters.brightness_factor == 0 {
        return Err(GeneratePaletteError::ZeroBrightnessFactor);
    }

    let mut hue = f64::from(parameters.initial_hue);
    let saturation = 1.0;
    let mut brightness = 1.0;

    let mut colours: Vec<Colour> = Vec::with_capacity(count as usize);

    for i in 0..count {
        let log = f64::from(i + 2).ln();
        hue += 1.0 / (log * f64::from(parameters.hue_factor));
        brightness += 1.0 / (log * f64::from(parameters.brightness_factor));
        colours.push(hsb_to_rgb(hue, saturation, brightness));
    }

    let palette = Palette::from_colours(colours).expect("count was checked non-zero");
    Ok(palette)
}
