pub const HUE_FACTOR_DEFAULT: i32 = 100;
pub const BRIGHTNESS_FACTOR_DEFAULT: i32 = 1000;
pub const INITIAL_HUE_DEFAULT: f32 = 0.33;

/// Tunable look of the output, independent of the viewport. Values outside
/// the documented ranges still yield a valid (if degenerate) palette; only
/// zero factors are rejected, and that check lives in palette generation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParameters {
    pub hue_factor: i32,
    pub brightness_factor: i32,
    pub initial_hue: f32,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            hue_factor: HUE_FACTOR_DEFAULT,
            brightness_factor: BRIGHTNESS_FACTOR_DEFAULT,
            initial_hue: INITIAL_HUE_DEFAULT,
        }
    }
}
