use std::io::Write;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();
    if let Some(parent) = filepath.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.width(), buffer.height())?;
    writeln!(file, "255")?;
    file.write_all(buffer.buffer())?;

    Ok(())
}
