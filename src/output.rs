//! PNG output.

use std::path::Path;

use crate::foundation::error::{MockupError, MockupResult};

/// Write a flattened image as a lossless PNG, creating parent directories as needed.
pub fn save_png(image: &image::RgbImage, path: impl AsRef<Path>) -> MockupResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            MockupError::render(format!(
                "failed to create output dir '{}': {e}",
                parent.display()
            ))
        })?;
    }
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Encode to PNG bytes in memory.
pub fn encode_png(image: &image::RgbImage) -> MockupResult<Vec<u8>> {
    let mut buf = Vec::new();
    image.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(buf)
}

/// Output file name for one theme and screen, e.g. `glass_onboarding.png`.
pub fn file_name(theme: &str, screen: &str) -> String {
    format!("{theme}_{screen}.png")
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
