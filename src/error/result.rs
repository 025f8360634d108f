//! Result type alias for imagemap operations.

use super::imagemap_error::ImageMapError;

/// Type alias for Results using ImageMapError.
///
/// # Example
///
/// ```ignore
/// use imagemap::error::ImageMapResult;
///
/// fn load(path: &Path) -> ImageMapResult<ImageMapButton> {
///     let config = MapConfig::load(path)?;
///     Ok(config.build_button()?)
/// }
/// ```
pub type ImageMapResult<T> = Result<T, ImageMapError>;
