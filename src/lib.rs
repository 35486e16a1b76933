//! Turn a single Markdown document into a standalone HTML page.

pub mod convert;
pub mod error;
pub mod page;

pub use convert::{CommonMark, Convert};
pub use error::{CmsError, ConversionError};
pub use page::{assemble, split_stylesheets, PageOptions, SAMPLE_DOCUMENT};

/// Converts `source` with `converter` and wraps the result in a page.
pub fn render<C: Convert + ?Sized>(
    source: &[u8],
    converter: &C,
    options: &PageOptions,
) -> Result<String, CmsError> {
    let fragment = converter.convert(source)?;
    let fragment = String::from_utf8(fragment).map_err(|e| ConversionError::InvalidOutput {
        offset: e.utf8_error().valid_up_to(),
    })?;
    Ok(options.assemble(&fragment))
}
