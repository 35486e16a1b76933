//! Markdown to HTML conversion.
//!
//! The rest of the crate only sees the [`Convert`] capability, so the
//! rendering library can be swapped without touching page assembly.

use pulldown_cmark::{html, Options, Parser};

use crate::error::ConversionError;

/// Turns Markdown source into an HTML fragment.
pub trait Convert {
    fn convert(&self, input: &[u8]) -> Result<Vec<u8>, ConversionError>;
}

/// Plain CommonMark, backed by pulldown-cmark with every extension disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonMark;

impl Convert for CommonMark {
    fn convert(&self, input: &[u8]) -> Result<Vec<u8>, ConversionError> {
        let md_content = std::str::from_utf8(input).map_err(|e| ConversionError::InvalidUtf8 {
            offset: e.valid_up_to(),
        })?;

        let parser = Parser::new_ext(md_content, Options::empty());
        let mut html_output = String::with_capacity(md_content.len() * 3 / 2);
        html::push_html(&mut html_output, parser);

        log::debug!(
            "converted {} bytes of markdown into {} bytes of html",
            input.len(),
            html_output.len()
        );
        Ok(html_output.into_bytes())
    }
}
