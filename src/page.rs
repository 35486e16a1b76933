//! Wraps a converted fragment in a complete HTML page.

use itertools::Itertools;

/// Everything in front of the `lang` attribute value, leading newline included.
pub const DOCTYPE_PREFIX: &str = "\n<!DOCTYPE html>\n<html lang=";

/// Rendered when no source file is given.
pub const SAMPLE_DOCUMENT: &str = "\n# CMS example\nhello, world.\n";

pub const DEFAULT_TITLE: &str = "powered by microCMS";
pub const DEFAULT_LANGUAGE: &str = "en";

/// Head metadata for an assembled page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub language: String,
    /// Rendered as `<link>` elements, in this order.
    pub stylesheets: Vec<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            stylesheets: split_stylesheets(""),
        }
    }
}

/// Splits a styles option on single spaces.
///
/// Every separator counts, so an empty string yields one empty entry and
/// doubled spaces yield empty entries between them.
pub fn split_stylesheets(styles: &str) -> Vec<String> {
    styles.split(' ').map(str::to_string).collect()
}

/// Builds the page around `fragment`.
///
/// Title, language, stylesheet URLs and fragment are inserted as-is, without
/// any HTML escaping.
pub fn assemble<S: AsRef<str>>(
    fragment: &str,
    title: &str,
    language: &str,
    stylesheets: &[S],
) -> String {
    let links = stylesheets
        .iter()
        .map(|sheet| format!("\t<link rel=\"stylesheet\" href=\"{}\"/>\n", sheet.as_ref()))
        .join("");

    let mut page = String::with_capacity(fragment.len() + links.len() + 256);
    page.push_str(DOCTYPE_PREFIX);
    page.push('"');
    page.push_str(language);
    page.push_str("\">\n");
    page.push_str("<head>\n");
    page.push_str("\t<meta charset=\"utf-8\">\n");
    page.push_str(
        "\t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    page.push_str(&format!("\t<title>{}</title>\n", title));
    page.push_str(&links);
    page.push_str("</head>\n<body>");
    page.push_str(fragment);
    page.push_str("</body>\n</html>");
    page
}

impl PageOptions {
    pub fn assemble(&self, fragment: &str) -> String {
        assemble(fragment, &self.title, &self.language, &self.stylesheets)
    }
}
