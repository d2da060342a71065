use std::path::Path;

use reqwest::Url;

/// Mapping of common image content types to file extensions.
const CONTENT_TYPE_EXTENSIONS: [(&str, &str); 4] = [
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/gif", ".gif"),
    ("image/webp", ".webp"),
];

/// Extension used when neither the URL nor the content type yields one.
pub const DEFAULT_EXTENSION: &str = ".jpg";

/// Resolves the file extension for a downloadable image.
///
/// Precedence:
/// 1. The extension of the URL's path component, but only if it appears
///    among the values of the content-type table. An extension the table
///    does not know is never taken from the URL, even if it looks like an
///    image extension.
/// 2. The content type, with any `;`-parameters stripped and lower-cased,
///    looked up in the table.
/// 3. [`DEFAULT_EXTENSION`].
///
/// A URL that fails to parse is treated as having no usable extension and
/// falls through to the later steps.
pub fn resolve_extension(image_url: &str, content_type: Option<&str>) -> &'static str {
    if let Some(ext) = url_extension(image_url) {
        return ext;
    }

    if let Some(content_type) = content_type {
        let normalized = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        for (mime, ext) in CONTENT_TYPE_EXTENSIONS {
            if mime == normalized {
                return ext;
            }
        }
    }

    DEFAULT_EXTENSION
}

/// Extracts the extension from the URL path, restricted to the known
/// extension set so the returned value stays a table entry.
fn url_extension(image_url: &str) -> Option<&'static str> {
    let url = Url::parse(image_url).ok()?;
    let ext = Path::new(url.path())
        .extension()
        .and_then(|e| e.to_str())?
        .to_lowercase();
    let dotted = format!(".{ext}");

    CONTENT_TYPE_EXTENSIONS
        .iter()
        .find(|(_, known)| *known == dotted)
        .map(|(_, known)| *known)
}
