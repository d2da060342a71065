use covercli::image::{DEFAULT_EXTENSION, resolve_extension};

#[test]
fn test_url_extension_wins_when_known() {
    assert_eq!(resolve_extension("http://x/image.png", None), ".png");
    assert_eq!(resolve_extension("http://example.com/image.jpg", None), ".jpg");

    // URL beats a conflicting content type when its extension is known
    assert_eq!(
        resolve_extension("http://x/image.png", Some("image/jpeg")),
        ".png"
    );
}

#[test]
fn test_url_extension_ignores_query_and_case() {
    assert_eq!(
        resolve_extension("http://example.com/image.PNG?a=1&b=2", None),
        ".png"
    );
}

#[test]
fn test_unknown_url_extension_falls_through() {
    // ".jpeg" is plausible but not a value of the content-type table, so it
    // is never taken from the URL
    assert_eq!(
        resolve_extension("http://example.com/image.jpeg", Some("image/jpeg")),
        ".jpg"
    );
    assert_eq!(
        resolve_extension("http://example.com/image.jpeg", None),
        DEFAULT_EXTENSION
    );
}

#[test]
fn test_content_type_used_without_url_extension() {
    assert_eq!(
        resolve_extension("http://x/dynamic", Some("image/gif")),
        ".gif"
    );
    assert_eq!(
        resolve_extension("http://x/dynamic", Some("image/webp")),
        ".webp"
    );
}

#[test]
fn test_content_type_parameters_and_case_stripped() {
    assert_eq!(
        resolve_extension("http://x/dynamic", Some("image/png; charset=UTF-8")),
        ".png"
    );
    assert_eq!(
        resolve_extension("http://x/dynamic", Some("IMAGE/JPEG")),
        ".jpg"
    );
}

#[test]
fn test_unknown_content_type_defaults() {
    assert_eq!(
        resolve_extension("http://x/dynamic", Some("image/unknown-type")),
        DEFAULT_EXTENSION
    );
}

#[test]
fn test_no_hints_defaults() {
    assert_eq!(
        resolve_extension("http://example.com/image_without_extension", None),
        DEFAULT_EXTENSION
    );
}

#[test]
fn test_unparsable_url_falls_through() {
    assert_eq!(
        resolve_extension("not a url at all", Some("image/gif")),
        ".gif"
    );
    assert_eq!(resolve_extension("::::", None), DEFAULT_EXTENSION);
}
