use std::fs;
use std::path::Path;

/// Conventional basenames media players recognize as cover art.
const ART_BASENAMES: [&str; 4] = ["cover", "folder", "albumart", "front"];

/// Image extensions accepted as existing cover art.
const ART_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Checks whether an album folder already contains cover artwork.
///
/// Looks at the immediate files of `folder` (non-recursive) for a name whose
/// stem matches one of the conventional art basenames and whose extension is
/// a common image extension, both case-insensitively. This is a probe, not
/// an assertion: a path that does not exist or is not a directory returns
/// `false` rather than an error, and nothing is modified.
pub fn has_cover_art(folder: &Path) -> bool {
    let Ok(entries) = fs::read_dir(folder) else {
        return false;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        if let (Some(stem), Some(ext)) = (stem, ext) {
            if ART_BASENAMES.contains(&stem.as_str()) && ART_EXTENSIONS.contains(&ext.as_str()) {
                return true;
            }
        }
    }

    false
}
