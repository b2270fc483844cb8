use std::path::Path;

/// Get the lower-cased extension of a path: the text after its last `.`
///
/// Unlike `Path::extension`, a leading dot counts (`.txt` → `txt`) and the
/// whole path string is considered, so `archive.d/notes` yields `d/notes`
/// which simply never matches a registered extension.
pub fn get_extension(path: &Path) -> Option<String> {
    let name = path.to_string_lossy();
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Whether `input` names a remote resource rather than a local path
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}
