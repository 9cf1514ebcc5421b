use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside URL path segments (`/` is kept as the separator).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%');

/// Resolve a root-relative asset path against the deployment base path.
///
/// Ensures a leading slash, prefixes `base`, collapses repeated slashes and
/// percent-encodes characters that aren't safe in a URL path.
pub fn asset_path(base: &str, path: &str) -> String {
    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    let joined = format!("{base}{normalized}");

    let mut collapsed = String::with_capacity(joined.len());
    let mut previous_slash = false;
    for ch in joined.chars() {
        if ch == '/' && previous_slash {
            continue;
        }
        previous_slash = ch == '/';
        collapsed.push(ch);
    }
    utf8_percent_encode(&collapsed, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_base_collapses_slashes() {
        assert_eq!(asset_path("/", "/images/a.jpg"), "/images/a.jpg");
        assert_eq!(asset_path("/", "images/a.jpg"), "/images/a.jpg");
    }

    #[test]
    fn test_nested_base_is_prefixed() {
        assert_eq!(asset_path("/cinerow/", "/images/a.jpg"), "/cinerow/images/a.jpg");
        assert_eq!(asset_path("/cinerow", "images//a.jpg"), "/cinerow/images/a.jpg");
    }

    #[test]
    fn test_unsafe_characters_are_encoded() {
        assert_eq!(asset_path("/", "/images/Don't Look Up.jpg"), "/images/Don't%20Look%20Up.jpg");
        assert_eq!(asset_path("/", "/a#b.jpg"), "/a%23b.jpg");
    }

    #[test]
    fn test_empty_base() {
        assert_eq!(asset_path("", "images/a.jpg"), "/images/a.jpg");
    }
}
