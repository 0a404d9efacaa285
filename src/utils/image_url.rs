/// Build the full URL of an image served by the content API
///
/// Absolute URLs pass through; relative paths are prefixed with `base`.
pub fn image_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http") {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_is_unchanged() {
        assert_eq!(
            image_url("http://localhost:8080", "https://cdn.emasmetal.com/a.jpg"),
            "https://cdn.emasmetal.com/a.jpg"
        );
    }

    #[test]
    fn test_relative_path_gets_base() {
        assert_eq!(
            image_url("http://localhost:8080", "/uploads/gallery/1.jpg"),
            "http://localhost:8080/uploads/gallery/1.jpg"
        );
        assert_eq!(
            image_url("http://localhost:8080/", "/uploads/gallery/1.jpg"),
            "http://localhost:8080/uploads/gallery/1.jpg"
        );
        assert_eq!(
            image_url("http://localhost:8080", "uploads/1.jpg"),
            "http://localhost:8080/uploads/1.jpg"
        );
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(image_url("http://localhost:8080", ""), "");
    }
}
