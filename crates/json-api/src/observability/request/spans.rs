//! Route templates for span names and metric labels.

/// Collapse numeric path segments into `{id}` so per-promotion requests share a label.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_become_placeholders() {
        assert_eq!(route_template("/api/promotions/42"), "/api/promotions/{id}");
        assert_eq!(
            route_template("/api/promotions/7/activate"),
            "/api/promotions/{id}/activate"
        );
    }

    #[test]
    fn other_paths_are_unchanged() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(route_template("/health"), "/health");
        assert_eq!(route_template("/api/promotions"), "/api/promotions");
        assert_eq!(route_template("/api/promotions/abc"), "/api/promotions/abc");
    }
}
