//! Resume upload checks applied before any validation or store write.

/// PDF, DOC and DOCX.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Determine the upload's media type: the part's declared Content-Type, or a
/// guess from the file name when the client sent none or a generic one.
pub fn resolve_media_type(declared: Option<&str>, file_name: Option<&str>) -> Option<String> {
    declared
        .map(|ct| ct.trim().to_ascii_lowercase())
        .filter(|ct| !ct.is_empty() && ct != "application/octet-stream")
        .or_else(|| {
            file_name
                .and_then(|n| mime_guess::from_path(n).first())
                .map(|m| m.essence_str().to_string())
        })
}

pub fn is_allowed_media_type(mime_type: &str) -> bool {
    // Ignore parameters such as "; charset=binary"
    let essence = mime_type.split(';').next().unwrap_or("").trim();
    ALLOWED_MIME_TYPES.contains(&essence)
}

/// Render a byte count as whole kilobytes, rounding halves up: 1536 -> "2KB".
pub fn format_file_size(bytes: u64) -> String {
    format!("{}KB", (bytes + 512) / 1024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0KB");
        assert_eq!(format_file_size(511), "0KB");
        assert_eq!(format_file_size(512), "1KB");
        assert_eq!(format_file_size(1024), "1KB");
        assert_eq!(format_file_size(1535), "1KB");
        assert_eq!(format_file_size(1536), "2KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5120KB");
    }

    #[test]
    fn test_declared_type_wins() {
        assert_eq!(
            resolve_media_type(Some("application/pdf"), Some("cv.docx")).as_deref(),
            Some("application/pdf")
        );
    }

    #[test]
    fn test_guess_from_file_name() {
        assert_eq!(
            resolve_media_type(Some("application/octet-stream"), Some("cv.pdf")).as_deref(),
            Some("application/pdf")
        );
        assert_eq!(
            resolve_media_type(None, Some("cv.doc")).as_deref(),
            Some("application/msword")
        );
        assert_eq!(resolve_media_type(None, None), None);
    }

    #[test]
    fn test_allow_list() {
        assert!(is_allowed_media_type("application/pdf"));
        assert!(is_allowed_media_type("application/msword"));
        assert!(is_allowed_media_type(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(is_allowed_media_type("application/pdf; charset=binary"));
        assert!(!is_allowed_media_type("image/png"));
        assert!(!is_allowed_media_type("text/plain"));
        assert!(!is_allowed_media_type(""));
    }
}
