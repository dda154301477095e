//! Cloudinary delivery-URL rewriting.
//!
//! Uploaded media URLs carry one transformation segment right after
//! `/upload/`, e.g. `.../upload/w_400,h_300,c_fill,q_auto/v17/doc.jpg`.
//! Instead of chaining pattern replacements for every previously seen
//! segment shape, the rewriter parses that segment, tags its shape, and
//! re-serializes the requested preset in its place. Repeated application is
//! a no-op and a different preset's segment is replaced, never stacked.

use super::drive_link::drive_share_to_direct;

const CDN_HOST_MARKER: &str = "cloudinary.com";
const UPLOAD_SEGMENT: &str = "/upload/";
const PDF_PAGE_MARKER: &str = "f_jpg,pg_1";

/// How the target image is placed into the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Crop to cover the box.
    Fill,
    /// Contain without cropping, letterboxed.
    Fit,
    /// Contain without cropping, remaining space filled with a background.
    Pad,
}

impl FitMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "c_fill",
            Self::Fit => "c_fit",
            Self::Pad => "c_pad",
        }
    }
}

/// A named transformation requested at a specific call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformPreset {
    width: u32,
    height: u32,
    mode: FitMode,
    background: Option<&'static str>,
}

impl TransformPreset {
    /// Full-article image display, 672×672 contained.
    #[must_use]
    pub const fn detail_view() -> Self {
        Self {
            width: 672,
            height: 672,
            mode: FitMode::Fit,
            background: None,
        }
    }

    /// News and document list-card thumbnail, 192×192 padded on white.
    #[must_use]
    pub const fn news_card() -> Self {
        Self {
            width: 192,
            height: 192,
            mode: FitMode::Pad,
            background: Some("ffffff"),
        }
    }

    /// Agenda list-card thumbnail, 192×192 padded on the warm page beige.
    #[must_use]
    pub const fn event_card() -> Self {
        Self {
            width: 192,
            height: 192,
            mode: FitMode::Pad,
            background: Some("fffbeb"),
        }
    }

    /// First transformation applied by the upload pipeline, 400×300 cropped.
    #[must_use]
    pub const fn upload_thumbnail() -> Self {
        Self {
            width: 400,
            height: 300,
            mode: FitMode::Fill,
            background: None,
        }
    }

    /// Serializes the preset as a transformation path segment.
    fn segment(&self, shape: SegmentShape) -> String {
        let mut segment = String::new();
        if shape == SegmentShape::PdfPage {
            segment.push_str(PDF_PAGE_MARKER);
            segment.push(',');
        }
        segment.push_str(&format!(
            "w_{},h_{},{}",
            self.width,
            self.height,
            self.mode.as_str()
        ));
        if let Some(background) = self.background {
            segment.push_str(&format!(",b_rgb:{background}"));
        }
        segment.push_str(",q_auto");
        segment
    }
}

/// Shape of a previously applied transformation segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentShape {
    /// Plain image transformation.
    Plain,
    /// Transformation prefixed with the PDF first-page marker, which must be
    /// preserved across rewrites.
    PdfPage,
}

/// Parses the path segment after `/upload/`.
///
/// Returns `None` when the segment is not a recognizable transformation
/// (e.g. a `v123` version segment or an unknown directive), in which case
/// the URL is left untouched.
fn parse_segment(segment: &str) -> Option<SegmentShape> {
    let mut shape = SegmentShape::Plain;
    let mut tokens = segment.split(',').peekable();

    if tokens.peek() == Some(&"f_jpg") {
        tokens.next();
        if tokens.next() != Some("pg_1") {
            return None;
        }
        shape = SegmentShape::PdfPage;
    }

    let mut has_width = false;
    let mut has_quality = false;

    for token in tokens {
        // q_auto terminates the segment.
        if has_quality {
            return None;
        }
        if let Some(digits) = token.strip_prefix("w_") {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            has_width = true;
        } else if let Some(digits) = token.strip_prefix("h_") {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
        } else if let Some(mode) = token.strip_prefix("c_") {
            if !matches!(mode, "fill" | "fit" | "pad") {
                return None;
            }
        } else if let Some(hex) = token.strip_prefix("b_rgb:") {
            if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
        } else if token == "q_auto" {
            has_quality = true;
        } else {
            return None;
        }
    }

    (has_width && has_quality).then_some(shape)
}

/// Rewrites a Cloudinary delivery URL to request `preset`.
///
/// Only URLs carrying the CDN host marker and an `/upload/` segment are
/// eligible; everything else, including URLs whose existing transformation
/// segment has an unrecognized shape, passes through unchanged.
#[must_use]
pub fn rewrite(url: &str, preset: &TransformPreset) -> String {
    if !url.contains(CDN_HOST_MARKER) {
        return url.to_string();
    }
    let Some(start) = url.find(UPLOAD_SEGMENT) else {
        return url.to_string();
    };

    let prefix_end = start + UPLOAD_SEGMENT.len();
    let rest = &url[prefix_end..];
    let Some(slash) = rest.find('/') else {
        return url.to_string();
    };

    match parse_segment(&rest[..slash]) {
        Some(shape) => format!(
            "{}{}{}",
            &url[..prefix_end],
            preset.segment(shape),
            &rest[slash..]
        ),
        None => url.to_string(),
    }
}

/// Inserts the upload pipeline's first transformation into a fresh
/// `secure_url` returned by the media host.
///
/// PDFs get the first-page marker and a `.pdf` → `.jpg` suffix swap so the
/// stored thumbnail is an image.
#[must_use]
pub fn upload_thumbnail_url(secure_url: &str, is_pdf: bool) -> String {
    let shape = if is_pdf {
        SegmentShape::PdfPage
    } else {
        SegmentShape::Plain
    };
    let segment = TransformPreset::upload_thumbnail().segment(shape);
    let inserted = secure_url.replacen(UPLOAD_SEGMENT, &format!("{UPLOAD_SEGMENT}{segment}/"), 1);

    if is_pdf {
        inserted.replacen(".pdf", ".jpg", 1)
    } else {
        inserted
    }
}

/// Display URL for article detail pages.
///
/// Drive share links are normalized first, then the CDN transformation is
/// rewritten; non-CDN results pass through.
#[must_use]
pub fn detail_image_url(raw: &str) -> String {
    rewrite(&drive_share_to_direct(raw), &TransformPreset::detail_view())
}

/// Display URL for news and document list cards.
#[must_use]
pub fn news_card_image_url(raw: &str) -> String {
    rewrite(&drive_share_to_direct(raw), &TransformPreset::news_card())
}

/// Display URL for agenda list cards.
#[must_use]
pub fn event_card_image_url(raw: &str) -> String {
    rewrite(&drive_share_to_direct(raw), &TransformPreset::event_card())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const BASE: &str = "https://res.cloudinary.com/demo/image/upload";

    #[test_case("w_400,h_300,c_fill,q_auto"; "fill by dimensions")]
    #[test_case("f_jpg,pg_1,w_400,h_300,c_fill,q_auto"; "pdf page fill by dimensions")]
    #[test_case("w_672,q_auto"; "width only")]
    #[test_case("f_jpg,pg_1,w_672,q_auto"; "pdf page width only")]
    #[test_case("w_192,h_192,c_pad,b_rgb:ffffff,q_auto"; "padded with background")]
    fn test_known_segment_shapes_are_replaced(segment: &str) {
        let url = format!("{BASE}/{segment}/v17/events/photo.jpg");

        let rewritten = rewrite(&url, &TransformPreset::detail_view());

        assert_eq!(
            rewritten,
            format!("{BASE}/w_672,h_672,c_fit,q_auto/v17/events/photo.jpg")
        );
    }

    #[test]
    fn test_pdf_marker_is_preserved() {
        let url = format!("{BASE}/f_jpg,pg_1,w_400,h_300,c_fill,q_auto/v17/docs/note.jpg");

        let rewritten = rewrite(&url, &TransformPreset::news_card());

        assert_eq!(
            rewritten,
            format!("{BASE}/f_jpg,pg_1,w_192,h_192,c_pad,b_rgb:ffffff,q_auto/v17/docs/note.jpg")
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let url = format!("{BASE}/w_400,h_300,c_fill,q_auto/v17/photo.jpg");
        let preset = TransformPreset::event_card();

        let once = rewrite(&url, &preset);
        let twice = rewrite(&once, &preset);

        assert_eq!(once, twice);
        assert!(once.contains("b_rgb:fffbeb"));
    }

    #[test]
    fn test_different_preset_replaces_rather_than_stacks() {
        let url = format!("{BASE}/w_400,h_300,c_fill,q_auto/v17/photo.jpg");

        let card = rewrite(&url, &TransformPreset::news_card());
        let detail = rewrite(&card, &TransformPreset::detail_view());

        assert!(detail.contains("w_672,h_672,c_fit"));
        assert!(!detail.contains("w_192"));
        assert!(!detail.contains("c_pad"));
        assert_eq!(detail.matches("w_").count(), 1);
    }

    #[test_case("https://example.com/upload/w_400,h_300,c_fill,q_auto/a.jpg"; "missing host marker")]
    #[test_case("https://res.cloudinary.com/demo/image/a.jpg"; "missing upload segment")]
    fn test_ineligible_urls_pass_through(url: &str) {
        assert_eq!(rewrite(url, &TransformPreset::detail_view()), url);
    }

    #[test_case("v17"; "version segment")]
    #[test_case("w_400,h_300,c_scale,q_auto"; "unknown crop mode")]
    #[test_case("w_400,h_300,c_fill"; "missing quality directive")]
    #[test_case("h_300,c_fill,q_auto"; "missing width")]
    #[test_case("w_abc,q_auto"; "non numeric width")]
    #[test_case("w_400,q_auto,e_blur"; "directive after quality")]
    fn test_unrecognized_segments_leave_url_unchanged(segment: &str) {
        let url = format!("{BASE}/{segment}/photo.jpg");

        assert_eq!(rewrite(&url, &TransformPreset::news_card()), url);
    }

    #[test]
    fn test_no_path_after_upload_passes_through() {
        let url = format!("{BASE}/w_400,h_300,c_fill,q_auto");

        assert_eq!(rewrite(&url, &TransformPreset::detail_view()), url);
    }

    #[test]
    fn test_upload_thumbnail_insertion() {
        let url = format!("{BASE}/v17/events/photo.png");

        assert_eq!(
            upload_thumbnail_url(&url, false),
            format!("{BASE}/w_400,h_300,c_fill,q_auto/v17/events/photo.png")
        );
    }

    #[test]
    fn test_upload_thumbnail_for_pdf_swaps_extension() {
        let url = format!("{BASE}/v17/documents/compte-rendu.pdf");

        assert_eq!(
            upload_thumbnail_url(&url, true),
            format!("{BASE}/f_jpg,pg_1,w_400,h_300,c_fill,q_auto/v17/documents/compte-rendu.jpg")
        );
    }

    #[test]
    fn test_display_helpers_normalize_drive_links_first() {
        let drive = "https://drive.google.com/file/d/abc123/view";

        assert_eq!(
            detail_image_url(drive),
            "https://drive.google.com/uc?export=view&id=abc123"
        );
    }

    #[test]
    fn test_display_helpers_apply_card_presets() {
        let url = format!("{BASE}/w_400,h_300,c_fill,q_auto/v17/photo.jpg");

        assert!(news_card_image_url(&url).contains("w_192,h_192,c_pad,b_rgb:ffffff,q_auto"));
        assert!(event_card_image_url(&url).contains("w_192,h_192,c_pad,b_rgb:fffbeb,q_auto"));
    }
}
