use std::f64::consts::TAU;

/// Grayscale value of the cursor follower for a scroll position.
///
/// The shade runs `0 → 255 → 0` over the scrollable range along a cosine,
/// so the cursor is black at both ends of the page and white halfway.
/// Returns `None` when the page cannot scroll.
pub fn cursor_shade(scroll_y: f64, document_height: f64, viewport_height: f64) -> Option<u8> {
    let max_scroll = document_height - viewport_height;
    if max_scroll <= 0.0 {
        return None;
    }
    let t = (scroll_y / max_scroll).clamp(0.0, 1.0);
    let value = (255.0 * (0.5 - 0.5 * (TAU * t).cos())).round();
    Some(value.clamp(0.0, 255.0) as u8)
}

pub fn shade_css(value: u8) -> String {
    format!("rgb({value}, {value}, {value})")
}

/// CSS transform centring the follower on the pointer.
pub fn cursor_transform(client_x: f64, client_y: f64) -> String {
    format!("translate({client_x}px, {client_y}px) translate(-50%, -50%)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_at_top_white_at_middle_black_at_bottom() {
        let (doc, view) = (3000.0, 1000.0);
        assert_eq!(cursor_shade(0.0, doc, view), Some(0));
        assert_eq!(cursor_shade(1000.0, doc, view), Some(255));
        assert_eq!(cursor_shade(2000.0, doc, view), Some(0));
    }

    #[test]
    fn sixth_of_the_way_is_dark_gray() {
        assert_eq!(cursor_shade(500.0, 4000.0, 1000.0), Some(64));
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(cursor_shade(-40.0, 3000.0, 1000.0), Some(0));
        assert_eq!(cursor_shade(2500.0, 3000.0, 1000.0), Some(0));
    }

    #[test]
    fn unscrollable_page_has_no_shade() {
        assert_eq!(cursor_shade(0.0, 800.0, 800.0), None);
        assert_eq!(cursor_shade(0.0, 600.0, 800.0), None);
    }

    #[test]
    fn css_strings() {
        assert_eq!(shade_css(17), "rgb(17, 17, 17)");
        assert_eq!(
            cursor_transform(120.0, 48.5),
            "translate(120px, 48.5px) translate(-50%, -50%)"
        );
    }
}
