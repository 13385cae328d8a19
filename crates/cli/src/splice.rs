use thiserror::Error;

/// Opening tag of the payload element in `index.html`.
pub const DATA_TAG: &str = r#"<script id="portfolio-data" type="application/json">"#;
const CLOSING_TAG: &str = "</script>";
const BODY_INDENT: &str = "      ";
const CLOSING_INDENT: &str = "    ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("portfolio-data script tag not found")]
    MissingDataTag,
    #[error("closing script tag not found")]
    MissingClosingTag,
}

/// Replace the body of the payload `<script>` element with `json`.
///
/// Every JSON line is indented to sit inside the element, and the closing
/// tag is put back on its own line.
pub fn splice_payload(html: &str, json: &str) -> Result<String, SpliceError> {
    let start = html.find(DATA_TAG).ok_or(SpliceError::MissingDataTag)? + DATA_TAG.len();
    let end = html[start..]
        .find(CLOSING_TAG)
        .map(|offset| start + offset)
        .ok_or(SpliceError::MissingClosingTag)?;

    let mut out = String::with_capacity(html.len() + json.len() * 2);
    out.push_str(&html[..start]);
    out.push('\n');
    for (i, line) in json.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(BODY_INDENT);
        out.push_str(line);
    }
    out.push('\n');
    out.push_str(CLOSING_INDENT);
    out.push_str(&html[end..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<body>\n    <script id=\"portfolio-data\" type=\"application/json\">{}</script>\n</body>\n";

    #[test]
    fn replaces_payload_and_indents_it() {
        let out = splice_payload(PAGE, "{\n  \"active\": \"serie_1\"\n}").unwrap();
        assert_eq!(
            out,
            "<body>\n    <script id=\"portfolio-data\" type=\"application/json\">\n      {\n        \"active\": \"serie_1\"\n      }\n    </script>\n</body>\n"
        );
    }

    #[test]
    fn splicing_twice_is_stable() {
        let json = "{\n  \"series\": {}\n}";
        let once = splice_payload(PAGE, json).unwrap();
        let twice = splice_payload(&once, json).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_tags_are_reported() {
        assert_eq!(
            splice_payload("<body></body>", "{}"),
            Err(SpliceError::MissingDataTag)
        );
        assert_eq!(
            splice_payload(&format!("{DATA_TAG}{{}}"), "{}"),
            Err(SpliceError::MissingClosingTag)
        );
    }
}
