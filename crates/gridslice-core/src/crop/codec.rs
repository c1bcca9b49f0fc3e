//! Bidirectional mapping between crop rectangles and the processing
//! directive carried in an image URL's query string.
//!
//! # Wire format
//!
//! ```text
//! ?x-oss-process=image/crop,x_<int>,y_<int>,w_<int>,h_<int>,g_<gravity>/format,webp
//! ```
//!
//! All five crop tokens are optional and omitted at their defaults
//! (`0` for x/y/w/h, `nw` for gravity). When no crop is requested the
//! directive degrades to `image/format,webp`. Exactly one directive is
//! carried per URL: building a new one replaces any prior value.
//!
//! # Failure model
//!
//! Both directions fail soft. An unparseable URL, a missing parameter,
//! or a malformed token never raises an error; parsing falls back to the
//! zero rectangle and building returns the base URL unchanged.

use log::{debug, warn};
use url::Url;

use super::rect::{CropRect, Gravity};

/// Query parameter carrying the server-side processing pipeline.
pub const PROCESS_PARAM: &str = "x-oss-process";

const PIPELINE_TAG: &str = "image";
const CROP_STAGE: &str = "crop";
const FORMAT_STAGE: &str = "format,webp";

/// Extract the crop rectangle embedded in an image URL.
///
/// Returns the zero rectangle (the "no crop configured" sentinel) when
/// the URL cannot be parsed, carries no processing parameter, or the
/// pipeline has no crop stage. Unknown directive keys are ignored and
/// non-numeric values read as 0.
pub fn parse_crop_url(raw: &str) -> CropRect {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(err) => {
            debug!("unparseable image url {raw:?}: {err}");
            return CropRect::default();
        }
    };

    url.query_pairs()
        .find(|(key, _)| key == PROCESS_PARAM)
        .map(|(_, value)| parse_directive(&value))
        .unwrap_or_default()
}

/// Attach a crop directive for `rect` to `base`, replacing any existing
/// processing parameter.
///
/// An empty rectangle (all fields <= 0) produces a format-only directive.
/// Rectangle fields are rounded to the nearest integer and only positive
/// fields are encoded; gravity is encoded only when non-default. If
/// `base` is not a parseable URL it is returned unchanged.
pub fn build_crop_url(base: &str, rect: &CropRect) -> String {
    let mut url = match Url::parse(base) {
        Ok(url) => url,
        Err(err) => {
            warn!("cannot attach crop directive to {base:?}: {err}");
            return base.to_string();
        }
    };

    replace_process_param(&mut url, &format_directive(rect));
    url.to_string()
}

fn parse_directive(directive: &str) -> CropRect {
    let mut stages = directive.split('/');
    if stages.next() != Some(PIPELINE_TAG) {
        return CropRect::default();
    }

    for stage in stages {
        let mut tokens = stage.split(',');
        if tokens.next() != Some(CROP_STAGE) {
            continue;
        }

        let mut rect = CropRect::default();
        for token in tokens {
            let Some((key, value)) = token.split_once('_') else {
                continue;
            };
            match key {
                "x" => rect.x = parse_pixels(value),
                "y" => rect.y = parse_pixels(value),
                "w" => rect.width = parse_pixels(value),
                "h" => rect.height = parse_pixels(value),
                "g" => rect.gravity = Gravity::from_keyword(value),
                // Unknown keys (quality, rotation, ...) are not ours to interpret.
                _ => {}
            }
        }
        return rect;
    }

    CropRect::default()
}

fn parse_pixels(token: &str) -> f64 {
    token.parse::<i64>().map(|px| px as f64).unwrap_or(0.0)
}

fn format_directive(rect: &CropRect) -> String {
    if rect.is_empty() {
        return format!("{PIPELINE_TAG}/{FORMAT_STAGE}");
    }

    let rect = rect.rounded();
    let mut stage = String::from(CROP_STAGE);
    for (key, value) in [
        ("x", rect.x),
        ("y", rect.y),
        ("w", rect.width),
        ("h", rect.height),
    ] {
        if value > 0.0 {
            stage.push_str(&format!(",{key}_{}", value as i64));
        }
    }
    if !rect.gravity.is_default() {
        stage.push_str(&format!(",g_{}", rect.gravity.as_keyword()));
    }

    format!("{PIPELINE_TAG}/{stage}/{FORMAT_STAGE}")
}

/// Replace the processing parameter while leaving every other query pair
/// byte-for-byte intact. The directive is written verbatim: `,` and `/`
/// are legal query characters and the image backend expects them
/// unescaped.
fn replace_process_param(url: &mut Url, directive: &str) {
    let mut pairs: Vec<String> = url
        .query()
        .unwrap_or("")
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(PROCESS_PARAM))
        .map(str::to_string)
        .collect();
    pairs.push(format!("{PROCESS_PARAM}={directive}"));
    url.set_query(Some(&pairs.join("&")));
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cdn.example.com/assets/poster.png";

    #[test]
    fn test_parse_url_without_directive() {
        assert_eq!(parse_crop_url(BASE), CropRect::default());
    }

    #[test]
    fn test_parse_full_directive() {
        let url = format!("{BASE}?x-oss-process=image/crop,x_10,y_20,w_30,h_40,g_nw/format,webp");
        assert_eq!(parse_crop_url(&url), CropRect::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_parse_partial_directive() {
        let url = format!("{BASE}?x-oss-process=image/crop,w_120/format,webp");
        assert_eq!(parse_crop_url(&url), CropRect::new(0.0, 0.0, 120.0, 0.0));
    }

    #[test]
    fn test_parse_format_only_directive() {
        let url = format!("{BASE}?x-oss-process=image/format,webp");
        assert_eq!(parse_crop_url(&url), CropRect::default());
    }

    #[test]
    fn test_parse_preserves_foreign_gravity() {
        let url = format!("{BASE}?x-oss-process=image/crop,w_50,h_50,g_center/format,webp");
        let rect = parse_crop_url(&url);
        assert_eq!(rect.gravity, Gravity::Other("center".to_string()));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let url = format!("{BASE}?x-oss-process=image/crop,x_5,q_90,blur_3/format,webp");
        assert_eq!(parse_crop_url(&url), CropRect::new(5.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_non_numeric_token_reads_zero() {
        let url = format!("{BASE}?x-oss-process=image/crop,x_abc,w_40/format,webp");
        assert_eq!(parse_crop_url(&url), CropRect::new(0.0, 0.0, 40.0, 0.0));
    }

    #[test]
    fn test_parse_malformed_url_fails_soft() {
        assert_eq!(parse_crop_url("not a url"), CropRect::default());
        assert_eq!(parse_crop_url(""), CropRect::default());
    }

    #[test]
    fn test_build_empty_rect_collapses_to_format() {
        let url = build_crop_url(BASE, &CropRect::default());
        assert_eq!(url, format!("{BASE}?x-oss-process=image/format,webp"));
    }

    #[test]
    fn test_build_full_rect() {
        let url = build_crop_url(BASE, &CropRect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(
            url,
            format!("{BASE}?x-oss-process=image/crop,x_10,y_20,w_30,h_40/format,webp")
        );
    }

    #[test]
    fn test_build_omits_zero_fields() {
        let url = build_crop_url(BASE, &CropRect::new(0.0, 0.0, 300.0, 150.0));
        assert_eq!(
            url,
            format!("{BASE}?x-oss-process=image/crop,w_300,h_150/format,webp")
        );
    }

    #[test]
    fn test_build_rounds_to_nearest_integer() {
        let url = build_crop_url(BASE, &CropRect::new(9.5, 0.0, 30.4, 40.6));
        assert_eq!(
            url,
            format!("{BASE}?x-oss-process=image/crop,x_10,w_30,h_41/format,webp")
        );
    }

    #[test]
    fn test_build_encodes_non_default_gravity() {
        let mut rect = CropRect::new(0.0, 0.0, 50.0, 50.0);
        rect.gravity = Gravity::Other("se".to_string());
        let url = build_crop_url(BASE, &rect);
        assert_eq!(
            url,
            format!("{BASE}?x-oss-process=image/crop,w_50,h_50,g_se/format,webp")
        );
    }

    #[test]
    fn test_build_drops_gravity_on_empty_rect() {
        // An all-zero rectangle collapses to format-only even with a
        // non-default gravity; matches the backend-observed behavior.
        let mut rect = CropRect::default();
        rect.gravity = Gravity::Other("se".to_string());
        let url = build_crop_url(BASE, &rect);
        assert_eq!(url, format!("{BASE}?x-oss-process=image/format,webp"));
    }

    #[test]
    fn test_build_replaces_existing_directive() {
        let once = build_crop_url(BASE, &CropRect::new(0.0, 0.0, 100.0, 100.0));
        let twice = build_crop_url(&once, &CropRect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(once, twice);

        let changed = build_crop_url(&once, &CropRect::new(5.0, 5.0, 20.0, 20.0));
        assert_eq!(
            changed,
            format!("{BASE}?x-oss-process=image/crop,x_5,y_5,w_20,h_20/format,webp")
        );
    }

    #[test]
    fn test_build_keeps_other_query_params() {
        let base = format!("{BASE}?version=3&token=abc");
        let url = build_crop_url(&base, &CropRect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            url,
            format!("{BASE}?version=3&token=abc&x-oss-process=image/crop,w_10,h_10/format,webp")
        );
    }

    #[test]
    fn test_build_malformed_base_returned_unchanged() {
        assert_eq!(
            build_crop_url("not a url", &CropRect::new(0.0, 0.0, 10.0, 10.0)),
            "not a url"
        );
    }

    #[test]
    fn test_round_trip() {
        let rect = CropRect::new(12.0, 0.0, 340.0, 220.0);
        let parsed = parse_crop_url(&build_crop_url(BASE, &rect));
        assert_eq!(parsed, rect);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
