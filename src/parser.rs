//! Chart URL parsing.
//!
//! A chart URL looks like
//! `https://charts.idrlabs.com/graphic/autism-spectrum?1&l=EN&p=100,100,50,50,50,100,100,50,50,50`.
//! The scheme, the single-digit flag and the two-letter locale are optional,
//! and the locale may sit on either side of the score parameter. The whole
//! string must match; anything else is rejected without a partial result.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::core::{Error, RawScores, Result, RAW_SCORE_COUNT};

/// Host the published charts are served from
pub const DEFAULT_HOST: &str = "charts.idrlabs.com";

/// Path of the chart the scores belong to
pub const CHART_PATH: &str = "/graphic/autism-spectrum";

static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&chart_url_pattern(DEFAULT_HOST)).expect("default chart URL pattern is valid")
});

/// Build the anchored expression for a given host.
///
/// Character classes are spelled out because `\d` in the regex crate also
/// matches non-ASCII digits.
fn chart_url_pattern(host: &str) -> String {
    let score = "([0-9]{1,3})";
    let scores = vec![score; RAW_SCORE_COUNT].join(",");
    format!(
        r"^(?:https?://)?{host}{path}\?[0-9]?(?:&l=[A-Z]{{2}})?&p={scores}(?:&l=[A-Z]{{2}})?$",
        host = regex::escape(host),
        path = regex::escape(CHART_PATH),
        scores = scores,
    )
}

/// Parses chart URLs for one host.
#[derive(Debug, Clone)]
pub struct UrlParser {
    pattern: Regex,
}

impl Default for UrlParser {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl UrlParser {
    /// Parser accepting charts served from `host` instead of the default
    pub fn with_host(host: &str) -> Result<Self> {
        let host = host.trim();
        if host.is_empty() || host.contains('/') {
            return Err(Error::Configuration(format!(
                "parser host must be a bare host name, got {:?}",
                host
            )));
        }
        let pattern = Regex::new(&chart_url_pattern(host))
            .map_err(|e| Error::Configuration(format!("invalid parser host {:?}: {}", host, e)))?;
        Ok(Self { pattern })
    }

    /// Extract the ten raw scores, in URL order.
    pub fn parse(&self, url: &str) -> Result<RawScores> {
        let captures = self
            .pattern
            .captures(url)
            .ok_or_else(|| Error::invalid_format(url))?;

        let mut values = [0u16; RAW_SCORE_COUNT];
        for (slot, group) in values.iter_mut().zip(captures.iter().skip(1)) {
            // The grammar limits each group to 1-3 ASCII digits
            *slot = group
                .ok_or_else(|| Error::invalid_format(url))?
                .as_str()
                .parse()
                .map_err(|_| Error::invalid_format(url))?;
        }

        let scores = RawScores::new(values)?;
        debug!(scores = ?scores.as_array(), "Parsed chart URL");
        Ok(scores)
    }
}

/// Parse a chart URL served from [`DEFAULT_HOST`].
pub fn parse(url: &str) -> Result<RawScores> {
    UrlParser::default().parse(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCORES: &str = "100,100,50,50,50,100,100,50,50,50";
    const EXPECTED: [u16; 10] = [100, 100, 50, 50, 50, 100, 100, 50, 50, 50];

    fn url(query: &str) -> String {
        format!("https://charts.idrlabs.com/graphic/autism-spectrum?{}", query)
    }

    #[test]
    fn test_parse_full_url() {
        let scores = parse(&url(&format!("1&p={}&l=EN", SCORES))).unwrap();
        assert_eq!(scores.as_array(), &EXPECTED);
    }

    #[test]
    fn test_parse_accepts_locale_before_scores() {
        let scores = parse(&url(&format!("1&l=DE&p={}", SCORES))).unwrap();
        assert_eq!(scores.as_array(), &EXPECTED);
    }

    #[test]
    fn test_parse_accepts_missing_optional_parts() {
        let bare = format!("charts.idrlabs.com/graphic/autism-spectrum?&p={}", SCORES);
        assert_eq!(parse(&bare).unwrap().as_array(), &EXPECTED);

        let http = format!("http://charts.idrlabs.com/graphic/autism-spectrum?&p={}", SCORES);
        assert_eq!(parse(&http).unwrap().as_array(), &EXPECTED);
    }

    #[test]
    fn test_parse_keeps_leading_zeros_as_numbers() {
        let scores = parse(&url("&p=007,0,00,1,2,3,4,5,6,999")).unwrap();
        assert_eq!(scores.as_array(), &[7, 0, 0, 1, 2, 3, 4, 5, 6, 999]);
    }

    #[test]
    fn test_parse_rejects_wrong_score_count() {
        assert!(parse(&url("1&p=1,2,3,4,5,6,7,8,9")).is_err());
        assert!(parse(&url("1&p=1,2,3,4,5,6,7,8,9,10,11")).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_scores() {
        assert!(parse(&url("1&p=1,2,3,4,5,6,7,8,9,1000")).is_err());
        assert!(parse(&url("1&p=1,2,3,4,5,6,7,8,9,x")).is_err());
        assert!(parse(&url("1&p=1,2,3,4,5,6,7,8,9,-1")).is_err());
        assert!(parse(&url("1&p=1;2,3,4,5,6,7,8,9,10")).is_err());
        assert!(parse(&url("1&p=1,2,3,4,5,6,7,8,9,١")).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_optional_parts() {
        assert!(parse(&url(&format!("12&p={}", SCORES))).is_err());
        assert!(parse(&url(&format!("1&p={}&l=en", SCORES))).is_err());
        assert!(parse(&url(&format!("1&p={}&l=ENG", SCORES))).is_err());
        assert!(parse(&format!(
            "ftp://charts.idrlabs.com/graphic/autism-spectrum?1&p={}",
            SCORES
        ))
        .is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_prefix() {
        assert!(parse(&format!("https://charts.idrlabs.com/graphic/other?1&p={}", SCORES)).is_err());
        assert!(parse(&format!("https://idrlabs.com/graphic/autism-spectrum?1&p={}", SCORES)).is_err());
        assert!(parse(&format!("https://chartsXidrlabs.com/graphic/autism-spectrum?1&p={}", SCORES)).is_err());
    }

    #[test]
    fn test_parse_error_is_invalid_format() {
        let err = parse("hello").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { ref input } if input == "hello"));
    }

    #[test]
    fn test_with_host_accepts_only_that_host() {
        let parser = UrlParser::with_host("charts.example.com").unwrap();
        let custom = format!("https://charts.example.com/graphic/autism-spectrum?1&p={}", SCORES);
        assert_eq!(parser.parse(&custom).unwrap().as_array(), &EXPECTED);
        assert!(parser.parse(&url(&format!("1&p={}", SCORES))).is_err());
    }

    #[test]
    fn test_with_host_rejects_paths() {
        assert!(UrlParser::with_host("example.com/graphic").is_err());
        assert!(UrlParser::with_host("  ").is_err());
    }
}
