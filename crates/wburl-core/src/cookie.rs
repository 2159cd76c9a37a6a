//! Cookie lookup in a browser-style `name=value; name2=value2` string.

use crate::error::UrlError;

/// Returns the value of the first cookie named exactly `name`.
///
/// The value is everything after the `=` up to the next `;` (or the end of
/// the string), surrounding whitespace included, and may be empty. Whitespace
/// around the key is ignored; keys must match exactly, so `fosf=1` is not a
/// hit for `osf`.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value)
}

/// Like [`cookie_value`], but an absent cookie is an error.
pub fn require_cookie<'a>(cookies: &'a str, name: &str) -> Result<&'a str, UrlError> {
    cookie_value(cookies, name).ok_or_else(|| UrlError::MissingCookie {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_cookie() {
        assert_eq!(cookie_value("osf=abc123", "osf"), Some("abc123"));
    }

    #[test]
    fn finds_cookie_among_others() {
        let jar = "_ga=GA1.2.3; osf=54321.abcdef; csrftoken=xyz";
        assert_eq!(cookie_value(jar, "osf"), Some("54321.abcdef"));
        assert_eq!(cookie_value(jar, "csrftoken"), Some("xyz"));
    }

    #[test]
    fn value_stops_at_semicolon_and_keeps_equals() {
        assert_eq!(cookie_value("osf=a=b==; x=1", "osf"), Some("a=b=="));
    }

    #[test]
    fn empty_value_is_present() {
        assert_eq!(cookie_value("osf=; other=1", "osf"), Some(""));
        assert_eq!(cookie_value("other=1; osf=", "osf"), Some(""));
    }

    #[test]
    fn value_keeps_surrounding_whitespace() {
        assert_eq!(cookie_value("osf= padded ;x=1", "osf"), Some(" padded "));
        assert_eq!(cookie_value("x=1;  osf=tail ", "osf"), Some("tail "));
    }

    #[test]
    fn first_occurrence_wins() {
        assert_eq!(cookie_value("osf=first; osf=second", "osf"), Some("first"));
    }

    #[test]
    fn key_must_match_exactly() {
        assert_eq!(cookie_value("fosf=1; osfx=2", "osf"), None);
        assert_eq!(cookie_value("fosf=1; osf=3", "osf"), Some("3"));
    }

    #[test]
    fn absent_or_malformed() {
        assert_eq!(cookie_value("", "osf"), None);
        assert_eq!(cookie_value("osf", "osf"), None);
        assert_eq!(cookie_value(";;", "osf"), None);
    }

    #[test]
    fn require_cookie_reports_name() {
        let err = require_cookie("a=1", "osf").unwrap_err();
        assert_eq!(
            err,
            UrlError::MissingCookie {
                name: "osf".to_string()
            }
        );
        assert_eq!(require_cookie("osf=v", "osf").unwrap(), "v");
    }
}
