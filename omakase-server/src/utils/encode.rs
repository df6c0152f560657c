//! Percent encoding for URL components
//!
//! Matches the unreserved set of JavaScript's `encodeURIComponent`,
//! which both the proxy chain and the wa.me deep link expect.

/// Percent-encode a string for use as a URL component
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", byte));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_passthrough() {
        assert_eq!(percent_encode("abc-DEF_123.~*'()"), "abc-DEF_123.~*'()");
    }

    #[test]
    fn test_reserved_encoded() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(
            percent_encode("https://example.com/?x=1"),
            "https%3A%2F%2Fexample.com%2F%3Fx%3D1"
        );
    }

    #[test]
    fn test_multibyte_utf8() {
        assert_eq!(percent_encode("café"), "caf%C3%A9");
        assert_eq!(percent_encode("\n"), "%0A");
    }
}
