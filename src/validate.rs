//! Classification of lookup targets.
//!
//! A lookup target is a `.com` domain (optionally prefixed with `http://` or
//! `https://`), a dotted-quad IPv4 address or a colon separated IPv6 address.
//! The check is purely syntactic and only meant as client side filtering; the
//! lookup backend still has to validate whatever it receives.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// Only `.com` is accepted, other top level domains are rejected.
static DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https?://)?[A-Za-z0-9][A-Za-z0-9-]*\.com$").unwrap());

static IPV4: Lazy<Regex> = Lazy::new(|| {
    let octet = r"(?:25[0-5]|2[0-4][0-9]|1?[0-9][0-9]?)";
    Regex::new(&format!(r"^{octet}\.{octet}\.{octet}\.{octet}$")).unwrap()
});

// Not a full RFC 4291 matcher: `::` is only understood in leading position.
static IPV6: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:[0-9a-fA-F]{1,4}:){7}(?:[0-9a-fA-F]{1,4}|:)|::(?:[0-9a-fA-F]{1,4}:){0,6}[0-9a-fA-F]{1,4})$",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Domain,
    Ipv4,
    Ipv6,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InputKind::Domain => "domain",
            InputKind::Ipv4 => "ipv4",
            InputKind::Ipv6 => "ipv6",
        };
        write!(f, "{}", s)
    }
}

/// Returns which kind of lookup target `input` denotes, ignoring surrounding
/// whitespace. Domains are checked first, then IPv4, then IPv6.
pub fn classify(input: &str) -> Option<InputKind> {
    let trimmed = input.trim();
    if DOMAIN.is_match(trimmed) {
        Some(InputKind::Domain)
    } else if IPV4.is_match(trimmed) {
        Some(InputKind::Ipv4)
    } else if IPV6.is_match(trimmed) {
        Some(InputKind::Ipv6)
    } else {
        None
    }
}

pub fn is_valid_input(input: &str) -> bool {
    classify(input).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_invalid() {
        assert!(!is_valid_input(""));
        assert!(!is_valid_input("   "));
    }

    #[test]
    fn com_domains_with_optional_scheme() {
        assert!(is_valid_input("example.com"));
        assert!(is_valid_input("http://example.com"));
        assert!(is_valid_input("https://example.com"));
        assert!(is_valid_input("my-site1.com"));
        assert_eq!(classify("https://example.com"), Some(InputKind::Domain));
    }

    #[test]
    fn rejects_domains_outside_com() {
        assert!(!is_valid_input("example"));
        assert!(!is_valid_input("example.xyz"));
        assert!(!is_valid_input("example.org"));
        assert!(!is_valid_input("example.com.au"));
        assert!(!is_valid_input("sub.example.com"));
    }

    #[test]
    fn rejects_malformed_domains() {
        assert!(!is_valid_input("-example.com"));
        assert!(!is_valid_input("https://-example.com"));
        assert!(!is_valid_input(".com"));
        assert!(!is_valid_input("ftp://example.com"));
        assert!(!is_valid_input("exa_mple.com"));
        assert!(!is_valid_input("exämple.com"));
        assert!(!is_valid_input("example.com/path"));
    }

    #[test]
    fn ipv4_octets_in_range() {
        assert!(is_valid_input("192.168.1.1"));
        assert!(is_valid_input("0.0.0.0"));
        assert!(is_valid_input("255.255.255.255"));
        assert!(is_valid_input("249.200.199.10"));
        assert_eq!(classify("10.0.0.1"), Some(InputKind::Ipv4));
    }

    #[test]
    fn ipv4_out_of_range_or_wrong_count() {
        assert!(!is_valid_input("999.999.999.999"));
        assert!(!is_valid_input("256.1.1.1"));
        assert!(!is_valid_input("192.168.1"));
        assert!(!is_valid_input("192.168.1.1.1"));
        assert!(!is_valid_input("192.168.1."));
        assert!(!is_valid_input("001.1.1.1"));
    }

    #[test]
    fn ipv4_two_digit_leading_zero_is_accepted() {
        assert!(is_valid_input("01.02.03.04"));
    }

    #[test]
    fn ipv6_full_form() {
        assert!(is_valid_input("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(is_valid_input("2001:DB8:0:0:8:800:200C:417A"));
        assert!(is_valid_input("1:2:3:4:5:6:7::"));
        assert_eq!(
            classify("2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
            Some(InputKind::Ipv6)
        );
    }

    #[test]
    fn ipv6_leading_compression() {
        assert!(is_valid_input("::1"));
        assert!(is_valid_input("::ffff:1:2:3:4:5:6"));
        assert!(!is_valid_input("::"));
        assert!(!is_valid_input("::1:2:3:4:5:6:7:8"));
    }

    #[test]
    fn ipv6_rejected_shapes() {
        assert!(!is_valid_input("2001:db8::85a3::8a2e:370:7334::"));
        assert!(!is_valid_input("2001:db8:85a3::"));
        assert!(!is_valid_input("2001:db8::1"));
        assert!(!is_valid_input("1:2:3:4:5:6:7"));
        assert!(!is_valid_input("1:2:3:4:5:6:7:8:9"));
        assert!(!is_valid_input("1:2:3:4:5:6:7:12345"));
        assert!(!is_valid_input("g001:db8:85a3:0:0:8a2e:370:7334"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        for input in [
            "example.com",
            "192.168.1.1",
            "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
            "example.xyz",
        ] {
            let padded = format!(" \t{input}\n ");
            assert_eq!(is_valid_input(&padded), is_valid_input(input), "{input}");
        }
    }

    #[test]
    fn repeated_calls_agree() {
        for input in ["example.com", "999.999.999.999", "::1", "\u{0}", ""] {
            assert_eq!(is_valid_input(input), is_valid_input(input));
        }
    }

    #[test]
    fn long_and_control_input_is_invalid() {
        assert!(!is_valid_input(&"a".repeat(100_000)));
        assert!(!is_valid_input("exam\u{7}ple.com"));
    }

    #[test]
    fn kind_display_matches_serialization() {
        for kind in [InputKind::Domain, InputKind::Ipv4, InputKind::Ipv6] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
