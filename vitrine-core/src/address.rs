//! Addresses for catalog entries.
//!
//! An address is the published prefix followed by the percent-encoded
//! filename. Only `A-Z a-z 0-9 - _ . ~` survive unencoded, so spaces,
//! reserved URL characters, and non-ASCII names are all safe in a path.

use crate::error::{CatalogError, Result};

/// Build the address for `name` under `prefix`.
pub fn encode_address(prefix: &str, name: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    format!("{}/{}", prefix, urlencoding::encode(name))
}

/// Recover the filename an address was built from.
pub fn decode_address(prefix: &str, address: &str) -> Result<String> {
    let prefix = prefix.trim_end_matches('/');
    let encoded = address
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| {
            CatalogError::InvalidAddress(format!(
                "{address} is not under {prefix}/"
            ))
        })?;

    urlencoding::decode(encoded)
        .map(|name| name.into_owned())
        .map_err(|err| CatalogError::InvalidAddress(err.to_string()))
}

/// Absolute, shareable link for an address served by `origin`.
pub fn absolute_link(origin: &str, address: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_names_are_untouched() {
        assert_eq!(encode_address("/Media", "a.png"), "/Media/a.png");
        assert_eq!(encode_address("/Media/", "clip_01.mp4"), "/Media/clip_01.mp4");
    }

    #[test]
    fn test_unsafe_characters_are_encoded() {
        assert_eq!(
            encode_address("/Media", "summer trip #1?.jpg"),
            "/Media/summer%20trip%20%231%3F.jpg"
        );
        assert_eq!(encode_address("/Media", "a/b.txt"), "/Media/a%2Fb.txt");
        assert_eq!(encode_address("/Media", "café.png"), "/Media/caf%C3%A9.png");
    }

    #[test]
    fn test_round_trip_for_awkward_names() {
        for name in [
            "with space.png",
            "100% real.mp4",
            "ünïcødé 写真.jpeg",
            "a+b=c&d.pdf",
            "semi;colon,comma.txt",
            "%41 literal.txt",
        ] {
            let address = encode_address("/Media", name);
            assert_eq!(decode_address("/Media", &address).unwrap(), name);
        }
    }

    #[test]
    fn test_decode_rejects_foreign_prefix() {
        let err = decode_address("/Media", "/Other/a.png").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidAddress(_)));
        assert!(decode_address("/Media", "/Mediaa.png").is_err());
    }

    #[test]
    fn test_absolute_link() {
        assert_eq!(
            absolute_link("http://localhost:3000/", "/Media/a%20b.png"),
            "http://localhost:3000/Media/a%20b.png"
        );
    }

    proptest! {
        #[test]
        fn address_round_trips(name in "\\PC{1,40}") {
            let address = encode_address("/Media", &name);
            prop_assert_eq!(decode_address("/Media", &address).unwrap(), name);
        }
    }
}
