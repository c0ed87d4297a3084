//! Placeholder images for gallery entries whose picture is missing.

use sha2::{Digest, Sha256};

pub const FALLBACK_IMAGES: [&str; 6] = [
    "/static/img/fallback/ballet.jpg",
    "/static/img/fallback/contemporary.jpg",
    "/static/img/fallback/hip-hop.jpg",
    "/static/img/fallback/jazz.jpg",
    "/static/img/fallback/salsa.jpg",
    "/static/img/fallback/tap.jpg",
];

/// Picks a placeholder for `id`. The same id always maps to the same image,
/// so a page does not reshuffle its placeholders between renders.
pub fn fallback_image(id: &str) -> &'static str {
    let digest = Sha256::digest(id.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);

    let index = u64::from_be_bytes(prefix) % FALLBACK_IMAGES.len() as u64;
    FALLBACK_IMAGES[index as usize]
}

/// Returns `url` when it is present and non-blank, the placeholder otherwise
pub fn resolve_image<'a>(id: &str, url: Option<&'a str>) -> &'a str {
    match url {
        Some(url) if !url.trim().is_empty() => url,
        _ => fallback_image(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_deterministic() {
        for id in ["", "a", "gallery-42", "6f9619ff-8b86-d011-b42d-00cf4fc964ff"] {
            assert_eq!(fallback_image(id), fallback_image(id), "Unstable fallback for {:?}", id);
            assert!(FALLBACK_IMAGES.contains(&fallback_image(id)));
        }
    }

    #[test]
    fn test_fallback_spreads_over_images() {
        let distinct: std::collections::HashSet<_> =
            (0..200).map(|i| fallback_image(&format!("image-{i}"))).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_resolve_prefers_real_url() {
        assert_eq!(resolve_image("x", Some("https://cdn.example.com/a.jpg")), "https://cdn.example.com/a.jpg");
        assert_eq!(resolve_image("x", Some("  ")), fallback_image("x"));
        assert_eq!(resolve_image("x", None), fallback_image("x"));
    }
}
