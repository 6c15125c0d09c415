//! Deterministic auto-color assignment for tags.
//!
//! Maps a tag name to a color from a curated palette using a simple hash,
//! so the same tag always renders the same way without storing a choice.

/// Curated palette of 12 tag colors (6-char hex without `#`).
///
/// Chosen to read well as pill backgrounds in both the light and dark
/// themes of the task views.
const PALETTE: &[&str] = &[
    "3b82f6", // blue
    "10b981", // emerald
    "ef4444", // red
    "8b5cf6", // violet
    "f59e0b", // amber
    "06b6d4", // cyan
    "ec4899", // pink
    "84cc16", // lime
    "f97316", // orange
    "6366f1", // indigo
    "14b8a6", // teal
    "a855f7", // purple
];

/// Return a deterministic color for a tag name.
///
/// Uses an FNV-1a hash mapped to a palette index.
pub fn auto_color(name: &str) -> &'static str {
    let hash = fnv1a(name);
    PALETTE[(hash as usize) % PALETTE.len()]
}

/// FNV-1a hash (32-bit) for short strings.
fn fnv1a(s: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in s.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_color_deterministic() {
        assert_eq!(auto_color("errand"), auto_color("errand"));
    }

    #[test]
    fn test_auto_color_valid_hex() {
        for name in &["work", "home", "urgent", "project", "low-effort"] {
            let color = auto_color(name);
            assert_eq!(color.len(), 6);
            assert!(color.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_palette_coverage() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..100 {
            seen.insert(auto_color(&format!("tag-{}", i)));
        }
        // Should hit at least half the palette
        assert!(seen.len() >= 6, "only hit {} palette entries", seen.len());
    }
}
