//! Hex color handling for tag chips and theme overrides.

/// Parse `"#RRGGBB"` (or `"#RGB"`, expanded per-digit) into an RGB triple.
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String;
    let hex = if hex.len() == 3 {
        expanded = hex.chars().flat_map(|c| [c, c]).collect();
        &expanded
    } else {
        hex
    };
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Contrasting foreground for a hex background color.
///
/// WCAG brightness `(r*299 + g*587 + b*114) / 1000`; above 180 gets black
/// text, otherwise white. Malformed input falls back to black, so a bad
/// color degrades to unreadable-but-rendered rather than an error.
pub fn contrast_color(hex_color: &str) -> &'static str {
    let Some((r, g, b)) = parse_hex_rgb(hex_color) else {
        return "#000000";
    };
    let brightness = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
    if brightness > 180 { "#000000" } else { "#ffffff" }
}
