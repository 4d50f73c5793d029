use super::names::NAMED_COLORS;

/// Straight 8-bit RGB triple.
///
/// Alpha is never stored here; every paint call takes it as a separate `f32`
/// in `[0, 1]`, which is how the native API consumes it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Looks up an SVG color name. Matching is exact and case-sensitive.
    pub fn named(name: &str) -> Option<Rgb> {
        NAMED_COLORS
            .binary_search_by(|(n, _)| (*n).cmp(name))
            .ok()
            .map(|i| NAMED_COLORS[i].1)
    }

    /// Channels scaled to `[0, 1]`, as the native gradient ramps expect them.
    #[inline]
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
        ]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// Resolves a color name or an `rgb(r,g,b)` string.
///
/// Unknown names and malformed `rgb()` strings resolve to black. This never
/// fails; callers that need to tell the difference should use [`Rgb::named`].
pub fn lookup_color(s: &str) -> Rgb {
    if let Some(rgb) = Rgb::named(s) {
        return rgb;
    }
    match s.strip_prefix("rgb(") {
        Some(args) => parse_rgb_args(args).unwrap_or(Rgb::BLACK),
        None => Rgb::BLACK,
    }
}

/// Parses `r,g,b)` (the part after `rgb(`).
///
/// Whitespace is accepted before each number, not around the separators.
/// Anything after the closing paren is ignored.
fn parse_rgb_args(s: &str) -> Option<Rgb> {
    let mut rest = s;
    let mut channels = [0u8; 3];

    for (i, channel) in channels.iter_mut().enumerate() {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() && c != '\n');

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        *channel = rest[..digits].parse::<u8>().ok()?;
        rest = &rest[digits..];

        let sep = if i < 2 { ',' } else { ')' };
        rest = rest.strip_prefix(sep)?;
    }

    let [red, green, blue] = channels;
    Some(Rgb::new(red, green, blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── named lookup ──────────────────────────────────────────────────────

    #[test]
    fn cornflowerblue() {
        assert_eq!(lookup_color("cornflowerblue"), Rgb::new(100, 149, 237));
    }

    #[test]
    fn named_table_samples() {
        let cases = [
            ("aliceblue", (240, 248, 255)),
            ("black", (0, 0, 0)),
            ("darkgoldenrod", (184, 134, 11)),
            ("grey", (128, 128, 128)),
            ("lightgoldenrodyellow", (250, 250, 210)),
            ("rebeccapurple", (0, 0, 0)), // not in the SVG 1.1 table
            ("white", (255, 255, 255)),
            ("yellowgreen", (154, 205, 50)),
        ];
        for (name, rgb) in cases {
            assert_eq!(lookup_color(name), Rgb::from(rgb), "{name}");
        }
    }

    #[test]
    fn every_table_entry_resolves_to_itself() {
        for &(name, rgb) in NAMED_COLORS {
            assert_eq!(Rgb::named(name), Some(rgb), "{name}");
        }
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        assert_eq!(Rgb::named("Red"), None);
        assert_eq!(lookup_color("RED"), Rgb::BLACK);
    }

    #[test]
    fn unknown_name_is_black() {
        assert_eq!(lookup_color("not-a-color"), Rgb::BLACK);
        assert_eq!(lookup_color(""), Rgb::BLACK);
    }

    // ── rgb() strings ─────────────────────────────────────────────────────

    #[test]
    fn rgb_function() {
        assert_eq!(lookup_color("rgb(10,20,30)"), Rgb::new(10, 20, 30));
        assert_eq!(lookup_color("rgb(255,0,255)"), Rgb::new(255, 0, 255));
    }

    #[test]
    fn rgb_allows_space_before_numbers() {
        assert_eq!(lookup_color("rgb( 1, 2,\t3)"), Rgb::new(1, 2, 3));
    }

    #[test]
    fn rgb_rejects_space_before_separator() {
        assert_eq!(lookup_color("rgb(1 ,2,3)"), Rgb::BLACK);
        assert_eq!(lookup_color("rgb(1,2,3 )"), Rgb::BLACK);
    }

    #[test]
    fn rgb_ignores_trailing_text() {
        assert_eq!(lookup_color("rgb(1,2,3)xyz"), Rgb::new(1, 2, 3));
    }

    #[test]
    fn rgb_malformed_is_black() {
        for s in [
            "rgb(1,2)",
            "rgb(1,2,3",
            "rgb(a,b,c)",
            "rgb(-1,2,3)",
            "rgb(256,0,0)",
            "rgb()",
            "rgb(1,\n2,3)",
            "RGB(1,2,3)",
            "rgb (1,2,3)",
        ] {
            assert_eq!(lookup_color(s), Rgb::BLACK, "{s:?}");
        }
    }

    #[test]
    fn to_unit_scales_channels() {
        assert_eq!(Rgb::new(255, 0, 51).to_unit(), [1.0, 0.0, 0.2]);
    }
}
