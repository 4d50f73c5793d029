/// One of the three typefaces compiled into libshapes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Typeface {
    Sans,
    #[default]
    Serif,
    Mono,
}

impl Typeface {
    /// Maps a generic family name. Unrecognised names fall back to serif.
    pub fn from_family(family: &str) -> Self {
        match family {
            "sans" => Typeface::Sans,
            "serif" => Typeface::Serif,
            "mono" => Typeface::Mono,
            _ => Typeface::Serif,
        }
    }

    pub fn family(self) -> &'static str {
        match self {
            Typeface::Sans => "sans",
            Typeface::Serif => "serif",
            Typeface::Mono => "mono",
        }
    }
}

impl From<&str> for Typeface {
    fn from(family: &str) -> Self {
        Typeface::from_family(family)
    }
}

/// Horizontal anchoring of a text run relative to its `(x, y)` point.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TextAlign {
    /// Text begins at `x`.
    #[default]
    Start,
    /// Text is centered on `x`.
    Middle,
    /// Text ends at `x`.
    End,
}
