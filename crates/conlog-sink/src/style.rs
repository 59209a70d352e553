//! crates/conlog-sink/src/style.rs
//! ANSI color styling for namespace prefixes.

/// Display color applied to a namespace prefix.
///
/// The named variants cover the standard 8-color SGR palette used by the
/// façade's per-method defaults; [`Color::Fixed`] selects an arbitrary
/// 256-color code for caller-supplied colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    /// SGR 31.
    Red,
    /// SGR 32.
    Green,
    /// SGR 33.
    Yellow,
    /// SGR 34.
    Blue,
    /// SGR 35.
    Magenta,
    /// SGR 36.
    Cyan,
    /// 256-color code (SGR `38;5;n`).
    Fixed(u8),
}

impl Color {
    /// Wraps `text` in the escape sequence for this color, resetting after.
    ///
    /// # Examples
    ///
    /// ```
    /// use conlog_sink::Color;
    ///
    /// assert_eq!(Color::Blue.paint("[request]:"), "\x1b[34m[request]:\x1b[0m");
    /// assert_eq!(Color::Fixed(208).paint("x"), "\x1b[38;5;208mx\x1b[0m");
    /// ```
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{text}\x1b[0m", self.sgr())
    }

    fn sgr(self) -> String {
        match self {
            Self::Red => "31".to_owned(),
            Self::Green => "32".to_owned(),
            Self::Yellow => "33".to_owned(),
            Self::Blue => "34".to_owned(),
            Self::Magenta => "35".to_owned(),
            Self::Cyan => "36".to_owned(),
            Self::Fixed(n) => format!("38;5;{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_use_base_codes() {
        assert_eq!(Color::Red.paint("x"), "\x1b[31mx\x1b[0m");
        assert_eq!(Color::Green.paint("x"), "\x1b[32mx\x1b[0m");
        assert_eq!(Color::Yellow.paint("x"), "\x1b[33mx\x1b[0m");
        assert_eq!(Color::Blue.paint("x"), "\x1b[34mx\x1b[0m");
        assert_eq!(Color::Magenta.paint("x"), "\x1b[35mx\x1b[0m");
        assert_eq!(Color::Cyan.paint("x"), "\x1b[36mx\x1b[0m");
    }

    #[test]
    fn fixed_colors_use_extended_codes() {
        assert_eq!(Color::Fixed(0).paint("x"), "\x1b[38;5;0mx\x1b[0m");
        assert_eq!(Color::Fixed(255).paint("x"), "\x1b[38;5;255mx\x1b[0m");
    }
}
