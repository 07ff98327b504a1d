/// Console color palette used by color-capable sinks.
///
/// The palette is deliberately small. Each channel picks one color and the
/// console sink renders it as an ANSI escape when the terminal supports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Gray,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

/// Escape sequence that restores the terminal's default attributes.
pub const ANSI_RESET: &str = "\x1B[0m";

impl Color {
    /// Returns the ANSI escape sequence that switches the terminal to this color.
    ///
    /// Every color except `Gray` is rendered bold, which keeps `White` and
    /// `Gray` distinguishable on most terminals.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slog::Color;
    /// assert_eq!(Color::Red.ansi_escape(), "\x1B[31;1m");
    /// assert_eq!(Color::Gray.ansi_escape(), "\x1B[37m");
    /// ```
    pub const fn ansi_escape(self) -> &'static str {
        match self {
            Color::White => "\x1B[37;1m",
            Color::Gray => "\x1B[37m",
            Color::Red => "\x1B[31;1m",
            Color::Green => "\x1B[32;1m",
            Color::Blue => "\x1B[34;1m",
            Color::Yellow => "\x1B[33;1m",
            Color::Magenta => "\x1B[35;1m",
            Color::Cyan => "\x1B[36;1m",
        }
    }
}

/// Decides from a `TERM` value whether ANSI escapes are safe to emit.
///
/// `None` (variable unset), empty and `dumb` all mean plain output.
pub fn term_supports_ansi(term: Option<&str>) -> bool {
    match term {
        None | Some("") | Some("dumb") => false,
        Some(t) => {
            t.starts_with("xterm")
                || t.starts_with("screen")
                || t.starts_with("tmux")
                || t.starts_with("rxvt")
                || t.starts_with("vt100")
                || t == "linux"
                || t == "ansi"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_are_distinct() {
        let all = [
            Color::White,
            Color::Gray,
            Color::Red,
            Color::Green,
            Color::Blue,
            Color::Yellow,
            Color::Magenta,
            Color::Cyan,
        ];
        for i in 0..all.len() {
            assert!(all[i].ansi_escape().starts_with("\x1B["));
            for j in i + 1..all.len() {
                assert_ne!(all[i].ansi_escape(), all[j].ansi_escape());
            }
        }
    }

    #[test]
    fn test_term_detection() {
        assert!(term_supports_ansi(Some("xterm")));
        assert!(term_supports_ansi(Some("xterm-256color")));
        assert!(term_supports_ansi(Some("screen-256color")));
        assert!(!term_supports_ansi(Some("dumb")));
        assert!(!term_supports_ansi(Some("")));
        assert!(!term_supports_ansi(None));
        assert!(!term_supports_ansi(Some("cygwin")));
    }
}
