//! Style state shared between the SGR tracker and the HTML renderer.

/// The 16 classic 4-bit terminal colors (8 normal + 8 bright).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Look up a color by palette index (0..=15).
    pub fn from_index(index: u8) -> Option<Self> {
        use AnsiColor::*;
        match index {
            0 => Some(Black),
            1 => Some(Red),
            2 => Some(Green),
            3 => Some(Yellow),
            4 => Some(Blue),
            5 => Some(Magenta),
            6 => Some(Cyan),
            7 => Some(White),
            8 => Some(BrightBlack),
            9 => Some(BrightRed),
            10 => Some(BrightGreen),
            11 => Some(BrightYellow),
            12 => Some(BrightBlue),
            13 => Some(BrightMagenta),
            14 => Some(BrightCyan),
            15 => Some(BrightWhite),
            _ => None,
        }
    }

    /// CSS custom property name for this color (e.g. "red", "bright-red").
    pub fn name(self) -> &'static str {
        match self {
            AnsiColor::Black => "black",
            AnsiColor::Red => "red",
            AnsiColor::Green => "green",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Blue => "blue",
            AnsiColor::Magenta => "magenta",
            AnsiColor::Cyan => "cyan",
            AnsiColor::White => "white",
            AnsiColor::BrightBlack => "bright-black",
            AnsiColor::BrightRed => "bright-red",
            AnsiColor::BrightGreen => "bright-green",
            AnsiColor::BrightYellow => "bright-yellow",
            AnsiColor::BrightBlue => "bright-blue",
            AnsiColor::BrightMagenta => "bright-magenta",
            AnsiColor::BrightCyan => "bright-cyan",
            AnsiColor::BrightWhite => "bright-white",
        }
    }

    /// Fallback hex value used when the custom property is unset.
    ///
    /// The table is the conventional VGA-derived one and is kept fixed so
    /// that emitted markup stays stable across releases.
    pub fn hex(self) -> &'static str {
        match self {
            AnsiColor::Black => "#000",
            AnsiColor::Red => "#a00",
            AnsiColor::Green => "#0a0",
            AnsiColor::Yellow => "#a50",
            AnsiColor::Blue => "#00a",
            AnsiColor::Magenta => "#a0a",
            AnsiColor::Cyan => "#0aa",
            AnsiColor::White => "#aaa",
            AnsiColor::BrightBlack => "#555",
            AnsiColor::BrightRed => "#f55",
            AnsiColor::BrightGreen => "#5f5",
            AnsiColor::BrightYellow => "#ff5",
            AnsiColor::BrightBlue => "#55f",
            AnsiColor::BrightMagenta => "#f5f",
            AnsiColor::BrightCyan => "#5ff",
            AnsiColor::BrightWhite => "#fff",
        }
    }
}

/// Active display attributes at a point in the scan.
///
/// `Default` is the all-off state a terminal starts in and returns to on
/// SGR 0.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub fg: Option<AnsiColor>,
    pub bg: Option<AnsiColor>,
}

impl StyleState {
    /// True if no attribute is set; plain runs are emitted without markup.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..=15u8 {
            let color = AnsiColor::from_index(index).unwrap();
            assert!(!color.name().is_empty());
            assert!(color.hex().starts_with('#'));
        }
        assert_eq!(AnsiColor::from_index(16), None);
    }

    #[test]
    fn test_bright_names_are_prefixed() {
        assert_eq!(AnsiColor::BrightRed.name(), "bright-red");
        assert_eq!(AnsiColor::Red.name(), "red");
    }

    #[test]
    fn test_default_state_is_plain() {
        assert!(StyleState::default().is_plain());
        let bold = StyleState {
            bold: true,
            ..Default::default()
        };
        assert!(!bold.is_plain());
    }
}
