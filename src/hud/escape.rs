//! ANSI escape sequences used by the game log and warnings.

/// Select Graphic Rendition parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Reset,
    Bold,
    NotBold,
    RedFg,
    BrightRedFg,
    BrightGreenFg,
    BrightYellowFg,
    BrightBlueFg,
    BrightWhiteFg,
    BlackBg,
}

impl DisplayMode {
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            DisplayMode::Reset => 0,
            DisplayMode::Bold => 1,
            DisplayMode::NotBold => 22,
            DisplayMode::RedFg => 31,
            DisplayMode::BrightRedFg => 91,
            DisplayMode::BrightGreenFg => 92,
            DisplayMode::BrightYellowFg => 93,
            DisplayMode::BrightBlueFg => 94,
            DisplayMode::BrightWhiteFg => 97,
            DisplayMode::BlackBg => 40,
        }
    }
}

/// Control Sequence Introducer, `ESC [`.
pub const CSI: &str = "\x1b[";

pub const ERASE_IN_DISPLAY: &str = "\x1b[J";
pub const ERASE_IN_LINE: &str = "\x1b[K";

pub const SHOW_CURSOR: &str = "\x1b[?25h";
pub const HIDE_CURSOR: &str = "\x1b[?25l";

pub fn cursor_up(cells: usize) -> String {
    format!("{CSI}{cells}A")
}

pub fn sgr(mode: DisplayMode) -> String {
    format!("{CSI}{}m", mode.code())
}
