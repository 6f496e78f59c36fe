use colored::Color;

pub const FIRE: &str = "\u{1f525}"; // 🔥
pub const RAINBOW: &str = "\u{1f308}"; // 🌈
pub const ALIEN: &str = "\u{1f47d}"; // 👽
pub const ROBOT: &str = "\u{1f916}"; // 🤖
pub const TOOL: &str = "\u{1f527}"; // 🔧
pub const BULLETPOINT: &str = "\u{25b6}"; // ▶

/// The visual treatment of a message level: a color paired with an emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    pub color: Color,
    pub emoji: &'static str,
}

/// Severity/intent of a message. Closed set; every level maps to a fixed
/// [`Expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Error,
    Success,
    Warning,
    Info,
    Remedy,
}

impl MessageLevel {
    pub const fn expression(self) -> Expression {
        match self {
            Self::Error => Expression {
                color: Color::BrightRed,
                emoji: FIRE,
            },
            Self::Success => Expression {
                color: Color::BrightGreen,
                emoji: RAINBOW,
            },
            Self::Warning => Expression {
                color: Color::BrightYellow,
                emoji: ALIEN,
            },
            Self::Info => Expression {
                color: Color::BrightBlue,
                emoji: ROBOT,
            },
            Self::Remedy => Expression {
                color: Color::BrightMagenta,
                emoji: TOOL,
            },
        }
    }

    pub const fn color(self) -> Color {
        self.expression().color
    }

    pub const fn emoji(self) -> &'static str {
        self.expression().emoji
    }
}
