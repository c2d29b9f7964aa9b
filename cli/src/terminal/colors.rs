use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 129, g: 140, b: 248 };
pub const SECONDARY: Color = Color::TrueColor { r: 196, g: 181, b: 253 };
pub const ACCENT: Color = Color::TrueColor { r: 250, g: 204, b: 21 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 209, g: 213, b: 219 };
pub const ERROR: Color = Color::TrueColor { r: 248, g: 113, b: 113 };
pub const RESULT: Color = Color::TrueColor { r: 52, g: 211, b: 153 };

pub const GRADE_TOP: Color = Color::TrueColor { r: 52, g: 211, b: 153 };
pub const GRADE_MID: Color = Color::TrueColor { r: 250, g: 204, b: 21 };
pub const GRADE_LOW: Color = Color::TrueColor { r: 251, g: 146, b: 60 };
pub const GRADE_FAIL: Color = Color::TrueColor { r: 248, g: 113, b: 113 };
