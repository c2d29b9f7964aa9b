#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Disables ANSI colors in every rendered line.
    pub no_color: bool,
    /// `0` prints everything, `1` hides headers, `2` prints only the bare result.
    pub quiet: u8,
    /// Emits machine readable output instead of tables (one-shot `calc` only).
    pub json: bool,
}
