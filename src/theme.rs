pub mod catppuccin {
    use nu_ansi_term::Color;
    pub struct Mocha;
    impl Mocha {
        pub const SURFACE2: Color = Color::Rgb(108, 112, 134);  // Subtle dim
        pub const MAUVE: Color = Color::Rgb(203, 166, 247);
    }
}

use nu_ansi_term::Style;
use catppuccin::Mocha;

/// Style for the input prompt.
pub fn prompt_style() -> Style {
    Style::new().fg(Mocha::MAUVE).bold()
}

/// Style for the header line above the generated program.
pub fn header_style() -> Style {
    Style::new().fg(Mocha::SURFACE2)
}
