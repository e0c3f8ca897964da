//! Startup banner, written to stderr so stdout stays pipeable.

use owo_colors::{OwoColorize, Stream};

const BANNER_LINES: [&str; 4] = [
    "              |          |    ",
    ".   .,---.,---|.   .,---.|--- ",
    "|   ||   ||   ||   |`---.|    ",
    "`---'`   '`---'`---'`---'`---'",
];

/// Prints the banner with a white-to-gray fade. Cosmetic only.
pub fn print_banner() {
    eprintln!();
    for (i, line) in BANNER_LINES.iter().enumerate() {
        let level = 255u8.saturating_sub(30 * i as u8);
        eprintln!(
            "  {}",
            line.if_supports_color(Stream::Stderr, |text| text.truecolor(level, level, level))
        );
    }
    eprintln!();
}
