use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use cluster_recommender::catalog::SongCard;
use crossterm::style::{Attribute, Stylize};
use unicode_width::UnicodeWidthStr;

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Color Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub mod colors {
    use crossterm::style::Color;

    pub const GREEN: Color = Color::Rgb {
        r: 29,
        g: 185,
        b: 84,
    };
    pub const LIGHT_GREEN: Color = Color::Rgb {
        r: 30,
        g: 215,
        b: 96,
    };
    pub const ORANGE: Color = Color::Rgb {
        r: 255,
        g: 165,
        b: 0,
    };
    pub const RED: Color = Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

pub mod box_chars {
    pub const ROUND_TOP_LEFT: &str = "╭";
    pub const ROUND_TOP_RIGHT: &str = "╮";
    pub const ROUND_BOTTOM_LEFT: &str = "╰";
    pub const ROUND_BOTTOM_RIGHT: &str = "╯";
    pub const SINGLE_HORIZONTAL: &str = "─";
    pub const SINGLE_VERTICAL: &str = "│";

    pub const CHECK: &str = "✓";
    pub const CROSS_MARK: &str = "✗";
}

// ═══════════════════════════════════════════════════════════════════════════════
// Banner
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_banner() {
    let banner = r#"
   ♫  ┌─┐┬  ┬ ┬┌─┐┌┬┐┌─┐┬─┐  ┬─┐┌─┐┌─┐┌─┐
      │  │  │ │└─┐ │ ├┤ ├┬┘  ├┬┘├┤ │  └─┐
      └─┘┴─┘└─┘└─┘ ┴ └─┘┴└─  ┴└─└─┘└─┘└─┘
"#;
    for line in banner.lines() {
        println!("{}", line.with(colors::GREEN).bold());
    }
    println!(
        "{}",
        "   Search for a track or artist, :quit to exit".with(colors::DIM)
    );
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Status Indicators
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_success(message: &str) {
    println!(
        " {} {}",
        box_chars::CHECK.to_string().with(colors::GREEN).bold(),
        message.with(colors::GREEN)
    );
}

pub fn print_error(message: &str) {
    println!(
        " {} {}",
        box_chars::CROSS_MARK.to_string().with(colors::RED).bold(),
        message.with(colors::RED)
    );
}

pub fn print_warning(message: &str) {
    println!(
        " {} {}",
        "⚠".with(colors::ORANGE).bold(),
        message.with(colors::ORANGE)
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Song Cards
// ═══════════════════════════════════════════════════════════════════════════════

const MIN_CARD_WIDTH: usize = 40;

/// `1234567` -> `1,234,567`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn card_lines(card: &SongCard) -> [String; 3] {
    [
        card.track_name.clone(),
        card.artist_name.clone(),
        format!(
            "♫ Streams: {} | Year: {}",
            format_thousands(card.streams),
            card.released_year
        ),
    ]
}

/// Inner width of the box, wide enough for the longest line.
fn card_width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|l| l.width())
        .max()
        .unwrap_or(0)
        .max(MIN_CARD_WIDTH)
}

fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

pub fn print_song_card(card: &SongCard) {
    let lines = card_lines(card);
    let width = card_width(&lines);
    let border = box_chars::SINGLE_HORIZONTAL.repeat(width + 2);
    let side = box_chars::SINGLE_VERTICAL.with(colors::GREEN);

    println!(
        "{}",
        format!(
            "{}{}{}",
            box_chars::ROUND_TOP_LEFT,
            border,
            box_chars::ROUND_TOP_RIGHT
        )
        .with(colors::GREEN)
    );
    println!(
        "{} {} {}",
        side,
        pad(&lines[0], width).with(colors::WHITE).bold(),
        side
    );
    println!(
        "{} {} {}",
        side,
        pad(&lines[1], width)
            .with(colors::LIGHT_GREEN)
            .attribute(Attribute::Italic),
        side
    );
    println!(
        "{} {} {}",
        side,
        pad(&lines[2], width).with(colors::DIM),
        side
    );
    println!(
        "{}",
        format!(
            "{}{}{}",
            box_chars::ROUND_BOTTOM_LEFT,
            border,
            box_chars::ROUND_BOTTOM_RIGHT
        )
        .with(colors::GREEN)
    );
}
