use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// OneDark-flavored skin for log output.
pub struct LogTheme;

impl LogTheme {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(LogTheme::FG);
        skin.bold.set_fg(LogTheme::YELLOW);

        skin.headers[0].set_fg(LogTheme::RED);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(LogTheme::BLUE);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.bullet.set_fg(LogTheme::RED);
        skin.inline_code.set_fg(LogTheme::GREEN);
        skin.table.set_fg(LogTheme::COMMENT);

        skin
    }

    pub const FG: Color = Color::Rgb {
        r: 0xAB,
        g: 0xB2,
        b: 0xBF,
    }; // #ABB2BF
    pub const RED: Color = Color::Rgb {
        r: 0xE0,
        g: 0x6C,
        b: 0x75,
    }; // #E06C75
    pub const YELLOW: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC0,
        b: 0x7B,
    }; // #E5C07B
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    }; // #98C379
    pub const BLUE: Color = Color::Rgb {
        r: 0x61,
        g: 0xAF,
        b: 0xEF,
    }; // #61AFEF
    pub const COMMENT: Color = Color::Rgb {
        r: 0x5C,
        g: 0x63,
        b: 0x70,
    }; // #5C6370
}
