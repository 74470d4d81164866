// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argument coloring.
//!
//! Each argument is styled according to what it is, before it is substituted into the
//! template.  The template itself is never touched here.
//!
//! | Argument                              | Rendering                     | Palette role |
//! |---------------------------------------|-------------------------------|--------------|
//! | [Arg::Bool], [Arg::Absent]            | `true` / `false` / `none`     | `muted`      |
//! | [Arg::Integer], [Arg::Unsigned]       | every digit, grouped          | `alert`      |
//! | [Arg::Number], integral               | 0 fractional digits           | `alert`      |
//! | [Arg::Number], fractional             | 2 fractional digits           | `alert`      |
//! | [Arg::Text] already styled            | unchanged                     |              |
//! | [Arg::Text] containing `://`          | as-is                         | `emphasis`   |
//! | [Arg::Text] containing `/`            | as-is                         | `path`       |
//! | any other [Arg::Text]                 | as-is                         | `literal`    |
//! | [Arg::Fields], [Arg::Opaque]          | unchanged                     |              |
//!
//! The URL check has to come before the path check, since every URL contains a `/`.

use crate::arg::Arg;
use crate::number::NumberFormatter;
use crate::style::{Colorizer, Palette, is_colorized};

/// Styles positional arguments in place.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentColorizer<'a> {
    colorizer: &'a dyn Colorizer,
    numbers: &'a dyn NumberFormatter,
    palette: &'a Palette,
}

impl<'a> ArgumentColorizer<'a> {
    pub fn new(
        colorizer: &'a dyn Colorizer,
        numbers: &'a dyn NumberFormatter,
        palette: &'a Palette,
    ) -> Self {
        Self {
            colorizer,
            numbers,
            palette,
        }
    }

    /// Colors every argument.  Length and order are preserved.
    pub fn colorize(&self, args: &mut [Arg]) {
        for arg in args.iter_mut() {
            if let Some(painted) = self.paint(arg) {
                *arg = Arg::Text(painted);
            }
        }
    }

    /// The styled rendering of one argument, or `None` if it stays as it is.
    pub fn paint(&self, arg: &Arg) -> Option<String> {
        let palette = self.palette;
        match arg {
            Arg::Absent | Arg::Bool(_) => {
                Some(self.colorizer.paint(&arg.to_string(), palette.muted))
            }
            Arg::Integer(n) => {
                let rendered = self.numbers.format_integer(&n.to_string());
                Some(self.colorizer.paint(&rendered, palette.alert))
            }
            Arg::Unsigned(n) => {
                let rendered = self.numbers.format_integer(&n.to_string());
                Some(self.colorizer.paint(&rendered, palette.alert))
            }
            Arg::Number(n) => {
                let precision = if n.fract() == 0.0 { 0 } else { 2 };
                let rendered = self.numbers.format_number(*n, precision);
                Some(self.colorizer.paint(&rendered, palette.alert))
            }
            Arg::Text(text) if is_colorized(text) => None,
            Arg::Text(text) if text.contains("://") => {
                Some(self.colorizer.paint(text, palette.emphasis))
            }
            Arg::Text(text) if text.contains('/') => Some(self.colorizer.paint(text, palette.path)),
            Arg::Text(text) => Some(self.colorizer.paint(text, palette.literal)),
            Arg::Fields(_) | Arg::Opaque(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::DecimalFormatter;
    use crate::style::{AnsiColorizer, Style};

    fn colorized(args: Vec<Arg>) -> Vec<Arg> {
        let palette = Palette::default();
        let numbers = DecimalFormatter::new();
        let mut args = args;
        ArgumentColorizer::new(&AnsiColorizer, &numbers, &palette).colorize(&mut args);
        args
    }

    fn text(style: Style, s: &str) -> Arg {
        Arg::Text(AnsiColorizer.paint(s, style))
    }

    #[test]
    fn dispatches_on_type() {
        let out = colorized(vec![
            Arg::from(3),
            Arg::from(3.14),
            Arg::from("http://x"),
            Arg::from("/etc/passwd"),
            Arg::from(true),
        ]);
        assert_eq!(
            out,
            vec![
                text(Style::Red, "3"),
                text(Style::Red, "3.14"),
                text(Style::WhiteBold, "http://x"),
                text(Style::Cyan, "/etc/passwd"),
                text(Style::Grey, "true"),
            ]
        );
    }

    #[test]
    fn fractional_numbers_get_two_digits() {
        let out = colorized(vec![Arg::from(2.5), Arg::from(1.0 / 3.0), Arg::from(4000.0)]);
        assert_eq!(
            out,
            vec![
                text(Style::Red, "2.50"),
                text(Style::Red, "0.33"),
                text(Style::Red, "4,000"),
            ]
        );
    }

    #[test]
    fn wide_integers_are_exact() {
        let out = colorized(vec![
            Arg::from(9_007_199_254_740_993u64),
            Arg::from(u128::MAX),
            Arg::from(-1_000_000i64),
        ]);
        assert_eq!(
            out,
            vec![
                text(Style::Red, "9,007,199,254,740,993"),
                text(Style::Red, "340,282,366,920,938,463,463,374,607,431,768,211,455"),
                text(Style::Red, "-1,000,000"),
            ]
        );
    }

    #[test]
    fn absent_is_muted() {
        assert_eq!(colorized(vec![Arg::Absent]), vec![text(Style::Grey, "none")]);
    }

    #[test]
    fn plain_text_is_literal() {
        assert_eq!(
            colorized(vec![Arg::from("ready")]),
            vec![text(Style::Yellow, "ready")]
        );
    }

    #[test]
    fn already_styled_text_is_left_alone() {
        let styled = AnsiColorizer.paint("/var/log", Style::Magenta);
        let once = colorized(vec![Arg::Text(styled.clone())]);
        assert_eq!(once, vec![Arg::Text(styled)]);
        let twice = colorized(once.clone());
        assert_eq!(twice, once);
    }

    #[test]
    fn others_pass_through() {
        let fields = Arg::fields([("k", "v")]);
        let opaque = Arg::opaque("raw/thing");
        assert_eq!(
            colorized(vec![fields.clone(), opaque.clone()]),
            vec![fields, opaque]
        );
    }

    #[test]
    fn palette_roles_are_honored() {
        let mut palette = Palette::default();
        palette.path = Style::Green;
        let numbers = DecimalFormatter::new();
        let colorizer = ArgumentColorizer::new(&AnsiColorizer, &numbers, &palette);
        assert_eq!(
            colorizer.paint(&Arg::from("a/b")),
            Some(AnsiColorizer.paint("a/b", Style::Green))
        );
    }
}
