//! Support for rendering the bishop's walk as "randomart".

use crate::{
    HashMode,
    field::{Field, HEIGHT, WIDTH},
};
use alloc::{format, string::String, vec::Vec};
use core::fmt;

/// Symbols indexed by cell value: visit counts `0..=14`, then start and end.
const VALUES: &[u8; 17] = b" .o+=*BOX@%&#/^SE";

/// Header printed in the top border when none is supplied.
pub const DEFAULT_HEADER: &str = "[   n/a  ]";

/// Top border for [`DEFAULT_HEADER`].
const DEFAULT_TOP_BORDER: &str = "+---[   n/a  ]----+";

/// "randomart" renderer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Randomart<'a> {
    header: &'a str,
    field: Field,
    footer: &'static str,
}

impl<'a> Randomart<'a> {
    /// Create new "randomart" for the given field, labelled with the hash
    /// mode in the bottom border.
    pub fn new(field: Field, mode: HashMode) -> Self {
        Self {
            header: DEFAULT_HEADER,
            field,
            footer: mode.footer(),
        }
    }

    /// Replace the header in the top border, e.g. `[ED25519 256]`.
    pub fn with_header(mut self, header: &'a str) -> Self {
        self.header = header;
        self
    }

    /// Get the rendered lines: top border, one per row, bottom border.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(HEIGHT + 2);
        lines.push(top_border(self.header));
        lines.extend(self.field.rows().iter().map(row));
        lines.push(bottom_border(self.footer));
        lines
    }
}

impl fmt::Display for Randomart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", top_border(self.header))?;

        for cells in self.field.rows() {
            writeln!(f, "{}", row(cells))?;
        }

        write!(f, "{}", bottom_border(self.footer))
    }
}

/// Render the field as "randomart" lines with the default header.
pub fn render(field: &Field, mode: HashMode) -> Vec<String> {
    Randomart::new(*field, mode).lines()
}

fn top_border(header: &str) -> String {
    if header == DEFAULT_HEADER {
        return DEFAULT_TOP_BORDER.into();
    }

    format!("+{header:-^width$}+", width = WIDTH)
}

/// Centers the footer with any odd leftover `-` on the left, e.g.
/// `+-----[SHA256]----+`.
#[allow(clippy::arithmetic_side_effects)]
fn bottom_border(footer: &str) -> String {
    let fill = WIDTH.saturating_sub(footer.chars().count());
    let left = fill / 2 + (fill & WIDTH & 1);
    let right = fill - left;

    format!("+{}{footer}{}+", "-".repeat(left), "-".repeat(right))
}

fn row(cells: &[u8; WIDTH]) -> String {
    let mut line = String::with_capacity(WIDTH + 2);
    line.push('|');
    line.extend(cells.iter().map(|&c| symbol(c)));
    line.push('|');
    line
}

/// Cell values past the end marker can't be produced by the walk; they show
/// as the end marker.
fn symbol(value: u8) -> char {
    let last = VALUES.len() - 1;
    VALUES[usize::from(value).min(last)] as char
}

#[cfg(test)]
mod tests {
    use super::{Randomart, render};
    use crate::{HashMode, extract, simulate};
    use alloc::string::ToString;
    use hex_literal::hex;

    const EXAMPLE_RANDOMART: &str = "\
+--[ED25519 256]--+
|o+oO==+ o..      |
|.o++Eo+o..       |
|. +.oO.o . .     |
| . o..B.. . .    |
|  ...+ .S. o     |
|  .o. . . . .    |
|  o..    o       |
|   B      .      |
|  .o*            |
+-----[SHA256]----+";

    #[test]
    fn generation() {
        let bytes = hex!("5025222ebecf8ecf7014524c0c1c8b81cdcdaed754df8e0e814338e7064f7084");
        let field = simulate(&extract(&bytes));
        let randomart = Randomart::new(field, HashMode::Sha256).with_header("[ED25519 256]");
        assert_eq!(EXAMPLE_RANDOMART, randomart.to_string());
        assert_eq!(randomart.lines().join("\n"), randomart.to_string());
    }

    #[test]
    fn empty_field() {
        let lines = render(&simulate(&[]), HashMode::Md5);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "+---[   n/a  ]----+");
        assert_eq!(lines[5], "|        E        |");
        assert_eq!(lines[10], "+------[MD5]------+");

        for (i, line) in lines[1..10].iter().enumerate() {
            if i != 4 {
                assert_eq!(line, "|                 |");
            }
        }
    }

    #[test]
    fn saturated_cells() {
        let lines = render(&simulate(&extract(&[0x44; 16])), HashMode::Md5);
        assert_eq!(lines[1], "|       ^E        |");
        assert_eq!(lines[2], "|       .         |");
        assert_eq!(lines[5], "|        S        |");
    }

    #[test]
    fn footers() {
        let field = simulate(&[]);
        assert_eq!(render(&field, HashMode::Md5)[10], "+------[MD5]------+");
        assert_eq!(render(&field, HashMode::Sha256)[10], "+-----[SHA256]----+");
    }

    #[test]
    fn custom_header() {
        let randomart = Randomart::new(simulate(&[]), HashMode::Md5).with_header("[RSA 3072]");
        assert_eq!(randomart.lines()[0], "+---[RSA 3072]----+");
    }
}
