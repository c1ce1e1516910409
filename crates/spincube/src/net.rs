//! Unfolded text rendering of the cube.

use itertools::Itertools;
use owo_colors::OwoColorize;
use spincube_core::{Cube, Face, StickerColor};

/// Faces in the middle band of the net, from left to right.
const BAND: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// Renders the cube as an unfolded net, with the top face above the front
/// face and the bottom face below it.
pub fn render(cube: &Cube, color: bool) -> String {
    let sticker = |face: Face, row: usize, col: usize| -> String {
        match cube.facelet(face, row, col) {
            Some(c) if color => colorize(c),
            Some(c) => format!(" {} ", c.letter()),
            None => " ? ".to_string(),
        }
    };
    let face_row = |face: Face, row: usize| (0..3).map(|col| sticker(face, row, col)).join("");
    let indent = " ".repeat(9);

    let top = (0..3).map(|row| format!("{indent}{}", face_row(Face::Top, row)));
    let band = (0..3).map(|row| BAND.iter().map(|&f| face_row(f, row)).join(""));
    let bottom = (0..3).map(|row| format!("{indent}{}", face_row(Face::Bottom, row)));
    top.chain(band)
        .chain(bottom)
        .map(|line| line + "\n")
        .collect()
}

fn colorize(c: StickerColor) -> String {
    let [_, r, g, b] = c.rgb().to_be_bytes();
    format!(" {} ", c.letter())
        .black()
        .on_truecolor(r, g, b)
        .to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use spincube_core::{Direction, Move};

    use super::*;

    #[test]
    fn test_render_solved() {
        let net = render(&Cube::new(), false);
        let lines: Vec<&str> = net.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "          W  W  W ");
        assert_eq!(lines[3], " B  B  B  R  R  R  G  G  G  O  O  O ");
        assert_eq!(lines[8], "          Y  Y  Y ");
        assert!(net.ends_with('\n'));
    }

    #[test]
    fn test_render_color() {
        let net = render(&Cube::new(), true);
        assert_eq!(net.lines().count(), 9);
        assert!(net.contains("\x1b["));
        assert!(net.ends_with('\n'));
    }

    #[test]
    fn test_render_after_move() {
        let mut cube = Cube::new();
        cube.apply_move(Move::new(Face::Top, Direction::Cw)).unwrap();
        let net = render(&cube, false);
        let lines: Vec<&str> = net.lines().collect();
        // The top row of the band shifts by one face.
        assert_eq!(lines[3], " O  O  O  B  B  B  R  R  R  G  G  G ");
        assert_eq!(lines[4], " B  B  B  R  R  R  G  G  G  O  O  O ");
    }
}
