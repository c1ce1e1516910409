//! Pieces (cubelets) and their sticker colors.

use std::fmt;

use cgmath::{Matrix4, Vector3};

use crate::{Face, GridPos, Orientation};

/// Color of the inside of a piece, shown on faces that have no sticker.
pub const INTERIOR_RGB: u32 = 0x222222;

/// Unique identifier of a piece, in the range `0..26`.
///
/// Piece IDs are assigned in creation order and never change, even as the
/// piece moves around the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub u8);
impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
impl PieceId {
    /// Returns the index of this piece.
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Color of a sticker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum StickerColor {
    Green,
    Blue,
    White,
    Yellow,
    Red,
    Orange,
}
impl StickerColor {
    /// Returns the color of the stickers on a face of the solved cube.
    pub const fn of_face(face: Face) -> Self {
        match face {
            Face::Right => Self::Green,
            Face::Left => Self::Blue,
            Face::Top => Self::White,
            Face::Bottom => Self::Yellow,
            Face::Front => Self::Red,
            Face::Back => Self::Orange,
        }
    }
    /// Returns the 24-bit RGB value of this color.
    pub const fn rgb(self) -> u32 {
        match self {
            Self::Green => 0x00ff00,
            Self::Blue => 0x0000ff,
            Self::White => 0xffffff,
            Self::Yellow => 0xffff00,
            Self::Red => 0xff0000,
            Self::Orange => 0xff8000,
        }
    }
    /// Returns a one-letter abbreviation of this color.
    pub const fn letter(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::White => 'W',
            Self::Yellow => 'Y',
            Self::Red => 'R',
            Self::Orange => 'O',
        }
    }
}

/// A single movable piece of the cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    /// Position where the piece was created.
    home: GridPos,
    /// Current position.
    pub(crate) pos: GridPos,
    /// Current orientation, relative to the orientation at creation.
    pub(crate) orientation: Orientation,
    /// Sticker colors, indexed by face in the piece's home frame. `None` means
    /// the face is on the inside of the cube.
    stickers: [Option<StickerColor>; Face::COUNT],
}
impl Piece {
    /// Constructs a piece at `home` with stickers on its exterior faces.
    pub(crate) fn new(id: PieceId, home: GridPos) -> Self {
        let mut stickers = [None; Face::COUNT];
        for face in home.faces() {
            stickers[face.idx()] = Some(StickerColor::of_face(face));
        }
        Self {
            id,
            home,
            pos: home,
            orientation: Orientation::IDENT,
            stickers,
        }
    }
    /// Moves the piece back to where it was created.
    pub(crate) fn reset(&mut self) {
        self.pos = self.home;
        self.orientation = Orientation::IDENT;
    }

    /// Returns the ID of the piece.
    pub fn id(&self) -> PieceId {
        self.id
    }
    /// Returns the position where the piece was created.
    pub fn home(&self) -> GridPos {
        self.home
    }
    /// Returns the current position of the piece.
    pub fn pos(&self) -> GridPos {
        self.pos
    }
    /// Returns the current orientation of the piece.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    /// Returns whether the piece is at its home position and orientation.
    pub fn is_home(&self) -> bool {
        self.pos == self.home && self.orientation.is_ident()
    }

    /// Returns the sticker color on a face in the piece's home frame.
    pub fn sticker(&self, local: Face) -> Option<StickerColor> {
        self.stickers[local.idx()]
    }
    /// Returns the sticker color currently facing `world`.
    pub fn sticker_facing(&self, world: Face) -> Option<StickerColor> {
        self.sticker(self.orientation.local_face_toward(world))
    }
    /// Returns the RGB color for each face in the piece's home frame, in
    /// material slot order (right, left, top, bottom, front, back).
    pub fn material_colors(&self) -> [u32; Face::COUNT] {
        self.stickers
            .map(|sticker| sticker.map_or(INTERIOR_RGB, StickerColor::rgb))
    }

    /// Returns the model matrix of the piece: its orientation followed by a
    /// translation to its position.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.pos.to_vector()) * Matrix4::from(self.orientation.to_matrix())
    }
    /// Returns the center of the piece in cube space.
    pub fn center(&self) -> Vector3<f32> {
        self.pos.to_vector()
    }
}
