//! Piece kinds.

use std::fmt;

/// Side to which a piece belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Uppercase in FEN.
    White,
    /// Lowercase in FEN.
    Black,
}

impl Color {
    /// Lowercase name, as used in asset file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece type regardless of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// `p`
    Pawn,
    /// `n`
    Knight,
    /// `b`
    Bishop,
    /// `r`
    Rook,
    /// `q`
    Queen,
    /// `k`
    King,
}

impl Role {
    /// All six roles.
    pub const ALL: [Self; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// Lowercase name, as used in asset file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Lowercase FEN letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

/// One of the twelve color and role combinations, each bound to one mesh
/// asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceKind {
    /// Side.
    pub color: Color,
    /// Piece type.
    pub role: Role,
}

impl PieceKind {
    /// All twelve kinds, white first.
    pub const ALL: [Self; 12] = {
        let mut all = [Self::new(Color::White, Role::Pawn); 12];
        let mut i = 0;
        while i < 6 {
            all[i] = Self::new(Color::White, Role::ALL[i]);
            all[i + 6] = Self::new(Color::Black, Role::ALL[i]);
            i += 1;
        }
        all
    };

    /// Combine a color and role.
    #[must_use]
    pub const fn new(color: Color, role: Role) -> Self {
        Self { color, role }
    }

    /// Kind for a FEN letter: uppercase is white, lowercase is black.
    /// `None` for anything that is not one of `pnbrqkPNBRQK`.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Self> {
        let role = match c.to_ascii_lowercase() {
            'p' => Role::Pawn,
            'n' => Role::Knight,
            'b' => Role::Bishop,
            'r' => Role::Rook,
            'q' => Role::Queen,
            'k' => Role::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, role })
    }

    /// FEN letter for this kind.
    #[must_use]
    pub const fn fen_char(self) -> char {
        match self.color {
            Color::White => self.role.letter().to_ascii_uppercase(),
            Color::Black => self.role.letter(),
        }
    }

    /// Asset file stem, e.g. `white_knight`.
    #[must_use]
    pub fn asset_stem(self) -> String {
        format!("{}_{}", self.color.name(), self.role.name())
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color.name(), self.role.name())
    }
}
