use std::fmt;
use std::str::FromStr;

use shakmaty::{Color, File, Rank, Square};
use thiserror::Error;

/// Separator drawn above, between and below the ranks.
const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";

/// File labels drawn under the grid.
const BOTTOM_LETTERS: &str = "    a   b   c   d   e   f   g   h";

/// Layout of the standard starting position.
pub const START_LAYOUT: &str = "8/BBBBBBBB/8/8/8/8/WWWWWWWW/8";

/// Stable identity of a pawn for the lifetime of a board.
///
/// Ids are handed out once and never reused, so a captured pawn can't be
/// mistaken for one placed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PawnId(usize);

impl PawnId {
    #[inline]
    const fn index(self) -> usize {
        self.0
    }
}

/// A live pawn and the square it stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pawn {
    id: PawnId,
    color: Color,
    square: Square,
}

impl Pawn {
    #[inline]
    pub fn id(&self) -> PawnId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Single-letter symbol used in renders and layouts.
    #[inline]
    pub fn symbol(&self) -> char {
        symbol(self.color)
    }
}

/// One of the 64 board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    square: Square,
    occupant: Option<PawnId>,
}

impl Cell {
    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn occupant(&self) -> Option<PawnId> {
        self.occupant
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Errors from mutating the board.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0} is already occupied")]
    Occupied(Square),
    #[error("no pawn at {0}")]
    Empty(Square),
}

/// Errors from parsing a board layout string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 8 ranks separated by '/', found {0}")]
    RankCount(usize),
    #[error("rank {rank} covers {files} files, expected 8")]
    RankWidth { rank: char, files: usize },
    #[error("unexpected character '{0}' in layout")]
    InvalidChar(char),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// The 8×8 grid and the pawns standing on it.
///
/// Cell occupancy and the live-pawn collection are two views of the same
/// state. Every mutation goes through this type and updates both, so they
/// can't drift apart.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 64],
    /// Slot per pawn ever created, indexed by [`PawnId`]. `None` once captured.
    pawns: Vec<Option<Pawn>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard start: white pawns on rank 2, black pawns on rank 7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for file in File::ALL {
            board.spawn(Square::from_coords(file, Rank::Second), Color::White);
        }
        for file in File::ALL {
            board.spawn(Square::from_coords(file, Rank::Seventh), Color::Black);
        }
        board
    }

    /// A board with no pawns on it.
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|index| Cell {
                square: Square::new(index as u32),
                occupant: None,
            }),
            pawns: Vec::new(),
        }
    }

    /// The cell at `square`.
    #[inline]
    pub fn cell(&self, square: Square) -> &Cell {
        &self.cells[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cell(square).is_empty()
    }

    /// The pawn occupying `square`, if any.
    pub fn pawn_at(&self, square: Square) -> Option<&Pawn> {
        self.cell(square).occupant.and_then(|id| self.pawn(id))
    }

    /// Look up a live pawn by id. Captured pawns return `None`.
    pub fn pawn(&self, id: PawnId) -> Option<&Pawn> {
        self.pawns.get(id.index())?.as_ref()
    }

    /// All live pawns, in creation order.
    pub fn pawns(&self) -> impl Iterator<Item = &Pawn> + '_ {
        self.pawns.iter().flatten()
    }

    /// Live pawns of one color.
    pub fn pawns_of(&self, color: Color) -> impl Iterator<Item = &Pawn> + '_ {
        self.pawns().filter(move |pawn| pawn.color == color)
    }

    #[inline]
    pub fn pawn_count(&self) -> usize {
        self.pawns().count()
    }

    /// Put a new pawn on an empty square.
    pub fn place(&mut self, square: Square, color: Color) -> Result<PawnId, BoardError> {
        if !self.is_empty(square) {
            return Err(BoardError::Occupied(square));
        }
        Ok(self.spawn(square, color))
    }

    /// Take the pawn on `square` off the board, clearing its cell.
    pub fn remove_pawn(&mut self, square: Square) -> Result<Pawn, BoardError> {
        let id = self.cells[square as usize]
            .occupant
            .take()
            .ok_or(BoardError::Empty(square))?;
        self.pawns
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(BoardError::Empty(square))
    }

    /// Move the pawn on `from` to the empty square `to`.
    pub fn move_pawn(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        if !self.is_empty(to) {
            return Err(BoardError::Occupied(to));
        }
        let id = self.cell(from).occupant.ok_or(BoardError::Empty(from))?;
        let pawn = self
            .pawns
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(BoardError::Empty(from))?;

        pawn.square = to;
        self.cells[from as usize].occupant = None;
        self.cells[to as usize].occupant = Some(id);
        Ok(())
    }

    /// Checks that every live pawn's cell points back at it and every
    /// occupied cell points at a live pawn standing there.
    pub fn is_consistent(&self) -> bool {
        let pawns_agree = self
            .pawns()
            .all(|pawn| self.cell(pawn.square).occupant == Some(pawn.id));
        let cells_agree = self.cells.iter().all(|cell| match cell.occupant {
            Some(id) => self.pawn(id).is_some_and(|pawn| pawn.square == cell.square),
            None => true,
        });
        pawns_agree && cells_agree
    }

    /// The board as a fixed-width text grid, rank 8 on top.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The board as a layout string, the inverse of [`Board::from_str`].
    pub fn layout(&self) -> String {
        let mut out = String::new();
        for (row, rank) in Rank::ALL.iter().rev().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut gap = 0u8;
            for file in File::ALL {
                match self.pawn_at(Square::from_coords(file, *rank)) {
                    Some(pawn) => {
                        if gap > 0 {
                            out.push(char::from(b'0' + gap));
                            gap = 0;
                        }
                        out.push(pawn.symbol());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push(char::from(b'0' + gap));
            }
        }
        out
    }

    fn spawn(&mut self, square: Square, color: Color) -> PawnId {
        debug_assert!(self.is_empty(square), "spawning onto occupied {square}");
        let id = PawnId(self.pawns.len());
        self.pawns.push(Some(Pawn { id, color, square }));
        self.cells[square as usize].occupant = Some(id);
        id
    }
}

/// Parses a layout like `8/BBBBBBBB/8/8/8/8/WWWWWWWW/8`.
///
/// Ranks run from 8 down to 1. `W` and `B` are pawns, digits skip empty
/// files.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::RankCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, rank) in rows.iter().zip(Rank::ALL.iter().rev()) {
            let mut files = 0usize;
            for ch in row.chars() {
                match ch {
                    'W' | 'B' => {
                        let color = if ch == 'W' { Color::White } else { Color::Black };
                        if let Some(file) = File::ALL.get(files) {
                            board.place(Square::from_coords(*file, *rank), color)?;
                        }
                        files += 1;
                    }
                    '1'..='8' => files += usize::from(ch as u8 - b'0'),
                    other => return Err(ParseBoardError::InvalidChar(other)),
                }
            }
            if files != 8 {
                return Err(ParseBoardError::RankWidth {
                    rank: rank.char(),
                    files,
                });
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        for rank in Rank::ALL.iter().rev() {
            write!(f, "{} |", rank.char())?;
            for file in File::ALL {
                let cell = self
                    .pawn_at(Square::from_coords(file, *rank))
                    .map_or(' ', Pawn::symbol);
                write!(f, " {cell} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        writeln!(f, "{BOTTOM_LETTERS}")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("layout", &self.layout())
            .field("pawns", &self.pawn_count())
            .finish()
    }
}

#[inline]
fn symbol(color: Color) -> char {
    match color {
        Color::White => 'W',
        Color::Black => 'B',
    }
}
