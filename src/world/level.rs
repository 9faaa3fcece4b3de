//! Tile grid the camera moves through and rays are cast against.
//!
//! ### Text format
//! One line per **x** column, tile ids separated by whitespace or commas:
//!
//! ```text
//! # 5x5 room
//! 1 1 1 1 1
//! 1 0 0 0 1
//! 1 0 0 0 1
//! 1 0 0 0 1
//! 1 1 1 1 1
//! ```
//!
//! Blank lines and `#` comments are skipped.

use std::{fs, io, path::Path};

use once_cell::sync::Lazy;
use thiserror::Error;

/// Wall material id stored in each cell. `0` is open floor.
pub type TileId = u16;

/// Traversable cell.
pub const EMPTY: TileId = 0;

/// Returned for every coordinate outside the grid so rays leaving an open
/// map still stop on something solid.
pub const OUTSIDE: TileId = TileId::MAX;

/// Read-only view of a tile grid indexed `[x][y]`.
///
/// The ray engine and the collision code only ever talk to this trait.
pub trait TileMap {
    fn tile_at(&self, x: i32, y: i32) -> TileId;

    #[inline]
    fn is_empty(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y) == EMPTY
    }
}

/// Things that can go wrong when building or loading a level.
#[derive(Error, Debug)]
pub enum LevelError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("level has no tiles")]
    Empty,

    /// `tiles.len()` disagrees with `width * height`.
    #[error("expected {expected} tiles for the given size, found {found}")]
    Size { expected: usize, found: usize },

    /// A row has a different length from the first one.
    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{token}` is not a tile id")]
    BadTile { line: usize, token: String },

    /// Border cell that is open floor – rays could escape the grid.
    #[error("border tile ({x}, {y}) is open")]
    OpenBorder { x: usize, y: usize },

    /// Start position inside a wall or off the grid.
    #[error("start position ({x}, {y}) is not on open floor")]
    BlockedStart { x: f32, y: f32 },
}

/// Rectangular tile grid, stored column-major (`tiles[x * height + y]`).
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub name: String,
    width: usize,
    height: usize,
    tiles: Vec<TileId>,
}

static CLASSIC: Lazy<Level> = Lazy::new(|| {
    Level::parse("CLASSIC", include_str!("../../assets/classic.map"))
        .expect("built-in level is well formed")
});

impl Level {
    /// Build a level from column-major tiles.
    pub fn new(
        name: impl Into<String>,
        width: usize,
        height: usize,
        tiles: Vec<TileId>,
    ) -> Result<Self, LevelError> {
        if width == 0 || height == 0 {
            return Err(LevelError::Empty);
        }
        let expected = width * height;
        if tiles.len() != expected {
            return Err(LevelError::Size {
                expected,
                found: tiles.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            tiles,
        })
    }

    /// Build from row literals where the outer index is **x**.
    pub fn from_rows(name: impl Into<String>, rows: &[&[TileId]]) -> Result<Self, LevelError> {
        let height = rows.first().map_or(0, |r| r.len());
        let mut tiles = Vec::with_capacity(rows.len() * height);
        for (row, r) in rows.iter().enumerate() {
            if r.len() != height {
                return Err(LevelError::Ragged {
                    row,
                    expected: height,
                    found: r.len(),
                });
            }
            tiles.extend_from_slice(r);
        }
        Self::new(name, rows.len(), height, tiles)
    }

    /// Parse the text format described in the module docs.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, LevelError> {
        let mut rows: Vec<Vec<TileId>> = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|tok| !tok.is_empty())
                .map(|tok| {
                    tok.parse::<TileId>().map_err(|_| LevelError::BadTile {
                        line: idx + 1,
                        token: tok.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        let rows: Vec<&[TileId]> = rows.iter().map(Vec::as_slice).collect();
        Self::from_rows(name, &rows)
    }

    /// Load a text level from disk; the file stem becomes the level name.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_uppercase())
            .unwrap_or_default();
        Self::parse(name, &text)
    }

    /// The 24×24 level that ships with the viewer.
    pub fn classic() -> &'static Level {
        &CLASSIC
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<TileId> {
        (x < self.width && y < self.height).then(|| self.tiles[x * self.height + y])
    }

    /// `true` when every border cell is solid, i.e. no ray can leave the grid.
    pub fn is_closed(&self) -> bool {
        self.validate_closed().is_ok()
    }

    /// Report the first open border cell, scanning column by column.
    pub fn validate_closed(&self) -> Result<(), LevelError> {
        let (w, h) = (self.width, self.height);
        for x in 0..w {
            for y in 0..h {
                let border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
                if border && self.tiles[x * h + y] == EMPTY {
                    return Err(LevelError::OpenBorder { x, y });
                }
            }
        }
        Ok(())
    }
}

impl TileMap for Level {
    #[inline]
    fn tile_at(&self, x: i32, y: i32) -> TileId {
        if x < 0 || y < 0 {
            return OUTSIDE;
        }
        self.get(x as usize, y as usize).unwrap_or(OUTSIDE)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
