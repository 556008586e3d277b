use crossterm::style::{Color, Stylize};

use std::fmt;

/// Classification of a single grid character.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Wall,
    /// Open floor. Any character other than a wall or marker also counts as floor.
    #[default]
    Floor,
    Start,
    End,
    /// A floor cell on a solution path. Only produced for rendering.
    Route,
}

impl GridCell {
    pub const WALL: char = '#';
    pub const FLOOR: char = ' ';
    pub const START: char = 'S';
    pub const END: char = 'E';
    pub const ROUTE: char = '*';

    pub fn symbol(self) -> char {
        match self {
            GridCell::Wall => GridCell::WALL,
            GridCell::Floor => GridCell::FLOOR,
            GridCell::Start => GridCell::START,
            GridCell::End => GridCell::END,
            GridCell::Route => GridCell::ROUTE,
        }
    }

    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            GridCell::WALL => GridCell::Wall,
            GridCell::START => GridCell::Start,
            GridCell::END => GridCell::End,
            _ => GridCell::Floor,
        }
    }

    pub fn is_passable(self) -> bool {
        self != GridCell::Wall
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            GridCell::Wall => "#".with(Color::DarkGrey),
            GridCell::Floor => " ".with(Color::Reset),
            GridCell::Start => "S".with(Color::Green).bold(),
            GridCell::End => "E".with(Color::Red).bold(),
            GridCell::Route => "*".with(Color::Yellow),
        };
        write!(f, "{}", styled_symbol)
    }
}
