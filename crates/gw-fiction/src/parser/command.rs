//! Tokenizing player input.

/// Direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
}

impl Direction {
    /// Every direction, in compass order.
    pub const ALL: [Self; 10] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
        Self::Northeast,
        Self::Northwest,
        Self::Southeast,
        Self::Southwest,
    ];

    /// Parse a direction from its full name or abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "ne" | "northeast" => Some(Self::Northeast),
            "nw" | "northwest" => Some(Self::Northwest),
            "se" | "southeast" => Some(Self::Southeast),
            "sw" | "southwest" => Some(Self::Southwest),
            _ => None,
        }
    }

    /// The exit key this direction is stored under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One line of input, split into a verb and its arguments.
///
/// The verb is lower-cased; arguments keep their original case and order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    verb: String,
    args: Vec<String>,
}

impl Command {
    /// Tokenize a raw input line.
    ///
    /// Blank input yields an empty command with no verb and no arguments.
    pub fn parse(input: &str) -> Self {
        let mut words = input.split_whitespace();
        let Some(first) = words.next() else {
            return Self::default();
        };
        Self {
            verb: first.to_lowercase(),
            args: words.map(str::to_string).collect(),
        }
    }

    /// The lower-cased first token.
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// Everything after the verb.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The first argument, if any.
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// All arguments joined by single spaces, for multi-word targets.
    pub fn target(&self) -> String {
        self.args.join(" ")
    }

    /// No verb at all.
    pub fn is_empty(&self) -> bool {
        self.verb.is_empty()
    }

    /// At least one argument follows the verb.
    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}
