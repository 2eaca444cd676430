//! Verb aliases and the closed set of verbs the interpreter understands.

use super::command::Direction;

/// Alternate forms and the canonical verb each one stands for.
///
/// Lookup is a single step: no alias maps to another alias.
pub const ALIASES: &[(&str, &str)] = &[
    ("n", "north"),
    ("s", "south"),
    ("e", "east"),
    ("w", "west"),
    ("u", "up"),
    ("d", "down"),
    ("ne", "northeast"),
    ("nw", "northwest"),
    ("se", "southeast"),
    ("sw", "southwest"),
    ("l", "look"),
    ("x", "examine"),
    ("i", "inventory"),
    ("inv", "inventory"),
    ("get", "take"),
    ("pick", "take"),
    ("q", "quit"),
    ("exit", "quit"),
    ("?", "help"),
    ("kill", "attack"),
    ("fight", "attack"),
];

/// Resolve an alias to its canonical verb.
///
/// Comparison ignores case. Unknown words come back lower-cased and
/// otherwise unchanged.
pub fn resolve_alias(word: &str) -> String {
    let lower = word.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or(lower)
}

/// Every verb the interpreter dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Walk through an exit.
    Move(Direction),
    /// `go <direction>`.
    Go,
    /// Describe the room, or examine a target.
    Look,
    /// Describe an item or creature.
    Examine,
    /// Pick an item up.
    Take,
    /// Put an item down.
    Drop,
    /// List carried items.
    Inventory,
    /// Use an item.
    Use,
    /// Fight a creature.
    Attack,
    /// Show score and moves.
    Score,
    /// Show the player's status.
    Status,
    /// Save the session.
    Save,
    /// Restore a saved session.
    Load,
    /// Show the command reference.
    Help,
    /// End the session.
    Quit,
}

impl Verb {
    /// Map a canonical verb to its variant.
    pub fn from_canonical(verb: &str) -> Option<Self> {
        if let Some(direction) = Direction::ALL.into_iter().find(|d| d.name() == verb) {
            return Some(Self::Move(direction));
        }
        let verb = match verb {
            "go" => Self::Go,
            "look" => Self::Look,
            "examine" => Self::Examine,
            "take" => Self::Take,
            "drop" => Self::Drop,
            "inventory" => Self::Inventory,
            "use" => Self::Use,
            "attack" => Self::Attack,
            "score" => Self::Score,
            "status" => Self::Status,
            "save" => Self::Save,
            "load" => Self::Load,
            "help" => Self::Help,
            "quit" => Self::Quit,
            _ => return None,
        };
        Some(verb)
    }

    /// Resolve any input word, alias or canonical, to a verb.
    pub fn resolve(word: &str) -> Option<Self> {
        Self::from_canonical(&resolve_alias(word))
    }

    /// The canonical text of this verb.
    pub fn canonical(&self) -> &'static str {
        match self {
            Self::Move(direction) => direction.name(),
            Self::Go => "go",
            Self::Look => "look",
            Self::Examine => "examine",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Inventory => "inventory",
            Self::Use => "use",
            Self::Attack => "attack",
            Self::Score => "score",
            Self::Status => "status",
            Self::Save => "save",
            Self::Load => "load",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}
