use crate::item::names_match;
use crate::vitality::Vitality;

/// A hostile creature placed in a room by world content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    name: String,
    description: String,
    vitality: Vitality,
    attack: u32,
    defense: u32,
    hostile: bool,
    reward: Option<u32>,
}

impl Creature {
    /// Create a hostile creature at full health.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        health: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            vitality: Vitality::new(health),
            attack,
            defense,
            hostile: true,
            reward: None,
        }
    }

    /// Override the score granted for defeating it.
    pub fn with_reward(mut self, reward: u32) -> Self {
        self.reward = Some(reward);
        self
    }

    /// Mark the creature as peaceful or hostile.
    pub fn with_hostile(mut self, hostile: bool) -> Self {
        self.hostile = hostile;
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text shown when examined.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Health pool.
    pub fn vitality(&self) -> &Vitality {
        &self.vitality
    }

    /// Mutable health pool.
    pub fn vitality_mut(&mut self) -> &mut Vitality {
        &mut self.vitality
    }

    /// Base attack power.
    pub fn attack_power(&self) -> u32 {
        self.attack
    }

    /// Damage soaked from each hit.
    pub fn defense(&self) -> u32 {
        self.defense
    }

    /// Whether the creature fights back.
    pub fn is_hostile(&self) -> bool {
        self.hostile
    }

    /// Score override for defeating it. `None` means the session default.
    pub fn reward(&self) -> Option<u32> {
        self.reward
    }

    /// Still standing?
    pub fn is_alive(&self) -> bool {
        !self.vitality.is_depleted()
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Short wording for how hurt the creature looks.
    pub fn condition(&self) -> &'static str {
        let percent = self.vitality.fraction() * 100.0;
        if percent > 75.0 {
            "looking strong"
        } else if percent > 50.0 {
            "slightly wounded"
        } else if percent > 25.0 {
            "badly wounded"
        } else {
            "near death"
        }
    }

    /// One-line status, e.g. `troll - badly wounded (12/30 HP)`.
    pub fn status(&self) -> String {
        format!("{} - {} ({} HP)", self.name, self.condition(), self.vitality)
    }
}
