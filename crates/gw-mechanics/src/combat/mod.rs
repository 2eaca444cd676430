//! One exchange of blows between the player and a creature.
//!
//! The player always strikes first. A creature that survives strikes back
//! if it is hostile. Health changes go through [`Vitality`], so both sides
//! stay within `[0, max]`.

pub mod strike;

pub use strike::{CombatRules, Strike, mitigate, roll_creature_strike, roll_player_strike};

use gw_core::{Creature, Player, Vitality};
use rand::rngs::StdRng;

/// Anything that can trade blows.
pub trait Combatant {
    /// Display name.
    fn name(&self) -> &str;
    /// Attack power including equipment.
    fn attack_power(&self) -> u32;
    /// Defense including equipment.
    fn defense(&self) -> u32;
    /// Health pool.
    fn vitality(&self) -> &Vitality;
    /// Mutable health pool.
    fn vitality_mut(&mut self) -> &mut Vitality;

    /// Still standing?
    fn is_standing(&self) -> bool {
        !self.vitality().is_depleted()
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        Player::name(self)
    }

    fn attack_power(&self) -> u32 {
        self.base_attack().saturating_add(self.weapon_bonus())
    }

    fn defense(&self) -> u32 {
        self.base_defense().saturating_add(self.armor_bonus())
    }

    fn vitality(&self) -> &Vitality {
        Player::vitality(self)
    }

    fn vitality_mut(&mut self) -> &mut Vitality {
        Player::vitality_mut(self)
    }
}

impl Combatant for Creature {
    fn name(&self) -> &str {
        Creature::name(self)
    }

    fn attack_power(&self) -> u32 {
        Creature::attack_power(self)
    }

    fn defense(&self) -> u32 {
        Creature::defense(self)
    }

    fn vitality(&self) -> &Vitality {
        Creature::vitality(self)
    }

    fn vitality_mut(&mut self) -> &mut Vitality {
        Creature::vitality_mut(self)
    }
}

/// A blow that landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// The rolled strike.
    pub strike: Strike,
    /// Damage actually dealt after defense.
    pub dealt: u32,
    /// Target health afterwards.
    pub remaining: u32,
}

/// Apply a strike to a target.
pub fn land(strike: Strike, target: &mut impl Combatant) -> Hit {
    let dealt = mitigate(strike.raw, target.defense());
    let remaining = target.vitality_mut().wound(dealt);
    Hit {
        strike,
        dealt,
        remaining,
    }
}

/// The result of one combat round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    /// The player's blow.
    pub player_hit: Hit,
    /// The creature's answer, if it was still standing and hostile.
    pub counter: Option<Hit>,
}

impl Exchange {
    /// The creature went down this round.
    pub fn creature_fell(&self) -> bool {
        self.player_hit.remaining == 0
    }

    /// The player went down this round.
    pub fn player_fell(&self) -> bool {
        self.counter.is_some_and(|hit| hit.remaining == 0)
    }
}

/// Resolve one round: the player strikes, then the creature answers.
pub fn exchange(
    player: &mut Player,
    creature: &mut Creature,
    rules: &CombatRules,
    rng: &mut StdRng,
) -> Exchange {
    let strike = roll_player_strike(Combatant::attack_power(player), rules, rng);
    let player_hit = land(strike, creature);

    let counter = if creature.is_alive() && creature.is_hostile() {
        let strike = roll_creature_strike(Creature::attack_power(creature), rules, rng);
        Some(land(strike, player))
    } else {
        None
    };

    Exchange {
        player_hit,
        counter,
    }
}
