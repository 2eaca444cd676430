//! A running game: the world, the player, and the verb handlers.

use gw_core::item::names_match;
use gw_core::{CoreError, Player, Room, RoomId, SessionSnapshot, World, WorldSpec};
use gw_mechanics::exchange;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SessionConfig;
use crate::error::{ErrorKind, FictionResult};
use crate::hook::{ItemUseHook, NoUseEffect};
use crate::outcome::Outcome;
use crate::parser::{Command, Direction, Verb};
use crate::persist::{DEFAULT_SLOT, SaveStore};
use crate::render;

/// Reply to a verb nobody handles.
pub const UNKNOWN_COMMAND: &str =
    "I don't understand that command. Type 'help' for a list of commands.";
/// Reply to a missing or locked exit.
pub const CANNOT_GO: &str = "You can't go that way.";
/// Reply when a target is not in the room or inventory.
pub const NOT_HERE: &str = "You don't see that here.";
/// Reply when `attack` finds no opponent.
pub const NOTHING_TO_ATTACK: &str = "There's nothing here to attack.";
/// Reply to `quit`.
pub const FAREWELL: &str = "Thanks for playing!";
/// Reply to any command after the session has ended.
pub const GAME_ENDED: &str = "The game is over.";

/// The creature the player is currently fighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatContext {
    /// The creature's name.
    pub opponent: String,
    /// The room the fight is in.
    pub room: RoomId,
}

/// One running game.
///
/// Owns the world and the player. Every mutation goes through
/// [`WorldSession::process`], one command at a time.
pub struct WorldSession {
    world: World,
    player: Player,
    score: u32,
    moves: u32,
    running: bool,
    combat: Option<CombatContext>,
    config: SessionConfig,
    rng: StdRng,
    store: Option<Box<dyn SaveStore>>,
    use_hook: Box<dyn ItemUseHook>,
}

impl WorldSession {
    /// Start a session in the world's start room.
    ///
    /// The start room counts as visited from the outset and earns no
    /// discovery award.
    pub fn new(mut world: World, config: SessionConfig) -> FictionResult<Self> {
        let start = world.start()?.clone();
        let mut player = Player::new(config.player_name.as_str(), start.clone())
            .with_limits(config.max_items, config.max_weight)
            .with_stats(config.max_health, config.attack, config.defense);
        world.place(&mut player, &start)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!(
            "session started in \"{}\" at {} for {}",
            world.name(),
            start,
            player.name()
        );

        Ok(Self {
            world,
            player,
            score: 0,
            moves: 0,
            running: true,
            combat: None,
            config,
            rng,
            store: None,
            use_hook: Box::new(NoUseEffect),
        })
    }

    /// Start a session in the bundled starter world.
    pub fn starter(config: SessionConfig) -> FictionResult<Self> {
        let world = WorldSpec::starter()?.build()?;
        Self::new(world, config)
    }

    /// Attach a save store, enabling `save` and `load`.
    pub fn with_store(mut self, store: impl SaveStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Replace the item-use hook.
    pub fn with_use_hook(mut self, hook: impl ItemUseHook + 'static) -> Self {
        self.use_hook = Box::new(hook);
        self
    }

    /// The world being explored.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Points earned so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Successful moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Still accepting commands?
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The current fight, if any.
    pub fn combat(&self) -> Option<&CombatContext> {
        self.combat.as_ref()
    }

    /// Whether a fight is underway.
    pub fn in_combat(&self) -> bool {
        self.combat.is_some()
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The room the player is in.
    pub fn current_room(&self) -> FictionResult<&Room> {
        Ok(self.world.require(self.player.location())?)
    }

    /// Welcome banner followed by the starting room.
    pub fn opening(&self) -> String {
        let room = self
            .current_room()
            .map(render::room_description)
            .unwrap_or_default();
        format!("{}\n\n{room}", render::welcome(self.world.name()))
    }

    /// Capture the session for a save store.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.world, &self.player, self.score, self.moves)
    }

    /// Put the session back into a captured state.
    ///
    /// The snapshot is validated in full first. On error the session is
    /// unchanged. Any fight in progress is abandoned.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) -> FictionResult<()> {
        snapshot.apply(&mut self.world, &mut self.player)?;
        self.score = snapshot.score;
        self.moves = snapshot.moves;
        self.combat = None;
        self.running = self.player.is_alive();
        info!(
            "session restored at {} (score {}, moves {})",
            snapshot.current_room, self.score, self.moves
        );
        Ok(())
    }

    /// Process one line of player input.
    pub fn process(&mut self, input: &str) -> Outcome {
        if !self.running {
            return Outcome {
                continue_session: false,
                ..Outcome::fail(ErrorKind::InvalidCommand, GAME_ENDED)
            };
        }

        let command = Command::parse(input);
        if command.is_empty() {
            return Outcome::silent();
        }
        let Some(verb) = Verb::resolve(command.verb()) else {
            debug!("unknown verb \"{}\"", command.verb());
            return Outcome::fail(ErrorKind::InvalidCommand, UNKNOWN_COMMAND);
        };

        debug!("dispatching {} {:?}", verb.canonical(), command.args());
        match self.execute(verb, &command) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("{} failed: {err}", verb.canonical());
                Outcome::fail(ErrorKind::from(&err), err.to_string())
            }
        }
    }

    /// Run a resolved verb.
    pub fn execute(&mut self, verb: Verb, command: &Command) -> FictionResult<Outcome> {
        match verb {
            Verb::Move(direction) => self.do_move(direction.name()),
            Verb::Go => self.do_go(command),
            Verb::Look => self.do_look(command),
            Verb::Examine => self.do_examine(&command.target()),
            Verb::Take => self.do_take(&command.target()),
            Verb::Drop => self.do_drop(&command.target()),
            Verb::Inventory => Ok(Outcome::ok(render::inventory(&self.player))),
            Verb::Use => self.do_use(&command.target()),
            Verb::Attack => self.do_attack(command),
            Verb::Score => Ok(Outcome::ok(render::score(self.score, self.moves))),
            Verb::Status => Ok(Outcome::ok(render::status(&self.player))),
            Verb::Save => Ok(self.do_save(command.first_arg().unwrap_or(DEFAULT_SLOT))),
            Verb::Load => self.do_load(command.first_arg().unwrap_or(DEFAULT_SLOT)),
            Verb::Help => Ok(Outcome::ok(render::HELP_TEXT)),
            Verb::Quit => Ok(self.do_quit()),
        }
    }

    // -----------------------------------------------------------------------
    // Handlers
    // -----------------------------------------------------------------------

    fn do_go(&mut self, command: &Command) -> FictionResult<Outcome> {
        if !command.has_args() {
            return Ok(Outcome::fail(ErrorKind::MissingArgument, "Go where?"));
        }
        let target = command.target();
        match Direction::parse(&target) {
            Some(direction) => self.do_move(direction.name()),
            None => self.do_move(&target.to_lowercase()),
        }
    }

    fn do_move(&mut self, direction: &str) -> FictionResult<Outcome> {
        let arrival = match self.world.travel(&mut self.player, direction) {
            Ok(arrival) => arrival,
            Err(err @ (CoreError::NoExit(_) | CoreError::Locked(_))) => {
                debug!("move {direction} refused: {err}");
                return Ok(Outcome::fail(ErrorKind::from(&err), CANNOT_GO));
            }
            Err(err) => return Err(err.into()),
        };

        self.moves += 1;
        if arrival.first_visit {
            self.award(self.config.discovery_award);
        }

        let mut message = String::new();
        if let Some(fight) = self.combat.take() {
            info!("fled from {} in {}", fight.opponent, fight.room);
            message.push_str(&format!("You escape from the {}.\n\n", fight.opponent));
        }
        let room = self.world.require(&arrival.room)?;
        message.push_str(&render::room_description(room));
        Ok(Outcome::ok(message))
    }

    fn do_look(&mut self, command: &Command) -> FictionResult<Outcome> {
        if command.has_args() {
            return self.do_examine(&command.target());
        }
        Ok(Outcome::ok(render::room_description(self.current_room()?)))
    }

    fn do_examine(&mut self, target: &str) -> FictionResult<Outcome> {
        if target.is_empty() {
            return Ok(Outcome::fail(ErrorKind::MissingArgument, "Examine what?"));
        }
        if let Some(item) = self.player.item(target) {
            return Ok(Outcome::ok(item.description()));
        }
        let room = self.current_room()?;
        if let Some(item) = room.item(target) {
            return Ok(Outcome::ok(item.description()));
        }
        if let Some(creature) = room.creature(target) {
            return Ok(Outcome::ok(format!(
                "{}\n{}",
                creature.description(),
                creature.status()
            )));
        }
        Ok(Outcome::fail(ErrorKind::TargetNotFound, NOT_HERE))
    }

    fn do_take(&mut self, target: &str) -> FictionResult<Outcome> {
        if target.is_empty() {
            return Ok(Outcome::fail(ErrorKind::MissingArgument, "Take what?"));
        }
        let message = match self.world.take_item(&mut self.player, target) {
            Ok(item) => format!("You take the {}.", item.name()),
            Err(err) => {
                let kind = ErrorKind::from(&err);
                let message = match err {
                    CoreError::ItemNotFound(_) => NOT_HERE.to_string(),
                    CoreError::NotTakeable(name) => format!("You can't take the {name}."),
                    CoreError::InventoryFull { .. } => "Your inventory is full!".to_string(),
                    CoreError::TooHeavy { .. } => "That's too heavy to carry!".to_string(),
                    other => return Err(other.into()),
                };
                return Ok(Outcome::fail(kind, message));
            }
        };
        self.award(self.config.pickup_award);
        Ok(Outcome::ok(message))
    }

    fn do_drop(&mut self, target: &str) -> FictionResult<Outcome> {
        if target.is_empty() {
            return Ok(Outcome::fail(ErrorKind::MissingArgument, "Drop what?"));
        }
        match self.world.drop_item(&mut self.player, target) {
            Ok(item) => Ok(Outcome::ok(format!("You drop the {}.", item.name()))),
            Err(CoreError::NotCarried(_)) => Ok(Outcome::fail(
                ErrorKind::TargetNotFound,
                "You don't have that item.",
            )),
            Err(err) => Err(err.into()),
        }
    }

    fn do_use(&mut self, target: &str) -> FictionResult<Outcome> {
        if target.is_empty() {
            return Ok(Outcome::fail(ErrorKind::MissingArgument, "Use what?"));
        }
        let room = self.world.require(self.player.location())?;
        let item = self.player.item(target).or_else(|| room.item(target));
        match item {
            Some(item) => Ok(self.use_hook.use_item(item, room, &self.player)),
            None => Ok(Outcome::fail(
                ErrorKind::TargetNotFound,
                "You don't have that.",
            )),
        }
    }

    fn do_attack(&mut self, command: &Command) -> FictionResult<Outcome> {
        let here = self.player.location().clone();
        let target = if command.has_args() {
            Some(command.target())
        } else {
            self.combat
                .as_ref()
                .filter(|fight| fight.room == here)
                .map(|fight| fight.opponent.clone())
        };
        let Some(target) = target else {
            return Ok(Outcome::fail(ErrorKind::TargetNotFound, NOTHING_TO_ATTACK));
        };

        let room = self
            .world
            .room_mut(here.as_str())
            .ok_or_else(|| CoreError::RoomNotFound(here.clone()))?;
        let Some(creature) = room.creature_mut(&target) else {
            return Ok(Outcome::fail(ErrorKind::TargetNotFound, NOTHING_TO_ATTACK));
        };
        let opponent = creature.name().to_string();

        let mut lines = Vec::new();
        let already_fighting = self
            .combat
            .as_ref()
            .is_some_and(|fight| fight.room == here && names_match(&fight.opponent, &opponent));
        if !already_fighting {
            info!("combat with {opponent} begins in {here}");
            lines.push(format!("Combat with {opponent} begins!"));
            self.combat = Some(CombatContext {
                opponent: opponent.clone(),
                room: here.clone(),
            });
        }

        let round = exchange(
            &mut self.player,
            creature,
            &self.config.combat,
            &mut self.rng,
        );
        let hit = round.player_hit;
        if hit.strike.critical {
            lines.push(format!(
                "Critical hit! You strike the {opponent} for {} damage.",
                hit.dealt
            ));
        } else {
            lines.push(format!("You strike the {opponent} for {} damage.", hit.dealt));
        }

        if round.creature_fell() {
            let points = creature.reward().unwrap_or(self.config.defeat_award);
            room.remove_fallen();
            self.combat = None;
            self.award(points);
            info!("{opponent} defeated (+{points})");
            lines.push(format!("The {opponent} is defeated! (+{points} points)"));
            return Ok(Outcome::ok(lines.join("\n")));
        }
        lines.push(format!("The {}", creature.status()));

        if let Some(counter) = round.counter {
            lines.push(format!(
                "The {opponent} strikes you for {} damage. Health: {}",
                counter.dealt,
                self.player.vitality()
            ));
        }

        if round.player_fell() {
            self.running = false;
            self.combat = None;
            info!(
                "{} fell to {opponent}; final score {}",
                self.player.name(),
                self.score
            );
            lines.push("You have died!".to_string());
            lines.push(render::game_over(self.score, self.moves));
            return Ok(Outcome::finish(lines.join("\n")));
        }
        Ok(Outcome::ok(lines.join("\n")))
    }

    fn do_save(&mut self, slot: &str) -> Outcome {
        let snapshot = self.snapshot();
        let Some(store) = self.store.as_mut() else {
            return Outcome::fail(ErrorKind::PersistenceFailure, "Saving is not available.");
        };
        match store.save(slot, &snapshot) {
            Ok(()) => {
                info!("saved to slot \"{slot}\"");
                Outcome::ok(format!("Game saved to slot \"{slot}\"."))
            }
            Err(err) => {
                warn!("save to slot \"{slot}\" failed: {err}");
                Outcome::fail(ErrorKind::PersistenceFailure, format!("Save failed: {err}"))
            }
        }
    }

    fn do_load(&mut self, slot: &str) -> FictionResult<Outcome> {
        let Some(store) = self.store.as_ref() else {
            return Ok(Outcome::fail(
                ErrorKind::PersistenceFailure,
                "Loading is not available.",
            ));
        };
        let loaded = match store.load(slot) {
            Ok(snapshot) => self.restore(&snapshot),
            Err(err) => Err(err.into()),
        };
        if let Err(err) = loaded {
            warn!("load from slot \"{slot}\" failed: {err}");
            return Ok(Outcome::fail(
                ErrorKind::PersistenceFailure,
                format!("Load failed: {err}"),
            ));
        }
        let room = render::room_description(self.current_room()?);
        Ok(Outcome::ok(format!(
            "Game loaded from slot \"{slot}\".\n\n{room}"
        )))
    }

    fn do_quit(&mut self) -> Outcome {
        self.running = false;
        info!(
            "session ended by quit: score {}, moves {}",
            self.score, self.moves
        );
        Outcome::finish(FAREWELL)
    }

    fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::InMemoryStore;
    use gw_core::{Creature, Item};

    fn session() -> WorldSession {
        WorldSession::starter(SessionConfig::default().with_seed(42)).unwrap()
    }

    fn run(session: &mut WorldSession, commands: &[&str]) -> Outcome {
        let mut last = Outcome::silent();
        for command in commands {
            last = session.process(command);
        }
        last
    }

    #[test]
    fn starts_in_visited_start_room_without_award() {
        let s = session();
        assert_eq!(s.player().location().as_str(), "west_of_house");
        assert!(s.current_room().unwrap().is_visited());
        assert_eq!(s.score(), 0);
        assert_eq!(s.moves(), 0);
        assert!(s.is_running());
        assert!(s.opening().contains("West of House"));
    }

    #[test]
    fn move_north_discovers_forest() {
        let mut s = session();
        let out = s.process("north");
        assert!(out.success);
        assert!(out.continue_session);
        assert!(out.message.starts_with("Forest\n"));
        assert_eq!(s.player().location().as_str(), "forest");
        assert_eq!(s.moves(), 1);
        assert_eq!(s.score(), 10);
    }

    #[test]
    fn revisiting_earns_nothing() {
        let mut s = session();
        run(&mut s, &["n", "s", "n"]);
        assert_eq!(s.moves(), 3);
        assert_eq!(s.score(), 10);
    }

    #[test]
    fn blocked_move() {
        let mut s = session();
        let out = s.process("east");
        assert!(!out.success);
        assert_eq!(out.message, CANNOT_GO);
        assert_eq!(out.error, Some(ErrorKind::BlockedTransition));
        assert_eq!(s.moves(), 0);
    }

    #[test]
    fn locked_room_looks_like_no_exit() {
        let mut world = World::new("Locks");
        let mut hall = Room::new("hall", "Hall", "");
        hall.add_exit("north", "vault");
        world.add_room(hall).unwrap();
        let mut vault = Room::new("vault", "Vault", "");
        vault.set_locked(true);
        world.add_room(vault).unwrap();

        let mut s = WorldSession::new(world, SessionConfig::default().with_seed(1)).unwrap();
        let out = s.process("north");
        assert_eq!(out.message, CANNOT_GO);
        assert_eq!(s.player().location().as_str(), "hall");
        assert!(!s.world().room("vault").unwrap().is_visited());
    }

    #[test]
    fn go_with_and_without_direction() {
        let mut s = session();
        let out = s.process("go");
        assert_eq!(out.message, "Go where?");
        assert_eq!(out.error, Some(ErrorKind::MissingArgument));

        assert!(s.process("go N").success);
        assert_eq!(s.player().location().as_str(), "forest");
        assert!(s.process("go south").success);
        assert_eq!(s.player().location().as_str(), "west_of_house");
    }

    #[test]
    fn take_leaflet() {
        let mut s = session();
        let out = s.process("take leaflet");
        assert!(out.success);
        assert_eq!(out.message, "You take the leaflet.");
        assert!(s.player().has_item("leaflet"));
        assert_eq!(s.player().carried_weight(), 1);
        assert!(!s.current_room().unwrap().has_item("leaflet"));
        assert_eq!(s.score(), 5);
    }

    #[test]
    fn take_failures() {
        let mut s = session();
        assert_eq!(s.process("take").message, "Take what?");
        assert_eq!(s.process("get unicorn").message, NOT_HERE);

        let out = s.process("take mailbox");
        assert_eq!(out.message, "You can't take the mailbox.");
        assert!(s.current_room().unwrap().has_item("mailbox"));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn full_inventory_leaves_item_in_place() {
        let config = SessionConfig::default().with_seed(3).with_inventory_limit(1);
        let mut s = WorldSession::starter(config).unwrap();
        run(&mut s, &["take leaflet", "s", "e"]);
        let out = s.process("take lamp");
        assert_eq!(out.message, "Your inventory is full!");
        assert_eq!(out.error, Some(ErrorKind::CapacityExceeded));
        assert_eq!(s.current_room().unwrap().items().names(), vec!["lamp"]);
        assert_eq!(s.player().inventory().len(), 1);
    }

    #[test]
    fn too_heavy() {
        let config = SessionConfig::default().with_seed(3).with_carry_limit(2);
        let mut s = WorldSession::starter(config).unwrap();
        run(&mut s, &["s", "e"]);
        let out = s.process("take lamp");
        assert_eq!(out.message, "That's too heavy to carry!");
        assert_eq!(s.player().carried_weight(), 0);
    }

    #[test]
    fn drop_and_inventory() {
        let mut s = session();
        assert_eq!(s.process("i").message, "You are empty-handed.");
        assert_eq!(s.process("drop").message, "Drop what?");
        assert_eq!(s.process("drop leaflet").message, "You don't have that item.");

        s.process("take LEAFLET");
        let inv = s.process("inventory").message;
        assert!(inv.contains("  - leaflet (1 lbs)"));
        assert!(inv.ends_with("Total weight: 1/100 lbs"));

        s.process("n");
        assert_eq!(s.process("drop leaflet").message, "You drop the leaflet.");
        assert_eq!(s.player().carried_weight(), 0);
        assert!(s.current_room().unwrap().has_item("leaflet"));
    }

    #[test]
    fn look_and_examine() {
        let mut s = session();
        let look = s.process("l");
        assert!(look.message.contains("You see: mailbox, leaflet"));
        assert!(look.message.ends_with("Exits: north, south"));

        assert_eq!(s.process("examine").message, "Examine what?");
        assert_eq!(
            s.process("x leaflet").message,
            "A small leaflet that reads: 'Welcome to the white house!'"
        );
        assert_eq!(
            s.process("look at nothing").error,
            Some(ErrorKind::TargetNotFound)
        );
    }

    #[test]
    fn dark_cellar() {
        let mut s = session();
        let out = run(&mut s, &["s", "e", "down"]);
        assert!(out.message.contains(render::PITCH_BLACK));
        assert!(!out.message.contains("Exits"));
    }

    #[test]
    fn unknown_verb_changes_nothing() {
        let mut s = session();
        let before = s.snapshot();
        let out = s.process("xyzzy");
        assert!(!out.success);
        assert!(out.continue_session);
        assert_eq!(out.message, UNKNOWN_COMMAND);
        assert_eq!(out.error, Some(ErrorKind::InvalidCommand));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn blank_input_is_noop() {
        let mut s = session();
        let out = s.process("   ");
        assert!(out.success);
        assert!(out.message.is_empty());
        assert!(out.continue_session);
    }

    #[test]
    fn quit_stops_session() {
        let mut s = session();
        let out = s.process("q");
        assert!(out.success);
        assert!(!out.continue_session);
        assert_eq!(out.message, FAREWELL);
        assert!(!s.is_running());

        let after = s.process("north");
        assert!(!after.continue_session);
        assert_eq!(s.moves(), 0);
    }

    #[test]
    fn score_and_status() {
        let mut s = session();
        run(&mut s, &["n", "s", "take leaflet"]);
        assert_eq!(
            s.process("score").message,
            "Current score: 15 points\nMoves taken: 2"
        );
        assert!(s.process("status").message.contains("Inventory: 1/10 items"));
        assert!(s.process("help").message.contains("Available Commands"));
    }

    #[test]
    fn use_defaults_to_no_effect() {
        let mut s = session();
        assert_eq!(s.process("use").message, "Use what?");
        assert_eq!(s.process("use wand").message, "You don't have that.");
        let out = s.process("use mailbox");
        assert!(!out.success);
        assert_eq!(out.message, crate::hook::CANNOT_USE);
    }

    struct Reader;

    impl ItemUseHook for Reader {
        fn use_item(&mut self, item: &Item, room: &Room, _player: &Player) -> Outcome {
            Outcome::ok(format!("You read the {} in the {}.", item.name(), room.name()))
        }
    }

    #[test]
    fn custom_use_hook() {
        let mut s = session().with_use_hook(Reader);
        s.process("take leaflet");
        assert_eq!(
            s.process("use leaflet").message,
            "You read the leaflet in the West of House."
        );
    }

    fn to_attic(s: &mut WorldSession) {
        run(s, &["s", "e", "u"]);
        assert_eq!(s.player().location().as_str(), "attic");
    }

    #[test]
    fn attack_without_target() {
        let mut s = session();
        let out = s.process("attack");
        assert_eq!(out.message, NOTHING_TO_ATTACK);
        assert_eq!(s.process("kill grue").message, NOTHING_TO_ATTACK);
        assert!(!s.in_combat());
    }

    #[test]
    fn fight_troll_to_the_end() {
        let mut s = session();
        to_attic(&mut s);
        let score_before = s.score();

        let first = s.process("attack troll");
        assert!(first.message.starts_with("Combat with troll begins!"));
        assert!(s.in_combat());

        for _ in 0..10 {
            if !s.in_combat() {
                break;
            }
            let out = s.process("attack");
            assert!(!out.message.contains("begins"));
        }
        assert!(!s.in_combat());
        assert!(s.current_room().unwrap().creatures().is_empty());
        assert_eq!(s.score(), score_before + 50);
        assert!(s.player().is_alive());
        assert!(s.player().vitality().current() < 100);
    }

    #[test]
    fn fleeing_abandons_combat() {
        let mut s = session();
        to_attic(&mut s);
        s.process("fight troll");
        assert!(s.in_combat());
        let hp = s.current_room().unwrap().creature("troll").unwrap().vitality().current();

        let out = s.process("down");
        assert!(out.message.starts_with("You escape from the troll."));
        assert!(!s.in_combat());
        assert_eq!(s.process("attack").message, NOTHING_TO_ATTACK);
        let troll = s.world().room("attic").unwrap().creature("troll").unwrap();
        assert_eq!(troll.vitality().current(), hp);
    }

    #[test]
    fn dying_ends_the_session() {
        let mut world = World::new("Doom");
        let mut pit = Room::new("pit", "Pit", "No way out.");
        pit.add_creature(Creature::new("dragon", "Enormous.", 1000, 500, 50));
        world.add_room(pit).unwrap();

        let mut s = WorldSession::new(world, SessionConfig::default().with_seed(5)).unwrap();
        let out = s.process("attack dragon");
        assert!(!out.continue_session);
        assert!(out.message.contains("You have died!"));
        assert!(out.message.contains("GAME OVER"));
        assert!(!s.is_running());
        assert_eq!(s.player().vitality().current(), 0);
        assert!(!s.process("look").continue_session);
    }

    #[test]
    fn creature_reward_overrides_default() {
        let mut world = World::new("Rats");
        let mut cellar = Room::new("cellar", "Cellar", "");
        cellar.add_creature(Creature::new("rat", "Small.", 1, 1, 0).with_reward(7));
        world.add_room(cellar).unwrap();

        let mut s = WorldSession::new(world, SessionConfig::default().with_seed(5)).unwrap();
        let out = s.process("attack RAT");
        assert!(out.message.contains("The rat is defeated! (+7 points)"));
        assert_eq!(s.score(), 7);
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut s = session().with_store(InMemoryStore::new());
        run(&mut s, &["take leaflet", "n"]);
        assert_eq!(s.process("save").message, "Game saved to slot \"quicksave\".");
        let saved = s.snapshot();

        run(&mut s, &["drop leaflet", "s", "s", "e"]);
        assert_ne!(s.snapshot(), saved);

        let out = s.process("load");
        assert!(out.success, "{}", out.message);
        assert!(out.message.contains("Forest"));
        assert_eq!(s.snapshot(), saved);
        assert_eq!(s.score(), 15);
        assert_eq!(s.moves(), 1);
    }

    #[test]
    fn named_slots_and_missing_slot() {
        let mut s = session().with_store(InMemoryStore::new());
        assert!(s.process("save alpha").success);
        let out = s.process("load beta");
        assert!(!out.success);
        assert_eq!(out.error, Some(ErrorKind::PersistenceFailure));
        assert!(s.process("load alpha").success);
    }

    #[test]
    fn persistence_unavailable_without_store() {
        let mut s = session();
        assert_eq!(s.process("save").message, "Saving is not available.");
        assert_eq!(s.process("load").message, "Loading is not available.");
    }

    #[test]
    fn loading_ends_combat() {
        let mut s = session().with_store(InMemoryStore::new());
        to_attic(&mut s);
        s.process("save");
        s.process("attack troll");
        assert!(s.in_combat());
        s.process("load");
        assert!(!s.in_combat());
    }

    #[test]
    fn bad_snapshot_leaves_session_untouched() {
        let mut s = session();
        s.process("take leaflet");
        let before = s.snapshot();

        let mut bad = before.clone();
        bad.current_room = RoomId::new("narnia");
        bad.score = 999;
        assert!(s.restore(&bad).is_err());
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn restore_takes_saved_player_name() {
        let config = SessionConfig::default().with_player_name("Alice");
        let mut s = WorldSession::starter(config).unwrap();
        let mut saved = s.snapshot();
        saved.player_name = "Bob".to_string();
        s.restore(&saved).unwrap();
        assert_eq!(s.player().name(), "Bob");
        assert!(s.process("status").message.contains("Name: Bob"));
    }

    #[test]
    fn same_seed_same_fight() {
        let fight = || {
            let mut s = session();
            to_attic(&mut s);
            run(&mut s, &["attack troll", "attack", "attack"]);
            s.snapshot()
        };
        assert_eq!(fight(), fight());
    }
}
