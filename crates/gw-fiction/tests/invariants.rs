//! Properties that must hold after every command, whatever the input.

use std::collections::BTreeMap;

use gw_fiction::{SessionConfig, Verb, WorldSession, resolve_alias};
use proptest::prelude::*;

const VERBS: &[&str] = &[
    "n", "s", "e", "w", "u", "d", "go", "look", "x", "take", "get", "drop", "i", "use", "score",
    "status", "attack", "xyzzy", "",
];

const TARGETS: &[&str] = &[
    "", "leaflet", "LEAFLET", "lamp", "rope", "sword", "mailbox", "troll", "north", "nothing",
];

fn command() -> impl Strategy<Value = String> {
    (prop::sample::select(VERBS), prop::sample::select(TARGETS))
        .prop_map(|(verb, target)| format!("{verb} {target}"))
}

fn session(max_items: usize, max_weight: u32) -> WorldSession {
    let config = SessionConfig::default()
        .with_seed(11)
        .with_inventory_limit(max_items)
        .with_carry_limit(max_weight);
    WorldSession::starter(config).unwrap()
}

/// Every item name in the world and inventory, with its count.
fn census(s: &WorldSession) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    let rooms = s.world().rooms().flat_map(|r| r.items().iter());
    for item in rooms.chain(s.player().inventory().iter()) {
        *counts.entry(item.name().to_string()).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn weight_and_capacity_hold(
        commands in prop::collection::vec(command(), 1..60),
        max_items in 1usize..5,
        max_weight in 1u32..20,
    ) {
        let mut s = session(max_items, max_weight);
        for line in &commands {
            s.process(line);
            let player = s.player();
            prop_assert_eq!(player.carried_weight(), player.inventory().total_weight());
            prop_assert!(player.carried_weight() <= max_weight);
            prop_assert!(player.inventory().len() <= max_items);
            prop_assert!(player.vitality().current() <= player.vitality().max());
        }
    }

    #[test]
    fn items_are_conserved(commands in prop::collection::vec(command(), 1..60)) {
        let mut s = session(3, 10);
        let before = census(&s);
        for line in &commands {
            s.process(line);
            prop_assert_eq!(census(&s), before.clone());
        }
    }

    #[test]
    fn visited_rooms_stay_visited(commands in prop::collection::vec(command(), 1..60)) {
        let mut s = session(10, 100);
        let mut seen: Vec<String> = Vec::new();
        for line in &commands {
            s.process(line);
            for id in &seen {
                prop_assert!(s.world().room(id).unwrap().is_visited());
            }
            seen = s
                .world()
                .rooms()
                .filter(|r| r.is_visited())
                .map(|r| r.id().to_string())
                .collect();
        }
    }

    #[test]
    fn score_never_decreases(commands in prop::collection::vec(command(), 1..60)) {
        let mut s = session(10, 100);
        let mut last = 0;
        for line in &commands {
            s.process(line);
            prop_assert!(s.score() >= last);
            last = s.score();
        }
    }

    #[test]
    fn alias_resolution_is_idempotent(word in "[a-zA-Z?]{0,8}") {
        let once = resolve_alias(&word);
        prop_assert_eq!(resolve_alias(&once), once.clone());
        prop_assert_eq!(resolve_alias(&word.to_uppercase()), once);
    }

    #[test]
    fn failed_take_changes_nothing(max_items in 0usize..2, max_weight in 0u32..3) {
        let mut s = session(max_items, max_weight);
        s.process("s");
        s.process("e");
        let before = s.snapshot();
        let out = s.process("take lamp");
        if !out.success {
            prop_assert_eq!(s.snapshot(), before);
        } else {
            prop_assert!(s.player().has_item("lamp"));
        }
    }
}

#[test]
fn direction_aliases_ignore_case() {
    for (short, long) in [("N", "north"), ("n", "north"), ("U", "up"), ("d", "down")] {
        assert_eq!(resolve_alias(short), long);
        assert_eq!(Verb::resolve(short), Verb::resolve(long));
    }
}

#[test]
fn scenario_walkthrough() {
    let mut s = session(10, 100);

    let out = s.process("north");
    assert!(out.success);
    assert_eq!(s.player().location().as_str(), "forest");
    assert_eq!((s.moves(), s.score()), (1, 10));

    s.process("south");
    let out = s.process("take leaflet");
    assert_eq!(out.message, "You take the leaflet.");
    assert_eq!(s.score(), 15);

    let before = s.snapshot();
    let out = s.process("xyzzy");
    assert!(!out.success && out.continue_session);
    assert_eq!(s.snapshot(), before);

    let out = s.process("quit");
    assert!(!out.continue_session);
}
