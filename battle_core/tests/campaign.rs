//! Whole-campaign runs with computer players on both sides

use battle_core::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

const STEP_LIMIT: usize = 100_000;

fn ai_battle(seed: u64) -> Battle<SeededRandom> {
    Battle::new(
        Campaign::the_final_battle(),
        BattleConstants::default(),
        AiProvider::seeded(seed).with_label("heroes"),
        AiProvider::seeded(seed.wrapping_add(1)).with_label("villains"),
        SeededRandom::new(seed.wrapping_add(2)),
    )
}

fn play_out(battle: &mut Battle<SeededRandom>) -> GameResult {
    for _ in 0..STEP_LIMIT {
        if let BattlePhase::GameOver(result) = battle.step().unwrap() {
            return result;
        }
    }
    panic!("battle did not finish within {STEP_LIMIT} steps");
}

fn config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../config")
}

#[test]
fn test_ai_campaigns_finish() {
    for seed in 0..20 {
        let mut battle = ai_battle(seed);
        let result = play_out(&mut battle);
        match result {
            GameResult::Victory => {
                assert_eq!(battle.wave(), 4, "seed {seed}");
                assert!(!battle.heroes().party.is_empty());
            }
            GameResult::Defeat => assert!(battle.heroes().party.is_empty(), "seed {seed}"),
        }
    }
}

#[test]
fn test_same_seed_same_battle() {
    let mut a = ai_battle(42);
    let mut b = ai_battle(42);
    play_out(&mut a);
    play_out(&mut b);

    let a_json = serde_json::to_string(a.events()).unwrap();
    let b_json = serde_json::to_string(b.events()).unwrap();
    assert_eq!(a_json, b_json);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_hp_stays_in_bounds() {
    for seed in 0..10 {
        let mut battle = ai_battle(seed);
        while !battle.is_over() {
            battle.step().unwrap();
            let snapshot = battle.snapshot();
            for c in snapshot.heroes.party.iter().chain(&snapshot.villains.party) {
                assert!(c.hp > 0 && c.hp <= c.max_hp, "{} at {}/{}", c.name, c.hp, c.max_hp);
            }
        }
    }
}

#[test]
fn test_dead_never_act_or_get_hit() {
    for seed in 0..10 {
        let mut battle = ai_battle(seed);
        play_out(&mut battle);

        let mut dead = HashSet::new();
        for event in battle.events() {
            match event {
                BattleEvent::CharacterDied { character, .. } => {
                    assert!(dead.insert(*character), "{character} died twice");
                }
                BattleEvent::TurnStarted { character, .. } => {
                    assert!(!dead.contains(character), "{character} acted after death");
                }
                BattleEvent::AttackUsed { outcome, .. } => {
                    assert!(!dead.contains(&outcome.target), "corpse was attacked");
                }
                _ => {}
            }
        }
    }
}

#[test]
fn test_shipped_campaign_matches_builtin() {
    let campaign = Campaign::load(&config_dir().join("campaign.toml")).unwrap();
    assert_eq!(campaign, Campaign::the_final_battle());
}

#[test]
fn test_shipped_constants_match_defaults() {
    let constants = BattleConstants::load_from_path(&config_dir().join("constants.toml")).unwrap();
    assert_eq!(constants, BattleConstants::default());
}
