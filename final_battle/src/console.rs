//! Console rendering and the stdin-driven human player

use battle_core::battle::Rejection;
use battle_core::prelude::*;
use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

/// Narration lines for one event
pub fn describe(event: &BattleEvent) -> Vec<String> {
    match event {
        BattleEvent::WaveStarted { wave, hostiles } => vec![
            format!("Battle {wave} begins!"),
            format!("Facing: {}", hostiles.join(", ")),
        ],
        BattleEvent::TurnStarted { name, .. } => vec![format!("It is {name}'s turn...")],
        BattleEvent::SelectionRejected {
            name, rejection, ..
        } => vec![match rejection {
            Rejection::ActionUnavailable { action } => format!("{name} can't {action} right now."),
            Rejection::EmptyInventory => "You don't have any items to use!".to_string(),
            Rejection::EmptyGearInventory => "You don't have any gear to equip!".to_string(),
            Rejection::TargetOutOfRange { .. } => {
                "Sorry, that target doesn't exist. Pick again.".to_string()
            }
            Rejection::IndexOutOfRange { index, .. } => format!(
                "You don't have anything in slot {}. Pick something else!",
                index + 1
            ),
        }],
        BattleEvent::Idled { line, .. } => vec![line.clone()],
        BattleEvent::AttackUsed {
            attacker_name,
            outcome,
            ..
        } => describe_attack(attacker_name, outcome),
        BattleEvent::ItemUsed {
            user_name,
            item,
            target_name,
            change,
            status,
            ..
        } => {
            let mut lines = vec![format!("{user_name} used {item} on {target_name}.")];
            if let Some(change) = change {
                lines.push(format!(
                    "{target_name} has been healed by {}. They are now at {} HP.",
                    change.delta(),
                    change.after
                ));
            }
            match status.map(|s| s.kind) {
                Some(StatusKind::Poison) => lines.push(format!("{target_name} has been poisoned!")),
                Some(StatusKind::Regen) => lines.push(format!("{target_name} is regenerating!")),
                Some(StatusKind::Bleed) => lines.push(format!("{target_name} is bleeding!")),
                None => {}
            }
            lines
        }
        BattleEvent::GearEquipped {
            name,
            gear,
            replaced,
            ..
        } => {
            let mut lines = Vec::new();
            if let Some(old) = replaced {
                lines.push(format!("{name} has unequipped {old}..."));
            }
            lines.push(format!("{name} has equipped {gear}!"));
            lines
        }
        BattleEvent::StatusTicked { name, tick, .. } => vec![match tick.kind {
            StatusKind::Poison => format!("{name} took damage from poison!"),
            StatusKind::Regen => format!("{name} regenerated some health!"),
            StatusKind::Bleed => format!("{name} took damage from bleeding!"),
        }],
        BattleEvent::StatusRecovered { name, kind, .. } => {
            vec![format!("{name} has recovered from {kind}.")]
        }
        BattleEvent::CharacterDied { name, .. } => vec![format!("{name} has perished!")],
        BattleEvent::CorpsePlundered { gear, .. } => vec![format!("Plundered {gear}!")],
        BattleEvent::LootTransferred { items, gear } => {
            let mut lines = Vec::new();
            if !items.is_empty() {
                lines.push("You looted the following items:".to_string());
                lines.extend(items.iter().map(|i| i.to_string()));
            }
            if !gear.is_empty() {
                lines.push("You looted the following equippable gear:".to_string());
                lines.extend(gear.iter().map(|g| g.to_string()));
            }
            lines
        }
        BattleEvent::WaveWon { wave } => vec![format!("Wave {wave} has been defeated!")],
        BattleEvent::GameOver { result, .. } => vec![match result {
            GameResult::Victory => "The last of the Uncoded One's forces have fallen. The thing itself crumbles, stutters, and finally erupts in a fantastic, glitchy explosion. You saved the day!".to_string(),
            GameResult::Defeat => "The heroes have fallen! The Uncoded One's forces have prevailed!".to_string(),
        }],
    }
}

fn describe_attack(attacker: &str, outcome: &AttackOutcome) -> Vec<String> {
    let target = &outcome.target_name;
    let mut lines = vec![format!("{attacker} used {} on {target}!", outcome.attack)];
    if !outcome.hit {
        lines.push(format!("{attacker} MISSED!"));
        return lines;
    }
    if outcome.critical {
        lines.push("It's a CRIT!".to_string());
    }
    if outcome.status_applied.is_some() {
        lines.push(format!("{target} is bleeding!"));
    }
    if outcome.dodged {
        lines.push(format!("{target} dodged the attack!"));
    } else if let Some(modifier) = outcome.modifier.filter(|_| outcome.reduced_by != 0) {
        lines.push(format!(
            "{modifier} has reduced damage by {}!",
            outcome.reduced_by
        ));
    }
    if !outcome.killing_blow() {
        lines.push(format!(
            "{} dealt {} damage to {target}!",
            outcome.attack, outcome.damage
        ));
        if let Some(hp) = outcome.hp_after() {
            lines.push(format!("{target} is now at {hp} HP."));
        }
    }
    lines
}

/// Prints every event as it happens
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl ConsoleObserver<Stdout> {
    pub fn stdout() -> Self {
        ConsoleObserver { out: io::stdout() }
    }
}

impl<W: Write> BattleObserver for ConsoleObserver<W> {
    fn on_event(&mut self, event: &BattleEvent) {
        for line in describe(event) {
            // a closed stdout only loses narration
            let _ = writeln!(self.out, "{line}");
        }
        let _ = self.out.flush();
    }
}

/// Line-at-a-time input
///
/// `Stdin` takes its lock per line, so both players of a shared terminal
/// can read from it.
pub trait ReadLine {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl ReadLine for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> ReadLine for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Ask for the hero's name; `None` on an empty line or closed input
pub fn ask_name<I: ReadLine, O: Write>(input: &mut I, output: &mut O) -> io::Result<Option<String>> {
    writeln!(output, "What is the True Programmer's name?")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let name = line.trim();
    Ok((!name.is_empty()).then(|| name.to_uppercase()))
}

/// Menu label for an action, naming the attack behind it
fn action_label(actor: &Character, action: ActionKind) -> String {
    match action {
        ActionKind::StandardAttack => actor.standard_attack.name().to_string(),
        ActionKind::Special => actor
            .special_attack()
            .map(|a| a.name().to_string())
            .unwrap_or_else(|| action.to_string()),
        other => other.to_string(),
    }
}

/// Human player reading 1-based menu picks line by line
///
/// Out-of-range or unparsable input is re-prompted. When input runs out
/// the computer takes over for the rest of the game.
pub struct HumanProvider<I: ReadLine, O: Write> {
    input: I,
    output: O,
    label: String,
    fallback: Option<AiProvider>,
}

impl HumanProvider<Stdin, Stdout> {
    pub fn stdio(label: impl Into<String>) -> Self {
        HumanProvider::new(io::stdin(), io::stdout(), label)
    }
}

impl<I: ReadLine, O: Write> HumanProvider<I, O> {
    pub fn new(input: I, output: O, label: impl Into<String>) -> Self {
        HumanProvider {
            input,
            output,
            label: label.into(),
            fallback: None,
        }
    }

    fn say(&mut self, line: &str) {
        let _ = writeln!(self.output, "{line}");
    }

    /// Read a 1-based pick in `1..=count`, re-prompting until one arrives
    fn read_choice(&mut self, count: usize, complaint: &str) -> Option<usize> {
        let _ = self.output.flush();
        loop {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Some(n - 1),
                _ => {
                    self.say(complaint);
                    let _ = self.output.flush();
                }
            }
        }
    }

    fn hand_over(&mut self) -> &mut AiProvider {
        if self.fallback.is_none() {
            self.say("Input closed, the computer takes over.");
        }
        let seed = self.label.len() as u64;
        self.fallback.get_or_insert_with(|| AiProvider::seeded(seed))
    }

    fn render_board(&mut self, view: &BattleView<'_>) {
        let mut lines = vec![format!("=============== BATTLE {} ===============", view.wave)];
        lines.extend(view.allies.iter().map(|c| board_line(c, c.id == view.actor.id)));
        lines.push("---------------- VERSUS ----------------".to_string());
        lines.extend(view.hostiles.iter().map(|c| board_line(c, false)));
        for line in lines {
            self.say(&line);
        }
    }
}

fn board_line(c: &Character, active: bool) -> String {
    let gear = c
        .equipped()
        .map(|g| g.to_string())
        .unwrap_or_else(|| "None".to_string());
    let marker = if active { ">" } else { " " };
    let warning = if c.hp() < c.max_hp() / 4 { " [!]" } else { "" };
    format!(
        "{marker} {:<32}{}/{} HP{warning}",
        format!("{} [{gear}]", c.name),
        c.hp(),
        c.max_hp()
    )
}

impl<I: ReadLine, O: Write> DecisionProvider for HumanProvider<I, O> {
    fn pick_action(&mut self, view: &BattleView<'_>, ctx: &mut TurnContext) -> ActionKind {
        if let Some(ai) = self.fallback.as_mut() {
            return ai.pick_action(view, ctx);
        }
        self.render_board(view);
        let actions = view.actor.available_actions();
        self.say("What will you do?");
        for (i, action) in actions.iter().enumerate() {
            let label = action_label(view.actor, *action);
            self.say(&format!("{} - {label}", i + 1));
        }
        match self.read_choice(actions.len(), "You can't do that.") {
            Some(index) => actions[index],
            None => self.hand_over().pick_action(view, ctx),
        }
    }

    fn pick_target(
        &mut self,
        view: &BattleView<'_>,
        candidates: &[Character],
        ctx: &mut TurnContext,
    ) -> usize {
        if let Some(ai) = self.fallback.as_mut() {
            return ai.pick_target(view, candidates, ctx);
        }
        self.say("Pick a target!");
        for (i, c) in candidates.iter().enumerate() {
            self.say(&format!("{} - {}", i + 1, c.name));
        }
        match self.read_choice(
            candidates.len(),
            "Sorry, that target doesn't exist. Pick again.",
        ) {
            Some(index) => index,
            None => self.hand_over().pick_target(view, candidates, ctx),
        }
    }

    fn pick_item_index(
        &mut self,
        view: &BattleView<'_>,
        kind: SelectionKind,
        size: usize,
        ctx: &mut TurnContext,
    ) -> usize {
        if let Some(ai) = self.fallback.as_mut() {
            return ai.pick_item_index(view, kind, size, ctx);
        }
        let entries: Vec<String> = match kind {
            SelectionKind::Item => {
                self.say("Pick an item to use:");
                view.items
                    .iter()
                    .map(|i| format!("{i}    Effect: {}", i.description()))
                    .collect()
            }
            SelectionKind::Gear => {
                self.say("Select the item you wish to equip to this character:");
                view.gear
                    .iter()
                    .map(|g| format!("{g}    Effect: {}", g.description()))
                    .collect()
            }
        };
        for (i, entry) in entries.iter().enumerate() {
            self.say(&format!("{} - {entry}", i + 1));
        }
        match self.read_choice(size, "You don't have anything in that slot. Pick something else!") {
            Some(index) => index,
            None => self.hand_over().pick_item_index(view, kind, size, ctx),
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::battle::Player;

    fn field() -> (Player, Player) {
        let mut heroes = Player::new(Faction::Good);
        heroes.party.push(Character::from_archetype(
            CharacterId(0),
            "ADA",
            Archetype::TrueProgrammer,
        ));
        heroes.inventory = vec![Consumable::HealthPotion];
        let mut villains = Player::new(Faction::Evil);
        villains.party.push(Character::from_archetype(
            CharacterId(1),
            "SKELETON",
            Archetype::Skeleton,
        ));
        (heroes, villains)
    }

    #[test]
    fn test_menu_reprompts_until_valid() {
        let (heroes, villains) = field();
        let view = BattleView::new(1, &heroes, &villains, CharacterId(0)).unwrap();
        let mut output = Vec::new();
        let mut human = HumanProvider::new(Cursor::new("9\nabc\n2\n"), &mut output, "p1");

        let action = human.pick_action(&view, &mut TurnContext::default());
        assert_eq!(action, ActionKind::Special);
        drop(human);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1 - PUNCH"));
        assert!(text.contains("2 - SLASH"));
        assert_eq!(text.matches("You can't do that.").count(), 2);
    }

    #[test]
    fn test_target_pick_is_one_based() {
        let (heroes, villains) = field();
        let view = BattleView::new(1, &heroes, &villains, CharacterId(0)).unwrap();
        let mut human = HumanProvider::new(Cursor::new("1\n"), Vec::new(), "p1");
        let pick = human.pick_target(&view, view.hostiles, &mut TurnContext::default());
        assert_eq!(pick, 0);
    }

    #[test]
    fn test_closed_input_hands_over() {
        let (heroes, villains) = field();
        let view = BattleView::new(1, &heroes, &villains, CharacterId(0)).unwrap();
        let mut human = HumanProvider::new(Cursor::new(""), Vec::new(), "p1");
        let mut ctx = TurnContext::default();

        let action = human.pick_action(&view, &mut ctx);
        assert!(view.actor.can(action));
        assert!(human.fallback.is_some());
        assert_eq!(human.pick_item_index(&view, SelectionKind::Item, 1, &mut ctx), 0);
    }

    #[test]
    fn test_ask_name() {
        let mut out = Vec::new();
        let name = ask_name(&mut Cursor::new("grace\n"), &mut out).unwrap();
        assert_eq!(name.as_deref(), Some("GRACE"));
        let name = ask_name(&mut Cursor::new("\n"), &mut out).unwrap();
        assert_eq!(name, None);
    }

    #[test]
    fn test_describe_miss_and_kill() {
        let miss = AttackOutcome {
            attack: AttackKind::QuickShot,
            target: CharacterId(1),
            target_name: "SKELETON".to_string(),
            hit: false,
            critical: false,
            dodged: false,
            modifier: None,
            reduced_by: 0,
            damage: 0,
            status_applied: None,
            change: None,
        };
        let lines = describe(&BattleEvent::AttackUsed {
            attacker: CharacterId(0),
            attacker_name: "VIN".to_string(),
            outcome: miss,
        });
        assert_eq!(lines, vec!["VIN used QUICK SHOT on SKELETON!", "VIN MISSED!"]);

        let died = describe(&BattleEvent::CharacterDied {
            character: CharacterId(1),
            name: "SKELETON".to_string(),
            faction: Faction::Evil,
        });
        assert_eq!(died, vec!["SKELETON has perished!"]);
    }

    #[test]
    fn test_describe_empty_loot_is_silent() {
        let lines = describe(&BattleEvent::LootTransferred {
            items: vec![],
            gear: vec![],
        });
        assert!(lines.is_empty());
    }
}
