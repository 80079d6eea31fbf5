//! Flavor text for each move, the introduction and the end of a round.

use crate::core::{CombatReport, Encounter, GameStatus, MoveOutcome};
use crate::input::ControlScheme;
use crate::types::KEYS_TO_WIN;

/// Introduction pages; the binary waits for Enter after each.
pub const INTRO_PAGES: [&str; 3] = [
    "Welcome to Treasure Quest!\n\n\
     A deathbed confession by your grandfather has revealed an incredible secret: the location of a vault containing untold riches!\n\n\
     But there's a catch: the only way into the vault is with four different keys, stolen many years ago by bandits.\n\
     Luckily, they also stole a fake map leading to the vault. Fearing for his life and the lives of his family when the bandits realized\n\
     the deception, your grandfather fled far away.\n\n\
     Now he, old, tired, and nearing the end, has given you the means to claim your birthright.\n\
     You must travel to the land of his youth, track down the keys, and find the vault.\n\n\
     Good luck!\n(press Enter)",
    "\n\nNW       N       NE\n\
     \x20                  \n\
     \x20   . . . A . .    \n\
     \x20   A A A . . .    \n\
     W   O A . . . .   E\n\
     \x20   . . . A . A    \n\
     \x20   . A A . . .    \n\
     \x20   . O ! . . x    \n\
     \x20                  \n\
     SW       S       SE\n\n\
     BASIC GAMEPLAY:\n\
     Your grandfather's map will be your guide, with each location in the land marked with a symbol.\n\
     x - Represents you. You may move in any of the eight directions shown.\n\
     A - Impassable mountains. You'll have to find ways around them.\n\
     O - Two portals created by ancient, unknown magic. Step into one and you'll immediately be transported to the other!\n\
     ! - The location of the vault. Make your way here when you've acquired all four keys.\n\
     . - Settlements. These are where you will search for the bandits.\n\
     Be warned: the journey from one place to another takes a toll. You will lose one strength point each time you move.\n\
     Run out of strength and your journey ends.\n(press Enter)",
    "\n\nBATTLE:\n\
     To gain the keys from the bandits, you must defeat them in battle.\n\
     Each one has a maximum possible attack power of between 6 and 10. Their actual attack may be weaker.\n\
     You will launch your own attack. To do so, you will wager a certain number of your strength points,\n\
     with the power of your attack being equal to that number.\n\
     If your attack is weaker than the bandit's, you will lose the fight and lose all the strength points that you wagered.\n\
     If your attack is equal to or greater than the bandit's, you win the fight, losing only some of the strength points that you wagered, and win a key.\n\
     (press Enter)",
];

const REST: &str = "None of the bandits have been seen here. You stop and rest for the night.";

/// One line per binding, e.g. `Move SW: 1`
pub fn controls_help(controls: &ControlScheme) -> Vec<String> {
    controls
        .bindings()
        .map(|(direction, key)| format!("{:<9}{key}", format!("Move {direction}:")))
        .collect()
}

/// Describe what a move did, in the order it happened
pub fn describe(outcome: &MoveOutcome) -> Vec<String> {
    let arrival = match outcome {
        MoveOutcome::OffEdge => return vec!["You cannot move off the edge of the board".into()],
        MoveOutcome::Blocked { .. } => return vec!["A mountain blocks your path...".into()],
        MoveOutcome::Arrived(arrival) => arrival,
    };

    let mut lines = Vec::new();
    if arrival.teleported {
        lines.push("Prepare to teleport!".to_string());
    }

    let strength = arrival.visit.strength_after_travel;
    let plural = if strength == 1 { "" } else { "s" };
    lines.push(format!(
        "Your travels have made you weary. You have {strength} strength point{plural} remaining."
    ));
    lines.push(String::new());

    match arrival.visit.encounter {
        Encounter::Rested => lines.push(REST.into()),
        Encounter::Combat(report) => describe_fight(&report, strength, &mut lines),
        Encounter::VaultLocked { keys } => {
            lines.push("You've reached the vault!".into());
            lines.push(format!(
                "But you've only acquired {keys} keys. Come back when you've found all {KEYS_TO_WIN}."
            ));
        }
        Encounter::VaultOpened => lines.push(format!(
            "You've reached the vault with all {KEYS_TO_WIN} keys and reclaimed the family treasure!"
        )),
        Encounter::Exhausted | Encounter::Portal | Encounter::Impassable => {}
    }
    lines
}

fn describe_fight(report: &CombatReport, strength_before: u32, lines: &mut Vec<String>) {
    let after_wager = strength_before.saturating_sub(report.wager);
    lines.push(format!("Strength points remaining: {after_wager}"));
    lines.push(format!("Enemy attack: {}", report.attack));
    lines.push(String::new());
    if report.won {
        lines.push("You've defeated the bandit and recovered a key!".into());
        lines.push("You've also recovered half of the strength points that you wagered.".into());
        lines.push(format!(
            "Strength points remaining: {}",
            after_wager + report.refund
        ));
    } else {
        lines.push("You failed to defeat the bandit. He escapes with a key.".into());
        lines.push(format!("Strength points remaining: {after_wager}"));
    }
}

/// Closing line for a finished round
pub fn end_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Won => "You win!",
        GameStatus::Lost => "Game over!",
        GameStatus::InProgress => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Arrival, Visit};
    use crate::types::Coord;

    fn arrived(teleported: bool, strength_after_travel: u32, encounter: Encounter) -> MoveOutcome {
        MoveOutcome::Arrived(Arrival {
            position: Coord::new(1, 1),
            teleported,
            visit: Visit {
                strength_after_travel,
                encounter,
            },
        })
    }

    #[test]
    fn rejected_moves_get_one_line() {
        assert_eq!(
            describe(&MoveOutcome::OffEdge),
            vec!["You cannot move off the edge of the board"]
        );
        let blocked = describe(&MoveOutcome::Blocked {
            at: Coord::new(0, 1),
        });
        assert!(blocked[0].contains("mountain"));
    }

    #[test]
    fn travel_line_uses_singular_for_one_point() {
        let lines = describe(&arrived(false, 1, Encounter::Rested));
        assert!(lines[0].ends_with("1 strength point remaining."));
        assert_eq!(lines.last().map(String::as_str), Some(REST));
    }

    #[test]
    fn teleport_is_announced_first() {
        let lines = describe(&arrived(true, 20, Encounter::Portal));
        assert_eq!(lines[0], "Prepare to teleport!");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn fight_reports_strength_before_and_after_refund() {
        let report = CombatReport {
            max_power: 8,
            attack: 3,
            wager: 5,
            won: true,
            refund: 2,
        };
        let lines = describe(&arrived(false, 29, Encounter::Combat(report)));
        assert!(lines.contains(&"Strength points remaining: 24".to_string()));
        assert!(lines.contains(&"Enemy attack: 3".to_string()));
        assert_eq!(lines.last().unwrap(), "Strength points remaining: 26");
    }

    #[test]
    fn controls_help_lists_every_direction() {
        let help = controls_help(&ControlScheme::numpad());
        assert_eq!(help.len(), 8);
        assert_eq!(help[0], "Move SW: 1");
        assert_eq!(help[1], "Move S:  2");
    }

    #[test]
    fn end_messages() {
        assert_eq!(end_message(GameStatus::Won), "You win!");
        assert_eq!(end_message(GameStatus::Lost), "Game over!");
        assert!(
            describe(&arrived(false, 3, Encounter::VaultLocked { keys: 2 }))
                .iter()
                .any(|l| l.contains("only acquired 2 keys"))
        );
    }
}
