//! Actions - turning a picked action into an effect on the field

mod dispatch;

pub use dispatch::Dispatcher;

use crate::rng::RandomSource;

/// Pick a flavor line for a character that does nothing
pub fn idle_line<R>(name: &str, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    match rng.roll_below(10) {
        0 => format!("{name} is, uh, they- uhm... so eh... yeah."),
        1 => format!("{name} is just kinda looking around..."),
        2 => format!("{name} is taking a quick powernap."),
        3 => format!("{name} is wondering whether they left the oven on..."),
        4 => format!("{name}'s brain has temporarily evacuated the area."),
        5 => format!("{name} is rebooting..."),
        6 => format!("{name} is struck by a sudden onset of existential dread..."),
        7 => format!(
            "{name} has remembered something embarrassing from {} years ago...",
            rng.roll_below(20)
        ),
        8 => format!("{name} is taking a quick phone call."),
        _ => format!("{name} is just not feeling it right now."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    #[test]
    fn test_idle_line_seven_rolls_years() {
        let mut rng = ScriptedRandom::new().with_ints([7, 12]);
        let line = idle_line("VIN", &mut rng);
        assert_eq!(line, "VIN has remembered something embarrassing from 12 years ago...");
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_idle_line_names_character() {
        let mut rng = ScriptedRandom::new().with_ints([5]);
        assert_eq!(idle_line("ADA", &mut rng), "ADA is rebooting...");
    }
}
