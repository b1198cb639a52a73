//! Flavor text tables and selectors. Pure: the only effect is consuming RNG.
//!
//! Misa (gentle) asks nicely; Pars (bossy) yells. The caretaker usually
//! answers each cat personally but occasionally grumbles a generic complaint.

use crate::game::actors::{Need, Temperament};
use crate::game::rng::Lcg;

/// Probability that the caretaker answers personally instead of complaining.
const PERSONAL_REACTION_P: f64 = 0.8;

const GENTLE_FOOD: &[&str] = &[
    "Mom, I'm a little hungry \u{1F97A}",
    "Could I have some kibble?",
    "Meow.. my tummy is rumbling...",
    "Dinner, please? If it's no trouble?",
    "A small snack would be lovely...",
];

const GENTLE_WATER: &[&str] = &[
    "Mom, my throat is all dry \u{1F4A7}",
    "Could you bring me some water?",
    "I'm a bit thirsty, mom...",
    "A little water, please?",
    "Some fresh water, maybe?",
];

const BOSSY_FOOD: &[&str] = &[
    "MOM! I'M HUNGRY! WHERE'S THE FOOD? \u{1F624}",
    "I'm starving to death, hurry up!",
    "FOOD! FOOD! FOOD!",
    "That bowl better get over here!",
    "Meooow! (That means I'm HUNGRY!)",
];

const BOSSY_WATER: &[&str] = &[
    "MOM! I'M THIRSTY! \u{1F4A7}",
    "I've turned into a desert, bring water!",
    "WAAATERRR!",
    "I want water NOW! Right now!",
    "Fill that water bowl already!",
];

const CARETAKER_GENTLE: &[&str] = &[
    "Coming right up, sweetheart!",
    "There goes my little princess again.",
    "Of course, dear, one moment.",
    "I'm on it, Misa, don't you worry.",
    "Anything for my good girl.",
];

const CARETAKER_BOSSY: &[&str] = &[
    "Alright, alright, it's coming!",
    "Patience, Pars, patience!",
    "Is my little lion starving again?",
    "Hold your whiskers, it's on the way!",
    "Coming, coming, stop shouting!",
];

const CARETAKER_COMPLAINTS: &[&str] = &[
    "Oh, hungry again already?!",
    "Didn't you two just eat?",
    "Go fetch it yourselves for once!",
    "Mama is getting tired, you know!",
    "I can't keep up with you two!",
    "These cats have bottomless stomachs!",
];

const GENTLE_THANKS: &[&str] = &["Thank you, mom! \u{2764}", "That was lovely!"];
const BOSSY_THANKS: &[&str] = &["FINALLY! Perfect! \u{1F389}", "About time!"];

const GENTLE_WRONG: &[&str] = &[
    "But that's not what I asked for... \u{1F614}",
    "Oops, wrong one, mom...",
];
const BOSSY_WRONG: &[&str] = &[
    "NOT THAT! THE OTHER ONE! \u{1F620}",
    "Mom! Pay attention!",
];

fn pick_line(rng: &mut Lcg, lines: &'static [&'static str]) -> &'static str {
    lines[rng.pick(lines.len())]
}

/// What the cat says when a new need appears over its head.
pub fn need_line(temperament: Temperament, need: Need, rng: &mut Lcg) -> &'static str {
    let lines = match (temperament, need) {
        (Temperament::Gentle, Need::Food) => GENTLE_FOOD,
        (Temperament::Gentle, Need::Water) => GENTLE_WATER,
        (Temperament::Bossy, Need::Food) => BOSSY_FOOD,
        (Temperament::Bossy, Need::Water) => BOSSY_WATER,
    };
    pick_line(rng, lines)
}

/// The caretaker's acknowledgement, usually personal, sometimes a complaint.
pub fn caretaker_line(temperament: Temperament, rng: &mut Lcg) -> &'static str {
    let lines = if rng.chance(PERSONAL_REACTION_P) {
        match temperament {
            Temperament::Gentle => CARETAKER_GENTLE,
            Temperament::Bossy => CARETAKER_BOSSY,
        }
    } else {
        CARETAKER_COMPLAINTS
    };
    pick_line(rng, lines)
}

pub fn thanks_line(temperament: Temperament, rng: &mut Lcg) -> &'static str {
    match temperament {
        Temperament::Gentle => pick_line(rng, GENTLE_THANKS),
        Temperament::Bossy => pick_line(rng, BOSSY_THANKS),
    }
}

pub fn wrong_line(temperament: Temperament, rng: &mut Lcg) -> &'static str {
    match temperament {
        Temperament::Gentle => pick_line(rng, GENTLE_WRONG),
        Temperament::Bossy => pick_line(rng, BOSSY_WRONG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_combination_yields_a_line() {
        let mut rng = Lcg::new(5);
        for t in [Temperament::Gentle, Temperament::Bossy] {
            for n in [Need::Food, Need::Water] {
                assert!(!need_line(t, n, &mut rng).is_empty());
            }
            assert!(!caretaker_line(t, &mut rng).is_empty());
            assert!(!thanks_line(t, &mut rng).is_empty());
            assert!(!wrong_line(t, &mut rng).is_empty());
        }
    }

    #[test]
    fn need_lines_come_from_the_matching_table() {
        let mut rng = Lcg::new(8);
        for _ in 0..50 {
            let line = need_line(Temperament::Gentle, Need::Food, &mut rng);
            assert!(GENTLE_FOOD.contains(&line));
            let line = need_line(Temperament::Bossy, Need::Water, &mut rng);
            assert!(BOSSY_WATER.contains(&line));
        }
    }

    #[test]
    fn caretaker_occasionally_complains() {
        let mut rng = Lcg::new(13);
        let complaints = (0..500)
            .filter(|_| CARETAKER_COMPLAINTS.contains(&caretaker_line(Temperament::Bossy, &mut rng)))
            .count();
        // Expected ~100 of 500; accept a generous band.
        assert!((30..250).contains(&complaints), "complaints: {complaints}");
    }
}
