use std::collections::BTreeMap;

use crate::{
    common::amount::is_amount_char,
    domain::roster::{Roster, fold_char},
};

/// Participant name to weight. Weight 0 means not selected.
pub type Weights = BTreeMap<String, u32>;

/// What one typed token says about an entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedToken {
    /// Digits, `.` and `-` from the token in their original order. Not validated.
    pub amount: String,
    /// One weight per roster member.
    pub weights: Weights,
}

/// Splits a shorthand token into its amount text and participant weights.
///
/// Each participant is selected by the first letter of their name (any case).
/// A letter followed by a digit takes that digit as its weight, otherwise the
/// weight is 1. Participants that are not mentioned get weight 0. The amount is
/// collected independently from the same text, so a weight digit also ends up
/// in the amount.
///
/// # Examples
/// ```
/// use expense_splitter::domain::{roster::Roster, token::parse};
///
/// let roster = Roster::with_fixed(["Mustafa", "Adhi", "Karan"]).unwrap();
/// let parsed = parse("50mk", &roster);
///
/// assert_eq!(parsed.amount, "50");
/// assert_eq!(parsed.weights["Mustafa"], 1);
/// assert_eq!(parsed.weights["Adhi"], 0);
/// assert_eq!(parsed.weights["Karan"], 1);
/// ```
pub fn parse(token: &str, roster: &Roster) -> ParsedToken {
    let initials = roster.initials();
    let mut weights: Weights = roster.names().map(|name| (name.to_string(), 0)).collect();

    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        let Some(name) = initials.get(&fold_char(c)) else {
            continue;
        };
        let digit = chars.peek().and_then(|next| next.to_digit(10));
        if digit.is_some() {
            chars.next();
        }
        if let Some(weight) = weights.get_mut(*name) {
            *weight = digit.unwrap_or(1);
        }
    }

    let amount = token.chars().filter(|c| is_amount_char(*c)).collect();

    ParsedToken { amount, weights }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::with_fixed(["Mustafa", "Adhi", "Karan"]).unwrap()
    }

    fn weights(m: u32, a: u32, k: u32) -> Weights {
        [("Mustafa", m), ("Adhi", a), ("Karan", k)]
            .into_iter()
            .map(|(n, w)| (n.to_string(), w))
            .collect()
    }

    #[test]
    fn amount_then_single_initial() {
        let parsed = parse("100m", &roster());
        assert_eq!(parsed.amount, "100");
        assert_eq!(parsed.weights, weights(1, 0, 0));
    }

    #[test]
    fn amount_then_two_initials() {
        let parsed = parse("50mk", &roster());
        assert_eq!(parsed.amount, "50");
        assert_eq!(parsed.weights, weights(1, 0, 1));
    }

    #[test]
    fn everyone_selected() {
        let parsed = parse("75mak", &roster());
        assert_eq!(parsed.amount, "75");
        assert_eq!(parsed.weights, weights(1, 1, 1));
    }

    #[test]
    fn matching_ignores_case() {
        let parsed = parse("20MaK", &roster());
        assert_eq!(parsed.weights, weights(1, 1, 1));
    }

    #[test]
    fn digit_after_initial_is_a_weight_and_part_of_the_amount() {
        let parsed = parse("100m2k", &roster());
        assert_eq!(parsed.weights, weights(2, 0, 1));
        assert_eq!(parsed.amount, "1002");
    }

    #[test]
    fn weight_digit_is_consumed_once() {
        // The '3' belongs to 'a'; the following 'k' is still an initial.
        let parsed = parse("a3k", &roster());
        assert_eq!(parsed.weights, weights(0, 3, 1));
        assert_eq!(parsed.amount, "3");
    }

    #[test]
    fn later_mention_overrides_earlier() {
        assert_eq!(parse("m2m", &roster()).weights, weights(1, 0, 0));
        assert_eq!(parse("mm4", &roster()).weights, weights(4, 0, 0));
        assert_eq!(parse("m2m0", &roster()).weights, weights(0, 0, 0));
    }

    #[test]
    fn empty_token() {
        let parsed = parse("", &roster());
        assert_eq!(parsed.amount, "");
        assert_eq!(parsed.weights, weights(0, 0, 0));
    }

    #[test]
    fn letters_only() {
        let parsed = parse("ka", &roster());
        assert_eq!(parsed.amount, "");
        assert_eq!(parsed.weights, weights(0, 1, 1));
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let parsed = parse("$12.50 for x, z & k!", &roster());
        assert_eq!(parsed.amount, "12.50");
        assert_eq!(parsed.weights, weights(0, 0, 1));
    }

    #[test]
    fn malformed_amount_text_is_passed_through() {
        let parsed = parse("1.2.3--m", &roster());
        assert_eq!(parsed.amount, "1.2.3--");
        assert_eq!(parsed.weights, weights(1, 0, 0));
    }

    #[test]
    fn key_set_always_matches_roster() {
        let mut roster = roster();
        roster
            .add("Priya", crate::domain::roster::ParticipantKind::Temporary)
            .unwrap();
        for token in ["", "zzz", "10p", "p m a k", "🙂 42"] {
            let parsed = parse(token, &roster);
            let keys: Vec<&str> = parsed.weights.keys().map(String::as_str).collect();
            let mut expected: Vec<&str> = roster.names().collect();
            expected.sort_unstable();
            assert_eq!(keys, expected, "token {token:?}");
        }
        assert_eq!(parse("10p", &roster).weights["Priya"], 1);
    }
}
