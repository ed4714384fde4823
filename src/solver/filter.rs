//! Constraint filter
//!
//! Narrows a dictionary to the words consistent with every guess's feedback.

use crate::core::{Guess, LetterState, Word};

/// Check a single word against a single guess
///
/// Runs the correct, present and absent checks in that order and stops at the
/// first failure. `Unknown` letters impose nothing.
#[must_use]
pub fn matches_guess(word: &Word, guess: &Guess) -> bool {
    let letters = guess.letters();

    // Correct: the word must have this letter at this exact position
    let correct_ok = letters
        .iter()
        .enumerate()
        .filter(|(_, l)| l.state == LetterState::Correct)
        .all(|(i, l)| word.char_at(i) == l.letter());
    if !correct_ok {
        return false;
    }

    // Present: somewhere in the word, but not here
    let present_ok = letters
        .iter()
        .enumerate()
        .filter(|(_, l)| l.state == LetterState::Present)
        .all(|(i, l)| word.char_at(i) != l.letter() && word.has_letter(l.letter()));
    if !present_ok {
        return false;
    }

    // Absent: nowhere in the word, unless the same guess confirms the letter
    // elsewhere, in which case only this position is ruled out
    letters
        .iter()
        .enumerate()
        .filter(|(_, l)| l.state == LetterState::Absent)
        .all(|(i, l)| {
            if guess.confirmed_elsewhere(l.letter(), i) {
                word.char_at(i) != l.letter()
            } else {
                !word.has_letter(l.letter())
            }
        })
}

/// Check a word against every guess in the history
#[must_use]
pub fn is_consistent(word: &Word, history: &[Guess]) -> bool {
    history.iter().all(|guess| matches_guess(word, guess))
}

/// Filter the dictionary to words consistent with all guesses
///
/// Order of the dictionary is preserved. With an empty history every word
/// passes.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Guess, GuessId, Word, parse_feedback};
/// use wordle_helper::solver::filter_candidates;
///
/// let dictionary: Vec<Word> = ["shale", "lathe", "plate", "paste"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let crane = Guess::with_feedback(
///     GuessId(1),
///     &Word::new("crane").unwrap(),
///     parse_feedback("--Y-G").unwrap(),
/// );
///
/// let candidates = filter_candidates(&dictionary, &[crane]);
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["LATHE", "PASTE"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(dictionary: &'a [Word], history: &[Guess]) -> Vec<&'a Word> {
    dictionary
        .iter()
        .filter(|word| is_consistent(word, history))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessId, parse_feedback};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn guess(text: &str, feedback: &str) -> Guess {
        Guess::with_feedback(
            GuessId(0),
            &Word::new(text).unwrap(),
            parse_feedback(feedback).unwrap(),
        )
    }

    fn texts<'a>(candidates: &[&'a Word]) -> Vec<&'a str> {
        candidates.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_history_returns_everything() {
        let dictionary = words(&["crane", "slate", "whale", "speed"]);
        let candidates = filter_candidates(&dictionary, &[]);
        assert_eq!(candidates.len(), dictionary.len());
        assert!(candidates.iter().zip(&dictionary).all(|(a, b)| *a == b));
    }

    #[test]
    fn unknown_letters_impose_nothing() {
        let dictionary = words(&["crane", "slate", "whale"]);
        let candidates = filter_candidates(&dictionary, &[guess("zzzzz", "?????")]);
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn all_correct_keeps_only_that_word() {
        let dictionary = words(&["crane"]);
        let candidates = filter_candidates(&dictionary, &[guess("crane", "GGGGG")]);
        assert_eq!(texts(&candidates), ["CRANE"]);

        let dictionary = words(&["crane", "crate", "slate"]);
        let candidates = filter_candidates(&dictionary, &[guess("crane", "GGGGG")]);
        assert_eq!(texts(&candidates), ["CRANE"]);
    }

    #[test]
    fn crane_scenario() {
        let dictionary = words(&[
            "shale", "whale", "plate", "lathe", "paste", "chase", "snake", "aisle",
        ]);
        let history = [guess("crane", "--Y-G")];
        let candidates = filter_candidates(&dictionary, &history);

        // SHALE, WHALE and PLATE keep A at index 2, CHASE has C, SNAKE has N
        assert_eq!(texts(&candidates), ["LATHE", "PASTE", "AISLE"]);
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let dictionary = words(&["alert", "toner", "eager"]);
        // E present at position 0: must contain E but not start with it
        let candidates = filter_candidates(&dictionary, &[guess("ebony", "Y????")]);
        assert_eq!(texts(&candidates), ["ALERT", "TONER"]);
    }

    #[test]
    fn absent_without_override_forbids_letter_everywhere() {
        let dictionary = words(&["stomp", "pluck", "plumb"]);
        let candidates = filter_candidates(&dictionary, &[guess("ghost", "??-??")]);
        assert_eq!(texts(&candidates), ["PLUCK", "PLUMB"]);
    }

    #[test]
    fn duplicate_letter_override() {
        // S correct at 0, the other two S's absent: exactly one S, at the front
        let history = [guess("sassy", "G----")];
        let dictionary = words(&["stomp", "slosh", "shush", "spoil", "sissy"]);
        let candidates = filter_candidates(&dictionary, &history);

        // SLOSH and SHUSH have an S at 3, SISSY at 2 and 3
        assert_eq!(texts(&candidates), ["STOMP", "SPOIL"]);
    }

    #[test]
    fn override_is_per_position() {
        // E present at 1, absent at 4: E required, but not at 1 or 4
        let history = [guess("geese", "?Y??-")];
        let dictionary = words(&["elder", "reset", "three", "older"]);
        let candidates = filter_candidates(&dictionary, &history);
        // RESET has E at 1, THREE has E at 4
        assert_eq!(texts(&candidates), ["ELDER", "OLDER"]);
    }

    #[test]
    fn triple_letter_mixed_states_resolve_per_position() {
        // E correct at 1, present at 2, absent at 4
        let history = [guess("eeeee", "?GY?-")];
        let dictionary = words(&["reeds", "beget", "elect", "geese"]);
        let candidates = filter_candidates(&dictionary, &history);
        // REEDS has E at 2, GEESE has E at 2 and 4, ELECT lacks E at 1
        assert_eq!(texts(&candidates), ["BEGET"]);
    }

    #[test]
    fn every_guess_must_hold() {
        let dictionary = words(&["lathe", "paste", "saute"]);
        let history = [guess("crane", "--Y-G"), guess("bathe", "-GGGG")];
        let candidates = filter_candidates(&dictionary, &history);
        assert_eq!(texts(&candidates), ["LATHE"]);
    }

    #[test]
    fn filtering_is_idempotent_and_order_independent() {
        let dictionary = words(&[
            "shale", "lathe", "plate", "chase", "paste", "saute", "aisle", "ghost",
        ]);
        let history = vec![guess("crane", "--Y-G"), guess("ghost", "-????")];

        let once: Vec<Word> = filter_candidates(&dictionary, &history)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_candidates(&once, &history);
        assert_eq!(texts(&twice), once.iter().map(Word::text).collect::<Vec<_>>());

        let reversed: Vec<Guess> = history.iter().rev().cloned().collect();
        assert_eq!(
            texts(&filter_candidates(&dictionary, &reversed)),
            texts(&filter_candidates(&dictionary, &history))
        );
    }
}
