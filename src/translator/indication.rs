//! Numeric Braille indication
//!
//! [`Indicator`] is a simple state machine to keep track of digit runs during
//! a forward transliteration. As soon as a decimal digit is encountered the
//! state is changed to [`State::Numeric`] and a [`Indication::NumericStart`]
//! is emitted. Any other character changes the state back to
//! [`State::Default`], so the number indicator is emitted exactly once per
//! maximal run of consecutive digits.

/// Possible states for the [`Indicator`] state machine
#[derive(Debug, Clone)]
enum State {
    Default,
    Numeric,
}

#[derive(Debug, PartialEq)]
pub enum Indication {
    /// The start of a run of digit glyphs, to be marked with the number
    /// indicator
    NumericStart,
}

/// A very simple state machine to keep track when a numeric indication is
/// required
#[derive(Debug)]
pub struct Indicator {
    state: State,
}

impl Indicator {
    pub fn new() -> Self {
        Indicator {
            state: State::Default,
        }
    }

    /// The transition method of the numeric indication state machine.
    ///
    /// Returns an [`Indication`] when transitioning from the default into the
    /// numeric state, i.e. for the first digit of a run, or `None` otherwise.
    pub fn next(&mut self, c: char) -> Option<Indication> {
        match (&self.state, c.is_ascii_digit()) {
            (State::Default, true) => {
                self.state = State::Numeric;
                Some(Indication::NumericStart)
            }
            (State::Numeric, false) => {
                self.state = State::Default;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_indication_per_digit_run() {
        let mut indicator = Indicator::new();
        assert_eq!(indicator.next('a'), None);
        assert_eq!(indicator.next('4'), Some(Indication::NumericStart));
        assert_eq!(indicator.next('2'), None);
        assert_eq!(indicator.next(' '), None);
        assert_eq!(indicator.next('7'), Some(Indication::NumericStart));
    }

    #[test]
    fn non_digit_ends_the_run() {
        let mut indicator = Indicator::new();
        assert_eq!(indicator.next('1'), Some(Indication::NumericStart));
        assert_eq!(indicator.next('x'), None);
        assert_eq!(indicator.next('1'), Some(Indication::NumericStart));
    }
}
