//! Raw keyboard input
//!
//! The router works on numeric key codes with modifier flags rather than on
//! terminal key types, because the digit bank mapping depends on which of two
//! disjoint code ranges produced a digit: the main row (48..=57) and the
//! numeric pad (96..=105) both map to the logical values 0..=9.

use bitflags::bitflags;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

bitflags! {
    /// Modifier flags attached to a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b01;
        const CONTROL = 0b10;
    }
}

// Key codes the router recognizes.
pub const TAB: u16 = 9;
pub const ESCAPE: u16 = 27;
pub const SPACE: u16 = 32;
pub const LEFT: u16 = 37;
pub const UP: u16 = 38;
pub const RIGHT: u16 = 39;
pub const DOWN: u16 = 40;
pub const ZERO: u16 = 48;
pub const NINE: u16 = 57;
pub const ZERO_NUMPAD: u16 = 96;
pub const NINE_NUMPAD: u16 = 105;
pub const SLASH: u16 = 191;

/// A raw key event: numeric code plus modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub code: u16,
    pub modifiers: Modifiers,
}

impl KeyInput {
    pub fn new(code: u16, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: u16) -> Self {
        Self::new(code, Modifiers::empty())
    }

    pub fn shifted(code: u16) -> Self {
        Self::new(code, Modifiers::SHIFT)
    }

    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CONTROL)
    }
}

/// True for the two disjoint digit ranges: main row and numeric pad.
pub fn is_digit_code(code: u16) -> bool {
    (ZERO..=NINE).contains(&code) || (ZERO_NUMPAD..=NINE_NUMPAD).contains(&code)
}

/// Logical 0-9 value of a digit key code, from either range.
pub fn digit_value(code: u16) -> Option<u8> {
    match code {
        ZERO..=NINE => Some((code - ZERO) as u8),
        ZERO_NUMPAD..=NINE_NUMPAD => Some((code - ZERO_NUMPAD) as u8),
        _ => None,
    }
}

/// Translate a terminal key event into a raw key input.
///
/// Keypad state picks the numeric-pad digit range; BackTab, '?' and the
/// shifted digit punctuation fold their implied Shift into the modifier
/// flags. Keys with no code mapping return `None` and never reach the
/// router.
pub fn from_terminal(event: &KeyEvent) -> Option<KeyInput> {
    let mut modifiers = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        modifiers |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        modifiers |= Modifiers::CONTROL;
    }
    let keypad = event.state.contains(KeyEventState::KEYPAD);

    let code = match event.code {
        KeyCode::Up => UP,
        KeyCode::Down => DOWN,
        KeyCode::Left => LEFT,
        KeyCode::Right => RIGHT,
        KeyCode::Tab => TAB,
        KeyCode::BackTab => {
            modifiers |= Modifiers::SHIFT;
            TAB
        }
        KeyCode::Esc => ESCAPE,
        KeyCode::Char(' ') => SPACE,
        KeyCode::Char('/') => SLASH,
        KeyCode::Char('?') => {
            modifiers |= Modifiers::SHIFT;
            SLASH
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let value = c as u16 - '0' as u16;
            if keypad {
                ZERO_NUMPAD + value
            } else {
                ZERO + value
            }
        }
        // Shift over the main digit row arrives as punctuation; fold the
        // modifier back in so the second score bank is reachable.
        KeyCode::Char(c @ (')' | '!' | '@' | '#' | '$' | '%' | '^' | '&' | '*' | '(')) => {
            modifiers |= Modifiers::SHIFT;
            let value = match c {
                '!' => 1,
                '@' => 2,
                '#' => 3,
                '$' => 4,
                '%' => 5,
                '^' => 6,
                '&' => 7,
                '*' => 8,
                '(' => 9,
                _ => 0,
            };
            ZERO + value
        }
        // Letter keys report their uppercase ASCII code.
        KeyCode::Char(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase() as u16,
        _ => return None,
    };

    Some(KeyInput::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_digit_ranges_map_to_logical_digits() {
        for d in 0..=9u16 {
            assert!(is_digit_code(ZERO + d));
            assert!(is_digit_code(ZERO_NUMPAD + d));
            assert_eq!(digit_value(ZERO + d), Some(d as u8));
            assert_eq!(digit_value(ZERO_NUMPAD + d), Some(d as u8));
        }
    }

    #[test]
    fn codes_outside_both_ranges_are_rejected() {
        for code in [0, TAB, ESCAPE, SPACE, UP, DOWN, 47, 58, 95, 106, SLASH, 255] {
            assert!(!is_digit_code(code), "accepted {code}");
            assert_eq!(digit_value(code), None);
        }
    }

    #[test]
    fn terminal_digits_pick_the_range_by_keypad_state() {
        let main_row = KeyEvent::from(KeyCode::Char('3'));
        assert_eq!(from_terminal(&main_row).unwrap().code, ZERO + 3);

        let mut pad = KeyEvent::from(KeyCode::Char('3'));
        pad.state = KeyEventState::KEYPAD;
        assert_eq!(from_terminal(&pad).unwrap().code, ZERO_NUMPAD + 3);
    }

    #[test]
    fn shifted_digit_punctuation_folds_back_to_digit_codes() {
        for (c, digit) in [(')', 0), ('!', 1), ('@', 2), ('#', 3), ('(', 9)] {
            let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT);
            let input = from_terminal(&event).unwrap();
            assert_eq!(input.code, ZERO + digit);
            assert!(input.shift());
        }
    }

    #[test]
    fn backtab_and_question_mark_fold_shift_in() {
        let backtab = KeyEvent::from(KeyCode::BackTab);
        let input = from_terminal(&backtab).unwrap();
        assert_eq!(input.code, TAB);
        assert!(input.shift());

        let question = KeyEvent::from(KeyCode::Char('?'));
        let input = from_terminal(&question).unwrap();
        assert_eq!(input.code, SLASH);
        assert!(input.shift());
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert!(from_terminal(&KeyEvent::from(KeyCode::F(5))).is_none());
        assert!(from_terminal(&KeyEvent::from(KeyCode::Home)).is_none());
    }
}
