//! Six-digit verification code entry.

use thiserror::Error;

pub const OTP_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OtpError {
    #[error("Please enter all 6 digits")]
    Incomplete,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OtpEntry {
    digits: [Option<u8>; OTP_LEN],
}

impl OtpEntry {
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.digits.get(index).copied().flatten()
    }

    /// Set one box from raw input. Empty input clears it; anything longer
    /// than one character or not a digit is ignored. Returns whether the
    /// box changed.
    pub fn set(&mut self, index: usize, value: &str) -> bool {
        let Some(slot) = self.digits.get_mut(index) else {
            return false;
        };
        let mut chars = value.chars();
        let next = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(c), None) => match c.to_digit(10) {
                Some(d) => Some(d as u8),
                None => return false,
            },
            _ => return false,
        };
        let changed = *slot != next;
        *slot = next;
        changed
    }

    /// Keypad entry: fill the first empty box. Returns the index written.
    pub fn push_digit(&mut self, digit: u8) -> Option<usize> {
        if digit > 9 {
            return None;
        }
        let index = self.digits.iter().position(Option::is_none)?;
        self.digits[index] = Some(digit);
        Some(index)
    }

    /// Keypad erase: clear the last filled box. Returns the index cleared.
    pub fn backspace(&mut self) -> Option<usize> {
        let index = self.digits.iter().rposition(Option::is_some)?;
        self.digits[index] = None;
        Some(index)
    }

    /// Box that should take focus after `index` was typed into.
    pub fn focus_after_input(&self, index: usize) -> Option<usize> {
        self.digit(index)?;
        (index + 1 < OTP_LEN).then_some(index + 1)
    }

    /// Box that should take focus when Backspace is pressed in `index`.
    /// Only an already empty box hands focus back.
    pub fn focus_after_backspace(&self, index: usize) -> Option<usize> {
        if index == 0 || index >= OTP_LEN || self.digit(index).is_some() {
            return None;
        }
        Some(index - 1)
    }

    pub fn filled(&self) -> usize {
        self.digits.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.filled() == OTP_LEN
    }

    /// Entered digits in order, skipping empty boxes.
    pub fn code(&self) -> String {
        self.digits
            .iter()
            .flatten()
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    pub fn verify(&self) -> Result<String, OtpError> {
        if self.is_complete() {
            Ok(self.code())
        } else {
            Err(OtpError::Incomplete)
        }
    }
}
