//! Keypad keys as seen by the menu

use ufmt::derive::uDebug;

use crate::storage::Slot;

/// The four lettered keys on the right of the keypad
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
	A,
	B,
	C,
	D,
}

/// Key currently held on the 4x4 keypad
///
/// A held key keeps reporting itself on every poll.
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	/// Nothing pressed
	Idle,
	/// `0` to `9`
	Digit(u8),
	/// `A` to `D`
	Letter(Letter),
	/// `*`, the wildcard key
	Star,
	/// `#`, not used by any screen
	Pound,
}

impl Key {
	/// The slot named by a `1` to `4` key
	pub fn slot(self) -> Option<Slot> {
		match self {
			Self::Digit(digit) => Slot::from_number(digit),
			_ => None,
		}
	}
}
