//! 4x4 keypad on a resistor ladder
//!
//! Every key pulls ADC6 to its own voltage. A key only counts once two consecutive reads decode
//! to it, which filters out the ladder passing through other keys' bands on press and release.

use arduino_hal::{adc::channel::ADC6, clock::MHz16, hal::Adc};
use leaf_core::input::{Key, Letter};

/// Lower bound (inclusive) and upper bound (exclusive) of each key's analog band
const BANDS: [(u16, u16, Key); 16] = [
	(20, 70, Key::Digit(1)),
	(70, 125, Key::Digit(2)),
	(125, 180, Key::Digit(3)),
	(180, 240, Key::Letter(Letter::A)),
	(240, 300, Key::Digit(4)),
	(300, 360, Key::Digit(5)),
	(360, 420, Key::Digit(6)),
	(420, 480, Key::Letter(Letter::B)),
	(480, 545, Key::Digit(7)),
	(545, 610, Key::Digit(8)),
	(610, 675, Key::Digit(9)),
	(675, 740, Key::Letter(Letter::C)),
	(740, 810, Key::Star),
	(810, 880, Key::Digit(0)),
	(880, 950, Key::Pound),
	(950, 1024, Key::Letter(Letter::D)),
];

/// Decode one analog reading
fn decode(value: u16) -> Key {
	BANDS
		.iter()
		.find(|(low, high, _)| value >= *low && value < *high)
		.map_or(Key::Idle, |(_, _, key)| *key)
}

/// Current state of the keypad
pub struct Keypad {
	/// Key decoded by the previous read
	candidate: Key,
	/// Key reported to the menu
	pub held: Key,
}

impl Keypad {
	pub fn new() -> Self {
		Self {
			candidate: Key::Idle,
			held: Key::Idle,
		}
	}

	/// Takes an analog reading and updates the held key
	pub fn update(&mut self, adc: &mut Adc<MHz16>) -> Key {
		let key = decode(adc.read_blocking(&ADC6));
		if key == self.candidate {
			self.held = key;
		}
		self.candidate = key;
		self.held
	}
}
