//! Watering profile shared between the menu and the irrigation clock

use ufmt::derive::uDebug;

use crate::readings::Readings;

/// How often a profile asks for water
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
	/// Water once every `n` days, 1 to 9
	Days(u8),
	/// Demonstration mode: water as soon as the clock reaches its first minute
	DemoFast,
}

impl Frequency {
	/// Byte stored in a slot for [`Frequency::DemoFast`]
	pub const DEMO_FAST_CODE: u8 = 99;
	/// Shortest configurable interval in days
	pub const MIN_DAYS: u8 = 1;
	/// Longest configurable interval in days
	pub const MAX_DAYS: u8 = 9;

	/// Decode a stored frequency byte
	pub fn from_code(code: u8) -> Option<Self> {
		match code {
			Self::DEMO_FAST_CODE => Some(Self::DemoFast),
			_ => Self::from_days(code),
		}
	}

	/// A day count entered on the keypad, `None` outside 1 to 9
	pub fn from_days(days: u8) -> Option<Self> {
		if (Self::MIN_DAYS..=Self::MAX_DAYS).contains(&days) {
			Some(Self::Days(days))
		} else {
			None
		}
	}

	/// Byte written to a slot
	pub fn code(self) -> u8 {
		match self {
			Self::Days(days) => days,
			Self::DemoFast => Self::DEMO_FAST_CODE,
		}
	}

	pub fn is_demo(self) -> bool {
		matches!(self, Self::DemoFast)
	}

	/// Whether the elapsed day count has reached this frequency
	///
	/// Demo mode compares against its stored code, so it is effectively never due by days.
	pub fn is_due(self, days: u8) -> bool {
		days >= self.code()
	}

	/// Digit echoed on the display when the frequency is entered
	pub fn glyph(self) -> u8 {
		match self {
			Self::Days(days) => b'0' + days,
			Self::DemoFast => b'9',
		}
	}
}

/// A watering configuration for one plant
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
	/// Water regardless of the light level
	pub daytime_watering: bool,
	/// Interval between waterings
	pub frequency: Frequency,
	/// Water only while the soil reads below this
	pub moisture_threshold: u16,
	/// Without daytime watering, water only while the light reads below this
	pub light_threshold: u16,
}

impl Profile {
	/// Working profile at power-on. A zero moisture threshold never waters.
	pub const DEFAULT: Self = Self {
		daytime_watering: false,
		frequency: Frequency::Days(1),
		moisture_threshold: 0,
		light_threshold: 0,
	};

	/// Whether the current readings allow watering, ignoring elapsed time
	pub fn allows_watering(&self, readings: &Readings) -> bool {
		let light_ok = self.daytime_watering || readings.light < self.light_threshold;
		light_ok && readings.moisture < self.moisture_threshold
	}
}

impl Default for Profile {
	fn default() -> Self {
		Self::DEFAULT
	}
}
