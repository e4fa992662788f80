//! Latched analog readings and the joystick directions derived from them

use ufmt::derive::uDebug;

use crate::config::DirectionThresholds;

/// Analog inputs, in the order the sampler acquires them
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
	/// Joystick up/down axis
	Vertical,
	/// Joystick left/right axis
	Horizontal,
	/// Soil moisture probe
	Moisture,
	/// Photo sensor
	Light,
}

impl Channel {
	pub const ALL: [Channel; 4] = [
		Channel::Vertical,
		Channel::Horizontal,
		Channel::Moisture,
		Channel::Light,
	];
}

/// The four 10-bit magnitudes refreshed by every sampler run
#[derive(uDebug, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Readings {
	pub vertical: u16,
	pub horizontal: u16,
	pub moisture: u16,
	pub light: u16,
}

impl Readings {
	/// Store a conversion for `channel`
	pub fn latch(&mut self, channel: Channel, value: u16) {
		match channel {
			Channel::Vertical => self.vertical = value,
			Channel::Horizontal => self.horizontal = value,
			Channel::Moisture => self.moisture = value,
			Channel::Light => self.light = value,
		}
	}
}

/// Joystick directions currently pushed
///
/// The two axes are independent, so a diagonal push sets two flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Directions {
	pub up: bool,
	pub down: bool,
	pub left: bool,
	pub right: bool,
}

impl Directions {
	pub fn from_readings(readings: &Readings, thresholds: &DirectionThresholds) -> Self {
		Self {
			up: readings.vertical < thresholds.up_below,
			down: readings.vertical > thresholds.down_above,
			left: readings.horizontal < thresholds.left_below,
			right: readings.horizontal > thresholds.right_above,
		}
	}

	pub const UP: Self = Self { up: true, down: false, left: false, right: false };
	pub const DOWN: Self = Self { up: false, down: true, left: false, right: false };
	pub const LEFT: Self = Self { up: false, down: false, left: true, right: false };
	pub const RIGHT: Self = Self { up: false, down: false, left: false, right: true };
	pub const NONE: Self = Self { up: false, down: false, left: false, right: false };
}
