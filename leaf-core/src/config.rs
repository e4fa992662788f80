//! Compile-time tuning for the controller

/// Raw joystick magnitudes at which a direction counts as pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionThresholds {
	/// Horizontal axis reads below this when pushed left
	pub left_below: u16,
	/// Horizontal axis reads above this when pushed right
	pub right_above: u16,
	/// Vertical axis reads below this when pushed up
	pub up_below: u16,
	/// Vertical axis reads above this when pushed down
	pub down_above: u16,
}

/// Periods, delays and thresholds used by the three tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	/// How often the sensor sampler runs, in milliseconds
	pub sampler_period_ms: u16,
	/// How often the irrigation clock runs, in milliseconds
	///
	/// The clock counts ten of its own invocations as one second, so this should stay at 100.
	pub clock_period_ms: u16,
	/// How often the profile menu runs, in milliseconds
	pub ui_period_ms: u16,
	/// Time given to the ADC multiplexer after switching channels
	pub settle_us: u16,
	/// How many times the "Saving" banner is redrawn around a storage write
	pub busy_repeats: u8,
	/// Joystick thresholds
	pub directions: DirectionThresholds,
}

impl Config {
	pub const DEFAULT: Self = Self {
		sampler_period_ms: 100,
		clock_period_ms: 100,
		ui_period_ms: 300,
		settle_us: 10,
		busy_repeats: 50,
		directions: DirectionThresholds {
			left_below: 150,
			right_above: 800,
			up_below: 150,
			down_above: 850,
		},
	};
}

impl Default for Config {
	fn default() -> Self {
		Self::DEFAULT
	}
}
