//! Irrigation clock task
//!
//! Counts invocations into seconds, minutes and days and decides when to water. At most one
//! carry happens per invocation: when the tick counter rolls into a second, a pending minute
//! or day rollover waits for a later invocation, which stretches the effective minute and day
//! slightly.

use ufmt::derive::uDebug;

use crate::{
	board::Board,
	controller::Controller,
	events::Event,
	profile::{Frequency, Profile},
	readings::Readings,
	scheduler::TaskState,
};

/// The tick counter rolls into a second once it exceeds this
pub const SECOND_ROLLOVER: u8 = 9;
/// The second counter rolls into a minute once it exceeds this
pub const MINUTE_ROLLOVER: u8 = 50;
/// The minute counter rolls into a day once it exceeds this
pub const DAY_ROLLOVER: u16 = 1439;
/// Minute at which a demo profile waters
pub const DEMO_MINUTE: u16 = 1;

#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClockState {
	/// Count time
	Tick = 0,
	/// Pulse the pump for one invocation
	WaterPlant = 1,
	/// Pulse profile-changed and restart counting
	Reset = 2,
}

impl TaskState for ClockState {
	fn from_raw(raw: u8) -> Option<Self> {
		match raw {
			0 => Some(Self::Tick),
			1 => Some(Self::WaterPlant),
			2 => Some(Self::Reset),
			_ => None,
		}
	}

	fn into_raw(self) -> u8 {
		self as u8
	}
}

/// Cascading time counters
#[derive(uDebug, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
	pub ticks: u8,
	pub seconds: u8,
	pub minutes: u16,
	pub days: u8,
}

impl Elapsed {
	/// Count one invocation, carrying into at most one larger unit
	pub fn advance(&mut self) {
		if self.ticks > SECOND_ROLLOVER {
			self.ticks = 0;
			self.seconds += 1;
		} else if self.seconds > MINUTE_ROLLOVER {
			self.seconds = 0;
			self.minutes += 1;
		} else if self.minutes > DAY_ROLLOVER {
			self.minutes = 0;
			self.days = self.days.saturating_add(1);
		}
		self.ticks += 1;
	}
}

/// Outputs to drive for one invocation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pulses {
	pub pump: bool,
	pub profile_changed: bool,
}

/// Time counters plus the frequency they were started against
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WateringClock {
	pub elapsed: Elapsed,
	/// Frequency of the working profile when counting last restarted
	pub frequency: Frequency,
}

impl WateringClock {
	/// Zeroed counters for `profile`
	pub fn seeded(profile: &Profile) -> Self {
		Self {
			elapsed: Elapsed::default(),
			frequency: profile.frequency,
		}
	}

	/// Whether the profile in use differs from the one counting started with
	pub fn profile_changed(&self, profile: &Profile) -> bool {
		self.frequency != profile.frequency
	}

	/// Demo profiles water at their first minute, regardless of the day count
	fn demo_due(&self, profile: &Profile, readings: &Readings) -> bool {
		self.frequency.is_demo()
			&& self.elapsed.minutes == DEMO_MINUTE
			&& profile.allows_watering(readings)
	}

	fn days_due(&self, profile: &Profile, readings: &Readings) -> bool {
		self.frequency.is_due(self.elapsed.days) && profile.allows_watering(readings)
	}

	/// Pick the state for this invocation
	///
	/// `None` is the uninitialised state and always starts counting.
	pub fn next(&self, state: Option<ClockState>, profile: &Profile, readings: &Readings) -> ClockState {
		match state {
			None => ClockState::Tick,
			Some(ClockState::Tick) => {
				if self.profile_changed(profile) {
					ClockState::Reset
				} else if self.demo_due(profile, readings) || self.days_due(profile, readings) {
					ClockState::WaterPlant
				} else {
					ClockState::Tick
				}
			}
			Some(ClockState::WaterPlant) => ClockState::Reset,
			Some(ClockState::Reset) => ClockState::Tick,
		}
	}

	/// Perform the action of `state`
	pub fn act(&mut self, state: ClockState, profile: &Profile) -> Pulses {
		match state {
			ClockState::Tick => {
				self.elapsed.advance();
				Pulses::default()
			}
			ClockState::WaterPlant => Pulses {
				pump: true,
				profile_changed: false,
			},
			ClockState::Reset => {
				*self = Self::seeded(profile);
				Pulses {
					pump: false,
					profile_changed: true,
				}
			}
		}
	}
}

/// Scheduler entry point
pub fn run<B: Board>(raw: u8, controller: &mut Controller<B>) -> u8 {
	let previous = ClockState::from_raw(raw);
	if previous.is_none() {
		controller.clock = WateringClock::seeded(&controller.profile);
	}

	let state = controller
		.clock
		.next(previous, &controller.profile, &controller.readings);
	let pulses = controller.clock.act(state, &controller.profile);

	controller.board.set_pump(pulses.pump);
	controller.board.set_profile_changed(pulses.profile_changed);
	if pulses.pump {
		controller.board.report(Event::Watered);
	}
	if pulses.profile_changed {
		controller.board.report(Event::ClockReset {
			frequency: controller.clock.frequency.code(),
		});
	}

	state.into_raw()
}
