//! Shared state of the three tasks and the scheduler that runs them

use crate::{
	board::Board,
	clock::{self, WateringClock},
	config::Config,
	profile::Profile,
	readings::Readings,
	sampler,
	scheduler::{Scheduler, Task},
	ui::{self, Navigation},
};

/// Number of tasks registered by [`scheduler`]
pub const TASK_COUNT: usize = 3;
/// Table index of the sensor sampler
pub const SAMPLER_TASK: usize = 0;
/// Table index of the irrigation clock
pub const CLOCK_TASK: usize = 1;
/// Table index of the profile menu
pub const UI_TASK: usize = 2;

/// Everything the tasks share, passed by reference into each invocation
///
/// Only one task runs at a time, and each field has a single writer per tick: the sampler
/// writes `readings`, the clock writes `clock`, the menu writes `profile` and `nav`.
pub struct Controller<B> {
	pub board: B,
	pub config: Config,
	/// The working profile
	pub profile: Profile,
	pub readings: Readings,
	pub clock: WateringClock,
	pub nav: Navigation,
}

impl<B: Board> Controller<B> {
	pub fn new(board: B, config: Config) -> Self {
		Self {
			board,
			config,
			profile: Profile::DEFAULT,
			readings: Readings::default(),
			clock: WateringClock::seeded(&Profile::DEFAULT),
			nav: Navigation::default(),
		}
	}
}

/// The three tasks in dispatch order
///
/// The sampler is registered first so the clock and the menu see readings from the same tick.
pub fn scheduler<B: Board>(config: &Config) -> Scheduler<Controller<B>, TASK_COUNT> {
	Scheduler::new([
		Task::new(config.sampler_period_ms, sampler::run::<B>),
		Task::new(config.clock_period_ms, clock::run::<B>),
		Task::new(config.ui_period_ms, ui::run::<B>),
	])
}
