//! Fixed-period cooperative task dispatcher
//!
//! Each task is a plain function from its previous state to its next state. The scheduler is
//! advanced once per base tick, the greatest common divisor of all task periods. A task that
//! comes due runs to completion before the next one is looked at, in registration order.
//!
//! States travel as raw bytes so tasks with different state enums can share one table. A task
//! starts from [`UNINITIALIZED`], and every task decodes bytes it doesn't recognise as its
//! initial state.

/// State handed to a task on its first invocation
pub const UNINITIALIZED: u8 = u8::MAX;

/// A task's step function
pub type TickFn<C> = fn(u8, &mut C) -> u8;

/// State enums that can be carried by the scheduler
pub trait TaskState: Copy + Sized {
	/// Decode a raw state, `None` for [`UNINITIALIZED`] or anything unknown
	fn from_raw(raw: u8) -> Option<Self>;

	fn into_raw(self) -> u8;
}

/// One entry in the scheduler's table
pub struct Task<C> {
	period: u16,
	remaining: u16,
	state: u8,
	tick: TickFn<C>,
}

impl<C> Task<C> {
	/// A task invoked every `period` milliseconds. A zero period is treated as one.
	pub fn new(period: u16, tick: TickFn<C>) -> Self {
		Self {
			period: period.max(1),
			remaining: 0,
			state: UNINITIALIZED,
			tick,
		}
	}

	pub fn period(&self) -> u16 {
		self.period
	}

	/// Raw state returned by the last invocation
	pub fn state(&self) -> u8 {
		self.state
	}
}

/// Runs a fixed set of tasks from a periodic timer
pub struct Scheduler<C, const N: usize> {
	tasks: [Task<C>; N],
	base_period: u16,
}

impl<C, const N: usize> Scheduler<C, N> {
	/// Build the scheduler. Every task runs on the first tick.
	pub fn new(mut tasks: [Task<C>; N]) -> Self {
		let base_period = tasks.iter().fold(0, |acc, task| gcd(acc, task.period)).max(1);
		for task in tasks.iter_mut() {
			task.remaining = base_period;
		}

		Self { tasks, base_period }
	}

	/// Period the timer driving [`Scheduler::tick`] must fire at, in milliseconds
	pub fn base_period(&self) -> u16 {
		self.base_period
	}

	pub fn task(&self, index: usize) -> &Task<C> {
		&self.tasks[index]
	}

	/// Advance every task by one base period and run the ones that came due
	pub fn tick(&mut self, context: &mut C) {
		for task in self.tasks.iter_mut() {
			task.remaining = task.remaining.saturating_sub(self.base_period);
			if task.remaining == 0 {
				task.state = (task.tick)(task.state, context);
				task.remaining = task.period;
			}
		}
	}
}

/// Greatest common divisor, with `gcd(0, n) == n`
pub fn gcd(mut a: u16, mut b: u16) -> u16 {
	while b != 0 {
		let r = a % b;
		a = b;
		b = r;
	}
	a
}
