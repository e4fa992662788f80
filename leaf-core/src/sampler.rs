//! Sensor sampler task
//!
//! Refreshes all four readings on every invocation, in [`Channel::ALL`] order, giving the
//! multiplexer the configured settle time before each conversion.

use ufmt::derive::uDebug;

use crate::{
	board::Board,
	controller::Controller,
	readings::{Channel, Readings},
	scheduler::TaskState,
};

#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SamplerState {
	/// Sample every channel
	Read = 0,
	/// Nothing transitions here. Reserved for telling fresh samples apart from consumed ones
	/// if the readings ever become double-buffered.
	Update = 1,
}

impl TaskState for SamplerState {
	fn from_raw(raw: u8) -> Option<Self> {
		match raw {
			0 => Some(Self::Read),
			1 => Some(Self::Update),
			_ => None,
		}
	}

	fn into_raw(self) -> u8 {
		self as u8
	}
}

impl SamplerState {
	/// The sampler only ever reads
	pub fn next(state: Option<Self>) -> Self {
		match state {
			Some(Self::Read) | Some(Self::Update) | None => Self::Read,
		}
	}
}

/// Convert one channel
pub fn sample<B: Board>(board: &mut B, channel: Channel, settle_us: u16) -> u16 {
	board.select(channel);
	board.settle(settle_us);
	board.convert()
}

/// Convert every channel in acquisition order
pub fn sample_all<B: Board>(board: &mut B, settle_us: u16) -> Readings {
	let mut readings = Readings::default();
	for channel in Channel::ALL.iter() {
		readings.latch(*channel, sample(board, *channel, settle_us));
	}
	readings
}

/// Scheduler entry point
pub fn run<B: Board>(raw: u8, controller: &mut Controller<B>) -> u8 {
	let state = SamplerState::next(SamplerState::from_raw(raw));
	match state {
		SamplerState::Read => {
			controller.readings = sample_all(&mut controller.board, controller.config.settle_us);
		}
		SamplerState::Update => {}
	}

	state.into_raw()
}
