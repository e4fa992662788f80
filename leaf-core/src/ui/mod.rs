//! Profile menu task
//!
//! Every invocation goes through the same four steps:
//!
//! 1. [`transition`] picks the screen from the joystick and clears the display when anything
//!    visible changes.
//! 2. [`capture`] applies the held key and the live readings to the working profile and decides
//!    whether storage has to be touched.
//! 3. A resulting [`Command`] is executed against the board: EEPROM, link and busy banner.
//! 4. [`render`] draws the screen.

mod capture;
mod render;
mod transition;

pub use capture::{capture, Command};
pub use render::{busy, render};
pub use transition::{transition, Transition};

use ufmt::derive::uDebug;

use crate::{
	board::Board,
	controller::Controller,
	display::CharDisplay,
	events::Event,
	link::Link,
	readings::Directions,
	scheduler::TaskState,
	storage::{ProfileStore, Slot},
};

/// Cursor value of "Create Profile" on the first main page
pub const CREATE_PROFILE: u8 = 0;
/// Cursor value of "Load Profile" on the first main page
pub const LOAD_PROFILE: u8 = 1;
/// Cursor value of "Live Readings" on the second main page
pub const LIVE_READINGS: u8 = 2;
/// Cursor value of "At A Glance" on the second main page
pub const AT_A_GLANCE: u8 = 3;
/// Cursor value of "Calibrate Soil" on the third main page
pub const CALIBRATE_MOISTURE: u8 = 4;
/// Cursor value of "Calibrate Sun" on the third main page
pub const CALIBRATE_LIGHT: u8 = 5;

/// Every screen of the menu
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Screen {
	Welcome = 0,
	/// Display scaler toggle
	Settings,
	/// Create or load a profile
	MainProfiles,
	/// Live readings or the profile at a glance
	MainReadings,
	/// Sensor calibration
	MainCalibrate,
	/// Daytime watering and frequency of the working profile
	GlanceSchedule,
	/// Thresholds of the working profile
	GlanceThresholds,
	LiveReadings,
	CalibrateLight,
	/// Snapshots the light reading as the threshold
	CalibrateLightReading,
	CalibrateMoisture,
	/// Snapshots the moisture reading as the threshold
	CalibrateMoistureReading,
	/// Wizard step 1: daytime watering yes/no
	AskDaytime,
	/// Wizard step 2: watering frequency
	AskFrequency,
	WizardMoisture,
	WizardMoistureReading,
	WizardLight,
	WizardLightReading,
	/// Wizard destination slot
	ConfirmSlot,
	WriteProfile,
	WriteMoisture,
	WriteLight,
	/// Slot to load from
	SelectSource,
	Retrieve,
	ShowDaytime,
	ShowFrequency,
	ShowMoisture,
	ShowLight,
}

impl Screen {
	/// In discriminant order
	pub const ALL: [Screen; 28] = [
		Screen::Welcome,
		Screen::Settings,
		Screen::MainProfiles,
		Screen::MainReadings,
		Screen::MainCalibrate,
		Screen::GlanceSchedule,
		Screen::GlanceThresholds,
		Screen::LiveReadings,
		Screen::CalibrateLight,
		Screen::CalibrateLightReading,
		Screen::CalibrateMoisture,
		Screen::CalibrateMoistureReading,
		Screen::AskDaytime,
		Screen::AskFrequency,
		Screen::WizardMoisture,
		Screen::WizardMoistureReading,
		Screen::WizardLight,
		Screen::WizardLightReading,
		Screen::ConfirmSlot,
		Screen::WriteProfile,
		Screen::WriteMoisture,
		Screen::WriteLight,
		Screen::SelectSource,
		Screen::Retrieve,
		Screen::ShowDaytime,
		Screen::ShowFrequency,
		Screen::ShowMoisture,
		Screen::ShowLight,
	];

	/// Screens that write to storage when entered
	pub fn is_write(self) -> bool {
		matches!(self, Self::WriteProfile | Self::WriteMoisture | Self::WriteLight)
	}
}

impl TaskState for Screen {
	fn from_raw(raw: u8) -> Option<Self> {
		Self::ALL.get(raw as usize).copied()
	}

	fn into_raw(self) -> u8 {
		self as u8
	}
}

/// Pending answer to the daytime watering question
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
	Blank,
	Yes,
	No,
}

impl Answer {
	/// Padded to the same width so a changed answer overwrites the previous one
	pub fn label(self) -> &'static str {
		match self {
			Self::Blank => "   ",
			Self::Yes => "Yes",
			Self::No => "No ",
		}
	}
}

/// Menu state that outlives a single screen
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
	/// Highlighted item across the three main pages, see [`CREATE_PROFILE`] and friends
	pub cursor: u8,
	/// Slot chosen last, for saving or loading
	pub slot: Option<Slot>,
	/// A key press on the current screen has been taken; cleared by the transition that uses it
	pub accepted: bool,
	pub answer: Answer,
	/// Show sensor values as percentages
	pub scaled: bool,
}

impl Navigation {
	/// Forget per-screen progress, keeping the chosen slot and the scaler setting
	pub fn restart(&mut self) {
		self.cursor = CREATE_PROFILE;
		self.accepted = false;
		self.answer = Answer::Blank;
	}
}

impl Default for Navigation {
	fn default() -> Self {
		Self {
			cursor: CREATE_PROFILE,
			slot: None,
			accepted: false,
			answer: Answer::Blank,
			scaled: false,
		}
	}
}

/// Scheduler entry point
pub fn run<B: Board>(raw: u8, controller: &mut Controller<B>) -> u8 {
	let directions = Directions::from_readings(&controller.readings, &controller.config.directions);
	let key = controller.board.key();

	let step = transition(Screen::from_raw(raw), directions, &mut controller.nav);
	if step.clear {
		controller.board.display().clear();
	}

	let command = capture(
		step.screen,
		key,
		&mut controller.nav,
		&mut controller.profile,
		&controller.readings,
	);
	if let Some(command) = command {
		execute(controller, command);
	}

	render(
		controller.board.display(),
		step.screen,
		&controller.nav,
		&controller.profile,
		&controller.readings,
	);

	step.screen.into_raw()
}

/// Perform the storage and link side of a screen
fn execute<B: Board>(controller: &mut Controller<B>, command: Command) {
	let repeats = controller.config.busy_repeats;
	match command {
		Command::LoadProfile(slot) => {
			let loaded = ProfileStore::new(controller.board.eeprom()).load(slot);
			match loaded {
				Ok(profile) => {
					controller.profile = profile;
					controller.board.report(Event::ProfileLoaded { slot });
					announce(&mut controller.board, slot);
				}
				Err(error) => controller.board.report(Event::StorageFailed { slot, error }),
			}
		}
		Command::SaveProfile(slot) => {
			busy(controller.board.display(), repeats);
			let saved = ProfileStore::new(controller.board.eeprom()).save(slot, &controller.profile);
			match saved {
				Ok(()) => {
					controller.board.report(Event::ProfileSaved { slot });
					announce(&mut controller.board, slot);
				}
				Err(error) => controller.board.report(Event::StorageFailed { slot, error }),
			}
			controller.board.display().clear();
		}
		Command::SaveMoisture(slot) => {
			busy(controller.board.display(), repeats);
			let threshold = controller.profile.moisture_threshold;
			let event = match ProfileStore::new(controller.board.eeprom()).save_moisture(slot, threshold) {
				Ok(()) => Event::MoistureSaved { slot },
				Err(error) => Event::StorageFailed { slot, error },
			};
			controller.board.report(event);
			controller.board.display().clear();
		}
		Command::SaveLight(slot) => {
			busy(controller.board.display(), repeats);
			let threshold = controller.profile.light_threshold;
			let event = match ProfileStore::new(controller.board.eeprom()).save_light(slot, threshold) {
				Ok(()) => Event::LightSaved { slot },
				Err(error) => Event::StorageFailed { slot, error },
			};
			controller.board.report(event);
			controller.board.display().clear();
		}
		Command::SkipWrite => controller.board.report(Event::WriteSkipped),
	}
}

/// Tell the companion board which slot is now in use
fn announce<B: Board>(board: &mut B, slot: Slot) {
	if board.link().transmit(slot.link_code()).is_err() {
		board.report(Event::LinkFailed { slot });
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		config::Config,
		input::Key,
		profile::{Frequency, Profile},
		readings::Channel,
		scheduler::UNINITIALIZED,
		storage::{StorageError, LIGHT_OFFSET, MOISTURE_OFFSET},
		testing::{DisplayOp, MockBoard},
	};
	use proptest::prelude::*;

	fn controller() -> Controller<MockBoard> {
		Controller::new(MockBoard::default(), Config::DEFAULT)
	}

	/// One menu invocation with the given stick position and key
	fn press(controller: &mut Controller<MockBoard>, screen: Screen, directions: Directions, key: Key) -> Screen {
		controller.board.hold(directions);
		controller.board.key = key;
		controller.readings = crate::sampler::sample_all(&mut controller.board, 0);
		Screen::from_raw(run(screen.into_raw(), controller)).unwrap()
	}

	#[test]
	fn test_screen_raw_round_trip() {
		for (index, screen) in Screen::ALL.iter().enumerate() {
			assert_eq!(screen.into_raw() as usize, index);
			assert_eq!(Screen::from_raw(index as u8), Some(*screen));
		}
		assert_eq!(Screen::from_raw(Screen::ALL.len() as u8), None);
		assert_eq!(Screen::from_raw(UNINITIALIZED), None);
	}

	#[test]
	fn test_starts_at_welcome() {
		let mut controller = controller();
		let raw = run(UNINITIALIZED, &mut controller);
		assert_eq!(Screen::from_raw(raw), Some(Screen::Welcome));
		assert_eq!(controller.board.display.ops.first(), Some(&DisplayOp::Clear));
		assert_eq!(controller.board.display.row(1), "<Leaf of Faith> ");
	}

	#[test]
	fn test_demo_key_advances_once() {
		let mut controller = controller();

		let screen = press(&mut controller, Screen::AskFrequency, Directions::NONE, Key::Star);
		assert_eq!(screen, Screen::AskFrequency);
		assert_eq!(controller.profile.frequency, Frequency::DemoFast);
		assert!(controller.nav.accepted);
		assert_eq!(controller.board.display.cell(31), b'9');

		let screen = press(&mut controller, screen, Directions::RIGHT, Key::Star);
		assert_eq!(screen, Screen::WizardMoisture);
		assert!(!controller.nav.accepted);

		// The key is still held but the next step doesn't take keys.
		let screen = press(&mut controller, screen, Directions::NONE, Key::Star);
		assert_eq!(screen, Screen::WizardMoisture);
		assert!(!controller.nav.accepted);
	}

	#[test]
	fn test_save_to_slot_two() {
		let mut controller = controller();
		controller.profile = Profile {
			daytime_watering: true,
			frequency: Frequency::Days(4),
			moisture_threshold: 333,
			light_threshold: 444,
		};

		let screen = press(&mut controller, Screen::ConfirmSlot, Directions::NONE, Key::Digit(2));
		assert_eq!(screen, Screen::ConfirmSlot);
		assert_eq!(controller.board.display.cell(26), b'2');

		let screen = press(&mut controller, screen, Directions::RIGHT, Key::Idle);
		assert_eq!(screen, Screen::WriteProfile);
		assert_eq!(controller.board.link.sent, vec![0xB3]);
		assert_eq!(controller.board.events, vec![Event::ProfileSaved { slot: Slot::Two }]);

		let mut written = controller.board.eeprom.writes.clone();
		written.sort_unstable();
		written.dedup();
		assert_eq!(written, vec![7, 8, 9, 10, 11, 12]);
		assert_eq!(controller.board.eeprom.bytes[7], 1);
		assert_eq!(controller.board.eeprom.bytes[8], 4);

		// Right is still held: back to the top menu, no second save.
		let screen = press(&mut controller, screen, Directions::RIGHT, Key::Idle);
		assert_eq!(screen, Screen::MainProfiles);
		assert_eq!(controller.nav.cursor, CREATE_PROFILE);
		assert_eq!(controller.board.link.sent, vec![0xB3]);
	}

	#[test]
	fn test_busy_banner_is_bounded() {
		let mut controller = controller();
		controller.nav.slot = Some(Slot::One);
		controller.nav.accepted = true;
		let before = controller.board.display.ops.len();

		press(&mut controller, Screen::ConfirmSlot, Directions::RIGHT, Key::Idle);

		let ops = &controller.board.display.ops[before..];
		let banners = ops
			.windows(2)
			.filter(|pair| pair[0] == DisplayOp::Cursor(0) && pair[1] == DisplayOp::Char(b'S'))
			.count();
		assert_eq!(banners, Config::DEFAULT.busy_repeats as usize);
		assert_eq!(ops.last(), Some(&DisplayOp::Clear));
	}

	#[test]
	fn test_confirm_without_slot_is_blocked() {
		let mut controller = controller();
		let mut screen = Screen::ConfirmSlot;
		for key in [Key::Idle, Key::Digit(0), Key::Digit(5), Key::Star, Key::Pound] {
			screen = press(&mut controller, screen, Directions::RIGHT, key);
			assert_eq!(screen, Screen::ConfirmSlot);
		}
		assert!(controller.board.eeprom.writes.is_empty());
		assert!(controller.board.link.sent.is_empty());
	}

	#[test]
	fn test_calibration_writes_single_values() {
		let mut controller = controller();
		controller.nav.slot = Some(Slot::Four);
		controller.board.set_analog(Channel::Moisture, 280);
		controller.board.set_analog(Channel::Light, 610);

		let screen = press(&mut controller, Screen::CalibrateMoistureReading, Directions::NONE, Key::Idle);
		assert_eq!(controller.profile.moisture_threshold, 280);
		press(&mut controller, screen, Directions::RIGHT, Key::Idle);

		let base = Slot::Four.base_address();
		let mut written = controller.board.eeprom.writes.clone();
		written.dedup();
		assert_eq!(written, vec![base + MOISTURE_OFFSET, base + MOISTURE_OFFSET + 1]);

		controller.board.eeprom.writes.clear();
		let screen = press(&mut controller, Screen::CalibrateLightReading, Directions::NONE, Key::Idle);
		assert_eq!(controller.profile.light_threshold, 610);
		press(&mut controller, screen, Directions::RIGHT, Key::Idle);

		let mut written = controller.board.eeprom.writes.clone();
		written.dedup();
		assert_eq!(written, vec![base + LIGHT_OFFSET, base + LIGHT_OFFSET + 1]);
		assert_eq!(
			controller.board.events,
			vec![
				Event::MoistureSaved { slot: Slot::Four },
				Event::LightSaved { slot: Slot::Four },
			]
		);
		assert!(controller.board.link.sent.is_empty());
	}

	#[test]
	fn test_calibration_write_without_slot_is_skipped() {
		let mut controller = controller();
		let screen = press(&mut controller, Screen::CalibrateMoistureReading, Directions::RIGHT, Key::Idle);
		assert_eq!(screen, Screen::WriteMoisture);
		assert!(controller.board.eeprom.writes.is_empty());
		assert_eq!(controller.board.events, vec![Event::WriteSkipped]);

		let screen = press(&mut controller, screen, Directions::NONE, Key::Idle);
		assert_eq!(screen, Screen::MainProfiles);
	}

	#[test]
	fn test_load_corrupt_slot_keeps_profile() {
		let mut controller = controller();
		controller.profile.moisture_threshold = 123;

		let screen = press(&mut controller, Screen::SelectSource, Directions::NONE, Key::Digit(1));
		let screen = press(&mut controller, screen, Directions::RIGHT, Key::Idle);
		assert_eq!(screen, Screen::Retrieve);
		assert_eq!(controller.profile.moisture_threshold, 123);
		assert!(controller.board.link.sent.is_empty());
		assert_eq!(
			controller.board.events,
			vec![Event::StorageFailed {
				slot: Slot::One,
				error: StorageError::Corrupt { code: 0xFF },
			}]
		);

		let screen = press(&mut controller, screen, Directions::NONE, Key::Idle);
		assert_eq!(screen, Screen::ShowDaytime);
	}

	#[test]
	fn test_failed_link_is_reported() {
		let mut controller = controller();
		controller.board.link.fail = true;
		controller.nav.slot = Some(Slot::Three);
		controller.nav.accepted = true;

		press(&mut controller, Screen::ConfirmSlot, Directions::RIGHT, Key::Idle);

		assert_eq!(
			controller.board.events,
			vec![
				Event::ProfileSaved { slot: Slot::Three },
				Event::LinkFailed { slot: Slot::Three },
			]
		);
	}

	#[test]
	fn test_held_stick_moves_one_step_per_run() {
		let mut controller = controller();
		let screen = press(&mut controller, Screen::Welcome, Directions::DOWN, Key::Idle);
		assert_eq!(screen, Screen::MainProfiles);
		assert_eq!(controller.nav.cursor, CREATE_PROFILE);
		let screen = press(&mut controller, screen, Directions::DOWN, Key::Idle);
		assert_eq!(screen, Screen::MainProfiles);
		assert_eq!(controller.nav.cursor, LOAD_PROFILE);
	}

	fn any_directions() -> impl Strategy<Value = Directions> {
		prop::sample::select(vec![
			Directions::NONE,
			Directions::NONE,
			Directions::UP,
			Directions::DOWN,
			Directions::LEFT,
			Directions::RIGHT,
			Directions::RIGHT,
			Directions { down: true, right: true, ..Directions::NONE },
		])
	}

	fn any_key() -> impl Strategy<Value = Key> {
		prop_oneof![
			Just(Key::Idle),
			(0u8..=9).prop_map(Key::Digit),
			Just(Key::Letter(crate::input::Letter::A)),
			Just(Key::Letter(crate::input::Letter::B)),
			Just(Key::Star),
			Just(Key::Pound),
		]
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(64))]

		#[test]
		fn test_random_sessions_keep_invariants(
			inputs in prop::collection::vec((any_directions(), any_key()), 1..120),
			stored in prop::sample::select(Slot::ALL.to_vec()),
		) {
			let mut controller = controller();
			controller.board.store(stored, &Profile {
				daytime_watering: true,
				frequency: Frequency::Days(2),
				moisture_threshold: 400,
				light_threshold: 600,
			});
			controller.board.eeprom.writes.clear();

			let mut raw = UNINITIALIZED;
			for (directions, key) in inputs {
				let previous = Screen::from_raw(raw);
				let ops_before = controller.board.display.ops.len();
				let sent_before = controller.board.link.sent.len();
				let writes_before = controller.board.eeprom.writes.len();

				controller.board.hold(directions);
				controller.board.key = key;
				controller.readings = crate::sampler::sample_all(&mut controller.board, 0);
				raw = run(raw, &mut controller);

				let screen = Screen::from_raw(raw);
				prop_assert!(screen.is_some());
				let screen = screen.unwrap();

				// The display is cleared before a new screen draws anything.
				if previous != Some(screen) {
					prop_assert_eq!(
						controller.board.display.ops.get(ops_before),
						Some(&DisplayOp::Clear)
					);
				}

				// Storage and link are only touched by the screens that own them.
				if controller.board.eeprom.writes.len() != writes_before {
					prop_assert!(screen.is_write());
					prop_assert!(controller.nav.slot.is_some());
				}
				if controller.board.link.sent.len() != sent_before {
					prop_assert!(matches!(screen, Screen::WriteProfile | Screen::Retrieve));
					prop_assert_eq!(controller.board.link.sent.len(), sent_before + 1);
				}

				prop_assert!(controller.nav.cursor <= CALIBRATE_LIGHT);
			}
		}

		#[test]
		fn test_unknown_screen_restarts_at_welcome(raw in (Screen::ALL.len() as u8)..=u8::MAX) {
			let mut controller = controller();
			controller.nav.cursor = CALIBRATE_LIGHT;
			controller.nav.accepted = true;
			controller.nav.answer = Answer::Yes;

			let next = run(raw, &mut controller);

			prop_assert_eq!(Screen::from_raw(next), Some(Screen::Welcome));
			prop_assert_eq!(controller.board.display.ops.first(), Some(&DisplayOp::Clear));
			prop_assert_eq!(controller.nav.cursor, CREATE_PROFILE);
			prop_assert!(!controller.nav.accepted);
			prop_assert_eq!(controller.nav.answer, Answer::Blank);
		}
	}
}
