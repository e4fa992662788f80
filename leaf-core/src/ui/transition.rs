//! Joystick navigation between screens
//!
//! At most one move is taken per invocation. When several directions are pushed the first of
//! left, right, up, down that the screen reacts to wins.

use super::{
	Answer, Navigation, Screen, AT_A_GLANCE, CALIBRATE_LIGHT, CALIBRATE_MOISTURE, CREATE_PROFILE,
	LIVE_READINGS, LOAD_PROFILE,
};
use crate::readings::Directions;

/// Where one invocation of the menu ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
	pub screen: Screen,
	/// Something visible changed and the display has to be blanked before rendering
	pub clear: bool,
}

enum Move {
	Stay,
	/// Highlight another item on the same main page
	Cursor(u8),
	/// Toggle the display scaler
	Scale(bool),
	To(Screen),
	/// Enter a main page with an item highlighted
	Page(Screen, u8),
	/// Back to the first main page
	Home,
}

/// Pick the screen for this invocation
///
/// `None` is the uninitialised state and always lands on the welcome screen.
pub fn transition(current: Option<Screen>, directions: Directions, nav: &mut Navigation) -> Transition {
	let current = match current {
		Some(screen) => screen,
		None => {
			nav.restart();
			return Transition { screen: Screen::Welcome, clear: true };
		}
	};

	let d = directions;
	let next = match current {
		Screen::Welcome if d.down => Move::Page(Screen::MainProfiles, CREATE_PROFILE),
		Screen::Welcome => Move::Stay,

		Screen::Settings => {
			if d.right {
				Move::Page(Screen::MainProfiles, CREATE_PROFILE)
			} else if d.up {
				Move::Scale(true)
			} else if d.down {
				Move::Scale(false)
			} else {
				Move::Stay
			}
		}

		Screen::MainProfiles | Screen::MainReadings | Screen::MainCalibrate => {
			main_page(current, d, nav.cursor)
		}

		Screen::GlanceSchedule | Screen::GlanceThresholds => {
			if d.left {
				Move::Page(Screen::MainReadings, AT_A_GLANCE)
			} else if d.up || d.down {
				Move::To(if current == Screen::GlanceSchedule {
					Screen::GlanceThresholds
				} else {
					Screen::GlanceSchedule
				})
			} else {
				Move::Stay
			}
		}

		Screen::LiveReadings => step(d, Move::Page(Screen::MainReadings, LIVE_READINGS), Move::Stay),

		Screen::CalibrateMoisture => step(
			d,
			Move::Page(Screen::MainCalibrate, CALIBRATE_MOISTURE),
			Move::To(Screen::CalibrateMoistureReading),
		),
		Screen::CalibrateMoistureReading => step(
			d,
			Move::To(Screen::CalibrateMoisture),
			Move::To(Screen::WriteMoisture),
		),
		Screen::CalibrateLight => step(
			d,
			Move::Page(Screen::MainCalibrate, CALIBRATE_LIGHT),
			Move::To(Screen::CalibrateLightReading),
		),
		Screen::CalibrateLightReading => step(
			d,
			Move::To(Screen::CalibrateLight),
			Move::To(Screen::WriteLight),
		),

		Screen::AskDaytime => step(d, Move::Home, accepted(nav, Screen::AskFrequency)),
		Screen::AskFrequency => step(
			d,
			Move::To(Screen::AskDaytime),
			accepted(nav, Screen::WizardMoisture),
		),
		Screen::WizardMoisture => step(
			d,
			Move::To(Screen::AskFrequency),
			Move::To(Screen::WizardMoistureReading),
		),
		Screen::WizardMoistureReading => step(
			d,
			Move::To(Screen::WizardMoisture),
			Move::To(Screen::WizardLight),
		),
		Screen::WizardLight => step(
			d,
			Move::To(Screen::WizardMoistureReading),
			Move::To(Screen::WizardLightReading),
		),
		Screen::WizardLightReading => step(
			d,
			Move::To(Screen::WizardLight),
			Move::To(Screen::ConfirmSlot),
		),
		Screen::ConfirmSlot => {
			let forward = if nav.slot.is_some() {
				accepted(nav, Screen::WriteProfile)
			} else {
				Move::Stay
			};
			step(d, Move::To(Screen::WizardLightReading), forward)
		}

		Screen::WriteProfile | Screen::WriteMoisture | Screen::WriteLight => Move::Home,

		Screen::SelectSource => step(
			d,
			Move::Page(Screen::MainProfiles, LOAD_PROFILE),
			accepted(nav, Screen::Retrieve),
		),
		Screen::Retrieve => Move::To(Screen::ShowDaytime),
		Screen::ShowDaytime | Screen::ShowFrequency | Screen::ShowMoisture | Screen::ShowLight => {
			if d.left {
				Move::Home
			} else if d.up {
				Move::To(ring_previous(current))
			} else if d.down {
				Move::To(ring_next(current))
			} else {
				Move::Stay
			}
		}
	};

	apply(current, next, nav)
}

/// The common shape of a wizard or calibration step: left goes back, right goes on, up leaves
fn step(d: Directions, back: Move, forward: Move) -> Move {
	if d.left {
		back
	} else if d.right {
		forward
	} else if d.up {
		Move::Home
	} else {
		Move::Stay
	}
}

/// Moving on requires a key accepted on this visit
fn accepted(nav: &Navigation, screen: Screen) -> Move {
	if nav.accepted {
		Move::To(screen)
	} else {
		Move::Stay
	}
}

fn first_item(page: Screen) -> u8 {
	match page {
		Screen::MainProfiles => CREATE_PROFILE,
		Screen::MainReadings => LIVE_READINGS,
		_ => CALIBRATE_MOISTURE,
	}
}

fn item_screen(cursor: u8) -> Screen {
	match cursor {
		CREATE_PROFILE => Screen::AskDaytime,
		LOAD_PROFILE => Screen::SelectSource,
		LIVE_READINGS => Screen::LiveReadings,
		AT_A_GLANCE => Screen::GlanceSchedule,
		CALIBRATE_MOISTURE => Screen::CalibrateMoisture,
		_ => Screen::CalibrateLight,
	}
}

/// The three main pages form one six-item list, two items per page
fn main_page(page: Screen, d: Directions, cursor: u8) -> Move {
	let first = first_item(page);
	let cursor = if cursor == first + 1 { cursor } else { first };

	if d.left {
		match page {
			Screen::MainProfiles => Move::To(Screen::Settings),
			Screen::MainReadings => Move::Page(Screen::MainProfiles, LOAD_PROFILE),
			_ => Move::Page(Screen::MainReadings, AT_A_GLANCE),
		}
	} else if d.right {
		Move::Page(item_screen(cursor), cursor)
	} else if d.up {
		match (cursor == first, page) {
			(false, _) => Move::Cursor(first),
			(true, Screen::MainReadings) => Move::Page(Screen::MainProfiles, LOAD_PROFILE),
			(true, Screen::MainCalibrate) => Move::Page(Screen::MainReadings, AT_A_GLANCE),
			(true, _) => Move::Stay,
		}
	} else if d.down {
		match (cursor == first, page) {
			(true, _) => Move::Cursor(first + 1),
			(false, Screen::MainProfiles) => Move::Page(Screen::MainReadings, LIVE_READINGS),
			(false, Screen::MainReadings) => Move::Page(Screen::MainCalibrate, CALIBRATE_MOISTURE),
			(false, _) => Move::Stay,
		}
	} else {
		Move::Stay
	}
}

fn ring_next(screen: Screen) -> Screen {
	match screen {
		Screen::ShowDaytime => Screen::ShowFrequency,
		Screen::ShowFrequency => Screen::ShowMoisture,
		Screen::ShowMoisture => Screen::ShowLight,
		_ => Screen::ShowDaytime,
	}
}

fn ring_previous(screen: Screen) -> Screen {
	match screen {
		Screen::ShowLight => Screen::ShowMoisture,
		Screen::ShowMoisture => Screen::ShowFrequency,
		Screen::ShowFrequency => Screen::ShowDaytime,
		_ => Screen::ShowLight,
	}
}

fn apply(current: Screen, next: Move, nav: &mut Navigation) -> Transition {
	let (screen, clear) = match next {
		Move::Stay => (current, false),
		Move::Cursor(cursor) => {
			nav.cursor = cursor;
			(current, true)
		}
		Move::Scale(scaled) => {
			let changed = nav.scaled != scaled;
			nav.scaled = scaled;
			(current, changed)
		}
		Move::To(screen) => (screen, true),
		Move::Page(screen, cursor) => {
			nav.cursor = cursor;
			(screen, true)
		}
		Move::Home => {
			nav.cursor = CREATE_PROFILE;
			(Screen::MainProfiles, true)
		}
	};

	if screen != current {
		nav.accepted = false;
		if current == Screen::AskDaytime {
			nav.answer = Answer::Blank;
		}
	}

	Transition { screen, clear }
}
