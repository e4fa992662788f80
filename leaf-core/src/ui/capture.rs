//! Keypad and sensor input taken by the screen being shown

use super::{Answer, Navigation, Screen};
use crate::{
	input::{Key, Letter},
	profile::{Frequency, Profile},
	readings::Readings,
	storage::Slot,
};

/// Storage work requested by a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	SaveProfile(Slot),
	SaveMoisture(Slot),
	SaveLight(Slot),
	LoadProfile(Slot),
	/// A calibration write was reached before any slot was chosen
	SkipWrite,
}

/// Apply `key` and `readings` to the working profile as `screen` dictates
pub fn capture(
	screen: Screen,
	key: Key,
	nav: &mut Navigation,
	profile: &mut Profile,
	readings: &Readings,
) -> Option<Command> {
	match screen {
		Screen::AskDaytime => {
			match key {
				Key::Letter(Letter::A) => {
					profile.daytime_watering = true;
					nav.answer = Answer::Yes;
					nav.accepted = true;
				}
				Key::Letter(Letter::B) => {
					profile.daytime_watering = false;
					nav.answer = Answer::No;
					nav.accepted = true;
				}
				// Take back the answer
				Key::Star => {
					nav.answer = Answer::Blank;
					nav.accepted = false;
				}
				_ => {}
			}
			None
		}
		Screen::AskFrequency => {
			let frequency = match key {
				Key::Star => Some(Frequency::DemoFast),
				Key::Digit(days) => Frequency::from_days(days),
				_ => None,
			};
			if let Some(frequency) = frequency {
				profile.frequency = frequency;
				nav.accepted = true;
			}
			None
		}
		Screen::ConfirmSlot | Screen::SelectSource => {
			if let Some(slot) = key.slot() {
				nav.slot = Some(slot);
				nav.accepted = true;
			}
			None
		}

		Screen::WizardMoistureReading | Screen::CalibrateMoistureReading => {
			profile.moisture_threshold = readings.moisture;
			None
		}
		Screen::WizardLightReading | Screen::CalibrateLightReading => {
			profile.light_threshold = readings.light;
			None
		}

		Screen::WriteProfile => nav.slot.map(Command::SaveProfile),
		Screen::WriteMoisture => Some(nav.slot.map_or(Command::SkipWrite, Command::SaveMoisture)),
		Screen::WriteLight => Some(nav.slot.map_or(Command::SkipWrite, Command::SaveLight)),
		Screen::Retrieve => nav.slot.map(Command::LoadProfile),

		_ => None,
	}
}
