//! Screen contents

use super::{Navigation, Screen, CALIBRATE_MOISTURE, CREATE_PROFILE, LIVE_READINGS};
use crate::{
	display::{write_number_at, CharDisplay, SECOND_ROW},
	profile::{Frequency, Profile},
	readings::Readings,
};

const SELECTED: u8 = b'>';
const BUSY_BANNER: &str = "Saving Profile..";

/// Draw `screen` over whatever is already on the display
pub fn render<D: CharDisplay + ?Sized>(
	display: &mut D,
	screen: Screen,
	nav: &Navigation,
	profile: &Profile,
	readings: &Readings,
) {
	let scaled = nav.scaled;
	match screen {
		Screen::Welcome => display.write_str_at(0, "   Welcome To   <Leaf of Faith> "),
		Screen::Settings => {
			display.write_str_at(0, "Enable Scaler?");
			display.write_str_at(SECOND_ROW + 4, if scaled { "< On  >" } else { "< Off >" });
		}

		Screen::MainProfiles => main_page(display, nav.cursor, CREATE_PROFILE, "Create Profile", "Load Profile"),
		Screen::MainReadings => main_page(display, nav.cursor, LIVE_READINGS, "Live Readings", "At A Glance"),
		Screen::MainCalibrate => {
			main_page(display, nav.cursor, CALIBRATE_MOISTURE, "Calibrate Soil", "Calibrate Sun")
		}

		Screen::GlanceSchedule => {
			display.write_str_at(0, "Daytime h2O:");
			display.write_str_at(13, yes_no(profile.daytime_watering));
			display.write_str_at(SECOND_ROW, "Frequency:");
			write_number_at(display, SECOND_ROW + 11, profile.frequency.code() as u16, false);
		}
		Screen::GlanceThresholds => {
			display.write_str_at(0, "MS:");
			write_number_at(display, 4, profile.moisture_threshold, scaled);
			display.write_str_at(SECOND_ROW, "SL:");
			write_number_at(display, SECOND_ROW + 4, profile.light_threshold, scaled);
		}
		Screen::LiveReadings => {
			display.write_str_at(0, "Moisture:");
			write_number_at(display, 10, readings.moisture, scaled);
			display.write_str_at(SECOND_ROW, "Sunlight:");
			write_number_at(display, SECOND_ROW + 10, readings.light, scaled);
		}

		Screen::CalibrateMoisture | Screen::WizardMoisture => {
			display.write_str_at(0, "1.Place Moisture");
			display.write_str_at(SECOND_ROW, "  Sensor    -->");
		}
		Screen::CalibrateLight => {
			display.write_str_at(0, "1.Set Photo");
			display.write_str_at(SECOND_ROW, "  Sensor    -->");
		}
		Screen::WizardLight => {
			display.write_str_at(0, "3.Set Photo");
			display.write_str_at(SECOND_ROW, "  Sensor    -->");
		}
		Screen::CalibrateMoistureReading => reading(display, "2.Reading:", readings.moisture, scaled, "SAVE -->"),
		Screen::CalibrateLightReading => reading(display, "2.Reading:", readings.light, scaled, "SAVE -->"),
		Screen::WizardMoistureReading => reading(display, "2.Reading:", readings.moisture, scaled, "NEXT -->"),
		Screen::WizardLightReading => reading(display, "4.Reading:", readings.light, scaled, "NEXT -->"),

		Screen::AskDaytime => {
			display.write_str_at(0, "OK to water in");
			display.write_str_at(SECOND_ROW, "day?");
			display.write_str_at(SECOND_ROW + 5, nav.answer.label());
		}
		Screen::AskFrequency => {
			display.write_str_at(0, "# of days");
			display.write_str_at(SECOND_ROW, "between water:");
			if nav.accepted {
				display.write_char_at(SECOND_ROW + 15, profile.frequency.glyph());
			}
		}
		Screen::ConfirmSlot | Screen::SelectSource => {
			let title = if screen == Screen::ConfirmSlot { "Select Mem Slot" } else { "Source Mem Slot" };
			display.write_str_at(0, title);
			display.write_str_at(SECOND_ROW, "1,2,3,4?:");
			if let (true, Some(slot)) = (nav.accepted, nav.slot) {
				display.write_char_at(SECOND_ROW + 10, b'0' + slot.number());
			}
		}

		Screen::ShowDaytime => {
			display.write_str_at(0, "Water During Day");
			display.write_str_at(SECOND_ROW, yes_no(profile.daytime_watering));
		}
		Screen::ShowFrequency => match profile.frequency {
			Frequency::Days(days) => {
				display.write_str_at(0, "Water every");
				display.write_char_at(12, b'0' + days);
				display.write_str_at(SECOND_ROW, "days");
			}
			Frequency::DemoFast => {
				display.write_str_at(0, "Water every 1");
				display.write_str_at(SECOND_ROW, "minute (demo)");
			}
		},
		Screen::ShowMoisture => {
			display.write_str_at(0, "MS Threshold");
			write_number_at(display, SECOND_ROW, profile.moisture_threshold, scaled);
		}
		Screen::ShowLight => {
			display.write_str_at(0, "Sun Threshold");
			write_number_at(display, SECOND_ROW, profile.light_threshold, scaled);
		}

		Screen::WriteProfile | Screen::WriteMoisture | Screen::WriteLight | Screen::Retrieve => {}
	}
}

/// Show the saving banner `repeats` times, which holds it on screen while EEPROM is written
pub fn busy<D: CharDisplay + ?Sized>(display: &mut D, repeats: u8) {
	for _ in 0..repeats {
		display.write_str_at(0, BUSY_BANNER);
	}
}

fn yes_no(yes: bool) -> &'static str {
	if yes {
		"Yes"
	} else {
		"No "
	}
}

fn main_page<D: CharDisplay + ?Sized>(display: &mut D, cursor: u8, first: u8, top: &str, bottom: &str) {
	display.write_str_at(2, top);
	display.write_str_at(SECOND_ROW + 2, bottom);
	let marker = if cursor == first + 1 { SECOND_ROW } else { 0 };
	display.write_char_at(marker, SELECTED);
}

fn reading<D: CharDisplay + ?Sized>(display: &mut D, label: &str, value: u16, scaled: bool, prompt: &str) {
	display.write_str_at(0, label);
	write_number_at(display, 11, value, scaled);
	display.write_str_at(SECOND_ROW + 8, prompt);
}
