//! Hardware seam between the tasks and the firmware

use crate::{
	display::CharDisplay, events::Event, input::Key, link::Link, readings::Channel,
	storage::Eeprom,
};

/// Everything the three tasks need from the device
///
/// The firmware implements this once for the real board, tests implement it with recorders.
/// No method may block for longer than a single storage write.
pub trait Board {
	type Display: CharDisplay;
	type Eeprom: Eeprom;
	type Link: Link;

	/// Route the ADC multiplexer to `channel`
	fn select(&mut self, channel: Channel);

	/// Wait for the multiplexer to settle
	fn settle(&mut self, micros: u16);

	/// Run one conversion on the selected channel
	fn convert(&mut self) -> u16;

	/// Key currently held on the keypad
	fn key(&mut self) -> Key;

	fn display(&mut self) -> &mut Self::Display;

	fn eeprom(&mut self) -> &mut Self::Eeprom;

	fn link(&mut self) -> &mut Self::Link;

	/// Drive the pump output
	fn set_pump(&mut self, on: bool);

	/// Drive the profile-changed output
	fn set_profile_changed(&mut self, on: bool);

	/// Record something worth logging
	fn report(&mut self, event: Event);
}
