//! The real board behind the controller's tasks

use arduino_hal::{
	clock::MHz16,
	hal::{
		port::{Dynamic, PC0, PC1, PC2, PC3, PD2, PD3},
		Adc,
	},
	port::{
		mode::{Analog, Output},
		Pin,
	},
};
use leaf_core::{board::Board, events::Event, input::Key, link::ShiftRegisterLink, readings::Channel};

use crate::{display::Display, eeprom::InternalEeprom, keypad::Keypad};

/// Shift register link on four output pins
pub type CompanionLink = ShiftRegisterLink<Pin<Output, Dynamic>>;

/// Holds the pins for the analog inputs
pub struct Sensors {
	/// Joystick up/down
	vertical: Pin<Analog, PC0>,
	/// Joystick left/right
	horizontal: Pin<Analog, PC1>,
	moisture: Pin<Analog, PC2>,
	light: Pin<Analog, PC3>,
}

impl Sensors {
	pub fn new(
		vertical: Pin<Analog, PC0>,
		horizontal: Pin<Analog, PC1>,
		moisture: Pin<Analog, PC2>,
		light: Pin<Analog, PC3>,
	) -> Self {
		Self {
			vertical,
			horizontal,
			moisture,
			light,
		}
	}
}

/// Holds the pins driven by the irrigation clock
pub struct Outputs {
	/// Pump relay
	pump: Pin<Output, PD2>,
	/// Pulsed when the clock restarts for a new profile
	profile_changed: Pin<Output, PD3>,
}

impl Outputs {
	pub fn new(pump: Pin<Output, PD2>, profile_changed: Pin<Output, PD3>) -> Self {
		Self {
			pump,
			profile_changed,
		}
	}
}

/// Central type which connects the peripherals to the controller
pub struct System {
	/// Analog to digital converter used for reading analog input values
	adc: Adc<MHz16>,
	sensors: Sensors,
	/// Channel the next conversion reads
	selected: Channel,
	outputs: Outputs,
	keypad: Keypad,
	display: Display,
	eeprom: InternalEeprom,
	link: CompanionLink,
}

impl System {
	pub fn new(
		adc: Adc<MHz16>,
		sensors: Sensors,
		outputs: Outputs,
		display: Display,
		eeprom: InternalEeprom,
		link: CompanionLink,
	) -> Self {
		Self {
			adc,
			sensors,
			selected: Channel::Vertical,
			outputs,
			keypad: Keypad::new(),
			display,
			eeprom,
			link,
		}
	}

	/// Setup the display and render the header
	pub fn init(&mut self) {
		self.display.render_header();
	}

	/// Route the multiplexer to the selected channel and convert it
	fn read_selected(&mut self) -> u16 {
		let adc = &mut self.adc;
		match self.selected {
			Channel::Vertical => self.sensors.vertical.analog_read(adc),
			Channel::Horizontal => self.sensors.horizontal.analog_read(adc),
			Channel::Moisture => self.sensors.moisture.analog_read(adc),
			Channel::Light => self.sensors.light.analog_read(adc),
		}
	}
}

impl Board for System {
	type Display = Display;
	type Eeprom = InternalEeprom;
	type Link = CompanionLink;

	/// Switches the multiplexer right away with a throwaway conversion, so the hardware sees
	/// switch, settle, convert in that order
	fn select(&mut self, channel: Channel) {
		self.selected = channel;
		let _ = self.read_selected();
	}

	fn settle(&mut self, micros: u16) {
		arduino_hal::delay_us(micros as u32);
	}

	fn convert(&mut self) -> u16 {
		self.read_selected()
	}

	fn key(&mut self) -> Key {
		self.keypad.update(&mut self.adc)
	}

	fn display(&mut self) -> &mut Display {
		&mut self.display
	}

	fn eeprom(&mut self) -> &mut InternalEeprom {
		&mut self.eeprom
	}

	fn link(&mut self) -> &mut CompanionLink {
		&mut self.link
	}

	fn set_pump(&mut self, on: bool) {
		if on {
			self.outputs.pump.set_high();
		} else {
			self.outputs.pump.set_low();
		}
	}

	fn set_profile_changed(&mut self, on: bool) {
		if on {
			self.outputs.profile_changed.set_high();
		} else {
			self.outputs.profile_changed.set_low();
		}
	}

	fn report(&mut self, event: Event) {
		log!("{:?}", event);
	}
}
