//! In-memory stand-ins for the board's peripherals

use crate::{
	board::Board,
	display::{CharDisplay, CELL_COUNT, ROW_LENGTH},
	events::Event,
	input::Key,
	link::Link,
	profile::Profile,
	readings::{Channel, Directions},
	storage::{Eeprom, ProfileStore, Slot},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOp {
	Clear,
	Cursor(u8),
	Char(u8),
}

/// Character grid that records every call
pub struct MockDisplay {
	cells: [u8; CELL_COUNT as usize],
	cursor: u8,
	pub ops: Vec<DisplayOp>,
}

impl MockDisplay {
	pub fn row(&self, row: u8) -> String {
		let start = (row * ROW_LENGTH) as usize;
		self.cells[start..start + ROW_LENGTH as usize]
			.iter()
			.map(|c| *c as char)
			.collect()
	}

	pub fn cell(&self, position: u8) -> u8 {
		self.cells[position as usize]
	}
}

impl Default for MockDisplay {
	fn default() -> Self {
		Self {
			cells: [b' '; CELL_COUNT as usize],
			cursor: 0,
			ops: Vec::new(),
		}
	}
}

impl CharDisplay for MockDisplay {
	fn clear(&mut self) {
		self.cells = [b' '; CELL_COUNT as usize];
		self.cursor = 0;
		self.ops.push(DisplayOp::Clear);
	}

	fn set_cursor(&mut self, position: u8) {
		self.cursor = position;
		self.ops.push(DisplayOp::Cursor(position));
	}

	fn write_char(&mut self, c: u8) {
		if let Some(cell) = self.cells.get_mut(self.cursor as usize) {
			*cell = c;
		}
		self.cursor = self.cursor.saturating_add(1);
		self.ops.push(DisplayOp::Char(c));
	}
}

/// 64 bytes of erased EEPROM
pub struct MockEeprom {
	pub bytes: [u8; 64],
	/// Every address written, in order
	pub writes: Vec<u16>,
	/// Writes to this address are silently lost
	pub stuck: Option<u16>,
}

impl Default for MockEeprom {
	fn default() -> Self {
		Self {
			bytes: [0xFF; 64],
			writes: Vec::new(),
			stuck: None,
		}
	}
}

impl Eeprom for MockEeprom {
	fn read_byte(&mut self, address: u16) -> u8 {
		self.bytes[address as usize]
	}

	fn write_byte(&mut self, address: u16, value: u8) {
		self.writes.push(address);
		if self.stuck != Some(address) {
			self.bytes[address as usize] = value;
		}
	}
}

#[derive(Default)]
pub struct MockLink {
	pub sent: Vec<u8>,
	/// Refuse every transmission
	pub fail: bool,
}

impl Link for MockLink {
	type Error = ();

	fn transmit(&mut self, code: u8) -> Result<(), ()> {
		if self.fail {
			return Err(());
		}
		self.sent.push(code);
		Ok(())
	}
}

/// A board with a centered joystick, dark dry sensors and nothing pressed
pub struct MockBoard {
	analog: [u16; 4],
	selected: Channel,
	pub selections: Vec<Channel>,
	pub settles: Vec<u16>,
	/// Channel the multiplexer was routed to during each settle
	pub settled_on: Vec<Channel>,
	pub key: Key,
	pub display: MockDisplay,
	pub eeprom: MockEeprom,
	pub link: MockLink,
	pub pump: Vec<bool>,
	pub profile_changed: Vec<bool>,
	pub events: Vec<Event>,
}

fn channel_index(channel: Channel) -> usize {
	match channel {
		Channel::Vertical => 0,
		Channel::Horizontal => 1,
		Channel::Moisture => 2,
		Channel::Light => 3,
	}
}

impl MockBoard {
	pub fn set_analog(&mut self, channel: Channel, value: u16) {
		self.analog[channel_index(channel)] = value;
	}

	/// Push the joystick to full deflection in `directions`, centering the other axis
	pub fn hold(&mut self, directions: Directions) {
		let vertical = if directions.up {
			0
		} else if directions.down {
			1023
		} else {
			512
		};
		let horizontal = if directions.left {
			0
		} else if directions.right {
			1023
		} else {
			512
		};
		self.set_analog(Channel::Vertical, vertical);
		self.set_analog(Channel::Horizontal, horizontal);
	}

	/// Put `profile` into `slot` ahead of a test
	pub fn store(&mut self, slot: Slot, profile: &Profile) {
		ProfileStore::new(&mut self.eeprom).save(slot, profile).unwrap();
	}
}

impl Default for MockBoard {
	fn default() -> Self {
		Self {
			analog: [512, 512, 0, 0],
			selected: Channel::Vertical,
			selections: Vec::new(),
			settles: Vec::new(),
			settled_on: Vec::new(),
			key: Key::Idle,
			display: MockDisplay::default(),
			eeprom: MockEeprom::default(),
			link: MockLink::default(),
			pump: Vec::new(),
			profile_changed: Vec::new(),
			events: Vec::new(),
		}
	}
}

impl Board for MockBoard {
	type Display = MockDisplay;
	type Eeprom = MockEeprom;
	type Link = MockLink;

	fn select(&mut self, channel: Channel) {
		self.selected = channel;
		self.selections.push(channel);
	}

	fn settle(&mut self, micros: u16) {
		self.settles.push(micros);
		self.settled_on.push(self.selected);
	}

	fn convert(&mut self) -> u16 {
		self.analog[channel_index(self.selected)]
	}

	fn key(&mut self) -> Key {
		self.key
	}

	fn display(&mut self) -> &mut MockDisplay {
		&mut self.display
	}

	fn eeprom(&mut self) -> &mut MockEeprom {
		&mut self.eeprom
	}

	fn link(&mut self) -> &mut MockLink {
		&mut self.link
	}

	fn set_pump(&mut self, on: bool) {
		self.pump.push(on);
	}

	fn set_profile_changed(&mut self, on: bool) {
		self.profile_changed.push(on);
	}

	fn report(&mut self, event: Event) {
		self.events.push(event);
	}
}
