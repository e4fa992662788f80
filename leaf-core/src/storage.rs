//! Non-volatile profile slots
//!
//! Four slots sit at fixed EEPROM addresses, each laid out as
//!
//! ```text
//! +0  flag       1 byte   daytime watering (0 or 1)
//! +1  frequency  1 byte   days 1-9, or 99 for demo mode
//! +2  moisture   2 bytes  little-endian
//! +4  light      2 bytes  little-endian
//! ```
//!
//! Every write is read back and compared, so a worn cell shows up as a [`StorageError::Verify`]
//! instead of a silently different profile after the next load.

use ufmt::derive::uDebug;

use crate::profile::{Frequency, Profile};

/// Offset of the daytime watering flag within a slot
pub const FLAG_OFFSET: u16 = 0;
/// Offset of the frequency byte within a slot
pub const FREQUENCY_OFFSET: u16 = 1;
/// Offset of the moisture threshold word within a slot
pub const MOISTURE_OFFSET: u16 = 2;
/// Offset of the light threshold word within a slot
pub const LIGHT_OFFSET: u16 = 4;
/// Bytes used by one slot
pub const SLOT_LEN: u16 = 6;

/// Byte and word access to EEPROM
pub trait Eeprom {
	fn read_byte(&mut self, address: u16) -> u8;

	/// Blocks until the cell is programmed
	fn write_byte(&mut self, address: u16, value: u8);

	fn read_word(&mut self, address: u16) -> u16 {
		u16::from_le_bytes([self.read_byte(address), self.read_byte(address + 1)])
	}

	fn write_word(&mut self, address: u16, value: u16) {
		let [low, high] = value.to_le_bytes();
		self.write_byte(address, low);
		self.write_byte(address + 1, high);
	}
}

impl<T: Eeprom + ?Sized> Eeprom for &mut T {
	fn read_byte(&mut self, address: u16) -> u8 {
		(**self).read_byte(address)
	}

	fn write_byte(&mut self, address: u16, value: u8) {
		(**self).write_byte(address, value)
	}
}

/// One of the four profile slots
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
	One,
	Two,
	Three,
	Four,
}

impl Slot {
	pub const ALL: [Slot; 4] = [Slot::One, Slot::Two, Slot::Three, Slot::Four];

	/// Slot for the numbers 1 to 4
	pub fn from_number(number: u8) -> Option<Self> {
		match number {
			1 => Some(Self::One),
			2 => Some(Self::Two),
			3 => Some(Self::Three),
			4 => Some(Self::Four),
			_ => None,
		}
	}

	pub fn number(self) -> u8 {
		match self {
			Self::One => 1,
			Self::Two => 2,
			Self::Three => 3,
			Self::Four => 4,
		}
	}

	/// EEPROM address of the slot's first byte
	pub fn base_address(self) -> u16 {
		match self {
			Self::One => 1,
			Self::Two => 7,
			Self::Three => 13,
			Self::Four => 19,
		}
	}

	/// Code sent to the companion board after this slot is saved or loaded
	pub fn link_code(self) -> u8 {
		match self {
			Self::One => 0x14,
			Self::Two => 0xB3,
			Self::Three => 0xB6,
			Self::Four => 0xD4,
		}
	}
}

/// Errors from [`ProfileStore`]
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
	/// The byte read back from `address` differs from the byte written
	Verify { address: u16 },
	/// The slot does not hold a valid frequency, usually because it was never written
	Corrupt { code: u8 },
}

/// Reads and writes whole or partial profiles in their slots
pub struct ProfileStore<E> {
	eeprom: E,
}

impl<E: Eeprom> ProfileStore<E> {
	pub fn new(eeprom: E) -> Self {
		Self { eeprom }
	}

	/// Give back the wrapped EEPROM
	#[cfg(test)]
	pub fn release(self) -> E {
		self.eeprom
	}

	/// Write every field of `profile` into `slot`
	pub fn save(&mut self, slot: Slot, profile: &Profile) -> Result<(), StorageError> {
		let base = slot.base_address();
		self.put_byte(base + FLAG_OFFSET, profile.daytime_watering as u8)?;
		self.put_byte(base + FREQUENCY_OFFSET, profile.frequency.code())?;
		self.put_word(base + MOISTURE_OFFSET, profile.moisture_threshold)?;
		self.put_word(base + LIGHT_OFFSET, profile.light_threshold)
	}

	/// Write only the moisture threshold of `slot`
	pub fn save_moisture(&mut self, slot: Slot, threshold: u16) -> Result<(), StorageError> {
		self.put_word(slot.base_address() + MOISTURE_OFFSET, threshold)
	}

	/// Write only the light threshold of `slot`
	pub fn save_light(&mut self, slot: Slot, threshold: u16) -> Result<(), StorageError> {
		self.put_word(slot.base_address() + LIGHT_OFFSET, threshold)
	}

	/// Read the profile stored in `slot`
	pub fn load(&mut self, slot: Slot) -> Result<Profile, StorageError> {
		let base = slot.base_address();
		let code = self.eeprom.read_byte(base + FREQUENCY_OFFSET);
		let frequency = Frequency::from_code(code).ok_or(StorageError::Corrupt { code })?;

		Ok(Profile {
			daytime_watering: self.eeprom.read_byte(base + FLAG_OFFSET) != 0,
			frequency,
			moisture_threshold: self.eeprom.read_word(base + MOISTURE_OFFSET),
			light_threshold: self.eeprom.read_word(base + LIGHT_OFFSET),
		})
	}

	fn put_byte(&mut self, address: u16, value: u8) -> Result<(), StorageError> {
		self.eeprom.write_byte(address, value);
		if self.eeprom.read_byte(address) == value {
			Ok(())
		} else {
			Err(StorageError::Verify { address })
		}
	}

	fn put_word(&mut self, address: u16, value: u16) -> Result<(), StorageError> {
		let [low, high] = value.to_le_bytes();
		self.put_byte(address, low)?;
		self.put_byte(address + 1, high)
	}
}
