//! One-byte link to the companion board
//!
//! Codes are shifted out through a 74HC595-style register: for each bit, least significant
//! first, the clear line is held high, the data line takes the bit and the shift clock rises.
//! After the eighth bit the latch line strobes and every line returns low.

use embedded_hal::digital::v2::OutputPin;

/// Sends one byte to the companion board
pub trait Link {
	type Error;

	fn transmit(&mut self, code: u8) -> Result<(), Self::Error>;
}

/// Bit-banged shift register driver
pub struct ShiftRegisterLink<P> {
	data: P,
	shift_clock: P,
	latch: P,
	clear: P,
}

impl<P: OutputPin> ShiftRegisterLink<P> {
	pub fn new(data: P, shift_clock: P, latch: P, clear: P) -> Self {
		Self {
			data,
			shift_clock,
			latch,
			clear,
		}
	}
}

impl<P: OutputPin> Link for ShiftRegisterLink<P> {
	type Error = P::Error;

	fn transmit(&mut self, code: u8) -> Result<(), Self::Error> {
		for bit in 0..8 {
			self.shift_clock.set_low()?;
			self.latch.set_low()?;
			self.clear.set_high()?;
			if (code >> bit) & 0x01 == 1 {
				self.data.set_high()?;
			} else {
				self.data.set_low()?;
			}
			self.shift_clock.set_high()?;
		}

		// End of frame.
		self.latch.set_high()?;
		self.data.set_low()?;
		self.shift_clock.set_low()?;
		self.latch.set_low()?;
		self.clear.set_low()
	}
}
