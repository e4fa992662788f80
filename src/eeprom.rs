//! On-chip EEPROM through its control registers

use arduino_hal::pac::EEPROM;
use leaf_core::storage::Eeprom;

pub struct InternalEeprom {
	regs: EEPROM,
}

impl InternalEeprom {
	pub fn new(regs: EEPROM) -> Self {
		Self { regs }
	}

	/// Spin until a previous write has finished
	fn wait(&self) {
		while self.regs.eecr.read().eepe().bit_is_set() {}
	}
}

impl Eeprom for InternalEeprom {
	fn read_byte(&mut self, address: u16) -> u8 {
		self.wait();
		self.regs.eear.write(|w| unsafe { w.bits(address) });
		self.regs.eecr.write(|w| w.eere().set_bit());
		self.regs.eedr.read().bits()
	}

	fn write_byte(&mut self, address: u16, value: u8) {
		self.wait();
		self.regs.eear.write(|w| unsafe { w.bits(address) });
		self.regs.eedr.write(|w| unsafe { w.bits(value) });

		// EEPE has to follow EEMPE within four cycles.
		avr_device::interrupt::free(|_cs| {
			self.regs.eecr.write(|w| w.eempe().set_bit());
			self.regs.eecr.write(|w| w.eempe().set_bit().eepe().set_bit());
		});
		self.wait();
	}
}
