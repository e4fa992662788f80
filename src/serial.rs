//! Write formatted data to the USART peripheral, and catch bytes sent back by the companion
//! board.

use arduino_hal::{clock::MHz16, hal::usart::Usart0};
use avr_device::interrupt::Mutex;
use core::{cell::Cell, convert::Infallible};
use ufmt::uWrite;

pub struct SerialWriter {
	inner: Option<Usart0<MHz16>>,
}

impl uWrite for SerialWriter {
	type Error = Infallible;

	fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
		// Nothing to write to before `set_serial`.
		if let Some(serial) = &mut self.inner {
			let _ = serial.write_str(s);
		}

		Ok(())
	}
}

pub static mut SERIAL: SerialWriter = SerialWriter { inner: None };

/// Last byte received from the companion board, if it hasn't been taken yet
static RECEIVED: Mutex<Cell<Option<u8>>> = Mutex::new(Cell::new(None));

/// Install the logging port and start listening for incoming bytes
pub fn set_serial(mut serial: Usart0<MHz16>) {
	serial.listen(arduino_hal::hal::usart::Event::RxComplete);
	unsafe {
		if SERIAL.inner.is_none() {
			SERIAL.inner = Some(serial);
		}
	}
}

/// Take the byte received since the last call
pub fn take_received() -> Option<u8> {
	avr_device::interrupt::free(|cs| RECEIVED.borrow(cs).take())
}

#[avr_device::interrupt(atmega328p)]
#[allow(non_snake_case)]
fn USART_RX() {
	// Reading UDR0 clears the interrupt flag. Only the newest byte is kept.
	let usart = unsafe { &*arduino_hal::pac::USART0::ptr() };
	let byte = usart.udr0.read().bits();
	avr_device::interrupt::free(|cs| RECEIVED.borrow(cs).set(Some(byte)));
}

/// Convenience wrapper so that `unsafe { ... }` isn't required whenever something should be
/// logged to serial output.
///
/// This macro requires that `SERIAL` is in scope whenever it is used.
///
/// ```
/// log!("{}, {}", my_value_1, my_value_2);
/// ```
#[allow(unused_macros)]
macro_rules! log {
    ($fmt:expr) => {{
		let _ = unsafe { ufmt::uwriteln!(crate::serial::SERIAL, $fmt) };
	}};
    ($fmt:expr, $($values:expr),*) => {{
		let _ = unsafe { ufmt::uwriteln!(crate::serial::SERIAL, $fmt, $($values),*) };
	}}
}
