//! The menu's character grid on the SSD1306 OLED

use arduino_hal::I2c;
use core::fmt::Write;

use leaf_core::display::{CharDisplay, ROW_COUNT, ROW_LENGTH};
use ssd1306::{mode::TerminalMode, prelude::*, I2CDisplayInterface, Ssd1306};

/// The first 2 rows are yellow (header) rows, the rest are blue
pub const BODY_START_ROW: u8 = 2;

/// Slice of whitespace to clear a row in the display
pub const CLEAR_ROW: &str = "                ";

/// Two rows of the blue body, addressed as one linear grid
pub struct Display {
	inner: Ssd1306<I2CInterface<I2c>, DisplaySize128x64, TerminalMode>,
}

impl Display {
	pub fn new(i2c: I2c) -> Self {
		let interface = I2CDisplayInterface::new(i2c);

		let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
			.into_terminal_mode();
		let _ = display.init();
		let _ = display.clear();

		Self { inner: display }
	}

	/// Render the fixed header above the grid
	pub fn render_header(&mut self) {
		let _ = self.inner.set_position(0, 0);
		let _ = self.inner.write_str("Leaf of Faith\nv0.1");
	}
}

impl CharDisplay for Display {
	/// Only the grid rows are blanked, the header stays
	fn clear(&mut self) {
		for row in 0..ROW_COUNT {
			let _ = self.inner.set_position(0, BODY_START_ROW + row);
			let _ = self.inner.write_str(CLEAR_ROW);
		}
		let _ = self.inner.set_position(0, BODY_START_ROW);
	}

	fn set_cursor(&mut self, position: u8) {
		let _ = self
			.inner
			.set_position(position % ROW_LENGTH, BODY_START_ROW + position / ROW_LENGTH);
	}

	fn write_char(&mut self, c: u8) {
		let _ = self.inner.print_char(c as char);
	}
}
