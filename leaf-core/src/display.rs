//! Two-row character grid the menu renders to
//!
//! Positions are linear: `0..16` is the first row and `16..32` the second. Strings written
//! across the row boundary continue at the start of the next row.

/// Characters in one row
pub const ROW_LENGTH: u8 = 16;
/// Rows in the grid
pub const ROW_COUNT: u8 = 2;
/// Total addressable cells
pub const CELL_COUNT: u8 = ROW_LENGTH * ROW_COUNT;
/// Position of the first cell of the second row
pub const SECOND_ROW: u8 = ROW_LENGTH;

/// Largest value [`write_number_at`] can show
pub const NUMBER_MAX: u16 = 9999;

/// Character display primitives
pub trait CharDisplay {
	/// Blank every cell
	fn clear(&mut self);

	/// Move the cursor to a linear position
	fn set_cursor(&mut self, position: u8);

	/// Write one ASCII character at the cursor and advance it
	fn write_char(&mut self, c: u8);

	fn write_char_at(&mut self, position: u8, c: u8) {
		if position < CELL_COUNT {
			self.set_cursor(position);
			self.write_char(c);
		}
	}

	/// Write ASCII text starting at `position`, wrapping onto the next row and dropping whatever
	/// runs past the last cell
	fn write_str_at(&mut self, position: u8, s: &str) {
		for (offset, c) in s.bytes().enumerate() {
			let cell = position as usize + offset;
			if cell >= CELL_COUNT as usize {
				break;
			}
			let cell = cell as u8;
			if offset == 0 || cell % ROW_LENGTH == 0 {
				self.set_cursor(cell);
			}
			self.write_char(c);
		}
	}
}

/// Scale a 10-bit magnitude to a rounded percentage
pub fn percent(value: u16) -> u16 {
	((value as u32 * 100 + 512) / 1024) as u16
}

/// Four zero-padded decimal digits
pub fn four_digits(value: u16) -> [u8; 4] {
	let value = value.min(NUMBER_MAX);
	[
		b'0' + (value / 1000) as u8,
		b'0' + (value / 100 % 10) as u8,
		b'0' + (value / 10 % 10) as u8,
		b'0' + (value % 10) as u8,
	]
}

/// Write `value` as four digits, optionally as a percentage of full scale
pub fn write_number_at<D: CharDisplay + ?Sized>(display: &mut D, position: u8, value: u16, scaled: bool) {
	let value = if scaled { percent(value) } else { value };
	for (offset, digit) in four_digits(value).iter().enumerate() {
		display.write_char_at(position + offset as u8, *digit);
	}
}
