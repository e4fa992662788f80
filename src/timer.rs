//! Base tick for the scheduler
//!
//! Ref: https://blog.rahix.de/005-avr-hal-millis/

use avr_device::interrupt::Mutex;
use core::cell::Cell;

const PRESCALER: u16 = 64;
const TIMER_COUNTS: u16 = 250;

const MILLIS_INCREMENT: u16 = PRESCALER * TIMER_COUNTS / 16000;

pub struct Timer {
	/// Milliseconds between base ticks, zero until [`Timer::init`]
	period: Mutex<Cell<u16>>,
	millis: Mutex<Cell<u16>>,
	/// A base tick is waiting for the main loop
	pending: Mutex<Cell<bool>>,
	/// Base ticks that elapsed while one was already pending
	dropped: Mutex<Cell<u16>>,
}

impl Timer {
	/// Start firing base ticks every `period_ms` milliseconds
	pub fn init(tc0: arduino_hal::pac::TC0, period_ms: u16) {
		avr_device::interrupt::free(|cs| TIMER.period.borrow(cs).set(period_ms));

		// Configure the timer for a 1ms interval (in CTC mode)
		// and enable its interrupt.
		tc0.tccr0a.write(|w| w.wgm0().ctc());
		tc0.ocr0a.write(|w| unsafe { w.bits(TIMER_COUNTS as u8) });
		tc0.tccr0b.write(|w| match PRESCALER {
			8 => w.cs0().prescale_8(),
			64 => w.cs0().prescale_64(),
			256 => w.cs0().prescale_256(),
			_ => w.cs0().prescale_1024(),
		});
		tc0.timsk0.write(|w| w.ocie0a().set_bit());
	}

	/// Claim the pending base tick, along with the number of ticks dropped before it
	pub fn take_tick(&self) -> Option<u16> {
		avr_device::interrupt::free(|cs| {
			if self.pending.borrow(cs).replace(false) {
				Some(self.dropped.borrow(cs).replace(0))
			} else {
				None
			}
		})
	}
}

pub static TIMER: Timer = Timer {
	period: Mutex::new(Cell::new(0)),
	millis: Mutex::new(Cell::new(0)),
	pending: Mutex::new(Cell::new(false)),
	dropped: Mutex::new(Cell::new(0)),
};

#[avr_device::interrupt(atmega328p)]
#[allow(non_snake_case)]
fn TIMER0_COMPA() {
	avr_device::interrupt::free(|cs| {
		let period = TIMER.period.borrow(cs).get();
		if period == 0 {
			return;
		}

		let millis_cell = TIMER.millis.borrow(cs);
		let millis = millis_cell.get() + MILLIS_INCREMENT;
		if millis < period {
			millis_cell.set(millis);
			return;
		}
		millis_cell.set(0);

		// Ticks are never queued: a late main loop loses them.
		let pending = TIMER.pending.borrow(cs);
		if pending.get() {
			let dropped = TIMER.dropped.borrow(cs);
			dropped.set(dropped.get().saturating_add(1));
		} else {
			pending.set(true);
		}
	})
}
