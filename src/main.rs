#![feature(abi_avr_interrupt)]
#![no_std]
#![no_main]

#[macro_use]
mod serial;

mod display;
mod eeprom;
mod keypad;
mod system;
mod timer;

use arduino_hal::{Peripherals, Pins};
use core::panic::PanicInfo;
use display::Display;
use eeprom::InternalEeprom;
use leaf_core::{
	config::Config,
	controller::{self, Controller},
	link::ShiftRegisterLink,
};
use serial::set_serial;
use system::{Outputs, Sensors, System};
use timer::{Timer, TIMER};

#[arduino_hal::entry]
fn main() -> ! {
	let dp: Peripherals = arduino_hal::Peripherals::take().unwrap();
	let pins: Pins = arduino_hal::pins!(dp);

	// Initialize the serial interface for logging and for bytes from the companion board.
	set_serial(arduino_hal::default_serial!(dp, pins, 57600));

	let config = Config::DEFAULT;
	let mut scheduler = controller::scheduler::<System>(&config);

	// Get all the peripherals attached to the device.
	let mut adc = arduino_hal::Adc::new(dp.ADC, Default::default());
	let sensors = Sensors::new(
		pins.a0.into_analog_input(&mut adc),
		pins.a1.into_analog_input(&mut adc),
		pins.a2.into_analog_input(&mut adc),
		pins.a3.into_analog_input(&mut adc),
	);
	let outputs = Outputs::new(pins.d2.into_output(), pins.d3.into_output());
	let link = ShiftRegisterLink::new(
		pins.d4.into_output().downgrade(),
		pins.d5.into_output().downgrade(),
		pins.d6.into_output().downgrade(),
		pins.d7.into_output().downgrade(),
	);

	// The OLED display is using the I2C interface, not SPI.
	let i2c = arduino_hal::I2c::new(
		dp.TWI,
		pins.a4.into_pull_up_input(),
		pins.a5.into_pull_up_input(),
		100_000,
	);
	let display = Display::new(i2c);

	let mut system = System::new(
		adc,
		sensors,
		outputs,
		display,
		InternalEeprom::new(dp.EEPROM),
		link,
	);
	system.init();
	let mut controller = Controller::new(system, config);

	// Initialize the timer.
	Timer::init(dp.TC0, scheduler.base_period());

	// Turn on interrupts for this device.
	unsafe { avr_device::interrupt::enable() };

	log!("leaf of faith up, base tick {}ms", scheduler.base_period());

	loop {
		if let Some(dropped) = TIMER.take_tick() {
			if dropped > 0 {
				log!("dropped {} base ticks", dropped);
			}
			scheduler.tick(&mut controller);
		}

		if let Some(byte) = serial::take_received() {
			log!("companion sent {}", byte);
		}
	}
}

#[panic_handler]
fn panic(_: &PanicInfo) -> ! {
	loop {}
}
