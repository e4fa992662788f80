//! Occurrences the tasks report to the board for logging

use ufmt::derive::uDebug;

use crate::storage::{Slot, StorageError};

#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
	/// The pump output was pulsed
	Watered,
	/// The irrigation clock restarted with the profile's frequency code
	ClockReset { frequency: u8 },
	/// The working profile was written to a slot
	ProfileSaved { slot: Slot },
	/// A slot was loaded into the working profile
	ProfileLoaded { slot: Slot },
	/// The moisture threshold alone was written to a slot
	MoistureSaved { slot: Slot },
	/// The light threshold alone was written to a slot
	LightSaved { slot: Slot },
	/// A calibration write was requested before any slot was selected
	WriteSkipped,
	/// A slot could not be written or read
	StorageFailed { slot: Slot, error: StorageError },
	/// The slot code could not be shifted out to the companion board
	LinkFailed { slot: Slot },
}
