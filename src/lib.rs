#![no_std]

//! Driver for 24C02-class serial EEPROMs.
//!
//! Up to eight chips share one two-wire bus and are told apart by the
//! `A2..A0` chip select pins. Each chip holds [`CAPACITY`] bytes and accepts
//! writes of at most one [`PAGE_SIZE`] page per bus transaction.

#[macro_use]
mod log;

mod compat;
mod config;
mod pages;
mod rom;
mod select;
mod shared;

#[cfg(feature = "serde")]
mod object;

pub mod adapters;

pub use adapters::*;
pub use compat::*;
pub use config::*;
pub use pages::*;
pub use rom::*;
pub use select::*;
pub use shared::*;

/// Page size exponent.
pub const PAGEBITS: u8 = 3;
pub const PAGE_SIZE: usize = 1 << PAGEBITS;

/// Bytes per chip.
pub const CAPACITY: usize = 256;

/// Number of chips addressable on one bus.
pub const MAX_DEVICES: u8 = 8;

#[derive(Debug, PartialEq)]
pub enum Error<E> {
    AdapterError(E),
    BufferTooSmall,
    InvalidAddress,
    InvalidDevice,
    NotResponding,
    #[cfg(feature = "serde")]
    SerializationError,
    Timeout,
}
