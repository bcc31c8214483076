//! Record declarations for the demo protocol. Everything reachable through
//! a `Vec` or `Box` derives `Default` and `Clone`, which the generated
//! reader relies on.

use std::marker::PhantomData;

use num_complex::{Complex32, Complex64};

/// Message of the day, pushed to a player right after joining.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Motd {
    pub text: String,
}

/// Tick-to-tick position deltas, batched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeltaLog {
    pub samples: Vec<i8>,
}

/// Exercises every fixed-width integer plus a static array.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Handshake {
    pub uint8: u8,
    pub uint16: u16,
    pub uint32: u32,
    pub uint64: u64,
    pub int8: i8,
    pub int16: i16,
    pub int32: i32,
    pub int64: i64,
    pub arr: [u8; 4],
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChannelEvent {
    pub opcode: u8,
    pub channel_id: u16,
    pub player_name: String,
    pub event: u8,
    pub muted: bool,
    pub latency: Box<i16>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub inventory: Vec<u8>,
    pub titles: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Roster {
    pub flags: Vec<u8>,
    pub players: Vec<Player>,
    pub deltas: Vec<i8>,
}

/// Sensor samples; the IQ pairs come straight from the radio frontend.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Telemetry {
    pub cpu: f32,
    pub uptime: f64,
    pub iq: Complex32,
    pub iq_wide: Complex64,
    pub gains: Vec<f32>,
}

/// Wire layout kept from protocol v1; the reserved slot no longer carries
/// anything and stays off the wire entirely.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Legacy {
    pub head: u16,
    pub _reserved: PhantomData<u64>,
    pub tail: u16,
}
