// Code generated by "binenc-gen proto.rs"; DO NOT EDIT.

#![allow(
    unused_mut,
    unused_variables,
    unused_assignments,
    clippy::identity_op,
    clippy::unnecessary_cast
)]

use std::io::{self, Read, Write};
use core::str;

use super::*;

impl Motd {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut size = 2;
        size += self.text.len();
        let mut buf = vec![0u8; size];
        let mut offset = 0;
        if self.text.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.text.len() as u8;
        buf[offset + 1] = (self.text.len() >> 8) as u8;
        offset += 2;
        buf[offset..offset + self.text.len()].copy_from_slice(self.text.as_bytes());
        offset += self.text.len();
        w.write(&buf)
    }
    pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {
        let mut buf = [0u8; 8];
        let mut size: u16;
        let mut m = 0;
        let mut c = 64;
        let mut pool = vec![0u8; c];
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        if c - m < size as usize {
            c = (size as usize).max(2 * c);
            pool = vec![0u8; c];
            m = 0;
        }
        r.read_exact(&mut pool[m..m + size as usize])?;
        let tmp = unsafe { str::from_utf8_unchecked(&pool[m..m + size as usize]) };
        self.text = tmp.to_owned();
        m += size as usize;
        Ok(())
    }
}

impl DeltaLog {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut size = 2;
        size += 1 * self.samples.len();
        let mut buf = vec![0u8; size];
        let mut offset = 0;
        if self.samples.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.samples.len() as u8;
        buf[offset + 1] = (self.samples.len() >> 8) as u8;
        offset += 2;
        for v in self.samples.iter() {
            buf[offset] = *v as u8;
            offset += 1;
        }
        w.write(&buf)
    }
    pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {
        let mut buf = [0u8; 8];
        let mut size: u16;
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        self.samples = vec![0; size as usize];
        let si = size as usize;
        for i in 0..si {
            r.read_exact(&mut buf[..1])?;
            self.samples[i] = buf[0] as i8;
        }
        Ok(())
    }
}

impl Handshake {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut size = 34;
        let mut buf = vec![0u8; size];
        let mut offset = 0;
        buf[offset] = self.uint8 as u8;
        offset += 1;
        buf[offset] = self.uint16 as u8;
        buf[offset + 1] = (self.uint16 >> 8) as u8;
        offset += 2;
        buf[offset] = self.uint32 as u8;
        buf[offset + 1] = (self.uint32 >> 8) as u8;
        buf[offset + 2] = (self.uint32 >> 16) as u8;
        buf[offset + 3] = (self.uint32 >> 24) as u8;
        offset += 4;
        buf[offset] = self.uint64 as u8;
        buf[offset + 1] = (self.uint64 >> 8) as u8;
        buf[offset + 2] = (self.uint64 >> 16) as u8;
        buf[offset + 3] = (self.uint64 >> 24) as u8;
        buf[offset + 4] = (self.uint64 >> 32) as u8;
        buf[offset + 5] = (self.uint64 >> 40) as u8;
        buf[offset + 6] = (self.uint64 >> 48) as u8;
        buf[offset + 7] = (self.uint64 >> 56) as u8;
        offset += 8;
        buf[offset] = self.int8 as u8;
        offset += 1;
        buf[offset] = self.int16 as u16 as u8;
        buf[offset + 1] = (self.int16 as u16 >> 8) as u8;
        offset += 2;
        buf[offset] = self.int32 as u32 as u8;
        buf[offset + 1] = (self.int32 as u32 >> 8) as u8;
        buf[offset + 2] = (self.int32 as u32 >> 16) as u8;
        buf[offset + 3] = (self.int32 as u32 >> 24) as u8;
        offset += 4;
        buf[offset] = self.int64 as u64 as u8;
        buf[offset + 1] = (self.int64 as u64 >> 8) as u8;
        buf[offset + 2] = (self.int64 as u64 >> 16) as u8;
        buf[offset + 3] = (self.int64 as u64 >> 24) as u8;
        buf[offset + 4] = (self.int64 as u64 >> 32) as u8;
        buf[offset + 5] = (self.int64 as u64 >> 40) as u8;
        buf[offset + 6] = (self.int64 as u64 >> 48) as u8;
        buf[offset + 7] = (self.int64 as u64 >> 56) as u8;
        offset += 8;
        for i in 0..4 {
            buf[offset] = self.arr[i] as u8;
            offset += 1;
        }
        w.write(&buf)
    }
    pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {
        let mut buf = [0u8; 8];
        r.read_exact(&mut buf[..1])?;
        self.uint8 = buf[0];
        r.read_exact(&mut buf[..2])?;
        self.uint16 = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        r.read_exact(&mut buf[..4])?;
        self.uint32 = u32::from(buf[0]) | (u32::from(buf[1]) << 8)
            | (u32::from(buf[2]) << 16) | (u32::from(buf[3]) << 24);
        r.read_exact(&mut buf[..8])?;
        self.uint64 = u64::from(buf[0]) | (u64::from(buf[1]) << 8)
            | (u64::from(buf[2]) << 16) | (u64::from(buf[3]) << 24)
            | (u64::from(buf[4]) << 32) | (u64::from(buf[5]) << 40)
            | (u64::from(buf[6]) << 48) | (u64::from(buf[7]) << 56);
        r.read_exact(&mut buf[..1])?;
        self.int8 = buf[0] as i8;
        r.read_exact(&mut buf[..2])?;
        self.int16 = (u16::from(buf[0]) | (u16::from(buf[1]) << 8)) as i16;
        r.read_exact(&mut buf[..4])?;
        self.int32 = (u32::from(buf[0]) | (u32::from(buf[1]) << 8)
            | (u32::from(buf[2]) << 16) | (u32::from(buf[3]) << 24)) as i32;
        r.read_exact(&mut buf[..8])?;
        self.int64 = (u64::from(buf[0]) | (u64::from(buf[1]) << 8)
            | (u64::from(buf[2]) << 16) | (u64::from(buf[3]) << 24)
            | (u64::from(buf[4]) << 32) | (u64::from(buf[5]) << 40)
            | (u64::from(buf[6]) << 48) | (u64::from(buf[7]) << 56)) as i64;
        for i in 0..4 {
            r.read_exact(&mut buf[..1])?;
            self.arr[i] = buf[0];
        }
        Ok(())
    }
}

impl ChannelEvent {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut size = 9;
        size += self.player_name.len();
        let mut buf = vec![0u8; size];
        let mut offset = 0;
        buf[offset] = self.opcode as u8;
        offset += 1;
        buf[offset] = self.channel_id as u8;
        buf[offset + 1] = (self.channel_id >> 8) as u8;
        offset += 2;
        if self.player_name.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.player_name.len() as u8;
        buf[offset + 1] = (self.player_name.len() >> 8) as u8;
        offset += 2;
        buf[offset..offset + self.player_name.len()]
            .copy_from_slice(self.player_name.as_bytes());
        offset += self.player_name.len();
        buf[offset] = self.event as u8;
        offset += 1;
        buf[offset] = if self.muted { 0x01 } else { 0x00 };
        offset += 1;
        buf[offset] = *self.latency as u16 as u8;
        buf[offset + 1] = (*self.latency as u16 >> 8) as u8;
        offset += 2;
        w.write(&buf)
    }
    pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {
        let mut buf = [0u8; 8];
        let mut size: u16;
        let mut m = 0;
        let mut c = 64;
        let mut pool = vec![0u8; c];
        r.read_exact(&mut buf[..1])?;
        self.opcode = buf[0];
        r.read_exact(&mut buf[..2])?;
        self.channel_id = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        if c - m < size as usize {
            c = (size as usize).max(2 * c);
            pool = vec![0u8; c];
            m = 0;
        }
        r.read_exact(&mut pool[m..m + size as usize])?;
        let tmp = unsafe { str::from_utf8_unchecked(&pool[m..m + size as usize]) };
        self.player_name = tmp.to_owned();
        m += size as usize;
        r.read_exact(&mut buf[..1])?;
        self.event = buf[0];
        r.read_exact(&mut buf[..1])?;
        self.muted = buf[0] == 0x01;
        self.latency = Box::new(0);
        r.read_exact(&mut buf[..2])?;
        *self.latency = (u16::from(buf[0]) | (u16::from(buf[1]) << 8)) as i16;
        Ok(())
    }
}

impl Player {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut size = 6;
        size += self.name.len() + 1 * self.inventory.len();
        for v in self.titles.iter() {
            size += 2;
            size += v.len();
        }
        let mut buf = vec![0u8; size];
        let mut offset = 0;
        if self.name.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.name.len() as u8;
        buf[offset + 1] = (self.name.len() >> 8) as u8;
        offset += 2;
        buf[offset..offset + self.name.len()].copy_from_slice(self.name.as_bytes());
        offset += self.name.len();
        if self.inventory.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.inventory.len() as u8;
        buf[offset + 1] = (self.inventory.len() >> 8) as u8;
        offset += 2;
        for v in self.inventory.iter() {
            buf[offset] = *v as u8;
            offset += 1;
        }
        if self.titles.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.titles.len() as u8;
        buf[offset + 1] = (self.titles.len() >> 8) as u8;
        offset += 2;
        for v in self.titles.iter() {
            if v.len() > 0xffff {
                return Err(
                    io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
                );
            }
            buf[offset] = v.len() as u8;
            buf[offset + 1] = (v.len() >> 8) as u8;
            offset += 2;
            buf[offset..offset + v.len()].copy_from_slice(v.as_bytes());
            offset += v.len();
        }
        w.write(&buf)
    }
    pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {
        let mut buf = [0u8; 8];
        let mut size: u16;
        let mut m = 0;
        let mut c = 64;
        let mut pool = vec![0u8; c];
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        if c - m < size as usize {
            c = (size as usize).max(2 * c);
            pool = vec![0u8; c];
            m = 0;
        }
        r.read_exact(&mut pool[m..m + size as usize])?;
        let tmp = unsafe { str::from_utf8_unchecked(&pool[m..m + size as usize]) };
        self.name = tmp.to_owned();
        m += size as usize;
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        self.inventory = vec![0; size as usize];
        let si = size as usize;
        for i in 0..si {
            r.read_exact(&mut buf[..1])?;
            self.inventory[i] = buf[0];
        }
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        self.titles = vec![String::new(); size as usize];
        let si1 = size as usize;
        for i1 in 0..si1 {
            r.read_exact(&mut buf[..2])?;
            size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
            if c - m < size as usize {
                c = (size as usize).max(2 * c);
                pool = vec![0u8; c];
                m = 0;
            }
            r.read_exact(&mut pool[m..m + size as usize])?;
            let tmp1 = unsafe { str::from_utf8_unchecked(&pool[m..m + size as usize]) };
            self.titles[i1] = tmp1.to_owned();
            m += size as usize;
        }
        Ok(())
    }
}

impl Roster {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut size = 6;
        size += 1 * self.flags.len() + 1 * self.deltas.len();
        for v in self.players.iter() {
            size += 6;
            size += v.name.len() + 1 * v.inventory.len();
            for v1 in v.titles.iter() {
                size += 2;
                size += v1.len();
            }
        }
        let mut buf = vec![0u8; size];
        let mut offset = 0;
        if self.flags.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.flags.len() as u8;
        buf[offset + 1] = (self.flags.len() >> 8) as u8;
        offset += 2;
        for v in self.flags.iter() {
            buf[offset] = *v as u8;
            offset += 1;
        }
        if self.players.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.players.len() as u8;
        buf[offset + 1] = (self.players.len() >> 8) as u8;
        offset += 2;
        for v in self.players.iter() {
            if v.name.len() > 0xffff {
                return Err(
                    io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
                );
            }
            buf[offset] = v.name.len() as u8;
            buf[offset + 1] = (v.name.len() >> 8) as u8;
            offset += 2;
            buf[offset..offset + v.name.len()].copy_from_slice(v.name.as_bytes());
            offset += v.name.len();
            if v.inventory.len() > 0xffff {
                return Err(
                    io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
                );
            }
            buf[offset] = v.inventory.len() as u8;
            buf[offset + 1] = (v.inventory.len() >> 8) as u8;
            offset += 2;
            for v1 in v.inventory.iter() {
                buf[offset] = *v1 as u8;
                offset += 1;
            }
            if v.titles.len() > 0xffff {
                return Err(
                    io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
                );
            }
            buf[offset] = v.titles.len() as u8;
            buf[offset + 1] = (v.titles.len() >> 8) as u8;
            offset += 2;
            for v1 in v.titles.iter() {
                if v1.len() > 0xffff {
                    return Err(
                        io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
                    );
                }
                buf[offset] = v1.len() as u8;
                buf[offset + 1] = (v1.len() >> 8) as u8;
                offset += 2;
                buf[offset..offset + v1.len()].copy_from_slice(v1.as_bytes());
                offset += v1.len();
            }
        }
        if self.deltas.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.deltas.len() as u8;
        buf[offset + 1] = (self.deltas.len() >> 8) as u8;
        offset += 2;
        for v in self.deltas.iter() {
            buf[offset] = *v as u8;
            offset += 1;
        }
        w.write(&buf)
    }
    pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {
        let mut buf = [0u8; 8];
        let mut size: u16;
        let mut m = 0;
        let mut c = 64;
        let mut pool = vec![0u8; c];
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        self.flags = vec![0; size as usize];
        let si = size as usize;
        for i in 0..si {
            r.read_exact(&mut buf[..1])?;
            self.flags[i] = buf[0];
        }
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        self.players = vec![Player::default(); size as usize];
        let si1 = size as usize;
        for i1 in 0..si1 {
            r.read_exact(&mut buf[..2])?;
            size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
            if c - m < size as usize {
                c = (size as usize).max(2 * c);
                pool = vec![0u8; c];
                m = 0;
            }
            r.read_exact(&mut pool[m..m + size as usize])?;
            let tmp = unsafe { str::from_utf8_unchecked(&pool[m..m + size as usize]) };
            self.players[i1].name = tmp.to_owned();
            m += size as usize;
            r.read_exact(&mut buf[..2])?;
            size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
            self.players[i1].inventory = vec![0; size as usize];
            let si2 = size as usize;
            for i2 in 0..si2 {
                r.read_exact(&mut buf[..1])?;
                self.players[i1].inventory[i2] = buf[0];
            }
            r.read_exact(&mut buf[..2])?;
            size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
            self.players[i1].titles = vec![String::new(); size as usize];
            let si3 = size as usize;
            for i3 in 0..si3 {
                r.read_exact(&mut buf[..2])?;
                size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
                if c - m < size as usize {
                    c = (size as usize).max(2 * c);
                    pool = vec![0u8; c];
                    m = 0;
                }
                r.read_exact(&mut pool[m..m + size as usize])?;
                let tmp1 = unsafe { str::from_utf8_unchecked(&pool[m..m + size as usize]) };
                self.players[i1].titles[i3] = tmp1.to_owned();
                m += size as usize;
            }
        }
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        self.deltas = vec![0; size as usize];
        let si4 = size as usize;
        for i4 in 0..si4 {
            r.read_exact(&mut buf[..1])?;
            self.deltas[i4] = buf[0] as i8;
        }
        Ok(())
    }
}

impl Telemetry {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut size = 38;
        size += 4 * self.gains.len();
        let mut buf = vec![0u8; size];
        let mut offset = 0;
        buf[offset..offset + 4].copy_from_slice(&self.cpu.to_ne_bytes());
        offset += 4;
        buf[offset..offset + 8].copy_from_slice(&self.uptime.to_ne_bytes());
        offset += 8;
        buf[offset..offset + 4].copy_from_slice(&self.iq.re.to_ne_bytes());
        offset += 4;
        buf[offset..offset + 4].copy_from_slice(&self.iq.im.to_ne_bytes());
        offset += 4;
        buf[offset..offset + 8].copy_from_slice(&self.iq_wide.re.to_ne_bytes());
        offset += 8;
        buf[offset..offset + 8].copy_from_slice(&self.iq_wide.im.to_ne_bytes());
        offset += 8;
        if self.gains.len() > 0xffff {
            return Err(
                io::Error::new(io::ErrorKind::InvalidInput, "length exceeds u16 range"),
            );
        }
        buf[offset] = self.gains.len() as u8;
        buf[offset + 1] = (self.gains.len() >> 8) as u8;
        offset += 2;
        for v in self.gains.iter() {
            buf[offset..offset + 4].copy_from_slice(&v.to_ne_bytes());
            offset += 4;
        }
        w.write(&buf)
    }
    pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {
        let mut buf = [0u8; 8];
        let mut size: u16;
        r.read_exact(&mut buf[..4])?;
        self.cpu = f32::from_ne_bytes([buf[0], buf[1], buf[2], buf[3]]);
        r.read_exact(&mut buf[..8])?;
        self.uptime = f64::from_ne_bytes([
            buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
        ]);
        r.read_exact(&mut buf[..4])?;
        self.iq.re = f32::from_ne_bytes([buf[0], buf[1], buf[2], buf[3]]);
        r.read_exact(&mut buf[..4])?;
        self.iq.im = f32::from_ne_bytes([buf[0], buf[1], buf[2], buf[3]]);
        r.read_exact(&mut buf[..8])?;
        self.iq_wide.re = f64::from_ne_bytes([
            buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
        ]);
        r.read_exact(&mut buf[..8])?;
        self.iq_wide.im = f64::from_ne_bytes([
            buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
        ]);
        r.read_exact(&mut buf[..2])?;
        size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        self.gains = vec![0.0; size as usize];
        let si = size as usize;
        for i in 0..si {
            r.read_exact(&mut buf[..4])?;
            self.gains[i] = f32::from_ne_bytes([buf[0], buf[1], buf[2], buf[3]]);
        }
        Ok(())
    }
}

impl Legacy {
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut size = 4;
        let mut buf = vec![0u8; size];
        let mut offset = 0;
        buf[offset] = self.head as u8;
        buf[offset + 1] = (self.head >> 8) as u8;
        offset += 2;
        buf[offset] = self.tail as u8;
        buf[offset + 1] = (self.tail >> 8) as u8;
        offset += 2;
        w.write(&buf)
    }
    pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {
        let mut buf = [0u8; 8];
        r.read_exact(&mut buf[..2])?;
        self.head = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        r.read_exact(&mut buf[..2])?;
        self.tail = u16::from(buf[0]) | (u16::from(buf[1]) << 8);
        Ok(())
    }
}
