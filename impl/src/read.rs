//! Emits the body of `read_from` and tracks which declarations the header
//! block above it needs.
//!
//! Scalars and length prefixes pass through a fixed 8-byte scratch buffer.
//! Strings stage through a doubling pool; each decoded string is copied out
//! of the pool into its own allocation, so a pool reallocation never touches
//! strings decoded earlier.

use crate::emit::{emitln, suffix, Emitter, Endianness};
use crate::resolver::{Basic, Record, ResolvedType};

/// Capability bits accumulated while walking; they decide the declarations
/// in front of the body and the imports of the finished file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFlags {
    pub needs_scratch: bool,
    pub needs_size: bool,
    pub needs_pool: bool,
    pub needs_unsafe_cast: bool,
}

impl HeaderFlags {
    pub fn merge(&mut self, other: HeaderFlags) {
        self.needs_scratch |= other.needs_scratch;
        self.needs_size |= other.needs_size;
        self.needs_pool |= other.needs_pool;
        self.needs_unsafe_cast |= other.needs_unsafe_cast;
    }

    /// The header block. Later declarations reference earlier ones, so the
    /// order is fixed.
    pub fn declarations(&self) -> String {
        let mut out = String::new();
        if self.needs_scratch {
            out.push_str("let mut buf = [0u8; 8];\n");
        }
        if self.needs_size {
            out.push_str("let mut size: u16;\n");
        }
        if self.needs_pool {
            out.push_str("let mut m = 0;\nlet mut c = 64;\nlet mut pool = vec![0u8; c];\n");
        }
        out
    }
}

pub struct ReadWalker {
    body: Emitter,
    endian: Endianness,
    /// Loop counter; never decremented, so sibling loops anywhere in the
    /// method cannot shadow each other's index or size cache.
    counter: usize,
    strings: usize,
    flags: HeaderFlags,
}

impl ReadWalker {
    pub fn new(endian: Endianness) -> Self {
        Self {
            body: Emitter::new(),
            endian,
            counter: 0,
            strings: 0,
            flags: HeaderFlags::default(),
        }
    }

    pub fn walk_record(&mut self, record: &Record) {
        for field in &record.fields {
            if let Some(ty) = &field.ty {
                self.field(&format!("self.{}", field.name), ty, 0);
            }
        }
    }

    pub fn finish(self) -> (String, HeaderFlags) {
        (self.body.into_string(), self.flags)
    }

    fn store(place: &str, deref: usize) -> String {
        format!("{}{place}", "*".repeat(deref))
    }

    fn field(&mut self, place: &str, ty: &ResolvedType, deref: usize) {
        match ty {
            ResolvedType::Basic(Basic::Int { bytes, signed }) => {
                self.integer(place, deref, *bytes, *signed);
            }
            ResolvedType::Basic(Basic::Bool) => {
                self.flags.needs_scratch = true;
                emitln!(self.body, "r.read_exact(&mut buf[..1])?;");
                emitln!(self.body, "{} = buf[0] == 0x01;", Self::store(place, deref));
            }
            ResolvedType::Basic(Basic::Str) => self.string(place, deref),
            ResolvedType::Basic(Basic::Float { bytes }) => self.float(place, deref, *bytes),
            ResolvedType::Basic(Basic::Complex { bytes }) => {
                // Field access auto-derefs, so the components need no stars.
                self.float(&format!("{place}.re"), 0, bytes / 2);
                self.float(&format!("{place}.im"), 0, bytes / 2);
            }
            ResolvedType::Pointer(elem) => {
                emitln!(
                    self.body,
                    "{} = Box::new({});",
                    Self::store(place, deref),
                    default_expr(elem)
                );
                self.field(place, elem, deref + 1);
            }
            ResolvedType::Slice(elem) => self.slice(place, elem, deref),
            ResolvedType::Array(elem, len) => {
                let var = format!("i{}", suffix(self.counter));
                self.counter += 1;
                emitln!(self.body, "for {var} in 0..{len} {{");
                self.field(&format!("{place}[{var}]"), elem, 0);
                emitln!(self.body, "}}");
            }
            ResolvedType::Struct(inner) => {
                for field in &inner.fields {
                    if let Some(ty) = &field.ty {
                        self.field(&format!("{place}.{}", field.name), ty, 0);
                    }
                }
            }
        }
    }

    /// Shift-or reconstruction of an unsigned value from the scratch buffer.
    fn recompose(&self, bytes: usize) -> String {
        let bits = bytes * 8;
        let terms: Vec<_> = self
            .endian
            .byte_shifts(bytes)
            .map(|(pos, shift)| {
                if shift == 0 {
                    format!("u{bits}::from(buf[{pos}])")
                } else {
                    format!("(u{bits}::from(buf[{pos}]) << {shift})")
                }
            })
            .collect();
        terms.join(" | ")
    }

    fn integer(&mut self, place: &str, deref: usize, bytes: usize, signed: bool) {
        self.flags.needs_scratch = true;
        emitln!(self.body, "r.read_exact(&mut buf[..{bytes}])?;");
        let expr = match (bytes, signed) {
            (1, false) => "buf[0]".to_owned(),
            (1, true) => "buf[0] as i8".to_owned(),
            (_, false) => self.recompose(bytes),
            (_, true) => format!("({}) as i{}", self.recompose(bytes), bytes * 8),
        };
        emitln!(self.body, "{} = {expr};", Self::store(place, deref));
    }

    /// Reads the 2-byte prefix of a string or slice into `size`.
    fn read_len(&mut self) {
        self.flags.needs_scratch = true;
        self.flags.needs_size = true;
        emitln!(self.body, "r.read_exact(&mut buf[..2])?;");
        let terms: Vec<_> = self
            .endian
            .byte_shifts(2)
            .map(|(pos, shift)| {
                if shift == 0 {
                    format!("u16::from(buf[{pos}])")
                } else {
                    format!("(u16::from(buf[{pos}]) << {shift})")
                }
            })
            .collect();
        emitln!(self.body, "size = {};", terms.join(" | "));
    }

    fn float(&mut self, place: &str, deref: usize, bytes: usize) {
        self.flags.needs_scratch = true;
        emitln!(self.body, "r.read_exact(&mut buf[..{bytes}])?;");
        let list: Vec<_> = (0..bytes).map(|i| format!("buf[{i}]")).collect();
        emitln!(
            self.body,
            "{} = f{}::from_ne_bytes([{}]);",
            Self::store(place, deref),
            bytes * 8,
            list.join(", ")
        );
    }

    fn string(&mut self, place: &str, deref: usize) {
        self.read_len();
        self.flags.needs_pool = true;
        self.flags.needs_unsafe_cast = true;
        // Doubling growth; the old buffer is dropped, which is fine because
        // strings decoded so far own their bytes.
        emitln!(self.body, "if c - m < size as usize {{");
        emitln!(self.body, "c = (size as usize).max(2 * c);");
        emitln!(self.body, "pool = vec![0u8; c];");
        emitln!(self.body, "m = 0;");
        emitln!(self.body, "}}");
        emitln!(self.body, "r.read_exact(&mut pool[m..m + size as usize])?;");
        let tmp = format!("tmp{}", suffix(self.strings));
        self.strings += 1;
        emitln!(
            self.body,
            "let {tmp} = unsafe {{ str::from_utf8_unchecked(&pool[m..m + size as usize]) }};"
        );
        emitln!(self.body, "{} = {tmp}.to_owned();", Self::store(place, deref));
        emitln!(self.body, "m += size as usize;");
    }

    fn slice(&mut self, place: &str, elem: &ResolvedType, deref: usize) {
        self.read_len();
        emitln!(
            self.body,
            "{} = vec![{}; size as usize];",
            Self::store(place, deref),
            default_expr(elem)
        );
        let idx = format!("i{}", suffix(self.counter));
        let cache = format!("si{}", suffix(self.counter));
        self.counter += 1;
        // `size` is clobbered by nested prefix reads, so the bound is cached.
        emitln!(self.body, "let {cache} = size as usize;");
        emitln!(self.body, "for {idx} in 0..{cache} {{");
        self.field(&format!("{place}[{idx}]"), elem, 0);
        emitln!(self.body, "}}");
    }
}

/// A value to materialize before the bytes for it have been read. Records
/// reached through owned allocations must implement `Default` (and `Clone`
/// when they sit in a slice); the crate documentation spells this out.
pub fn default_expr(ty: &ResolvedType) -> String {
    match ty {
        ResolvedType::Basic(Basic::Int { .. }) => "0".to_owned(),
        ResolvedType::Basic(Basic::Bool) => "false".to_owned(),
        ResolvedType::Basic(Basic::Float { .. }) => "0.0".to_owned(),
        ResolvedType::Basic(Basic::Complex { bytes: 8 }) => {
            "num_complex::Complex32::new(0.0, 0.0)".to_owned()
        }
        ResolvedType::Basic(Basic::Complex { .. }) => {
            "num_complex::Complex64::new(0.0, 0.0)".to_owned()
        }
        ResolvedType::Basic(Basic::Str) => "String::new()".to_owned(),
        ResolvedType::Pointer(elem) => format!("Box::new({})", default_expr(elem)),
        ResolvedType::Slice(_) => "Vec::new()".to_owned(),
        ResolvedType::Array(elem, len) => {
            if is_copy(elem) {
                format!("[{}; {len}]", default_expr(elem))
            } else {
                format!("std::array::from_fn(|_| {})", default_expr(elem))
            }
        }
        ResolvedType::Struct(inner) => format!("{}::default()", inner.name),
    }
}

fn is_copy(ty: &ResolvedType) -> bool {
    match ty {
        ResolvedType::Basic(basic) => !matches!(basic, Basic::Str),
        ResolvedType::Array(elem, _) => is_copy(elem),
        _ => false,
    }
}
