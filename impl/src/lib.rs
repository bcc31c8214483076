// MIT License
//
// Copyright (c) 2019 Lukas Lueg (lukas.lueg@gmail.com)
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! `binenc` generates binary encode/decode methods for Rust record types.
//!
//! Given a source file declaring plain structs, it produces a sibling module
//! with two inherent methods per struct: `write_to`, which encodes the
//! receiver into a single exactly-sized buffer and hands it to an
//! `io::Write` in one call, and `read_from`, which decodes from an
//! `io::Read`. The generated code is unrolled per field; there is no
//! reflection and no dispatch, and it is intended to keep up with
//! hand-written codecs.
//!
//! ```
//! let src = "pub struct Ping { pub seq: u32, pub payload: Vec<u8> }";
//! let out = binenc::generate(src, "ping.rs", &binenc::Options::default())
//!     .unwrap()
//!     .unwrap();
//! assert!(out.starts_with("// Code generated by \"binenc-gen ping.rs\"; DO NOT EDIT."));
//! assert!(out.contains("pub fn write_to"));
//! assert!(out.contains("pub fn read_from"));
//! ```
//!
//! The wire format is little-endian by default, without framing or tags:
//! integers as their little-endian bytes (signed via two's complement),
//! `bool` as one byte, `String` and `Vec<T>` behind a 16-bit length prefix,
//! `[T; N]` inline without a prefix, `Box<T>` transparently, floats and
//! complex numbers as their raw bits in host memory order. The decoder
//! trusts the schema to match the encoder.
//!
//! What callers of the generated code must provide:
//!
//! * The generated module opens with `use super::*;` and is meant to be
//!   declared next to a module that has the record types in scope.
//! * Record types reached through `Vec` or `Box` must implement `Default`
//!   (and `Clone` inside a `Vec`): collections are materialized up front and
//!   filled in place.
//! * Strings and slices longer than 65535 make `write_to` fail with
//!   `InvalidInput` rather than truncate the prefix.

mod emit;
mod frames;
mod method;
mod read;
pub mod resolver;
mod write;

use read::HeaderFlags;
use resolver::Resolver;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parsing input: {0}")]
    Parse(#[from] syn::Error),
    #[error("unsupported type `{ty}` for field `{record}.{field}`")]
    Unsupported {
        record: String,
        field: String,
        ty: String,
    },
    #[error("field `{record}.{field}` has no fixed wire width; use an explicit-width integer")]
    PlatformInt { record: String, field: String },
    #[error("record `{0}` contains itself; inline expansion cannot terminate")]
    Recursive(String),
}

#[derive(Debug, Default, Clone)]
pub struct Options {
    /// Emit big-endian integer codecs. Fixed at generation time.
    pub big_endian: bool,
    /// Skip fields with unsupported types instead of failing. The resulting
    /// codec ignores those fields on both sides.
    pub permissive: bool,
}

impl Options {
    fn endian(&self) -> emit::Endianness {
        if self.big_endian {
            emit::Endianness::Big
        } else {
            emit::Endianness::Little
        }
    }
}

/// Collects the codecs of one output file and assembles the final source
/// text: marker comment, lint allowances, import list, methods.
pub struct Generator {
    opts: Options,
    methods: String,
    flags: HeaderFlags,
    records: usize,
}

impl Generator {
    pub fn new(opts: &Options) -> Self {
        Self {
            opts: opts.clone(),
            methods: String::new(),
            flags: HeaderFlags::default(),
            records: 0,
        }
    }

    /// Resolves the records of `src` and appends their codecs.
    pub fn add_source(&mut self, src: &str) -> Result<(), Error> {
        let file = syn::parse_file(src)?;
        let records = Resolver::new(&file, self.opts.permissive).records()?;
        for record in &records {
            let (text, flags) = method::record_impl(record, self.opts.endian());
            self.methods.push_str(&text);
            self.methods.push('\n');
            self.flags.merge(flags);
            self.records += 1;
        }
        Ok(())
    }

    /// The finished file, or `None` when no records were added. `invocation`
    /// lands in the generated-code marker, the way the original command line
    /// would.
    pub fn finish(self, invocation: &str) -> Option<String> {
        if self.records == 0 {
            return None;
        }
        let mut text = String::new();
        text.push_str(
            "#![allow(unused_mut, unused_variables, unused_assignments, clippy::identity_op, clippy::unnecessary_cast)]\n\n",
        );
        text.push_str("use std::io::{self, Read, Write};\n");
        if self.flags.needs_unsafe_cast {
            text.push_str("use core::str;\n");
        }
        text.push_str("\nuse super::*;\n\n");
        text.push_str(&self.methods);
        let formatted = format_source(&text);
        Some(format!(
            "// Code generated by \"binenc-gen {invocation}\"; DO NOT EDIT.\n\n{formatted}"
        ))
    }
}

/// Runs the emitted text through the canonical formatter. Text that fails to
/// parse is handed back as-is so it still lands on disk as a debugging hint.
fn format_source(text: &str) -> String {
    match syn::parse_file(text) {
        Ok(ast) => prettyplease::unparse(&ast),
        Err(err) => {
            log::warn!("generated code does not parse: {err}");
            log::warn!("writing it unformatted; compile the target crate to analyze");
            text.to_owned()
        }
    }
}

/// Generates the codec module for one source file.
pub fn generate(src: &str, invocation: &str, opts: &Options) -> Result<Option<String>, Error> {
    let mut generator = Generator::new(opts);
    generator.add_source(src)?;
    Ok(generator.finish(invocation))
}
