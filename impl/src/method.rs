//! Wires one record through both walkers and assembles the finished
//! `impl` block.

use crate::emit::{emitln, Emitter, Endianness};
use crate::read::{HeaderFlags, ReadWalker};
use crate::resolver::Record;
use crate::write::WriteWalker;

/// The codec pair for one record, plus the capability bits the file
/// assembler folds into the import list.
pub fn record_impl(record: &Record, endian: Endianness) -> (String, HeaderFlags) {
    let mut out = Emitter::new();
    emitln!(out, "impl {} {{", record.name);

    let mut writer = WriteWalker::new(endian);
    writer.walk_record(record);
    let (prelude, write_body) = writer.finish();
    emitln!(
        out,
        "pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {{"
    );
    out.raw(&prelude);
    emitln!(out, "let mut buf = vec![0u8; size];");
    emitln!(out, "let mut offset = 0;");
    out.raw(&write_body);
    emitln!(out, "w.write(&buf)");
    emitln!(out, "}}");

    let mut reader = ReadWalker::new(endian);
    reader.walk_record(record);
    let (read_body, flags) = reader.finish();
    emitln!(
        out,
        "pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {{"
    );
    out.raw(&flags.declarations());
    out.raw(&read_body);
    emitln!(out, "Ok(())");
    emitln!(out, "}}");

    emitln!(out, "}}");
    (out.into_string(), flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{Basic, Field, ResolvedType};
    use pretty_assertions::assert_eq;

    #[test]
    fn assembles_both_methods() {
        let record = Record {
            name: "Slice".to_owned(),
            fields: vec![Field {
                name: "int8_slice".to_owned(),
                ty: Some(ResolvedType::Slice(Box::new(ResolvedType::Basic(
                    Basic::Int {
                        bytes: 1,
                        signed: true,
                    },
                )))),
            }],
        };
        let (text, flags) = record_impl(&record, Endianness::Little);
        assert_eq!(
            text,
            "impl Slice {\n\
             pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {\n\
             let mut size = 2;\n\
             size += 1 * self.int8_slice.len();\n\
             let mut buf = vec![0u8; size];\n\
             let mut offset = 0;\n\
             if self.int8_slice.len() > 0xffff {\n\
             return Err(io::Error::new(io::ErrorKind::InvalidInput, \"length exceeds u16 range\"));\n\
             }\n\
             buf[offset] = self.int8_slice.len() as u8;\n\
             buf[offset + 1] = (self.int8_slice.len() >> 8) as u8;\n\
             offset += 2;\n\
             for v in self.int8_slice.iter() {\n\
             buf[offset] = *v as u8;\n\
             offset += 1;\n\
             }\n\
             w.write(&buf)\n\
             }\n\
             pub fn read_from<R: Read>(&mut self, r: &mut R) -> io::Result<()> {\n\
             let mut buf = [0u8; 8];\n\
             let mut size: u16;\n\
             r.read_exact(&mut buf[..2])?;\n\
             size = u16::from(buf[0]) | (u16::from(buf[1]) << 8);\n\
             self.int8_slice = vec![0; size as usize];\n\
             let si = size as usize;\n\
             for i in 0..si {\n\
             r.read_exact(&mut buf[..1])?;\n\
             self.int8_slice[i] = buf[0] as i8;\n\
             }\n\
             Ok(())\n\
             }\n\
             }\n"
        );
        assert!(flags.needs_scratch && flags.needs_size);
        assert!(!flags.needs_pool && !flags.needs_unsafe_cast);
    }

    #[test]
    fn empty_record_degenerates_cleanly() {
        let record = Record {
            name: "Nothing".to_owned(),
            fields: Vec::new(),
        };
        let (text, flags) = record_impl(&record, Endianness::Little);
        assert!(text.contains("let mut size = 0;"));
        assert!(text.contains("Ok(())"));
        assert_eq!(flags, HeaderFlags::default());
    }
}
