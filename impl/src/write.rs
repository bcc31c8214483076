//! Emits the body of `write_to` and, through the frame stack, the size
//! prelude that precedes the buffer allocation.
//!
//! The emission order of the body must match the accumulation order of the
//! prelude exactly; a field reordered in one but not the other corrupts the
//! stream.

use crate::emit::{emitln, index, length, rshift, suffix, unsigned_cast, Emitter, Endianness};
use crate::frames::{FrameKind, FrameStack};
use crate::resolver::{Basic, Record, ResolvedType};

pub struct WriteWalker {
    body: Emitter,
    frames: FrameStack,
    endian: Endianness,
    /// Loop nesting depth, pushed and popped; collections are consumed by
    /// iteration here, so sibling loops may reuse a variable name.
    depth: usize,
}

impl WriteWalker {
    pub fn new(endian: Endianness) -> Self {
        Self {
            body: Emitter::new(),
            frames: FrameStack::new(),
            endian,
            depth: 0,
        }
    }

    pub fn walk_record(&mut self, record: &Record) {
        for field in &record.fields {
            if let Some(ty) = &field.ty {
                self.field(&format!("self.{}", field.name), ty, 0);
            }
        }
        self.frames.pop_frame(FrameKind::Root);
    }

    /// `(size_prelude, body)`.
    pub fn finish(self) -> (String, String) {
        (self.frames.into_prelude(), self.body.into_string())
    }

    /// `place` is a place-expression of the field's type behind `deref`
    /// references; method calls and field access auto-deref, value uses
    /// need explicit stars.
    fn field(&mut self, place: &str, ty: &ResolvedType, deref: usize) {
        match ty {
            ResolvedType::Basic(Basic::Int { bytes, signed }) => {
                self.integer(place, deref, *bytes, *signed);
            }
            ResolvedType::Basic(Basic::Bool) => self.boolean(place, deref),
            ResolvedType::Basic(Basic::Str) => self.string(place),
            ResolvedType::Basic(Basic::Float { bytes }) => self.float(place, *bytes),
            ResolvedType::Basic(Basic::Complex { bytes }) => {
                self.float(&format!("{place}.re"), bytes / 2);
                self.float(&format!("{place}.im"), bytes / 2);
            }
            ResolvedType::Pointer(elem) => self.field(place, elem, deref + 1),
            ResolvedType::Slice(elem) => self.slice(place, elem),
            ResolvedType::Array(elem, len) => self.array(place, elem, *len),
            ResolvedType::Struct(inner) => {
                for field in &inner.fields {
                    if let Some(ty) = &field.ty {
                        self.field(&format!("{place}.{}", field.name), ty, 0);
                    }
                }
            }
        }
    }

    fn value(place: &str, deref: usize) -> String {
        format!("{}{place}", "*".repeat(deref))
    }

    fn integer(&mut self, place: &str, deref: usize, bytes: usize, signed: bool) {
        let val = Self::value(place, deref);
        // A one-byte store truncates on its own; wider signed sources are
        // reinterpreted at full width first so the shifts see the
        // two's-complement pattern.
        let src = if signed && bytes > 1 {
            unsigned_cast(&val, bytes * 8)
        } else {
            val
        };
        self.number(&src, bytes);
    }

    /// Unrolled per-byte stores of an unsigned-ready source expression.
    fn number(&mut self, src: &str, bytes: usize) {
        for (pos, shift) in self.endian.byte_shifts(bytes) {
            emitln!(self.body, "buf[{}] = {} as u8;", index(pos), rshift(src, shift));
        }
        emitln!(self.body, "offset += {bytes};");
        self.frames.add_static(bytes);
    }

    fn boolean(&mut self, place: &str, deref: usize) {
        let val = Self::value(place, deref);
        emitln!(self.body, "buf[{}] = if {val} {{ 0x01 }} else {{ 0x00 }};", index(0));
        emitln!(self.body, "offset += 1;");
        self.frames.add_static(1);
    }

    /// The 16-bit wire prefix cannot carry more; refuse instead of
    /// truncating silently.
    fn guard(&mut self, place: &str) {
        emitln!(self.body, "if {} > 0xffff {{", length(place));
        emitln!(
            self.body,
            "return Err(io::Error::new(io::ErrorKind::InvalidInput, \"length exceeds u16 range\"));"
        );
        emitln!(self.body, "}}");
    }

    fn string(&mut self, place: &str) {
        self.guard(place);
        self.number(&length(place), 2);
        self.frames.add_dynamic(length(place));
        emitln!(
            self.body,
            "buf[offset..offset + {}].copy_from_slice({place}.as_bytes());",
            length(place)
        );
        emitln!(self.body, "offset += {};", length(place));
    }

    fn float(&mut self, place: &str, bytes: usize) {
        emitln!(
            self.body,
            "buf[offset..offset + {bytes}].copy_from_slice(&{place}.to_ne_bytes());"
        );
        emitln!(self.body, "offset += {bytes};");
        self.frames.add_static(bytes);
    }

    fn slice(&mut self, place: &str, elem: &ResolvedType) {
        self.guard(place);
        self.number(&length(place), 2);
        let var = format!("v{}", suffix(self.depth));
        self.frames.push_frame();
        emitln!(self.body, "for {var} in {place}.iter() {{");
        self.depth += 1;
        self.field(&var, elem, 1);
        self.depth -= 1;
        self.frames.pop_frame(FrameKind::Slice { place, var: &var });
        emitln!(self.body, "}}");
    }

    fn array(&mut self, place: &str, elem: &ResolvedType, len: usize) {
        let var = format!("i{}", suffix(self.depth));
        self.frames.push_frame();
        emitln!(self.body, "for {var} in 0..{len} {{");
        self.depth += 1;
        self.field(&format!("{place}[{var}]"), elem, 0);
        self.depth -= 1;
        self.frames.pop_frame(FrameKind::Array { len, var: &var });
        emitln!(self.body, "}}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Field;
    use pretty_assertions::assert_eq;

    fn record(fields: Vec<(&str, ResolvedType)>) -> Record {
        Record {
            name: "T".to_owned(),
            fields: fields
                .into_iter()
                .map(|(name, ty)| Field {
                    name: name.to_owned(),
                    ty: Some(ty),
                })
                .collect(),
        }
    }

    fn walk(record: &Record) -> (String, String) {
        let mut w = WriteWalker::new(Endianness::Little);
        w.walk_record(record);
        w.finish()
    }

    #[test]
    fn unsigned_integer_stores() {
        let rec = record(vec![(
            "x",
            ResolvedType::Basic(Basic::Int {
                bytes: 4,
                signed: false,
            }),
        )]);
        let (prelude, body) = walk(&rec);
        assert_eq!(prelude, "let mut size = 4;\n");
        assert_eq!(
            body,
            "buf[offset] = self.x as u8;\n\
             buf[offset + 1] = (self.x >> 8) as u8;\n\
             buf[offset + 2] = (self.x >> 16) as u8;\n\
             buf[offset + 3] = (self.x >> 24) as u8;\n\
             offset += 4;\n"
        );
    }

    #[test]
    fn signed_integer_reinterprets_then_shifts() {
        let rec = record(vec![(
            "x",
            ResolvedType::Basic(Basic::Int {
                bytes: 2,
                signed: true,
            }),
        )]);
        let (_, body) = walk(&rec);
        assert_eq!(
            body,
            "buf[offset] = self.x as u16 as u8;\n\
             buf[offset + 1] = (self.x as u16 >> 8) as u8;\n\
             offset += 2;\n"
        );
    }

    #[test]
    fn single_byte_signed_truncates_directly() {
        let rec = record(vec![(
            "x",
            ResolvedType::Basic(Basic::Int {
                bytes: 1,
                signed: true,
            }),
        )]);
        let (_, body) = walk(&rec);
        assert_eq!(body, "buf[offset] = self.x as u8;\noffset += 1;\n");
    }

    #[test]
    fn big_endian_reverses_the_stores() {
        let rec = record(vec![(
            "x",
            ResolvedType::Basic(Basic::Int {
                bytes: 2,
                signed: false,
            }),
        )]);
        let mut w = WriteWalker::new(Endianness::Big);
        w.walk_record(&rec);
        let (_, body) = w.finish();
        assert_eq!(
            body,
            "buf[offset] = (self.x >> 8) as u8;\n\
             buf[offset + 1] = self.x as u8;\n\
             offset += 2;\n"
        );
    }

    #[test]
    fn string_emits_prefix_copy_and_advance() {
        let rec = record(vec![("s", ResolvedType::Basic(Basic::Str))]);
        let (prelude, body) = walk(&rec);
        assert_eq!(prelude, "let mut size = 2;\nsize += self.s.len();\n");
        assert_eq!(
            body,
            "if self.s.len() > 0xffff {\n\
             return Err(io::Error::new(io::ErrorKind::InvalidInput, \"length exceeds u16 range\"));\n\
             }\n\
             buf[offset] = self.s.len() as u8;\n\
             buf[offset + 1] = (self.s.len() >> 8) as u8;\n\
             offset += 2;\n\
             buf[offset..offset + self.s.len()].copy_from_slice(self.s.as_bytes());\n\
             offset += self.s.len();\n"
        );
    }

    #[test]
    fn slice_of_int8_matches_known_size_expression() {
        let rec = record(vec![(
            "int8_slice",
            ResolvedType::Slice(Box::new(ResolvedType::Basic(Basic::Int {
                bytes: 1,
                signed: true,
            }))),
        )]);
        let (prelude, body) = walk(&rec);
        assert_eq!(
            prelude,
            "let mut size = 2;\nsize += 1 * self.int8_slice.len();\n"
        );
        assert_eq!(
            body,
            "if self.int8_slice.len() > 0xffff {\n\
             return Err(io::Error::new(io::ErrorKind::InvalidInput, \"length exceeds u16 range\"));\n\
             }\n\
             buf[offset] = self.int8_slice.len() as u8;\n\
             buf[offset + 1] = (self.int8_slice.len() >> 8) as u8;\n\
             offset += 2;\n\
             for v in self.int8_slice.iter() {\n\
             buf[offset] = *v as u8;\n\
             offset += 1;\n\
             }\n"
        );
    }

    #[test]
    fn array_has_no_prefix() {
        let rec = record(vec![(
            "arr",
            ResolvedType::Array(
                Box::new(ResolvedType::Basic(Basic::Int {
                    bytes: 1,
                    signed: false,
                })),
                4,
            ),
        )]);
        let (prelude, body) = walk(&rec);
        assert_eq!(prelude, "let mut size = 4;\n");
        assert_eq!(
            body,
            "for i in 0..4 {\n\
             buf[offset] = self.arr[i] as u8;\n\
             offset += 1;\n\
             }\n"
        );
    }

    #[test]
    fn pointer_is_transparent() {
        let rec = record(vec![(
            "p",
            ResolvedType::Pointer(Box::new(ResolvedType::Basic(Basic::Int {
                bytes: 2,
                signed: true,
            }))),
        )]);
        let (prelude, body) = walk(&rec);
        assert_eq!(prelude, "let mut size = 2;\n");
        assert_eq!(
            body,
            "buf[offset] = *self.p as u16 as u8;\n\
             buf[offset + 1] = (*self.p as u16 >> 8) as u8;\n\
             offset += 2;\n"
        );
    }

    #[test]
    fn sibling_loops_reuse_the_variable() {
        let u8_slice = || {
            ResolvedType::Slice(Box::new(ResolvedType::Basic(Basic::Int {
                bytes: 1,
                signed: false,
            })))
        };
        let rec = record(vec![("a", u8_slice()), ("b", u8_slice())]);
        let (_, body) = walk(&rec);
        assert_eq!(body.matches("for v in ").count(), 2);
        assert!(!body.contains("for v1 in "));
    }

    #[test]
    fn nested_struct_fields_emit_in_declaration_order() {
        let inner = Record {
            name: "Inner".to_owned(),
            fields: vec![
                Field {
                    name: "a".to_owned(),
                    ty: Some(ResolvedType::Basic(Basic::Int {
                        bytes: 1,
                        signed: false,
                    })),
                },
                Field {
                    name: "pad".to_owned(),
                    ty: None,
                },
                Field {
                    name: "b".to_owned(),
                    ty: Some(ResolvedType::Basic(Basic::Int {
                        bytes: 1,
                        signed: false,
                    })),
                },
            ],
        };
        let rec = record(vec![("inner", ResolvedType::Struct(inner))]);
        let (prelude, body) = walk(&rec);
        assert_eq!(prelude, "let mut size = 2;\n");
        assert_eq!(
            body,
            "buf[offset] = self.inner.a as u8;\n\
             offset += 1;\n\
             buf[offset] = self.inner.b as u8;\n\
             offset += 1;\n"
        );
    }
}
