use binenc::{generate, Options};
use pretty_assertions::assert_eq;

fn gen(src: &str) -> String {
    generate(src, "input.rs", &Options::default())
        .expect("resolves")
        .expect("has records")
}

#[test]
fn marker_comes_first() {
    let out = gen("pub struct Ping { pub seq: u32 }");
    assert_eq!(
        out.lines().next(),
        Some("// Code generated by \"binenc-gen input.rs\"; DO NOT EDIT.")
    );
    assert!(out.contains("#![allow("));
    assert!(out.contains("use std::io::{self, Read, Write};"));
    assert!(out.contains("use super::*;"));
}

#[test]
fn slice_record_matches_known_size_expression() {
    let out = gen("pub struct Slice { pub int8_slice: Vec<i8> }");
    assert!(out.contains("impl Slice {"));
    assert!(out.contains("let mut size = 2;"));
    assert!(out.contains("size += 1 * self.int8_slice.len();"));
    assert!(out.contains("for v in self.int8_slice.iter() {"));
    assert!(out.contains("self.int8_slice = vec!["));
}

#[test]
fn string_record_pulls_in_the_cast_facility() {
    let out = gen("pub struct Banner { pub text: String }");
    assert!(out.contains("use core::str;"));
    assert!(out.contains("str::from_utf8_unchecked"));
    assert!(out.contains("pool = vec!["));
    let no_strings = gen("pub struct Ping { pub seq: u32 }");
    assert!(!no_strings.contains("use core::str;"));
    assert!(!no_strings.contains("pool"));
}

#[test]
fn every_record_of_the_file_gets_a_codec() {
    let out = gen("pub struct Player { pub name: String }\n\
                   pub struct Roster { pub players: Vec<Player> }");
    assert!(out.contains("impl Player {"));
    assert!(out.contains("impl Roster {"));
    // The nested loop in the roster's size prelude.
    assert!(out.contains("for v in self.players.iter() {"));
    assert!(out.contains("size += v.name.len();"));
}

#[test]
fn big_endian_flips_both_walkers() {
    let opts = Options {
        big_endian: true,
        ..Options::default()
    };
    let out = generate("pub struct Be { pub x: u16 }", "be.rs", &opts)
        .unwrap()
        .unwrap();
    assert!(out.contains("buf[offset] = (self.x >> 8) as u8;"));
    assert!(out.contains("buf[offset + 1] = self.x as u8;"));
    assert!(out.contains("self.x = (u16::from(buf[0]) << 8) | u16::from(buf[1]);"));
}

#[test]
fn permissive_leaves_the_field_out_of_both_methods() {
    let src = "use std::collections::HashMap;\n\
               pub struct Mixed { pub a: u8, pub m: HashMap<u8, u8>, pub b: u8 }";
    assert!(generate(src, "mixed.rs", &Options::default()).is_err());
    let opts = Options {
        permissive: true,
        ..Options::default()
    };
    let out = generate(src, "mixed.rs", &opts).unwrap().unwrap();
    assert!(!out.contains("self.m"));
    assert!(out.contains("self.a"));
    assert!(out.contains("self.b"));
}

#[test]
fn blank_fields_never_reach_the_wire() {
    let src = "use std::marker::PhantomData;\n\
               pub struct Legacy { pub head: u16, pub _pad: PhantomData<u64>, pub tail: u16 }";
    let out = gen(src);
    assert!(out.contains("let mut size = 4;"));
    assert!(!out.contains("_pad"));
}

#[test]
fn pointer_fields_allocate_on_read() {
    let out = gen("pub struct Ptr { pub p: Box<i16> }");
    assert!(out.contains("self.p = Box::new(0);"));
    assert!(out.contains("*self.p = (u16::from(buf[0]) | (u16::from(buf[1]) << 8)) as i16;"));
}

#[test]
fn platform_integers_are_rejected() {
    let err = generate("pub struct N { pub n: usize }", "n.rs", &Options::default()).unwrap_err();
    assert!(err.to_string().contains("no fixed wire width"));
}

#[test]
fn output_is_formatted() {
    // Four-space indentation is the formatter's doing; the walkers emit
    // flat text.
    let out = gen("pub struct Ping { pub seq: u32 }");
    assert!(out.contains("\n    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<usize> {"));
    assert!(out.contains("\n        offset += 4;"));
}
