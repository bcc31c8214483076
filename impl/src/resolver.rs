//! Turns a parsed source file into the type trees the walkers consume.
//!
//! Every type handed to a walker is *underlying*: local `type` aliases are
//! unwrapped, named struct references are expanded inline, and only the
//! variants below remain. Field order is declaration order.

use std::collections::HashMap;

use quote::ToTokens;

use crate::Error;

/// A leaf type with a fixed encoding rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Basic {
    Int { bytes: usize, signed: bool },
    Bool,
    Str,
    Float { bytes: usize },
    Complex { bytes: usize },
}

/// A fully resolved type tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    Basic(Basic),
    /// `Box<T>`; transparent on the wire, owned allocation on read.
    Pointer(Box<ResolvedType>),
    /// `Vec<T>`; length-prefixed.
    Slice(Box<ResolvedType>),
    /// `[T; N]`; no prefix.
    Array(Box<ResolvedType>, usize),
    /// An inlined struct. Carries its name so the reader can materialize
    /// default values for owned allocations.
    Struct(Record),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// `None` for blank (`PhantomData`) fields, which occupy no bytes on the
    /// wire and are skipped by both walkers.
    pub ty: Option<ResolvedType>,
}

/// A named struct a codec pair is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,
}

/// Collects the struct and alias declarations of one file and resolves each
/// struct into a [`Record`].
pub struct Resolver {
    order: Vec<String>,
    structs: HashMap<String, syn::ItemStruct>,
    aliases: HashMap<String, syn::Type>,
    permissive: bool,
}

impl Resolver {
    pub fn new(file: &syn::File, permissive: bool) -> Self {
        let mut order = Vec::new();
        let mut structs = HashMap::new();
        let mut aliases = HashMap::new();
        for item in &file.items {
            match item {
                syn::Item::Struct(item) => {
                    if !item.generics.params.is_empty() {
                        log::warn!("skipping generic struct `{}`", item.ident);
                        continue;
                    }
                    if !matches!(item.fields, syn::Fields::Named(_)) {
                        log::warn!("skipping `{}`: records need named fields", item.ident);
                        continue;
                    }
                    order.push(item.ident.to_string());
                    structs.insert(item.ident.to_string(), item.clone());
                }
                syn::Item::Type(item) => {
                    aliases.insert(item.ident.to_string(), (*item.ty).clone());
                }
                _ => {}
            }
        }
        Self {
            order,
            structs,
            aliases,
            permissive,
        }
    }

    /// All records of the file, in declaration order.
    pub fn records(&self) -> Result<Vec<Record>, Error> {
        self.order
            .iter()
            .map(|name| {
                let mut stack = Vec::new();
                self.resolve_struct(name, &mut stack)
            })
            .collect()
    }

    fn resolve_struct(&self, name: &str, stack: &mut Vec<String>) -> Result<Record, Error> {
        if stack.iter().any(|seen| seen == name) {
            return Err(Error::Recursive(name.to_owned()));
        }
        stack.push(name.to_owned());
        let item = &self.structs[name];
        let mut fields = Vec::new();
        for field in &item.fields {
            let field_name = field
                .ident
                .as_ref()
                .expect("named fields checked at collection")
                .to_string();
            match self.resolve_type(name, &field_name, &field.ty, stack) {
                Ok(ty) => fields.push(Field {
                    name: field_name,
                    ty,
                }),
                Err(err @ (Error::PlatformInt { .. } | Error::Recursive(_))) => return Err(err),
                Err(err) if self.permissive => {
                    log::warn!("{err}; field left out of the codec");
                }
                Err(err) => return Err(err),
            }
        }
        stack.pop();
        Ok(Record {
            name: name.to_owned(),
            fields,
        })
    }

    /// Resolves one field type. `Ok(None)` marks a blank field.
    fn resolve_type(
        &self,
        record: &str,
        field: &str,
        ty: &syn::Type,
        stack: &mut Vec<String>,
    ) -> Result<Option<ResolvedType>, Error> {
        let unsupported = || Error::Unsupported {
            record: record.to_owned(),
            field: field.to_owned(),
            ty: ty.to_token_stream().to_string(),
        };
        match ty {
            syn::Type::Path(path) if path.qself.is_none() => {
                let segment = path.path.segments.last().ok_or_else(unsupported)?;
                let ident = segment.ident.to_string();
                match &segment.arguments {
                    syn::PathArguments::None => {
                        self.resolve_ident(record, field, &ident, stack, unsupported)
                    }
                    syn::PathArguments::AngleBracketed(args) => {
                        if ident == "PhantomData" {
                            return Ok(None);
                        }
                        let inner = args
                            .args
                            .iter()
                            .find_map(|arg| match arg {
                                syn::GenericArgument::Type(ty) => Some(ty),
                                _ => None,
                            })
                            .ok_or_else(unsupported)?;
                        let elem = self
                            .resolve_type(record, field, inner, stack)?
                            .ok_or_else(unsupported)?;
                        match ident.as_str() {
                            "Vec" => Ok(Some(ResolvedType::Slice(Box::new(elem)))),
                            "Box" => Ok(Some(ResolvedType::Pointer(Box::new(elem)))),
                            _ => Err(unsupported()),
                        }
                    }
                    syn::PathArguments::Parenthesized(_) => Err(unsupported()),
                }
            }
            syn::Type::Array(array) => {
                let elem = self
                    .resolve_type(record, field, &array.elem, stack)?
                    .ok_or_else(unsupported)?;
                let len = match &array.len {
                    syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Int(lit),
                        ..
                    }) => lit.base10_parse::<usize>().map_err(|_| unsupported())?,
                    _ => return Err(unsupported()),
                };
                Ok(Some(ResolvedType::Array(Box::new(elem), len)))
            }
            _ => Err(unsupported()),
        }
    }

    fn resolve_ident(
        &self,
        record: &str,
        field: &str,
        ident: &str,
        stack: &mut Vec<String>,
        unsupported: impl Fn() -> Error,
    ) -> Result<Option<ResolvedType>, Error> {
        let basic = |b| Ok(Some(ResolvedType::Basic(b)));
        match ident {
            "u8" => basic(Basic::Int {
                bytes: 1,
                signed: false,
            }),
            "u16" => basic(Basic::Int {
                bytes: 2,
                signed: false,
            }),
            "u32" => basic(Basic::Int {
                bytes: 4,
                signed: false,
            }),
            "u64" => basic(Basic::Int {
                bytes: 8,
                signed: false,
            }),
            "i8" => basic(Basic::Int {
                bytes: 1,
                signed: true,
            }),
            "i16" => basic(Basic::Int {
                bytes: 2,
                signed: true,
            }),
            "i32" => basic(Basic::Int {
                bytes: 4,
                signed: true,
            }),
            "i64" => basic(Basic::Int {
                bytes: 8,
                signed: true,
            }),
            "bool" => basic(Basic::Bool),
            "String" => basic(Basic::Str),
            "f32" => basic(Basic::Float { bytes: 4 }),
            "f64" => basic(Basic::Float { bytes: 8 }),
            "Complex32" => basic(Basic::Complex { bytes: 8 }),
            "Complex64" => basic(Basic::Complex { bytes: 16 }),
            "usize" | "isize" => Err(Error::PlatformInt {
                record: record.to_owned(),
                field: field.to_owned(),
            }),
            other => {
                if let Some(aliased) = self.aliases.get(other) {
                    if stack.iter().any(|seen| seen == other) {
                        return Err(Error::Recursive(other.to_owned()));
                    }
                    stack.push(other.to_owned());
                    let resolved = self.resolve_type(record, field, aliased, stack);
                    stack.pop();
                    return resolved;
                }
                if self.structs.contains_key(other) {
                    let inner = self.resolve_struct(other, stack)?;
                    return Ok(Some(ResolvedType::Struct(inner)));
                }
                Err(unsupported())
            }
        }
    }
}
