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

//! Command-line driver for `binenc`. Locates the input files, runs the
//! generator and writes `<stem>_encoding.rs` next to each input that
//! declares records.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "binenc-gen",
    version,
    about = "Generates binary encode/decode methods for Rust record types."
)]
struct Cli {
    /// A Rust source file, or a directory whose source files are processed
    /// one by one.
    path: Option<PathBuf>,
    /// Skip fields with unsupported types instead of failing.
    #[arg(long)]
    permissive: bool,
    /// Emit big-endian integer codecs.
    #[arg(long)]
    big_endian: bool,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
    if let Err(err) = run(&Cli::parse()) {
        eprintln!("binenc: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let target = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let opts = binenc::Options {
        big_endian: cli.big_endian,
        permissive: cli.permissive,
    };
    for input in inputs(&target)? {
        process(&input, &opts)?;
    }
    Ok(())
}

/// The files to run over: the file itself, or every `.rs` file of the
/// directory except previously generated ones.
fn inputs(target: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !target.is_dir() {
        return Ok(vec![target.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(target)
        .with_context(|| format!("reading directory {}", target.display()))?
    {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "rs") && !is_generated(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_generated(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with("_encoding"))
}

fn process(input: &Path, opts: &binenc::Options) -> anyhow::Result<()> {
    let src = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no usable file name", input.display()))?;
    let generated = binenc::generate(&src, file_name, opts)
        .with_context(|| format!("generating for {}", input.display()))?;
    match generated {
        Some(text) => {
            let output = output_path(input)?;
            fs::write(&output, text)
                .with_context(|| format!("writing {}", output.display()))?;
            log::info!("wrote {}", output.display());
        }
        None => log::info!("no records in {}, nothing to do", input.display()),
    }
    Ok(())
}

fn output_path(input: &Path) -> anyhow::Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("{} has no usable file stem", input.display()))?;
    Ok(input.with_file_name(format!("{stem}_encoding.rs")))
}
