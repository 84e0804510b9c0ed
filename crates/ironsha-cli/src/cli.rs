// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{info, warn};

use ironsha::{Digest, Variant, digest};
use ironsha_util::{bytes_to_binary, bytes_to_hex, hex_to_bytes, is_latin1, latin1_bytes};

#[derive(Debug, Parser)]
#[command(name = "ironsha", version, about = "SHA-512 family digests (FIPS 180-4)")]
pub struct Args {
    /// Messages to hash. With none, the empty message is hashed.
    pub inputs: Vec<String>,

    /// Digest variant(s): 224, 256, 384, 512 or names like sha384, sha512/256.
    #[arg(
        short = 'a',
        long = "variant",
        value_delimiter = ',',
        default_value = "512"
    )]
    pub variants: Vec<Variant>,

    /// How text inputs become bytes.
    #[arg(short, long, value_enum, default_value_t = Encoding::Latin1)]
    pub encoding: Encoding,

    /// Treat inputs as hex-encoded bytes instead of text.
    #[arg(short = 'x', long)]
    pub hex_input: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Hex)]
    pub format: Format,

    /// Always print "NAME (input) = digest" lines.
    #[arg(long)]
    pub tag: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Text-to-bytes conversion for text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// Low 8 bits of each character
    Latin1,
    /// UTF-8 bytes
    Utf8,
}

/// Digest rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Lowercase hex
    Hex,
    /// Binary digits, `_` between nibbles, two spaces between bytes
    Binary,
}

impl Args {
    /// Inputs to hash; a single empty message when none were given.
    fn messages(&self) -> Vec<&str> {
        if self.inputs.is_empty() {
            vec![""]
        } else {
            self.inputs.iter().map(String::as_str).collect()
        }
    }

    /// Converts one input to the bytes that get hashed.
    pub fn message_bytes(&self, input: &str) -> Result<Vec<u8>> {
        if self.hex_input {
            return hex_to_bytes(input).with_context(|| format!("invalid hex input {input:?}"));
        }

        match self.encoding {
            Encoding::Utf8 => Ok(input.as_bytes().to_vec()),
            Encoding::Latin1 => {
                if !is_latin1(input) {
                    warn!(input, "input has characters above U+00FF; latin1 conversion is lossy");
                }
                Ok(latin1_bytes(input))
            }
        }
    }
}

/// Renders a digest in the requested format.
pub fn render(digest: &Digest, format: Format) -> String {
    match format {
        Format::Hex => bytes_to_hex(digest.as_bytes()),
        Format::Binary => bytes_to_binary(digest.as_bytes()),
    }
}

/// Hashes every input under every requested variant and writes one line each.
pub fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let messages = args.messages();
    let tagged = args.tag || messages.len() * args.variants.len() > 1;

    for input in messages {
        let bytes = args.message_bytes(input)?;

        for &variant in &args.variants {
            let computed = digest(&bytes, variant)
                .with_context(|| format!("{variant} failed for input {input:?}"))?;

            info!(%variant, len = bytes.len(), "digest computed");

            let rendered = render(&computed, args.format);
            if tagged {
                writeln!(out, "{variant} ({input:?}) = {rendered}")?;
            } else {
                writeln!(out, "{rendered}")?;
            }
        }
    }

    Ok(())
}
