// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `ironsha`: print SHA-512 family digests of command-line messages.

mod cli;
mod logging;

#[cfg(test)]
mod tests;

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}
