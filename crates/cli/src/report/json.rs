// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io;

use termcolor::WriteColor;

use super::{Report, ReportFormatter};

/// Pretty-printed JSON, one document per report. Never colored.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write(&self, out: &mut dyn WriteColor, report: &Report<'_>) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)
    }
}
