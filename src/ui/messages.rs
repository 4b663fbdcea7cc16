use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_YELLOW: &str = "\x1b[33m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_WARN: &str = "⚠️";

pub fn info<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg)
}

pub fn warning<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg)
}

/// Dashed block closing every step of the session.
pub fn separator<W: Write>(out: &mut W) -> io::Result<()> {
    let line = "-".repeat(50);
    writeln!(out, "{line}\n\n{line}")
}

/// "This took N seconds." footer plus separator.
pub fn timing<W: Write>(out: &mut W, secs: f64) -> io::Result<()> {
    writeln!(out, "\nThis took {} seconds.", secs)?;
    separator(out)
}
