use crate::error::Result;
use std::io::Write;

pub const PID_LABEL: &str = "Test Target PID:";
pub const RUNNING_LINE: &str = "Running CPU-intensive loop...";

/// Write the two startup lines and flush, so a parent reading through a pipe
/// sees them before the workload starts.
pub fn write_banner<W: Write>(out: &mut W, pid: i32) -> Result<()> {
    writeln!(out, "{} {}", PID_LABEL, pid)?;
    writeln!(out, "{}", RUNNING_LINE)?;
    out.flush()?;
    Ok(())
}
