use nix::unistd::getpid;

#[derive(Debug, Clone)]
pub struct ProcessIdentity {
    pub pid: i32,
    pub name: Option<String>,
}

/// Identity of the current process. The name is best-effort and only used
/// for diagnostics.
pub fn identity() -> ProcessIdentity {
    let pid = getpid().as_raw();
    ProcessIdentity {
        pid,
        name: process_name(),
    }
}

fn process_name() -> Option<String> {
    let proc = procfs::process::Process::myself().ok()?;
    let status = proc.status().ok()?;
    Some(status.name)
}
