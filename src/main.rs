use anyhow::Result;
use perf_target::banner;
use perf_target::process;
use perf_target::workload::Driver;

fn main() -> Result<()> {
    env_logger::init();

    let me = process::identity();
    log::debug!(
        "Process {} ({})",
        me.pid,
        me.name.as_deref().unwrap_or("unknown")
    );

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = banner::write_banner(&mut stdout, me.pid) {
        log::warn!("Failed to write banner: {}", e);
    }
    drop(stdout);

    Driver::new().run()
}
