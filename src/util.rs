// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Process-level helpers: log subscriber setup, output directories, man page rendering
// role: utilities/helpers
// inputs: RUST_LOG; paths; clap CommandFactory
// outputs: Installed tracing subscriber, ensured parent directories, man page text
// side_effects: ensure_parent_dir creates directories
// invariants: Logs go to stderr so stdout carries only the report
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber; `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_ansi(std::io::stderr().is_terminal())
    .with_writer(std::io::stderr)
    .try_init();
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
  }

  Ok(())
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
pub fn render_man_page<T: CommandFactory>() -> Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
