use anyhow::Result;
use clap::Parser;

mod cli;
mod enrich;
mod error;
mod ext;
mod github;
mod model;
mod report;
mod repo_ref;
mod run;
mod social;
mod util;

use crate::cli::{normalize, Cli};

fn main() -> Result<()> {
  // Phase 1: environment (.env is optional)
  let _ = dotenvy::dotenv();
  util::init_tracing();

  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 2: normalize CLI; a bad repository reference aborts before any network call
  let cfg = normalize(cli)?;

  // Phase 3: fetch, enrich, report
  run::run(&cfg)
}
