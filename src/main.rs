mod ledger;
mod logging;
mod models;
mod run;
mod settings;
mod ui;

use anyhow::Result;

use logging::LogTarget;
use settings::Settings;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (settings, rest) = Settings::from_args(&args)?;

    // Before the ledger, so a rejected --budget is logged too.
    let target = LogTarget::for_args(&rest);
    logging::init(target);

    // The one ledger for this run; every screen and command borrows it from here.
    let mut ledger = settings.build_ledger()?;

    match target {
        LogTarget::File => run::as_tui(&mut ledger),
        LogTarget::Stderr => run::as_cli(&rest, &mut ledger),
    }
}
