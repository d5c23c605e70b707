use std::process::ExitCode;

use reviewplot::analysis;
use reviewplot::app;
use reviewplot::error::Result;
use reviewplot::report;
use reviewplot::state::config::AnalysisConfig;
use reviewplot::state::mode::{Mode, ModeStyle};
use reviewplot::ui::charts;

/// Mode analyzed by this entry point.
const MODE: Mode = Mode::Sequential;

fn main() -> ExitCode {
    app::init_logging();
    app::exit_with(run(&AnalysisConfig::single(MODE)))
}

fn run(config: &AnalysisConfig) -> Result<()> {
    config.validate()?;
    let analysis = analysis::analyze_mode(config, ModeStyle::new(MODE))?;
    report::print(std::slice::from_ref(&analysis))?;
    app::show_charts(config, charts::single_mode_charts(&analysis))
}
