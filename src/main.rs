use std::process::ExitCode;

use reviewplot::analysis;
use reviewplot::app;
use reviewplot::error::Result;
use reviewplot::report;
use reviewplot::state::config::AnalysisConfig;
use reviewplot::ui::charts;

fn main() -> ExitCode {
    app::init_logging();
    app::exit_with(run(&AnalysisConfig::comparison()))
}

fn run(config: &AnalysisConfig) -> Result<()> {
    let analyses = analysis::analyze(config)?;
    let charts = charts::comparison_charts(config, &analyses)?;
    report::print(&analyses)?;
    app::show_charts(config, charts)
}
