use crate::data::loader;
use crate::error::Result;
use crate::processing::statistics::StatisticsRecord;
use crate::state::config::AnalysisConfig;
use crate::state::data_series::SampleSeries;
use crate::state::mode::ModeStyle;

/// A mode's parsed series together with its statistics.
#[derive(Debug, Clone)]
pub struct ModeAnalysis {
    pub style: ModeStyle,
    pub series: SampleSeries,
    pub stats: StatisticsRecord,
}

/// Load and summarize every configured mode, in configuration order.
///
/// The first failing mode aborts the run, so nothing is reported or drawn
/// from a partial set.
pub fn analyze(config: &AnalysisConfig) -> Result<Vec<ModeAnalysis>> {
    config.validate()?;
    tracing::info!(
        "Analyzing {} mode(s) in {:?}",
        config.modes.len(),
        config.data_dir()
    );

    config
        .modes
        .iter()
        .map(|style| analyze_mode(config, *style))
        .collect()
}

/// Load and summarize one mode, reading its log from the configured data
/// directory.
pub fn analyze_mode(config: &AnalysisConfig, style: ModeStyle) -> Result<ModeAnalysis> {
    let series = loader::load_series(config, style.mode)?;
    let stats = series.statistics()?;
    tracing::debug!(mode = %style.mode, ?stats, "Computed statistics");
    Ok(ModeAnalysis {
        style,
        series,
        stats,
    })
}
