//! Plain-text report of an analysis for the terminal.

use cineregional_core::MovieAnalysis;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Render `analysis` as a multi-section text report.
///
/// Regional bars are scaled against the largest box office in the
/// breakdown. Nothing in the analysis is modified.
///
/// # Examples
///
/// ```
/// use cineregional::render_report;
/// use cineregional_core::MovieAnalysis;
///
/// let analysis = MovieAnalysis::builder()
///     .title("Arrival")
///     .summary("A quiet hit.")
///     .build()
///     .unwrap();
/// let report = render_report(&analysis);
/// assert!(report.starts_with("Arrival\n"));
/// assert!(report.contains("A quiet hit."));
/// ```
pub fn render_report(analysis: &MovieAnalysis) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, analysis);
    out
}

fn write_report(out: &mut String, analysis: &MovieAnalysis) -> std::fmt::Result {
    writeln!(out, "{}", analysis.title())?;
    writeln!(out, "{}", "=".repeat(analysis.title().chars().count()))?;
    writeln!(out, "{}", analysis.summary())?;

    if !analysis.global_highlights().is_empty() {
        writeln!(out, "\nHighlights")?;
        for highlight in analysis.global_highlights() {
            writeln!(out, "  - {}", highlight)?;
        }
    }

    if let Some(stats) = analysis.global_stats() {
        writeln!(out, "\nGlobal")?;
        writeln!(out, "  Total box office:  {}", stats.total_box_office)?;
        writeln!(out, "  Critic score:      {}", stats.critic_score)?;
        writeln!(out, "  Audience score:    {}", stats.audience_score)?;
        writeln!(out, "  Global reach:      {}/10", stats.global_reach_index)?;
        writeln!(out, "  Release status:    {}", stats.release_status)?;
    }

    let regions = analysis.regional_breakdown();
    if !regions.is_empty() {
        writeln!(out, "\nRegional box office (USD millions)")?;
        let width = regions
            .iter()
            .map(|r| r.region.chars().count())
            .max()
            .unwrap_or(0);
        let peak = analysis.top_region().map(|r| r.box_office).unwrap_or(0.0);
        for region in regions {
            writeln!(
                out,
                "  {:<width$}  {:<bar$}  {:>8.1}  pop {:>3}  {}",
                region.region,
                bar(region.box_office, peak),
                region.box_office,
                region.popularity_score,
                region.availability.join(", "),
                width = width,
                bar = BAR_WIDTH,
            )?;
        }
        writeln!(
            out,
            "  Total: {:.1}",
            analysis.total_regional_box_office()
        )?;
    }

    let continents = analysis.continental_breakdown();
    if !continents.is_empty() {
        writeln!(out, "\nContinents")?;
        let leader = analysis.leading_continent().map(|c| c.continent.as_str());
        for continent in continents {
            let mark = if Some(continent.continent.as_str()) == leader {
                "*"
            } else {
                " "
            };
            writeln!(
                out,
                " {}{:<14} {:>5.1}%  {:<14} top: {}",
                mark,
                continent.continent,
                continent.market_share,
                continent.status,
                continent.top_country,
            )?;
        }
    }

    if !analysis.sources().is_empty() {
        writeln!(out, "\nSources")?;
        for (i, source) in analysis.sources().iter().enumerate() {
            writeln!(out, "  [{}] {} <{}>", i + 1, source.title, source.uri)?;
        }
    }
    Ok(())
}

/// A bar proportional to `value / peak`, at most [`BAR_WIDTH`] cells.
fn bar(value: f64, peak: f64) -> String {
    if value.is_nan() || peak.is_nan() || value <= 0.0 || peak <= 0.0 {
        return String::new();
    }
    let cells = ((value / peak) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(cells.clamp(1, BAR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_peak() {
        assert_eq!(bar(100.0, 100.0).len(), BAR_WIDTH);
        assert_eq!(bar(50.0, 100.0).len(), BAR_WIDTH / 2);
        assert_eq!(bar(0.1, 100.0).len(), 1);
    }

    #[test]
    fn bar_handles_degenerate_values() {
        assert!(bar(0.0, 100.0).is_empty());
        assert!(bar(10.0, 0.0).is_empty());
        assert!(bar(-5.0, 100.0).is_empty());
        assert!(bar(f64::NAN, 100.0).is_empty());
    }
}
