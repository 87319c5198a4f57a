//! Display utilities and output formatting for the quotescope CLI.

use anyhow::{Context, Result};
use quotescope_lib::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Warning shown when a fetch produced nothing to display.
pub(crate) const NO_DATA_WARNING: &str =
    "No data fetched. Please try a different ticker or date range.";

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const CHART_WIDTH: usize = 60;
const VOLUME_WIDTH: usize = 40;
const CANDLE_WIDTH: usize = 50;

/// Default export path: `<TICKER>_data.<ext>` in the working directory.
pub(crate) fn default_export_path(ticker: &Ticker, format: OutputFormat) -> PathBuf {
    PathBuf::from(export_file_name(ticker, format))
}

/// Returns true when the path means "write to stdout".
pub(crate) fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Write a series to a file (or stdout for `-`) in the specified format.
///
/// JSON arrays are pretty-printed in files and compact on stdout.
pub(crate) fn write_series(
    series: &OhlcvSeries,
    output: &Path,
    format: OutputFormat,
) -> Result<()> {
    if is_stdout(output) {
        // `Stdout` is Send; its lock guard is not
        return write_to(series, io::stdout(), format, false);
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    write_to(series, BufWriter::new(file), format, true)
        .with_context(|| format!("Failed to write {}", output.display()))
}

fn write_to<W: Write + Send>(
    series: &OhlcvSeries,
    writer: W,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Csv => CsvFormatter::new().write_series(series, writer)?,
        OutputFormat::Tsv => CsvFormatter::tsv().write_series(series, writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(pretty)
            .write_series(series, writer)?,
        OutputFormat::Ndjson => JsonFormatter::ndjson().write_series(series, writer)?,
    }
    Ok(())
}

/// Message lines for an empty fetch.
pub(crate) fn no_data_message(reason: &str) -> String {
    format!("Warning: {NO_DATA_WARNING}\nReason: {reason}")
}

/// Render the full report: heading, table, and optionally the charts.
pub(crate) fn render_report<W: Write>(
    out: &mut W,
    series: &OhlcvSeries,
    sma: &DerivedSma,
    rows: usize,
    charts: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{} | {} | {} trading days",
        series.ticker(),
        series.range(),
        series.len()
    )?;
    if let (Some(first), Some(last)) = (series.first_date(), series.last_date()) {
        writeln!(out, "Data from {first} to {last}")?;
    }
    writeln!(out)?;
    render_table(out, series, sma, rows)?;

    if charts {
        writeln!(out)?;
        render_candles(out, series, rows)?;
        writeln!(out)?;
        render_close_chart(out, series)?;
        writeln!(out)?;
        render_volume_bars(out, series, rows)?;
        writeln!(out)?;
        render_close_vs_sma(out, series, sma)?;
    }
    Ok(())
}

/// Table of the most recent `rows` bars with their SMA value.
pub(crate) fn render_table<W: Write>(
    out: &mut W,
    series: &OhlcvSeries,
    sma: &DerivedSma,
    rows: usize,
) -> io::Result<()> {
    let sma_label = format!("SMA({})", sma.period());
    writeln!(
        out,
        "{:<10} {:>10} {:>10} {:>10} {:>10} {:>14} {:>10}  ",
        "Date", "Open", "High", "Low", "Close", "Volume", sma_label
    )?;

    let skip = series.len().saturating_sub(rows);
    for (bar, point) in series.bars().iter().zip(sma.points()).skip(skip) {
        let sma_text = point
            .value
            .map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
        writeln!(
            out,
            "{:<10} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>14} {:>10}  {}",
            bar.date,
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume,
            sma_text,
            direction(bar)
        )?;
    }

    if skip > 0 {
        writeln!(out, "... {skip} earlier rows not shown")?;
    }
    Ok(())
}

fn direction(bar: &DailyBar) -> char {
    if bar.is_bullish() {
        '▲'
    } else if bar.is_bearish() {
        '▼'
    } else {
        '='
    }
}

fn render_close_chart<W: Write>(out: &mut W, series: &OhlcvSeries) -> io::Result<()> {
    let closes: Vec<Option<f64>> = series.closes().map(Some).collect();
    let Some(bounds) = value_bounds(closes.iter().flatten().copied()) else {
        return Ok(());
    };
    writeln!(out, "Close  {:.2} .. {:.2}", bounds.0, bounds.1)?;
    writeln!(out, "  {}", sparkline(&downsample(&closes, CHART_WIDTH), bounds))
}

/// Candlesticks for the most recent `rows` bars on a shared price scale.
///
/// The wick spans low to high; the body spans open to close, solid when the
/// close is up and shaded when it is down.
fn render_candles<W: Write>(out: &mut W, series: &OhlcvSeries, rows: usize) -> io::Result<()> {
    let skip = series.len().saturating_sub(rows);
    let recent = &series.bars()[skip..];
    let Some(bounds) = value_bounds(recent.iter().flat_map(|b| [b.low, b.high])) else {
        return Ok(());
    };

    writeln!(out, "Candles  {:.2} .. {:.2}", bounds.0, bounds.1)?;
    for bar in recent {
        writeln!(
            out,
            "  {} {} {} range {:.2} body {:.2}",
            bar.date,
            candle_row(bar, bounds, CANDLE_WIDTH),
            direction(bar),
            bar.range(),
            bar.body()
        )?;
    }
    Ok(())
}

fn candle_row(bar: &DailyBar, bounds: (f64, f64), width: usize) -> String {
    let wick = price_column(bar.low, bounds, width)..=price_column(bar.high, bounds, width);
    let open = price_column(bar.open, bounds, width);
    let close = price_column(bar.close, bounds, width);
    let body = open.min(close)..=open.max(close);
    let body_char = if bar.is_bullish() {
        '█'
    } else if bar.is_bearish() {
        '░'
    } else {
        '┼'
    };

    (0..width)
        .map(|col| {
            if body.contains(&col) {
                body_char
            } else if wick.contains(&col) {
                '─'
            } else {
                ' '
            }
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn price_column(price: f64, (lo, hi): (f64, f64), width: usize) -> usize {
    let last = width.saturating_sub(1);
    let span = hi - lo;
    if span <= 0.0 {
        return last / 2;
    }
    let col = ((price - lo) / span * last as f64).round().max(0.0) as usize;
    col.min(last)
}

fn render_volume_bars<W: Write>(out: &mut W, series: &OhlcvSeries, rows: usize) -> io::Result<()> {
    let skip = series.len().saturating_sub(rows);
    let recent = &series.bars()[skip..];
    let max = series.volumes().skip(skip).max().unwrap_or(0);

    writeln!(out, "Volume")?;
    for bar in recent {
        writeln!(
            out,
            "  {} {:<width$} {}",
            bar.date,
            "#".repeat(volume_bar_len(bar.volume, max)),
            bar.volume,
            width = VOLUME_WIDTH
        )?;
    }
    Ok(())
}

fn render_close_vs_sma<W: Write>(
    out: &mut W,
    series: &OhlcvSeries,
    sma: &DerivedSma,
) -> io::Result<()> {
    let closes: Vec<Option<f64>> = series.closes().map(Some).collect();
    let averages: Vec<Option<f64>> = sma.values().collect();
    let all = closes.iter().chain(&averages).flatten().copied();
    let Some(bounds) = value_bounds(all) else {
        return Ok(());
    };

    let label = format!("SMA({})", sma.period());
    writeln!(out, "Close vs {label}")?;
    let close_line = sparkline(&downsample(&closes, CHART_WIDTH), bounds);
    let sma_line = sparkline(&downsample(&averages, CHART_WIDTH), bounds);
    writeln!(out, "  {:<8} {close_line}", "Close")?;
    writeln!(out, "  {label:<8} {sma_line}")?;

    match (series.bars().last(), sma.points().last().and_then(|p| p.value)) {
        (Some(bar), Some(avg)) => {
            let side = if bar.close >= avg { "above" } else { "below" };
            writeln!(
                out,
                "  Last close {:.2} is {side} {label} {:.2} ({:+.2}%)",
                bar.close,
                avg,
                (bar.close - avg) / avg * 100.0
            )
        }
        _ => writeln!(
            out,
            "  Not enough trading days for {label} ({} of {})",
            series.len(),
            sma.period()
        ),
    }
}

fn value_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Averages neighbouring points so the line fits in `width` columns.
fn downsample(values: &[Option<f64>], width: usize) -> Vec<Option<f64>> {
    if width == 0 || values.len() <= width {
        return values.to_vec();
    }
    let size = values.len().div_ceil(width);
    values
        .chunks(size)
        .map(|chunk| {
            let defined: Vec<f64> = chunk.iter().flatten().copied().collect();
            if defined.is_empty() {
                None
            } else {
                Some(defined.iter().sum::<f64>() / defined.len() as f64)
            }
        })
        .collect()
}

/// Maps values onto block characters; undefined points are blank.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sparkline(values: &[Option<f64>], (lo, hi): (f64, f64)) -> String {
    let span = hi - lo;
    values
        .iter()
        .map(|value| match value {
            None => ' ',
            Some(_) if span <= 0.0 => SPARK[SPARK.len() / 2],
            Some(v) => {
                let level = ((v - lo) / span * (SPARK.len() - 1) as f64).round() as usize;
                SPARK[level.min(SPARK.len() - 1)]
            }
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn volume_bar_len(volume: u64, max: u64) -> usize {
    if max == 0 {
        return 0;
    }
    let len = (volume as f64 / max as f64 * VOLUME_WIDTH as f64).round() as usize;
    // keep non-zero volume visible
    if volume > 0 { len.max(1) } else { 0 }
}
