//! Writers for rosters and season tables in the supported output formats.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use crate::{
    bbref::types::{PlayerRecord, PlayerSeasonTable},
    cli::types::OutputFormat,
    Result,
};

/// Open `path` for writing (creating parent directories), or stdout when `None`.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            Ok(Box::new(io::BufWriter::new(fs::File::create(path)?)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

pub fn write_roster<W: Write>(
    mut out: W,
    players: &[PlayerRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for p in players {
                writeln!(out, "{}\t{}", p.name, p.url)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, players)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut out);
            if players.is_empty() {
                wtr.write_record(["Name", "URL"])?;
            }
            for p in players {
                wtr.serialize(p)?;
            }
            wtr.flush()?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn write_season_table<W: Write>(
    mut out: W,
    table: &PlayerSeasonTable,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_aligned(&mut out, table)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, table)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut out);
            wtr.write_record(table.column_names())?;
            for row in &table.rows {
                wtr.write_record(row.cells.iter().chain(std::iter::once(&row.season)))?;
            }
            wtr.flush()?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Season first, then the stat columns, padded to the widest cell.
fn write_aligned<W: Write>(out: &mut W, table: &PlayerSeasonTable) -> io::Result<()> {
    let header: Vec<&str> = std::iter::once("Season")
        .chain(table.columns.iter().map(String::as_str))
        .collect();
    let lines: Vec<Vec<&str>> = table
        .rows
        .iter()
        .map(|r| {
            std::iter::once(r.season.as_str())
                .chain(r.cells.iter().map(String::as_str))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for line in &lines {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(cell.chars().count());
        }
    }

    for line in std::iter::once(&header).chain(&lines) {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        writeln!(out, "{}", padded.join("  ").trim_end())?;
    }
    Ok(())
}
