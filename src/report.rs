//! Rendering ranked tables, query answers and notices.

use std::io::Write;

use serde::Serialize;

use crate::{
    cli::OutputFormat,
    corpus::Corpus,
    error::{KmerCorpusError, QueryLengthError},
    query::QueryOutcome,
    rank::{rank, RankedEntry},
    record::SequenceRecord,
    table::FrequencyTable,
};

/// How ranked tables are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub format: OutputFormat,
    /// Rows below this count are hidden.
    pub min_count: u64,
    /// At most this many rows per table.
    pub top: Option<usize>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            min_count: 1,
            top: None,
        }
    }
}

impl DisplayOptions {
    fn visible<'e>(&self, entries: &'e [RankedEntry]) -> &'e [RankedEntry] {
        // Entries are sorted by count, so the filter keeps a prefix.
        let kept = entries.partition_point(|e| e.count >= self.min_count);
        let kept = self.top.map_or(kept, |top| kept.min(top));
        &entries[..kept]
    }
}

#[derive(Serialize)]
struct JsonTable<'a> {
    title: &'a str,
    distinct: usize,
    total: u64,
    entries: &'a [RankedEntry],
}

/// Writes one ranked table.
pub fn write_table<W: Write>(
    out: &mut W,
    title: &str,
    table: &FrequencyTable,
    options: &DisplayOptions,
) -> Result<(), KmerCorpusError> {
    let ranked = rank(table);
    let rows = options.visible(&ranked);

    match options.format {
        OutputFormat::Table => {
            writeln!(out)?;
            writeln!(out, "== {title} ==")?;
            writeln!(
                out,
                "{} distinct k-mers, {} total",
                table.distinct(),
                table.total()
            )?;
            writeln!(out, "K-mer     Count")?;
            writeln!(out, "-------------------------")?;
            for RankedEntry { kmer, count } in rows {
                writeln!(out, "{kmer}   {count}")?;
            }
        }
        OutputFormat::Tsv => {
            writeln!(out, "# {title}")?;
            for RankedEntry { kmer, count } in rows {
                writeln!(out, "{kmer}\t{count}")?;
            }
        }
        OutputFormat::Json => {
            let json = JsonTable {
                title,
                distinct: table.distinct(),
                total: table.total(),
                entries: rows,
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Writes the global table, then one table per file in input order.
pub fn write_corpus<W: Write>(
    out: &mut W,
    corpus: &Corpus,
    options: &DisplayOptions,
) -> Result<(), KmerCorpusError> {
    write_table(out, "Global frequencies", corpus.global(), options)?;
    for file in corpus.files() {
        write_table(
            out,
            &format!("File: {}", file.source_id()),
            file.table(),
            options,
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Notice printed for a source flagged by the plasmid heuristic.
#[must_use]
pub fn plasmid_notice(source_id: &str) -> String {
    format!(
        "[Notice] {source_id} has several headers (likely plasmids); its sequences were joined for the analysis."
    )
}

/// Writes a notice for every record with more than one header.
pub fn write_plasmid_notices<W: Write>(
    out: &mut W,
    records: &[SequenceRecord],
) -> Result<(), KmerCorpusError> {
    for record in records.iter().filter(|r| r.has_multiple_headers()) {
        writeln!(out, "{}", plasmid_notice(record.source_id()))?;
    }
    Ok(())
}

/// `"1 file"`, `"2 files"`.
fn counted(n: u64, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Writes the answer to one query.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Result<QueryOutcome, QueryLengthError>,
) -> Result<(), KmerCorpusError> {
    match outcome {
        Err(err) => writeln!(out, "[Error] {err}.")?,
        Ok(QueryOutcome::NotFound { kmer }) => {
            writeln!(out, "The k-mer {kmer} was not found in any file.")?;
        }
        Ok(QueryOutcome::Found { kmer, total, files }) => {
            writeln!(
                out,
                "The k-mer {kmer} occurs {} in {}:",
                counted(*total, "time"),
                counted(files.len() as u64, "file")
            )?;
            for hit in files {
                writeln!(out, " - {}: {}", hit.source_id, counted(hit.count, "time"))?;
            }
        }
    }
    Ok(())
}
