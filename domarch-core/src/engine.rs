//! Main summarization engine.
//!
//! [`DomarchAnalyzer`] drives the whole pipeline: hit records are grouped
//! into per-protein batches, filtered against the significance gates,
//! rendered into the two architecture strings, and written out as one
//! report line per reportable protein. Each batch is processed to
//! completion before the next begins; only one batch is held in memory.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::config::DomarchConfig;
use crate::filter::{filter_protein, FilteredProtein};
use crate::grouper::ProteinGrouper;
use crate::linker::{extract_linker, AlignmentLookup};
use crate::output::{write_linker_fasta, write_summary};
use crate::parser::DomtbloutRecords;
use crate::render::{detailed_architecture, overview_architecture};
use crate::results::{Linker, ProteinSummary, SummaryStats};
use crate::types::{DomarchError, HitRecord};

/// Domain-architecture summarizer.
///
/// # Examples
///
/// ```rust,no_run
/// use domarch_core::{DomarchAnalyzer, config::DomarchConfig};
///
/// let config = DomarchConfig {
///     target_models: vec!["PAS".to_string(), "HisKA".to_string()],
///     i_e_value_threshold: Some(1e-6),
///     ..Default::default()
/// };
/// let analyzer = DomarchAnalyzer::new(config);
///
/// let mut stdout = std::io::stdout();
/// let stats = analyzer.summarize_file("scan.domtblout", None, &mut stdout, None)?;
/// eprintln!("reported {} proteins", stats.proteins_reported);
/// # Ok::<(), domarch_core::types::DomarchError>(())
/// ```
#[derive(Debug, Default)]
pub struct DomarchAnalyzer {
    /// Configuration options for the run
    pub config: DomarchConfig,
}

impl DomarchAnalyzer {
    /// Creates an analyzer with the given configuration.
    pub fn new(config: DomarchConfig) -> Self {
        Self { config }
    }

    /// Parses a hmmscan `--domtblout` file and summarizes every protein.
    ///
    /// Records stream straight from the file into the grouper, so memory
    /// stays bounded by one per-protein batch regardless of file size.
    /// See [`summarize_records`](Self::summarize_records) for the pipeline
    /// semantics.
    ///
    /// # Errors
    ///
    /// Propagates parse errors, I/O errors, and fatal input inconsistencies
    /// as [`DomarchError`].
    pub fn summarize_file<P: AsRef<Path>, W: Write>(
        &self,
        path: P,
        alignment: Option<&AlignmentLookup>,
        report: &mut W,
        linker_out: Option<&mut dyn Write>,
    ) -> Result<SummaryStats, DomarchError> {
        let file = File::open(&path)?;
        let mut read_error = None;
        let mut hits_parsed = 0usize;
        let stats = {
            let records =
                DomtbloutRecords::new(BufReader::new(file)).map_while(|result| match result {
                    Ok(record) => {
                        hits_parsed += 1;
                        Some(record)
                    }
                    Err(error) => {
                        read_error = Some(error);
                        None
                    }
                });
            self.summarize_records(records, alignment, report, linker_out)?
        };
        if let Some(error) = read_error {
            return Err(error);
        }
        if !self.config.quiet {
            eprintln!(
                "Parsed {} domain hits from {}",
                hits_parsed,
                path.as_ref().display()
            );
        }
        Ok(stats)
    }

    /// Summarizes an in-memory stream of hit records.
    ///
    /// Records for one query must be contiguous. At most one report line is
    /// written per protein, in input encounter order; proteins failing the
    /// significance or presence gates are skipped silently. With an empty
    /// target list no batch is ever processed and the stream produces no
    /// output at all.
    ///
    /// Linker extraction runs when exactly two targets are configured and
    /// an alignment is supplied; extracted linkers are appended to
    /// `linker_out` as FASTA records when a writer is given.
    ///
    /// # Errors
    ///
    /// Returns [`DomarchError::InconsistentInput`] when hits for one
    /// protein disagree on query id or length, and [`DomarchError::Io`] on
    /// write failures. Both abort the run.
    pub fn summarize_records<I, W>(
        &self,
        records: I,
        alignment: Option<&AlignmentLookup>,
        report: &mut W,
        mut linker_out: Option<&mut dyn Write>,
    ) -> Result<SummaryStats, DomarchError>
    where
        I: IntoIterator<Item = HitRecord>,
        W: Write,
    {
        let mut stats = SummaryStats::default();

        // A report is meaningless without at least one required domain;
        // callers validate this up front, the engine just does nothing.
        if self.config.target_models.is_empty() {
            return Ok(stats);
        }

        let grouper = ProteinGrouper::with_exclusions(
            records.into_iter(),
            self.config.excluded_models.iter().cloned(),
        );

        for batch in grouper {
            stats.proteins_seen += 1;
            let Some(protein) = filter_protein(
                batch,
                &self.config.target_models,
                self.config.i_e_value_threshold,
                self.config.fs_e_value_threshold,
            )?
            else {
                continue;
            };

            let summary = self.summarize_protein(&protein, alignment);
            if let Some(linker) = &summary.linker {
                stats.linkers_extracted += 1;
                if let Some(out) = linker_out.as_mut() {
                    write_linker_fasta(out, &summary.query, linker.from, linker.to, &linker.residues)?;
                }
            }
            write_summary(report, &summary)?;
            stats.proteins_reported += 1;
        }

        Ok(stats)
    }

    fn summarize_protein(
        &self,
        protein: &FilteredProtein,
        alignment: Option<&AlignmentLookup>,
    ) -> ProteinSummary {
        ProteinSummary {
            query: protein.query.clone(),
            species: self.config.species.clone(),
            target_e_values: protein.owns.iter().map(|own| own.fs_e_value).collect(),
            qlen: protein.qlen,
            hit_count: protein.hits.len(),
            models: protein.hits.iter().map(|hit| hit.model.clone()).collect(),
            overview: overview_architecture(&protein.hits),
            detailed: detailed_architecture(&protein.hits, protein.qlen),
            linker: self.find_linker(protein, alignment),
        }
    }

    /// Looks for a linker between the first adjacent sorted pair matching
    /// target[0] then target[1]. Active only with exactly two targets.
    fn find_linker(
        &self,
        protein: &FilteredProtein,
        alignment: Option<&AlignmentLookup>,
    ) -> Option<Linker> {
        let alignment = alignment?;
        let (first_target, second_target) = match self.config.target_models.as_slice() {
            [a, b] => (a, b),
            _ => return None,
        };

        protein.hits.windows(2).find_map(|pair| {
            let (previous, next) = (&pair[0], &pair[1]);
            if previous.model != *first_target || next.model != *second_target {
                return None;
            }
            extract_linker(previous.env_to, next.env_from, &protein.query, alignment).map(
                |residues| Linker {
                    from: previous.env_to,
                    to: next.env_from - 1,
                    residues,
                },
            )
        })
    }
}
