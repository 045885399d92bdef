// (c) Roel Kluin, 2023, GPL v3

use crate::dbgconst::DEFAULT_K;
use crate::error::DbgError;
use crate::graph::DeBruijnGraph;
use crate::new_types::node::Node;
use anyhow::{anyhow, ensure, Context, Result};
use clap::Args;
use flate2::read::MultiGzDecoder;
use itertools::Itertools;
use noodles_fasta as fasta;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct AssembleCmd {
    /// k-mer list (one per line) or FASTA file, optionally gzipped
    #[arg(short, long, value_name = "FILE", required = true)]
    input: PathBuf,

    /// Length of the k-mers
    #[arg(short, long, default_value_t = DEFAULT_K)]
    k: usize,

    /// k-mer to start the walk from, the first one read by default
    #[arg(short, long, value_name = "KMER")]
    start: Option<String>,

    /// Write contigs as FASTA to this file instead of stdout
    #[arg(short, long, value_name = "FASTA")]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StatsCmd {
    /// k-mer list (one per line) or FASTA file, optionally gzipped
    #[arg(short, long, value_name = "FILE", required = true)]
    input: PathBuf,

    /// Length of the k-mers
    #[arg(short, long, default_value_t = DEFAULT_K)]
    k: usize,
}

fn is_gzipped(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "gz")
}

/// .fa, .fasta or .fna, before an optional .gz.
fn is_fasta(path: &Path) -> bool {
    let stem = if is_gzipped(path) {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };
    stem.and_then(Path::extension)
        .and_then(|e| e.to_str())
        .map_or(false, |e| matches!(e, "fa" | "fasta" | "fna"))
}

pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let file =
        File::open(path).map_err(|e| anyhow!("Error opening {}: {}", path.display(), e))?;
    Ok(if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    })
}

/// k-mers from a list, one per line; blank lines and `#` comments are skipped.
pub fn read_kmer_list<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(l) => {
            let l = l.trim();
            if l.is_empty() || l.starts_with('#') {
                None
            } else {
                Some(Ok(l.to_string()))
            }
        }
        Err(e) => Some(Err(e)),
    })
}

/// every k-length window of the records that has only A, T, C and G.
pub fn read_fasta_kmers<R: BufRead>(
    mut fa: fasta::Reader<R>,
    k: usize,
) -> Result<Vec<String>> {
    if k == 0 {
        return Err(DbgError::InvalidK(k).into());
    }
    let mut kmers = Vec::new();
    for res in fa.records() {
        let record = res?;
        let seq: &[u8] = record.sequence().as_ref();
        let upper = seq.to_ascii_uppercase();
        let before = kmers.len();
        kmers.extend(
            upper
                .windows(k)
                .filter(|w| w.iter().all(|b| matches!(b, b'A' | b'T' | b'C' | b'G')))
                .map(|w| String::from_utf8_lossy(w).into_owned()),
        );
        dbg_print!("{}: {} k-mers", record.name(), kmers.len() - before);
    }
    Ok(kmers)
}

/// Load the graph and the first k-mer read, the default start of a walk.
pub fn load_graph(path: &Path, k: usize) -> Result<(DeBruijnGraph, Option<Node>)> {
    let mut graph = DeBruijnGraph::with_k(k)?;
    tracing::info!("Reading {:?}", path);
    let reader = open_input(path)?;
    let kmers: Vec<String> = if is_fasta(path) {
        read_fasta_kmers(fasta::Reader::new(reader), k)?
    } else {
        read_kmer_list(reader).collect::<io::Result<_>>()?
    };
    for kmer in &kmers {
        graph
            .add_str(kmer)
            .with_context(|| format!("building graph from {}", path.display()))?;
    }
    let first = kmers.first().map(|s| graph.node(s)).transpose()?;
    tracing::info!(
        "{} k-mers read, {} distinct nodes",
        kmers.len(),
        graph.len()
    );
    Ok((graph, first))
}

pub fn write_contigs<W: Write>(out: W, contigs: &[String]) -> Result<()> {
    let mut writer = fasta::Writer::new(out);
    for (i, contig) in contigs.iter().enumerate() {
        let definition =
            fasta::record::Definition::new(format!("contig_{}", i + 1), Some(format!("len={}", contig.len())));
        let sequence = fasta::record::Sequence::from(contig.as_bytes().to_vec());
        writer.write_record(&fasta::Record::new(definition, sequence))?;
    }
    Ok(())
}

pub fn assemble(cmd: AssembleCmd) -> Result<()> {
    let opt_out = match &cmd.out {
        Some(path) => {
            ensure!(!path.exists(), "{path:?} already exists!");
            tracing::info!("Writing {:?}", path);
            Some(BufWriter::new(File::create(path)?))
        }
        None => None,
    };
    let (graph, first) = load_graph(&cmd.input, cmd.k)?;
    let start = match cmd.start {
        Some(s) => graph.node(&s).context("invalid start k-mer")?,
        None => first.ok_or_else(|| anyhow!("{:?} holds no k-mers", cmd.input))?,
    };
    if !graph.contains(&start)? {
        tracing::warn!("start k-mer {} is not in the graph", start);
    }

    let contigs = graph.assemble_contigs(&start)?;
    tracing::info!("{} contigs from {}", contigs.len(), start);

    match opt_out {
        Some(out_file) => write_contigs(out_file, &contigs),
        None => write_contigs(io::stdout().lock(), &contigs),
    }
}

pub fn stats(cmd: StatsCmd) -> Result<()> {
    let (graph, _) = load_graph(&cmd.input, cmd.k)?;
    let ks = graph.kmer_set();
    println!("Nodes: {}", graph.len());
    println!(
        "Map size: {}\tload factor {:.2}",
        ks.map_size(),
        ks.load_factor()
    );
    let degrees: Vec<(usize, usize)> = graph
        .iter()
        .map(|n| Ok((graph.predecessors(n)?.len(), graph.successors(n)?.len())))
        .collect::<Result<_>>()?;
    let degrees = degrees.into_iter().counts();
    println!("in\tout\tnodes");
    for ((din, dout), count) in degrees.into_iter().sorted() {
        println!("{}\t{}\t{}", din, dout, count);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmer_list_lines() {
        let input = "ATC\n\n# comment\n  TCG \nCGA\n";
        let kmers: Vec<String> = read_kmer_list(input.as_bytes())
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(kmers, vec!["ATC", "TCG", "CGA"]);
    }
    #[test]
    fn fasta_windows() {
        let input = b">r1\nATCGa\n>r2\nACNGTT\n";
        let kmers = read_fasta_kmers(fasta::Reader::new(&input[..]), 3).unwrap();
        assert_eq!(kmers, vec!["ATC", "TCG", "CGA", "GTT"]);
    }
    #[test]
    fn fasta_windows_of_zero() {
        let input = b">r1\nATCG\n";
        let err = read_fasta_kmers(fasta::Reader::new(&input[..]), 0).unwrap_err();
        assert_eq!(err.downcast_ref::<DbgError>(), Some(&DbgError::InvalidK(0)));
    }
    #[test]
    fn load_with_zero_k() {
        let mut fa = tempfile::Builder::new().suffix(".fa").tempfile().unwrap();
        writeln!(fa, ">r1\nATCGA").unwrap();
        let err = load_graph(fa.path(), 0).unwrap_err();
        assert_eq!(err.downcast_ref::<DbgError>(), Some(&DbgError::InvalidK(0)));
    }
    #[test]
    fn file_kinds() {
        assert!(is_fasta(Path::new("reads.fa")));
        assert!(is_fasta(Path::new("reads.fasta.gz")));
        assert!(!is_fasta(Path::new("kmers.txt")));
        assert!(!is_fasta(Path::new("kmers.txt.gz")));
        assert!(is_gzipped(Path::new("kmers.txt.gz")));
    }
    #[test]
    fn contigs_as_fasta() {
        let mut out = Vec::new();
        write_contigs(&mut out, &["ATCGA".to_string(), "ATCA".to_string()]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">contig_1 len=5\nATCGA\n>contig_2 len=4\nATCA\n"
        );
    }
}
