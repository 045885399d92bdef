use dbgraph::assemble::{load_graph, write_contigs};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

#[test]
fn test_kmer_list_to_contigs() {
    let mut temp_file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(temp_file, "ATC\nTCG\nCGA\nTCA").unwrap();

    let (graph, first) = load_graph(temp_file.path(), 3).unwrap();
    assert_eq!(graph.len(), 4);
    let start = first.unwrap();
    assert_eq!(start.as_str(), "ATC");

    let contigs = graph.assemble_contigs(&start).unwrap();
    assert_eq!(contigs, vec!["ATCA", "ATCGA"]);

    let mut out = Vec::new();
    write_contigs(&mut out, &contigs).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        ">contig_1 len=4\nATCA\n>contig_2 len=5\nATCGA\n"
    );
}

#[test]
fn test_gzipped_fasta() {
    let temp_file = tempfile::Builder::new().suffix(".fa.gz").tempfile().unwrap();
    let mut gz = GzEncoder::new(temp_file.reopen().unwrap(), Compression::default());
    write!(gz, ">seq1\nATCGA\n").unwrap();
    gz.finish().unwrap();

    let (graph, first) = load_graph(temp_file.path(), 3).unwrap();
    assert_eq!(graph.len(), 3);
    let start = first.unwrap();
    assert_eq!(graph.assemble_contigs(&start).unwrap(), vec!["ATCGA"]);
}

#[test]
fn test_wrong_kmer_length() {
    let mut temp_file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(temp_file, "ATC\nATCG").unwrap();

    let err = load_graph(temp_file.path(), 3).unwrap_err();
    assert!(format!("{:#}", err).contains("expected 3"));
}

#[test]
fn test_zero_k_fasta() {
    let mut temp_file = tempfile::Builder::new().suffix(".fa").tempfile().unwrap();
    writeln!(temp_file, ">seq1\nATCGA").unwrap();

    let err = load_graph(temp_file.path(), 0).unwrap_err();
    assert!(format!("{:#}", err).contains("k must be at least 1"));
}
