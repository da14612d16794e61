use super::*;
use std::time::Duration;

fn create_record(workers: usize, best_distance: Option<f64>) -> BenchmarkRecord {
    BenchmarkRecord {
        dataset: "berlin52.tsp".to_string(),
        algorithm: "Ant Colony Opt.".to_string(),
        workers,
        duration: Duration::from_micros(1_234_567),
        speedup: 1.5,
        best_distance,
    }
}

#[test]
fn can_write_header_and_records() {
    let mut buffer = vec![];

    {
        let mut writer = RecordWriter::new(&mut buffer).expect("cannot create writer");
        writer.write(&create_record(1, Some(7544.366))).expect("cannot write record");
        writer.write(&create_record(4, None)).expect("cannot write record");
    }

    assert_eq!(
        String::from_utf8(buffer).expect("invalid utf8"),
        "Dataset;Algorithm;ThreadCount;Duration(ms);Speedup;BestDistance\n\
         berlin52.tsp;Ant Colony Opt.;1;1234.57;1.50;7544.37\n\
         berlin52.tsp;Ant Colony Opt.;4;1234.57;1.50;\n"
    );
}

#[test]
fn can_flush_every_record() {
    let file = tempfile::NamedTempFile::new().expect("cannot create file");
    let mut writer = RecordWriter::new(file.reopen().expect("cannot open file")).expect("cannot create writer");

    writer.write(&create_record(2, Some(1.))).expect("cannot write record");
    let content = std::fs::read_to_string(file.path()).expect("cannot read file");

    assert_eq!(content.lines().count(), 2);
    assert!(content.ends_with("berlin52.tsp;Ant Colony Opt.;2;1234.57;1.50;1.00\n"));
}
