use crate::{
    error::{Error, IngestError, PairwiseField},
    ingest::PairwiseRecord,
    reference::ReferenceStore,
    synthesize::DisplayAlignment,
};

use super::{InputDialect, ParsedInput, parse_input};

const TM_ALIGN_INPUT: &str = "\
>1abc_A reference protein
MGPKAKAEASKPHQ
2xyz_B
MGPKAKAEA--SKPHQ
           ..
---------TDPA---
3pqr_C
MGPKAKAEASKPHQ

MGPKAKAEASKPHQ
";

fn fixed(record_type: &str, residue_number: Option<usize>, payload: &str) -> String {
    let residue_number = residue_number
        .map(|residue_number| residue_number.to_string())
        .unwrap_or_default();
    format!("{record_type:<4}{residue_number:>6} {payload}")
}

fn fixed_column_input() -> String {
    [
        ">1abc_A reference protein".to_string(),
        "MGPKAKAEASKPHQ".to_string(),
        "# produced by a structural aligner".to_string(),
        "".to_string(),
        fixed("NAME", None, "2xyz_B"),
        fixed("REF", Some(1), "MGPKAKAEA..S"),
        fixed("CORR", None, "           ."),
        fixed("MTCH", Some(1), "---------TDP"),
        fixed("REF", Some(11), "KPHQ"),
        fixed("CORR", None, "."),
        fixed("MTCH", Some(13), "A---"),
        "".to_string(),
        fixed("NAME", None, "3pqr_C"),
        fixed("REF", Some(1), "MGPKAKAEASKPHQ"),
        "CORR".to_string(),
        fixed("MTCH", Some(1), "MGPKAKAEASKPHQ"),
    ]
    .join("\n")
}

fn merge(input: &ParsedInput, dialect: InputDialect) -> DisplayAlignment {
    let mut store = ReferenceStore::enter_reference(&input.reference)
        .unwrap()
        .with_reference_gap_characters(dialect.reference_gap_characters().iter().copied());
    for record in &input.records {
        store.add_alignment(record).unwrap();
    }
    store.synthesize()
}

#[test]
fn fixed_column_layout() {
    assert_eq!(
        fixed("REF", Some(1), "MGP"),
        "REF      1 MGP"
    );
    assert_eq!(fixed("NAME", None, "2xyz_B"), "NAME       2xyz_B");
}

#[test]
fn reference_from_first_two_lines() {
    let input = parse_input(TM_ALIGN_INPUT, InputDialect::TmAlign).unwrap();

    assert_eq!(
        input.reference.name.as_deref(),
        Some("1abc_A reference protein")
    );
    assert_eq!(
        input.reference.header.as_deref(),
        Some(">1abc_A reference protein")
    );
    assert_eq!(input.reference.sequence.as_deref(), Some("MGPKAKAEASKPHQ"));
}

#[test]
fn tm_align_records() {
    let input = parse_input(TM_ALIGN_INPUT, InputDialect::TmAlign).unwrap();

    assert_eq!(
        input.records,
        [
            PairwiseRecord::new(
                "2xyz_B",
                "MGPKAKAEA--SKPHQ",
                "           ..   ",
                "---------TDPA---"
            ),
            PairwiseRecord::new(
                "3pqr_C",
                "MGPKAKAEASKPHQ",
                " ".repeat(14),
                "MGPKAKAEASKPHQ"
            ),
        ]
    );
}

#[test]
fn tm_align_incomplete_rotation() {
    let input = parse_input(
        ">ref\nABC\nm1\nABC\n:::\n",
        InputDialect::TmAlign,
    )
    .unwrap();

    assert_eq!(input.records.len(), 1);
    assert_eq!(input.records[0].match_line, None);

    let mut store = ReferenceStore::enter_reference(&input.reference).unwrap();
    assert_eq!(
        store.add_alignment(&input.records[0]),
        Err(IngestError::MissingField(PairwiseField::MatchLine))
    );
}

#[test]
fn fixed_column_records() {
    let input = parse_input(&fixed_column_input(), InputDialect::FixedColumn).unwrap();

    assert_eq!(
        input.records,
        [
            PairwiseRecord::new(
                "2xyz_B",
                "MGPKAKAEA..SKPHQ",
                "           ..   ",
                "---------TDPA---"
            ),
            PairwiseRecord::new(
                "3pqr_C",
                "MGPKAKAEASKPHQ",
                " ".repeat(14),
                "MGPKAKAEASKPHQ"
            ),
        ]
    );
}

#[test]
fn dialects_merge_to_same_alignment() {
    let tm_align = parse_input(TM_ALIGN_INPUT, InputDialect::TmAlign).unwrap();
    let fixed_column = parse_input(&fixed_column_input(), InputDialect::FixedColumn).unwrap();

    let tm_align = merge(&tm_align, InputDialect::TmAlign);
    let fixed_column = merge(&fixed_column, InputDialect::FixedColumn);

    assert_eq!(tm_align, fixed_column);
    assert_eq!(tm_align.reference, "MGPKAKAEA--SKPHQ*");
    assert_eq!(tm_align.matches[0].sequence, "---------TDPA---*");
    assert_eq!(tm_align.matches[1].sequence, "MGPKAKAEA--SKPHQ*");
}

#[test]
fn fixed_column_unknown_record_type() {
    let input = [
        ">ref".to_string(),
        "ABC".to_string(),
        fixed("NAME", None, "m1"),
        fixed("SEQ", Some(1), "ABC"),
    ]
    .join("\n");

    let result = parse_input(&input, InputDialect::FixedColumn);
    assert!(
        matches!(result, Err(Error::Parser { line: 4, .. })),
        "{result:?}"
    );
}

#[test]
fn fixed_column_invalid_residue_number() {
    let input = [
        ">ref".to_string(),
        "ABC".to_string(),
        fixed("NAME", None, "m1"),
        "REF     x1 ABC".to_string(),
    ]
    .join("\n");

    let result = parse_input(&input, InputDialect::FixedColumn);
    assert!(
        matches!(result, Err(Error::Parser { line: 4, .. })),
        "{result:?}"
    );
}

#[test]
fn fixed_column_fragment_before_name() {
    let input = [
        ">ref".to_string(),
        "ABC".to_string(),
        fixed("REF", Some(1), "ABC"),
    ]
    .join("\n");

    let result = parse_input(&input, InputDialect::FixedColumn);
    assert!(
        matches!(result, Err(Error::Parser { line: 3, .. })),
        "{result:?}"
    );
}

#[test]
fn header_without_marker() {
    let result = parse_input("ref\nABC\n", InputDialect::TmAlign);
    assert!(
        matches!(result, Err(Error::Parser { line: 1, .. })),
        "{result:?}"
    );
}

#[test]
fn missing_lines_leave_fields_unset() {
    let input = parse_input(">ref\n", InputDialect::TmAlign).unwrap();
    assert_eq!(input.reference.name.as_deref(), Some("ref"));
    assert_eq!(input.reference.sequence, None);
    assert!(input.records.is_empty());

    let input = parse_input("", InputDialect::FixedColumn).unwrap();
    assert_eq!(input.reference.header, None);
}

#[test]
fn gap_characters() {
    assert_eq!(InputDialect::TmAlign.reference_gap_characters(), ['-']);
    assert_eq!(
        InputDialect::FixedColumn.reference_gap_characters(),
        ['-', '.']
    );
}

#[test]
fn tm_align_trailing_blanks_in_correspondence_line() {
    let input = parse_input(">ref\nABC\nm1\nABC\n:::  \nABC\n", InputDialect::TmAlign).unwrap();
    assert_eq!(
        input.records,
        [PairwiseRecord::new("m1", "ABC", ":::", "ABC")]
    );

    let display = merge(&input, InputDialect::TmAlign);
    assert_eq!(display.matches[0].correspondence, ":::*");
}

#[test]
fn fixed_column_trailing_blanks_in_correspondence_fragment() {
    let input = [
        ">ref".to_string(),
        "ABC".to_string(),
        fixed("NAME", None, "m1"),
        fixed("REF", Some(1), "ABC"),
        fixed("CORR", None, "::: "),
        fixed("MTCH", Some(1), "ABC"),
    ]
    .join("\n");

    let input = parse_input(&input, InputDialect::FixedColumn).unwrap();
    assert_eq!(
        input.records,
        [PairwiseRecord::new("m1", "ABC", ":::", "ABC")]
    );

    let display = merge(&input, InputDialect::FixedColumn);
    assert_eq!(display.matches[0].sequence, "ABC*");
}

#[test]
fn correspondence_fitting() {
    use crate::io::pad_correspondence;

    assert_eq!(pad_correspondence("ABCD", ":"), ":   ");
    assert_eq!(pad_correspondence("ABCD", ":  :   \t"), ":  :");
    assert_eq!(pad_correspondence("ABC*", ":"), ":  ");
    assert_eq!(pad_correspondence("ABC*", "::: *"), "::: *");
    // Only whitespace is cut, so the record is still rejected on ingestion.
    assert_eq!(pad_correspondence("AB", ":: :"), ":: :");
}
