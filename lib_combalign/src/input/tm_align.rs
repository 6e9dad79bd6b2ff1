use log::trace;

use crate::{ingest::PairwiseRecord, io::pad_correspondence};

/// Parses alignments as a fixed rotation of four lines.
///
/// Blank lines are data here, since a correspondence line without any correspondences is empty.
/// A trailing incomplete rotation is returned with its missing fields unset.
pub fn parse(lines: &[&str]) -> Vec<PairwiseRecord> {
    enum State {
        MatchName,
        ReferenceLine,
        CorrespondenceLine,
        MatchLine,
    }

    let mut state = State::MatchName;
    let mut current_record = PairwiseRecord::default();
    let mut records = Vec::new();

    for line in lines {
        state = match state {
            State::MatchName => {
                current_record.match_name = Some(line.trim().to_string());
                State::ReferenceLine
            }
            State::ReferenceLine => {
                current_record.reference_line = Some(line.trim_end().to_string());
                State::CorrespondenceLine
            }
            State::CorrespondenceLine => {
                current_record.correspondence_line = Some(line.to_string());
                State::MatchLine
            }
            State::MatchLine => {
                current_record.match_line = Some(line.trim_end().to_string());
                pad_record_correspondence(&mut current_record);
                trace!("Parsed record {current_record:?}");
                records.push(std::mem::take(&mut current_record));
                State::MatchName
            }
        };
    }

    if !current_record.is_empty() {
        pad_record_correspondence(&mut current_record);
        records.push(current_record);
    }

    records
}

fn pad_record_correspondence(record: &mut PairwiseRecord) {
    if let (Some(reference_line), Some(correspondence_line)) =
        (&record.reference_line, &record.correspondence_line)
    {
        record.correspondence_line = Some(pad_correspondence(reference_line, correspondence_line));
    }
}
