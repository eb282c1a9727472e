//! JSONL record source and CSV row sinks.

use llm_eval_core::{CoreError, FailureRow, FailureSink, Record, Result, SummaryRow, SummarySink};
use std::io::Write;

pub const SUMMARY_HEADERS: [&str; 6] = ["model", "task", "id", "latency_sec", "output_tokens", "correct"];
pub const FAILURE_HEADERS: [&str; 6] = ["model", "task", "id", "failure_type", "output", "reference"];

/// Parse JSONL contents lazily. Lines are decoded one at a time, so invalid
/// UTF-8 costs only its own line. Blank lines are ignored; a malformed line
/// yields a schema error carrying its 1-based line number.
pub fn read_records(contents: &[u8]) -> impl Iterator<Item = Result<Record>> + '_ {
    contents
        .split(|byte| *byte == b'\n')
        .enumerate()
        .filter_map(|(index, raw)| {
            let line_error = |e: &dyn std::fmt::Display| CoreError::Schema(format!("line {}: {}", index + 1, e));
            let line = match std::str::from_utf8(raw) {
                Ok(line) => line,
                Err(e) => return Some(Err(line_error(&e))),
            };
            if line.trim().is_empty() {
                return None;
            }
            Some(Record::from_json_line(line).map_err(|e| line_error(&e)))
        })
}

fn sink_error(err: csv::Error) -> CoreError {
    CoreError::Sink(err.to_string())
}

fn headerless_writer<W: Write>(inner: W, headers: &[&str]) -> Result<csv::Writer<W>> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(inner);
    writer.write_record(headers).map_err(sink_error)?;
    Ok(writer)
}

pub struct CsvSummarySink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSummarySink<W> {
    /// Writes the header row immediately, so an empty run still produces a
    /// well-formed file.
    pub fn new(inner: W) -> Result<Self> {
        Ok(Self {
            writer: headerless_writer(inner, &SUMMARY_HEADERS)?,
        })
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| CoreError::Sink(e.to_string()))
    }
}

impl<W: Write> SummarySink for CsvSummarySink<W> {
    fn write_summary(&mut self, row: &SummaryRow) -> Result<()> {
        self.writer.serialize(row).map_err(sink_error)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.writer.flush()?)
    }
}

pub struct CsvFailureSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvFailureSink<W> {
    pub fn new(inner: W) -> Result<Self> {
        Ok(Self {
            writer: headerless_writer(inner, &FAILURE_HEADERS)?,
        })
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| CoreError::Sink(e.to_string()))
    }
}

impl<W: Write> FailureSink for CsvFailureSink<W> {
    fn write_failure(&mut self, row: &FailureRow) -> Result<()> {
        self.writer.serialize(row).map_err(sink_error)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.writer.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use llm_eval_core::{FailureType, TaskKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_csv_has_header_and_rows() {
        let mut sink = CsvSummarySink::new(Vec::new()).unwrap();
        sink.write_summary(&SummaryRow {
            model: "mistral".to_string(),
            task: TaskKind::Qa,
            id: "q1".to_string(),
            latency_sec: 1.5,
            output_tokens: 4,
            correct: true,
        })
        .unwrap();

        let csv = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            csv,
            "model,task,id,latency_sec,output_tokens,correct\nmistral,qa,q1,1.5,4,true\n"
        );
    }

    #[test]
    fn failure_csv_quotes_free_text() {
        let mut sink = CsvFailureSink::new(Vec::new()).unwrap();
        sink.write_failure(&FailureRow {
            model: "llama".to_string(),
            task: TaskKind::Reasoning,
            id: "r7".to_string(),
            failure_type: FailureType::UnverifiableReasoning,
            output: "It depends, really".to_string(),
            reference: "Yes".to_string(),
        })
        .unwrap();

        let csv = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(
            csv,
            "model,task,id,failure_type,output,reference\n\
             llama,reasoning,r7,unverifiable_reasoning,\"It depends, really\",Yes\n"
        );
    }

    #[test]
    fn empty_run_still_writes_header() {
        let sink = CsvFailureSink::new(Vec::new()).unwrap();
        let csv = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(csv, "model,task,id,failure_type,output,reference\n");
    }

    #[test]
    fn reader_reports_bad_lines_without_stopping() {
        let contents = concat!(
            r#"{"model":"m","task":"qa","id":1,"input":"q","reference":"Paris","output":"Paris","latency_sec":0.2,"output_tokens":1,"extra":"ignored"}"#,
            "\n\n",
            "not json\n",
            r#"{"model":"m","task":"qa","id":"3","input":"q","reference":"Paris"}"#,
            "\n",
        );

        let items: Vec<Result<Record>> = read_records(contents.as_bytes()).collect();
        assert_eq!(items.len(), 3);

        let first = items[0].as_ref().unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(first.output_tokens, 1);

        match &items[1] {
            Err(CoreError::Schema(msg)) => assert!(msg.starts_with("line 3:")),
            other => panic!("Expected schema error, got {:?}", other),
        }
        assert!(matches!(items[2], Err(CoreError::Schema(_))));
    }

    #[test]
    fn reader_skips_only_the_undecodable_line() {
        let mut contents = Vec::new();
        contents.extend_from_slice(b"\xff\xfe garbage\r\n");
        contents.extend_from_slice(
            br#"{"model":"m","task":"qa","id":"2","input":"q","reference":"Paris","output":"Paris","latency_sec":0.2,"output_tokens":1}"#,
        );
        contents.extend_from_slice(b"\r\n");

        let items: Vec<Result<Record>> = read_records(&contents).collect();
        assert_eq!(items.len(), 2);

        match &items[0] {
            Err(CoreError::Schema(msg)) => assert!(msg.starts_with("line 1:")),
            other => panic!("Expected schema error, got {:?}", other),
        }
        assert_eq!(items[1].as_ref().unwrap().id, "2");
    }
}
