use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use slidetrack_core::Frame;

use crate::runner::{Outcome, Record};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One aligned line per record.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

pub fn write_records<W: Write>(out: &mut W, records: &[Record], format: Format) -> Result<()> {
    for record in records {
        match format {
            Format::Text => writeln!(out, "{}", text_line(record))?,
            Format::Json => {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn control(disabled: bool) -> &'static str {
    if disabled { "off" } else { "on" }
}

fn describe_frame(frame: &Frame) -> String {
    format!(
        "index {}/{} visible {} card {:.1}px offset {:.1}px prev {} next {}",
        frame.current_index,
        frame.max_index,
        frame.visible_count,
        frame.card_width,
        frame.offset,
        control(frame.prev_disabled),
        control(frame.next_disabled),
    )
}

pub fn text_line(record: &Record) -> String {
    let step = record
        .step
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    let detail = match &record.outcome {
        Outcome::Rendered { frame } => describe_frame(frame),
        Outcome::Dragged { offset } => format!("drag offset {offset:.1}px"),
        Outcome::Scheduled => "relayout scheduled".to_string(),
        Outcome::Ignored => "no-op".to_string(),
    };
    format!("{step:>3} {:<18} {detail}", record.cause)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame {
            offset: -340.0,
            current_index: 1,
            max_index: 3,
            visible_count: 3,
            card_width: 320.0,
            prev_disabled: false,
            next_disabled: false,
            swiping: false,
        }
    }

    #[test]
    fn text_line_summarizes_a_render() {
        let record = Record {
            step: Some(2),
            cause: "next".into(),
            outcome: Outcome::Rendered { frame: frame() },
        };
        assert_eq!(
            text_line(&record),
            "  2 next               index 1/3 visible 3 card 320.0px offset -340.0px prev on next on"
        );
    }

    #[test]
    fn json_lines_carry_the_outcome_tag() {
        let records = [
            Record {
                step: None,
                cause: "relayout".into(),
                outcome: Outcome::Rendered { frame: frame() },
            },
            Record {
                step: Some(4),
                cause: "resize 650".into(),
                outcome: Outcome::Scheduled,
            },
        ];
        let mut out = Vec::new();
        write_records(&mut out, &records, Format::Json).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["outcome"], "rendered");
        assert_eq!(lines[0]["frame"]["current_index"], 1);
        assert!(lines[0]["step"].is_null());
        assert_eq!(lines[1]["outcome"], "scheduled");
        assert_eq!(lines[1]["step"], 4);
    }
}
