use serde_json::{json, Value};

use crate::report::errors::Errors;
use crate::report::{LogReport, PointedMessage};

fn location_json(errors: &mut Errors, pointer: &PointedMessage) -> Value {
    // Line and column 0 mean the report is about the whole file.
    let (line, column, source) = if pointer.loc.line == 0 {
        (None, None, None)
    } else {
        (Some(pointer.loc.line), Some(pointer.loc.column), errors.get_line(&pointer.loc))
    };
    json!({
        "path": pointer.loc.pathname(),
        "line": line,
        "column": column,
        "length": (pointer.length > 0).then_some(pointer.length),
        "source": source,
        "tag": pointer.msg,
    })
}

/// Log the report as one JSON object, for editor plugins that show the reports themselves.
pub fn log_report_json(errors: &mut Errors, report: &LogReport) {
    let locations: Vec<Value> =
        report.pointers.iter().map(|pointer| location_json(errors, pointer)).collect();
    let report = json!({
        "severity": report.severity,
        "confidence": report.confidence,
        "key": report.key,
        "message": &report.msg,
        "info": &report.info,
        "locations": locations,
    });

    if let Err(e) = serde_json::to_writer_pretty(&mut errors.output, &report) {
        eprintln!("JSON error: {e:#}");
    }
}
