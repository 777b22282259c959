use serde::Serialize;

use crate::io::loader::SourceFormat;

/// `jot load --json` output
#[derive(Serialize)]
pub struct LoadJson<'a> {
    /// Absent when the file could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<SourceFormat>,
    pub tasks: &'a [String],
}

/// Plain output: one task per line
pub fn format_task_lines(tasks: &[String]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(task);
        out.push('\n');
    }
    out
}
