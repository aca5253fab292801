//! Routes one raw line: `;` sequences first, then a two-stage `|` pipeline,
//! otherwise a single command. Splitting happens on the raw text, before
//! tokenizing, so a quoted `;` or `|` still splits.

use crate::executor::{EXIT_FAILURE, EXIT_SUCCESS, ExecError, ExecStatus, Executor, PipelineHandler};
use crate::lexer::Lexer;
use crate::session::Session;

pub fn run_line(line: &str, executor: &mut dyn Executor, session: &mut Session) -> ExecStatus {
    if line.contains(';') {
        return run_sequence(line, executor, session);
    }
    run_segment(line, executor, session)
}

/// Runs every `;`-separated segment in order. A failing segment never stops
/// the ones after it; the last segment's status is returned.
pub fn run_sequence(line: &str, executor: &mut dyn Executor, session: &mut Session) -> ExecStatus {
    let mut status = EXIT_SUCCESS;
    for segment in sequence_segments(line) {
        status = match run_segment(segment, executor, session) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!(error = %e, segment, "segment failed");
                eprintln!("mini-shell: {}", e);
                EXIT_FAILURE
            }
        };
    }
    Ok(status)
}

fn run_segment(segment: &str, executor: &mut dyn Executor, session: &mut Session) -> ExecStatus {
    if segment.contains('|') {
        let (left, right) = split_pipeline(segment)?;
        return PipelineHandler::run_pipeline(&Lexer::tokenize(left), &Lexer::tokenize(right));
    }
    let tokens = Lexer::tokenize(segment);
    if tokens.is_empty() {
        return Ok(EXIT_SUCCESS);
    }
    executor.exec(&tokens, session)
}

/// Segments with leading spaces trimmed; empty segments are dropped.
pub fn sequence_segments(line: &str) -> impl Iterator<Item = &str> {
    line.split(';')
        .map(|s| s.trim_start_matches(' '))
        .filter(|s| !s.is_empty())
}

/// Blank pieces are skipped, so `a || b` and `a | b |` still pipe `a` into `b`.
pub fn split_pipeline(segment: &str) -> Result<(&str, &str), ExecError> {
    let mut parts = segment.split('|').filter(|p| !p.trim().is_empty());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Ok((left, right.trim_start_matches(' '))),
        _ => Err(ExecError::Pipeline("only two-stage pipelines are supported".into())),
    }
}
