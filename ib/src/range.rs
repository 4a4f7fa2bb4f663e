use ib_core::{Range, SourceFile, TextRange};

/// Convert a zero-based range reported by the analysis engine into a range of `file`.
///
/// This never fails. A range that does not fit the file is logged and replaced by the line it
/// starts on, see [`select_this_or_previous_line`].
pub fn resolve(file: &(impl SourceFile + ?Sized), range: Range, rule_id: &str) -> TextRange {
    let start_line = one_based(range.start.line);
    let end_line = one_based(range.end.line);

    match file.new_range(
        start_line,
        range.start.character as usize,
        end_line,
        range.end.character as usize,
    ) {
        Ok(text_range) => text_range,
        Err(err) => {
            cov_mark::hit!(range_fallback);
            tracing::error!(
                %range,
                rule = rule_id,
                file = %file.path().display(),
                %err,
                "cannot compute text range for given range"
            );
            select_this_or_previous_line(file, start_line)
        }
    }
}

/// Select the given one-based line, falling back to preceding lines when that fails.
/// Lines past the end of the file select the last line and line 0 selects the whole file.
///
/// Every failed attempt moves one line up, so this makes at most `file.lines()` selection attempts.
pub fn select_this_or_previous_line(file: &(impl SourceFile + ?Sized), line: usize) -> TextRange {
    let lines = file.lines();
    let mut line = line.min(lines);
    loop {
        if line == 0 {
            cov_mark::hit!(whole_file_fallback);
            return whole_file(lines);
        }

        match file.select_line(line) {
            Ok(text_range) => return text_range,
            Err(err) => {
                tracing::error!(
                    line,
                    file = %file.path().display(),
                    %err,
                    "cannot compute text range for given line"
                );
                line -= 1;
            }
        }
    }
}

fn one_based(line: u32) -> usize {
    usize::try_from(line).map_or(usize::MAX, |line| line.saturating_add(1))
}

fn whole_file(lines: usize) -> TextRange {
    TextRange::new((1, 0), (lines.max(1), 0))
}
