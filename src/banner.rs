use crate::history::CommitDates;

use console::{Color, measure_text_width, style};

/// Date formats git accepts for `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE`.
pub const DATE_FORMATS: &str = "
Date formats:
(assumes local timezone if -0500 omitted)
default:        Mon Jul 3 17:18:43 2006 -0500
rfc2822:        Mon, 3 Jul 2006 17:18:43 -0500
iso8601:        2006-07-03 17:18:43 -0500
                2006-07-03 17:18:43 (local)
relative:       5.seconds.ago,
                2.years.3.months.ago,
                '6am yesterday'
";

/// Prints `lines` inside a box drawn in `accent`.
///
/// The box is sized to the widest **visible** line, using
/// [`console::measure_text_width`] so that ANSI codes embedded in the content
/// do not skew the padding. Borders are styled independently of the content.
///
/// # Examples
///
/// ```no_run
/// use console::Color;
/// use git_redate::banner::print_framed;
///
/// print_framed(&["commit 0cfd874".to_string()], Color::Yellow);
/// ```
pub fn print_framed(lines: &[String], accent: Color) {
    for row in framed_rows(lines, accent) {
        println!("{}", row);
    }
}

/// Builds the rows printed by [`print_framed`], blank lines around the box
/// included.
fn framed_rows(lines: &[String], accent: Color) -> Vec<String> {
    let max_width = lines
        .iter()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0)
        + 2;

    let border = "═".repeat(max_width);
    let left = style("║ ").fg(accent).bold().to_string();
    let right = style("║").fg(accent).bold().to_string();

    let mut rows = vec![
        String::new(),
        style(format!("╔{}╗", border)).fg(accent).bold().to_string(),
    ];
    for line in lines {
        // max_width counts the space after the left border
        let pad = max_width - measure_text_width(line) - 1;
        rows.push(format!("{}{}{}{}", left, line, " ".repeat(pad), right));
    }
    rows.push(style(format!("╚{}╝", border)).fg(accent).bold().to_string());
    rows.push(String::new());
    rows
}

/// Lines describing the selected commit and its current dates.
pub fn commit_lines(commit: &CommitDates) -> Vec<String> {
    vec![
        style(format!("commit {}", commit.hash)).yellow().to_string(),
        style(format!("GIT_AUTHOR_DATE=\"{}\"", commit.author_date))
            .yellow()
            .to_string(),
        style(format!("GIT_COMMITTER_DATE=\"{}\"", commit.committer_date))
            .yellow()
            .to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    fn commit() -> CommitDates {
        CommitDates {
            hash: "0cfd8742049972a90b68021353add7a3b5134316".to_string(),
            author_date: "2019-07-26 09:43:44 -0500".to_string(),
            committer_date: "2019-07-26 09:43:44 -0500".to_string(),
        }
    }

    #[test]
    fn commit_lines_show_hash_and_dates() {
        let lines = commit_lines(&commit());
        let s = strip_ansi_codes(&lines.join("\n")).to_string();

        assert!(s.contains("commit 0cfd8742049972a90b68021353add7a3b5134316"));
        assert!(s.contains("GIT_AUTHOR_DATE=\"2019-07-26 09:43:44 -0500\""));
        assert!(s.contains("GIT_COMMITTER_DATE=\"2019-07-26 09:43:44 -0500\""));
    }

    #[test]
    fn framed_rows_share_one_visible_width() {
        let lines = vec!["short".to_string(), "a much longer line".to_string()];
        let rows = framed_rows(&lines, Color::Yellow);

        // blank, top, two content rows, bottom, blank
        assert_eq!(rows.len(), 6);
        let widths: Vec<usize> = rows[1..5].iter().map(|r| measure_text_width(r)).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(strip_ansi_codes(&rows[2]).starts_with("║ short "));
    }

    #[test]
    fn date_formats_list_iso8601() {
        assert!(DATE_FORMATS.contains("iso8601:        2006-07-03 17:18:43 -0500"));
    }
}
