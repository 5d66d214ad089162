//! Plain-text verification tables echoed after a run.

use storeshot_prompt::{MockupRecord, PromptRecord};
use storeshot_utils::{cell_or_missing, column_width, ellipsize, pad_cell};

const INDEX_MIN_WIDTH: usize = 5;
const INPUT_FILE_MIN_WIDTH: usize = 20;
const HEADLINE_MIN_WIDTH: usize = 28;
const ROLE_MIN_WIDTH: usize = 15;
const DESCRIPTION_MIN_WIDTH: usize = 40;
const DESCRIPTION_LIMIT: usize = 60;
const DESCRIPTION_KEEP: usize = 58;

pub fn render_marketing_table(records: &[PromptRecord]) -> String {
    let indices: Vec<String> = records.iter().map(|r| r.index.to_string()).collect();
    let files: Vec<&str> = records
        .iter()
        .map(|r| cell_or_missing(r.input_file.as_deref()))
        .collect();

    let widths = [
        column_width(INDEX_MIN_WIDTH, &indices),
        column_width(INPUT_FILE_MIN_WIDTH, &files),
        column_width(HEADLINE_MIN_WIDTH, records.iter().map(|r| &r.headline)),
        column_width(ROLE_MIN_WIDTH, records.iter().map(|r| &r.role)),
    ];

    let rows = records
        .iter()
        .zip(indices.iter().zip(&files))
        .map(|(record, (index, file))| {
            vec![
                index.as_str(),
                *file,
                record.headline.as_str(),
                record.role.as_str(),
            ]
        });

    render(
        &["Index", "Input File", "Headline", "Role"],
        &widths,
        rows,
    )
}

pub fn render_mockup_table(records: &[MockupRecord]) -> String {
    let indices: Vec<String> = records.iter().map(|r| r.index.to_string()).collect();
    let descriptions: Vec<String> = records
        .iter()
        .map(|r| ellipsize(&r.screen_description, DESCRIPTION_LIMIT, DESCRIPTION_KEEP))
        .collect();

    let widths = [
        column_width(INDEX_MIN_WIDTH, &indices),
        column_width(DESCRIPTION_MIN_WIDTH, &descriptions),
    ];

    let rows = indices
        .iter()
        .zip(&descriptions)
        .map(|(index, description)| vec![index.as_str(), description.as_str()]);

    render(&["Index", "Screen Description"], &widths, rows)
}

fn render<'a, I>(headers: &[&str], widths: &[usize], rows: I) -> String
where
    I: IntoIterator<Item = Vec<&'a str>>,
{
    let line = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad_cell(cell, *width))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let header = line(headers);
    let separator = "-".repeat(header.chars().count());

    let mut lines = vec![separator.clone(), header, separator.clone()];
    lines.extend(rows.into_iter().map(|row| line(&row)));
    lines.push(separator);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use storeshot_prompt::{AspectRatio, Resolution};

    fn record(index: usize, input_file: Option<&str>, headline: &str, role: &str) -> PromptRecord {
        PromptRecord {
            index,
            role: role.to_string(),
            headline: headline.to_string(),
            prompt: String::new(),
            input_file: input_file.map(str::to_string),
            device: "iPhone 16 Pro".to_string(),
            aspect_ratio: AspectRatio::Portrait,
            resolution: Resolution::new(1320, 2868),
        }
    }

    #[test]
    fn marketing_table_marks_missing_files() {
        let table = render_marketing_table(&[
            record(1, Some("home.png"), "Discover Zen", "HERO SHOT"),
            record(2, None, "Download Now", "CALL TO ACTION"),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("Index Input File"));
        assert!(lines[3].contains("home.png"));
        assert!(lines[4].contains("NONE"));
        assert!(lines[4].contains("CALL TO ACTION"));
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn marketing_columns_grow_with_long_headlines() {
        let headline = "Meditation that fits in the gap between two meetings";
        let table = render_marketing_table(&[record(1, None, headline, "HERO SHOT")]);
        let header = table.lines().nth(1).expect("header line");
        // index 5, file 20, headline len + 2, role 15, three separators
        assert_eq!(header.len(), 5 + 20 + headline.len() + 2 + 15 + 3);
    }

    #[test]
    fn mockup_table_truncates_long_descriptions() {
        let long = "Dashboard with account balance, spending chart, recent transactions and alerts";
        let table = render_mockup_table(&[MockupRecord {
            index: 1,
            screen_description: long.to_string(),
            prompt: String::new(),
        }]);
        let row = table.lines().nth(3).expect("first row");

        assert!(row.contains(&format!("{}...", &long[..58])));
        assert!(!row.contains("alerts"));
    }
}
