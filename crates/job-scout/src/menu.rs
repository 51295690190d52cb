//! Interactive main menu.
//!
//! Owns the working table and drives the fetch → filter → chart → save flow
//! from numbered menu choices. Every expected failure is printed and the
//! menu resumes; only the explicit exit choice (or stdin EOF) ends the loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::Local;

use scout_core::error::ScoutError;
use scout_core::formatting;
use scout_core::models::JobTable;
use scout_core::settings::Settings;
use scout_data::aggregate;
use scout_data::fetcher::Fetcher;
use scout_data::filter::filter_by_keyword;
use scout_data::persister;
use scout_ui::chart_export;
use scout_ui::chart_view::{self, ChartData};
use scout_ui::themes::Theme;

/// Maximum number of matching rows previewed after a search.
const PREVIEW_ROWS: usize = 5;

const TITLE_WIDTH: usize = 38;
const COMPANY_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 24;

// ── App ───────────────────────────────────────────────────────────────────────

/// Top-level application state.
///
/// The working table is ordinary instance state: fetched or loaded once,
/// then reused across menu iterations until replaced.
pub struct App {
    fetcher: Fetcher,
    theme: Theme,
    working: Option<JobTable>,
}

impl App {
    /// Build the application from resolved settings.
    pub fn new(settings: &Settings) -> scout_core::error::Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(settings.api_url.clone(), settings.timeout_secs)?,
            theme: Theme::from_name(&settings.theme),
            working: None,
        })
    }

    /// Run the menu loop on stdin until the user exits.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        self.run_with_input(&mut input)
    }

    /// Menu loop against an arbitrary input source (tests drive this with a
    /// scripted reader).
    fn run_with_input(&mut self, input: &mut impl BufRead) -> anyhow::Result<()> {
        print_banner();

        loop {
            print_menu();
            let Some(choice) = prompt(input, "Select an option: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.search(input)?,
                "2" => self.load_file(input)?,
                "3" => {
                    println!("\nGoodbye - thanks for using Job Scout.");
                    break;
                }
                _ => println!("[warning] Invalid selection, please choose again."),
            }
        }

        Ok(())
    }

    // ── Menu actions ──────────────────────────────────────────────────────────

    /// Menu option 1: ensure a working table, filter it, preview, then offer
    /// charting and saving of the matches.
    fn search(&mut self, input: &mut impl BufRead) -> io::Result<()> {
        if self.working.is_none() && !self.fetch_working() {
            return Ok(());
        }

        let Some(keyword) =
            prompt(input, "\n[search] Enter a keyword or category (e.g. Python, Data): ")?
        else {
            return Ok(());
        };
        let Some(table) = self.working.as_ref() else {
            return Ok(());
        };

        let matches = filter_by_keyword(table, &keyword);
        if matches.is_empty() {
            println!("[result] No listings matched that keyword.");
            return Ok(());
        }

        println!(
            "\n[result] {} listings matched '{}'.",
            formatting::format_count(matches.len()),
            keyword.trim()
        );
        print_preview(&matches);

        let Some(answer) = prompt(input, "\nDraw a category chart for these results? (Y/N): ")?
        else {
            return Ok(());
        };
        if confirmed(&answer) {
            self.show_chart(input, &matches, keyword.trim())?;
        }

        self.offer_save(input, &matches)
    }

    /// Menu option 2: load a file into the working table, then offer a chart
    /// of the loaded data.
    fn load_file(&mut self, input: &mut impl BufRead) -> io::Result<()> {
        let Some(filename) =
            prompt(input, "\n[load] Enter the filename to load (with extension): ")?
        else {
            return Ok(());
        };

        match persister::load(Path::new(&filename)) {
            Ok(table) => {
                println!(
                    "[ok] Loaded {} rows from '{}'.",
                    formatting::format_count(table.len()),
                    filename
                );
                self.working = Some(table);

                let Some(answer) = prompt(input, "Draw a chart from the loaded data? (Y/N): ")?
                else {
                    return Ok(());
                };
                if confirmed(&answer) {
                    if let Some(table) = self.working.as_ref() {
                        self.show_chart(input, table, "Loaded Data")?;
                    }
                }
            }
            // The previous working table stays untouched on any load failure.
            Err(err) => println!("[error] {err}"),
        }

        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Fetch listings into the working table. Returns `true` on success.
    fn fetch_working(&mut self) -> bool {
        println!("\n[system] Fetching the latest job listings...");
        match self.fetcher.fetch() {
            Ok(table) => {
                println!(
                    "[ok] Loaded {} listings.",
                    formatting::format_count(table.len())
                );
                self.working = Some(table);
                true
            }
            Err(ScoutError::NoData) => {
                println!("[notice] The server returned no job listings.");
                false
            }
            Err(err) => {
                println!("[error] {err}");
                false
            }
        }
    }

    /// Aggregate categories, offer the PNG export, then display the chart
    /// interactively regardless of the save choice.
    fn show_chart(&self, input: &mut impl BufRead, table: &JobTable, label: &str) -> io::Result<()> {
        println!("\n[system] Preparing the category chart...");

        let bars = match aggregate::top_categories(table) {
            Ok(bars) => bars,
            Err(err) => {
                println!("[error] {err}");
                return Ok(());
            }
        };
        if bars.is_empty() {
            println!("[notice] No category values to chart.");
            return Ok(());
        }

        let data = ChartData::new(label, bars);

        if let Some(answer) = prompt(input, "Save the chart as an image file? (Y/N): ")? {
            if confirmed(&answer) {
                let filename = chart_export::default_graph_filename(Local::now());
                match chart_export::export_png(&data, Path::new(&filename)) {
                    Ok(()) => println!("[ok] Chart saved as '{filename}'."),
                    Err(err) => println!("[error] {err}"),
                }
            }
        }

        if let Err(err) = chart_view::run_chart(&data, &self.theme) {
            println!("[error] {}", ScoutError::Terminal(err.to_string()));
        }
        Ok(())
    }

    /// Offer to write `table` to the date-stamped CSV file.
    fn offer_save(&self, input: &mut impl BufRead, table: &JobTable) -> io::Result<()> {
        let Some(answer) = prompt(input, "\n[save] Save these results to a CSV file? (Y/N): ")?
        else {
            return Ok(());
        };
        if !confirmed(&answer) {
            return Ok(());
        }

        let filename = persister::default_csv_filename(Local::now());
        match persister::save_csv(table, Path::new(&filename)) {
            Ok(()) => println!("[ok] Results saved as '{filename}'."),
            Err(err) => println!("[error] {err}"),
        }
        Ok(())
    }
}

// ── Console helpers ───────────────────────────────────────────────────────────

fn print_banner() {
    println!("{}", "=".repeat(40));
    println!("   Job Scout v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(40));
}

fn print_menu() {
    println!("\n[main menu]");
    println!("1. Fetch live listings and search");
    println!("2. Load a saved file");
    println!("3. Exit");
}

/// Print the preview table: up to [`PREVIEW_ROWS`] rows of title / company /
/// category, followed by a trailer when more matches exist.
fn print_preview(table: &JobTable) {
    println!();
    println!("{}", preview_header());
    for line in preview_lines(table) {
        println!("{line}");
    }
    if table.len() > PREVIEW_ROWS {
        println!(
            "... (showing first {PREVIEW_ROWS} of {} matches)",
            formatting::format_count(table.len())
        );
    }
}

fn preview_header() -> String {
    format!(
        "{}  {}  {}",
        formatting::truncate_pad("title", TITLE_WIDTH),
        formatting::truncate_pad("company_name", COMPANY_WIDTH),
        formatting::truncate_pad("category", CATEGORY_WIDTH),
    )
}

fn preview_lines(table: &JobTable) -> Vec<String> {
    table
        .rows()
        .iter()
        .take(PREVIEW_ROWS)
        .map(|row| {
            format!(
                "{}  {}  {}",
                formatting::truncate_pad(row.title.as_deref().unwrap_or(""), TITLE_WIDTH),
                formatting::truncate_pad(row.company_name.as_deref().unwrap_or(""), COMPANY_WIDTH),
                formatting::truncate_pad(row.category.as_deref().unwrap_or(""), CATEGORY_WIDTH),
            )
        })
        .collect()
}

/// Uppercase the reply and require an exact `"Y"`; anything else is "no".
fn confirmed(answer: &str) -> bool {
    answer.trim().to_uppercase() == "Y"
}

/// Print `message`, flush, and read one trimmed line.
///
/// Returns `None` at EOF so a closed stdin unwinds to the menu exit path
/// instead of spinning on empty reads.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::models::JobListing;
    use std::io::Cursor;

    fn listing(title: &str, company: &str, category: &str) -> JobListing {
        JobListing {
            title: Some(title.to_string()),
            company_name: Some(company.to_string()),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    /// Settings pointing at an unroutable local endpoint so no test ever
    /// performs a real network fetch.
    fn offline_settings() -> Settings {
        Settings {
            api_url: "http://127.0.0.1:1/jobs".to_string(),
            timeout_secs: 5,
            theme: "dark".to_string(),
            log_level: "INFO".to_string(),
            log_file: None,
            debug: false,
            clear: false,
        }
    }

    // ── confirmed ─────────────────────────────────────────────────────────

    #[test]
    fn test_confirmed_accepts_upper_and_lower_y() {
        assert!(confirmed("Y"));
        assert!(confirmed("y"));
        assert!(confirmed("  y  "));
    }

    #[test]
    fn test_confirmed_rejects_everything_else() {
        assert!(!confirmed("yes"));
        assert!(!confirmed("N"));
        assert!(!confirmed(""));
        assert!(!confirmed("1"));
    }

    // ── prompt ────────────────────────────────────────────────────────────

    #[test]
    fn test_prompt_trims_line() {
        let mut input = Cursor::new("  hello  \n");
        let answer = prompt(&mut input, "? ").unwrap();
        assert_eq!(answer, Some("hello".to_string()));
    }

    #[test]
    fn test_prompt_eof_returns_none() {
        let mut input = Cursor::new("");
        let answer = prompt(&mut input, "? ").unwrap();
        assert_eq!(answer, None);
    }

    // ── preview ───────────────────────────────────────────────────────────

    #[test]
    fn test_preview_lines_caps_at_five_rows() {
        let rows: Vec<JobListing> = (0..8)
            .map(|i| listing(&format!("Job {i}"), "Acme", "QA"))
            .collect();
        let table = JobTable::from_rows(rows);

        let lines = preview_lines(&table);
        assert_eq!(lines.len(), PREVIEW_ROWS);
        assert!(lines[0].contains("Job 0"));
        assert!(lines[4].contains("Job 4"));
    }

    #[test]
    fn test_preview_lines_missing_fields_render_blank() {
        let table = JobTable::from_rows(vec![JobListing {
            title: Some("Solo Title".to_string()),
            ..Default::default()
        }]);
        let lines = preview_lines(&table);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Solo Title"));
    }

    // ── run_with_input ────────────────────────────────────────────────────

    #[test]
    fn test_run_exits_on_choice_three() {
        let mut app = App::new(&offline_settings()).expect("app");
        let mut input = Cursor::new("3\n");
        app.run_with_input(&mut input).expect("run");
    }

    #[test]
    fn test_run_warns_on_invalid_choice_then_exits() {
        let mut app = App::new(&offline_settings()).expect("app");
        let mut input = Cursor::new("x\n9\n3\n");
        app.run_with_input(&mut input).expect("run");
    }

    #[test]
    fn test_run_exits_on_eof() {
        let mut app = App::new(&offline_settings()).expect("app");
        let mut input = Cursor::new("");
        app.run_with_input(&mut input).expect("run");
    }

    #[test]
    fn test_search_with_unreachable_endpoint_reports_and_resumes() {
        // Choice 1 triggers a fetch against the unroutable endpoint; the
        // failure must be reported and the loop must continue to choice 3.
        let mut app = App::new(&offline_settings()).expect("app");
        let mut input = Cursor::new("1\n3\n");
        app.run_with_input(&mut input).expect("run");
        assert!(app.working.is_none(), "failed fetch must not set a table");
    }

    #[test]
    fn test_load_missing_file_leaves_working_table_unchanged() {
        let mut app = App::new(&offline_settings()).expect("app");
        let existing = JobTable::from_rows(vec![listing("Kept", "Acme", "QA")]);
        app.working = Some(existing.clone());

        // Choice 2 with a nonexistent filename, then exit.
        let mut input = Cursor::new("2\n/definitely/not/here.csv\n3\n");
        app.run_with_input(&mut input).expect("run");

        assert_eq!(app.working, Some(existing));
    }

    #[test]
    fn test_load_unsupported_extension_reports_and_resumes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("jobs.txt");
        std::fs::write(&path, "title\n").unwrap();

        let mut app = App::new(&offline_settings()).expect("app");
        let script = format!("2\n{}\n3\n", path.display());
        let mut input = Cursor::new(script);
        app.run_with_input(&mut input).expect("run");
        assert!(app.working.is_none());
    }

    #[test]
    fn test_load_csv_sets_working_table() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("jobs.csv");
        std::fs::write(&path, "title,category\nSRE,DevOps\n").unwrap();

        let mut app = App::new(&offline_settings()).expect("app");
        // Decline the chart offer after the successful load.
        let script = format!("2\n{}\nN\n3\n", path.display());
        let mut input = Cursor::new(script);
        app.run_with_input(&mut input).expect("run");

        let table = app.working.expect("table loaded");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].title.as_deref(), Some("SRE"));
    }
}
