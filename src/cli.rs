use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};
use league_table::league::models::SortField;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Table column selectable from the command line. Maps onto the library's
/// [`SortField`] so clap stays out of the library crate.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortFieldArg {
    Position,
    Name,
    Points,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
}

impl From<SortFieldArg> for SortField {
    fn from(arg: SortFieldArg) -> Self {
        match arg {
            SortFieldArg::Position => SortField::Position,
            SortFieldArg::Name => SortField::Name,
            SortFieldArg::Points => SortField::Points,
            SortFieldArg::Wins => SortField::Wins,
            SortFieldArg::Draws => SortField::Draws,
            SortFieldArg::Losses => SortField::Losses,
            SortFieldArg::GoalsFor => SortField::GoalsFor,
            SortFieldArg::GoalsAgainst => SortField::GoalsAgainst,
        }
    }
}

/// League Standings Viewer
///
/// Fetches the league fixture from the configured API domain and prints the
/// ranked standings table with points, goal totals, and a five-match form
/// guide. The favorite team selection persists between runs.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show the recent matches of a single team instead of the table.
    #[arg(short = 't', long = "team", help_heading = "Display Options")]
    pub team: Option<i32>,

    /// Cap the number of history entries shown with --team.
    #[arg(short = 'n', long = "limit", help_heading = "Display Options")]
    pub limit: Option<usize>,

    /// Sort the table by a single column instead of the ranking order.
    #[arg(short = 's', long = "sort", help_heading = "Display Options")]
    pub sort: Option<SortFieldArg>,

    /// Reverse the sort direction chosen with --sort.
    #[arg(long = "desc", help_heading = "Display Options", requires = "sort")]
    pub desc: bool,

    /// Toggle the favorite team before rendering. Selecting the current
    /// favorite clears it.
    #[arg(short = 'f', long = "favorite", help_heading = "Display Options")]
    pub favorite: Option<i32>,

    /// Update API domain in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN"
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: info logs are mirrored to stdout in addition to
    /// the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
