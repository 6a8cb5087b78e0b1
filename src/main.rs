// src/main.rs
mod cli;
mod logging;
mod render;

use clap::Parser;
use cli::Args;
use league_table::config::Config;
use league_table::error::AppError;
use league_table::league::LeagueState;
use std::io::stdout;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations before anything touches the network.
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if args.new_api_domain.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(new_domain) = args.new_api_domain {
            config.api_domain = new_domain;
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // Load config first to fail early if there's an issue.
    let config = Config::load().await?;

    let mut state = LeagueState::new(config)?;
    state.bootstrap().await;

    if let Some(team_id) = args.favorite {
        state.set_favorite_team(Some(team_id)).await;
        match state.favorite_team() {
            Some(team) => println!("Favorite team: {}", team.name),
            None => println!("Favorite team cleared."),
        }
    }

    let mut stdout = stdout();

    if let Some(team_id) = args.team {
        let team_name = state
            .teams()
            .iter()
            .find(|t| t.id == team_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "Unknown Team".to_string());
        let history = state.team_history(team_id, args.limit);
        render::render_history(&mut stdout, &team_name, &history)?;
        return Ok(());
    }

    if let Some(sort) = args.sort {
        state.set_sort_preference(sort.into());
        if args.desc {
            // Selecting the same column again flips the direction.
            state.set_sort_preference(sort.into());
        }
    }

    let view = state.sorted_view();
    if view.is_empty() {
        println!("No standings available. Check the API domain with --list-config.");
        return Ok(());
    }

    render::render_standings(&mut stdout, &view, state.favorite_team_id())?;
    Ok(())
}
