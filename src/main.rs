use std::io::{self, Write};
use std::sync::Arc;

use clap::{Arg, Command};
use tokio::io::AsyncBufReadExt;

use rust_client::config::Config;
use rust_client::form::FormState;
use rust_client::notify::{ConsoleNotifier, Notifier};
use rust_client::services::{ProjectsService, SubmitContext};
use rust_client::{AppState, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("Project Form Client")
        .version("1.0")
        .about("Terminal form for creating projects on a board")
        .arg(
            Arg::new("board-id")
                .short('b')
                .long("board-id")
                .value_name("ID")
                .help("Board the new projects belong to")
                .required(true),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("API base URL (overrides API_BASE_URL)"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TITLE")
                .help("Submit a single project with this title and exit"),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .value_name("TEXT")
                .help("Description for --title mode"),
        )
        .get_matches();

    let mut config = Config::from_env()?;
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.api_base_url = base_url.clone();
        config.validate()?;
    }
    init_tracing(&config);

    let board_id: i64 = matches.get_one::<String>("board-id").unwrap().parse()?;
    let ctx = SubmitContext {
        board_id,
        success_toast: config.success_toast(),
    };

    // One-shot mode skips the acknowledgment prompt so it can run in scripts
    let one_shot = matches.contains_id("title");
    let notifier: Arc<dyn Notifier> = if one_shot {
        Arc::new(ConsoleNotifier::without_acknowledge())
    } else {
        Arc::new(ConsoleNotifier::new())
    };
    let app = AppState::new(config, notifier);

    let mut form = FormState::new();

    if one_shot {
        form.title_changed(matches.get_one::<String>("title").unwrap().clone());
        form.description_changed(
            matches
                .get_one::<String>("description")
                .cloned()
                .unwrap_or_default(),
        );
        ProjectsService::submit(&mut form, &ctx, &app.client, app.notifier.as_ref()).await;
        return Ok(());
    }

    println!("📋 Create Project");
    println!("  Board:    {}", ctx.board_id);
    println!("  Endpoint: {}", app.client.add_project_url(ctx.board_id));
    println!("  Type `quit` as the title to exit");
    println!();

    let stdin = tokio::io::stdin();
    let mut lines = tokio::io::BufReader::new(stdin).lines();

    loop {
        print!("Title: ");
        io::stdout().flush()?;
        let Some(title) = lines.next_line().await? else {
            break;
        };
        if title.trim() == "quit" {
            break;
        }
        form.title_changed(title);

        print!("Description: ");
        io::stdout().flush()?;
        let Some(description) = lines.next_line().await? else {
            break;
        };
        form.description_changed(description);

        ProjectsService::submit(&mut form, &ctx, &app.client, app.notifier.as_ref()).await;
        println!();
    }

    Ok(())
}
