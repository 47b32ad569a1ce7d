use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ems::application::services::deferred_delete::{DeferredDeleteController, ListViewSnapshot};
use ems::application::services::employee_form_service::EmployeeFormService;
use ems::common::clock::TokioClock;
use ems::common::config::AppConfig;
use ems::infrastructure::services::http_employee_api::HttpEmployeeApi;
use ems::infrastructure::services::route_navigator::RouteNavigator;
use ems::infrastructure::services::tracing_error_sink::TracingErrorSink;
use ems::interfaces::console::commands::Command;
use ems::interfaces::console::renderer::render;
use ems::interfaces::console::{ConsolePage, Outcome};

// Only list or undo-visibility changes redraw; progress ticks do not
fn needs_redraw(previous: &ListViewSnapshot, current: &ListViewSnapshot) -> bool {
    previous.employees != current.employees || previous.show_undo != current.show_undo
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they do not interleave with the table
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();
    let api = Arc::new(
        HttpEmployeeApi::new(&config).context("No se pudo crear el cliente HTTP")?,
    );
    let navigator = Arc::new(RouteNavigator::new());

    let controller = Arc::new(DeferredDeleteController::new(
        api.clone(),
        Arc::new(TracingErrorSink),
        Arc::new(TokioClock),
        &config.undo,
    ));
    let page = ConsolePage::new(
        controller.clone(),
        EmployeeFormService::new(api, navigator.clone()),
    );

    println!("Employee list at {} (type 'help')", config.api_client.base_url);
    controller.load_all().await;
    let mut shown = controller.snapshot();
    print!("{}", render(&shown));

    let mut updates = controller.subscribe();
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let current = updates.borrow_and_update().clone();
            if needs_redraw(&shown, &current) {
                print!("{}", render(&current));
            }
            shown = current;
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            },
        };

        // State changes are drawn by the renderer task
        let explicit = command == Command::List;
        match page.execute(command).await {
            Ok(Outcome::Render) if explicit => print!("{}", render(&controller.snapshot())),
            Ok(Outcome::Render) => {},
            Ok(Outcome::Message(text)) => println!("{}", text),
            Ok(Outcome::Quit) => break,
            Err(e) => println!("Error: {}", e),
        }
        tracing::debug!("Vista actual: {}", navigator.current());
    }

    // An armed deletion is dropped without calling the backend
    controller.dispose();
    renderer.abort();
    Ok(())
}
