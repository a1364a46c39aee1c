//! Terminal todo list.
//!
//! Reads one command per line from stdin and prints both lists after every
//! change. Type `help` for the command list.

use todo::command::{self, Command, HELP, Outcome};
use todo::{TodoConfig, TodoEnvironment, TodoForm, TodoServices, TodoStore, render};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = TodoConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = TodoStore::mount_with(config.store_config(), TodoEnvironment::default());
    for text in &config.seed {
        store.add_todo(text.clone()).await?;
    }

    let result = run(&store).await;
    store.unmount();
    result
}

async fn run(store: &TodoStore) -> anyhow::Result<()> {
    let mut revisions = store.subscribe();
    let mut form = TodoForm::new();
    let mut rendered = render(&store.views().await);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n\n(type `help` for commands)", rendered.text);

    while let Some(line) = lines.next_line().await? {
        match command::apply(Command::parse(&line), &rendered.rows, &mut form, store).await? {
            Outcome::Applied => {},
            Outcome::UnknownRow(row) => println!("no row {row}"),
            Outcome::Help => println!("{HELP}"),
            Outcome::Quit => break,
        }

        if revisions.has_changed()? {
            revisions.borrow_and_update();
            rendered = render(&store.views().await);
            println!("\n{}", rendered.text);
        }
    }

    tracing::info!(todos = store.snapshot().await.len(), "Leaving");
    Ok(())
}
