//! Application runner for the `slacktab` binary.

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value, json};

use crate::client::{SlackClient, connect};
use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::EnvSource;
use crate::core::constants::{APP_NAME, APP_NAME_LOWER, ENV_LOG};
use crate::tables::{self, TableDef, conversations, messages, users};

pub struct App;

impl App {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Some(Commands::Whoami) => Self::whoami(&cli_config).await,
            Some(Commands::Scan {
                table,
                limit,
                channel,
            }) => Self::scan(&cli_config, &table, limit, channel.as_deref()).await,
            Some(Commands::Tables) | None => {
                Self::print_tables();
                Ok(())
            }
        }
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        // Rows go to stdout; logs stay on stderr.
        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .with_writer(std::io::stderr)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    fn client(cli: &CliConfig) -> Result<SlackClient> {
        let client = connect(&EnvSource).context("cannot build Slack client")?;
        Ok(client.with_debug(cli.debug))
    }

    fn banner() -> String {
        format!(
            "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
            APP_NAME,
            env!("CARGO_PKG_VERSION")
        )
    }

    fn print_tables() {
        println!();
        println!("{}", Self::banner());
        println!();
        for table in tables::all() {
            println!("{}  ({})", table.name, table.description);
            for column in table.columns {
                println!(
                    "  {:<20} {:<10} {}",
                    column.name,
                    column.kind.as_str(),
                    column.description
                );
            }
            println!();
        }
    }

    async fn whoami(cli: &CliConfig) -> Result<()> {
        let client = Self::client(cli)?;
        let auth = client.auth_test().await.context("auth.test failed")?;
        let identity = json!({
            "url": auth.url,
            "team": auth.team,
            "team_id": auth.team_id,
            "user": auth.user,
            "user_id": auth.user_id,
        });
        println!("{}", serde_json::to_string_pretty(&identity)?);
        Ok(())
    }

    async fn scan(
        cli: &CliConfig,
        table_name: &str,
        limit: u32,
        channel: Option<&str>,
    ) -> Result<()> {
        let client = Self::client(cli)?;
        let (table, rows) = match table_name {
            "slack_user" => {
                let page = client
                    .users_list(limit, None)
                    .await
                    .context("users.list failed")?;
                let rows = page
                    .members
                    .iter()
                    .map(users::row)
                    .collect::<Result<Vec<_>, _>>()?;
                (users::table(), rows)
            }
            "slack_conversation" => {
                let page = client
                    .conversations_list(limit, None)
                    .await
                    .context("conversations.list failed")?;
                let rows = page
                    .channels
                    .iter()
                    .map(conversations::row)
                    .collect::<Result<Vec<_>, _>>()?;
                (conversations::table(), rows)
            }
            "slack_message" => {
                let Some(channel) = channel else {
                    bail!("--channel is required when scanning slack_message");
                };
                let page = client
                    .conversations_history(channel, limit)
                    .await
                    .context("conversations.history failed")?;
                let rows = page
                    .messages
                    .iter()
                    .map(|m| messages::row(channel, m))
                    .collect::<Result<Vec<_>, _>>()?;
                (messages::table(), rows)
            }
            other => bail!("unknown table: {} (see `slacktab tables`)", other),
        };

        tracing::debug!(table = table.name, rows = rows.len(), "Scan complete");
        Self::print_rows(&table, rows)
    }

    fn print_rows(table: &TableDef, rows: Vec<Vec<Value>>) -> Result<()> {
        for row in rows {
            let mut record = Map::new();
            for (column, value) in table.columns.iter().zip(row) {
                record.insert(column.name.to_string(), value);
            }
            println!("{}", serde_json::to_string(&Value::Object(record))?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_names_the_app() {
        let banner = App::banner();
        assert!(banner.contains(APP_NAME));
        assert!(banner.contains(env!("CARGO_PKG_VERSION")));
    }
}
