use clap::{Parser, Subcommand};
use log::kv::{ToValue, Value};

#[derive(Parser, Debug, PartialEq)]
#[command(version, about)]
pub struct CliArgs {
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Fetch one adventure fragment and print it as JSON.
    Fetch {
        /// Content fragment path, e.g. /content/dam/wknd-shared/en/adventures/...
        #[arg(long, conflicts_with = "slug")]
        path: Option<String>,
        /// Adventure slug, e.g. bali-surf-camp.
        #[arg(long)]
        slug: Option<String>,
    },
    /// Purge the Edge Delivery cache via the admin endpoint.
    ClearCache,
}

impl ToValue for CliArgs {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = CliArgs::parse_from(["self", "--config", "foo", "clear-cache"]);
        assert_eq!(
            args,
            CliArgs {
                config: Some("foo".to_string()),
                command: Command::ClearCache,
            }
        );
    }

    #[test]
    fn test_fetch_by_slug() {
        let args = CliArgs::parse_from(["self", "fetch", "--slug", "bali-surf-camp"]);
        assert_eq!(
            args.command,
            Command::Fetch {
                path: None,
                slug: Some("bali-surf-camp".to_string()),
            }
        );
    }
}
