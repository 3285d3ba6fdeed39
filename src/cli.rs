use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;
use crate::filter::{FilterQuery, SortOption};

#[derive(Debug, Parser)]
#[command(name = "bookcase", version, about = "Browse a remote book catalog in the terminal")]
pub struct Cli {
    /// Path to config file (default: ~/.config/bookcase/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog URL
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Override the request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the filtered catalog as cards
    List {
        /// Case-insensitive substring of the title
        #[arg(long, default_value = "")]
        search: String,

        /// Only books released in this year
        #[arg(long)]
        year: Option<i32>,

        /// title-asc, title-desc, releaseDate-asc or releaseDate-desc
        #[arg(long)]
        sort: Option<SortOption>,
    },

    /// Print the full detail of one book
    Show {
        /// Book number
        number: u32,
    },
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            url: self.url.clone(),
            timeout_seconds: self.timeout,
        }
    }
}

impl Command {
    /// Filter query for `list`; `None` for other commands.
    pub fn query(&self) -> Option<FilterQuery> {
        match self {
            Command::List { search, year, sort } => Some(
                FilterQuery::new()
                    .search(search.clone())
                    .year(*year)
                    .sort(*sort),
            ),
            Command::Show { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_flags() {
        let cli = Cli::try_parse_from([
            "bookcase", "list", "--search", "stone", "--year", "1997", "--sort", "title-desc",
        ])
        .unwrap();
        let query = cli.command.unwrap().query().unwrap();
        assert_eq!(query.search, "stone");
        assert_eq!(query.year, Some(1997));
        assert_eq!(query.sort.map(|s| s.as_str()), Some("title-desc"));
    }

    #[test]
    fn rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["bookcase", "list", "--sort", "pages-asc"]).is_err());
    }

    #[test]
    fn global_overrides_after_subcommand() {
        let cli =
            Cli::try_parse_from(["bookcase", "show", "3", "--url", "http://localhost:1/books"])
                .unwrap();
        assert_eq!(cli.overrides().url.as_deref(), Some("http://localhost:1/books"));
        assert!(matches!(cli.command, Some(Command::Show { number: 3 })));
    }

    #[test]
    fn no_command_means_interactive() {
        let cli = Cli::try_parse_from(["bookcase"]).unwrap();
        assert!(cli.command.is_none());
    }
}
