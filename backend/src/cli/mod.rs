//! Command-line surface of the `social` binary.

mod app;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use social_backend::domain::{Category, CategoryFilter};

pub use app::App;

/// Drive the social feed simulation from a terminal.
#[derive(Debug, Parser)]
#[command(name = "social", version, about)]
pub struct Cli {
    /// Directory holding the local key/value store. Overrides `SOCIAL_STORAGE_DIR`.
    #[arg(long, value_name = "path", global = true)]
    pub storage_dir: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in; unknown emails are provisioned automatically.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    Register(RegisterArgs),
    /// Sign out and forget the stored session.
    Logout,
    /// Show the signed-in identity.
    Whoami,
    /// Browse the home feed.
    Feed {
        /// `All Posts`, `all`, or a category name.
        #[arg(long, default_value = "All Posts")]
        category: CategoryFilter,
        /// Case-insensitive text matched against title, content, and author.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Manage your posts.
    #[command(subcommand)]
    Posts(PostsCommand),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
}

#[derive(Debug, Subcommand)]
pub enum PostsCommand {
    /// List stored posts.
    List {
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Create a post.
    Create(PostArgs),
    /// Replace the title, content, and category of a post.
    Edit {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        post: PostArgs,
    },
    /// Delete a post.
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Show post and view totals.
    Stats,
}

#[derive(Debug, Args)]
pub struct PostArgs {
    #[arg(long, default_value = "Article")]
    pub category: Category,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[rstest]
    fn feed_defaults_to_all_posts() {
        let cli = Cli::try_parse_from(["social", "feed"]).expect("parse");
        match cli.command {
            Command::Feed { category, search } => {
                assert_eq!(category, CategoryFilter::All);
                assert!(search.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[rstest]
    fn posts_create_parses_category() {
        let cli = Cli::try_parse_from([
            "social", "posts", "create", "--category", "Job", "--title", "Hiring", "--content",
            "Rust",
        ])
        .expect("parse");
        match cli.command {
            Command::Posts(PostsCommand::Create(post)) => {
                assert_eq!(post.category, Category::Job);
                assert_eq!(post.title, "Hiring");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[rstest]
    #[case("job")]
    #[case("Jobs")]
    fn posts_create_rejects_unknown_category(#[case] category: &str) {
        let result = Cli::try_parse_from(["social", "posts", "create", "--category", category]);
        assert!(result.is_err());
    }
}
