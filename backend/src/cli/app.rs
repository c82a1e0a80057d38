//! Wires adapters and services together and executes one command.

use std::path::Path;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use mockable::{Clock, DefaultClock};
use social_backend::domain::ports::{KeyValueStore, Notifier};
use social_backend::domain::{
    AccountService, Authenticator, CategoryFilter, DashboardService, FeedQuery, LoginForm, Post,
    PostForm, PostId, RegistrationForm, SearchScope, SessionStore, TokenCodec, category_counts,
};
use social_backend::example_data::home_feed_posts;
use social_backend::outbound::{
    DirKeyValueStore, InMemoryIdentityDirectory, KeyValuePostRepository, TracingNotifier,
};
use tracing::debug;

use super::{Command, PostArgs, PostsCommand, RegisterArgs};

/// Services backing a single `social` invocation.
pub struct App {
    clock: Arc<dyn Clock>,
    account: AccountService,
    dashboard: DashboardService<KeyValuePostRepository>,
}

impl App {
    /// Open the store under `storage_dir` and build every service over it.
    pub fn open(storage_dir: &Path) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(
            DirKeyValueStore::open(storage_dir).wrap_err("failed to open local storage")?,
        );
        debug!(path = %storage_dir.display(), "opened local storage");

        let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
        let codec = TokenCodec::new(clock.clone());
        let sessions = SessionStore::new(store.clone(), codec.clone());
        let directory = Arc::new(InMemoryIdentityDirectory::seeded()?);
        let authenticator = Authenticator::new(directory, codec);

        Ok(Self {
            account: AccountService::new(
                Arc::new(authenticator),
                sessions.clone(),
                notifier.clone(),
            ),
            dashboard: DashboardService::new(
                Arc::new(KeyValuePostRepository::new(store)),
                sessions,
                notifier,
                clock.clone(),
            ),
            clock,
        })
    }

    /// Execute `command`, printing results to stdout.
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Login { email, password } => {
                let identity = self.account.login(&LoginForm::new(email, password)).await?;
                println!("Signed in as {} <{}>", identity.full_name(), identity.email());
            }
            Command::Register(args) => {
                let identity = self.account.register(&registration_form(args)).await?;
                println!("Registered {} <{}>", identity.full_name(), identity.email());
            }
            Command::Logout => self.account.logout()?,
            Command::Whoami => match self.account.current().into_identity() {
                Some(identity) => println!(
                    "{} <{}> ({})",
                    identity.full_name(),
                    identity.email(),
                    identity.role()
                ),
                None => println!("Not signed in"),
            },
            Command::Feed { category, search } => self.show_feed(category, &search)?,
            Command::Posts(posts) => self.run_posts(posts).await?,
        }
        Ok(())
    }

    fn show_feed(&self, category: CategoryFilter, search: &str) -> Result<()> {
        let posts = home_feed_posts(self.clock.as_ref())?;
        let tabs = category_counts(&posts)
            .tabs()
            .into_iter()
            .map(|(label, count)| format!("{label} ({count})"))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{tabs}");

        let visible = FeedQuery::new(SearchScope::HomeFeed)
            .with_category(category)
            .with_search(search)
            .apply(&posts);
        print_posts(&visible);
        Ok(())
    }

    async fn run_posts(&self, command: PostsCommand) -> Result<()> {
        match command {
            PostsCommand::List { category, search } => {
                let posts = self.dashboard.list(category, &search).await?;
                println!("Your Posts ({})", posts.len());
                print_posts(&posts);
            }
            PostsCommand::Create(args) => {
                let post = self.dashboard.create(&post_form(args)).await?;
                println!("Created post {}", post.id());
            }
            PostsCommand::Edit { id, post } => {
                let id = PostId::new(id)?;
                let post = self.dashboard.update(&id, &post_form(post)).await?;
                println!("Updated post {}", post.id());
            }
            PostsCommand::Delete { id } => {
                let id = PostId::new(id)?;
                self.dashboard.delete(&id).await?;
                println!("Deleted post {id}");
            }
            PostsCommand::Stats => {
                let stats = self.dashboard.stats().await?;
                println!("Total Posts: {}", stats.total_posts);
                println!("Total Views: {}", stats.total_views);
            }
        }
        Ok(())
    }
}

fn registration_form(args: RegisterArgs) -> RegistrationForm {
    RegistrationForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        password: args.password.into(),
        confirm_password: args.confirm_password.into(),
    }
}

fn post_form(args: PostArgs) -> PostForm {
    PostForm::new(args.category, args.title, args.content)
}

fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found");
        return;
    }
    for post in posts {
        println!(
            "[{}] {} ({}) by {}, {} views, {}",
            post.id(),
            post.title(),
            post.category(),
            post.author(),
            post.views(),
            post.created_at().format("%Y-%m-%d"),
        );
    }
}
