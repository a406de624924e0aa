//! Terminal front-end for the Smooth Business app
//!
//! One screen at a time: render the current view, read a command, dispatch.
//! Delayed redirects (post sign-in, post create) are honored by sleeping
//! until the router's pending deadline and polling it.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use shared::Category;
use smooth_business_app::screens::{
    browse, create_business, create_review, dashboard, details, profile, reviews, sign_in,
    sign_up, Confirmation,
};
use smooth_business_app::{seed, AggregateStore, Config, Params, Router, View};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("smooth_business_app=info,shared=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(environment = %config.environment, "starting smooth business");

    let mut store = AggregateStore::new();
    if config.seed.enabled {
        seed::seed_demo_data(&mut store).context("failed to seed demo data")?;
    }

    App {
        store,
        router: Router::new(),
        config,
        browse_query: browse::BrowseQuery::default(),
        review_filter: reviews::ReviewFilter::default(),
        profile_tab: profile::ProfileTab::default(),
    }
    .run()
}

struct App {
    store: AggregateStore,
    router: Router,
    config: Config,
    browse_query: browse::BrowseQuery,
    review_filter: reviews::ReviewFilter,
    profile_tab: profile::ProfileTab,
}

/// Confirmation that asks on the terminal
struct StdinConfirm;

impl Confirmation for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        matches!(
            read_line(&format!("{} (y/n)", prompt)).as_deref(),
            Ok("y") | Ok("Y") | Ok("yes")
        )
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn read_u8(prompt: &str) -> io::Result<u8> {
    Ok(read_line(prompt)?.parse().unwrap_or(0))
}

fn pick_category() -> io::Result<Option<Category>> {
    for (i, category) in Category::ALL.iter().enumerate() {
        println!("  [{}] {}", i + 1, category);
    }
    let choice: usize = read_line("Category number (blank for none)")?
        .parse()
        .unwrap_or(0);
    Ok(choice
        .checked_sub(1)
        .and_then(|i| Category::ALL.get(i))
        .copied())
}

impl App {
    fn run(mut self) -> Result<()> {
        loop {
            self.await_pending_transition();
            println!();
            println!("{}", self.render());
            let command = read_line("> ")?;
            if command == "q" && self.router.current() == View::SignIn {
                tracing::info!("exiting");
                return Ok(());
            }
            self.dispatch(&command)?;
        }
    }

    /// Sleep through a pending redirect so the success message stays visible
    /// for the configured delay, then let it fire.
    fn await_pending_transition(&mut self) {
        while let Some(deadline) = self.router.next_deadline() {
            let now = Instant::now();
            if now < deadline {
                thread::sleep(deadline - now);
            }
            self.router.poll(Instant::now());
        }
    }

    fn render(&self) -> String {
        match self.router.current() {
            View::SignIn => sign_in::render(),
            View::SignUp => sign_up::render(),
            View::Dashboard => dashboard::render(&self.store),
            View::Create => create_business::render(),
            View::Browse => browse::render(self.store.businesses(), &self.browse_query),
            View::Details => {
                let business = details::selected_business(self.router.params())
                    .and_then(|id| self.store.business(id));
                details::render(business)
            }
            View::Profile => profile::render(&self.store, self.profile_tab),
            View::Reviews => reviews::render(self.store.businesses(), &self.review_filter),
            View::CreateReview => create_review::render(&self.store),
        }
    }

    fn dispatch(&mut self, command: &str) -> Result<()> {
        match self.router.current() {
            View::SignIn => self.on_sign_in(command)?,
            View::SignUp => self.on_sign_up(command)?,
            View::Dashboard => self.on_dashboard(command)?,
            View::Create => self.on_create(command)?,
            View::Browse => self.on_browse(command)?,
            View::Details => self.on_details(command)?,
            View::Profile => self.on_profile(command)?,
            View::Reviews => self.on_reviews(command)?,
            View::CreateReview => self.on_create_review(command)?,
        }
        Ok(())
    }

    fn on_sign_in(&mut self, command: &str) -> Result<()> {
        match command {
            "1" => {
                let form = sign_in::SignInForm {
                    email: read_line("Email")?,
                    password: read_line("Password")?,
                };
                match form.submit(
                    &mut self.store,
                    &mut self.router,
                    self.config.ui.sign_in_delay(),
                    Instant::now(),
                ) {
                    Ok(()) => println!("{}", sign_in::SUCCESS_MESSAGE),
                    Err(errors) => print!("{}", errors),
                }
            }
            "2" => self.router.navigate(View::SignUp, Params::new()),
            _ => {}
        }
        Ok(())
    }

    fn on_sign_up(&mut self, command: &str) -> Result<()> {
        match command {
            "1" => {
                let form = sign_up::SignUpForm {
                    name: read_line("Full name")?,
                    email: read_line("Email")?,
                    phone: read_line("Phone")?,
                    business_name: read_line("Business name")?,
                    password: read_line("Password")?,
                    confirm_password: read_line("Confirm password")?,
                    agree_to_terms: read_line("Agree to the terms? (y/n)")? == "y",
                };
                match form.submit(&mut self.store, &mut self.router) {
                    Ok(()) => println!("{}", sign_up::SUCCESS_MESSAGE),
                    Err(errors) => print!("{}", errors),
                }
            }
            "2" => self.router.navigate(View::SignIn, Params::new()),
            _ => {}
        }
        Ok(())
    }

    fn on_dashboard(&mut self, command: &str) -> Result<()> {
        match command {
            "1" => self.router.navigate(View::Create, Params::new()),
            "2" => self.router.navigate(View::Browse, Params::new()),
            "3" => self.router.navigate(View::Reviews, Params::new()),
            "4" => self.router.navigate(View::Profile, Params::new()),
            "5" => {
                let term = read_line("Search")?;
                dashboard::search(&mut self.router, &term);
                self.browse_query = browse::BrowseQuery::from_params(self.router.params());
            }
            "6" => dashboard::logout(&mut self.store, &mut self.router),
            _ => {}
        }
        Ok(())
    }

    fn on_create(&mut self, command: &str) -> Result<()> {
        match command {
            "1" => {
                let form = create_business::CreateBusinessForm {
                    name: read_line("Business name")?,
                    category: pick_category()?.unwrap_or(Category::Retail),
                    location: read_line("Location")?,
                    phone: read_line("Phone")?,
                    email: read_line("Email")?,
                    website: read_line("Website (optional)")?,
                    description: read_line("Description")?,
                };
                match form.submit(
                    &mut self.store,
                    &mut self.router,
                    self.config.ui.redirect_delay(),
                    Instant::now(),
                ) {
                    Ok(_) => println!("{}", create_business::SUCCESS_MESSAGE),
                    Err(errors) => print!("{}", errors),
                }
            }
            "2" => self.router.navigate(View::Dashboard, Params::new()),
            _ => {}
        }
        Ok(())
    }

    fn on_browse(&mut self, command: &str) -> Result<()> {
        match command.split_once(' ') {
            Some(("v", id)) => {
                if let Ok(id) = id.parse::<u64>() {
                    self.router.navigate(View::Details, Params::with("id", id));
                }
                return Ok(());
            }
            _ => {}
        }
        match command {
            "c" => {
                self.browse_query.category = match pick_category()? {
                    Some(category) => browse::CategoryFilter::Only(category),
                    None => browse::CategoryFilter::All,
                };
            }
            "s" => {
                self.browse_query.sort = match read_line("Sort: [1] rating [2] reviews [3] newest")?
                    .as_str()
                {
                    "2" => browse::SortOrder::MostReviews,
                    "3" => browse::SortOrder::Newest,
                    _ => browse::SortOrder::HighestRating,
                };
            }
            "n" => self.router.navigate(View::Create, Params::new()),
            "b" => {
                self.browse_query = browse::BrowseQuery::default();
                self.router.navigate(View::Dashboard, Params::new());
            }
            _ => {}
        }
        Ok(())
    }

    fn on_details(&mut self, command: &str) -> Result<()> {
        let business_id = details::selected_business(self.router.params());
        match command {
            "r" => {
                let Some(business_id) = business_id else {
                    return Ok(());
                };
                let form = details::ReviewForm {
                    rating: read_u8("Rating (1-5)")?,
                    title: read_line("Title")?,
                    comment: read_line("Comment")?,
                };
                if let Err(errors) = form.submit(&mut self.store, business_id) {
                    print!("{}", errors);
                }
                // Stay on the details screen; the new review shows in place
            }
            "b" => self.router.navigate(View::Browse, Params::new()),
            _ => {}
        }
        Ok(())
    }

    fn on_profile(&mut self, command: &str) -> Result<()> {
        if let Some((action, rest)) = command.split_once(' ') {
            match (action, self.profile_tab) {
                ("e", profile::ProfileTab::MyBusinesses) => {
                    if let Ok(id) = rest.parse::<u64>() {
                        self.edit_business(id)?;
                    }
                }
                ("d", profile::ProfileTab::MyBusinesses) => {
                    if let Ok(id) = rest.parse::<u64>() {
                        if let Err(error) =
                            profile::delete_business(&mut self.store, &mut StdinConfirm, id)
                        {
                            println!("{}", error);
                        }
                    }
                }
                ("e", profile::ProfileTab::MyReviews) => {
                    if let Ok(id) = rest.parse::<u64>() {
                        self.edit_review(id)?;
                    }
                }
                ("d", profile::ProfileTab::MyReviews) => {
                    if let Ok(id) = rest.parse::<u64>() {
                        let owner = profile::my_reviews(&self.store)
                            .into_iter()
                            .find(|(_, _, r)| r.id == id)
                            .map(|(business_id, _, _)| business_id);
                        if let Some(business_id) = owner {
                            if let Err(error) = profile::delete_review(
                                &mut self.store,
                                &mut StdinConfirm,
                                business_id,
                                id,
                            ) {
                                println!("{}", error);
                            }
                        }
                    }
                }
                ("u", _) => {
                    if let Err(error) = profile::upload_picture(&mut self.store, Path::new(rest)) {
                        println!("Could not upload picture: {}", error);
                    }
                }
                _ => {}
            }
            return Ok(());
        }
        match command {
            "1" => self.profile_tab = profile::ProfileTab::MyBusinesses,
            "2" => self.profile_tab = profile::ProfileTab::MyReviews,
            "3" => self.profile_tab = profile::ProfileTab::Settings,
            "n" => self.router.navigate(View::Create, Params::new()),
            "w" => self.router.navigate(View::CreateReview, Params::new()),
            "x" => {
                profile::delete_picture(&mut self.store, &mut StdinConfirm);
            }
            "o" => dashboard::logout(&mut self.store, &mut self.router),
            "b" => self.router.navigate(View::Dashboard, Params::new()),
            _ => {}
        }
        Ok(())
    }

    fn edit_business(&mut self, id: u64) -> Result<()> {
        let Some(current) = profile::EditBusinessForm::prefill(&self.store, id) else {
            println!("Business not found");
            return Ok(());
        };
        let read_or = |prompt: &str, current: &str| -> io::Result<String> {
            let input = read_line(&format!("{} [{}]", prompt, current))?;
            Ok(if input.is_empty() {
                current.to_string()
            } else {
                input
            })
        };
        let form = profile::EditBusinessForm {
            name: read_or("Name", &current.name)?,
            description: read_or("Description", &current.description)?,
            location: read_or("Location", &current.location)?,
            phone: read_or("Phone", &current.phone)?,
        };
        if let Err(errors) = form.submit(&mut self.store, id) {
            print!("{}", errors);
        }
        Ok(())
    }

    fn edit_review(&mut self, review_id: u64) -> Result<()> {
        let Some((business_id, _, _)) = profile::my_reviews(&self.store)
            .into_iter()
            .find(|(_, _, r)| r.id == review_id)
        else {
            println!("Review not found");
            return Ok(());
        };
        let Some(current) = profile::EditReviewForm::prefill(&self.store, business_id, review_id)
        else {
            return Ok(());
        };
        let rating = read_u8(&format!("Rating (1-5) [{}]", current.rating))?;
        let title = read_line(&format!("Title [{}]", current.title))?;
        let comment = read_line(&format!("Comment [{}]", current.comment))?;
        let form = profile::EditReviewForm {
            rating: if rating == 0 { current.rating } else { rating },
            title: if title.is_empty() { current.title } else { title },
            comment: if comment.is_empty() {
                current.comment
            } else {
                comment
            },
        };
        if let Err(errors) = form.submit(&mut self.store, business_id, review_id) {
            print!("{}", errors);
        }
        Ok(())
    }

    fn on_reviews(&mut self, command: &str) -> Result<()> {
        match command {
            "w" => self.router.navigate(View::CreateReview, Params::new()),
            "c" => self.review_filter.category = pick_category()?,
            "r" => {
                let rating = read_u8("Rating (1-5, 0 to clear)")?;
                self.review_filter.rating = (1..=5).contains(&rating).then_some(rating);
            }
            "b" => {
                self.review_filter = reviews::ReviewFilter::default();
                self.router.navigate(View::Dashboard, Params::new());
            }
            _ => {}
        }
        Ok(())
    }

    fn on_create_review(&mut self, command: &str) -> Result<()> {
        match command {
            "1" => {
                let selected = read_line("Business id (blank for first)")?;
                let form = create_review::CreateReviewForm {
                    business_id: selected.parse().ok(),
                    rating: read_u8("Rating (1-5)")?,
                    title: read_line("Title")?,
                    comment: read_line("Comment")?,
                };
                match form.submit(
                    &mut self.store,
                    &mut self.router,
                    self.config.ui.redirect_delay(),
                    Instant::now(),
                ) {
                    Ok(_) => println!("{}", create_review::SUCCESS_MESSAGE),
                    Err(errors) => print!("{}", errors),
                }
            }
            "2" => self.router.navigate(View::Reviews, Params::new()),
            _ => {}
        }
        Ok(())
    }
}
