//! task-calendar - a daily to-do calendar in the terminal

use std::path::PathBuf;
use std::process::exit;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use task_calendar::calendar::{MonthView, DAY_NAMES};
use task_calendar::client::TaskClient;
use task_calendar::session::Session;
use task_calendar::store::HttpTaskStore;
use task_calendar::utils::{day_cell, print_task_list};
use task_calendar::{DateKey, Planner};


#[derive(Parser, Debug)]
#[command(name = "task-calendar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the task resource
    #[arg(long, global = true, env = "TASK_CALENDAR_API_URL")]
    api_url: Option<String>,

    /// The user whose tasks are managed
    #[arg(long, global = true, env = "TASK_CALENDAR_USER_ID")]
    user_id: Option<String>,

    /// Where the "logged in" flag is stored
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in (this is a local flag only)
    Login,
    /// Log out
    Logout,
    /// Display a month calendar, with the status of its days
    Month {
        /// Year (defaults to the current one)
        #[arg(long)]
        year: Option<i32>,
        /// Month, from 1 to 12 (defaults to the current one)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Fetch every day of the month, instead of only today
        #[arg(long)]
        load: bool,
    },
    /// Display the tasks of a day
    Show {
        /// The day, as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Add a task to a day
    Add {
        text: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Mark a task of a day as done (or not done anymore)
    Toggle {
        index: usize,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Remove a task from a day
    Delete {
        index: usize,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Display or edit the shared default tasks
    #[command(subcommand)]
    Defaults(DefaultsCommands),
}

#[derive(Subcommand, Debug)]
enum DefaultsCommands {
    /// Display the shared default tasks
    Show,
    /// Add a shared default task
    Add { text: String },
    /// Mark a shared default task as done (or not done anymore)
    Toggle { index: usize },
    /// Remove a shared default task
    Delete { index: usize },
}

fn key_for(date: Option<NaiveDate>) -> DateKey {
    match date {
        Some(date) => DateKey::from_date(&date),
        None => DateKey::today(),
    }
}


#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Some(url) = &cli.api_url {
        task_calendar::config::set(&task_calendar::config::API_URL, url.clone());
    }
    if let Some(user_id) = &cli.user_id {
        task_calendar::config::set(&task_calendar::config::USER_ID, user_id.clone());
    }

    let session_path = cli.session_file.clone().unwrap_or_else(Session::default_file);
    let mut session = match Session::from_file(&session_path) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    };

    match cli.command {
        Commands::Login => {
            if let Err(err) = session.log_in() {
                eprintln!("Unable to log in: {}", err);
                exit(1);
            }
            println!("Logged in");
            return;
        },
        Commands::Logout => {
            if let Err(err) = session.log_out() {
                eprintln!("Unable to log out: {}", err);
                exit(1);
            }
            println!("Logged out");
            return;
        },
        _ => (),
    }

    if session.is_logged_in() == false {
        eprintln!("You are not logged in. Run `task-calendar login` first");
        exit(2);
    }

    let store = match HttpTaskStore::from_config() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Invalid task server configuration: {}", err);
            exit(2);
        }
    };
    let mut planner = Planner::new(TaskClient::new(store));

    let result = run(&mut planner, cli.command).await;
    planner.client().wait_for_pending_writes().await;

    if let Err(err) = result {
        eprintln!("{}", err);
        exit(1);
    }
}

async fn run(planner: &mut Planner<HttpTaskStore>, command: Commands) -> Result<(), task_calendar::Error> {
    match command {
        Commands::Login | Commands::Logout => (),
        Commands::Month { year, month, load } => {
            let current = MonthView::current();
            let month0 = month.map(|m| m - 1).unwrap_or(current.month0());
            let year = year.unwrap_or(current.year());
            let month = match MonthView::new(year, month0) {
                Some(month) => month,
                None => {
                    eprintln!("Year {} is out of the supported range", year);
                    exit(2);
                }
            };
            if load {
                planner.load_month(&month).await;
            } else {
                planner.tasks_for(&DateKey::today()).await;
            }
            print_month(planner, &month);
        },
        Commands::Show { date } => {
            let key = key_for(date);
            let tasks = planner.tasks_for(&key).await;
            match key.to_date() {
                Some(date) => println!("Tasks for {}", date.format("%A, %B %-d %Y")),
                None => println!("Tasks for {}", key),
            }
            print_task_list(&tasks);
        },
        Commands::Add { text, date } => {
            let key = key_for(date);
            let tasks = planner.add_task(&key, &text).await?;
            print_task_list(&tasks);
        },
        Commands::Toggle { index, date } => {
            let key = key_for(date);
            let tasks = planner.toggle_task(&key, index).await?;
            print_task_list(&tasks);
        },
        Commands::Delete { index, date } => {
            let key = key_for(date);
            let tasks = planner.delete_task(&key, index).await?;
            print_task_list(&tasks);
        },
        Commands::Defaults(DefaultsCommands::Show) => {
            let tasks = planner.refresh_shared_defaults().await;
            println!("Shared default tasks");
            print_task_list(&tasks);
        },
        Commands::Defaults(DefaultsCommands::Add { text }) => {
            planner.refresh_shared_defaults().await;
            let tasks = planner.add_default_task(&text).await?;
            print_task_list(&tasks);
        },
        Commands::Defaults(DefaultsCommands::Toggle { index }) => {
            planner.refresh_shared_defaults().await;
            let tasks = planner.toggle_default_task(index).await?;
            print_task_list(&tasks);
        },
        Commands::Defaults(DefaultsCommands::Delete { index }) => {
            planner.refresh_shared_defaults().await;
            let tasks = planner.delete_default_task(index).await?;
            print_task_list(&tasks);
        },
    }
    Ok(())
}

fn print_month(planner: &Planner<HttpTaskStore>, month: &MonthView) {
    let today = chrono::Local::now().date_naive();

    println!("{:^35}", month.to_string());
    for name in DAY_NAMES.iter() {
        print!("{:>5}", name);
    }
    println!();

    for _ in 0..month.first_weekday() {
        print!("{:>5}", "");
    }
    for (day, status) in planner.month_statuses(month) {
        print!("{}", day_cell(day, status, month.is_day(day, &today)));
        if (month.first_weekday() + day) % 7 == 0 {
            println!();
        }
    }
    println!();
    println!("  ✓ completed   ~ incomplete   . empty   * today");
}
