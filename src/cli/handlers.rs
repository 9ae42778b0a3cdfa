use std::error::Error;

use crate::cli::commands::{Cli, Commands, SearchArgs};
use crate::io::data_io::load_dataset;
use crate::mock::sample_dataset;
use crate::model::{Dataset, Priority};
use crate::ops::{search, todo_ops};
use crate::vm::{
    ReminderViewModel, TodoViewModel, to_reminder_view_model, to_todo_view_model, todo_progress,
};

/// Load the dataset named on the command line, or the built-in sample data.
pub fn load_data(cli: &Cli) -> Result<Dataset, Box<dyn Error>> {
    match &cli.data {
        Some(path) => Ok(load_dataset(path)?),
        None => Ok(sample_dataset()),
    }
}

/// Dispatch a parsed subcommand.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let data = load_data(&cli)?;

    let todos: Vec<TodoViewModel> = data
        .todos
        .iter()
        .map(|t| to_todo_view_model(t, &data.tasks, &data.tags, &data.projects))
        .collect();
    let reminders: Vec<ReminderViewModel> = data
        .reminders
        .iter()
        .map(|r| to_reminder_view_model(r, &data.tasks, &data.tags))
        .collect();

    match cli.command {
        Some(Commands::Today) => cmd_today(&todos, cli.json),
        Some(Commands::Search(args)) => cmd_search(&args, &todos, &reminders, cli.json),
        Some(Commands::Dump) => cmd_dump(&data),
        None => Ok(()), // no subcommand is handled in main (TUI)
    }
}

fn cmd_today(todos: &[TodoViewModel], json: bool) -> Result<(), Box<dyn Error>> {
    let today = todo_ops::today_todos(todos);
    if json {
        println!("{}", serde_json::to_string_pretty(&today)?);
        return Ok(());
    }
    if today.is_empty() {
        println!("nothing due today");
        return Ok(());
    }
    for todo in &today {
        print_todo_line(todo);
    }
    Ok(())
}

fn cmd_search(
    args: &SearchArgs,
    todos: &[TodoViewModel],
    reminders: &[ReminderViewModel],
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let Some(re) = search::compile_query(&args.pattern) else {
        return Err("empty search pattern".into());
    };
    let todo_hits = search::search_todos(&re, todos);
    let reminder_hits = search::search_reminders(&re, reminders);

    if json {
        let out = serde_json::json!({
            "query": args.pattern,
            "todos": todo_hits,
            "reminders": reminder_hits,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if todo_hits.is_empty() && reminder_hits.is_empty() {
        println!("no matches for '{}'", args.pattern);
        return Ok(());
    }
    if !todo_hits.is_empty() {
        println!("todos:");
        for todo in &todo_hits {
            print_todo_line(todo);
        }
    }
    if !reminder_hits.is_empty() {
        println!("reminders:");
        for reminder in &reminder_hits {
            println!("  {} ({})", reminder.title, reminder.time);
        }
    }
    Ok(())
}

fn cmd_dump(data: &Dataset) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn print_todo_line(todo: &TodoViewModel) {
    let marker = match todo.priority {
        Priority::High => "!",
        Priority::Normal => " ",
    };
    let tags: Vec<String> = todo.tags.iter().map(|t| format!("#{}", t.text)).collect();
    let project = todo
        .project
        .as_ref()
        .map(|p| format!(" ({})", p.project_name))
        .unwrap_or_default();
    println!(
        "  [{marker}] {} {:>3}%{project} {}",
        todo.title,
        todo_progress(todo),
        tags.join(" ")
    );
}
