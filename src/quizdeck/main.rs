use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use quizdeck::api::{CmdMessage, MessageLevel, QuizdeckApi};
use quizdeck::error::{QuizdeckError, Result};
use quizdeck::store;
use std::io::{BufRead, Write};
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_path = resolve_data_path(&cli);

    let model = store::load(&data_path)?;
    let mut api = QuizdeckApi::new(model);

    if let Some(line) = cli.command {
        let result = api.run_line(&line)?;
        print_messages(&result.messages);
        store::save(&data_path, api.model())?;
        return Ok(());
    }

    repl(&mut api, &data_path)
}

fn resolve_data_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.data {
        return path.clone();
    }
    let proj_dirs =
        ProjectDirs::from("com", "quizdeck", "quizdeck").expect("Could not determine data dir");
    proj_dirs.data_dir().join("records.json")
}

fn repl(api: &mut QuizdeckApi, data_path: &PathBuf) -> Result<()> {
    println!("Welcome to quizdeck. Type 'help' to see the available commands.");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match api.run_line(&line) {
            Ok(result) => {
                print_messages(&result.messages);
                store::save(data_path, api.model())?;
                if result.exit {
                    break;
                }
            }
            // Parse and execution failures are terminal for the line, not
            // for the session: echo the message and reprompt.
            Err(QuizdeckError::Parse(e)) => eprintln!("{}", e.to_string().red()),
            Err(QuizdeckError::Execution(message)) => eprintln!("{}", message.red()),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.normal()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
