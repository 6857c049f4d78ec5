use std::env;
use std::io::{self, Write};
use std::path::Path;

use kbchat_core::config::Config;
use kbchat_engine::QueryService;

const USAGE: &str = "Usage: kbchat <ask|match|topics|repl> [text...]";

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() { eprintln!("{USAGE}"); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let (cmd, args) = parse_args();
    let service = QueryService::open(Path::new("."), &settings)?;

    match cmd.as_str() {
        "ask" => {
            let question = args.join(" ");
            let result = service.answer(&question);
            println!("{}", result.response);
            if let Some(topic) = result.matched { eprintln!("[matched: {topic}]"); }
        }
        "match" => {
            let question = args.join(" ");
            let diagnostics = service.explain(&question)?;
            println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        }
        "topics" => show_topics(&service),
        "repl" => chat_loop(&service)?,
        _ => { eprintln!("Unknown command: {}\n{USAGE}", cmd); std::process::exit(1); }
    }
    Ok(())
}

fn show_topics(service: &QueryService) {
    let lexicon = service.lexicon();
    println!("📚 {} topics:", lexicon.topics.len());
    for key in lexicon.topic_keys() {
        let phrases = lexicon.synonyms.get(key).map(|p| p.len()).unwrap_or(0);
        println!("  {key} ({phrases} synonyms)");
    }
}

fn show_help() {
    println!("💬 Commands:");
    println!("  /help     - Show this help message");
    println!("  /topics   - List known topics");
    println!("  /quit     - Exit");
    println!("  <text>    - Ask a question");
    println!();
}

fn chat_loop(service: &QueryService) -> anyhow::Result<()> {
    show_help();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/help" | "/h" => show_help(),
            "/topics" | "/t" => show_topics(service),
            "/quit" | "/q" | "quit" | "exit" => {
                println!("👋 Goodbye!");
                break;
            }
            _ => {
                let result = service.answer(input);
                println!("{}\n", result.response);
            }
        }
    }
    Ok(())
}
