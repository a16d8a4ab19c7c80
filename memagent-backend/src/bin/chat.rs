//! Terminal chat front-end: a line-oriented loop over the same agent the
//! HTTP server exposes.

use std::io::{self, BufRead, Write};

use dotenv::dotenv;

use memagent_backend::agent::Agent;
use memagent_backend::config::Config;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    println!("MemAgent Simple Chat");
    println!("========================================");
    println!("Chat with an AI that remembers everything!");
    println!("Type 'exit' to quit.");
    println!("----------------------------------------");

    let config = Config::from_env();
    let mut agent = match Agent::new(&config) {
        Ok(agent) => agent,
        Err(e) => {
            eprintln!("Error initializing agent: {}", e);
            std::process::exit(1);
        }
    };

    println!("Agent ready! Start chatting below.");
    println!();

    let stdin = io::stdin();
    loop {
        print!("You: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "bye") {
            println!("Goodbye! Your agent will remember everything you taught it.");
            break;
        }

        match agent.process_message(input).await {
            Ok(reply) => println!("Assistant: {}", reply),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
