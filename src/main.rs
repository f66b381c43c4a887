use anyhow::{Result, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use flight_agents::agent::{InfoAgent, QaAgent};
use flight_agents::config::Config;
use flight_agents::models::ResponseMetrics;
use flight_agents::tools::ToolManager;

const SAMPLE_QUESTIONS: [&str; 4] = [
    "When does Flight AI123 depart?",
    "What is the status of Flight AI999?",
    "Tell me about flight ai456",
    "What's up?",
];

#[derive(Parser)]
#[command(name = "flight-agents")]
#[command(about = "Answers flight status questions with an info agent and a QA agent")]
struct Args {
    #[arg(help = "Question about a flight")]
    prompt: Option<String>,

    #[arg(short, long, help = "Run in interactive mode")]
    interactive: bool,

    #[arg(short, long, help = "Verbose output")]
    verbose: bool,

    #[arg(long, help = "Pretty-print JSON output")]
    pretty: bool,

    #[arg(short, long, help = "Path to config.toml")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the info agent's JSON reply for a flight number
    Info {
        flight_number: String,
    },
    /// Run the sample questions through the QA agent
    Demo,
    /// List the flights in the loaded dataset
    Flights,
    /// Call a tool function directly, e.g. `call info_agent get_flight_info '{"flight_number":"AI123"}'`
    Call {
        tool: String,
        function: String,
        /// JSON object with the function arguments
        args: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from the data directory .env file
    if let Ok(data_dir) = flight_agents::utils::paths::get_data_dir() {
        let env_path = data_dir.join(".env");
        if env_path.exists() {
            dotenv::from_path(env_path).ok();
        }
    }

    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if args.pretty {
        config.output.pretty = true;
    }

    let store = Arc::new(config.build_store()?);
    info!("Flight store ready with {} flights", store.len());

    let info_agent = InfoAgent::with_codec(store, config.codec());
    let qa_agent = QaAgent::new(info_agent);

    match args.command {
        Some(Commands::Info { flight_number }) => {
            println!("{}", qa_agent.info_agent().info_agent_request(&flight_number)?);
        }
        Some(Commands::Demo) => {
            for question in SAMPLE_QUESTIONS {
                println!("{}", qa_agent.respond(question)?);
            }
        }
        Some(Commands::Flights) => {
            for record in qa_agent.info_agent().store().records() {
                println!("{}", record);
            }
        }
        Some(Commands::Call { tool, function, args: call_args }) => {
            let call_args = match call_args {
                Some(raw) => serde_json::from_str(&raw)
                    .with_context(|| format!("Tool arguments must be a JSON object: {}", raw))?,
                None => serde_json::json!({}),
            };
            let manager = ToolManager::for_agents(&qa_agent);
            let result = manager.execute_tool(&tool, &function, call_args).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        None => {
            if args.interactive || args.prompt.is_none() {
                run_interactive_mode(&qa_agent)?;
            } else if let Some(prompt) = &args.prompt {
                println!("{}", qa_agent.respond(prompt)?);
            }
        }
    }

    Ok(())
}

fn run_interactive_mode(agent: &QaAgent) -> Result<()> {
    let mut metrics = ResponseMetrics::default();

    println!("\n✈️  Flight Agents");
    println!("════════════════════════");
    println!("💡 Ask about a flight, e.g. 'When does flight AI123 depart?'");
    println!("📝 Type 'help' for commands, 'exit' to quit");
    println!("═══════════════════════════════════════");

    loop {
        print!("\n💬 You: ");
        io::stdout().flush()?;

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            // EOF
            Ok(0) => break,
            Ok(_) => {
                let query = input.trim();

                match query.to_lowercase().as_str() {
                    "exit" | "quit" | "q" => {
                        println!("\n👋 Goodbye!");
                        break;
                    }
                    "help" | "h" => {
                        show_help();
                        continue;
                    }
                    "stats" => {
                        show_stats(&metrics);
                        continue;
                    }
                    "clear" | "cls" => {
                        print!("\x1B[2J\x1B[1;1H");
                        io::stdout().flush()?;
                        continue;
                    }
                    _ => {}
                }

                let (answer, kind) = agent.answer_with_kind(query)?;
                metrics.record(kind);
                println!("\n🤖 {}", answer);
            }
            Err(e) => {
                println!("\n❌ Error reading input: {}", e);
                break;
            }
        }
    }

    Ok(())
}

fn show_help() {
    println!("\n📚 Available Commands:");
    println!("══════════════════════════════════");
    println!("   • exit, quit, q    - Exit the program");
    println!("   • help, h          - Show this help message");
    println!("   • stats            - Show answer statistics for this session");
    println!("   • clear, cls       - Clear the screen");
    println!();
    println!("💡 Questions must name the flight after the word 'flight',");
    println!("   e.g. 'status of flight AI789'.");
}

fn show_stats(metrics: &ResponseMetrics) {
    println!("\n📊 Session Statistics:");
    println!("═══════════════════════");
    println!("   Questions:           {}", metrics.total_requests);
    println!("   Answered:            {}", metrics.answered);
    println!("   Unknown flights:     {}", metrics.lookup_misses);
    println!("   No flight mentioned: {}", metrics.extraction_misses);
    println!("   Hit rate:            {:.0}%", metrics.hit_rate() * 100.0);
}
