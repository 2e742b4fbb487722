use clap::Parser;
use cronify::Trigger;
use std::process;

#[derive(Parser)]
#[command(
    name = "cronify",
    about = "Cron trigger expressions from date/time strings",
    version
)]
struct Cli {
    /// Date/time string (e.g., "13:45:30" or "2022-05-19 14:51:00")
    input: Option<String>,

    /// Validate the input without printing the expression
    #[arg(long)]
    check: bool,

    /// Show the classified trigger as JSON
    #[arg(long)]
    parse: bool,

    /// Resolve month-day inputs against this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let input = match cli.input {
        Some(ref s) => s.as_str(),
        None => {
            eprintln!("error: no date/time string provided");
            process::exit(2);
        }
    };

    let result = match cli.today {
        Some(ref date_str) => {
            let today: jiff::civil::Date = match date_str.parse() {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("error: invalid --today date: {e}");
                    process::exit(1);
                }
            };
            Trigger::parse_on(input, today)
        }
        None => Trigger::parse(input),
    };

    let trigger = match result {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.parse {
        match serde_json::to_string_pretty(&trigger) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    println!("{}", trigger.to_cron());
}
