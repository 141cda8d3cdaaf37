// Binary target required for cargo run
// Takes a query on the command line and prints the coordinator's answer

use research_agent::process_message;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: research-agent <query>");
        std::process::exit(1);
    }

    match process_message(&args[1]).await {
        Ok(answer) => println!("{}", answer),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
