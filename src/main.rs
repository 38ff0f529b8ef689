use clap::Parser;
use std::process;
use zoslog_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("z/OS Log Processor - Console Dump Message Extractor");
    println!("===================================================");
    println!();
    println!("Reconstruct logical operator-console messages from raw z/OS syslog");
    println!("and operlog dump files, with JSON and CSV export.");
    println!();
    println!("USAGE:");
    println!("    zoslog-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse dump files and emit the reconstructed messages");
    println!("    check       Parse dump files and report statistics only");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Extract messages from a single dump:");
    println!("    zoslog-processor parse syslog.txt");
    println!();
    println!("    # Export every dump under a directory as JSON:");
    println!("    zoslog-processor parse /var/dumps --output-format json -o messages.json");
    println!();
    println!("    # Keep only IEF messages, dropping a noisy job:");
    println!("    zoslog-processor parse syslog.txt --filter '^IEF' --exclude TESTJOB");
    println!();
    println!("    # Sanity-check a dump without writing anything:");
    println!("    zoslog-processor check syslog.txt");
    println!();
    println!("For detailed help on any command, use:");
    println!("    zoslog-processor <COMMAND> --help");
}
