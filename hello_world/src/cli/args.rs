use facet::Facet;

#[derive(Facet)]
pub struct Args {
    /// Name of the person to greet
    #[facet(positional, default = "World".to_string())]
    pub name: String,

    /// Show verbose output
    #[facet(named, short = 'v', long, default)]
    pub verbose: bool,

    /// Show this help message
    #[facet(named, short = 'h', long, default)]
    pub help: bool,
}

pub fn print_usage() {
    println!("Usage: hello_world [OPTIONS] [NAME]");
    println!();
    println!("Print a greeting for NAME.");
    println!();
    println!("Arguments:");
    println!("  [NAME]             Name of the person to greet (default: 'World')");
    println!();
    println!("Options:");
    println!("  -v, --verbose      Show verbose output");
    println!("  -h, --help         Show this help message");
    println!();
    println!("Examples:");
    println!("  # Prints 'Hello Sue!'");
    println!("  hello_world Sue");
    println!();
    println!("  # Prints 'Hello World!'");
    println!("  hello_world");
}
