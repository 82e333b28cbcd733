//! Plural Template CLI
//!
//! Usage:
//!   plural-template [OPTIONS] [TEMPLATE] [ARGS]...
//!
//! Options:
//!   -n, --count <N>        Count to render for (integer or decimal)
//!       --items <ITEMS>    Comma-separated list items (repeatable); the count
//!                          is the number of items
//!   -j, --join <SEP>       Join the items into argument [0]
//!   -c, --catalog <FILE>   Message catalog (TOML format)
//!   -k, --key <KEY>        Message to render from the catalog
//!       --lenient          Keep unknown brackets as text
//!   -d, --debug            Print the compiled segments to stderr
//!   -g, --grammar          Show template grammar reference
//!   -h, --help             Print help

use std::path::PathBuf;
use std::process;

use clap::Parser;

use plural_template::{
    compile_with, Catalog, CompileOptions, Count, ListRenderer, Renderer,
};

#[derive(Parser)]
#[command(name = "plural-template")]
#[command(about = "Render pluralization templates such as \"[#] dog[|s]\"")]
struct Cli {
    /// Template text (omit when using --catalog)
    template: Option<String>,

    /// Extra arguments, referenced as [0], [1], ...
    args: Vec<String>,

    /// Count to render for (integer or decimal)
    #[arg(short = 'n', long, default_value = "0")]
    count: Count,

    /// Render for a list; the count is the number of items.
    /// Separate items with commas or repeat the flag: --items Bob,Josh
    #[arg(long, value_delimiter = ',')]
    items: Option<Vec<String>>,

    /// Join the items into argument [0] with this separator
    #[arg(short, long)]
    join: Option<String>,

    /// Message catalog file (TOML format)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Message key to render from the catalog
    #[arg(short, long)]
    key: Option<String>,

    /// Keep unknown or unbalanced brackets as literal text
    #[arg(long)]
    lenient: bool,

    /// Debug mode: print the compiled segments
    #[arg(short, long)]
    debug: bool,

    /// Show template grammar reference
    #[arg(short, long)]
    grammar: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.grammar {
        print_grammar();
        return;
    }

    let options = CompileOptions::new().with_lenient(cli.lenient);

    let list = match (&cli.catalog, &cli.template) {
        (Some(path), _) => {
            let catalog = match Catalog::from_file_with(path, &options) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error loading catalog '{}': {}", path.display(), e);
                    process::exit(1);
                }
            };
            let Some(key) = cli.key.as_deref().or(cli.template.as_deref()) else {
                eprintln!("Error: --catalog requires --key");
                process::exit(1);
            };
            match catalog.get(key) {
                Some(message) => message.clone(),
                None => {
                    let keys: Vec<_> = catalog.keys().collect();
                    eprintln!(
                        "Error: unknown message '{}' (available: {})",
                        key,
                        keys.join(", ")
                    );
                    process::exit(1);
                }
            }
        }
        (None, Some(template)) => match compile_with(template.as_str(), &options) {
            Ok(renderer) => ListRenderer::new(renderer, cli.join.as_deref()),
            Err(e) => {
                eprint!("{}", e.format(template, "template"));
                process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("Error: no template given (run --help for usage)");
            process::exit(1);
        }
    };

    if cli.debug {
        print_segments(list.renderer());
    }

    let output = match &cli.items {
        Some(items) => list.render(items),
        None => list.renderer().render(cli.count, &cli.args),
    };
    println!("{}", output);
}

fn print_segments(renderer: &Renderer) {
    eprintln!("=== Segments ===");
    eprintln!("source: {:?}", renderer.source());
    for segment in renderer.segments() {
        eprintln!("  {}", segment);
    }
    if let Some(max) = renderer.max_arg() {
        eprintln!("reads arguments up to [{}]", max);
    }
    eprintln!("================");
}

fn print_grammar() {
    println!(
        r#"PLURAL TEMPLATE GRAMMAR
=======================

DIRECTIVES
----------
[#]                 The count
[single|plural]     "single" when the count is 1, "plural" otherwise
[single|plural|zero]
                    "zero" when the count is 0, then as above
[N]                 The Nth extra argument, counting from 0

Everything outside brackets is literal text. Alternatives inside a group
are plain text: groups cannot contain other directives.

EXAMPLES
--------
plural-template -n 2 "[#] dog[|s]"
    2 dogs

plural-template -n 1 "You have [#] dog[|s] named [0]" Doug
    You have 1 dog named Doug

plural-template -n 0 "[One message|# messages|No messages]"
    No messages

plural-template --items Bob,Josh -j ", " "The following user[|s] [is|are] banned: [0]"
    The following users are banned: Bob, Josh

CATALOGS
--------
[messages]
dogs = "[#] dog[|s]"
banned = {{ template = "User[|s] [is|are] banned: [0]", join = ", " }}

plural-template -c messages.toml -k banned --items Bob"#
    );
}
