use clap::Parser;
use chartparse::{ChartParser, Grammar, cyk_parse, generate_random, grammars};

#[derive(Parser)]
#[command(name = "chartparse")]
#[command(about = "Parse sentences with a stock grammar")]
struct Args {
    /// Stock grammar: E0, E_ or E_NP_
    #[arg(short, long, default_value = "E0")]
    grammar: String,
    /// Symbol a full parse must derive
    #[arg(short, long, default_value = chartparse::DEFAULT_START)]
    start: String,
    /// Print every edge as it is added to the chart
    #[arg(long)]
    trace: bool,
    /// Print N random sentences from the grammar instead of parsing
    #[arg(long, value_name = "N")]
    random: Option<usize>,
    /// Probabilistic CYK over its own CNF grammar (E_Prob_Chomsky),
    /// so it takes none of --grammar, --start, --random or --trace
    #[arg(long, conflicts_with_all = ["grammar", "start", "random", "trace"])]
    cyk: bool,
    /// Sentence to parse; without one a prompt is opened
    sentence: Vec<String>,
}

fn print_parses(args: &Args, grammar: &Grammar, words: &[&str]) {
    if args.cyk {
        let cnf = grammars::e_prob_chomsky();
        let table = cyk_parse(words, &cnf);
        match table.tree(cnf.start(), 0, words.len()) {
            Some(tree) => print!("p = {}\n{}", table.best(cnf.start()), tree.render()),
            None => println!("No parse"),
        }
        return;
    }
    let parses = ChartParser::new(grammar).trace(args.trace).parses(words, &args.start);
    if parses.is_empty() {
        println!("No parse");
    }
    for (idx, edge) in parses.iter().enumerate() {
        println!("Parse {}: {}", idx + 1, edge.tree());
        print!("{}", edge.tree().render());
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let grammar = grammars::by_name(&args.grammar)
        .ok_or_else(|| format!("Unknown grammar: {}", args.grammar))?;

    if let Some(count) = args.random {
        let mut rng = rand::rng();
        for _ in 0..count {
            println!("{}", generate_random(&grammar, &args.start, &mut rng).join(" "));
        }
        return Ok(());
    }

    if !args.sentence.is_empty() {
        let input = args.sentence.join(" ");
        print_parses(&args, &grammar, &input.split_whitespace().collect::<Vec<_>>());
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline("~> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let words: Vec<&str> = line.split_whitespace().collect();
                if words.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                print_parses(&args, &grammar, &words);
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
