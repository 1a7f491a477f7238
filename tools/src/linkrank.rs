use clap::Parser;
use linkrank::{Pages, hits};

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(about = "Hub and authority scores over a small follower network")]
struct Args {
    /// Page name to query for
    #[arg(default_value = "fatih")]
    query: String,
    /// Number of HITS rounds
    #[arg(short, long, default_value_t = 100)]
    iterations: usize,
}

fn network() -> Pages {
    Pages::new(vec![
        ("fatih", vec!["erdem", "mehmetbarancay", "tayyiperdogdu", "cemal",
                       "taylan", "yigit", "serkan", "tuna", "cihanokyay"]),
        ("cemal", vec!["taylan", "yigit", "serkan", "sinan"]),
        ("erdem", vec!["fatih", "yigit"]),
        ("taylan", vec!["yigit", "serkan", "tuna", "cemal"]),
        ("yigit", vec!["yigit", "serkan", "tuna", "can"]),
        ("serkan", vec!["yigit", "serkan", "tuna", "erdem"]),
        ("tuna", vec!["yigit", "taylan", "can"]),
        ("can", vec!["yigit", "serkan", "fatih", "sinan"]),
        ("sinan", vec!["yigit", "serkan", "fatih", "cemal"]),
        ("suatavni", vec!["tayyiperdogdu", "abdullahcicek", "mehmetbarancay"]),
        ("tayyiperdogdu", vec!["abdullahcicek", "suatavni", "feyzullahgulen"]),
        ("abdullahcicek", vec!["feyzullahgulen"]),
        ("feyzullahgulen", vec!["suatavni", "tayyiperdogdu", "suatavni"]),
        ("mehmetbarancay", vec!["suatavni", "feyzullahgulen"]),
        ("cihanokyay", vec!["fatihkadirakin", "sametatdag", "gokmengorgen"]),
        ("fatihkadirakin", vec!["cihanokyay", "berkerpeksag", "johnresig"]),
        ("sametatdag", vec!["cihanokyay", "fatihkadirakin", "berkerpeksag"]),
        ("berkerpeksag", vec!["cihanokyay", "gokmengorgen"]),
        ("gokmengorgen", vec!["cihanokyay", "sametatdag", "berkerpeksag"]),
        ("eminbugrasakal", vec!["eminbugrasakal"]),
        ("johnresig", vec!["douglescrockford", "addyosmani", "marijnhaverbeke"]),
        ("addyosmani", vec!["douglescrockford", "johnresig", "marijnhaverbeke"]),
        ("trevorburnham", vec!["douglescrockford", "johnresig", "marijnhaverbeke"]),
        ("marijnhaverbeke", vec!["douglescrockford", "addyosmani", "trevorburnham"]),
        ("douglescrockford", vec!["martinfowler", "trevorburnham"]),
        ("martinfowler", vec!["douglescrockford", "johnresig"]),
    ])
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let pages = network();
    if !pages.contains(&args.query) {
        return Err(format!("No page named {}", args.query));
    }
    println!("{:<20} {:>10} {:>10}", "page", "hub", "authority");
    for score in hits(&args.query, &pages, args.iterations) {
        println!("{:<20} {:>10.6} {:>10.6}", score.name, score.hub, score.authority);
    }
    Ok(())
}
