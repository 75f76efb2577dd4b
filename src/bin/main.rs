use crossterm::style::{Color, Stylize};
use rhyme_core::{Dictionary, PoemAnalysis, RhymeEngine, RhymeLabel};
use rhyme_core::poem::Poem;
use std::process::ExitCode;

// A. E. Housman, "1887" (first two stanzas) - the demo input when no poem
// file is given.
const SAMPLE_POEM: &str = "\
From Clee to heaven the beacon burns,
The shires have seen it plain,
From north and south the sign returns
And beacons burn again.

Look left, look right, the hills are bright,
The dales are light between,
Because 'tis fifty years to-night
That God has saved the Queen.
";

const GROUP_COLORS: [Color; 6] = [
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Blue,
    Color::Red,
];

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let mut dict_path: Option<String> = None;
    let mut poem_path: Option<String> = None;
    let mut as_json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => as_json = true,
            "--dict" => dict_path = args.next(),
            other if poem_path.is_none() => poem_path = Some(other.to_string()),
            other => {
                eprintln!("unexpected argument: {other}");
                eprintln!("usage: rhyme_engine [--dict <cmudict-file>] [--json] [poem-file]");
                return ExitCode::FAILURE;
            }
        }
    }

    let dictionary = match dict_path {
        Some(path) => match Dictionary::from_path(&path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("[ERROR] Could not load dictionary '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Dictionary::sample(),
    };

    let text = match poem_path {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("[ERROR] Could not read poem '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE_POEM.to_string(),
    };

    let poem = Poem::from_text(&text);
    let engine = RhymeEngine::new(dictionary);
    let analysis = engine.analyze(&poem.lines());

    if as_json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("[ERROR] Could not serialize analysis: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&poem, &analysis);
    }
    ExitCode::SUCCESS
}

fn print_report(poem: &Poem, analysis: &PoemAnalysis) {
    println!("{}", poem.title.as_str().bold());
    println!("---------------------------------------------------------------");

    // The analysis is parallel to the flattened lines; walk stanzas and keep
    // a running index so the blank-line layout survives.
    let mut idx = 0;
    for stanza in &poem.stanzas {
        for line in &stanza.lines {
            let label = analysis.assignment[idx];
            let tagged = format!("{} {}", scheme_letter(label), line);
            match label {
                RhymeLabel::Group(g) => {
                    let color = GROUP_COLORS[g % GROUP_COLORS.len()];
                    println!("  {}", tagged.with(color));
                }
                RhymeLabel::Unclassified => {
                    println!("  {tagged}");
                }
            }
            idx += 1;
        }
        println!();
    }

    println!(
        "{} rhyme group(s) across {} line(s)",
        analysis.groups.len(),
        analysis.lines.len()
    );
    for (g, group) in analysis.groups.iter().enumerate() {
        println!("  {}: {}", scheme_letter(RhymeLabel::Group(g)), group.members().join(", "));
    }
}

fn scheme_letter(label: RhymeLabel) -> char {
    match label {
        RhymeLabel::Group(idx) => (b'A' + (idx % 26) as u8) as char,
        RhymeLabel::Unclassified => '-',
    }
}
