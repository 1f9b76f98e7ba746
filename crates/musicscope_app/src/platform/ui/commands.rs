use musicscope_core::{EtlJob, Msg, COUNTRY_OPTIONS};

/// One line of user input, or an engine result forwarded to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
}

/// Parses a line typed at the prompt. Blank lines yield `None`.
///
/// A country may be given by name or by its 1-based position in the option list.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match (verb.to_ascii_lowercase().as_str(), rest) {
        ("country" | "c", country) if !country.is_empty() => {
            Command::Dispatch(Msg::PrimarySelected(resolve_country(country)))
        }
        ("compare" | "vs", country) if !country.is_empty() => {
            Command::Dispatch(Msg::ComparisonSelected(resolve_country(country)))
        }
        ("etl", job) => match parse_job(job) {
            Some(job) => Command::Dispatch(Msg::EtlRequested(job)),
            None => Command::Unknown(line.to_string()),
        },
        ("help" | "?", _) => Command::Help,
        ("quit" | "exit" | "q", _) => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

fn resolve_country(input: &str) -> String {
    input
        .parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| COUNTRY_OPTIONS.get(index))
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| input.to_string())
}

fn parse_job(name: &str) -> Option<EtlJob> {
    match name.to_ascii_lowercase().as_str() {
        "lastfm" | "last.fm" | "a" => Some(EtlJob::Lastfm),
        "musicbrainz" | "mb" | "b" => Some(EtlJob::Musicbrainz),
        _ => None,
    }
}

pub fn help_text() -> String {
    let mut out = String::from("Commands:\n");
    out.push_str("  country <name|#>   choose the country to chart\n");
    out.push_str("  compare <name|#>   choose the country to compare with\n");
    out.push_str("  etl lastfm         run the Last.fm ETL for the chosen country\n");
    out.push_str("  etl musicbrainz    run the MusicBrainz ETL\n");
    out.push_str("  help               show this text\n");
    out.push_str("  quit               exit\n");
    out.push_str("Countries:");
    for (index, option) in COUNTRY_OPTIONS.iter().enumerate() {
        out.push_str(&format!(" {}) {}", index + 1, option.label));
    }
    out.push('\n');
    out
}
