use std::io;
use std::process::ExitCode;
use wordfind::cli::{CliInterface, parse_cli};
use wordfind::logging::init_logging;
use wordfind::{GameOutcome, PendingDictionary, WordFinder, WordbankSource, game_loop};

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let source = WordbankSource::resolve(cli.wordbank_path.clone());
    log::info!("Word list source: {source}");
    let pending = PendingDictionary::from_source(source);
    let mut finder = WordFinder::new(pending, cli.session_config());

    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock());
    match game_loop(&mut finder, &mut interface) {
        GameOutcome::LoadFailed => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
