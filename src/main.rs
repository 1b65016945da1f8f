use anyhow::{Context, Result};
use hangman_player::cli::{CliReporter, parse_cli};
use hangman_player::game_state::play_game;
use hangman_player::transport::HttpTransport;
use hangman_player::wordbank::default_word_source;

fn main() -> Result<()> {
    env_logger::init();
    let cli = parse_cli();

    let word_source = default_word_source(cli.dictionary_path.as_deref());
    let mut transport = HttpTransport::new(&cli.server_url);
    let mut reporter = CliReporter;

    println!("Starting game...");
    play_game(
        &mut transport,
        &*word_source,
        &cli.player_config(),
        &mut reporter,
    )
    .with_context(|| format!("Hangman game against {} failed", cli.server_url))?;
    Ok(())
}
