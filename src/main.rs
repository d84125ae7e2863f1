use crorepati::Game;

fn main() {
    if let Err(e) = Game::new().run() {
        eprintln!("Error running game: {}", e);
        std::process::exit(1);
    }
}
