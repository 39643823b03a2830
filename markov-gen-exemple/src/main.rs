use markov_gen_core::{CharInput, CharacterStrategy, MarkovChain, WordStrategy, generate_words};

const SAMPLE: [&str; 4] = [
    "the quick brown fox jumps over the lazy dog",
    "the lazy dog sleeps in the sun all day long",
    "a quick brown cat jumps over the sleeping dog",
    "the sun sets over the quick river and the lazy hills",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log level is controlled through RUST_LOG (ex. RUST_LOG=debug)
    env_logger::init();

    // Every command-line argument is a source, the sample text is used otherwise
    let args: Vec<String> = std::env::args().skip(1).collect();
    let sources: Vec<String> = if args.is_empty() {
        SAMPLE.iter().map(|s| s.to_string()).collect()
    } else {
        args
    };
    log::info!("Training on {} sources", sources.len());

    // Shorthand: word strategy, default order (3)
    println!("Shorthand: {}", generate_words(sources.clone())?);

    // Word chain of order 1, capped at 12 extension steps
    let mut words: MarkovChain<String> = sources.iter().cloned().collect();
    words.train(WordStrategy::default(), Some(1))?;
    for i in 0..5 {
        println!("Words {}: {}", i + 1, words.generate(Some(12))?);
    }

    // Same sources, retrained at character level
    let mut characters: MarkovChain<String> = MarkovChain::new();
    characters.extend(sources);
    characters.train(CharacterStrategy, Some(4))?;
    for i in 0..5 {
        println!("Characters {}: {}", i + 1, characters.generate(Some(60))?);
    }

    // Text and numbers mixed in the same source
    let mut codes: MarkovChain<Vec<CharInput>> = MarkovChain::new();
    for n in [1024i64, 2048, 4096, 8192] {
        codes.add(vec![CharInput::from("unit-"), CharInput::from(n)]);
    }
    codes.train(CharacterStrategy, Some(2))?;
    println!("Code: {}", codes.generate(None)?);

    Ok(())
}
