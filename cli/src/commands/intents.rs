//! # IntentBot Intents Command
//!
//! File: cli/src/commands/intents.rs
//!
//! Lists the intents catalog with the emoji each tag reacts with. `--train`
//! additionally fits the classifier, which is the quickest way to check that
//! a catalog edit still starts up.
//!
use crate::bot::intents::{self, Intent};
use crate::bot::reactions::Reactions;
use crate::bot::Chatbot;
use crate::core::config::{self, Overrides};
use crate::core::error::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
pub struct IntentsArgs {
    /// Train the classifier and print a summary of the fitted model.
    #[arg(long)]
    pub train: bool,
}

pub fn handle_intents(args: IntentsArgs, overrides: &Overrides) -> Result<()> {
    let config = config::load_config(overrides)?;

    if args.train {
        let bot = Chatbot::from_config(&config)?;
        println!("{}", catalog_lines(bot.intents(), bot.reactions()));
        let model = bot.model();
        println!(
            "✅ Trained on {} tags, {} terms, {} epochs.",
            model.classes().len(),
            model.vocabulary_size(),
            model.epochs_run()
        );
        return Ok(());
    }

    let catalog = intents::load(Path::new(&config.bot.intents_file))?;
    info!("Loaded {} intents", catalog.len());
    println!(
        "{}",
        catalog_lines(&catalog, &Reactions::with_overrides(&config.reactions))
    );
    Ok(())
}

fn catalog_lines(catalog: &[Intent], reactions: &Reactions) -> String {
    catalog
        .iter()
        .map(|intent| {
            format!(
                "{} {}: {} patterns, {} responses",
                reactions.for_tag(&intent.tag),
                intent.tag,
                intent.patterns.len(),
                intent.responses.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
