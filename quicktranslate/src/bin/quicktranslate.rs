use clap::{Arg, Command};
use quicktranslate::{
    DeepTranslateProvider, MachineTranslator, MockMode, MockTranslator, RawTranslateRequest,
    TranslateService, supported_languages,
};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("quicktranslate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate text through the Deep Translate API")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required_unless_present("list-languages")
                .index(1),
        )
        .arg(
            Arg::new("target-lang")
                .help("Target language code (e.g., fr, es, ar)")
                .required_unless_present("list-languages")
                .index(2),
        )
        .arg(
            Arg::new("source-lang")
                .long("source")
                .short('s')
                .help("Source language code (default: en)")
                .default_value("en"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of the Deep Translate API")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show the raw provider output as well")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .short('l')
                .help("Print the supported language codes and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-languages") {
        for lang in supported_languages() {
            println!("{}\t{}", lang.code, lang.name);
        }
        return Ok(());
    }

    let text = matches.get_one::<String>("text").cloned();
    let target_lang = matches.get_one::<String>("target-lang").cloned();
    let source_lang = matches.get_one::<String>("source-lang").cloned();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    // Logs go to stderr so stdout only carries the translation
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" })
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let translator: Arc<dyn MachineTranslator> = if use_mock {
        Arc::new(MockTranslator::new(MockMode::NoOp))
    } else {
        if env::var("RAPIDAPI_KEY").is_err() {
            eprintln!("❌ RAPIDAPI_KEY environment variable not set");
            eprintln!("   Set it with: export RAPIDAPI_KEY=your_api_key");
            eprintln!("   Or use --mock to use mock translator");
            return Err("Missing API key".into());
        }
        Arc::new(DeepTranslateProvider::from_env()?)
    };

    if verbose {
        println!(
            "🌍 {} → {} via {}",
            source_lang.as_deref().unwrap_or_default(),
            target_lang.as_deref().unwrap_or_default(),
            translator.provider_name()
        );
    }

    let service = TranslateService::new(translator);
    let response = match service
        .handle(RawTranslateRequest {
            text,
            source_lang,
            target_lang,
        })
        .await
    {
        Ok(response) => response,
        Err(e) => {
            eprintln!("❌ {}", e);
            if let Some(details) = e.details() {
                eprintln!("   {}", details);
            }
            return Err(e.into());
        }
    };

    if verbose && response.original_api_text != response.translated_text {
        println!("📝 Provider text: {}", response.original_api_text);
    }
    println!("{}", response.translated_text);

    Ok(())
}
