use clap::Parser;
use encyclo::application::{
    init::init, list_entries, BodySource, ConfigService, RandomEntryService, SearchService,
    ShowEntryService, WriteEntryService,
};
use encyclo::cli::{format_body, format_entry, format_title_list, BodyArgs, Cli, Commands};
use encyclo::domain::SearchResult;
use encyclo::error::EncycloError;
use encyclo::infrastructure::FileSystemStore;
use std::io::IsTerminal;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn body_source(args: BodyArgs) -> BodySource {
    match (args.body, args.file) {
        (Some(text), _) => BodySource::Text(text),
        (None, Some(path)) => BodySource::File(path),
        (None, None) if std::io::stdin().is_terminal() => BodySource::Editor,
        (None, None) => BodySource::Stdin,
    }
}

fn run(cli: Cli) -> Result<(), EncycloError> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::List => {
            let store = FileSystemStore::discover()?;
            print!("{}", format_title_list(&list_entries(&store)?));
            Ok(())
        }
        Commands::Show { title, html } => {
            let service = ShowEntryService::new(FileSystemStore::discover()?);
            let entry = service.execute(&title)?;
            println!("{}", format_body(&entry.body, html));
            Ok(())
        }
        Commands::Search { query, html } => {
            let service = SearchService::new(FileSystemStore::discover()?);
            match service.execute(&query)? {
                SearchResult::ExactHit(entry) => {
                    println!("{}", format_body(&entry.body, html));
                    Ok(())
                }
                SearchResult::Candidates(titles) => {
                    print!("{}", format_title_list(&titles));
                    Ok(())
                }
                SearchResult::NoMatch => Err(EncycloError::EntryNotFound(query)),
            }
        }
        Commands::New { title, source } => {
            let service = WriteEntryService::new(FileSystemStore::discover()?);
            service.create(&title, &body_source(source))?;
            println!("Created {}", title);
            Ok(())
        }
        Commands::Edit { title, source } => {
            let service = WriteEntryService::new(FileSystemStore::discover()?);
            service.edit(&title, &body_source(source))?;
            println!("Saved {}", title);
            Ok(())
        }
        Commands::Random { html } => {
            let service = RandomEntryService::new(FileSystemStore::discover()?);
            let entry = service.execute()?;
            println!("{}", format_entry(&entry, html));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemStore::discover()?);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: encyclo config [--list | <key> [<value>]]");
                println!("Valid keys: editor, created");
                Ok(())
            }
        }
    }
}
