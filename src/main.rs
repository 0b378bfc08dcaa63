use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sdl2_link::abi::TypeRegistry;
use sdl2_link::config::BackendKind;
use sdl2_link::core::init_logging;
use sdl2_link::facade::from_c_string;
use sdl2_link::sys::SDL_version;
use sdl2_link::{LinkConfig, LinkResult, Loader, SubLibrary};

#[derive(Parser)]
#[command(name = "sdl2_link")]
#[command(about = "Inspect and load the SDL2 library family", long_about = None)]
struct Cli {
    /// Config file (TOML or JSON); defaults to the usual search locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra sub-library to load, e.g. SDL2_ttf (repeatable)
    #[arg(long = "with", global = true)]
    with: Vec<String>,

    /// Override the configured backend (libloading, process, none)
    #[arg(long, global = true)]
    backend: Option<BackendKind>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the libraries and print the linked SDL version and namespace statistics
    Info,
    /// Compare computed layouts with the compiler's layouts of the Rust mirrors
    Layouts,
    /// List the declared functions of a sub-library
    Symbols {
        /// Logical library name, e.g. SDL2_mixer
        library: String,
    },
}

fn load_config(cli: &Cli) -> LinkResult<LinkConfig> {
    let mut config = match &cli.config {
        Some(path) if path.extension().is_some_and(|ext| ext == "json") => {
            LinkConfig::from_json_file(path)?
        }
        Some(path) => LinkConfig::from_toml_file(path)?,
        None => LinkConfig::load_or_default(),
    };
    config.apply_env_overrides();

    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    for name in &cli.with {
        if !config.extensions.contains(name) {
            config.extensions.push(name.clone());
        }
    }
    config.validate()?;
    Ok(config)
}

fn info(config: &LinkConfig) -> LinkResult<()> {
    let ns = Loader::from_config(config)?.load()?;

    let get_version = ns.function::<unsafe extern "C" fn(*mut SDL_version)>("SDL_GetVersion")?;
    let mut version: SDL_version = bytemuck::Zeroable::zeroed();
    unsafe { get_version(&mut version) };

    let revision = match ns.function::<unsafe extern "C" fn() -> *const std::os::raw::c_char>("SDL_GetRevision") {
        Ok(get_revision) => unsafe { from_c_string(get_revision()) }.unwrap_or_default(),
        Err(_) => String::new(),
    };

    tracing::info!(target: "sdl2_link", "Linked SDL {}.{}.{}", version.major, version.minor, version.patch);

    let stats = ns.stats();
    println!("SDL {}.{}.{} {}", version.major, version.minor, version.patch, revision);
    println!(
        "libraries: {}",
        ns.libraries().iter().map(|l| l.name()).collect::<Vec<_>>().join(", ")
    );
    println!(
        "entries: {} ({} functions, {} constants, {} types)",
        ns.len(),
        stats.functions,
        stats.constants,
        stats.types
    );
    Ok(())
}

fn layouts() -> LinkResult<bool> {
    let mut registry = TypeRegistry::new();
    for library in SubLibrary::ALL {
        library.register_types(&mut registry)?;
    }

    let mut problems = sdl2_link::sys::check_core_layouts(&registry)?;
    problems.extend(sdl2_link::sys::check_joystick_layouts(&registry)?);
    problems.extend(sdl2_link::sys::check_mixer_layouts(&registry)?);

    for name in registry.names() {
        let layout = registry.layout(name)?;
        println!("{:<40} size {:>4} align {:>2}", name, layout.size, layout.align);
    }
    for problem in &problems {
        eprintln!("mismatch: {}", problem);
    }
    Ok(problems.is_empty())
}

fn symbols(library: &str) -> LinkResult<()> {
    let library: SubLibrary = library.parse()?;
    for signature in library.functions() {
        println!("{}", signature);
    }
    Ok(())
}

fn run(cli: &Cli) -> LinkResult<bool> {
    match &cli.command {
        Commands::Info => {
            let config = load_config(cli)?;
            init_logging(&config.logging);
            info(&config)?;
            Ok(true)
        }
        Commands::Layouts => layouts(),
        Commands::Symbols { library } => symbols(library).map(|_| true),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("sdl2_link: {}", e);
            ExitCode::FAILURE
        }
    }
}
