use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process;
use tracing_subscriber::EnvFilter;
use utilcss::{
    default_trie, generate_with_base_theme_and_components, generate_with_components,
    ComponentLibrary, Source, ThemeConfig, UtilCssError, UtilCssResult,
};

const USAGE: &str = "\
Usage: utilcss [--theme FILE] [--components DIR] [--base] [--classes LIST] [FILE...]

Reads HTML from each FILE (or stdin when FILE is `-`) and writes CSS to stdout.

Options:
  --theme FILE       YAML theme overrides merged onto the defaults
  --components DIR   extra component fragments (*.css, named by file stem)
  --base             also emit the theme and base layers
  --classes LIST     class tokens to compile, comma or space separated
  -h, --help         print this message

Environment:
  UTILCSS_DEBUG=1    log classes that resolve to nothing
  RUST_LOG           tracing filter (overrides the default)";

#[derive(Debug, Default, PartialEq)]
struct Options {
    theme: Option<String>,
    components: Option<String>,
    base: bool,
    classes: Vec<String>,
    files: Vec<String>,
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return;
    }

    let result = parse_args(&args).and_then(|options| run(&options));
    match result {
        Ok(css) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(css.as_bytes()) {
                eprintln!("✗ failed to write output: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("✗ {e}");
            if matches!(e, UtilCssError::Usage(_)) {
                eprintln!();
                eprintln!("{USAGE}");
            }
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let fallback = if utilcss::debug_enabled() {
        "utilcss=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> UtilCssResult<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| UtilCssError::Usage(format!("{flag} needs a value")))
        };
        match arg.as_str() {
            "--theme" => options.theme = Some(value("--theme")?),
            "--components" => options.components = Some(value("--components")?),
            "--base" => options.base = true,
            "--classes" => {
                let list = value("--classes")?;
                options.classes.extend(
                    list.split(|c: char| c == ',' || c.is_whitespace())
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                );
            }
            flag if flag.starts_with("--") => {
                return Err(UtilCssError::Usage(format!("unknown option '{flag}'")));
            }
            file => options.files.push(file.to_string()),
        }
    }
    if options.files.is_empty() && options.classes.is_empty() {
        return Err(UtilCssError::Usage("no input files or --classes given".to_string()));
    }
    Ok(options)
}

fn read_input(path: &str) -> UtilCssResult<String> {
    if path == "-" {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .map_err(|e| UtilCssError::Io {
                path: "<stdin>".to_string(),
                message: e.to_string(),
            })?;
        return Ok(html);
    }
    fs::read_to_string(path).map_err(|e| UtilCssError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn run(options: &Options) -> UtilCssResult<String> {
    let theme = match &options.theme {
        Some(path) => ThemeConfig::from_file(path)?,
        None => ThemeConfig::default(),
    };
    let components = match &options.components {
        Some(dir) => ComponentLibrary::load_dir(dir)?,
        None => ComponentLibrary::builtin(),
    };

    let mut tokens = options.classes.clone();
    for file in &options.files {
        tokens.extend(utilcss::extract_classes(&read_input(file)?));
    }
    let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
    tracing::debug!(tokens = tokens.len(), files = options.files.len(), "compiling");

    let source = Source::Classes(&tokens);
    let trie = default_trie();
    Ok(if options.base {
        generate_with_base_theme_and_components(source, &theme, trie, &components)
    } else {
        generate_with_components(source, &theme, trie, &components)
    })
}
