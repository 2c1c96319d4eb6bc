use std::{
    io::{self, Write},
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    str::FromStr,
};

use clap::{Parser, Subcommand};

use crate::{
    context::Context,
    output::Output,
    render::render_site,
    server::ServerState,
    templates::setup_template_engine,
};

mod config;
mod context;
mod functions;
mod output;
mod page;
mod records;
mod render;
mod section;
mod server;
mod site;
mod templates;
mod tile;

#[derive(Parser, Debug)]
#[command(name = "Sitemap Wall")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Site home, holding config.toml, the sitemap and static files
    #[arg(default_value = ".")]
    path: String,
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rendered page to stdout
    Render,
    /// Write index.html and the static files into a directory
    Build {
        #[arg(default_value = "public")]
        output_dir: String,
    },
    /// Serve the page over HTTP, re-reading the sitemap on every request
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.verbose);

    tracing::debug!(?args, "starting");

    let home = PathBuf::from_str(&args.path)?;
    let context = Context::new(home)?;
    let tera = setup_template_engine(&context)?;

    match args.command {
        Command::Render => {
            let html = render_site(&context, &tera)?;
            io::stdout().lock().write_all(html.as_bytes())?;
        }
        Command::Build { output_dir } => {
            let output = Output::new(context.absolute(output_dir));
            output::build(&context, &tera, &output)?;
        }
        Command::Serve { host, port } => {
            let state = ServerState { context, tera };
            server::serve(state, SocketAddr::new(host, port)).await?;
        }
    }

    Ok(())
}
