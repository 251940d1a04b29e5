use mediachrome_core::{
    catalog,
    config::load_config,
    embed::{EmbedRenderer, EmbedVariant},
    logging::init_logging,
    Block,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "mediachrome")]
#[command(about = "Render embed blocks inside media-chrome players", long_about = None)]
struct Args {
    /// Config file (YAML, TOML or JSON)
    #[arg(long, env = "MEDIACHROME_CONFIG_PATH")]
    config: Option<String>,

    /// theme.json providing settings.custom.mediaChrome.presets
    #[arg(long, env = "MEDIACHROME_THEME")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render parsed block JSON ({blockName, attrs, innerHTML}, or an array of them)
    Render {
        /// Block JSON file, "-" for stdin
        #[arg(long, default_value = "-")]
        block: String,

        /// Print only the media controller markup, without the figure wrapper
        #[arg(long)]
        markup_only: bool,
    },

    /// Print the control bar component catalog as JSON
    Catalog,

    /// List registered providers
    Providers,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(theme) = args.theme {
        config.presets.theme_json = Some(theme);
    }

    init_logging(&config.logging)?;

    let renderer = EmbedRenderer::from_config(&config).context("Failed to build embed renderer")?;
    debug!(?renderer, "Renderer ready");

    match args.command {
        Command::Render { block, markup_only } => {
            for block in read_blocks(&block)? {
                let html = if markup_only {
                    render_markup_only(&renderer, &block)?
                } else {
                    renderer.render_block(&block)
                };
                println!("{html}");
            }
        }
        Command::Catalog => {
            println!("{}", serde_json::to_string_pretty(&catalog::schema())?);
        }
        Command::Providers => {
            for provider in renderer.registry().iter() {
                println!("{}\t{}\t{}", provider.slug(), provider.tag(), provider.kind());
            }
        }
    }

    Ok(())
}

/// Read one block or an array of blocks from a file or stdin
fn read_blocks(source: &str) -> Result<Vec<Block>> {
    let input = if source == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read block JSON from stdin")?;
        input
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read block JSON from {source}"))?
    };

    let value: serde_json::Value =
        serde_json::from_str(&input).context("Block input is not valid JSON")?;

    let values = match value {
        serde_json::Value::Array(values) => values,
        value => vec![value],
    };

    // A block that does not parse is skipped; the rest still render
    let blocks: Vec<Block> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(block) => Some(block),
            Err(e) => {
                warn!("Skipping block #{index}: {e}");
                None
            }
        })
        .collect();

    info!("Rendering {} block(s) from {source}", blocks.len());
    Ok(blocks)
}

fn render_markup_only(renderer: &EmbedRenderer, block: &Block) -> Result<String> {
    let Some(variant) = block
        .attrs
        .embed_type
        .as_deref()
        .and_then(EmbedVariant::from_embed_type)
    else {
        bail!(
            "Block has unsupported embed type: {}",
            block.attrs.embed_type.as_deref().unwrap_or("<none>")
        );
    };

    Ok(renderer.render_embed(&block.attrs, variant))
}
