use anyhow::Result;
use clap::{Parser, Subcommand};
use deeplinks::config::validate_base;
use deeplinks::links::{format, Endpoints, DEFAULT_APP_LINK_BASE, DEFAULT_UNIVERSAL_LINK_BASE};
use deeplinks::qr::{to_text_qr, to_uri_qr};
use deeplinks::types::{
    Asset, BrowserFields, GeneratedLink, LinkRequest, RampFields, SendNativeFields, SwapFields, TokenType,
};
use deeplinks::{presets, LinkError};
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about = "Generate wallet deeplinks and QR codes", long_about = None)]
struct Cli {
    #[arg(long, env = "DEEPLINK_APP_LINK_BASE", default_value = DEFAULT_APP_LINK_BASE, help = "Base of the app-link host (dapp, buy, send)")]
    app_link_base: String,

    #[arg(long, env = "DEEPLINK_UNIVERSAL_LINK_BASE", default_value = DEFAULT_UNIVERSAL_LINK_BASE, help = "Base of the universal-link host (sell, swap, home)")]
    universal_link_base: String,

    #[arg(long, help = "Output only JSON without any formatting or messages")]
    json: bool,

    #[arg(long, help = "Also render the link as a QR code")]
    qr: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Link(LinkCommand),

    /// List the built-in example links
    Presets,
}

/// Subcommands that each produce a single link.
#[derive(Subcommand)]
enum LinkCommand {
    /// Open the wallet home screen
    Home,

    /// Open a web page in the in-app browser
    Browser {
        #[arg(long, help = "Page to open, e.g. app.uniswap.org or https://revoke.cash")]
        url: String,
    },

    /// Buy crypto with fiat
    Buy {
        #[arg(long, help = "Chain id (e.g. 1 for Ethereum, 59144 for Linea)")]
        chain_id: Option<String>,

        #[arg(long, help = "Token contract address; the native asset if omitted")]
        address: Option<String>,

        #[arg(long, help = "Amount, passed to the wallet as-is")]
        amount: Option<String>,
    },

    /// Sell crypto for fiat
    Sell {
        #[arg(long, help = "Chain id, or a CAIP-2 reference such as solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdpKuc147dw2N9d")]
        chain_id: Option<String>,

        #[arg(long, help = "Token contract address; the native asset if omitted")]
        address: Option<String>,

        #[arg(long, help = "Amount, passed to the wallet as-is")]
        amount: Option<String>,
    },

    /// Send the chain's native asset
    Send {
        #[arg(long, help = "Recipient address (0x...)")]
        recipient: String,

        #[arg(long, help = "Chain id (e.g. 1 for Ethereum)")]
        chain_id: String,

        #[arg(long, help = "Value in whole units, converted to wei (1 = 1e18)")]
        value: Option<String>,
    },

    /// Swap one asset for another
    Swap {
        #[arg(long, help = "Token type of the asset to sell: evm-native, erc20, solana or spl")]
        from_type: Option<TokenType>,

        #[arg(long, help = "Chain id of the asset to sell (EVM types only)")]
        from_chain_id: Option<String>,

        #[arg(long, help = "Token address of the asset to sell (erc20 and spl only)")]
        from_address: Option<String>,

        #[arg(long, help = "Token type of the asset to buy: evm-native, erc20, solana or spl")]
        to_type: Option<TokenType>,

        #[arg(long, help = "Chain id of the asset to buy (EVM types only)")]
        to_chain_id: Option<String>,

        #[arg(long, help = "Token address of the asset to buy (erc20 and spl only)")]
        to_address: Option<String>,

        #[arg(long, help = "Amount of the asset to sell, in human units")]
        amount: Option<String>,

        #[arg(long, help = "Decimals of the asset to sell, used to scale --amount")]
        decimals: Option<String>,
    },

    /// Generate one of the built-in example links
    Preset {
        #[arg(help = "Preset name, see `presets`")]
        name: String,
    },
}

fn asset(token_type: Option<TokenType>, chain_id: Option<String>, address: Option<String>) -> Option<Asset> {
    token_type.map(|token_type| Asset {
        token_type,
        chain_id,
        address,
    })
}

fn build_request(command: LinkCommand) -> Result<LinkRequest> {
    Ok(match command {
        LinkCommand::Home => LinkRequest::Home,
        LinkCommand::Browser { url } => LinkRequest::Browser(BrowserFields { url: Some(url) }),
        LinkCommand::Buy { chain_id, address, amount } => LinkRequest::Buy(RampFields {
            chain_id,
            address,
            amount,
        }),
        LinkCommand::Sell { chain_id, address, amount } => LinkRequest::Sell(RampFields {
            chain_id,
            address,
            amount,
        }),
        LinkCommand::Send { recipient, chain_id, value } => LinkRequest::SendNative(SendNativeFields {
            recipient: Some(recipient),
            chain_id: Some(chain_id),
            value,
        }),
        LinkCommand::Swap {
            from_type,
            from_chain_id,
            from_address,
            to_type,
            to_chain_id,
            to_address,
            amount,
            decimals,
        } => LinkRequest::Swap(SwapFields {
            from: asset(from_type, from_chain_id, from_address),
            to: asset(to_type, to_chain_id, to_address),
            amount,
            decimals,
        }),
        LinkCommand::Preset { name } => presets::find(&name)
            .map(|preset| preset.request)
            .ok_or_else(|| anyhow::anyhow!("Unknown preset {:?}. Run `presets` to list them", name))?,
    })
}

fn print_link(link: &GeneratedLink, json: bool, qr: bool) -> Result<()> {
    if json {
        let mut output = serde_json::json!({ "url": link });
        if qr {
            output["qr"] = serde_json::json!(to_uri_qr(link.as_str(), None)?);
        }
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", link);
        if qr {
            println!("{}", to_text_qr(link.as_str())?);
        }
    }
    Ok(())
}

fn print_presets(endpoints: &Endpoints, json: bool) -> Result<()> {
    let mut listed = Vec::new();
    for preset in presets::all() {
        let link = format(endpoints, &preset.request)?;
        listed.push(serde_json::json!({
            "name": preset.name,
            "description": preset.description,
            "url": link,
        }));
        if !json {
            println!("{:<22} {}\n{:<22} {}", preset.name, preset.description, "", link);
        }
    }
    if json {
        println!("{}", serde_json::to_string(&listed)?);
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging only if not in JSON mode
    if !cli.json {
        tracing_subscriber::fmt::init();
    }

    validate_base("--app-link-base", &cli.app_link_base)?;
    validate_base("--universal-link-base", &cli.universal_link_base)?;
    let endpoints = Endpoints::new(&cli.app_link_base, &cli.universal_link_base);

    let request = match cli.command {
        Commands::Presets => return print_presets(&endpoints, cli.json),
        Commands::Link(command) => build_request(command)?,
    };
    debug!(action = request.action(), "Formatting link request: {:?}", request);

    match format(&endpoints, &request) {
        Ok(link) => print_link(&link, cli.json, cli.qr),
        Err(e) if cli.json => {
            println!("{}", error_json(&e)?);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn error_json(e: &LinkError) -> Result<String> {
    Ok(serde_json::to_string(&serde_json::json!({
        "error": e.kind(),
        "field": e.field(),
        "message": e.to_string(),
    }))?)
}
