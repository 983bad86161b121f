mod cli;

use std::time::Duration;

use clap::Parser;
use eyre::{eyre, WrapErr};
use serde_json::Value;

use ltcrpc_core::amount;
use ltcrpc_core::rpc::{ConnectionConfig, LitecoinRpc, RpcClient, TransportOptions};
use ltcrpc_core::{ErrorKind, RpcError};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    match &args.command {
        Command::ToSat { amount: raw } => {
            let value = amount::parse_amount(raw)?;
            println!("{}", amount::to_minor_units(value)?);
        }
        Command::ToLtc { sats } => println!("{}", amount::to_decimal(*sats)),
        Command::Fixed {
            amount: raw,
            precision,
        } => {
            let value = amount::parse_amount(raw)?;
            println!("{}", amount::truncate_to_fixed(value, *precision)?);
        }
        Command::Info => {
            let client = build_client(&args)?;
            print_info(&client).await.map_err(|err| {
                eyre!(describe_rpc_error(&client.endpoint(), &err))
                    .wrap_err("while querying node info")
            })?;
        }
        Command::Call {
            method,
            params,
            wallet,
            blocking,
        } => {
            let mut client = build_client(&args)?;
            if let Some(name) = wallet {
                client = client.wallet(name);
            }
            let params: Vec<Value> = params.iter().map(|raw| parse_param(raw)).collect();

            let outcome = if *blocking {
                let blocking_client = client.clone();
                let method = method.clone();
                tokio::task::spawn_blocking(move || blocking_client.call(&method, params))
                    .await
                    .context("blocking RPC task panicked")?
            } else {
                client.call_async(method, params).await
            };

            let response = outcome.map_err(|err| {
                eyre!(describe_rpc_error(&client.endpoint(), &err))
                    .wrap_err(format!("while calling `{method}`"))
            })?;
            println!("{}", render_result(response.result().unwrap_or(&Value::Null)));
        }
    }

    Ok(())
}

fn build_client(args: &Cli) -> eyre::Result<RpcClient> {
    let mut config: ConnectionConfig = args.rpc_url.parse().context("parse --rpc-url")?;
    if let Some(user) = &args.rpc_user {
        config.user = user.clone();
    }
    if let Some(pass) = &args.rpc_pass {
        config.pass = pass.clone();
    }
    config.ca_file = args.ca_file.clone();

    let mut options = TransportOptions::default()
        .with_user_agent(concat!("ltcrpc/", env!("CARGO_PKG_VERSION")));
    if let Some(secs) = args.timeout_secs {
        options = options.with_timeout(Duration::from_secs(secs));
    }

    RpcClient::new(config, options).context("build RPC client")
}

async fn print_info(rpc: &dyn LitecoinRpc) -> Result<(), RpcError> {
    let chain = rpc.get_blockchain_info().await?;
    let network = rpc.get_network_info().await?;

    tracing::info!(chain = %chain.chain, blocks = chain.blocks, "connected to litecoind");
    if chain.pruned {
        tracing::warn!("node is pruned; old blocks may be unavailable");
    }

    println!("chain:        {}", chain.chain);
    println!("blocks:       {} (headers {})", chain.blocks, chain.headers);
    println!("best block:   {}", chain.best_block_hash);
    println!(
        "sync:         {:.2}%",
        chain.verification_progress * 100.0
    );
    println!("node:         {} ({})", network.subversion, network.version);
    println!("connections:  {}", network.connections);
    Ok(())
}

/// Parse a command-line parameter as JSON, falling back to a plain string so
/// addresses and labels need no quoting.
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

/// Strings print bare, like `litecoin-cli`; everything else as pretty JSON.
fn render_result(result: &Value) -> String {
    match result {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn describe_rpc_error(endpoint: &str, err: &RpcError) -> String {
    let mut lines = vec![
        format!("RPC request to `{endpoint}` failed"),
        format!("error: {err}"),
    ];

    match (err.kind(), err.code()) {
        (ErrorKind::Transport, Some(401 | 403)) => lines.push(
            "hint: authentication failed; verify --rpc-user/--rpc-pass or the URL credentials"
                .into(),
        ),
        (ErrorKind::Transport, None) if matches!(err, RpcError::Transport { .. }) => lines.push(
            "hint: the node could not be reached; verify the URL, that litecoind is running \
             with -server, and rpcallowip"
                .into(),
        ),
        (ErrorKind::DaemonReported, Some(-18 | -19)) => lines.push(
            "hint: pick a loaded wallet with --wallet <name> (see `listwallets`)".into(),
        ),
        (ErrorKind::DaemonReported, Some(-32601)) => lines.push(
            "hint: unknown method; the node may be built without wallet support".into(),
        ),
        _ => {}
    }

    lines.join("\n")
}
