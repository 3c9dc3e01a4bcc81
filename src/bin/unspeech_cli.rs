//! UnSpeech CLI — 请求描述符预览、音色列表与语音合成的命令行工具
//!
//! Usage:
//!   unspeech-cli params speech <model>                 Print the speech request descriptor
//!   unspeech-cli params voices <backend> [--region R]  Print the voice request descriptor
//!   unspeech-cli voices <backend> [--region R]         List voices from the gateway
//!   unspeech-cli speech <model> --voice V --input T --out F
//!   unspeech-cli backends                              List known backend ids

use anyhow::{anyhow, bail, Context};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unspeech_rust::{
    create_unspeech, generate_speech, list_voices, AudioFormat, Backend, Capabilities,
    ClientConfig, HttpTransport, RequestParams, SpeechRequest, UnSpeechOptions, VoiceOptions,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "params" => cmd_params(&args[2..]),
        "voices" => cmd_voices(&args[2..]).await,
        "speech" => cmd_speech(&args[2..]).await,
        "backends" => {
            cmd_backends();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!(
        r#"unspeech-cli — UnSpeech 命令行工具

USAGE:
    unspeech-cli <COMMAND> [OPTIONS]

COMMANDS:
    params speech <model> [--extra-body <json>]
                                Print the speech request descriptor
    params voices <backend> [--region <r>] [--app-id <id>]
                                Print the voice-listing request descriptor
    voices <backend> [--region <r>] [--app-id <id>]
                                List voices available on the gateway
    speech <model> --voice <v> --input <text> --out <file> [--format <f>]
                                Synthesize speech and write the audio file
    backends                    List known backend ids
    version                     Show version information
    help                        Show this help message

GLOBAL OPTIONS:
    --config <path>             YAML client config (api_key, base_url, timeout_secs, proxy_url)

ENVIRONMENT:
    UNSPEECH_API_KEY            Gateway API key
    UNSPEECH_BASE_URL           Gateway base URL (default http://localhost:5933/v1/)
    UNSPEECH_HTTP_TIMEOUT_SECS  HTTP timeout in seconds
    UNSPEECH_PROXY_URL          HTTP proxy
    RUST_LOG                    Log filter (default info)"#
    );
}

fn cmd_version() {
    println!("unspeech-cli {}", env!("CARGO_PKG_VERSION"));
}

fn cmd_backends() {
    for backend in Backend::ALL {
        println!("{backend}");
    }
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// First argument that is neither a flag nor a flag's value.
fn positional(args: &[String]) -> Option<&str> {
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        if arg.starts_with("--") {
            skip = true;
            continue;
        }
        return Some(arg);
    }
    None
}

fn load_config(args: &[String]) -> anyhow::Result<ClientConfig> {
    match flag_value(args, "--config") {
        Some(path) => ClientConfig::from_path(PathBuf::from(path))
            .with_context(|| format!("loading config from {path}")),
        None => Ok(ClientConfig::from_env()),
    }
}

fn gateway(config: &ClientConfig, backend: &str) -> anyhow::Result<Capabilities<UnSpeechOptions, VoiceOptions>> {
    let api_key = config.resolve_api_key(backend)?;
    Ok(create_unspeech(api_key, config.base_url.clone()))
}

/// Like [`gateway`], but a missing key only warns; descriptors are printed, not sent.
fn offline_gateway(config: &ClientConfig, backend: &str) -> Capabilities<UnSpeechOptions, VoiceOptions> {
    let api_key = config.resolve_api_key(backend).unwrap_or_else(|e| {
        tracing::warn!("{e}");
        String::new()
    });
    create_unspeech(api_key, config.base_url.clone())
}

fn voice_options(args: &[String]) -> anyhow::Result<VoiceOptions> {
    let backend: Backend = positional(args)
        .ok_or_else(|| anyhow!("missing <backend>"))?
        .parse()?;
    let region = || flag_value(args, "--region").unwrap_or_default().to_string();
    let app_id = || flag_value(args, "--app-id").unwrap_or_default().to_string();

    Ok(match backend {
        Backend::ElevenLabs => VoiceOptions::ElevenLabs,
        Backend::Koemotion => VoiceOptions::Koemotion,
        Backend::OpenAI => VoiceOptions::OpenAI,
        Backend::Deepgram => VoiceOptions::Deepgram,
        Backend::Alibaba => VoiceOptions::Alibaba,
        Backend::Aliyun => VoiceOptions::Aliyun,
        Backend::Microsoft => VoiceOptions::Microsoft { region: region() },
        Backend::Azure => VoiceOptions::Azure { region: region() },
        Backend::Volcengine => VoiceOptions::Volcengine { app_id: app_id() },
        Backend::Volcano => VoiceOptions::Volcano { app_id: app_id() },
    })
}

fn print_params(params: &RequestParams) -> anyhow::Result<()> {
    let mut redacted = params.clone();
    if !redacted.api_key.is_empty() {
        redacted.api_key = "<redacted>".to_string();
    }
    println!("{}", serde_json::to_string_pretty(&redacted)?);
    Ok(())
}

fn cmd_params(args: &[String]) -> anyhow::Result<()> {
    let config = load_config(args)?;
    match args.first().map(String::as_str) {
        Some("speech") => {
            let rest = &args[1..];
            let model = positional(rest).ok_or_else(|| anyhow!("missing <model>"))?;
            let (backend, _) = Backend::from_model(model)?;
            let extra_body = match flag_value(rest, "--extra-body") {
                Some(raw) => Some(
                    serde_json::from_str::<Map<String, Value>>(raw)
                        .context("--extra-body must be a JSON object")?,
                ),
                None => None,
            };
            let options = UnSpeechOptions { extra_body };
            let params = offline_gateway(&config, backend.id()).speech(model, Some(&options))?;
            print_params(&params)
        }
        Some("voices") => {
            let options = voice_options(&args[1..])?;
            let params = offline_gateway(&config, options.backend().id()).voice(Some(&options))?;
            print_params(&params)
        }
        Some(other) => bail!("unknown params target '{other}' (expected speech or voices)"),
        None => bail!("usage: unspeech-cli params <speech|voices> ..."),
    }
}

async fn cmd_voices(args: &[String]) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let options = voice_options(args)?;
    let params = gateway(&config, options.backend().id())?.voice(Some(&options))?;

    let transport = HttpTransport::from_config(&config)?;
    let voices = list_voices(&transport, &params).await?;
    for voice in &voices {
        let languages: Vec<&str> = voice.languages.iter().map(|l| l.code.as_str()).collect();
        println!("{:<40} {:<30} {}", voice.id, voice.name, languages.join(","));
    }
    eprintln!("{} voice(s)", voices.len());
    Ok(())
}

async fn cmd_speech(args: &[String]) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let model = positional(args).ok_or_else(|| anyhow!("missing <model>"))?;
    let voice = flag_value(args, "--voice").ok_or_else(|| anyhow!("missing --voice"))?;
    let input = flag_value(args, "--input").ok_or_else(|| anyhow!("missing --input"))?;
    let out = flag_value(args, "--out").ok_or_else(|| anyhow!("missing --out"))?;

    let (backend, _) = Backend::from_model(model)?;
    let params = gateway(&config, backend.id())?.speech(model, None)?;

    let mut request = SpeechRequest::new(input, voice);
    if let Some(format) = flag_value(args, "--format") {
        let format: AudioFormat = format.parse().context("--format")?;
        request = request.with_format(format);
    }

    let transport = HttpTransport::from_config(&config)?;
    let audio = generate_speech(&transport, &params, &request).await?;
    tokio::fs::write(out, &audio.data)
        .await
        .with_context(|| format!("writing {out}"))?;
    println!("wrote {} bytes ({}) to {out}", audio.len(), audio.format.mime_type());
    Ok(())
}
