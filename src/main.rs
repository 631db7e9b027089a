use clap::Parser;
use polly_client::app::walkthrough::resolve_credentials;
use polly_client::utils::error::ErrorSeverity;
use polly_client::utils::{logger, validation::Validate};
use polly_client::{
    AccessToken, CliConfig, Command, Credentials, PollApi, PollClient, PollDraft, PollError,
    Result, Settings, TomlConfig, Walkthrough,
};
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_command(client: &PollClient, settings: &Settings, command: Command) -> Result<()> {
    match command {
        Command::Register { username, password } => {
            let user = client.register(&Credentials::new(username, password)).await?;
            print_json(&user)
        }
        Command::Login { username, password } => {
            let token = client.login(&Credentials::new(username, password)).await?;
            print_json(&serde_json::json!({ "access_token": token.as_str() }))
        }
        Command::List { skip, limit } => {
            let polls = client.list_polls(skip, limit).await?;
            print_json(&polls)
        }
        Command::Create {
            question,
            options,
            token,
        } => {
            let poll = client
                .create_poll(&PollDraft::new(question, options), &AccessToken::new(token))
                .await?;
            print_json(&poll)
        }
        Command::Vote {
            poll_id,
            option_id,
            token,
        } => {
            let vote = client
                .vote_on_poll(poll_id, option_id, &AccessToken::new(token))
                .await?;
            print_json(&vote)
        }
        Command::Results { poll_id } => {
            let results = client.get_poll_results(poll_id).await?;
            print_json(&results)
        }
        Command::Delete { poll_id, token } => {
            let status = client.delete_poll(poll_id, &AccessToken::new(token)).await?;
            print_json(&serde_json::json!({ "poll_id": poll_id, "status": status }))
        }
        Command::Walkthrough { username, password } => {
            let credentials = resolve_credentials(
                username,
                password,
                settings.credentials.as_ref(),
                chrono::Utc::now(),
            );
            let report = Walkthrough::new(client.clone()).run(&credentials).await?;
            print_json(&report)
        }
    }
}

fn exit_code(e: &PollError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &PollError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let file_config = match cli.config.as_ref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => fail(&e),
    };
    let settings = Settings::resolve(&cli, file_config.as_ref());

    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let validated = match &file_config {
        Some(file_config) => file_config.validate().and_then(|_| settings.validate()),
        None => settings.validate(),
    };
    if let Err(e) = validated {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        fail(&e);
    }

    let client = match PollClient::new(&settings.base_url) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };
    tracing::debug!("Using polling service at {}", client.base_url());

    if let Err(e) = run_command(&client, &settings, cli.command).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        fail(&e);
    }
}
