use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use rand::distributions::Alphanumeric;
use sql_broker::BrokerError;
use sql_broker::mysql::{MySqlSettings, MySqlSource};
use sql_broker::provision::Provisioner;
use sql_broker::scripts::ScriptRunner;

use crate::args::Command;
use crate::config::CliConfig;

pub async fn dispatch(command: Command) -> Result<(), BrokerError> {
    match command {
        Command::Scaffold { config } => scaffold(&config).await,
        Command::Run { script, config } => run(&script, &config).await,
        Command::Build {
            database,
            user,
            config,
        } => build(&database, &user, &config).await,
        Command::Adduser { user, config } => adduser(&user, &config).await,
        Command::Grant {
            user,
            database,
            role,
            config,
        } => grant(&user, &database, &role, &config).await,
    }
}

async fn scaffold(config_path: &Path) -> Result<(), BrokerError> {
    let config = CliConfig::load(config_path)?;
    let runner = runner(&config.pool).await?;
    runner.apply_sections(&config.cwd, &config.scripts).await?;
    println!("Database scaffolding complete.");
    Ok(())
}

async fn run(script: &Path, config_path: &Path) -> Result<(), BrokerError> {
    let config = CliConfig::load(config_path)?;
    let runner = runner(&config.pool).await?;
    runner.run_file(script).await
}

async fn build(database: &str, user: &str, config_path: &Path) -> Result<(), BrokerError> {
    let config = CliConfig::load(config_path)?;
    let provisioner = provisioner(&config).await?;
    let password = generate_password(12);
    provisioner.build_database(database, user, &password).await?;
    println!("Database build complete.");
    println!("Default user: {user}");
    println!("Default password: {password}");
    Ok(())
}

async fn adduser(user: &str, config_path: &Path) -> Result<(), BrokerError> {
    let config = CliConfig::load(config_path)?;
    let provisioner = provisioner(&config).await?;
    let password = prompt_password()?;
    provisioner.add_user(user, &password).await?;
    println!("User {user} created.");
    Ok(())
}

async fn grant(
    user: &str,
    database: &str,
    role: &str,
    config_path: &Path,
) -> Result<(), BrokerError> {
    let config = CliConfig::load(config_path)?;
    let provisioner = provisioner(&config).await?;
    provisioner.grant(user, database, role).await?;
    println!("Granted {role} on {database} to {user}.");
    Ok(())
}

async fn runner(settings: &MySqlSettings) -> Result<ScriptRunner, BrokerError> {
    let source = MySqlSource::connect(settings).await?;
    Ok(ScriptRunner::new(Arc::new(source)))
}

async fn provisioner(config: &CliConfig) -> Result<Provisioner, BrokerError> {
    let source = MySqlSource::connect(config.admin_pool()?).await?;
    Ok(Provisioner::new(Arc::new(source), config.scope()))
}

fn generate_password(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

fn prompt_password() -> Result<String, BrokerError> {
    let first = read_line("Password: ")?;
    let second = read_line("Confirm password: ")?;
    if first != second {
        return Err(BrokerError::Config("passwords do not match".to_string()));
    }
    if first.is_empty() {
        return Err(BrokerError::Config("password must not be empty".to_string()));
    }
    Ok(first)
}

fn read_line(prompt: &str) -> Result<String, BrokerError> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
